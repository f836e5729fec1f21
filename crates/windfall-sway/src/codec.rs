//! i3 IPC framing.
//!
//! Every message is `"i3-ipc"`, a little-endian `u32` payload length, a
//! little-endian `u32` message type, then the JSON payload. Replies reuse the
//! request's type.

use tokio::io::{AsyncRead, AsyncReadExt, AsyncWrite, AsyncWriteExt};
use windfall_common::PlatformError;

pub const MAGIC: &[u8; 6] = b"i3-ipc";
pub const HEADER_LEN: usize = MAGIC.len() + 8;

/// Replies larger than this are treated as a corrupt stream.
const MAX_PAYLOAD_LEN: u32 = 64 * 1024 * 1024;

/// Message types used by windfall.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageType {
    RunCommand,
    GetWorkspaces,
    GetTree,
}

impl MessageType {
    pub fn code(self) -> u32 {
        match self {
            MessageType::RunCommand => 0,
            MessageType::GetWorkspaces => 1,
            MessageType::GetTree => 4,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(MessageType::RunCommand),
            1 => Some(MessageType::GetWorkspaces),
            4 => Some(MessageType::GetTree),
            _ => None,
        }
    }
}

/// Encode one framed message.
pub fn encode(message_type: MessageType, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(HEADER_LEN + payload.len());
    buf.extend_from_slice(MAGIC);
    buf.extend_from_slice(&(payload.len() as u32).to_le_bytes());
    buf.extend_from_slice(&message_type.code().to_le_bytes());
    buf.extend_from_slice(payload);
    buf
}

/// Parse a header into `(payload_len, raw_type)`.
pub fn decode_header(header: &[u8; HEADER_LEN]) -> Result<(u32, u32), PlatformError> {
    if &header[..MAGIC.len()] != MAGIC {
        return Err(PlatformError::Protocol(format!(
            "bad magic {:?}",
            String::from_utf8_lossy(&header[..MAGIC.len()])
        )));
    }
    let len = u32::from_le_bytes([header[6], header[7], header[8], header[9]]);
    let raw_type = u32::from_le_bytes([header[10], header[11], header[12], header[13]]);
    if len > MAX_PAYLOAD_LEN {
        return Err(PlatformError::Protocol(format!(
            "payload of {len} bytes exceeds limit"
        )));
    }
    Ok((len, raw_type))
}

pub async fn write_message<W>(
    writer: &mut W,
    message_type: MessageType,
    payload: &[u8],
) -> Result<(), PlatformError>
where
    W: AsyncWrite + Unpin,
{
    writer
        .write_all(&encode(message_type, payload))
        .await
        .map_err(|e| PlatformError::WindowManagerError(format!("write failed: {e}")))?;
    writer
        .flush()
        .await
        .map_err(|e| PlatformError::WindowManagerError(format!("flush failed: {e}")))
}

/// Read one framed message, returning its raw type and payload.
pub async fn read_message<R>(reader: &mut R) -> Result<(u32, Vec<u8>), PlatformError>
where
    R: AsyncRead + Unpin,
{
    let mut header = [0u8; HEADER_LEN];
    reader
        .read_exact(&mut header)
        .await
        .map_err(|e| PlatformError::WindowManagerError(format!("read failed: {e}")))?;
    let (len, raw_type) = decode_header(&header)?;

    let mut payload = vec![0u8; len as usize];
    reader
        .read_exact(&mut payload)
        .await
        .map_err(|e| PlatformError::WindowManagerError(format!("read failed: {e}")))?;
    Ok((raw_type, payload))
}
