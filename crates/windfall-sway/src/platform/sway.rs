//! sway / i3 IPC client over the compositor's unix socket.

use std::path::{Path, PathBuf};
use std::time::Duration;

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use tokio::net::UnixStream;
use tracing::{debug, info};
use windfall_common::errors::PlatformError;

use super::{Result, WindowManager};
use crate::codec::{self, MessageType};
use crate::command::{render_batch, CommandOutcome, WmCommand};
use crate::tree::{Node, Workspace};

/// Environment variables consulted, in order, when no socket is configured.
const SOCKET_ENV_VARS: [&str; 2] = ["SWAYSOCK", "I3SOCK"];

/// A connected IPC client. Every request is bounded by `timeout`.
pub struct SwayConnection {
    stream: UnixStream,
    timeout: Duration,
}

impl SwayConnection {
    /// Connect to `socket`, or to the socket named by the environment.
    pub async fn connect(socket: Option<&Path>, timeout: Duration) -> Result<Self> {
        let path = resolve_socket_path(socket, |key| std::env::var_os(key))?;
        let stream = tokio::time::timeout(timeout, UnixStream::connect(&path))
            .await
            .map_err(|_| PlatformError::Timeout(format!("connecting to {}", path.display())))?
            .map_err(|e| {
                PlatformError::WindowManagerError(format!(
                    "failed to connect to {}: {e}",
                    path.display()
                ))
            })?;
        info!("connected to window manager at {}", path.display());
        Ok(Self { stream, timeout })
    }

    async fn request(&mut self, message_type: MessageType, payload: &[u8]) -> Result<Vec<u8>> {
        let timeout = self.timeout;
        let stream = &mut self.stream;
        let exchange = async move {
            codec::write_message(&mut *stream, message_type, payload).await?;
            codec::read_message(&mut *stream).await
        };
        let (raw_type, reply) = tokio::time::timeout(timeout, exchange)
            .await
            .map_err(|_| {
                PlatformError::Timeout(format!(
                    "{message_type:?} after {}ms",
                    timeout.as_millis()
                ))
            })??;

        if raw_type != message_type.code() {
            return Err(PlatformError::Protocol(format!(
                "expected reply type {}, got {raw_type}",
                message_type.code()
            )));
        }
        Ok(reply)
    }

    async fn request_json<T: DeserializeOwned>(
        &mut self,
        message_type: MessageType,
        payload: &[u8],
    ) -> Result<T> {
        let reply = self.request(message_type, payload).await?;
        serde_json::from_slice(&reply).map_err(|e| {
            PlatformError::Protocol(format!("malformed {message_type:?} reply: {e}"))
        })
    }
}

#[async_trait]
impl WindowManager for SwayConnection {
    async fn workspaces(&mut self) -> Result<Vec<Workspace>> {
        self.request_json(MessageType::GetWorkspaces, b"").await
    }

    async fn tree(&mut self) -> Result<Node> {
        self.request_json(MessageType::GetTree, b"").await
    }

    async fn run_commands(&mut self, commands: &[WmCommand]) -> Result<Vec<CommandOutcome>> {
        if commands.is_empty() {
            return Ok(Vec::new());
        }
        let batch = render_batch(commands);
        debug!(count = commands.len(), "sending command batch");
        self.request_json(MessageType::RunCommand, batch.as_bytes())
            .await
    }
}

/// Pick the configured socket, else the first set environment variable.
pub fn resolve_socket_path<F>(configured: Option<&Path>, env: F) -> Result<PathBuf>
where
    F: Fn(&str) -> Option<std::ffi::OsString>,
{
    if let Some(path) = configured {
        return Ok(path.to_path_buf());
    }
    SOCKET_ENV_VARS
        .iter()
        .find_map(|key| env(key).filter(|v| !v.is_empty()))
        .map(PathBuf::from)
        .ok_or_else(|| {
            PlatformError::WindowManagerError(
                "no IPC socket configured and neither SWAYSOCK nor I3SOCK is set".into(),
            )
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tokio::net::UnixListener;

    #[test]
    fn configured_socket_wins() {
        let path = resolve_socket_path(Some(Path::new("/tmp/wm.sock")), |_| {
            Some(OsString::from("/ignored"))
        })
        .unwrap();
        assert_eq!(path, PathBuf::from("/tmp/wm.sock"));
    }

    #[test]
    fn falls_back_to_i3sock() {
        let path = resolve_socket_path(None, |key| {
            (key == "I3SOCK").then(|| OsString::from("/run/i3.sock"))
        })
        .unwrap();
        assert_eq!(path, PathBuf::from("/run/i3.sock"));
    }

    #[test]
    fn missing_socket_is_an_error() {
        assert!(resolve_socket_path(None, |_| None).is_err());
    }

    /// Serve exactly one request with a canned reply of type `reply_type`.
    async fn serve_once(listener: UnixListener, reply_type: MessageType, reply: &'static [u8]) {
        let (mut stream, _) = listener.accept().await.unwrap();
        let (_ty, _payload) = codec::read_message(&mut stream).await.unwrap();
        codec::write_message(&mut stream, reply_type, reply)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn queries_workspaces_over_socket() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ipc.sock");
        let listener = UnixListener::bind(&path).unwrap();
        let server = tokio::spawn(serve_once(
            listener,
            MessageType::GetWorkspaces,
            br#"[{"id": 9, "name": "9", "output": "eDP-1", "visible": true,
                 "rect": {"x": 0, "y": 0, "width": 1280, "height": 800}}]"#,
        ));

        let mut conn = SwayConnection::connect(Some(&path), Duration::from_secs(1))
            .await
            .unwrap();
        let workspaces = conn.workspaces().await.unwrap();
        assert_eq!(workspaces.len(), 1);
        assert_eq!(workspaces[0].output, "eDP-1");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn mismatched_reply_type_is_protocol_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ipc.sock");
        let listener = UnixListener::bind(&path).unwrap();
        let server = tokio::spawn(serve_once(listener, MessageType::GetTree, b"{}"));

        let mut conn = SwayConnection::connect(Some(&path), Duration::from_secs(1))
            .await
            .unwrap();
        let err = conn.workspaces().await.unwrap_err();
        assert!(matches!(err, PlatformError::Protocol(_)));
        server.await.unwrap();
    }

    #[tokio::test]
    async fn empty_batch_skips_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ipc.sock");
        let _listener = UnixListener::bind(&path).unwrap();
        let mut conn = SwayConnection::connect(Some(&path), Duration::from_millis(200))
            .await
            .unwrap();
        assert!(conn.run_commands(&[]).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_socket_fails_to_connect() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.sock");
        let result = SwayConnection::connect(Some(&path), Duration::from_millis(200)).await;
        assert!(matches!(
            result,
            Err(PlatformError::WindowManagerError(_))
        ));
    }
}
