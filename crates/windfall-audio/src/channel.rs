//! The line-oriented volume command channel.

use std::fmt;
use std::process::Stdio;
use std::time::Duration;

use async_trait::async_trait;
use tokio::io::AsyncWriteExt;
use tokio::process::{Child, ChildStdin, Command};
use tracing::{debug, info};
use windfall_common::PlatformError;

use crate::pan::Levels;
use crate::Result;

/// Set the channel volumes of one node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VolumeCommand {
    pub node: u32,
    pub param_index: u32,
    pub levels: Levels,
}

impl fmt::Display for VolumeCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let props = serde_json::json!({
            "Spa:Pod:Object:Param:Props:channelVolumes": [self.levels.left, self.levels.right]
        });
        write!(f, "s {} {} {props}", self.node, self.param_index)
    }
}

/// Where volume commands go. Writes are ordered and flushed per batch.
#[async_trait]
pub trait VolumeSink: Send {
    async fn send(&mut self, commands: &[VolumeCommand]) -> Result<()>;

    /// Release the channel. Called once on shutdown.
    async fn close(&mut self) -> Result<()> {
        Ok(())
    }
}

/// A persistent `pw-cli` child fed through its stdin.
pub struct PwCli {
    child: Child,
    stdin: ChildStdin,
    timeout: Duration,
}

impl PwCli {
    pub fn spawn(program: &str, timeout: Duration) -> Result<Self> {
        let mut child = Command::new(program)
            .stdin(Stdio::piped())
            .stdout(Stdio::null())
            .kill_on_drop(true)
            .spawn()
            .map_err(|e| PlatformError::AudioError(format!("failed to start {program}: {e}")))?;
        let stdin = child
            .stdin
            .take()
            .ok_or_else(|| PlatformError::AudioError(format!("{program} has no stdin")))?;
        info!(program, "audio command channel started");
        Ok(Self {
            child,
            stdin,
            timeout,
        })
    }
}

#[async_trait]
impl VolumeSink for PwCli {
    async fn send(&mut self, commands: &[VolumeCommand]) -> Result<()> {
        if let Ok(Some(status)) = self.child.try_wait() {
            return Err(PlatformError::AudioError(format!(
                "audio command channel exited with {status}"
            )));
        }
        let batch: String = commands.iter().map(|c| format!("{c}\n")).collect();
        let timeout = self.timeout;
        let stdin = &mut self.stdin;
        let write = async move {
            stdin.write_all(batch.as_bytes()).await?;
            stdin.flush().await
        };
        tokio::time::timeout(timeout, write)
            .await
            .map_err(|_| {
                PlatformError::Timeout(format!(
                    "audio channel write after {}ms",
                    timeout.as_millis()
                ))
            })?
            .map_err(|e| PlatformError::AudioError(format!("audio channel write failed: {e}")))?;
        debug!(count = commands.len(), "volume commands written");
        Ok(())
    }

    async fn close(&mut self) -> Result<()> {
        self.child
            .kill()
            .await
            .map_err(|e| PlatformError::AudioError(format!("failed to stop audio channel: {e}")))?;
        info!("audio command channel stopped");
        Ok(())
    }
}

/// Records every batch instead of writing it anywhere.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub batches: Vec<Vec<VolumeCommand>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Vec<Vec<VolumeCommand>> {
        std::mem::take(&mut self.batches)
    }
}

#[async_trait]
impl VolumeSink for MemorySink {
    async fn send(&mut self, commands: &[VolumeCommand]) -> Result<()> {
        self.batches.push(commands.to_vec());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_set_param_line() {
        let cmd = VolumeCommand {
            node: 70,
            param_index: 2,
            levels: Levels {
                left: 0.71,
                right: 0.5,
            },
        };
        assert_eq!(
            cmd.to_string(),
            r#"s 70 2 {"Spa:Pod:Object:Param:Props:channelVolumes":[0.71,0.5]}"#
        );
    }

    #[test]
    fn neutral_reset_line() {
        let cmd = VolumeCommand {
            node: 3,
            param_index: 2,
            levels: Levels::NEUTRAL,
        };
        assert_eq!(
            cmd.to_string(),
            r#"s 3 2 {"Spa:Pod:Object:Param:Props:channelVolumes":[1.0,1.0]}"#
        );
    }

    #[tokio::test]
    async fn memory_sink_records_batches() {
        let mut sink = MemorySink::new();
        sink.send(&[]).await.unwrap();
        assert_eq!(sink.take().len(), 1);
        assert!(sink.batches.is_empty());
    }

    #[tokio::test]
    async fn writes_reach_the_child() {
        let mut cli = PwCli::spawn("cat", Duration::from_secs(1)).unwrap();
        let cmd = VolumeCommand {
            node: 1,
            param_index: 2,
            levels: Levels::NEUTRAL,
        };
        cli.send(&[cmd, cmd]).await.unwrap();
        cli.close().await.unwrap();
    }

    #[tokio::test]
    async fn missing_program_fails_to_spawn() {
        let result = PwCli::spawn("/nonexistent/pw-cli", Duration::from_secs(1));
        assert!(matches!(result, Err(PlatformError::AudioError(_))));
    }
}
