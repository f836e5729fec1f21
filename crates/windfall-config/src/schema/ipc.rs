//! Window-manager IPC configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// IPC configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IpcConfig {
    /// Socket path. Falls back to `$SWAYSOCK`, then `$I3SOCK`.
    pub socket: Option<PathBuf>,
    /// Upper bound for a single request/reply round trip, in milliseconds.
    pub timeout_ms: u64,
}

impl Default for IpcConfig {
    fn default() -> Self {
        Self {
            socket: None,
            timeout_ms: 1000,
        }
    }
}
