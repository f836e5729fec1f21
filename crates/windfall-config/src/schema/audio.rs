//! PipeWire panning configuration.

use serde::{Deserialize, Serialize};

/// Audio mapping configuration.
///
/// Only works for stereo streams played by the process that owns the window.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioConfig {
    pub enabled: bool,
    /// How often volumes are recomputed and pushed, in milliseconds.
    pub update_interval_ms: u64,
    /// How often the pid → node mapping is refreshed, in milliseconds.
    pub fetch_interval_ms: u64,
    /// Command used for the persistent control channel.
    pub pw_cli: String,
    /// Command used to introspect the audio graph.
    pub pw_dump: String,
    /// Param index of `Props` on the target nodes.
    pub param_index: u32,
    /// Upper bound for one `pw-dump` run or one channel flush.
    pub timeout_ms: u64,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            update_interval_ms: 50,
            fetch_interval_ms: 1000,
            pw_cli: "pw-cli".into(),
            pw_dump: "pw-dump".into(),
            param_index: 2,
            timeout_ms: 2000,
        }
    }
}
