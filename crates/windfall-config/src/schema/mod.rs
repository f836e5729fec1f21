//! Configuration schema types for windfall.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the defaults the simulation was tuned with.

mod arena;
mod audio;
mod ipc;
mod physics;
mod system;
mod workspace;

pub use arena::*;
pub use audio::*;
pub use ipc::*;
pub use physics::*;
pub use system::*;
pub use workspace::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for windfall.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct WindfallConfig {
    pub workspace: WorkspaceConfig,
    pub arena: ArenaConfig,
    pub physics: PhysicsConfig,
    pub audio: AudioConfig,
    pub ipc: IpcConfig,
    pub logging: LoggingConfig,
}

// =============================================================================
// Tests
// =============================================================================
