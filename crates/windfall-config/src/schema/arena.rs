//! Arena geometry and out-of-bounds configuration.

use serde::{Deserialize, Serialize};

/// What to do with a window whose body leaves the arena.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum OutOfBoundsPolicy {
    /// Kill the window.
    Close,
    /// Drop it back in from above the arena.
    #[default]
    Respawn,
}

/// Arena configuration. Heights are in physics units.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Ceiling height above the floor.
    pub height: f64,
    /// Windows whose top edge rises above this are always killed.
    pub discard_height: f64,
    /// Physics units per window-manager pixel.
    pub scale: f64,
    /// Floating windows placed exactly here are spawned from above the arena.
    pub spawn_x: i32,
    pub spawn_y: i32,
    pub out_of_bounds: OutOfBoundsPolicy,
    /// Tolerance added around a body before testing it against the arena.
    pub oob_margin: f64,
    /// Window mark that pins a body in place.
    pub static_mark: String,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            height: 40.0,
            discard_height: 25.0,
            scale: 1.0 / 128.0,
            spawn_x: 200,
            spawn_y: -1500,
            out_of_bounds: OutOfBoundsPolicy::Respawn,
            oob_margin: 0.05,
            static_mark: "windfall_static".into(),
        }
    }
}
