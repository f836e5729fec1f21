//! Simulation constants.

use serde::{Deserialize, Serialize};

/// Physics configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PhysicsConfig {
    /// Newtonian attraction between windows. Zero disables the O(n²) pass.
    pub gravitational_constant: f64,
    /// Arena-wide acceleration, physics units/s².
    pub flat_gravity: [f64; 2],
    /// How bouncy windows are (0.0-1.0).
    pub restitution: f64,
    /// Coulomb friction between windows and against the walls.
    pub friction: f64,
    pub density: f64,
    /// How much a manual drag is amplified into velocity.
    pub drag_scale: f64,
    pub velocity_iterations: u32,
    pub position_iterations: u32,
    /// Contacts with a smaller impulse are not reported.
    pub min_contact_impulse: f64,
    /// Extra gap, in pixels, between the arena top and a freshly spawned window.
    pub spawn_height_padding: i32,
    /// Horizontal spawn speed is drawn from `[-spawn_velocity_x, spawn_velocity_x)`.
    pub spawn_velocity_x: f64,
    /// Vertical spawn speed (negative falls).
    pub spawn_velocity_y: f64,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravitational_constant: 0.0,
            flat_gravity: [0.0, -2.0],
            restitution: 0.75,
            friction: 0.2,
            density: 8.0,
            drag_scale: 8.0,
            velocity_iterations: 10,
            position_iterations: 10,
            min_contact_impulse: 1.0,
            spawn_height_padding: 100,
            spawn_velocity_x: 8.0,
            spawn_velocity_y: -5.0,
        }
    }
}
