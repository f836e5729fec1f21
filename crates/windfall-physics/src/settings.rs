use rapier2d::prelude::*;
use windfall_config::schema::OutOfBoundsPolicy;
use windfall_config::WindfallConfig;

/// Everything the simulation reads from configuration, converted to
/// rapier's scalar type once at startup.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationSettings {
    /// Physics units per pixel.
    pub scale: Real,
    pub ceiling: Real,
    pub discard_height: Real,
    pub oob_margin: Real,
    pub out_of_bounds: OutOfBoundsPolicy,
    pub spawn: (i32, i32),
    pub spawn_height_padding: i32,
    pub spawn_velocity: (Real, Real),
    pub static_mark: String,
    pub gravity: Vector<Real>,
    pub gravitational_constant: Real,
    pub restitution: Real,
    pub friction: Real,
    pub density: Real,
    pub drag_scale: Real,
    pub velocity_iterations: usize,
    pub position_iterations: usize,
    pub min_contact_impulse: Real,
}

impl From<&WindfallConfig> for SimulationSettings {
    fn from(config: &WindfallConfig) -> Self {
        let arena = &config.arena;
        let physics = &config.physics;
        Self {
            scale: arena.scale as Real,
            ceiling: arena.height as Real,
            discard_height: arena.discard_height as Real,
            oob_margin: arena.oob_margin as Real,
            out_of_bounds: arena.out_of_bounds,
            spawn: (arena.spawn_x, arena.spawn_y),
            spawn_height_padding: physics.spawn_height_padding,
            spawn_velocity: (
                physics.spawn_velocity_x as Real,
                physics.spawn_velocity_y as Real,
            ),
            static_mark: arena.static_mark.clone(),
            gravity: vector![
                physics.flat_gravity[0] as Real,
                physics.flat_gravity[1] as Real
            ],
            gravitational_constant: physics.gravitational_constant as Real,
            restitution: physics.restitution as Real,
            friction: physics.friction as Real,
            density: physics.density as Real,
            drag_scale: physics.drag_scale as Real,
            velocity_iterations: physics.velocity_iterations as usize,
            position_iterations: physics.position_iterations as usize,
            min_contact_impulse: physics.min_contact_impulse as Real,
        }
    }
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self::from(&WindfallConfig::default())
    }
}
