//! Physics constant validation.

use crate::schema::WindfallConfig;

use super::helpers::{validate_positive, validate_range, validate_range_f64};

pub(crate) fn validate_physics(errors: &mut Vec<String>, config: &WindfallConfig) {
    let physics = &config.physics;
    validate_range_f64(
        errors,
        "physics.restitution",
        physics.restitution,
        0.0,
        1.0,
    );
    validate_range_f64(errors, "physics.friction", physics.friction, 0.0, 10.0);
    validate_positive(errors, "physics.density", physics.density);
    validate_range_f64(errors, "physics.drag_scale", physics.drag_scale, 0.0, 100.0);
    validate_range(
        errors,
        "physics.velocity_iterations",
        physics.velocity_iterations,
        1,
        100,
    );
    validate_range(
        errors,
        "physics.position_iterations",
        physics.position_iterations,
        1,
        100,
    );
    validate_range_f64(
        errors,
        "physics.min_contact_impulse",
        physics.min_contact_impulse,
        0.0,
        f64::MAX,
    );
    if physics.spawn_velocity_x < 0.0 {
        errors.push(format!(
            "physics.spawn_velocity_x = {} must not be negative",
            physics.spawn_velocity_x
        ));
    }
    if !physics.gravitational_constant.is_finite()
        || physics.flat_gravity.iter().any(|g| !g.is_finite())
    {
        errors.push("physics gravity values must be finite".into());
    }
}
