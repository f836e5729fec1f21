//! Arena geometry validation.

use crate::schema::WindfallConfig;

use super::helpers::{validate_non_empty, validate_positive, validate_range_f64};

/// Validate arena constraints. The discard height must sit inside the arena,
/// otherwise windows would be respawned forever instead of discarded.
pub(crate) fn validate_arena(errors: &mut Vec<String>, config: &WindfallConfig) {
    let arena = &config.arena;
    validate_positive(errors, "arena.height", arena.height);
    validate_range_f64(errors, "arena.scale", arena.scale, 1e-4, 1.0);
    validate_range_f64(errors, "arena.oob_margin", arena.oob_margin, 0.0, 10.0);
    validate_positive(errors, "arena.discard_height", arena.discard_height);
    if arena.discard_height > arena.height {
        errors.push(format!(
            "arena.discard_height = {} must not exceed arena.height = {}",
            arena.discard_height, arena.height
        ));
    }
    validate_non_empty(errors, "arena.static_mark", &arena.static_mark);
}
