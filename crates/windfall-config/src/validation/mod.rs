//! Full configuration validation.
//!
//! Validates numeric ranges and required strings. Each domain has its own
//! submodule; this orchestrator calls them all and collects errors into a
//! single `ConfigError`.

mod arena;
mod audio;
mod helpers;
mod physics;
mod workspace;

#[cfg(test)]
mod tests;

use crate::schema::WindfallConfig;
use windfall_common::ConfigError;

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &WindfallConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    workspace::validate_workspace(&mut errors, config);
    workspace::validate_ipc(&mut errors, config);
    arena::validate_arena(&mut errors, config);
    physics::validate_physics(&mut errors, config);
    audio::validate_audio(&mut errors, config);

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
