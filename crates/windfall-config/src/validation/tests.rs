//! Tests for the full validation pipeline.

use super::*;

#[test]
fn default_config_validates() {
    let config = WindfallConfig::default();
    assert!(validate(&config).is_ok());
}

#[test]
fn catches_zero_tick_rate() {
    let mut config = WindfallConfig::default();
    config.workspace.tick_rate = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.tick_rate"));
}

#[test]
fn catches_empty_output() {
    let mut config = WindfallConfig::default();
    config.workspace.output = "  ".into();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.output"));
}

#[test]
fn catches_discard_above_ceiling() {
    let mut config = WindfallConfig::default();
    config.arena.discard_height = 50.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("arena.discard_height"));
}

#[test]
fn catches_zero_scale() {
    let mut config = WindfallConfig::default();
    config.arena.scale = 0.0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("arena.scale"));
}

#[test]
fn catches_restitution_out_of_range() {
    let mut config = WindfallConfig::default();
    config.physics.restitution = 1.5;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("physics.restitution"));
}

#[test]
fn catches_zero_iterations() {
    let mut config = WindfallConfig::default();
    config.physics.velocity_iterations = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("physics.velocity_iterations"));
}

#[test]
fn catches_nan_gravity() {
    let mut config = WindfallConfig::default();
    config.physics.flat_gravity = [f64::NAN, -2.0];
    assert!(validate(&config).is_err());
}

#[test]
fn audio_checks_skipped_when_disabled() {
    let mut config = WindfallConfig::default();
    config.audio.update_interval_ms = 0;
    assert!(validate(&config).is_err());
    config.audio.enabled = false;
    assert!(validate(&config).is_ok());
}

#[test]
fn collects_multiple_errors() {
    let mut config = WindfallConfig::default();
    config.workspace.tick_rate = 0;
    config.physics.density = -1.0;
    config.ipc.timeout_ms = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("workspace.tick_rate"));
    assert!(err.contains("physics.density"));
    assert!(err.contains("ipc.timeout_ms"));
}
