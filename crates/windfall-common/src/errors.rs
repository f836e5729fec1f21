use std::path::PathBuf;

use crate::types::WindowId;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("config file not found: {0}")]
    FileNotFound(PathBuf),

    #[error("config parse error: {0}")]
    ParseError(String),

    #[error("config validation error: {0}")]
    ValidationError(String),
}

/// Failures of an external collaborator (window manager, audio server).
///
/// None of these are retried; the process terminates on any of them.
#[derive(Debug, thiserror::Error)]
pub enum PlatformError {
    #[error("window manager error: {0}")]
    WindowManagerError(String),

    #[error("protocol error: {0}")]
    Protocol(String),

    #[error("timed out: {0}")]
    Timeout(String),

    #[error("audio error: {0}")]
    AudioError(String),
}

/// Reconciliation invariant breaks. Always fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulationError {
    #[error("window {0} is not tracked")]
    UntrackedWindow(WindowId),

    #[error("no container with id {0} in the current workspace")]
    UnknownWindow(WindowId),

    #[error("arena has not been sized to a workspace yet")]
    ArenaNotSized,
}

#[derive(Debug, thiserror::Error)]
pub enum WindfallError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Platform(#[from] PlatformError),

    #[error(transparent)]
    Simulation(#[from] SimulationError),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("{0}")]
    Other(String),
}
