//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// `tracing-subscriber` directive for this level.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "windfall=trace",
            LogLevel::Debug => "windfall=debug",
            LogLevel::Info => "windfall=info",
            LogLevel::Warn => "windfall=warn",
            LogLevel::Error => "windfall=error",
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
