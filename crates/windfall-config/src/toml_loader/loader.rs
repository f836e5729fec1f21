//! Reading and deserializing the TOML file.

use std::io::ErrorKind;
use std::path::Path;

use tracing::info;
use windfall_common::ConfigError;

use super::paths::{create_default_config, default_config_path};
use crate::schema::WindfallConfig;

/// Parse config text. Missing fields take their defaults.
pub fn parse_config(content: &str) -> Result<WindfallConfig, ConfigError> {
    toml::from_str(content).map_err(|e| ConfigError::ParseError(format!("failed to parse TOML: {e}")))
}

/// Load config from `path`, which must exist. Validation is left to the
/// caller.
pub fn load_from_path(path: &Path) -> Result<WindfallConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::FileNotFound(path.to_path_buf()),
        _ => ConfigError::ParseError(format!("failed to read {}: {e}", path.display())),
    })?;
    let config = parse_config(&content)?;
    info!("loaded config from {}", path.display());
    Ok(config)
}

/// Load `~/.config/windfall/config.toml` (or the platform equivalent),
/// writing the commented template first if it is missing.
pub fn load_default() -> Result<WindfallConfig, ConfigError> {
    let path = default_config_path()?;
    match load_from_path(&path) {
        Err(ConfigError::FileNotFound(_)) => {
            info!("no config found at {}, creating default", path.display());
            create_default_config(&path)?;
            Ok(WindfallConfig::default())
        }
        other => other,
    }
}
