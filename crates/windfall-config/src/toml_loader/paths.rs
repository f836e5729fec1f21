//! Where the config lives, and writing the commented template there.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use tracing::info;
use windfall_common::ConfigError;

use super::template::default_config_toml;

/// `<base>/windfall/config.toml`.
pub fn config_path_under(base: &Path) -> PathBuf {
    base.join("windfall").join("config.toml")
}

/// The config path under the platform config directory.
pub fn default_config_path() -> Result<PathBuf, ConfigError> {
    dirs::config_dir()
        .map(|dir| config_path_under(&dir))
        .ok_or_else(|| ConfigError::ParseError("could not determine config directory".into()))
}

/// Write the default template to `path`, creating parent directories.
///
/// Returns `false` without touching anything when the file already exists.
pub fn create_default_config(path: &Path) -> Result<bool, ConfigError> {
    let failed = |what: &str, e: std::io::Error| {
        ConfigError::ParseError(format!("failed to {what} {}: {e}", path.display()))
    };
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| failed("create directory for", e))?;
    }
    let mut file = match OpenOptions::new().write(true).create_new(true).open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == ErrorKind::AlreadyExists => return Ok(false),
        Err(e) => return Err(failed("create", e)),
    };
    file.write_all(default_config_toml().as_bytes())
        .map_err(|e| failed("write default config to", e))?;
    info!("created default config at {}", path.display());
    Ok(true)
}
