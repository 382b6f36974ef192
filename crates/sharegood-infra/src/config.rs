//! Configuration loader.
//!
//! Reads `config.toml` from the data directory (`~/.sharegood/` by default)
//! and deserializes it into [`AppConfig`]. Falls back to defaults when the
//! file is missing or malformed.

use std::path::Path;

use sharegood_types::config::AppConfig;
use sharegood_types::error::ConfigError;

use crate::paths::config_path;

/// Read and parse `{data_dir}/config.toml`.
///
/// Returns `Ok(None)` when the file does not exist.
pub async fn read_config(data_dir: &Path) -> Result<Option<AppConfig>, ConfigError> {
    let path = config_path(data_dir);

    let content = match tokio::fs::read_to_string(&path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
        Err(err) => return Err(ConfigError::Read(format!("{}: {err}", path.display()))),
    };

    toml::from_str::<AppConfig>(&content)
        .map(Some)
        .map_err(|err| ConfigError::Parse(format!("{}: {err}", path.display())))
}

/// Load configuration, never failing.
pub async fn load_config(data_dir: &Path) -> AppConfig {
    config_or_default(read_config(data_dir).await, data_dir)
}

/// Resolve the outcome of [`read_config`] to a usable config.
///
/// - Missing file: [`AppConfig::default()`].
/// - Unreadable or malformed file: logs a warning and returns the default.
///
/// Split from [`load_config`] so callers can inspect the raw result before
/// logging is initialised.
pub fn config_or_default(
    result: Result<Option<AppConfig>, ConfigError>,
    data_dir: &Path,
) -> AppConfig {
    match result {
        Ok(Some(config)) => config,
        Ok(None) => {
            tracing::debug!(
                "No config.toml found in {}, using defaults",
                data_dir.display()
            );
            AppConfig::default()
        }
        Err(err) => {
            tracing::warn!("{err}, using defaults");
            AppConfig::default()
        }
    }
}
