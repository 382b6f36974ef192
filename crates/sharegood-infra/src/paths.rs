//! Data directory layout.

use std::path::{Path, PathBuf};

/// Environment variable overriding the data directory.
pub const DATA_DIR_ENV: &str = "SHAREGOOD_DATA_DIR";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `SHAREGOOD_DATA_DIR` environment variable
/// 2. `~/.sharegood`
/// 3. `./.sharegood` when no home directory is known
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".sharegood");
    }

    PathBuf::from(".sharegood")
}

/// `{data_dir}/config.toml`
pub fn config_path(data_dir: &Path) -> PathBuf {
    data_dir.join("config.toml")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_path_is_inside_data_dir() {
        let path = config_path(Path::new("/tmp/sg"));
        assert_eq!(path, PathBuf::from("/tmp/sg/config.toml"));
    }

    #[test]
    fn resolve_data_dir_ends_with_sharegood_or_env() {
        let dir = resolve_data_dir();
        match std::env::var(DATA_DIR_ENV) {
            Ok(value) => assert_eq!(dir, PathBuf::from(value)),
            Err(_) => assert!(dir.ends_with(".sharegood")),
        }
    }
}
