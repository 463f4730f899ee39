use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

const CONFIG_FILE: &str = "storefront.json";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[error("Could not find a configuration folder")]
    NoDirectory,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Default `env_logger` filter, `RUST_LOG` still wins.
    pub log_filter: String,
    /// Simulated network delay of the mock environments.
    pub latency_ms: u64,
    pub promo_count: usize,
    /// Orders with exactly this quantity are rejected by the
    /// `mock_failed_if_number` environment.
    pub failing_order_quantity: i64,
    pub initial_quantity: i64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_filter: "info".to_string(),
            latency_ms: 250,
            promo_count: 20,
            failing_order_quantity: 5,
            initial_quantity: 1,
        }
    }
}

impl AppConfig {
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }

    /// Reads `storefront.json` from the platform configuration folder,
    /// falling back to the defaults if there is none.
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_from(&config_directory()?.join(CONFIG_FILE))
    }

    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }
        let data = std::fs::read(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_slice(&data).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }
}

fn config_directory() -> Result<PathBuf, ConfigError> {
    use directories_next::ProjectDirs;
    ProjectDirs::from("com", "storefront", "storefront")
        .map(|dirs| dirs.config_dir().to_path_buf())
        .ok_or(ConfigError::NoDirectory)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = AppConfig::load_from(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, r#"{ "latency_ms": 10, "promo_count": 3 }"#).unwrap();
        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.latency(), Duration::from_millis(10));
        assert_eq!(config.promo_count, 3);
        assert_eq!(config.failing_order_quantity, 5);
    }

    #[test]
    fn broken_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ nope").unwrap();
        assert!(matches!(
            AppConfig::load_from(&path),
            Err(ConfigError::Parse { .. })
        ));
    }
}
