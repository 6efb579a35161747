//! Runtime configuration.
//!
//! Configuration is read from a TOML file (default
//! `~/.config/selah/config.toml`). If the file doesn't exist, a default one
//! with comments is created. Missing fields fall back to defaults, so a
//! partial file is fine.

use serde::Deserialize;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

/// Main configuration struct.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub providers: ProviderConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Bind address for the HTTP API.
    pub bind: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: "0.0.0.0:5000".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// SQLite database path. Defaults to the platform data directory.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ProviderConfig {
    /// Base URL of the CDN-hosted per-version JSON files.
    pub cdn_base_url: String,

    /// Base URL of the single-translation REST API.
    pub bible_api_base_url: String,

    /// Base URL of the numeric-book-id REST API.
    pub bolls_base_url: String,

    /// Full-Bible Spanish JSON dataset used by verse-of-the-day.
    pub votd_dataset_url: String,

    /// Per-request timeout applied to every upstream call (seconds).
    pub timeout_secs: u64,

    /// User agent sent upstream.
    pub user_agent: String,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            cdn_base_url: "https://cdn.jsdelivr.net/gh/wldeh/bible-api".to_string(),
            bible_api_base_url: "https://bible-api.com".to_string(),
            bolls_base_url: "https://bolls.life".to_string(),
            votd_dataset_url:
                "https://cdn.jsdelivr.net/gh/aruljohn/Bible-Database@master/json/spanish_rvr1960.json"
                    .to_string(),
            timeout_secs: 10,
            user_agent: concat!("selah/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }
}

impl Config {
    /// Load configuration.
    ///
    /// With an explicit path the file must exist and parse. Without one the
    /// default path is used, and a commented default file is created there
    /// on first run.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config_path = match path {
            Some(p) => p.to_path_buf(),
            None => {
                let default = Self::default_config_path()?;
                if !default.exists() {
                    Self::create_default_config(&default)?;
                    return Ok(Self::default());
                }
                default
            }
        };

        let content = fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: config_path,
            source: e,
        })?;

        Ok(config)
    }

    /// Default config file path: `~/.config/selah/config.toml`.
    pub fn default_config_path() -> Result<PathBuf, ConfigError> {
        let config_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
        Ok(config_dir.join("selah").join("config.toml"))
    }

    fn create_default_config(path: &PathBuf) -> Result<(), ConfigError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::Io {
                path: parent.to_path_buf(),
                source: e,
            })?;
        }

        let mut file = fs::File::create(path).map_err(|e| ConfigError::Io {
            path: path.clone(),
            source: e,
        })?;

        file.write_all(Self::default_config_content().as_bytes())
            .map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;

        Ok(())
    }

    fn default_config_content() -> String {
        r##"# Selah configuration

[server]
# Bind address for the HTTP API
bind = "0.0.0.0:5000"

[database]
# SQLite database path. Uncomment to override the platform default.
# path = "/var/lib/selah/selah.db"

[providers]
# Upstream scripture sources. These rarely need changing.
cdn_base_url = "https://cdn.jsdelivr.net/gh/wldeh/bible-api"
bible_api_base_url = "https://bible-api.com"
bolls_base_url = "https://bolls.life"
votd_dataset_url = "https://cdn.jsdelivr.net/gh/aruljohn/Bible-Database@master/json/spanish_rvr1960.json"

# Per-request timeout for upstream calls, in seconds. A provider that
# exceeds it counts as failed and the next one in the chain is tried.
timeout_secs = 10
"##
        .to_string()
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Could not determine config directory")]
    NoConfigDir,

    #[error("Failed to read/write config file at {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file at {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_deserializes() {
        let content = Config::default_config_content();
        let config: Config = toml::from_str(&content).expect("Default config should be valid TOML");

        assert_eq!(config.server.bind, "0.0.0.0:5000");
        assert_eq!(config.providers.timeout_secs, 10);
        assert!(config.database.path.is_none());
    }

    #[test]
    fn test_partial_config() {
        let content = r##"
[server]
bind = "127.0.0.1:8080"
"##;
        let config: Config = toml::from_str(content).expect("Partial config should work");

        assert_eq!(config.server.bind, "127.0.0.1:8080");
        // untouched sections keep defaults
        assert_eq!(config.providers.bible_api_base_url, "https://bible-api.com");
    }

    #[test]
    fn test_empty_config() {
        let config: Config = toml::from_str("").expect("Empty config should work");
        assert_eq!(config.server.bind, "0.0.0.0:5000");
        assert!(config.providers.user_agent.starts_with("selah/"));
    }

    #[test]
    fn test_load_from_explicit_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        fs::write(&path, "[providers]\ntimeout_secs = 3\n").unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.providers.timeout_secs, 3);

        assert!(Config::load(Some(&dir.path().join("missing.toml"))).is_err());
    }
}
