//! Application configuration
//!
//! Loaded from a TOML file (default `<config_dir>/ledger-service/config.toml`).
//! Every section and key is optional; anything missing takes its default.
//!
//! ```toml
//! [server]
//! host = "0.0.0.0"
//! port = 8080
//! shutdown_timeout = 30
//!
//! [database]
//! url = "sqlite://./ledger.db?mode=rwc"
//!
//! [database.pool]
//! max_connections = 10
//! min_connections = 1
//!
//! [logging]
//! level = "info"
//! format = "pretty"   # or "json"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::infrastructure::database::DatabaseConfig;

/// Environment variable that replaces `database.url` when set.
pub const DATABASE_URL_ENV: &str = "DATABASE_URL";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid config: {0}")]
    Invalid(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for in-flight requests after a shutdown signal
    pub shutdown_timeout: u64,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            shutdown_timeout: 30,
        }
    }
}

impl ServerConfig {
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub level: String,
    pub format: LogFormat,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::Pretty,
        }
    }
}

impl AppConfig {
    /// Load config from `path`, falling back to defaults when the file does
    /// not exist. `DATABASE_URL` overrides `database.url`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let mut config = if path.exists() {
            let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
                path: path.to_path_buf(),
                source,
            })?;
            Self::from_toml_str(&raw)?
        } else {
            Self::default()
        };

        config.apply_database_url(std::env::var(DATABASE_URL_ENV).ok());
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(raw: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(raw)?)
    }

    pub fn apply_database_url(&mut self, url: Option<String>) {
        if let Some(url) = url.filter(|u| !u.trim().is_empty()) {
            self.database.url = url;
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.database.url.trim().is_empty() {
            return Err(ConfigError::Invalid("database.url must not be empty".into()));
        }
        let pool = &self.database.pool;
        if pool.max_connections == 0 {
            return Err(ConfigError::Invalid(
                "database.pool.max_connections must be at least 1".into(),
            ));
        }
        if pool.min_connections > pool.max_connections {
            return Err(ConfigError::Invalid(format!(
                "database.pool.min_connections ({}) exceeds max_connections ({})",
                pool.min_connections, pool.max_connections
            )));
        }
        Ok(())
    }
}

/// `<config_dir>/ledger-service/config.toml`, or `./config.toml` when the
/// platform has no config directory.
pub fn default_config_path() -> PathBuf {
    match dirs_next::config_dir() {
        Some(dir) => dir.join("ledger-service").join("config.toml"),
        None => PathBuf::from("config.toml"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::database::DEFAULT_DATABASE_URL;

    #[test]
    fn empty_file_yields_defaults() {
        let cfg = AppConfig::from_toml_str("").unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.server.address(), "0.0.0.0:8080");
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);
        assert_eq!(cfg.logging.format, LogFormat::Pretty);
    }

    #[test]
    fn partial_sections_keep_other_defaults() {
        let cfg = AppConfig::from_toml_str(
            r#"
            [server]
            port = 3000

            [database.pool]
            max_connections = 4

            [logging]
            format = "json"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 3000);
        assert_eq!(cfg.server.host, "0.0.0.0");
        assert_eq!(cfg.database.pool.max_connections, 4);
        assert_eq!(cfg.database.pool.min_connections, 1);
        assert_eq!(cfg.logging.format, LogFormat::Json);
        assert_eq!(cfg.logging.level, "info");
    }

    #[test]
    fn unknown_log_format_is_a_parse_error() {
        let err = AppConfig::from_toml_str("[logging]\nformat = \"xml\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn database_url_override_ignores_blank_values() {
        let mut cfg = AppConfig::default();
        cfg.apply_database_url(Some("   ".into()));
        assert_eq!(cfg.database.url, DEFAULT_DATABASE_URL);

        cfg.apply_database_url(Some("sqlite::memory:".into()));
        assert_eq!(cfg.database.url, "sqlite::memory:");
    }

    #[test]
    fn pool_bounds_are_validated() {
        let cfg = AppConfig::from_toml_str(
            "[database.pool]\nmax_connections = 2\nmin_connections = 5",
        )
        .unwrap();
        assert!(matches!(cfg.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_loads_defaults() {
        let path = std::env::temp_dir().join("ledger-service-no-such-config.toml");
        let cfg = AppConfig::load(&path).unwrap();
        assert_eq!(cfg.server, ServerConfig::default());
    }

    #[test]
    fn default_path_ends_with_app_dir() {
        let path = default_config_path();
        assert!(path.ends_with("ledger-service/config.toml") || path.ends_with("config.toml"));
    }
}
