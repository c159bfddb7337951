//! Application Configuration
//!
//! Loaded from `config.toml` in the config directory. `LOBBYDESK_ENV` and
//! `LOBBYDESK_BACKEND_HOST` override the file.

use crate::constants::REQUEST_TIMEOUT_SECS;
use crate::error::{Error, Result};
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::info;

const ENV_VAR: &str = "LOBBYDESK_ENV";
const BACKEND_HOST_VAR: &str = "LOBBYDESK_BACKEND_HOST";

/// Deployment the client talks to
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    Preview,
    #[default]
    Dev,
}

impl Environment {
    pub fn is_prod(self) -> bool {
        self == Self::Production
    }

    pub fn is_preview(self) -> bool {
        self == Self::Preview
    }

    pub fn is_dev(self) -> bool {
        self == Self::Dev
    }
}

impl std::str::FromStr for Environment {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "production" | "prod" => Ok(Self::Production),
            "preview" => Ok(Self::Preview),
            "dev" | "development" => Ok(Self::Dev),
            other => Err(Error::Invalid {
                message: format!("Unknown environment: {other}"),
            }),
        }
    }
}

/// Logging options for the binary
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is unset
    pub level: String,
    /// Also write a daily rolling file in the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: false,
        }
    }
}

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub environment: Environment,
    /// Backend base URL, e.g. `http://localhost:4000`
    pub backend_host: String,
    pub request_timeout_secs: u64,
    pub log: LogConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: Environment::Dev,
            backend_host: "http://localhost:4000".to_string(),
            request_timeout_secs: REQUEST_TIMEOUT_SECS,
            log: LogConfig::default(),
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join("config.toml"))
}

impl AppConfig {
    /// Load from the config directory and apply environment overrides
    pub fn load() -> Result<Self> {
        let mut config = Self::load_from(&get_config_path()?)?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Load from a file; a missing or empty file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(path)?;
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(&value)?)
    }

    /// Apply overrides from a variable lookup
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(env) = lookup(ENV_VAR) {
            self.environment = env.parse()?;
        }
        if let Some(host) = lookup(BACKEND_HOST_VAR).filter(|h| !h.trim().is_empty()) {
            self.backend_host = host;
        }
        Ok(())
    }

    /// GraphQL endpoint on the backend
    pub fn graphql_url(&self) -> String {
        format!("{}/graphql", self.backend_host.trim_end_matches('/'))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_file_uses_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            environment = "production"

            [log]
            file = true
            "#,
        )
        .expect("parse");
        assert!(config.environment.is_prod());
        assert_eq!(config.backend_host, "http://localhost:4000");
        assert_eq!(config.log.level, "info");
        assert!(config.log.file);
    }

    #[test]
    fn test_overrides() {
        let mut config = AppConfig::default();
        config
            .apply_overrides(|key| match key {
                "LOBBYDESK_ENV" => Some("preview".into()),
                "LOBBYDESK_BACKEND_HOST" => Some("https://api.example.test/".into()),
                _ => None,
            })
            .expect("overrides");
        assert!(config.environment.is_preview());
        assert_eq!(config.graphql_url(), "https://api.example.test/graphql");
    }

    #[test]
    fn test_bad_environment_rejected() {
        let mut config = AppConfig::default();
        let result = config.apply_overrides(|key| (key == "LOBBYDESK_ENV").then(|| "staging".into()));
        assert!(result.is_err());
        assert!(config.environment.is_dev());
    }
}
