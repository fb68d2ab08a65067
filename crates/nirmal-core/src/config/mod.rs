//! Configuration types for the Nirmal complaint service.
//!
//! Configuration is layered, lowest precedence first:
//!
//! - built-in defaults
//! - an optional TOML file (`nirmal.toml`)
//! - environment variables (`PORT`, and the officer secret variable named by
//!   `auth.officer_secret_env`, `OFFICER_SECRET` by default)
//! - command-line flags, applied by the server binary
//!
//! # Example
//!
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 3000
//!
//! [storage]
//! users_file = "data/users.json"
//! complaints_file = "data/data.json"
//! id_strategy = "max"
//!
//! [auth]
//! officer_secret_env = "NIRMAL_OFFICER_SECRET"
//! ```

pub mod auth;
pub mod server;
pub mod storage;

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub use auth::AuthConfig;
pub use server::ServerConfig;
pub use storage::{IdStrategy, StorageConfig};

/// Environment variable holding the listen port.
pub const PORT_ENV: &str = "PORT";

/// Complete application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP listener settings.
    #[serde(default)]
    pub server: ServerConfig,

    /// Where the JSON collections live and how ids are assigned.
    #[serde(default)]
    pub storage: StorageConfig,

    /// Officer secret settings.
    #[serde(default)]
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Parse a TOML config file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&raw).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Load from an optional file, then apply process environment overrides.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.with_env_from(|var| std::env::var(var).ok())
    }

    /// Apply environment overrides using the given lookup.
    ///
    /// Empty values are treated as unset.
    pub fn with_env_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |var: &str| lookup(var).filter(|v| !v.is_empty());

        if let Some(port) = lookup(PORT_ENV) {
            self.server.port = port.parse().map_err(|_| ConfigError::InvalidEnv {
                var: PORT_ENV.to_string(),
                value: port,
            })?;
        }

        if let Some(secret) = lookup(&self.auth.officer_secret_env) {
            self.auth.officer_secret = Some(secret);
        }

        Ok(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k: &str| map.get(k).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.users_file.to_str(), Some("users.json"));
        assert_eq!(config.storage.complaints_file.to_str(), Some("data.json"));
        assert_eq!(config.storage.id_strategy, IdStrategy::Count);
        assert_eq!(config.auth.officer_secret_env, "OFFICER_SECRET");
        assert!(config.auth.officer_secret.is_none());
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::default()
            .with_env_from(env(&[("PORT", "8081"), ("OFFICER_SECRET", "gram123")]))
            .unwrap();
        assert_eq!(config.server.port, 8081);
        assert_eq!(config.auth.officer_secret.as_deref(), Some("gram123"));
    }

    #[test]
    fn test_empty_env_is_unset() {
        let config = AppConfig::default()
            .with_env_from(env(&[("PORT", ""), ("OFFICER_SECRET", "")]))
            .unwrap();
        assert_eq!(config.server.port, 3000);
        assert!(config.auth.officer_secret.is_none());
    }

    #[test]
    fn test_invalid_port_env() {
        let err = AppConfig::default()
            .with_env_from(env(&[("PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnv { .. }));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[server]
port = 4000

[storage]
complaints_file = "var/complaints.json"
id_strategy = "max"

[auth]
officer_secret = "from-file"
officer_secret_env = "NIRMAL_SECRET"
"#
        )
        .unwrap();

        let config = AppConfig::from_file(file.path()).unwrap();
        assert_eq!(config.server.port, 4000);
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.storage.users_file.to_str(), Some("users.json"));
        assert_eq!(config.storage.id_strategy, IdStrategy::Max);

        let config = config
            .with_env_from(env(&[("OFFICER_SECRET", "ignored"), ("NIRMAL_SECRET", "env")]))
            .unwrap();
        assert_eq!(config.auth.officer_secret.as_deref(), Some("env"));
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::from_file("/nonexistent/nirmal.toml").unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
