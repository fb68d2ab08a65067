//! Officer secret configuration.

use serde::{Deserialize, Serialize};

/// Configuration for role authentication.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Shared secret required to sign up or log in as an officer.
    ///
    /// Prefer setting it through the environment variable named by
    /// `officer_secret_env`.
    #[serde(default)]
    pub officer_secret: Option<String>,

    /// Environment variable that overrides `officer_secret`.
    #[serde(default = "default_officer_secret_env")]
    pub officer_secret_env: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            officer_secret: None,
            officer_secret_env: default_officer_secret_env(),
        }
    }
}

impl AuthConfig {
    /// Whether a non-empty officer secret is configured.
    pub fn has_officer_secret(&self) -> bool {
        self.officer_secret.as_deref().is_some_and(|s| !s.is_empty())
    }
}

fn default_officer_secret_env() -> String {
    "OFFICER_SECRET".to_string()
}
