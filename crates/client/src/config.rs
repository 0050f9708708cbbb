//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SCHOOL_BACKEND_URL` - Base URL of the remote content store API
//!
//! ## Optional
//! - `SCHOOL_BACKEND_API_KEY` - Deployment key sent with every store request
//! - `SCHOOL_BACKEND_TIMEOUT_SECS` - Request timeout (default: 30)
//! - `SCHOOL_STATE_DIR` - Directory for persisted client state such as the
//!   admin session token (default: `.school-site`)

use std::path::PathBuf;
use std::time::Duration;

use secrecy::SecretString;
use thiserror::Error;
use url::Url;

const DEFAULT_TIMEOUT_SECS: u64 = 30;
const DEFAULT_STATE_DIR: &str = ".school-site";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site application configuration.
#[derive(Clone)]
pub struct SiteConfig {
    /// Base URL of the remote content store API
    pub backend_url: Url,
    /// Deployment key for the remote store, if the deployment requires one
    pub backend_api_key: Option<SecretString>,
    /// Request timeout applied to every store call
    pub backend_timeout: Duration,
    /// Directory holding persisted client state (admin session token)
    pub state_dir: PathBuf,
}

impl std::fmt::Debug for SiteConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SiteConfig")
            .field("backend_url", &self.backend_url.as_str())
            .field(
                "backend_api_key",
                &self.backend_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .field("backend_timeout", &self.backend_timeout)
            .field("state_dir", &self.state_dir)
            .finish()
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let backend_url = get_required_env("SCHOOL_BACKEND_URL")?
            .parse::<Url>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("SCHOOL_BACKEND_URL".to_string(), e.to_string())
            })?;
        let backend_api_key = get_optional_env("SCHOOL_BACKEND_API_KEY").map(SecretString::from);
        let timeout_secs = get_env_or_default(
            "SCHOOL_BACKEND_TIMEOUT_SECS",
            &DEFAULT_TIMEOUT_SECS.to_string(),
        )
        .parse::<u64>()
        .map_err(|e| {
            ConfigError::InvalidEnvVar("SCHOOL_BACKEND_TIMEOUT_SECS".to_string(), e.to_string())
        })?;
        let state_dir = PathBuf::from(get_env_or_default("SCHOOL_STATE_DIR", DEFAULT_STATE_DIR));

        Ok(Self {
            backend_url,
            backend_api_key,
            backend_timeout: Duration::from_secs(timeout_secs),
            state_dir,
        })
    }

    /// Build a configuration directly, for tests and embedding consumers.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `backend_url` is not a valid URL.
    pub fn new(backend_url: &str, state_dir: impl Into<PathBuf>) -> Result<Self, ConfigError> {
        Ok(Self {
            backend_url: backend_url.parse::<Url>().map_err(|e| {
                ConfigError::InvalidEnvVar("backend_url".to_string(), e.to_string())
            })?,
            backend_api_key: None,
            backend_timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            state_dir: state_dir.into(),
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_parses_backend_url() {
        let config = SiteConfig::new("https://store.example.com/api/", "/tmp/state").unwrap();
        assert_eq!(config.backend_url.as_str(), "https://store.example.com/api/");
        assert_eq!(config.state_dir, PathBuf::from("/tmp/state"));
    }

    #[test]
    fn test_new_rejects_invalid_url() {
        let result = SiteConfig::new("not a url", "/tmp/state");
        assert!(matches!(result, Err(ConfigError::InvalidEnvVar(_, _))));
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = SiteConfig::new("https://store.example.com/", "/tmp/state").unwrap();
        config.backend_api_key = Some(SecretString::from("k-3f9a8b7c6d5e"));

        let debug_output = format!("{config:?}");
        assert!(debug_output.contains("[REDACTED]"));
        assert!(!debug_output.contains("k-3f9a8b7c6d5e"));
    }
}
