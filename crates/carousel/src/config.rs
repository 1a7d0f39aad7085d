//! Carousel configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `SHOWCASE_FEED_URL` - Product feed endpoint returning a JSON array
//!
//! ## Optional
//! - `SHOWCASE_STATE_PATH` - Where the CLI host persists local state
//!   (default: showcase-state.json)

use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Carousel runtime configuration.
#[derive(Debug, Clone)]
pub struct CarouselConfig {
    /// Product feed endpoint.
    pub feed_url: Url,
    /// Path of the local state file used by the CLI host.
    pub state_path: PathBuf,
}

impl CarouselConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `SHOWCASE_FEED_URL` is missing or does
    /// not parse as a URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let feed_url = parse_url("SHOWCASE_FEED_URL", &get_required_env("SHOWCASE_FEED_URL")?)?;
        let state_path = get_env_or_default("SHOWCASE_STATE_PATH", "showcase-state.json").into();

        Ok(Self {
            feed_url,
            state_path,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_owned()))
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_owned())
}

/// Parse a URL-valued variable, naming the variable on failure.
fn parse_url(key: &str, raw: &str) -> Result<Url, ConfigError> {
    Url::parse(raw).map_err(|e| ConfigError::InvalidEnvVar(key.to_owned(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_url_valid() {
        let url = parse_url("SHOWCASE_FEED_URL", "https://feeds.example.com/products.json");
        assert_eq!(
            url.unwrap().as_str(),
            "https://feeds.example.com/products.json"
        );
    }

    #[test]
    fn test_parse_url_invalid_names_variable() {
        let err = parse_url("SHOWCASE_FEED_URL", "not a url").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "SHOWCASE_FEED_URL"));
    }

    #[test]
    fn test_config_error_display() {
        let err = ConfigError::MissingEnvVar("SHOWCASE_FEED_URL".to_owned());
        assert_eq!(
            err.to_string(),
            "Missing environment variable: SHOWCASE_FEED_URL"
        );
    }
}
