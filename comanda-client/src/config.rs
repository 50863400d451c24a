//! Client configuration

use std::time::Duration;

use thiserror::Error;

/// Environment variable carrying the print backend base URL
pub const ENV_BASE_URL: &str = "PRINT_SERVICE_URL";

/// Environment variable carrying the request timeout in seconds
pub const ENV_TIMEOUT: &str = "PRINT_SERVICE_TIMEOUT_SECS";

/// Default request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// Configuration error, fatal at startup
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("invalid value for {var}: {value:?}")]
    InvalidVar { var: &'static str, value: String },
}

/// Client configuration for connecting to the print backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "http://localhost:9100")
    pub base_url: String,

    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the default timeout
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Load configuration from the environment.
    ///
    /// A missing or empty base URL is a startup-fatal error; defaulting to
    /// an unreachable host would only surface later as confusing
    /// transport failures. The timeout alone falls back to
    /// [`DEFAULT_TIMEOUT_SECS`] when unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(
            std::env::var(ENV_BASE_URL).ok(),
            std::env::var(ENV_TIMEOUT).ok(),
        )
    }

    fn from_vars(
        base_url: Option<String>,
        timeout_secs: Option<String>,
    ) -> Result<Self, ConfigError> {
        let base_url = base_url
            .filter(|url| !url.trim().is_empty())
            .ok_or(ConfigError::MissingVar(ENV_BASE_URL))?;

        let mut config = Self::new(base_url);
        if let Some(raw) = timeout_secs {
            let secs: u64 = raw.parse().map_err(|_| ConfigError::InvalidVar {
                var: ENV_TIMEOUT,
                value: raw,
            })?;
            config.timeout = Duration::from_secs(secs);
        }
        Ok(config)
    }

    /// Create a print client from this configuration
    pub fn build_client(&self) -> super::PrintClient {
        super::PrintClient::new(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_base_url_is_fatal() {
        assert_eq!(
            ClientConfig::from_vars(None, None),
            Err(ConfigError::MissingVar(ENV_BASE_URL))
        );
        assert_eq!(
            ClientConfig::from_vars(Some("  ".to_string()), None),
            Err(ConfigError::MissingVar(ENV_BASE_URL))
        );
    }

    #[test]
    fn timeout_defaults_when_unset() {
        let config = ClientConfig::from_vars(Some("http://localhost:9100".to_string()), None)
            .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    }

    #[test]
    fn timeout_parses_from_env_value() {
        let config = ClientConfig::from_vars(
            Some("http://localhost:9100".to_string()),
            Some("12".to_string()),
        )
        .unwrap();
        assert_eq!(config.timeout, Duration::from_secs(12));
    }

    #[test]
    fn garbage_timeout_is_rejected() {
        let result = ClientConfig::from_vars(
            Some("http://localhost:9100".to_string()),
            Some("soon".to_string()),
        );
        assert_eq!(
            result,
            Err(ConfigError::InvalidVar {
                var: ENV_TIMEOUT,
                value: "soon".to_string()
            })
        );
    }
}
