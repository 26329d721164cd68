//! Configuration for the Xendit client

use http::HeaderMap;
use secrecy::SecretString;
use std::time::Duration;

/// Configuration for the Xendit client.
///
/// This struct holds all the options used to build a [`crate::Client`]. Most
/// callers only need a secret key; the remaining knobs exist for testing
/// against mock servers and for pinning an API version.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Secret API key, sent as the Basic auth username on every request
    pub secret_key: Option<SecretString>,

    /// Base URL for the API
    pub base_url: Option<String>,

    /// Value for the `X-API-VERSION` header; when unset the account default
    /// version applies
    pub api_version: Option<String>,

    /// Default timeout for requests
    pub timeout: Duration,

    /// Custom headers to include with every request
    pub default_headers: HeaderMap,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            secret_key: None,
            base_url: None,
            api_version: None,
            timeout: Duration::from_secs(60),
            default_headers: HeaderMap::new(),
        }
    }
}

impl ClientConfig {
    /// Create a new configuration with a secret key.
    pub fn with_secret_key(secret_key: impl Into<String>) -> Self {
        Self {
            secret_key: Some(SecretString::new(secret_key.into().into_boxed_str())),
            ..Default::default()
        }
    }

    /// Load configuration from environment variables.
    ///
    /// This will look for:
    /// - `XENDIT_SECRET_KEY` for authentication
    /// - `XENDIT_BASE_URL` for the API base URL
    /// - `XENDIT_API_VERSION` for the API version header
    /// - `XENDIT_TIMEOUT` for request timeout (in seconds, must be a valid u64)
    ///
    /// # Errors
    ///
    /// Returns an error if `XENDIT_TIMEOUT` is set but cannot be parsed as a
    /// number of seconds.
    #[cfg(feature = "env")]
    pub fn from_env() -> Result<Self, crate::error::Error> {
        use std::env;

        // Pick up a .env file when present; ignore if absent.
        let _ = dotenvy::dotenv();

        let mut config = Self::default();

        if let Ok(secret_key) = env::var("XENDIT_SECRET_KEY") {
            config.secret_key = Some(SecretString::new(secret_key.into_boxed_str()));
        }

        if let Ok(base_url) = env::var("XENDIT_BASE_URL") {
            config.base_url = Some(base_url);
        }

        if let Ok(api_version) = env::var("XENDIT_API_VERSION") {
            config.api_version = Some(api_version);
        }

        if let Ok(timeout_str) = env::var("XENDIT_TIMEOUT") {
            let timeout_secs = timeout_str.parse::<u64>().map_err(|_| {
                crate::error::Error::InvalidRequest(format!(
                    "XENDIT_TIMEOUT must be a valid number of seconds, got: '{}'",
                    timeout_str
                ))
            })?;
            config.timeout = Duration::from_secs(timeout_secs);
        }

        Ok(config)
    }

    /// Merge this configuration with another, with the other taking precedence.
    pub fn merge(mut self, other: ClientConfig) -> Self {
        if other.secret_key.is_some() {
            self.secret_key = other.secret_key;
        }
        if other.base_url.is_some() {
            self.base_url = other.base_url;
        }
        if other.api_version.is_some() {
            self.api_version = other.api_version;
        }
        if other.timeout != Duration::from_secs(60) {
            self.timeout = other.timeout;
        }
        if !other.default_headers.is_empty() {
            for (key, value) in other.default_headers.iter() {
                self.default_headers.insert(key.clone(), value.clone());
            }
        }

        self
    }
}

/// Builder for creating ClientConfig with a fluent API.
#[derive(Debug, Default)]
pub struct ClientConfigBuilder {
    config: ClientConfig,
}

impl ClientConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the secret API key.
    pub fn secret_key(mut self, secret_key: impl Into<String>) -> Self {
        self.config.secret_key = Some(SecretString::new(secret_key.into().into_boxed_str()));
        self
    }

    /// Set the base URL.
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the API version header value.
    pub fn api_version(mut self, api_version: impl Into<String>) -> Self {
        self.config.api_version = Some(api_version.into());
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.timeout = timeout;
        self
    }

    /// Add a default header.
    pub fn default_header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        let key: http::HeaderName = key.into().parse().expect("Invalid header name");
        let value: http::HeaderValue = value.into().parse().expect("Invalid header value");
        self.config.default_headers.insert(key, value);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> ClientConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.timeout, Duration::from_secs(60));
        assert!(config.secret_key.is_none());
        assert!(config.api_version.is_none());
    }

    #[test]
    fn test_config_with_secret_key() {
        let config = ClientConfig::with_secret_key("xnd_development_test");
        assert!(config.secret_key.is_some());
    }

    #[test]
    fn test_config_builder() {
        let config = ClientConfigBuilder::new()
            .secret_key("xnd_development_test")
            .base_url("https://example.com")
            .api_version("2020-02-01")
            .timeout(Duration::from_secs(30))
            .build();

        assert!(config.secret_key.is_some());
        assert_eq!(config.base_url, Some("https://example.com".to_string()));
        assert_eq!(config.api_version, Some("2020-02-01".to_string()));
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_config_merge() {
        let config1 = ClientConfig::with_secret_key("key1");
        let config2 = ClientConfigBuilder::new()
            .base_url("https://example.com")
            .timeout(Duration::from_secs(30))
            .build();

        let merged = config1.merge(config2);
        assert!(merged.secret_key.is_some());
        assert_eq!(merged.base_url, Some("https://example.com".to_string()));
        assert_eq!(merged.timeout, Duration::from_secs(30));
    }

    #[cfg(feature = "env")]
    #[test]
    fn test_config_from_env_invalid_timeout() {
        temp_env::with_vars(
            [
                ("XENDIT_SECRET_KEY", Some("xnd_test")),
                ("XENDIT_TIMEOUT", Some("not-a-number")),
            ],
            || {
                assert!(ClientConfig::from_env().is_err());
            },
        );
    }
}
