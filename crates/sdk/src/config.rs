//! Configuration types for the PeakMojo SDK.

use std::time::Duration;
use url::Url;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://api.staging.readymojo.com";

/// Request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Credentials and connection settings, fixed for the process lifetime.
#[derive(Clone)]
pub struct ClientConfig {
    /// Base URL of the PeakMojo API.
    pub base_url: Url,
    /// API key sent as a bearer token.
    pub api_key: Option<String>,
    /// Request timeout.
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a new configuration with the given base URL.
    pub fn new(base_url: Url) -> Self {
        Self {
            base_url,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Value of the `Authorization` header. Sent even without a key so the
    /// API answers with its own authentication error.
    pub fn bearer_token(&self) -> String {
        format!("Bearer {}", self.api_key.as_deref().unwrap_or_default())
    }
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_config_new() {
        let url = Url::parse("https://example.com").unwrap();
        let config = ClientConfig::new(url.clone());

        assert_eq!(config.base_url, url);
        assert!(config.api_key.is_none());
        assert_eq!(config.timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_bearer_token() {
        let mut config = ClientConfig::new(Url::parse(DEFAULT_BASE_URL).unwrap());
        assert_eq!(config.bearer_token(), "Bearer ");

        config.api_key = Some("pm-123".to_string());
        assert_eq!(config.bearer_token(), "Bearer pm-123");
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let mut config = ClientConfig::new(Url::parse(DEFAULT_BASE_URL).unwrap());
        config.api_key = Some("pm-secret".to_string());

        let debug = format!("{:?}", config);
        assert!(!debug.contains("pm-secret"));
        assert!(debug.contains("<redacted>"));
    }
}
