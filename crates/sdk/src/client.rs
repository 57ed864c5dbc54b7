//! Main client for the PeakMojo SDK.

use crate::config::{ClientConfig, DEFAULT_TIMEOUT};
use crate::error::{PeakMojoError, PeakMojoResult};
use crate::transport::HttpTransport;
use peakmojo_core::ApiCall;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use url::Url;

/// Main client for interacting with the PeakMojo API.
#[derive(Debug, Clone)]
pub struct PeakMojoClient {
    config: Arc<ClientConfig>,
    http: HttpTransport,
}

impl PeakMojoClient {
    /// Create a new client builder.
    pub fn builder() -> PeakMojoClientBuilder {
        PeakMojoClientBuilder::new()
    }

    /// Create a client from configuration.
    pub fn from_config(config: ClientConfig) -> PeakMojoResult<Self> {
        let config = Arc::new(config);
        let http = HttpTransport::new(config.clone())?;

        Ok(Self { config, http })
    }

    /// Configuration this client was built with.
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Send a bound call and return the decoded JSON response.
    pub async fn execute(&self, call: &ApiCall) -> PeakMojoResult<Value> {
        self.http.execute(call).await
    }
}

/// Builder for creating a PeakMojoClient.
pub struct PeakMojoClientBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    timeout: Duration,
}

impl PeakMojoClientBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            base_url: None,
            api_key: None,
            timeout: DEFAULT_TIMEOUT,
        }
    }

    /// Set the base URL of the PeakMojo API.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the API key for authentication.
    pub fn api_key(mut self, key: impl Into<String>) -> Self {
        self.api_key = Some(key.into());
        self
    }

    /// Set the API key if one is available.
    pub fn maybe_api_key(mut self, key: Option<String>) -> Self {
        self.api_key = key;
        self
    }

    /// Set the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    pub fn build(self) -> PeakMojoResult<PeakMojoClient> {
        let base_url_str = self
            .base_url
            .ok_or_else(|| PeakMojoError::Config("base_url is required".to_string()))?;

        let base_url = Url::parse(&base_url_str)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(PeakMojoError::Config(format!(
                "base_url must be http or https, got {}",
                base_url.scheme()
            )));
        }

        if self.timeout.is_zero() {
            return Err(PeakMojoError::Config("timeout must be non-zero".to_string()));
        }

        let config = ClientConfig {
            base_url,
            api_key: self.api_key.filter(|k| !k.is_empty()),
            timeout: self.timeout,
        };

        PeakMojoClient::from_config(config)
    }
}

impl Default for PeakMojoClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
