//! HTTP transport layer for the PeakMojo SDK.

use crate::config::ClientConfig;
use crate::error::{PeakMojoError, PeakMojoResult};
use peakmojo_core::{ApiCall, HttpMethod};
use reqwest::{header, Client, Method};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// HTTP transport for making API requests.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    config: Arc<ClientConfig>,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration.
    pub fn new(config: Arc<ClientConfig>) -> PeakMojoResult<Self> {
        let mut headers = header::HeaderMap::new();

        let mut authorization = header::HeaderValue::from_str(&config.bearer_token())
            .map_err(|_| PeakMojoError::Config("Invalid API key format".to_string()))?;
        authorization.set_sensitive(true);
        headers.insert(header::AUTHORIZATION, authorization);

        headers.insert(
            header::CONTENT_TYPE,
            header::HeaderValue::from_static("application/json"),
        );

        let client = Client::builder()
            .timeout(config.timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self { client, config })
    }

    /// Build a URL by appending the path to the configured base URL.
    ///
    /// The base URL's own path is kept, so `https://host/api` + `/v1/users`
    /// yields `https://host/api/v1/users`.
    fn build_url(&self, path: &str) -> PeakMojoResult<url::Url> {
        let base = self.config.base_url.as_str().trim_end_matches('/');
        let path = path.trim_start_matches('/');
        Ok(url::Url::parse(&format!("{}/{}", base, path))?)
    }

    /// Send a bound call and decode the JSON response.
    ///
    /// An empty success body decodes to `null`. Non-success statuses become
    /// [`PeakMojoError::Api`].
    pub async fn execute(&self, call: &ApiCall) -> PeakMojoResult<Value> {
        let url = self.build_url(&call.path)?;
        debug!(method = %call.method, url = %url, query = ?call.query, "PeakMojo request");

        let mut request = self.client.request(to_method(call.method), url);
        if !call.query.is_empty() {
            request = request.query(&call.query);
        }
        if let Some(body) = &call.body {
            request = request.json(body);
        }

        let response = request.send().await.map_err(PeakMojoError::from_reqwest)?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(PeakMojoError::from_response(status.as_u16(), &body));
        }

        let bytes = response.bytes().await.map_err(PeakMojoError::from_reqwest)?;
        debug!(status = status.as_u16(), bytes = bytes.len(), "PeakMojo response");

        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }
        Ok(serde_json::from_slice(&bytes)?)
    }
}

fn to_method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}
