// Executes bound API calls and renders the outcome in the deployment's output format

use crate::error::DispatchError;
use crate::protocol::{CallToolResult, ToolContent};
use peakmojo_core::{ApiCall, OutputFormat};
use peakmojo_sdk::PeakMojoClient;
use tracing::error;

/// A single text block returned to the caller
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload {
    pub text: String,
    pub is_error: bool,
}

impl Payload {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            is_error: false,
        }
    }

    /// `{error: <message>}` in the given format
    pub fn error(format: OutputFormat, message: &str) -> Self {
        Self {
            text: format.encode_error(message),
            is_error: true,
        }
    }

    pub fn into_call_tool_result(self) -> CallToolResult {
        CallToolResult {
            content: vec![ToolContent::text(self.text)],
            is_error: self.is_error.then_some(true),
        }
    }
}

/// Sends calls through the SDK client. Failures are recovered into error
/// payloads; nothing here returns an error to the protocol layer.
#[derive(Debug, Clone)]
pub struct Executor {
    client: PeakMojoClient,
    format: OutputFormat,
}

impl Executor {
    pub fn new(client: PeakMojoClient, format: OutputFormat) -> Self {
        Self { client, format }
    }

    pub fn format(&self) -> OutputFormat {
        self.format
    }

    /// Execute and encode, propagating failures
    pub async fn try_execute(&self, call: &ApiCall) -> Result<String, DispatchError> {
        let value = self.client.execute(call).await?;
        Ok(self.format.encode(&value)?)
    }

    /// Execute and encode, turning any failure into an error payload
    pub async fn execute(&self, call: &ApiCall) -> Payload {
        match self.try_execute(call).await {
            Ok(text) => Payload::text(text),
            Err(e) => {
                error!(call = %call, kind = ?e.kind(), "Error executing query: {}", e);
                Payload::error(self.format, &e.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn executor(base_url: &str, format: OutputFormat) -> Executor {
        let client = PeakMojoClient::builder()
            .base_url(base_url)
            .api_key("pm-test")
            .build()
            .unwrap();
        Executor::new(client, format)
    }

    #[tokio::test]
    async fn test_success_rendered_as_json() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"users": [{"id": "u1"}]})))
            .mount(&server)
            .await;

        let payload = executor(&server.uri(), OutputFormat::Json)
            .execute(&ApiCall::get("/v1/users"))
            .await;

        assert!(!payload.is_error);
        let decoded: Value = serde_json::from_str(&payload.text).unwrap();
        assert_eq!(decoded, json!({"users": [{"id": "u1"}]}));
    }

    #[tokio::test]
    async fn test_success_rendered_as_yaml() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/personas/tags"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"tags": ["sales", "hr"]})))
            .mount(&server)
            .await;

        let payload = executor(&server.uri(), OutputFormat::Yaml)
            .execute(&ApiCall::get("/v1/personas/tags"))
            .await;

        assert!(!payload.is_error);
        assert_eq!(payload.text, "tags:\n- sales\n- hr\n");
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_json_error_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(500).set_body_string("internal failure"))
            .mount(&server)
            .await;

        let payload = executor(&server.uri(), OutputFormat::Json)
            .execute(&ApiCall::get("/v1/users"))
            .await;

        assert!(payload.is_error);
        let decoded: Value = serde_json::from_str(&payload.text).unwrap();
        assert_eq!(
            decoded,
            json!({"error": "API error (status 500): internal failure"})
        );
    }

    #[tokio::test]
    async fn test_non_2xx_becomes_yaml_error_payload() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v1/users"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Unauthorized"})))
            .mount(&server)
            .await;

        let payload = executor(&server.uri(), OutputFormat::Yaml)
            .execute(&ApiCall::get("/v1/users"))
            .await;

        assert!(payload.is_error);
        assert_eq!(
            OutputFormat::Yaml.decode(&payload.text).unwrap(),
            json!({"error": "API error (status 401): Unauthorized"})
        );
    }

    #[tokio::test]
    async fn test_transport_failure_recovered() {
        let payload = executor("http://127.0.0.1:9", OutputFormat::Json)
            .execute(&ApiCall::get("/v1/users"))
            .await;

        assert!(payload.is_error);
        let decoded: Value = serde_json::from_str(&payload.text).unwrap();
        assert!(decoded["error"].is_string());
    }

    #[test]
    fn test_payload_into_call_tool_result() {
        let ok = Payload::text("a: 1\n").into_call_tool_result();
        assert_eq!(ok.is_error, None);
        assert_eq!(ok.content[0].as_text(), "a: 1\n");

        let err = Payload::error(OutputFormat::Json, "boom").into_call_tool_result();
        assert_eq!(err.is_error, Some(true));
    }
}
