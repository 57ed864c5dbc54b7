//! Error types for the PeakMojo SDK.

use serde::{Deserialize, Serialize};

/// Result type for SDK operations.
pub type PeakMojoResult<T> = Result<T, PeakMojoError>;

/// Error types that can occur when talking to the PeakMojo API.
#[derive(Debug, thiserror::Error)]
pub enum PeakMojoError {
    /// HTTP request failed before a response was received.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// API returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Api {
        status: u16,
        message: String,
        details: Option<String>,
    },

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Response body was not valid JSON.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Request exceeded the configured timeout.
    #[error("Request timed out")]
    Timeout,

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
}

impl PeakMojoError {
    /// Classify a reqwest failure, keeping timeouts distinct.
    pub fn from_reqwest(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            Self::Timeout
        } else {
            Self::Http(error)
        }
    }

    /// Create an API error from a status code and response body.
    pub fn from_response(status: u16, body: &str) -> Self {
        if let Ok(error_response) = serde_json::from_str::<ErrorResponse>(body) {
            return Self::Api {
                status,
                message: error_response.error,
                details: error_response.details,
            };
        }

        let message = if body.trim().is_empty() {
            reqwest::StatusCode::from_u16(status)
                .ok()
                .and_then(|s| s.canonical_reason())
                .unwrap_or("Unknown status")
                .to_string()
        } else {
            body.to_string()
        };

        Self::Api {
            status,
            message,
            details: None,
        }
    }

    /// HTTP status of the failed call, if the server answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Api { status, .. } => Some(*status),
            Self::Http(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

/// Error body returned by the PeakMojo API.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(alias = "message", alias = "detail")]
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_response_structured_body() {
        let err = PeakMojoError::from_response(403, r#"{"error": "forbidden", "details": "bad key"}"#);
        match err {
            PeakMojoError::Api {
                status,
                message,
                details,
            } => {
                assert_eq!(status, 403);
                assert_eq!(message, "forbidden");
                assert_eq!(details.as_deref(), Some("bad key"));
            }
            other => panic!("Expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_from_response_detail_alias() {
        let err = PeakMojoError::from_response(422, r#"{"detail": "user_id is invalid"}"#);
        assert_eq!(err.to_string(), "API error (status 422): user_id is invalid");
    }

    #[test]
    fn test_from_response_plain_body() {
        let err = PeakMojoError::from_response(502, "upstream down");
        assert_eq!(err.to_string(), "API error (status 502): upstream down");
        assert_eq!(err.status(), Some(502));
    }

    #[test]
    fn test_from_response_empty_body_uses_reason() {
        let err = PeakMojoError::from_response(404, "");
        assert_eq!(err.to_string(), "API error (status 404): Not Found");
    }
}
