//! Output encoding for response payloads.
//!
//! A deployment picks exactly one format at startup and every payload, error
//! payloads included, is rendered with it.

use crate::error::EncodeError;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Pretty-printed JSON text
    #[default]
    Json,
    /// YAML document, keys in source order, unicode unescaped
    Yaml,
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
        }
    }

    /// Render a decoded API response as text.
    pub fn encode(&self, value: &Value) -> Result<String, EncodeError> {
        match self {
            OutputFormat::Json => Ok(serde_json::to_string_pretty(value)?),
            OutputFormat::Yaml => Ok(serde_yaml::to_string(value)?),
        }
    }

    /// Parse text produced by [`OutputFormat::encode`] back into a value.
    pub fn decode(&self, text: &str) -> Result<Value, EncodeError> {
        match self {
            OutputFormat::Json => Ok(serde_json::from_str(text)?),
            OutputFormat::Yaml => Ok(serde_yaml::from_str(text)?),
        }
    }

    /// Render `{error: <message>}`.
    pub fn encode_error(&self, message: &str) -> String {
        let document = serde_json::json!({ "error": message });
        self.encode(&document).unwrap_or_else(|_| match self {
            OutputFormat::Json => format!("{{\"error\": {:?}}}", message),
            OutputFormat::Yaml => format!("error: {:?}\n", message),
        })
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OutputFormat {
    type Err = EncodeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "yaml" | "yml" => Ok(OutputFormat::Yaml),
            other => Err(EncodeError::UnknownFormat(other.to_string())),
        }
    }
}
