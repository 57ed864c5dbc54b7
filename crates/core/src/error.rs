//! Error types for registry lookups and payload encoding.

/// Failures detected before any request leaves the process.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("Unknown tool: {0}")]
    UnknownTool(String),

    #[error("Unknown resource path: {0}")]
    UnknownResource(String),

    #[error("Unsupported URI scheme: {0}")]
    UnsupportedScheme(String),

    #[error("Missing required argument '{argument}' for tool '{tool}'")]
    MissingArgument { tool: String, argument: String },

    #[error("Invalid argument '{argument}': {reason}")]
    InvalidArgument { argument: String, reason: String },
}

/// Failure to render or parse a payload in the output encoding.
#[derive(Debug, thiserror::Error)]
pub enum EncodeError {
    #[error("JSON encoding error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("YAML encoding error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Unknown output format: {0} (expected 'json' or 'yaml')")]
    UnknownFormat(String),
}
