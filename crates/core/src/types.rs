use serde::{Deserialize, Serialize};

/// HTTP method used by a remote endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HttpMethod {
    Get,
    Post,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
        }
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JSON type of a tool parameter, as advertised in the input schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamKind {
    String,
    Integer,
    Object,
    Array,
}

impl ParamKind {
    pub fn json_type(&self) -> &'static str {
        match self {
            ParamKind::String => "string",
            ParamKind::Integer => "integer",
            ParamKind::Object => "object",
            ParamKind::Array => "array",
        }
    }
}

/// Where an argument ends up in the outgoing request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParamLocation {
    /// Substituted into a `{name}` placeholder of the path template
    Path,
    /// Appended to the query string, only when supplied
    Query,
    /// Carried in the JSON body (see [`BodyBinding`])
    Body,
}

/// A single parameter accepted by an endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParamSpec {
    pub name: &'static str,
    pub kind: ParamKind,
    pub location: ParamLocation,
    pub required: bool,
    pub description: &'static str,
}

impl ParamSpec {
    pub const fn path(name: &'static str, description: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::String,
            location: ParamLocation::Path,
            required: true,
            description,
        }
    }

    pub const fn query(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            location: ParamLocation::Query,
            required: false,
            description,
        }
    }

    pub const fn body(name: &'static str, kind: ParamKind, description: &'static str) -> Self {
        Self {
            name,
            kind,
            location: ParamLocation::Body,
            required: true,
            description,
        }
    }
}

/// How the JSON request body is assembled from the arguments
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BodyBinding {
    /// No body is sent
    None,
    /// The named argument is sent as the body verbatim
    Argument(&'static str),
    /// The named argument is wrapped as `{key: argument}`
    Wrapped {
        key: &'static str,
        argument: &'static str,
    },
}

/// Registry entry binding a tool name to a remote endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EndpointDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    pub method: HttpMethod,
    /// Path template, placeholders written as `{param}`
    pub path: &'static str,
    pub params: &'static [ParamSpec],
    pub body: BodyBinding,
}

/// Read-only view addressable as `peakmojo://<path>`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceDescriptor {
    pub path: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub mime_type: &'static str,
    pub endpoint: &'static str,
}

/// A fully bound request, ready to be sent
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiCall {
    pub method: HttpMethod,
    pub path: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub query: Vec<(String, String)>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<serde_json::Value>,
}

impl ApiCall {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.into(),
            query: Vec::new(),
            body: None,
        }
    }
}

impl std::fmt::Display for ApiCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.method, self.path)
    }
}
