// Read-only resources addressable as peakmojo://<path>

use crate::error::RegistryError;
use crate::types::ResourceDescriptor;

pub const SCHEME: &str = "peakmojo";

const JSON: &str = "application/json";

pub static RESOURCES: &[ResourceDescriptor] = &[
    ResourceDescriptor {
        path: "users",
        name: "PeakMojo Users",
        description: "Access PeakMojo user-related resources",
        mime_type: JSON,
        endpoint: "/v1/users",
    },
    ResourceDescriptor {
        path: "personas",
        name: "PeakMojo Personas",
        description: "Access PeakMojo persona-related resources",
        mime_type: JSON,
        endpoint: "/v1/personas/peakmojo_personas",
    },
    ResourceDescriptor {
        path: "personas/tags",
        name: "PeakMojo Persona Tags",
        description: "Access PeakMojo persona tags",
        mime_type: JSON,
        endpoint: "/v1/personas/tags",
    },
    ResourceDescriptor {
        path: "personas/search",
        name: "PeakMojo Persona Search",
        description: "Search PeakMojo personas",
        mime_type: JSON,
        endpoint: "/v1/personas/search",
    },
    ResourceDescriptor {
        path: "scenarios",
        name: "PeakMojo Scenarios",
        description: "Access PeakMojo scenario-related resources",
        mime_type: JSON,
        endpoint: "/v1/scenarios/peakmojo_scenarios",
    },
    ResourceDescriptor {
        path: "job_scenarios",
        name: "PeakMojo Job Scenarios",
        description: "Access PeakMojo job scenario resources",
        mime_type: JSON,
        endpoint: "/v1/job_scenarios/peakmojo_scenarios",
    },
    ResourceDescriptor {
        path: "jobs",
        name: "PeakMojo Jobs",
        description: "Access PeakMojo job resources",
        mime_type: JSON,
        endpoint: "/v1/jobs",
    },
    ResourceDescriptor {
        path: "applications",
        name: "PeakMojo Applications",
        description: "Access PeakMojo application resources",
        mime_type: JSON,
        endpoint: "/v1/applications",
    },
    ResourceDescriptor {
        path: "practices",
        name: "PeakMojo Practices",
        description: "Access PeakMojo practice resources",
        mime_type: JSON,
        endpoint: "/v1/practices",
    },
    ResourceDescriptor {
        path: "skills",
        name: "PeakMojo Skills",
        description: "Access PeakMojo skill resources",
        mime_type: JSON,
        endpoint: "/v1/skills",
    },
    ResourceDescriptor {
        path: "certificates",
        name: "PeakMojo Certificates",
        description: "Access PeakMojo certificate resources",
        mime_type: JSON,
        endpoint: "/v1/certificates",
    },
];

impl ResourceDescriptor {
    pub fn uri(&self) -> String {
        format!("{}://{}", SCHEME, self.path)
    }
}

/// Resolve a `peakmojo://` URI to its resource entry.
///
/// The scheme is checked first, so a foreign URI never reaches the path
/// lookup. A trailing `/` on the path is ignored.
pub fn resolve_uri(uri: &str) -> Result<&'static ResourceDescriptor, RegistryError> {
    let (scheme, path) = uri
        .split_once("://")
        .ok_or_else(|| RegistryError::UnsupportedScheme(uri.to_string()))?;

    if scheme != SCHEME {
        return Err(RegistryError::UnsupportedScheme(scheme.to_string()));
    }

    let key = path.trim_end_matches('/');
    RESOURCES
        .iter()
        .find(|r| r.path == key)
        .ok_or_else(|| RegistryError::UnknownResource(key.to_string()))
}
