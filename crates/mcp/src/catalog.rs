// Static tool and resource descriptors advertised to the client
// Derived from the endpoint and resource tables; performs no I/O

use crate::protocol::{ResourceSchema, ToolSchema};
use crate::tools::{
    json_schema_array, json_schema_free_object, json_schema_integer, json_schema_object,
    json_schema_string,
};
use peakmojo_core::endpoints::ENDPOINTS;
use peakmojo_core::resources::RESOURCES;
use peakmojo_core::{EndpointDescriptor, ParamKind, ResourceDescriptor};
use serde_json::{Map, Value};

pub fn tool_schema(endpoint: &EndpointDescriptor) -> ToolSchema {
    let mut properties = Map::new();
    for param in endpoint.params {
        let schema = match param.kind {
            ParamKind::String => json_schema_string(param.description),
            ParamKind::Integer => json_schema_integer(param.description),
            ParamKind::Object => json_schema_free_object(param.description),
            ParamKind::Array => {
                json_schema_array(serde_json::json!({"type": "object"}), param.description)
            }
        };
        properties.insert(param.name.to_string(), schema);
    }

    ToolSchema {
        name: endpoint.name.to_string(),
        description: endpoint.description.to_string(),
        input_schema: json_schema_object(
            Value::Object(properties),
            endpoint.required_params().map(|p| p.name).collect(),
        ),
    }
}

pub fn resource_schema(resource: &ResourceDescriptor) -> ResourceSchema {
    ResourceSchema {
        uri: resource.uri(),
        name: resource.name.to_string(),
        description: resource.description.to_string(),
        mime_type: resource.mime_type.to_string(),
    }
}

/// Every tool, in registry order
pub fn tools() -> Vec<ToolSchema> {
    ENDPOINTS.iter().map(tool_schema).collect()
}

/// Every resource, in registry order
pub fn resources() -> Vec<ResourceSchema> {
    RESOURCES.iter().map(resource_schema).collect()
}
