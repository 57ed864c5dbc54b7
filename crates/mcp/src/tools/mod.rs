pub mod api;
mod registry;

pub use api::ApiTool;
pub use registry::{
    json_schema_array, json_schema_free_object, json_schema_integer, json_schema_object,
    json_schema_string, Tool, ToolRegistry,
};
