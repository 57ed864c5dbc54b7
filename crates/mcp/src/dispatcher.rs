// Routes tool calls and resource reads to the executor

use crate::catalog;
use crate::error::DispatchError;
use crate::executor::{Executor, Payload};
use crate::protocol::{ResourceSchema, ToolSchema};
use crate::tools::{ApiTool, ToolRegistry};
use peakmojo_core::resources;
use peakmojo_core::{ApiCall, RegistryError};
use std::sync::Arc;
use tracing::{debug, error};

pub struct Dispatcher {
    tools: ToolRegistry,
    executor: Arc<Executor>,
}

impl Dispatcher {
    /// Dispatcher with every PeakMojo endpoint registered as a tool
    pub fn new(executor: Executor) -> Self {
        let executor = Arc::new(executor);
        let mut tools = ToolRegistry::new();
        ApiTool::register_all(&mut tools, executor.clone());
        Self { tools, executor }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    pub fn list_tools(&self) -> Vec<ToolSchema> {
        self.tools.list_schemas()
    }

    pub fn list_resources(&self) -> Vec<ResourceSchema> {
        catalog::resources()
    }

    /// Invoke a tool. Every failure, unknown names and missing arguments
    /// included, comes back as an error payload.
    pub async fn call_tool(&self, name: &str, arguments: serde_json::Value) -> Payload {
        match self.try_call_tool(name, arguments).await {
            Ok(payload) => payload,
            Err(e) => {
                error!(tool = name, kind = ?e.kind(), "Error invoking tool {}: {}", name, e);
                Payload::error(self.executor.format(), &e.to_string())
            }
        }
    }

    pub async fn try_call_tool(
        &self,
        name: &str,
        arguments: serde_json::Value,
    ) -> Result<Payload, DispatchError> {
        let tool = self
            .tools
            .get(name)
            .ok_or_else(|| RegistryError::UnknownTool(name.to_string()))?;
        tool.execute(arguments).await
    }

    /// Read a `peakmojo://` resource. The URI is resolved before any request
    /// is made; remote failures are still recovered into an error payload.
    pub async fn read_resource(&self, uri: &str) -> Result<Payload, DispatchError> {
        let resource = resources::resolve_uri(uri)?;
        debug!(uri, endpoint = resource.endpoint, "Reading resource");
        Ok(self.executor.execute(&ApiCall::get(resource.endpoint)).await)
    }
}
