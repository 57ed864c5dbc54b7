// Tools backed by a PeakMojo endpoint descriptor

use crate::catalog;
use crate::error::DispatchError;
use crate::executor::{Executor, Payload};
use crate::protocol::ToolSchema;
use crate::tools::{Tool, ToolRegistry};
use peakmojo_core::endpoints::ENDPOINTS;
use peakmojo_core::EndpointDescriptor;
use std::sync::Arc;
use tracing::debug;

/// Binds arguments against one endpoint and hands the call to the executor
pub struct ApiTool {
    endpoint: &'static EndpointDescriptor,
    executor: Arc<Executor>,
}

impl ApiTool {
    pub fn new(endpoint: &'static EndpointDescriptor, executor: Arc<Executor>) -> Self {
        Self { endpoint, executor }
    }

    pub fn endpoint(&self) -> &'static EndpointDescriptor {
        self.endpoint
    }

    /// Register one tool per endpoint in the table
    pub fn register_all(registry: &mut ToolRegistry, executor: Arc<Executor>) {
        for endpoint in ENDPOINTS {
            registry.register(Arc::new(ApiTool::new(endpoint, executor.clone())));
        }
    }
}

#[async_trait::async_trait]
impl Tool for ApiTool {
    fn schema(&self) -> ToolSchema {
        catalog::tool_schema(self.endpoint)
    }

    async fn execute(&self, arguments: serde_json::Value) -> Result<Payload, DispatchError> {
        let call = self.endpoint.bind(&arguments)?;
        debug!(tool = self.endpoint.name, call = %call, "Invoking tool");
        Ok(self.executor.execute(&call).await)
    }
}
