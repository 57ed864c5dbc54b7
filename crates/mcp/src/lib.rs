// MCP (Model Context Protocol) server for the PeakMojo API
// Exposes every registered endpoint as a tool and a fixed set of read-only resources

pub mod catalog;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod executor;
pub mod protocol;
pub mod server;
pub mod tools;

pub use dispatcher::Dispatcher;
pub use error::{DispatchError, ErrorKind};
pub use executor::{Executor, Payload};
pub use server::McpServer;
