// Core types and functionality for the PeakMojo MCP adapter

pub mod encoding;
pub mod endpoints;
pub mod error;
pub mod resources;
pub mod types;

pub use encoding::OutputFormat;
pub use error::{EncodeError, RegistryError};
pub use types::*;
