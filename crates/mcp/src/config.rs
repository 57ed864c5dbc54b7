// Command-line / environment configuration

use clap::Parser;
use peakmojo_core::OutputFormat;
use peakmojo_sdk::{PeakMojoClient, PeakMojoResult, DEFAULT_BASE_URL};
use std::time::Duration;
use tracing::warn;

#[derive(Parser, Debug, Clone)]
#[command(name = "peakmojo-mcp")]
#[command(about = "PeakMojo MCP server - exposes the PeakMojo API over stdio", long_about = None)]
#[command(version)]
pub struct Args {
    /// PeakMojo API key
    #[arg(long, env = "PEAKMOJO_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// PeakMojo API base URL
    #[arg(long, env = "PEAKMOJO_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Request timeout in seconds
    #[arg(long, env = "PEAKMOJO_TIMEOUT_SECS", default_value_t = 30)]
    pub timeout_secs: u64,

    /// Encoding of every response payload (json or yaml)
    #[arg(long, env = "PEAKMOJO_OUTPUT_FORMAT", default_value = "json")]
    pub output_format: OutputFormat,
}

impl Args {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Build the API client. A missing key is only a warning; calls will be
    /// rejected by the API itself.
    pub fn build_client(&self) -> PeakMojoResult<PeakMojoClient> {
        if self.api_key.as_deref().map_or(true, str::is_empty) {
            warn!("PeakMojo API key not found in arguments or environment variables");
        }

        PeakMojoClient::builder()
            .base_url(&self.base_url)
            .maybe_api_key(self.api_key.clone())
            .timeout(self.timeout())
            .build()
    }
}
