// Standalone MCP server binary

use anyhow::{Context, Result};
use clap::Parser;
use peakmojo_mcp::config::Args;
use peakmojo_mcp::{Dispatcher, Executor, McpServer};

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr; stdout carries protocol frames only
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let args = Args::parse();

    tracing::info!("PeakMojo MCP server starting");
    tracing::info!(
        base_url = %args.base_url,
        output_format = %args.output_format,
        timeout_secs = args.timeout_secs,
        "Configuration loaded"
    );

    let client = args
        .build_client()
        .context("Failed to create PeakMojo client")?;
    let dispatcher = Dispatcher::new(Executor::new(client, args.output_format));

    tracing::info!("Registered {} tools", dispatcher.tools().len());

    let server = McpServer::new(dispatcher);
    server.start().await?;

    Ok(())
}
