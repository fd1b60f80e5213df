//! Serve command - run the HTTP extraction service.

use clap::Args;
use tracing::info;

use super::load_config;

/// Arguments for the serve command.
#[derive(Args)]
pub struct ServeArgs {
    /// Bind address (overrides server.host)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides server.port)
    #[arg(short, long)]
    port: Option<u16>,
}

pub async fn run(args: ServeArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(host) = args.host {
        config.server.host = host;
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }

    info!(
        "Starting server on {}:{} (max body {} bytes)",
        config.server.host, config.server.port, config.server.max_body_bytes
    );

    docpoint_server::serve(&config).await?;
    Ok(())
}
