use std::path::PathBuf;

use clap::Parser;
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use graphql_mcp_server::server::Server;
use runtime::read_config;
use tracing::{error, info};

mod runtime;

/// Clap styling
const STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

/// Arguments to the MCP server
#[derive(Debug, clap::Parser)]
#[command(
    version,
    styles = STYLES,
    about = "GraphQL MCP Server - run GraphQL queries from an AI agent",
)]
struct Args {
    /// Path to the config file. Without one, configuration is read from
    /// `GRAPHQL_MCP_`-prefixed environment variables.
    config: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config: runtime::Config = match Args::parse().config {
        Some(config_path) => read_config(config_path)?,
        None => runtime::read_config_from_env()?,
    };

    // Dropping the guard early would stop file logging
    let _guard = config.logging.setup()?;

    info!(
        "GraphQL MCP Server v{} // Licensed under MIT",
        env!("CARGO_PKG_VERSION")
    );

    Server::builder()
        .transport(config.transport)
        .endpoint(config.endpoint.into_inner())
        .headers(config.headers)
        .timeout(config.timeout)
        .server_info(config.server_info)
        .build()
        .start()
        .await
        .inspect_err(|e| error!("Failed to start MCP server: {e}"))?;

    Ok(())
}
