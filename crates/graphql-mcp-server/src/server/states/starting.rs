use std::{net::SocketAddr, sync::Arc};

use rmcp::transport::StreamableHttpService;
use rmcp::transport::streamable_http_server::session::local::LocalSessionManager;
use rmcp::{ServiceExt as _, transport::stdio};
use tracing::{error, info};

use crate::{
    errors::ServerError, graphql::Client, introspection::SchemaSnapshot, server::Transport,
    tools::execute::Execute,
};

use super::{Config, Running, shutdown_signal};

pub(super) struct Starting {
    pub(super) config: Config,
    pub(super) client: Client,
    pub(super) schema: SchemaSnapshot,
    pub(super) execute_tool: Execute,
}

impl Starting {
    /// Connect the transport and serve until it closes
    pub(super) async fn start(self) -> Result<(), ServerError> {
        let running = Running {
            client: self.client,
            schema: Arc::new(self.schema),
            execute_tool: self.execute_tool,
            server_info: self.config.server_info,
        };

        match self.config.transport {
            Transport::StreamableHttp { address, port } => {
                info!(port = ?port, address = ?address, "Starting MCP server in Streamable HTTP mode");
                let listen_address = SocketAddr::new(address, port);
                let service = StreamableHttpService::new(
                    move || Ok(running.clone()),
                    LocalSessionManager::default().into(),
                    Default::default(),
                );
                let router = axum::Router::new().nest_service("/mcp", service);

                let tcp_listener = tokio::net::TcpListener::bind(listen_address).await?;
                info!(%listen_address, "MCP server connected to transport");
                info!("MCP server started");

                axum::serve(tcp_listener, router)
                    .with_graceful_shutdown(shutdown_signal())
                    .await?;
                info!("MCP server stopped");
            }
            Transport::Stdio => {
                info!("Starting MCP server in stdio mode");
                let service = running
                    .serve(stdio())
                    .await
                    .inspect_err(|e| {
                        error!("serving error: {:?}", e);
                    })
                    .map_err(|e| ServerError::McpInitialize(e.to_string()))?;
                info!("MCP server connected to transport");
                info!("MCP server started");

                let reason = service.waiting().await?;
                info!(?reason, "MCP server stopped");
            }
        }

        Ok(())
    }
}
