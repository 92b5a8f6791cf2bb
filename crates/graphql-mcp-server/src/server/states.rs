use tracing::debug;

use crate::errors::ServerError;
use crate::graphql::Client;
use crate::server_info::ServerInfoConfig;

use super::{Server, Transport};

mod configuring;
mod running;
mod schema_configured;
mod starting;

use configuring::Configuring;
use running::Running;
use schema_configured::SchemaConfigured;
use starting::Starting;

pub(super) struct StateMachine {}

/// Common configuration options for the states
struct Config {
    transport: Transport,
    server_info: ServerInfoConfig,
}

impl StateMachine {
    pub(crate) async fn start(self, server: Server) -> Result<(), ServerError> {
        let client = Client::new(server.endpoint, server.headers, server.timeout)?;
        debug!(endpoint = %client.endpoint(), timeout = ?client.timeout(), "Configured GraphQL endpoint");

        let configuring = Configuring {
            config: Config {
                transport: server.transport,
                server_info: server.server_info,
            },
            client,
        };

        // Nothing is served until the schema is known
        let schema_configured = configuring.introspect().await?;
        schema_configured.build_tools().start().await
    }
}

#[allow(clippy::expect_used)]
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install CTRL+C signal handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }
}
