use std::net::{IpAddr, Ipv4Addr};
use std::time::Duration;

use bon::bon;
use reqwest::header::HeaderMap;
use schemars::JsonSchema;
use serde::Deserialize;
use url::Url;

use crate::errors::ServerError;
use crate::server_info::ServerInfoConfig;

mod states;

use states::StateMachine;

/// The default timeout applied to every request sent to the GraphQL endpoint
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A GraphQL MCP Server
pub struct Server {
    transport: Transport,
    endpoint: Url,
    headers: HeaderMap,
    timeout: Duration,
    server_info: ServerInfoConfig,
}

#[derive(Debug, Clone, Deserialize, Default, JsonSchema)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Transport {
    /// Use standard IO for server <> client communication
    #[default]
    Stdio,

    /// Host the MCP server on the configuration, using streamable HTTP messages.
    StreamableHttp {
        /// The IP address to bind to
        #[serde(default = "Transport::default_address")]
        address: IpAddr,

        /// The port to bind to
        #[serde(default = "Transport::default_port")]
        port: u16,
    },
}

impl Transport {
    fn default_address() -> IpAddr {
        IpAddr::V4(Ipv4Addr::LOCALHOST)
    }

    fn default_port() -> u16 {
        8000
    }
}

#[bon]
impl Server {
    #[builder]
    pub fn new(
        #[builder(default)] transport: Transport,
        endpoint: Url,
        #[builder(default)] headers: HeaderMap,
        #[builder(default = DEFAULT_TIMEOUT)] timeout: Duration,
        #[builder(default)] server_info: ServerInfoConfig,
    ) -> Self {
        Self {
            transport,
            endpoint,
            headers,
            timeout,
            server_info,
        }
    }

    /// Introspect the endpoint, then serve MCP clients until the transport closes.
    ///
    /// Introspection failures are returned before any transport is created.
    pub async fn start(self) -> Result<(), ServerError> {
        StateMachine {}.start(self).await
    }
}
