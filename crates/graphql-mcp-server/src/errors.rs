use std::time::Duration;

use reqwest::StatusCode;
use tokio::task::JoinError;

/// An error while introspecting the GraphQL endpoint at startup
#[derive(Debug, thiserror::Error)]
pub enum IntrospectionError {
    #[error("Failed to send introspection request: {0}")]
    Request(reqwest::Error),

    #[error("Introspection request timed out after {0:?}")]
    Timeout(Duration),

    #[error("GraphQL endpoint responded with HTTP status {0}")]
    Status(StatusCode),

    #[error("Failed to read introspection response body: {0}")]
    Body(reqwest::Error),

    #[error("Introspection query returned errors: {0}")]
    GraphQL(String),

    #[error("Introspection response is missing data.__schema")]
    MissingSchema,

    #[error("Invalid introspection schema: {0}")]
    Json(#[from] serde_json::Error),
}

/// An error while executing a query on behalf of an MCP client
///
/// These never escape a tool call. They are rendered into the text of the
/// tool result instead.
#[derive(Debug, thiserror::Error)]
pub enum ExecutionError {
    #[error("{0}")]
    Request(reqwest::Error),

    #[error("request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0}")]
    Body(reqwest::Error),
}

/// An error in server initialization
#[derive(Debug, thiserror::Error)]
pub enum ServerError {
    #[error("Failed to introspect GraphQL schema: {0}")]
    Introspection(#[from] IntrospectionError),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(reqwest::Error),

    #[error("Failed to initialize MCP server: {0}")]
    McpInitialize(String),

    #[error("Transport I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to start server: {0}")]
    StartupError(#[from] JoinError),
}

/// An MCP tool error
pub type McpError = rmcp::model::ErrorData;
