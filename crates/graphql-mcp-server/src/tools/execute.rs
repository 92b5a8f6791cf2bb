use rmcp::model::{CallToolResult, Content, ErrorCode, JsonObject, Tool};
use schemars::JsonSchema;
use serde::Deserialize;
use serde_json::Value;

use crate::errors::McpError;
use crate::graphql::{self, Client};
use crate::schema_from_type;

/// The name of the tool to execute an ad hoc GraphQL query
pub const EXECUTE_TOOL_NAME: &str = "execute-query";

#[derive(Clone)]
pub struct Execute {
    pub tool: Tool,
}

/// Input for the execute tool.
#[derive(Debug, JsonSchema, Deserialize)]
pub struct Input {
    /// The GraphQL query to execute
    query: String,

    /// Optional variables for the query
    #[serde(default)]
    variables: Option<JsonObject>,
}

impl Execute {
    pub fn new() -> Self {
        Self {
            tool: Tool::new(
                EXECUTE_TOOL_NAME,
                "Execute a GraphQL query against the endpoint",
                schema_from_type!(Input),
            ),
        }
    }

    /// Run the query in `arguments` and describe the outcome as text.
    ///
    /// Only malformed arguments produce an MCP error. Failures talking to the
    /// endpoint are reported in the text of a successful result.
    #[tracing::instrument(skip_all)]
    pub async fn execute(
        &self,
        client: &Client,
        arguments: Option<&JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        let input = parse_input(arguments)?;
        let variables = input.variables.unwrap_or_default();

        let result = client.execute(&input.query, &variables).await;

        Ok(CallToolResult::success(vec![Content::text(
            graphql::render(result),
        )]))
    }
}

impl Default for Execute {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_input(arguments: Option<&JsonObject>) -> Result<Input, McpError> {
    let arguments = Value::Object(arguments.cloned().unwrap_or_default());
    serde_json::from_value::<Input>(arguments).map_err(|e| {
        McpError::new(
            ErrorCode::INVALID_PARAMS,
            format!("Invalid input: {e}"),
            None,
        )
    })
}
