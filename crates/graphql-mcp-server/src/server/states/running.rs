use std::sync::Arc;

use rmcp::{
    RoleServer, ServerHandler,
    model::{
        CallToolRequestParam, CallToolResult, ErrorCode, Implementation, JsonObject,
        ListToolsResult, PaginatedRequestParam, ServerCapabilities, ServerInfo, Tool,
    },
    service::RequestContext,
};
use tracing::debug;

use crate::{
    errors::McpError,
    graphql::Client,
    introspection::SchemaSnapshot,
    server_info::ServerInfoConfig,
    tools::execute::{EXECUTE_TOOL_NAME, Execute},
};

#[derive(Clone)]
pub(super) struct Running {
    pub(super) client: Client,
    pub(super) schema: Arc<SchemaSnapshot>,
    pub(super) execute_tool: Execute,
    pub(super) server_info: ServerInfoConfig,
}

impl Running {
    async fn call(
        &self,
        name: &str,
        arguments: Option<&JsonObject>,
    ) -> Result<CallToolResult, McpError> {
        debug!(tool = name, "Calling tool");
        if name == EXECUTE_TOOL_NAME {
            self.execute_tool.execute(&self.client, arguments).await
        } else {
            Err(tool_not_found(name))
        }
    }

    fn tools(&self) -> Vec<Tool> {
        vec![self.execute_tool.tool.clone()]
    }

    fn instructions(&self) -> String {
        format!(
            "Use the {EXECUTE_TOOL_NAME} tool to run GraphQL queries against {}. Its root query type is {}.",
            self.client.endpoint(),
            self.schema.query_type.name
        )
    }
}

impl ServerHandler for Running {
    async fn call_tool(
        &self,
        request: CallToolRequestParam,
        _context: RequestContext<RoleServer>,
    ) -> Result<CallToolResult, McpError> {
        self.call(&request.name, request.arguments.as_ref()).await
    }

    async fn list_tools(
        &self,
        _request: Option<PaginatedRequestParam>,
        _context: RequestContext<RoleServer>,
    ) -> Result<ListToolsResult, McpError> {
        Ok(ListToolsResult {
            next_cursor: None,
            tools: self.tools(),
        })
    }

    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: self.server_info.name(),
                version: self.server_info.version(),
            },
            instructions: Some(self.instructions()),
            ..Default::default()
        }
    }
}

fn tool_not_found(name: &str) -> McpError {
    McpError::new(
        ErrorCode::METHOD_NOT_FOUND,
        format!("Tool {name} not found"),
        None,
    )
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use reqwest::header::HeaderMap;
    use serde_json::{Value, json};

    use super::*;
    use crate::introspection::RootType;

    fn running(url: &str) -> Running {
        Running {
            client: Client::new(url.parse().unwrap(), HeaderMap::new(), Duration::from_secs(5))
                .unwrap(),
            schema: Arc::new(SchemaSnapshot {
                query_type: RootType {
                    name: "Query".to_string(),
                },
                mutation_type: None,
                subscription_type: None,
                types: vec![],
                directives: vec![],
            }),
            execute_tool: Execute::new(),
            server_info: ServerInfoConfig::default(),
        }
    }

    fn arguments(value: Value) -> JsonObject {
        match value {
            Value::Object(map) => map,
            _ => unreachable!("arguments must be an object"),
        }
    }

    #[test]
    fn lists_only_the_execute_tool() {
        let tools = running("http://localhost:4000/graphql").tools();

        assert_eq!(tools.len(), 1);
        assert_eq!(
            tools.first().map(|tool| tool.name.to_string()),
            Some(EXECUTE_TOOL_NAME.to_string())
        );
    }

    #[test]
    fn reports_server_info_and_instructions() {
        let info = running("http://localhost:4000/graphql").get_info();

        assert_eq!(info.server_info.name, "graphql-mcp");
        assert_eq!(info.server_info.version, env!("CARGO_PKG_VERSION"));
        assert!(info.capabilities.tools.is_some());
        insta::assert_snapshot!(info.instructions.unwrap(), @"Use the execute-query tool to run GraphQL queries against http://localhost:4000/graphql. Its root query type is Query.");
    }

    #[tokio::test]
    async fn unknown_tool_is_not_found() {
        let result = running("http://localhost:4000/graphql")
            .call("introspect", Some(&arguments(json!({ "query": "{ a }" }))))
            .await;

        let error = result.unwrap_err();
        assert_eq!(error.code, ErrorCode::METHOD_NOT_FOUND);
        assert_eq!(error.message, "Tool introspect not found");
    }

    #[tokio::test]
    async fn executes_query_against_endpoint() {
        let mut server = mockito::Server::new_async().await;
        server
            .mock("POST", "/")
            .with_body(r#"{"data": {"ping": "pong"}}"#)
            .create_async()
            .await;

        let result = running(&server.url())
            .call(EXECUTE_TOOL_NAME, Some(&arguments(json!({ "query": "{ ping }" }))))
            .await
            .unwrap();

        let text = result
            .content
            .first()
            .and_then(|content| content.as_text())
            .map(|content| content.text.clone());
        assert_eq!(text.as_deref(), Some("{\n  \"ping\": \"pong\"\n}"));
    }

    #[tokio::test]
    async fn invalid_arguments_are_rejected_before_any_request() {
        let mut server = mockito::Server::new_async().await;
        let mock = server
            .mock("POST", "/")
            .expect(0)
            .create_async()
            .await;

        let result = running(&server.url())
            .call(EXECUTE_TOOL_NAME, Some(&arguments(json!({ "variables": {} }))))
            .await;

        mock.assert_async().await;
        assert!(matches!(result, Err(e) if e.code == ErrorCode::INVALID_PARAMS));
    }
}
