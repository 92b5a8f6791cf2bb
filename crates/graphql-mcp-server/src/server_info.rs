use schemars::JsonSchema;
use serde::Deserialize;

/// Server metadata reported to MCP clients on `initialize`
#[derive(Debug, Clone, Default, Deserialize, JsonSchema)]
#[serde(default)]
pub struct ServerInfoConfig {
    /// The name of the MCP server implementation
    pub name: Option<String>,

    /// The version of the MCP server implementation
    pub version: Option<String>,
}

impl ServerInfoConfig {
    pub fn name(&self) -> String {
        self.name.clone().unwrap_or_else(|| "graphql-mcp".to_string())
    }

    pub fn version(&self) -> String {
        self.version
            .clone()
            .unwrap_or_else(|| env!("CARGO_PKG_VERSION").to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_package_identity() {
        let info = ServerInfoConfig::default();

        assert_eq!(info.name(), "graphql-mcp");
        assert_eq!(info.version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn configured_values_win() {
        let info: ServerInfoConfig =
            serde_json::from_str(r#"{"name": "countries", "version": "2.1.0"}"#).unwrap();

        assert_eq!(info.name(), "countries");
        assert_eq!(info.version(), "2.1.0");
    }
}
