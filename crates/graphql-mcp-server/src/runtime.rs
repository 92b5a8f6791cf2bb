//! Runtime utilites
//!
//! This module is only used by the main binary and provides helper code
//! related to runtime configuration.

mod config;
mod endpoint;
mod logging;
mod schemas;

use std::path::Path;

pub use config::Config;
use figment::{
    Figment,
    providers::{Env, Format, Yaml},
};

/// Prefix of the environment variables read into the config
const ENV_PREFIX: &str = "GRAPHQL_MCP_";

/// Separator to use when drilling down into nested options in the env figment
const ENV_NESTED_SEPARATOR: &str = "__";

/// Read configuration from environment variables only (when no config file is provided)
#[allow(clippy::result_large_err)]
pub fn read_config_from_env() -> Result<Config, figment::Error> {
    Figment::new()
        .join(Env::prefixed(ENV_PREFIX).split(ENV_NESTED_SEPARATOR))
        .extract()
}

/// Read in a config from a YAML file, filling in any missing values from the environment
#[allow(clippy::result_large_err)]
pub fn read_config(yaml_path: impl AsRef<Path>) -> Result<Config, figment::Error> {
    Figment::new()
        .join(Env::prefixed(ENV_PREFIX).split(ENV_NESTED_SEPARATOR))
        .join(Yaml::file(yaml_path))
        .extract()
}

#[cfg(test)]
mod test {
    use std::time::Duration;

    use graphql_mcp_server::server::Transport;
    use tracing::Level;

    use super::{read_config, read_config_from_env};

    #[test]
    fn it_prioritizes_env_vars() {
        let config = r#"
            endpoint: http://from_file:4000/graphql
        "#;

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";
            let endpoint = "https://from_env:4000/graphql";

            jail.create_file(path, config)?;
            jail.set_env("GRAPHQL_MCP_ENDPOINT", endpoint);

            let config = read_config(path)?;

            assert_eq!(config.endpoint.as_str(), endpoint);
            Ok(())
        });
    }

    #[test]
    fn it_extracts_nested_env() {
        let config = r#"
            logging:
                level: warn
        "#;

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";

            jail.create_file(path, config)?;
            jail.set_env("GRAPHQL_MCP_LOGGING__LEVEL", "debug");

            let config = read_config(path)?;

            assert_eq!(config.logging.level, Level::DEBUG);
            Ok(())
        });
    }

    #[test]
    fn it_merges_env_and_file() {
        let config = "
            endpoint: http://from_file:4000/
            transport:
                type: streamable_http
                port: 9000
        ";

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";

            jail.create_file(path, config)?;
            jail.set_env("GRAPHQL_MCP_TIMEOUT", "10s");

            let config = read_config(path)?;

            assert_eq!(config.endpoint.as_str(), "http://from_file:4000/");
            assert_eq!(config.timeout, Duration::from_secs(10));
            assert!(matches!(
                config.transport,
                Transport::StreamableHttp { port: 9000, .. }
            ));
            Ok(())
        });
    }

    #[test]
    fn it_reads_headers_from_file() {
        let config = r#"
            headers:
                Authorization: Bearer 1234567890
                X-Api-Key: "user::graph::123"
        "#;

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";

            jail.create_file(path, config)?;

            let config = read_config(path)?;

            assert_eq!(config.headers.len(), 2);
            assert_eq!(
                config.headers.get("authorization").map(|v| v.to_str().ok()),
                Some(Some("Bearer 1234567890"))
            );
            assert_eq!(
                config.headers.get("x-api-key").map(|v| v.to_str().ok()),
                Some(Some("user::graph::123"))
            );
            Ok(())
        });
    }

    #[test]
    fn it_rejects_invalid_header_names() {
        let config = r#"
            headers:
                "bad header": value
        "#;

        figment::Jail::expect_with(move |jail| {
            let path = "config.yaml";

            jail.create_file(path, config)?;

            assert!(read_config(path).is_err());
            Ok(())
        });
    }

    #[test]
    fn it_uses_defaults_without_a_file() {
        figment::Jail::expect_with(|_jail| {
            let config = read_config_from_env()?;

            assert_eq!(config.endpoint.as_str(), "https://graphql.org/graphql");
            assert_eq!(config.timeout, Duration::from_secs(30));
            assert!(config.headers.is_empty());
            assert!(matches!(config.transport, Transport::Stdio));
            assert_eq!(config.logging.level, Level::INFO);
            Ok(())
        });
    }
}
