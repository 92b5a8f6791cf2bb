//! MCP tools exposed to the agent

pub(crate) mod execute;
