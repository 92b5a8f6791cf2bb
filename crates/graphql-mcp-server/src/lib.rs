pub mod errors;
pub mod graphql;
pub mod introspection;
pub mod json_schema;
pub mod server;
pub mod server_info;
pub(crate) mod tools;
