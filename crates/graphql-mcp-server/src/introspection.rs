//! One-time introspection of the GraphQL endpoint's schema

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, error, info};

use crate::errors::IntrospectionError;
use crate::graphql::{Client, Request, Response};

/// The standard introspection document, unwrapping two levels of `ofType`
pub const INTROSPECTION_QUERY: &str = include_str!("introspection/introspection_query.graphql");

/// The `__schema` returned by introspection
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SchemaSnapshot {
    pub query_type: RootType,

    #[serde(default)]
    pub mutation_type: Option<RootType>,

    #[serde(default)]
    pub subscription_type: Option<RootType>,

    pub types: Vec<Value>,

    pub directives: Vec<Value>,
}

/// The name of a root operation type
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RootType {
    pub name: String,
}

/// Introspect the endpoint's schema.
///
/// Any failure is logged and returned; callers are expected to treat it as fatal.
pub async fn introspect(client: &Client) -> Result<SchemaSnapshot, IntrospectionError> {
    fetch_schema(client)
        .await
        .inspect(|schema| {
            info!(
                types = schema.types.len(),
                directives = schema.directives.len(),
                query_type = %schema.query_type.name,
                "Successfully introspected GraphQL schema"
            );
            debug!(
                mutation_type = ?schema.mutation_type.as_ref().map(|t| &t.name),
                subscription_type = ?schema.subscription_type.as_ref().map(|t| &t.name),
                "Root operation types"
            );
        })
        .inspect_err(|error| error!("Failed to introspect GraphQL schema: {error}"))
}

async fn fetch_schema(client: &Client) -> Result<SchemaSnapshot, IntrospectionError> {
    let request = Request {
        query: INTROSPECTION_QUERY,
        variables: None,
    };

    let response = client.send(&request).await.map_err(|error| {
        if error.is_timeout() {
            IntrospectionError::Timeout(client.timeout())
        } else {
            IntrospectionError::Request(error)
        }
    })?;

    let status = response.status();
    if !status.is_success() {
        return Err(IntrospectionError::Status(status));
    }

    let mut response = response.json::<Response>().await.map_err(|error| {
        if error.is_timeout() {
            IntrospectionError::Timeout(client.timeout())
        } else {
            IntrospectionError::Body(error)
        }
    })?;

    let Some(mut data) = response.data.take() else {
        return Err(match response.errors() {
            Some(errors) => IntrospectionError::GraphQL(errors.to_string()),
            None => IntrospectionError::MissingSchema,
        });
    };

    let schema = data
        .get_mut("__schema")
        .map(Value::take)
        .filter(|schema| !schema.is_null())
        .ok_or(IntrospectionError::MissingSchema)?;

    Ok(serde_json::from_value(schema)?)
}
