//! Execute GraphQL requests against the configured endpoint

use std::time::Duration;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use rmcp::model::JsonObject;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use url::Url;

use crate::errors::{ExecutionError, ServerError};

/// The body of a GraphQL request
#[derive(Debug, Serialize)]
pub struct Request<'a> {
    pub query: &'a str,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub variables: Option<&'a JsonObject>,
}

/// The body of a GraphQL response
#[derive(Debug, Default, Deserialize)]
pub struct Response {
    #[serde(default)]
    pub data: Option<Value>,

    #[serde(default)]
    pub errors: Option<Value>,
}

impl Response {
    /// The `errors` entry, if it is present and not empty
    pub fn errors(&self) -> Option<&Value> {
        self.errors.as_ref().filter(|errors| match errors {
            Value::Null => false,
            Value::Array(errors) => !errors.is_empty(),
            _ => true,
        })
    }
}

/// What a GraphQL endpoint answered to a query
#[derive(Debug, Clone, PartialEq)]
pub enum QueryOutcome {
    /// The `data` of a response without errors
    Data(Value),

    /// The `errors` of a response. Takes precedence over any `data` sent alongside.
    Errors(Value),
}

impl From<Response> for QueryOutcome {
    fn from(response: Response) -> Self {
        match response.errors() {
            Some(errors) => QueryOutcome::Errors(errors.clone()),
            None => QueryOutcome::Data(response.data.unwrap_or(Value::Null)),
        }
    }
}

/// The result of executing a single query
pub type ExecutionResult = Result<QueryOutcome, ExecutionError>;

/// Render the result of a query as the text returned to the MCP client
pub fn render(result: ExecutionResult) -> String {
    match result {
        Ok(QueryOutcome::Data(data)) => pretty(&data),
        Ok(QueryOutcome::Errors(errors)) => format!("GraphQL Error: {}", pretty(&errors)),
        Err(error) => format!("Error executing query: {error}"),
    }
}

fn pretty(value: &Value) -> String {
    serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
}

/// A client for the single GraphQL endpoint served by this process
#[derive(Debug, Clone)]
pub struct Client {
    http: reqwest::Client,
    endpoint: Url,
    timeout: Duration,
}

impl Client {
    pub fn new(endpoint: Url, headers: HeaderMap, timeout: Duration) -> Result<Self, ServerError> {
        let headers = {
            let mut headers = headers;
            headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
            headers
        };
        let http = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .build()
            .map_err(ServerError::HttpClient)?;

        Ok(Self {
            http,
            endpoint,
            timeout,
        })
    }

    pub fn endpoint(&self) -> &Url {
        &self.endpoint
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    /// POST a request body to the endpoint
    pub(crate) async fn send(&self, request: &Request<'_>) -> reqwest::Result<reqwest::Response> {
        self.http
            .post(self.endpoint.clone())
            .json(request)
            .send()
            .await
    }

    /// Execute a query with its variables, without inspecting the HTTP status
    #[tracing::instrument(skip_all, fields(endpoint = %self.endpoint))]
    pub async fn execute(&self, query: &str, variables: &JsonObject) -> ExecutionResult {
        let request = Request {
            query,
            variables: Some(variables),
        };

        let response = self
            .send(&request)
            .await
            .map_err(|error| self.classify(error, ExecutionError::Request))?;
        debug!(status = %response.status(), "Received GraphQL response");

        response
            .json::<Response>()
            .await
            .map(QueryOutcome::from)
            .map_err(|error| self.classify(error, ExecutionError::Body))
    }

    fn classify(
        &self,
        error: reqwest::Error,
        otherwise: fn(reqwest::Error) -> ExecutionError,
    ) -> ExecutionError {
        if error.is_timeout() {
            ExecutionError::Timeout(self.timeout)
        } else {
            otherwise(error)
        }
    }
}
