//! Neo4j Query API client.
//!
//! Speaks the HTTP Query API (`/db/{database}/query/v2`): one Cypher
//! statement with parameters per request, results as a field list plus
//! value rows, read consistency via bookmarks returned by earlier
//! requests.

use std::time::Duration;

use annotations_core::{Error, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::debug;

/// Default Neo4j HTTP endpoint.
pub const DEFAULT_NEO_URL: &str = "http://localhost:7474";

/// Default database name.
pub const DEFAULT_NEO_DATABASE: &str = "neo4j";

/// Timeout for query requests (seconds).
pub const QUERY_TIMEOUT_SECS: u64 = 30;

/// HTTP client for one Neo4j database.
#[derive(Debug, Clone)]
pub struct Neo4jClient {
    client: Client,
    base_url: String,
    database: String,
}

impl Neo4jClient {
    pub fn new(base_url: String, database: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(QUERY_TIMEOUT_SECS))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            database,
        }
    }

    /// Create from environment variables.
    pub fn from_env() -> Self {
        let base_url = std::env::var("NEO_URL").unwrap_or_else(|_| DEFAULT_NEO_URL.to_string());
        let database =
            std::env::var("NEO_DATABASE").unwrap_or_else(|_| DEFAULT_NEO_DATABASE.to_string());
        Self::new(base_url, database)
    }

    /// Runs one Cypher statement. A malformed bookmark is rejected by the
    /// database and surfaces as a store error.
    pub async fn run(
        &self,
        statement: &str,
        parameters: Value,
        bookmarks: &[String],
    ) -> Result<QueryResponse> {
        let request = QueryRequest {
            statement,
            parameters,
            bookmarks,
        };

        let response = self
            .client
            .post(format!("{}/db/{}/query/v2", self.base_url, self.database))
            .json(&request)
            .send()
            .await
            .map_err(|e| Error::Store(format!("query request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            let detail = serde_json::from_str::<ErrorBody>(&body)
                .ok()
                .and_then(|b| b.errors.into_iter().next())
                .map(|e| format!("{}: {}", e.code, e.message))
                .unwrap_or(body);
            return Err(Error::Store(format!("neo4j returned {}: {}", status, detail)));
        }

        let result: QueryResponse = response
            .json()
            .await
            .map_err(|e| Error::Store(format!("failed to parse query response: {}", e)))?;

        debug!(
            row_count = result.data.values.len(),
            "query complete"
        );
        Ok(result)
    }
}

impl Default for Neo4jClient {
    fn default() -> Self {
        Self::new(DEFAULT_NEO_URL.to_string(), DEFAULT_NEO_DATABASE.to_string())
    }
}

#[derive(Serialize)]
struct QueryRequest<'a> {
    statement: &'a str,
    parameters: Value,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    bookmarks: &'a [String],
}

/// Result of one query: column names, value rows, and the bookmarks that
/// guarantee later reads observe this query's view of the database.
#[derive(Debug, Deserialize)]
pub struct QueryResponse {
    pub data: QueryData,
    #[serde(default)]
    pub bookmarks: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct QueryData {
    pub fields: Vec<String>,
    pub values: Vec<Vec<Value>>,
}

impl QueryResponse {
    /// Rows as field-keyed JSON objects, in result order.
    pub fn rows(&self) -> impl Iterator<Item = Map<String, Value>> + '_ {
        self.data.values.iter().map(|row| {
            self.data
                .fields
                .iter()
                .cloned()
                .zip(row.iter().cloned())
                .collect()
        })
    }
}

#[derive(Deserialize)]
struct ErrorBody {
    errors: Vec<ErrorDetail>,
}

#[derive(Deserialize)]
struct ErrorDetail {
    code: String,
    message: String,
}
