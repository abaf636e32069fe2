//! Supabase RPC client.
//!
//! Statements run through a `run_sql` RPC function exposed over the
//! Supabase REST API: `POST {url}/rest/v1/rpc/{function}` with the
//! statement in the JSON body. The function returns a JSON array of flat
//! objects, which maps directly onto [`RowSet`].

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

use sift_core::config::DatabaseConfig;
use sift_core::types::RowSet;

use crate::error::DbError;
use crate::executor::SqlExecutor;

#[derive(Serialize)]
struct RpcBody<'a> {
    query: &'a str,
}

/// Production [`SqlExecutor`] over the Supabase REST API.
pub struct SupabaseClient {
    http: reqwest::Client,
    url: String,
    key: String,
    rpc_function: String,
}

impl SupabaseClient {
    /// Create a client with an explicit service key.
    pub fn new(key: impl Into<String>, config: &DatabaseConfig) -> Result<Self, DbError> {
        if config.url.is_empty() {
            return Err(DbError::MissingUrl);
        }
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .unwrap_or_else(|_| reqwest::Client::new());
        Ok(Self {
            http,
            url: config.url.trim_end_matches('/').to_string(),
            key: key.into(),
            rpc_function: config.rpc_function.clone(),
        })
    }

    /// Create a client from `SUPABASE_URL` / `SUPABASE_KEY`, with the URL
    /// falling back to the configured value.
    pub fn from_env(config: &DatabaseConfig) -> Result<Self, DbError> {
        let key = std::env::var("SUPABASE_KEY")
            .ok()
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty())
            .ok_or(DbError::MissingKey)?;
        let mut config = config.clone();
        if let Ok(url) = std::env::var("SUPABASE_URL") {
            if !url.trim().is_empty() {
                config.url = url.trim().to_string();
            }
        }
        Self::new(key, &config)
    }

    fn rpc_url(&self) -> String {
        format!("{}/rest/v1/rpc/{}", self.url, self.rpc_function)
    }
}

#[async_trait]
impl SqlExecutor for SupabaseClient {
    async fn run_sql(&self, sql: &str) -> Result<RowSet, DbError> {
        debug!(function = %self.rpc_function, "Executing SQL via Supabase RPC");

        let response = self
            .http
            .post(self.rpc_url())
            .header("apikey", &self.key)
            .header("Authorization", format!("Bearer {}", self.key))
            .json(&RpcBody { query: sql })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(DbError::Rpc {
                status: status.as_u16(),
                body,
            });
        }

        let value: Value = response.json().await?;
        rows_from_value(value)
    }
}

/// Interpret an RPC result as a row set.
///
/// A JSON array of objects is the normal shape; `null` (RPC with no
/// result set) becomes an empty row set; anything else is malformed.
fn rows_from_value(value: Value) -> Result<RowSet, DbError> {
    match value {
        Value::Null => Ok(vec![]),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::Object(row) => Ok(row),
                other => Err(DbError::Shape(format!(
                    "expected object row, got {}",
                    type_name(&other)
                ))),
            })
            .collect(),
        other => Err(DbError::Shape(format!(
            "expected array of rows, got {}",
            type_name(&other)
        ))),
    }
}

fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "bool",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
