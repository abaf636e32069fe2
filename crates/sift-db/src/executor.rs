//! The `SqlExecutor` trait.

use async_trait::async_trait;

use sift_core::types::RowSet;

use crate::error::DbError;

/// Executes one already-cleaned SQL statement and returns flat rows.
///
/// Implementations own their timeout and retry policy; the orchestrator
/// treats any error as "could not process" and never sees a raw failure.
#[async_trait]
pub trait SqlExecutor: Send + Sync {
    async fn run_sql(&self, sql: &str) -> Result<RowSet, DbError>;
}
