//! Error types for SQL execution.

use sift_core::error::SiftError;

/// Errors from the SQL execution boundary.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("SUPABASE_KEY is not set")]
    MissingKey,
    #[error("database URL is not configured")]
    MissingUrl,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("RPC returned status {status}: {body}")]
    Rpc { status: u16, body: String },
    #[error("unexpected result shape: {0}")]
    Shape(String),
}

impl From<DbError> for SiftError {
    fn from(err: DbError) -> Self {
        SiftError::Database(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(DbError::MissingKey.to_string(), "SUPABASE_KEY is not set");
        assert_eq!(
            DbError::MissingUrl.to_string(),
            "database URL is not configured"
        );
        let err = DbError::Rpc {
            status: 400,
            body: "syntax error".to_string(),
        };
        assert_eq!(err.to_string(), "RPC returned status 400: syntax error");
        let err = DbError::Shape("expected array".to_string());
        assert_eq!(err.to_string(), "unexpected result shape: expected array");
    }

    #[test]
    fn test_conversion_to_sift_error() {
        let sift_err: SiftError = DbError::MissingUrl.into();
        assert!(matches!(sift_err, SiftError::Database(_)));
    }
}
