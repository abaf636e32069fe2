//! Error types for the language-model boundary.

use sift_core::error::SiftError;

/// Errors from LLM calls.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("API returned status {status}: {body}")]
    Api { status: u16, body: String },
    #[error("model returned no candidates")]
    EmptyResponse,
    #[error("could not parse model output: {0}")]
    Parse(String),
}

impl From<LlmError> for SiftError {
    fn from(err: LlmError) -> Self {
        SiftError::Llm(err.to_string())
    }
}
