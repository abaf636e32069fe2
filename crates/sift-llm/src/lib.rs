//! Language-model boundary for Sift.
//!
//! Everything the backend asks of an LLM goes through the [`LanguageModel`]
//! trait: intent classification, natural-language-to-SQL translation, and
//! general chat. [`GeminiClient`] is the production implementation over the
//! Gemini REST API; tests substitute mocks.

pub mod client;
pub mod error;
pub mod model;
pub mod prompts;
pub mod sql;

pub use client::GeminiClient;
pub use error::LlmError;
pub use model::LanguageModel;
pub use sql::clean_sql;
