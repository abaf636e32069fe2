//! The `LanguageModel` trait and its Gemini implementation.

use async_trait::async_trait;
use tracing::debug;

use sift_core::types::UserIntent;

use crate::client::GeminiClient;
use crate::error::LlmError;
use crate::prompts;
use crate::sql::clean_sql;

/// Everything the orchestrator asks of a language model.
///
/// The core never interprets user text itself; classification and SQL
/// translation live behind this seam so tests can substitute mocks.
#[async_trait]
pub trait LanguageModel: Send + Sync {
    /// Classify one user message into an intent.
    async fn classify_intent(&self, user_input: &str) -> Result<UserIntent, LlmError>;

    /// Translate a data question into one executable PostgreSQL statement.
    async fn generate_sql(&self, question: &str) -> Result<String, LlmError>;

    /// Persona reply for greetings and off-topic turns.
    async fn general_chat(&self, user_input: &str) -> Result<String, LlmError>;
}

/// Parse model output as a `UserIntent`, tolerating markdown fences.
fn parse_intent(text: &str) -> Result<UserIntent, LlmError> {
    let trimmed = text
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();
    serde_json::from_str(trimmed).map_err(|e| LlmError::Parse(e.to_string()))
}

#[async_trait]
impl LanguageModel for GeminiClient {
    async fn classify_intent(&self, user_input: &str) -> Result<UserIntent, LlmError> {
        let prompt = prompts::intent_prompt(user_input);
        let text = self
            .generate(&self.config.chat_model, &prompt, None, None, true)
            .await?;
        let intent = parse_intent(&text)?;
        debug!(?intent, "Classified user intent");
        Ok(intent)
    }

    async fn generate_sql(&self, question: &str) -> Result<String, LlmError> {
        let prompt = prompts::sql_prompt(question);
        let text = self
            .generate(
                &self.config.sql_model,
                &prompt,
                None,
                Some(self.config.sql_temperature),
                false,
            )
            .await?;
        Ok(clean_sql(&text))
    }

    async fn general_chat(&self, user_input: &str) -> Result<String, LlmError> {
        self.generate(
            &self.config.chat_model,
            user_input,
            Some(prompts::CHAT_PERSONA),
            None,
            false,
        )
        .await
    }
}
