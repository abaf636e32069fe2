//! Chat orchestrator: one request/response cycle.
//!
//! Composes the dialogue router, intent classification, SQL generation and
//! execution, and chart normalization. Strictly sequential within a turn:
//! the router's non-Idle check runs first, then classification, then the
//! pipeline. Nothing in here is fatal — every failure path resolves to a
//! text reply.

use std::sync::Arc;

use tracing::{info, warn};
use uuid::Uuid;

use sift_chart::{normalize, stringify};
use sift_core::config::ChatConfig;
use sift_core::types::{ChartType, IntentKind, RowSet};
use sift_db::SqlExecutor;
use sift_llm::LanguageModel;

use crate::error::ChatError;
use crate::router::{CommissionRouter, RouterOutcome};
use crate::session::SessionStore;
use crate::types::ChatReply;

const MSG_COULD_NOT_UNDERSTAND: &str =
    "I couldn't understand that request. Could you rephrase it?";
const MSG_PROCESS_FAILED: &str =
    "I couldn't process your request. Please try rephrasing it.";
const MSG_NO_DATA: &str = "No data found.";
const MSG_CHART_FAILED: &str =
    "I couldn't generate a chart from that result. Please try rephrasing your request.";
const MSG_CHAT_UNAVAILABLE: &str =
    "I'm having trouble responding right now. Please try again.";

/// Central coordinator for chat turns.
pub struct ChatOrchestrator {
    llm: Arc<dyn LanguageModel>,
    executor: Arc<dyn SqlExecutor>,
    sessions: SessionStore,
    config: ChatConfig,
}

impl ChatOrchestrator {
    pub fn new(
        llm: Arc<dyn LanguageModel>,
        executor: Arc<dyn SqlExecutor>,
        config: ChatConfig,
    ) -> Self {
        Self {
            llm,
            executor,
            sessions: SessionStore::new(),
            config,
        }
    }

    /// Handle one incoming chat message.
    ///
    /// Returns the reply and the session ID (new or existing) so the
    /// frontend can thread follow-up turns.
    pub async fn handle_message(
        &self,
        message: &str,
        session_id: Option<Uuid>,
    ) -> Result<(ChatReply, Uuid), ChatError> {
        if message.trim().is_empty() {
            return Err(ChatError::EmptyMessage);
        }
        if message.len() > self.config.max_message_length {
            return Err(ChatError::MessageTooLong(self.config.max_message_length));
        }

        let sid = self.sessions.resolve(session_id);

        // A pending sub-flow consumes the turn before classification.
        let outcome = self
            .sessions
            .with_dialogue(sid, |d| CommissionRouter::resume(d, message))?;
        match outcome {
            RouterOutcome::Reply(reply) => return Ok((reply, sid)),
            RouterOutcome::Dispatch(modified) => {
                info!(session = %sid, "Dispatching refined commissions query");
                return Ok((self.run_data_query(&modified).await, sid));
            }
            RouterOutcome::Pass => {}
        }

        let intent = match self.llm.classify_intent(message).await {
            Ok(intent) => intent,
            Err(e) => {
                warn!(error = %e, "Intent classification failed");
                return Ok((ChatReply::text(MSG_COULD_NOT_UNDERSTAND), sid));
            }
        };
        info!(session = %sid, intent = ?intent.intent, "Handling chat turn");

        let reply = match intent.intent {
            IntentKind::QueryData => {
                if intent.is_agent_commissions() {
                    self.sessions
                        .with_dialogue(sid, |d| CommissionRouter::begin(d, message))?
                } else {
                    self.run_data_query(message).await
                }
            }
            IntentKind::GenerateChart => {
                let chart_type = intent.chart_type.unwrap_or(ChartType::Line);
                self.run_chart_query(message, chart_type).await
            }
            IntentKind::GeneralChat => match self.llm.general_chat(message).await {
                Ok(text) => ChatReply::text(text),
                Err(e) => {
                    warn!(error = %e, "General chat failed");
                    ChatReply::text(MSG_CHAT_UNAVAILABLE)
                }
            },
        };

        Ok((reply, sid))
    }

    /// Generate, execute, and render a data query as prose.
    async fn run_data_query(&self, question: &str) -> ChatReply {
        let rows = match self.execute_question(question).await {
            Ok(rows) => rows,
            Err(reply) => return reply,
        };
        if rows.is_empty() {
            return ChatReply::text(MSG_NO_DATA);
        }
        ChatReply::text(format_rows(&rows))
    }

    /// Generate, execute, and normalize a query into a chart payload.
    async fn run_chart_query(&self, question: &str, chart_type: ChartType) -> ChatReply {
        let rows = match self.execute_question(question).await {
            Ok(rows) => rows,
            Err(reply) => return reply,
        };
        let data = normalize(&rows, chart_type);
        if data.is_empty() {
            // Empty chart data is the normalizer's terminal degraded
            // state; the user gets text, never a blank chart.
            return ChatReply::text(MSG_CHART_FAILED);
        }
        ChatReply::chart(
            format!("Here is your {} chart.", chart_type.as_str()),
            chart_type,
            data,
        )
    }

    /// NL -> SQL -> rows. Failures collapse to the generic text reply.
    async fn execute_question(&self, question: &str) -> Result<RowSet, ChatReply> {
        let sql = match self.llm.generate_sql(question).await {
            Ok(sql) => sql,
            Err(e) => {
                warn!(error = %e, "SQL generation failed");
                return Err(ChatReply::text(MSG_PROCESS_FAILED));
            }
        };
        match self.executor.run_sql(&sql).await {
            Ok(rows) => Ok(rows),
            Err(e) => {
                warn!(error = %e, "SQL execution failed");
                Err(ChatReply::text(MSG_PROCESS_FAILED))
            }
        }
    }
}

/// Render rows as `key: value` lines, one blank line between rows.
fn format_rows(rows: &RowSet) -> String {
    let mut out = String::new();
    for (i, row) in rows.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        for (key, value) in row {
            out.push_str(key);
            out.push_str(": ");
            out.push_str(&stringify(value));
            out.push('\n');
        }
    }
    out.trim_end().to_string()
}
