//! Response payloads and dialogue state.

use serde::Serialize;

use sift_chart::ChartData;
use sift_core::types::ChartType;

/// What one chat turn sends back to the frontend.
///
/// Serializes untagged into one of three wire shapes:
/// - text: `{"response": ...}`
/// - chart: `{"type":"chart","content":...,"chartType":...,"chartData":[...]}`
/// - choices: `{"response":...,"showButtons":true,"buttons":[...]}`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChatReply {
    Chart {
        #[serde(rename = "type")]
        kind: &'static str,
        content: String,
        #[serde(rename = "chartType")]
        chart_type: ChartType,
        #[serde(rename = "chartData")]
        chart_data: ChartData,
    },
    Choices {
        response: String,
        #[serde(rename = "showButtons")]
        show_buttons: bool,
        buttons: Vec<String>,
    },
    Text {
        response: String,
    },
}

impl ChatReply {
    pub fn text(response: impl Into<String>) -> Self {
        Self::Text {
            response: response.into(),
        }
    }

    /// Chart payload. `chart_data` must be non-empty; the orchestrator
    /// turns an empty normalization result into a text reply instead.
    pub fn chart(content: impl Into<String>, chart_type: ChartType, chart_data: ChartData) -> Self {
        Self::Chart {
            kind: "chart",
            content: content.into(),
            chart_type,
            chart_data,
        }
    }

    pub fn choices(response: impl Into<String>, buttons: Vec<String>) -> Self {
        Self::Choices {
            response: response.into(),
            show_buttons: true,
            buttons,
        }
    }
}

/// Where a session stands in the commissions sub-flow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DialogueState {
    /// No sub-flow in progress; turns pass through to normal handling.
    #[default]
    Idle,
    /// A commissions query is cached; waiting for "consolidate" or
    /// "upline manager".
    AwaitingChoice,
    /// Waiting for a manager name/ID; the next turn is consumed raw.
    AwaitingManagerName,
}

/// Per-session dialogue state for the commissions sub-flow.
///
/// Keyed by session in [`crate::SessionStore`] so concurrent users cannot
/// corrupt each other's pending query.
#[derive(Debug, Clone, Default)]
pub struct CommissionDialogue {
    pub state: DialogueState,
    /// The original commissions query, cached while a follow-up is pending.
    pub pending_query: Option<String>,
}
