//! Shared domain types crossing crate boundaries.

use serde::{Deserialize, Serialize};

/// One result row from a query execution: an ordered mapping from column
/// name to scalar value.
///
/// `serde_json` is built with `preserve_order`, so iteration follows the
/// column order the database returned. The chart normalizer's fallback
/// tiers are defined in terms of that order.
pub type Row = serde_json::Map<String, serde_json::Value>;

/// An ordered sequence of rows from one query execution. May be empty.
pub type RowSet = Vec<Row>;

/// Chart flavor requested by the user (or defaulted by the orchestrator).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChartType {
    Line,
    Bar,
    Pie,
}

impl ChartType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Line => "line",
            Self::Bar => "bar",
            Self::Pie => "pie",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "line" => Some(Self::Line),
            "bar" => Some(Self::Bar),
            "pie" => Some(Self::Pie),
            _ => None,
        }
    }
}

/// Top-level intent assigned by the external classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IntentKind {
    QueryData,
    GenerateChart,
    GeneralChat,
}

/// Sub-category of a data query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubIntent {
    AgentCommissions,
    General,
}

/// Classification result for one user message.
///
/// Produced by the language-model boundary; the core never generates this
/// itself.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIntent {
    pub intent: IntentKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sub_intent: Option<SubIntent>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chart_type: Option<ChartType>,
}

impl UserIntent {
    /// Plain intent with no sub-classification.
    pub fn of(intent: IntentKind) -> Self {
        Self {
            intent,
            sub_intent: None,
            chart_type: None,
        }
    }

    /// True when this message opens the agent-commissions sub-flow.
    pub fn is_agent_commissions(&self) -> bool {
        self.intent == IntentKind::QueryData
            && self.sub_intent == Some(SubIntent::AgentCommissions)
    }
}
