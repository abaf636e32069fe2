//! Column role detection over an unknown schema.
//!
//! Roles are assigned by walking ranked candidate-name lists and taking
//! the first name present in the row's key set. The priority order is
//! behavior, not an implementation detail: callers depend on
//! commission_quarter beating year, agent_name beating agency_name, etc.

use sift_core::types::Row;

/// Columns never selected for any role, regardless of candidate lists.
pub const EXCLUDED_KEYS: &[&str] = &["id", "agent_id", "upline_id"];

/// Time/category key candidates, highest priority first.
const TIME_CANDIDATES: &[&str] = &[
    "commission_quarter",
    "commission_year",
    "commission_month",
    "commission_date",
    "month",
    "date",
    "period",
    "year",
    "quarter",
    "sales_year",
    "bonus_year",
];

/// Series-name key candidates, highest priority first.
const NAME_CANDIDATES: &[&str] = &[
    "agent_name",
    "upline_manager",
    "agency_name",
    "name",
    "agent",
    "manager",
    "contractor",
    "company",
    "salesperson_name",
];

/// Value candidates for one-shot proportions (pie/bar).
const PROPORTION_VALUE_CANDIDATES: &[&str] = &[
    "commission_amount",
    "total_commission",
    "commission",
    "total_bonus",
    "bonus",
    "total_sales",
    "sales_amount",
    "sales",
    "amount",
    "total",
    "count",
];

/// Value candidates for numeric series accumulated across periods (line).
const SERIES_VALUE_CANDIDATES: &[&str] = &[
    "commission_amount",
    "commission",
    "bonus",
    "sales",
    "amount",
    "value",
];

/// What the caller intends to plot. A good value column for a one-shot
/// proportion differs from a good numeric series, so detection is
/// purpose-specific.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartPurpose {
    Pie,
    Bar,
    Line,
}

/// Semantic roles assigned to columns of one row set.
///
/// Ephemeral: computed per chart request from the first row's keys, never
/// persisted. An unassigned role triggers a fallback tier in the
/// normalizer rather than a failure.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnRoles {
    pub time_key: Option<String>,
    pub name_key: Option<String>,
    pub value_key: Option<String>,
}

/// True for identifier-like columns that must never become chart data.
pub fn is_excluded(key: &str) -> bool {
    EXCLUDED_KEYS.contains(&key)
}

/// Walk a candidate list and return the first name present in the row.
fn first_present(row: &Row, candidates: &[&str]) -> Option<String> {
    candidates
        .iter()
        .find(|c| !is_excluded(c) && row.contains_key(**c))
        .map(|c| c.to_string())
}

/// Assign semantic roles from the first row's key set.
///
/// Each role independently takes the first candidate present, or stays
/// unassigned when no candidate matches.
pub fn detect_roles(first_row: &Row, purpose: ChartPurpose) -> ColumnRoles {
    let value_candidates = match purpose {
        ChartPurpose::Pie | ChartPurpose::Bar => PROPORTION_VALUE_CANDIDATES,
        ChartPurpose::Line => SERIES_VALUE_CANDIDATES,
    };

    ColumnRoles {
        time_key: first_present(first_row, TIME_CANDIDATES),
        name_key: first_present(first_row, NAME_CANDIDATES),
        value_key: first_present(first_row, value_candidates),
    }
}
