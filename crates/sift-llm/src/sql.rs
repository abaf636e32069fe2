//! SQL-text cleanup for model output.

use std::sync::LazyLock;

use regex::Regex;

static FENCE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)```sql\s*|```").expect("Invalid fence regex"));

static TRAILING_SEMI_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r";\s*$").expect("Invalid semicolon regex"));

/// Strip markdown code fences and a trailing semicolon from generated SQL.
///
/// Models wrap queries in ```sql fences and terminate them with semicolons;
/// the Supabase RPC wants the bare statement.
pub fn clean_sql(text: &str) -> String {
    let without_fences = FENCE_RE.replace_all(text, "");
    let without_semi = TRAILING_SEMI_RE.replace(without_fences.trim(), "");
    without_semi.trim().to_string()
}
