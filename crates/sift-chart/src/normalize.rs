//! Chart normalization algorithms.
//!
//! Three independent reshapers (pie, bar, line) built on role detection.
//! None of them ever fail: malformed input degrades through fallback
//! tiers, and an empty output sequence is the terminal degraded state.

use std::collections::BTreeMap;

use serde_json::Value;
use tracing::debug;

use sift_core::types::{ChartType, Row};

use crate::coerce::{coerce_number, is_numeric, stringify};
use crate::roles::{detect_roles, is_excluded, ChartPurpose, ColumnRoles};
use crate::types::{ChartData, ChartFrame, ChartPoint};

/// Reshape a row set into chart data for the requested chart type.
///
/// Pure and deterministic: identical rows and chart type always produce
/// identical output. Empty output means "could not generate a chart".
pub fn normalize(rows: &[Row], chart_type: ChartType) -> ChartData {
    let data = match chart_type {
        ChartType::Pie => ChartData::Points(normalize_pie(rows)),
        ChartType::Bar => ChartData::Points(normalize_bar(rows)),
        ChartType::Line => ChartData::Frames(normalize_line(rows)),
    };
    debug!(
        chart_type = chart_type.as_str(),
        rows = rows.len(),
        out = data.len(),
        "Normalized row set"
    );
    data
}

/// A value usable for naming: present and not null.
fn present<'a>(row: &'a Row, key: &str) -> Option<&'a Value> {
    row.get(key).filter(|v| !v.is_null())
}

/// Display text for a name cell; absent or null becomes "Unknown".
fn name_or_unknown(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => "Unknown".to_string(),
        Some(v) => stringify(v),
    }
}

/// Pie normalization.
///
/// Tier 1: clear name + value columns, one slice per row.
/// Tier 2: a single row fans out into one slice per numeric column.
/// Tier 3: per-row scan for any coercible value; rows without one drop.
fn normalize_pie(rows: &[Row]) -> Vec<ChartPoint> {
    let Some(first) = rows.first() else {
        return vec![];
    };
    let roles = detect_roles(first, ChartPurpose::Pie);

    if let (Some(name_key), Some(value_key)) = (&roles.name_key, &roles.value_key) {
        return rows
            .iter()
            .map(|row| {
                ChartPoint::new(
                    name_or_unknown(row.get(name_key.as_str())),
                    row.get(value_key.as_str())
                        .and_then(coerce_number)
                        .unwrap_or(0.0),
                )
            })
            .collect();
    }

    if rows.len() == 1 {
        return first
            .iter()
            .filter(|(key, _)| !is_excluded(key))
            .filter_map(|(key, value)| {
                coerce_number(value).map(|n| ChartPoint::new(key.clone(), n))
            })
            .collect();
    }

    rows.iter()
        .enumerate()
        .filter_map(|(i, row)| {
            let name = roles
                .name_key
                .as_deref()
                .and_then(|k| present(row, k))
                .or_else(|| present(row, "name"))
                .or_else(|| present(row, "salesperson"))
                .map(stringify)
                .unwrap_or_else(|| format!("Item {}", i + 1));
            let value = row.iter().find_map(|(key, value)| {
                if is_excluded(key) {
                    None
                } else {
                    coerce_number(value)
                }
            })?;
            Some(ChartPoint::new(name, value))
        })
        .collect()
}

/// Bar normalization.
///
/// The value column must be strictly numeric-typed in the first row (a
/// numeric string is not good enough here); without one there is no bar
/// chart. Names fall back from name key to time key to the first
/// string-typed field to the literal "Item".
fn normalize_bar(rows: &[Row]) -> Vec<ChartPoint> {
    let Some(first) = rows.first() else {
        return vec![];
    };
    let roles = detect_roles(first, ChartPurpose::Bar);

    let Some(value_key) = first
        .iter()
        .find(|(key, value)| !is_excluded(key) && is_numeric(value))
        .map(|(key, _)| key.clone())
    else {
        return vec![];
    };

    rows.iter()
        .map(|row| {
            let name = bar_name(row, &roles);
            let value = row.get(&value_key).and_then(coerce_number).unwrap_or(0.0);
            ChartPoint::new(name, value)
        })
        .collect()
}

fn bar_name(row: &Row, roles: &ColumnRoles) -> String {
    roles
        .name_key
        .as_deref()
        .and_then(|k| present(row, k))
        .or_else(|| roles.time_key.as_deref().and_then(|k| present(row, k)))
        .map(stringify)
        .or_else(|| {
            row.iter()
                .find(|(key, value)| !is_excluded(key) && value.is_string())
                .map(|(_, value)| stringify(value))
        })
        .unwrap_or_else(|| "Item".to_string())
}

/// Line normalization.
///
/// Rows group into one frame per distinct period; rows sharing a period
/// merge. Within a row the primary pass stores strictly numeric columns
/// under the row's name-like value (so two agents in the same quarter
/// become two series); a row contributing nothing that way falls back to
/// storing every coercible column under its raw column name.
///
/// Output is sorted ascending by period as a plain string comparison, so
/// "10" sorts before "2". That lexical order is deliberate.
fn normalize_line(rows: &[Row]) -> Vec<ChartFrame> {
    let Some(first) = rows.first() else {
        return vec![];
    };
    let roles = detect_roles(first, ChartPurpose::Line);

    // BTreeMap keys give the lexical period ordering directly.
    let mut frames: BTreeMap<String, BTreeMap<String, f64>> = BTreeMap::new();

    for (i, row) in rows.iter().enumerate() {
        // Positional fallback when no time column exists: distinct rows
        // never collide on period.
        let period = match roles.time_key.as_deref().and_then(|k| row.get(k)) {
            Some(v) => stringify(v),
            None => i.to_string(),
        };
        let frame = frames.entry(period).or_default();

        let series_label = roles
            .name_key
            .as_deref()
            .and_then(|k| present(row, k))
            .map(stringify);

        let mut contributed = false;
        for (key, value) in row {
            if skip_for_line(key, &roles) {
                continue;
            }
            if is_numeric(value) {
                if let Some(n) = coerce_number(value) {
                    let label = series_label.clone().unwrap_or_else(|| key.clone());
                    frame.insert(label, n);
                    contributed = true;
                }
            }
        }

        // Rows whose numbers arrived as strings still contribute, under
        // raw column names.
        if !contributed {
            for (key, value) in row {
                if skip_for_line(key, &roles) {
                    continue;
                }
                if let Some(n) = coerce_number(value) {
                    frame.insert(key.clone(), n);
                }
            }
        }
    }

    frames
        .into_iter()
        .map(|(period, series)| ChartFrame { period, series })
        .collect()
}

fn skip_for_line(key: &str, roles: &ColumnRoles) -> bool {
    is_excluded(key) || roles.time_key.as_deref() == Some(key)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn rows_from(value: serde_json::Value) -> Vec<Row> {
        serde_json::from_value(value).unwrap()
    }

    fn points(data: ChartData) -> Vec<ChartPoint> {
        match data {
            ChartData::Points(p) => p,
            ChartData::Frames(_) => panic!("expected points"),
        }
    }

    fn frames(data: ChartData) -> Vec<ChartFrame> {
        match data {
            ChartData::Frames(f) => f,
            ChartData::Points(_) => panic!("expected frames"),
        }
    }

    // =====================================================================
    // Empty and degenerate input
    // =====================================================================

    #[test]
    fn test_empty_rowset_all_chart_types() {
        assert!(normalize(&[], ChartType::Pie).is_empty());
        assert!(normalize(&[], ChartType::Bar).is_empty());
        assert!(normalize(&[], ChartType::Line).is_empty());
    }

    #[test]
    fn test_line_empty_rowset_is_empty_frames() {
        assert_eq!(normalize(&[], ChartType::Line), ChartData::Frames(vec![]));
    }

    #[test]
    fn test_rows_of_empty_objects_produce_nothing() {
        let rows = rows_from(json!([{}, {}]));
        assert!(normalize(&rows, ChartType::Pie).is_empty());
        assert!(normalize(&rows, ChartType::Bar).is_empty());
        // Line still emits positional frames, but they carry no series.
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out.len(), 2);
        assert!(out.iter().all(|f| f.series.is_empty()));
    }

    #[test]
    fn test_idempotence() {
        let rows = rows_from(json!([
            {"agent_name": "Sam", "commission_amount": 100},
            {"agent_name": "Lee", "commission_amount": 200}
        ]));
        for ct in [ChartType::Pie, ChartType::Bar, ChartType::Line] {
            assert_eq!(normalize(&rows, ct), normalize(&rows, ct));
        }
    }

    // =====================================================================
    // Pie
    // =====================================================================

    #[test]
    fn test_pie_tier1_name_and_value_columns() {
        let rows = rows_from(json!([
            {"agent_name": "Sam", "commission_amount": 100},
            {"agent_name": "Lee", "commission_amount": 200}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(
            out,
            vec![ChartPoint::new("Sam", 100.0), ChartPoint::new("Lee", 200.0)]
        );
    }

    #[test]
    fn test_pie_tier1_null_name_becomes_unknown() {
        let rows = rows_from(json!([
            {"agent_name": null, "commission_amount": 50}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(out, vec![ChartPoint::new("Unknown", 50.0)]);
    }

    #[test]
    fn test_pie_tier1_uncoercible_value_becomes_zero() {
        let rows = rows_from(json!([
            {"agent_name": "Sam", "commission_amount": "n/a"},
            {"agent_name": "Lee", "commission_amount": "250"}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(
            out,
            vec![ChartPoint::new("Sam", 0.0), ChartPoint::new("Lee", 250.0)]
        );
    }

    #[test]
    fn test_pie_tier2_single_row_fans_out() {
        // Excluded column dropped, point order follows column order.
        let rows = rows_from(json!([{"a": 1, "b": 2, "agent_id": "x"}]));
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(out, vec![ChartPoint::new("a", 1.0), ChartPoint::new("b", 2.0)]);
    }

    #[test]
    fn test_pie_tier2_drops_non_numeric_columns() {
        let rows = rows_from(json!([
            {"region": "west", "q1": "10", "q2": 20, "active": true}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(
            out,
            vec![ChartPoint::new("q1", 10.0), ChartPoint::new("q2", 20.0)]
        );
    }

    #[test]
    fn test_pie_tier3_multi_row_no_schema() {
        let rows = rows_from(json!([
            {"foo": "alpha", "metric": 5},
            {"foo": "beta", "metric": 7}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        // No name candidates match "foo": positional Item names.
        assert_eq!(
            out,
            vec![ChartPoint::new("Item 1", 5.0), ChartPoint::new("Item 2", 7.0)]
        );
    }

    #[test]
    fn test_pie_tier3_prefers_name_column() {
        let rows = rows_from(json!([
            {"name": "North", "metric": 5},
            {"name": "South", "metric": 7}
        ]));
        // "name" is a sniffer candidate, so this lands in tier 1 only if a
        // value candidate also matched; "metric" is not one, so tier 3
        // picks the name column value.
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(
            out,
            vec![ChartPoint::new("North", 5.0), ChartPoint::new("South", 7.0)]
        );
    }

    #[test]
    fn test_pie_tier3_salesperson_fallback() {
        let rows = rows_from(json!([
            {"salesperson": "Ann", "metric": 1},
            {"salesperson": "Bob", "metric": 2}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(
            out,
            vec![ChartPoint::new("Ann", 1.0), ChartPoint::new("Bob", 2.0)]
        );
    }

    #[test]
    fn test_pie_tier3_drops_rows_without_numbers() {
        let rows = rows_from(json!([
            {"foo": "alpha", "metric": 5},
            {"foo": "beta", "metric": "not a number"}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(out, vec![ChartPoint::new("Item 1", 5.0)]);
    }

    #[test]
    fn test_pie_tier3_skips_excluded_columns_for_values() {
        let rows = rows_from(json!([
            {"id": 99, "foo": "alpha", "metric": 5},
            {"id": 98, "foo": "beta", "metric": 6}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        // id coerces but is excluded; metric is the first usable value.
        assert_eq!(out[0].value, 5.0);
        assert_eq!(out[1].value, 6.0);
    }

    // =====================================================================
    // Bar
    // =====================================================================

    #[test]
    fn test_bar_basic() {
        let rows = rows_from(json!([
            {"agent_name": "Sam", "commission_amount": 100},
            {"agent_name": "Lee", "commission_amount": 200}
        ]));
        let out = points(normalize(&rows, ChartType::Bar));
        assert_eq!(
            out,
            vec![ChartPoint::new("Sam", 100.0), ChartPoint::new("Lee", 200.0)]
        );
    }

    #[test]
    fn test_bar_requires_strictly_numeric_value_column() {
        // All values are numeric strings: no bar chart.
        let rows = rows_from(json!([
            {"agent_name": "Sam", "commission_amount": "100"}
        ]));
        assert!(normalize(&rows, ChartType::Bar).is_empty());
    }

    #[test]
    fn test_bar_skips_excluded_numeric_columns() {
        let rows = rows_from(json!([
            {"id": 7, "agent_name": "Sam", "total": 300}
        ]));
        let out = points(normalize(&rows, ChartType::Bar));
        assert_eq!(out, vec![ChartPoint::new("Sam", 300.0)]);
    }

    #[test]
    fn test_bar_name_falls_back_to_time_key() {
        let rows = rows_from(json!([
            {"commission_year": 2023, "total": 10},
            {"commission_year": 2024, "total": 12}
        ]));
        let out = points(normalize(&rows, ChartType::Bar));
        // commission_year is numeric, so the value scan finds it first.
        assert_eq!(out[0].name, "2023");
        assert_eq!(out[0].value, 2023.0);
    }

    #[test]
    fn test_bar_name_falls_back_to_first_string_field() {
        let rows = rows_from(json!([
            {"region": "west", "total": 10}
        ]));
        let out = points(normalize(&rows, ChartType::Bar));
        assert_eq!(out, vec![ChartPoint::new("west", 10.0)]);
    }

    #[test]
    fn test_bar_name_literal_item_when_nothing_available() {
        let rows = rows_from(json!([
            {"total": 10}
        ]));
        let out = points(normalize(&rows, ChartType::Bar));
        assert_eq!(out, vec![ChartPoint::new("Item", 10.0)]);
    }

    #[test]
    fn test_bar_later_row_missing_value_column_is_zero() {
        let rows = rows_from(json!([
            {"agent_name": "Sam", "total": 10},
            {"agent_name": "Lee"}
        ]));
        let out = points(normalize(&rows, ChartType::Bar));
        assert_eq!(out[1], ChartPoint::new("Lee", 0.0));
    }

    // =====================================================================
    // Line
    // =====================================================================

    #[test]
    fn test_line_groups_shared_period_into_one_frame() {
        // Two agents in Q1_2023 become two series in a single frame.
        let rows = rows_from(json!([
            {"commission_quarter": "Q1_2023", "agent_name": "Sam", "commission_amount": 100},
            {"commission_quarter": "Q1_2023", "agent_name": "Lee", "commission_amount": 200}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].period, "Q1_2023");
        assert_eq!(out[0].series.get("Sam"), Some(&100.0));
        assert_eq!(out[0].series.get("Lee"), Some(&200.0));
    }

    #[test]
    fn test_line_one_frame_per_distinct_period() {
        let rows = rows_from(json!([
            {"commission_quarter": "Q1_2023", "commission_amount": 10},
            {"commission_quarter": "Q2_2023", "commission_amount": 20}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].period, "Q1_2023");
        assert_eq!(out[1].period, "Q2_2023");
    }

    #[test]
    fn test_line_no_name_key_uses_raw_column_names() {
        let rows = rows_from(json!([
            {"month": 1, "sales": 10, "bonus": 2},
            {"month": 2, "sales": 12, "bonus": 3}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out[0].series.get("sales"), Some(&10.0));
        assert_eq!(out[0].series.get("bonus"), Some(&2.0));
        assert!(out[0].series.get("month").is_none());
    }

    #[test]
    fn test_line_positional_fallback_without_time_key() {
        let rows = rows_from(json!([
            {"sales": 10},
            {"sales": 20}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].period, "0");
        assert_eq!(out[1].period, "1");
    }

    #[test]
    fn test_line_lexical_period_sort() {
        // "10" sorts before "2": lexical ordering is the defined behavior.
        let rows = rows_from(json!([
            {"period": "2", "sales": 1},
            {"period": "10", "sales": 2}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out[0].period, "10");
        assert_eq!(out[1].period, "2");
    }

    #[test]
    fn test_line_string_numbers_fall_back_to_raw_names() {
        // Nothing strictly numeric in the row: the secondary pass stores
        // coercible string values under their raw column names.
        let rows = rows_from(json!([
            {"commission_quarter": "Q1_2023", "agent_name": "Sam", "commission_amount": "125.5"}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].series.get("commission_amount"), Some(&125.5));
        assert!(out[0].series.get("Sam").is_none());
    }

    #[test]
    fn test_line_excluded_columns_never_become_series() {
        let rows = rows_from(json!([
            {"commission_quarter": "Q1_2023", "id": 1, "agent_id": "A-1", "commission_amount": 50}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert!(out[0].series.get("id").is_none());
        assert!(out[0].series.get("agent_id").is_none());
        assert_eq!(out[0].series.get("commission_amount"), Some(&50.0));
    }

    #[test]
    fn test_line_numeric_period_stringified() {
        let rows = rows_from(json!([
            {"year": 2023, "sales": 10},
            {"year": 2024, "sales": 20}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out[0].period, "2023");
        assert_eq!(out[1].period, "2024");
    }

    #[test]
    fn test_line_entirely_non_numeric_row_contributes_nothing() {
        let rows = rows_from(json!([
            {"commission_quarter": "Q1_2023", "agent_name": "Sam", "note": "joined late"}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out.len(), 1);
        assert!(out[0].series.is_empty());
    }

    #[test]
    fn test_line_same_series_same_period_last_write_wins() {
        let rows = rows_from(json!([
            {"commission_quarter": "Q1_2023", "agent_name": "Sam", "commission_amount": 100},
            {"commission_quarter": "Q1_2023", "agent_name": "Sam", "commission_amount": 150}
        ]));
        let out = frames(normalize(&rows, ChartType::Line));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].series.get("Sam"), Some(&150.0));
    }

    // =====================================================================
    // Heterogeneous typing
    // =====================================================================

    #[test]
    fn test_mixed_typed_value_column() {
        // Same column, different value types per row: defensive coercion.
        let rows = rows_from(json!([
            {"agent_name": "Sam", "commission_amount": 100},
            {"agent_name": "Lee", "commission_amount": "200"},
            {"agent_name": "Kim", "commission_amount": null}
        ]));
        let out = points(normalize(&rows, ChartType::Pie));
        assert_eq!(
            out,
            vec![
                ChartPoint::new("Sam", 100.0),
                ChartPoint::new("Lee", 200.0),
                ChartPoint::new("Kim", 0.0),
            ]
        );
    }
}
