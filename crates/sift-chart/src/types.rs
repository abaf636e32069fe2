use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One slice/bar of a pie or bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub name: String,
    pub value: f64,
}

impl ChartPoint {
    pub fn new(name: impl Into<String>, value: f64) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

/// One period of a line chart, holding a value per series label.
///
/// Serializes flattened, frontend-style: `{"period": "Q1_2023", "Sam": 100,
/// "Lee": 200}`. Periods are unique within one payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub period: String,
    #[serde(flatten)]
    pub series: BTreeMap<String, f64>,
}

impl ChartFrame {
    pub fn new(period: impl Into<String>) -> Self {
        Self {
            period: period.into(),
            series: BTreeMap::new(),
        }
    }
}

/// Normalized chart data: points for pie/bar, frames for line.
///
/// An empty sequence means "nothing plottable" — callers must translate
/// that into a user-visible failure rather than rendering an empty chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ChartData {
    Points(Vec<ChartPoint>),
    Frames(Vec<ChartFrame>),
}

impl ChartData {
    pub fn is_empty(&self) -> bool {
        match self {
            Self::Points(p) => p.is_empty(),
            Self::Frames(f) => f.is_empty(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            Self::Points(p) => p.len(),
            Self::Frames(f) => f.len(),
        }
    }
}
