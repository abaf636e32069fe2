//! Heuristic chart normalization for schema-unknown row sets.
//!
//! A query against the commission database comes back as flat JSON rows
//! whose columns we cannot predict. This crate sniffs semantic roles
//! (time, name, value) from the column names of the first row and reshapes
//! the row set into line, bar, or pie chart structures, degrading through
//! fallback tiers rather than failing. Everything here is pure: no I/O,
//! no shared state.

pub mod coerce;
pub mod normalize;
pub mod roles;
pub mod types;

pub use coerce::{coerce_number, is_numeric, stringify};
pub use normalize::normalize;
pub use roles::{detect_roles, ChartPurpose, ColumnRoles};
pub use types::{ChartData, ChartFrame, ChartPoint};
