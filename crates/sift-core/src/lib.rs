//! Shared types, configuration, and errors for the Sift analytics backend.
//!
//! Sift turns natural-language questions into SQL via an external language
//! model, executes them against a commission database, and renders the
//! results as prose or chart-ready series.

pub mod config;
pub mod error;
pub mod types;

pub use config::SiftConfig;
pub use error::{Result, SiftError};
pub use types::*;
