//! Sift API crate - axum HTTP server and route handlers.
//!
//! Provides the REST API for the Sift assistant: health and
//! initialization checks plus the chat endpoint that drives the
//! conversation pipeline.

pub mod error;
pub mod handlers;
pub mod routes;
pub mod state;

pub use error::ApiError;
pub use routes::{create_router, start_server};
pub use state::AppState;
