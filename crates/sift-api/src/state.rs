//! Application state shared across all route handlers.
//!
//! AppState holds the orchestrator and configuration. It is passed to
//! handlers via axum's State extractor.

use std::sync::Arc;
use std::time::Instant;

use sift_chat::ChatOrchestrator;
use sift_core::config::SiftConfig;
use sift_db::SqlExecutor;
use sift_llm::LanguageModel;

/// Shared application state.
///
/// All fields use `Arc` for cheap cloning across handler tasks.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<SiftConfig>,
    /// The chat pipeline coordinator.
    pub orchestrator: Arc<ChatOrchestrator>,
    /// Whether a language model client was wired at startup.
    pub llm_configured: bool,
    /// Whether a SQL executor was wired at startup.
    pub database_configured: bool,
    /// Server start time for uptime calculation.
    pub start_time: Instant,
}

impl AppState {
    /// Create a new AppState from the external collaborators.
    pub fn new(
        config: SiftConfig,
        llm: Arc<dyn LanguageModel>,
        executor: Arc<dyn SqlExecutor>,
    ) -> Self {
        let orchestrator = ChatOrchestrator::new(llm, executor, config.chat.clone());
        Self {
            config: Arc::new(config),
            orchestrator: Arc::new(orchestrator),
            llm_configured: true,
            database_configured: true,
            start_time: Instant::now(),
        }
    }
}
