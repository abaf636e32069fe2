//! Route handler functions for all API endpoints.
//!
//! Each handler extracts parameters via axum extractors, drives the
//! orchestrator, and returns JSON responses.

use axum::extract::State;
use axum::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sift_chat::ChatReply;

use crate::error::ApiError;
use crate::state::AppState;

// =============================================================================
// Request and response types
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ChatRequest {
    pub message: String,
    /// Threads follow-up turns onto an existing dialogue. Omitted on the
    /// first turn; the response carries the id to send back.
    pub session_id: Option<Uuid>,
}

/// A chat reply with the session id merged into the same JSON object.
#[derive(Debug, Serialize)]
pub struct ChatResponse {
    #[serde(flatten)]
    pub reply: ChatReply,
    pub session_id: Uuid,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub platform: String,
    pub uptime_secs: u64,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct InitResponse {
    pub message: String,
    pub success: bool,
    pub llm_configured: bool,
    pub database_configured: bool,
}

// =============================================================================
// Handlers
// =============================================================================

/// GET / - liveness check.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        platform: "api".to_string(),
        uptime_secs: state.start_time.elapsed().as_secs(),
    })
}

/// GET /application_initialization - reports collaborator wiring.
pub async fn application_initialization(State(state): State<AppState>) -> Json<InitResponse> {
    let success = state.llm_configured && state.database_configured;
    let message = if success {
        "Application initialized successfully"
    } else {
        "Initialization failed"
    };
    Json(InitResponse {
        message: message.to_string(),
        success,
        llm_configured: state.llm_configured,
        database_configured: state.database_configured,
    })
}

/// POST /chat - one conversation turn.
pub async fn chat(
    State(state): State<AppState>,
    Json(req): Json<ChatRequest>,
) -> Result<Json<ChatResponse>, ApiError> {
    let (reply, session_id) = state
        .orchestrator
        .handle_message(&req.message, req.session_id)
        .await?;
    Ok(Json(ChatResponse { reply, session_id }))
}
