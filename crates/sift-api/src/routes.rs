//! Router setup with all API routes and middleware.
//!
//! Configures the axum Router with CORS, tracing, and all endpoint
//! handlers.

use axum::extract::DefaultBodyLimit;
use axum::http::{header, HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

/// Create the axum Router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS: a single frontend origin, selected by environment type.
    let origin = if state.config.is_development() {
        &state.config.chat.dev_origin
    } else {
        &state.config.chat.prod_origin
    };
    let allowed = match origin.parse::<HeaderValue>() {
        Ok(value) => vec![value],
        Err(_) => {
            tracing::warn!(origin = %origin, "Invalid CORS origin in config, denying all");
            vec![]
        }
    };
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::list(allowed))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    Router::new()
        .route("/", get(handlers::health))
        .route(
            "/application_initialization",
            get(handlers::application_initialization),
        )
        .route("/chat", post(handlers::chat))
        .layer(DefaultBodyLimit::max(64 * 1024))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

/// Start the HTTP server on the configured address.
pub async fn start_server(state: AppState) -> Result<(), sift_core::SiftError> {
    let addr = format!("127.0.0.1:{}", state.config.general.port);

    let router = create_router(state);

    tracing::info!("Starting API server on {}", addr);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .map_err(|e| sift_core::SiftError::Api(format!("Failed to bind: {}", e)))?;

    axum::serve(listener, router)
        .await
        .map_err(|e| sift_core::SiftError::Api(format!("Server error: {}", e)))?;

    Ok(())
}
