pub mod health;

use axum::{extract::DefaultBodyLimit, routing::get, routing::post, Router};
use tower_http::limit::RequestBodyLimitLayer;

use crate::analysis::handlers;
use crate::render::handlers::handle_export;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Analysis API
        .route("/api/v1/analyze", post(handlers::handle_analyze))
        .route("/api/v1/generate", post(handlers::handle_generate))
        .route("/api/v1/study-plan", post(handlers::handle_study_plan))
        .route(
            "/api/v1/resume/extract",
            post(handlers::handle_extract_resume),
        )
        // Export API
        .route("/api/v1/export", post(handle_export))
        .layer(DefaultBodyLimit::disable())
        .layer(RequestBodyLimitLayer::new(body_limit))
        .with_state(state)
}
