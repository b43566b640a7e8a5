pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::scoring::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let body_limit = DefaultBodyLimit::max(state.config.max_upload_bytes);

    Router::new()
        .route("/health", get(health::health_handler))
        // ATS API
        .route("/api/v1/ats/score", post(handlers::handle_score))
        .route("/api/v1/ats/breakdown", post(handlers::handle_breakdown))
        .route("/api/v1/ats/rescore", post(handlers::handle_rescore))
        .route(
            "/api/v1/ats/score-upload",
            post(handlers::handle_score_upload),
        )
        .layer(body_limit)
        .with_state(state)
}
