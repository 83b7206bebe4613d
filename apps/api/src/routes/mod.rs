pub mod health;

use axum::extract::DefaultBodyLimit;
use axum::{
    routing::{get, post},
    Router,
};

use crate::parsing::handlers::{self, MAX_UPLOAD_BYTES};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        .route("/api/cv/upload", post(handlers::handle_cv_upload))
        // Slack above the 10 MiB file cap covers multipart framing overhead;
        // the handler enforces the exact per-file limit.
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES + 64 * 1024))
        .with_state(state)
}
