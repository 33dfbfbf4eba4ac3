//! HTTP API module
//!
//! This module contains the router, endpoint handlers and response types.

pub mod handlers;
pub mod responses;

use std::sync::Arc;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;
use handlers::*;

/// Create the HTTP router with all endpoints
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/pomodoro", get(pomodoro_status_handler))
        .route("/pomodoro/toggle", post(pomodoro_toggle_handler))
        .route("/record", get(record_status_handler))
        .route("/record/toggle", post(record_toggle_handler))
        .route("/record/reset", post(record_reset_handler))
        .route("/clock", get(clock_handler))
        .route("/status", get(status_handler))
        .route("/health", get(health_handler))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
