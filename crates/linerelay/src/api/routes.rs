//! API routes

use axum::middleware::from_fn;
use axum::routing::{get, post};
use axum::Router;

use super::handlers::{self, AppState};
use super::middleware::track_requests;

/// Create the API router
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Webhook relay
        .route("/notify", post(handlers::notify))
        // Health
        .route("/health", get(handlers::health))
        // Telemetry
        .route("/metrics", get(handlers::metrics))
        // Landing page
        .route("/", get(handlers::index))
        .layer(from_fn(track_requests))
        .with_state(state)
}
