use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::middleware::request_id;

use super::handlers;
use super::AppState;

/// Creates the main API router with all routes
///
/// CORS is permissive: the browser form is served from a different origin.
/// Request IDs are stamped outside the trace layer so every request span
/// carries one.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/search-activities", post(handlers::search_activities))
        .layer(TraceLayer::new_for_http().make_span_with(request_id::span_for_request))
        .layer(middleware::from_fn(request_id::stamp_request_id))
        .layer(CorsLayer::permissive())
        .with_state(state)
}
