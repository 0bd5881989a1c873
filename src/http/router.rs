//! Router configuration for the HTTP API.
//!
//! This module sets up all routes, middleware (CORS, compression, tracing),
//! and creates the axum router ready for serving.

use axum::{
    extract::DefaultBodyLimit,
    routing::{delete, get, post},
    Router,
};
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers;
use super::state::AppState;

/// Create the main application router with all routes and middleware.
pub fn create_router(state: AppState) -> Router {
    // CORS configuration - permissive for development, should be restricted in production
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Build the API router with versioned endpoints
    let api_v1 = Router::new()
        // Event CRUD
        .route("/events", get(handlers::list_events))
        .route("/events", post(handlers::store_event))
        .route("/events/{event_id}", get(handlers::get_event))
        .route("/events/{event_id}", delete(handlers::delete_event))
        .route("/events/{event_id}/finalize", post(handlers::finalize_event))
        // Season queries
        .route("/seasons", get(handlers::list_seasons))
        .route("/seasons/{season}/events", get(handlers::list_season_events))
        // Metric endpoints
        .route("/events/{event_id}/catch-summary", get(handlers::get_catch_summary))
        .route("/events/{event_id}/abundance-condition", get(handlers::get_abundance_condition))
        .route("/events/{event_id}/angler-abundance", get(handlers::get_angler_abundance))
        .route("/events/{event_id}/length-frequency/{species}", get(handlers::get_length_frequency))
        .route("/events/{event_id}/diet-composition", get(handlers::get_diet_composition))
        .route("/events/{event_id}/summary", get(handlers::get_event_summary))
        // Report & export
        .route("/events/{event_id}/report", post(handlers::get_report))
        .route("/events/{event_id}/spreadsheet", get(handlers::get_spreadsheet))
        // Species reference
        .route("/species", get(handlers::list_species));

    // Combine all routes
    Router::new()
        .route("/health", get(handlers::health_check))
        .nest("/v1", api_v1)
        // Allow large event payloads during uploads.
        .layer(DefaultBodyLimit::max(10 * 1024 * 1024))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::repositories::LocalRepository;
    use std::sync::Arc;

    #[test]
    fn test_router_creation() {
        let repo =
            Arc::new(LocalRepository::new()) as Arc<dyn crate::db::repository::FullRepository>;
        let state = AppState::new(repo);
        let _router = create_router(state);
        // If we got here, router was created successfully
    }
}
