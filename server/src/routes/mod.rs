//! HTTP routes for the citynav query API.

use std::sync::Arc;

use axum::{routing::get, Router};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

mod listing;
mod neighborhood;
mod path;
mod status;

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    // The map UI is served from its own origin.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(status::health))
        .route("/api/status", get(status::status))
        .route("/api/nodes", get(listing::nodes))
        .route("/api/edges", get(listing::edges))
        .route("/api/nodes/:id/neighbors", get(neighborhood::neighbors))
        .route("/api/shortest-path", get(path::shortest_path))
        .route("/api/route", get(path::route))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(Arc::new(state))
}
