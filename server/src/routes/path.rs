use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::{Query, State},
    Json,
};
use citynav_core::{find_route, Route, RouteError};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PathParams {
    source: String,
    destination: String,
}

#[derive(Debug, Serialize)]
pub struct RouteResponse {
    path: Vec<String>,
    cost: u64,
    hops: usize,
}

fn run_query(state: &AppState, params: &PathParams) -> Result<Route, RouteError> {
    let start = Instant::now();
    let result = find_route(
        &state.graph.graph,
        &params.source,
        &params.destination,
        state.max_settled,
    );

    let elapsed_us = start.elapsed().as_micros() as u64;
    match &result {
        Ok(route) => debug!(
            source = %params.source,
            destination = %params.destination,
            hops = route.hops(),
            cost = route.cost,
            elapsed_us,
            "route found"
        ),
        Err(e) => debug!(
            source = %params.source,
            destination = %params.destination,
            reason = %e,
            elapsed_us,
            "no route"
        ),
    }
    result
}

/// Node names along one shortest route; `[]` for unknown names or no route.
pub async fn shortest_path(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PathParams>,
) -> Json<Vec<String>> {
    let path = run_query(&state, &params)
        .map(|route| route.nodes)
        .unwrap_or_default();
    Json(path)
}

/// Shortest route with its total cost, or an error explaining why there is none.
pub async fn route(
    State(state): State<Arc<AppState>>,
    Query(params): Query<PathParams>,
) -> Result<Json<RouteResponse>, ApiError> {
    let route = run_query(&state, &params)?;
    Ok(Json(RouteResponse {
        hops: route.hops(),
        cost: route.cost,
        path: route.nodes,
    }))
}
