use std::sync::Arc;

use axum::{extract::State, response::IntoResponse, Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct StatusResponse {
    source: String,
    status: &'static str,
    node_count: usize,
    edge_count: usize,
    unique_edge_count: usize,
    memory_bytes: usize,
    max_settled: usize,
    load_time_ms: f64,
    uptime_seconds: f64,
}

pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "ok",
        "service": "citynav-server"
    }))
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<StatusResponse> {
    let gs = &state.graph;
    Json(StatusResponse {
        source: gs.source.clone(),
        status: "loaded",
        node_count: gs.graph.node_count(),
        edge_count: gs.graph.edge_count(),
        unique_edge_count: gs.edges.len(),
        memory_bytes: gs.graph.memory_usage(),
        max_settled: state.max_settled,
        load_time_ms: gs.load_time_ms,
        uptime_seconds: gs.uptime_seconds(),
    })
}
