use std::sync::Arc;

use axum::{extract::State, Json};
use citynav_core::{EdgeRecord, Node};

use crate::state::AppState;

/// All nodes in insertion order.
pub async fn nodes(State(state): State<Arc<AppState>>) -> Json<Vec<Node>> {
    Json(state.graph.graph.nodes().to_vec())
}

/// Each undirected edge once.
pub async fn edges(State(state): State<Arc<AppState>>) -> Json<Vec<EdgeRecord>> {
    Json(state.graph.edges.clone())
}
