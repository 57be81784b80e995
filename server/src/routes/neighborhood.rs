use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use citynav_core::Weight;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct NeighborResponse {
    id: String,
    weight: Weight,
}

/// Adjacency of one node, parallel entries included.
pub async fn neighbors(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<Vec<NeighborResponse>>, ApiError> {
    let graph = &state.graph.graph;
    if !graph.contains(&id) {
        return Err(ApiError::NodeNotFound(id));
    }

    let neighbors = graph
        .neighbors(&id)
        .map(|(name, weight)| NeighborResponse {
            id: name.to_string(),
            weight,
        })
        .collect();
    Ok(Json(neighbors))
}
