use std::time::Instant;

use citynav_core::{EdgeRecord, Graph};

/// The loaded graph plus metadata about where it came from.
///
/// Built completely before the listener is bound and never mutated after,
/// so handlers share it through an `Arc` without locking.
#[derive(Debug)]
pub struct GraphState {
    pub graph: Graph,
    /// Deduplicated edge listing, computed once at load.
    pub edges: Vec<EdgeRecord>,
    pub source: String,
    pub load_time_ms: f64,
    pub loaded_at: Instant,
}

impl GraphState {
    pub fn new(graph: Graph, source: impl Into<String>, load_time_ms: f64) -> Self {
        let edges = graph.edges();
        Self {
            graph,
            edges,
            source: source.into(),
            load_time_ms,
            loaded_at: Instant::now(),
        }
    }

    pub fn uptime_seconds(&self) -> f64 {
        self.loaded_at.elapsed().as_secs_f64()
    }
}

/// Shared application state.
#[derive(Debug)]
pub struct AppState {
    pub graph: GraphState,
    /// Per-query cap on settled nodes.
    pub max_settled: usize,
}

impl AppState {
    pub fn new(graph: GraphState, max_settled: usize) -> Self {
        Self { graph, max_settled }
    }
}
