use std::cmp::Reverse;
use std::collections::BinaryHeap;

use thiserror::Error;

use crate::graph::{Graph, NodeId};

/// Settled-node cap that never triggers.
pub const UNLIMITED: usize = usize::MAX;

/// A minimum-cost route, endpoints included.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub nodes: Vec<String>,
    pub cost: u64,
}

impl Route {
    pub fn hops(&self) -> usize {
        self.nodes.len().saturating_sub(1)
    }
}

/// Why a route query produced no route.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RouteError {
    #[error("node '{name}' not found")]
    UnknownNode { name: String },

    #[error("no route from '{from}' to '{to}'")]
    Unreachable { from: String, to: String },

    #[error("search settled {limit} nodes without reaching the destination")]
    LimitExceeded { limit: usize },
}

/// Shortest route from `from` to `to` by total weight (Dijkstra).
///
/// The heap may hold several entries for one node; entries for nodes that
/// are already settled are skipped when popped. Equal-cost entries pop in
/// push order, and a node's predecessor only changes on a strictly cheaper
/// relaxation, so among equal-cost routes the first one found is returned.
///
/// `max_settled` bounds how many nodes the search may settle before giving
/// up with [`RouteError::LimitExceeded`]. Pass [`UNLIMITED`] to disable it.
pub fn find_route(
    graph: &Graph,
    from: &str,
    to: &str,
    max_settled: usize,
) -> Result<Route, RouteError> {
    let start = graph.resolve(from).ok_or_else(|| RouteError::UnknownNode {
        name: from.to_string(),
    })?;
    let target = graph.resolve(to).ok_or_else(|| RouteError::UnknownNode {
        name: to.to_string(),
    })?;

    if start == target {
        return Ok(Route {
            nodes: vec![from.to_string()],
            cost: 0,
        });
    }

    let n = graph.node_count();
    let mut dist = vec![u64::MAX; n];
    let mut prev: Vec<Option<NodeId>> = vec![None; n];
    let mut settled = vec![false; n];
    let mut settled_count = 0usize;

    // (cost, push sequence, node); the sequence keeps equal costs FIFO.
    let mut heap: BinaryHeap<Reverse<(u64, u64, NodeId)>> = BinaryHeap::new();
    let mut seq = 0u64;

    dist[start] = 0;
    heap.push(Reverse((0, seq, start)));

    while let Some(Reverse((cost, _, current))) = heap.pop() {
        if settled[current] {
            continue;
        }
        if settled_count >= max_settled {
            return Err(RouteError::LimitExceeded { limit: max_settled });
        }
        settled[current] = true;
        settled_count += 1;

        if current == target {
            break;
        }

        for edge in graph.adjacent(current) {
            if settled[edge.target] {
                continue;
            }
            let candidate = cost + u64::from(edge.weight);
            if candidate < dist[edge.target] {
                dist[edge.target] = candidate;
                prev[edge.target] = Some(current);
                seq += 1;
                heap.push(Reverse((candidate, seq, edge.target)));
            }
        }
    }

    if !settled[target] {
        return Err(RouteError::Unreachable {
            from: from.to_string(),
            to: to.to_string(),
        });
    }

    Ok(Route {
        nodes: reconstruct_path(graph, &prev, target),
        cost: dist[target],
    })
}

/// Walk predecessor links back from `target`; the start is the one node
/// with no predecessor.
fn reconstruct_path(graph: &Graph, prev: &[Option<NodeId>], target: NodeId) -> Vec<String> {
    let mut path = vec![graph.name_of(target).to_string()];
    let mut current = target;

    while let Some(parent) = prev[current] {
        path.push(graph.name_of(parent).to_string());
        current = parent;
    }

    path.reverse();
    path
}

/// Node names along one shortest route, or an empty list when either name
/// is unknown or no route exists.
pub fn shortest_path(graph: &Graph, from: &str, to: &str) -> Vec<String> {
    find_route(graph, from, to, UNLIMITED)
        .map(|route| route.nodes)
        .unwrap_or_default()
}

/// Total weight of walking `path`, taking the cheapest parallel edge for each
/// step. None if a name is unknown, two consecutive names are not adjacent,
/// or the path is empty.
pub fn path_cost<S: AsRef<str>>(graph: &Graph, path: &[S]) -> Option<u64> {
    let ids = path
        .iter()
        .map(|name| graph.resolve(name.as_ref()))
        .collect::<Option<Vec<NodeId>>>()?;
    if ids.is_empty() {
        return None;
    }

    ids.windows(2).try_fold(0u64, |total, pair| {
        let step = graph
            .adjacent(pair[0])
            .iter()
            .filter(|e| e.target == pair[1])
            .map(|e| e.weight)
            .min()?;
        Some(total + u64::from(step))
    })
}
