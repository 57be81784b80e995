use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};

use crate::seed::{Seed, SeedError};

/// Dense node index, assigned in insertion order.
pub type NodeId = usize;

/// Travel cost of a single edge. Non-negative by construction.
pub type Weight = u32;

/// Coordinates given to nodes that are first seen as an edge endpoint.
pub const PLACEHOLDER_COORDS: (i32, i32) = (0, 0);

/// A named location with display coordinates.
///
/// The coordinates are only carried through for layout rendering; routing
/// never looks at them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub id: String,
    #[serde(default)]
    pub x: i32,
    #[serde(default)]
    pub y: i32,
}

impl Node {
    pub fn new(id: impl Into<String>, x: i32, y: i32) -> Self {
        Self { id: id.into(), x, y }
    }
}

/// One direction of an undirected edge in the adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub target: NodeId,
    pub weight: Weight,
}

/// An undirected edge as declared in a seed or returned by [`Graph::edges`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeRecord {
    pub source: String,
    pub target: String,
    #[serde(default)]
    pub weight: Weight,
}

impl EdgeRecord {
    pub fn new(source: impl Into<String>, target: impl Into<String>, weight: Weight) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            weight,
        }
    }
}

/// In-memory undirected weighted multigraph keyed by node name.
///
/// Every `add_edge` appends one entry to each endpoint's adjacency list, so
/// declaring the same pair twice leaves two parallel entries behind. Routing
/// relaxes both and the cheaper one wins; listing reports the pair once.
///
/// Built once and then only read. Nothing here needs a lock.
#[derive(Debug)]
pub struct Graph {
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            index: HashMap::new(),
            adjacency: Vec::new(),
        }
    }

    /// Pre-allocate for a known graph size.
    pub fn with_capacity(node_count: usize) -> Self {
        Self {
            nodes: Vec::with_capacity(node_count),
            index: HashMap::with_capacity(node_count),
            adjacency: Vec::with_capacity(node_count),
        }
    }

    /// Build a graph from a seed: all nodes in order, then all edges in order.
    pub fn from_seed(seed: &Seed) -> Result<Self, SeedError> {
        seed.validate()?;

        let mut graph = Self::with_capacity(seed.nodes.len());
        for node in &seed.nodes {
            graph.add_node(&node.id, node.x, node.y);
        }
        for edge in &seed.edges {
            graph.add_edge(&edge.source, &edge.target, edge.weight);
        }
        Ok(graph)
    }

    /// Register a node. First insertion wins: a repeated name keeps its
    /// original coordinates and returns the existing id.
    ///
    /// `name` must be non-blank. Untrusted input goes through
    /// [`Seed::validate`] first.
    pub fn add_node(&mut self, name: &str, x: i32, y: i32) -> NodeId {
        debug_assert!(!name.trim().is_empty(), "node name must be non-blank");
        if let Some(&id) = self.index.get(name) {
            return id;
        }
        let id = self.nodes.len();
        self.nodes.push(Node::new(name, x, y));
        self.index.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add an undirected edge, creating missing endpoints at
    /// [`PLACEHOLDER_COORDS`]. Parallel edges are kept. Both endpoint names
    /// must be non-blank, as for [`Graph::add_node`].
    pub fn add_edge(&mut self, a: &str, b: &str, weight: Weight) {
        let (x, y) = PLACEHOLDER_COORDS;
        let from = self.add_node(a, x, y);
        let to = self.add_node(b, x, y);
        self.adjacency[from].push(Edge { target: to, weight });
        self.adjacency[to].push(Edge { target: from, weight });
    }

    /// Look up a node id by name.
    pub fn resolve(&self, name: &str) -> Option<NodeId> {
        self.index.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Get node metadata.
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// All nodes in insertion order.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Adjacency entries for a node id, in insertion order.
    pub fn adjacent(&self, id: NodeId) -> &[Edge] {
        self.adjacency.get(id).map(|v| v.as_slice()).unwrap_or(&[])
    }

    /// `(neighbor, weight)` pairs for a node name. Unknown names yield nothing.
    pub fn neighbors<'a>(&'a self, name: &str) -> impl Iterator<Item = (&'a str, Weight)> + 'a {
        let edges = self.resolve(name).map(|id| self.adjacent(id)).unwrap_or(&[]);
        edges
            .iter()
            .map(move |e| (self.nodes[e.target].id.as_str(), e.weight))
    }

    /// Each undirected pair exactly once.
    ///
    /// Nodes are walked in insertion order and each adjacency list in
    /// insertion order; the first entry seen for a pair is the one reported,
    /// with the walked node as `source`. For the same graph this is always
    /// the same list.
    pub fn edges(&self) -> Vec<EdgeRecord> {
        let mut seen: HashSet<(NodeId, NodeId)> = HashSet::new();
        let mut out = Vec::new();

        for (from, list) in self.adjacency.iter().enumerate() {
            for edge in list {
                let key = (from.min(edge.target), from.max(edge.target));
                if !seen.insert(key) {
                    continue;
                }
                out.push(EdgeRecord::new(
                    self.nodes[from].id.as_str(),
                    self.nodes[edge.target].id.as_str(),
                    edge.weight,
                ));
            }
        }
        out
    }

    pub(crate) fn name_of(&self, id: NodeId) -> &str {
        &self.nodes[id].id
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of `add_edge` calls, parallel declarations included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.iter().map(|v| v.len()).sum::<usize>() / 2
    }

    /// Approximate memory usage in bytes.
    pub fn memory_usage(&self) -> usize {
        use std::mem::size_of;

        let names: usize = self.nodes.iter().map(|n| n.id.capacity()).sum();
        let nodes_mem = self.nodes.len() * size_of::<Node>() + names;
        let index_mem = self.index.len() * (size_of::<String>() + size_of::<NodeId>()) + names;
        let edges_mem: usize = self
            .adjacency
            .iter()
            .map(|v| size_of::<Vec<Edge>>() + v.len() * size_of::<Edge>())
            .sum();

        nodes_mem + index_mem + edges_mem
    }
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}
