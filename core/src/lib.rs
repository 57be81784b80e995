//! citynav-core: In-memory city route graph.
//!
//! A pure Rust library that stores named points of interest and weighted,
//! undirected routes between them, and answers shortest-path queries with
//! Dijkstra's algorithm. No I/O and no async: the graph is built once from a
//! [`Seed`] and is read-only afterwards, so any number of queries can run
//! against a shared reference concurrently.
//!
//! The HTTP query layer lives in `citynav-server`; this crate is usable on its
//! own for benchmarking and testing.

mod graph;
mod seed;
mod traversal;

pub use graph::{Edge, EdgeRecord, Graph, Node, NodeId, Weight, PLACEHOLDER_COORDS};
pub use seed::{Seed, SeedError};
pub use traversal::{find_route, path_cost, shortest_path, Route, RouteError, UNLIMITED};
