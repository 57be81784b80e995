//! citynav-server: HTTP query layer over the citynav route graph.
//!
//! Loads a seed once at startup, then serves node listings, edge listings
//! and shortest-path queries from the immutable in-memory graph.

pub mod config;
pub mod error;
pub mod load;
pub mod routes;
pub mod state;

pub use config::Config;
pub use routes::create_router;
pub use state::{AppState, GraphState};
