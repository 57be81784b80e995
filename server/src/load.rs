use std::path::Path;
use std::time::Instant;

use anyhow::{bail, Context, Result};
use citynav_core::{Graph, Seed};
use tracing::{info, warn};

use crate::config::Config;
use crate::state::GraphState;

/// Source name reported when no seed file is configured.
pub const BUNDLED_SOURCE: &str = "bundled:delhi";

/// Build the graph once, from the configured seed file or the bundled data.
pub fn load_graph(config: &Config) -> Result<GraphState> {
    let start = Instant::now();

    let (source, seed) = match &config.seed {
        Some(path) => (path.display().to_string(), read_seed(path)?),
        None => (BUNDLED_SOURCE.to_string(), Seed::delhi()),
    };

    let graph = Graph::from_seed(&seed)
        .inspect_err(|e| warn!(source = %source, error = %e, "seed rejected"))
        .with_context(|| format!("invalid seed '{}'", source))?;

    let memory_bytes = graph.memory_usage() as u64;
    if memory_bytes > config.max_memory_bytes() {
        bail!(
            "loaded graph uses {:.2}MB ({} bytes), exceeds max_memory_mb={}MB",
            memory_bytes as f64 / 1_048_576.0,
            memory_bytes,
            config.max_memory_mb
        );
    }

    let load_time_ms = start.elapsed().as_secs_f64() * 1000.0;
    info!(
        source = %source,
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        load_time_ms,
        "graph loaded"
    );

    Ok(GraphState::new(graph, source, load_time_ms))
}

/// Read and validate a JSON seed file.
pub fn read_seed(path: &Path) -> Result<Seed> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read seed file {}", path.display()))?;

    Seed::from_json(&json)
        .inspect_err(|e| warn!(path = %path.display(), error = %e, "seed rejected"))
        .with_context(|| format!("failed to parse seed file {}", path.display()))
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use citynav_core::Node;
    use clap::Parser;

    use super::*;

    fn config_with_seed(path: &Path) -> Config {
        Config::try_parse_from(["citynav-server", "--seed", path.to_str().unwrap()]).unwrap()
    }

    #[test]
    fn test_load_bundled() {
        let config = Config::try_parse_from(["citynav-server"]).unwrap();
        let state = load_graph(&config).unwrap();
        assert_eq!(state.source, BUNDLED_SOURCE);
        assert_eq!(state.graph.node_count(), 32);
        assert_eq!(state.edges.len(), 50);
    }

    #[test]
    fn test_load_seed_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"nodes": [{{"id": "A", "x": 1, "y": 1}}],
                "edges": [{{"source": "A", "target": "B", "weight": 2}}]}}"#
        )
        .unwrap();

        let state = load_graph(&config_with_seed(file.path())).unwrap();
        assert_eq!(state.graph.node_count(), 2);
        assert_eq!(state.edges.len(), 1);
        assert_eq!(state.source, file.path().display().to_string());
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_graph(&config_with_seed(&dir.path().join("missing.json"))).unwrap_err();
        assert!(err.to_string().contains("failed to read seed file"));
    }

    #[test]
    fn test_load_rejects_graph_just_over_memory_cap() {
        // ~1.3MB of nodes: above a 1MB cap, well under 2MB.
        let nodes: Vec<Node> = (0..12_000)
            .map(|i| Node::new(format!("junction-{i:05}"), 0, 0))
            .collect();
        let seed = Seed {
            nodes,
            edges: vec![],
        };
        let memory = Graph::from_seed(&seed).unwrap().memory_usage();
        assert!(memory > 1024 * 1024 && memory < 2 * 1024 * 1024, "{memory} bytes");

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(serde_json::to_string(&seed).unwrap().as_bytes())
            .unwrap();
        let path = file.path().to_str().unwrap();

        let capped =
            Config::try_parse_from(["citynav-server", "--seed", path, "--max-memory-mb", "1"])
                .unwrap();
        let Err(err) = load_graph(&capped) else {
            panic!("graph over the memory cap was accepted");
        };
        assert!(err.to_string().contains("exceeds max_memory_mb=1MB"));

        let roomy =
            Config::try_parse_from(["citynav-server", "--seed", path, "--max-memory-mb", "2"])
                .unwrap();
        assert_eq!(load_graph(&roomy).unwrap().graph.node_count(), 12_000);
    }

    #[test]
    fn test_load_invalid_seed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"nodes": [{{"id": ""}}]}}"#).unwrap();

        let err = load_graph(&config_with_seed(file.path())).unwrap_err();
        assert!(err.to_string().contains("failed to parse seed file"));
        assert!(format!("{:#}", err).contains("node #0 has an empty name"));
    }
}
