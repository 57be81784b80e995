//! Seed data: the node and edge declarations a [`Graph`](crate::Graph) is
//! built from, in declaration order.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::graph::{EdgeRecord, Node, Weight};

/// Errors raised while reading or validating a seed.
#[derive(Debug, Error)]
pub enum SeedError {
    #[error("node #{index} has an empty name")]
    EmptyNodeName { index: usize },

    #[error("edge #{index} has an empty endpoint")]
    EmptyEndpoint { index: usize },

    #[error("invalid seed JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Ordered node and edge declarations.
///
/// Order matters: it fixes node listing order, and for duplicated pairs it
/// decides which weight the edge listing reports.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub nodes: Vec<Node>,
    #[serde(default)]
    pub edges: Vec<EdgeRecord>,
}

impl Seed {
    /// Parse and validate a seed from JSON of the form
    /// `{"nodes": [{"id", "x", "y"}], "edges": [{"source", "target", "weight"}]}`.
    pub fn from_json(json: &str) -> Result<Self, SeedError> {
        let seed: Seed = serde_json::from_str(json)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Check that every node name and edge endpoint is non-blank.
    pub fn validate(&self) -> Result<(), SeedError> {
        if let Some(index) = self.nodes.iter().position(|n| n.id.trim().is_empty()) {
            return Err(SeedError::EmptyNodeName { index });
        }
        if let Some(index) = self
            .edges
            .iter()
            .position(|e| e.source.trim().is_empty() || e.target.trim().is_empty())
        {
            return Err(SeedError::EmptyEndpoint { index });
        }
        Ok(())
    }

    /// The bundled New Delhi points of interest and routes.
    ///
    /// Reproduced declaration for declaration, including the repeated
    /// Delhi Cantt–Vasant Vihar, Rajouri Garden–Janakpuri and
    /// Akshardham–Noida entries.
    pub fn delhi() -> Self {
        Self {
            nodes: DELHI_NODES
                .iter()
                .map(|&(id, x, y)| Node::new(id, x, y))
                .collect(),
            edges: DELHI_EDGES
                .iter()
                .map(|&(a, b, w)| EdgeRecord::new(a, b, w))
                .collect(),
        }
    }
}

const DELHI_NODES: &[(&str, i32, i32)] = &[
    ("Connaught Place", 400, 120),
    ("Delhi Cantt", 180, 300),
    ("Vasant Vihar", 240, 350),
    ("India Gate", 460, 200),
    ("Rajiv Chowk", 390, 150),
    ("New Delhi Railway Station", 420, 90),
    ("Chandni Chowk", 520, 90),
    ("Red Fort", 560, 130),
    ("Kashmere Gate", 520, 40),
    ("Delhi University", 480, 20),
    ("Karol Bagh", 320, 80),
    ("Pitampura", 230, 30),
    ("Rohini", 190, 10),
    ("Punjabi Bagh", 220, 110),
    ("Paschim Vihar", 150, 180),
    ("Rajouri Garden", 170, 200),
    ("Patel Nagar", 250, 130),
    ("Janakpuri", 120, 250),
    ("Dwarka", 80, 350),
    ("NSUT", 100, 420),
    ("DTU", 220, 20),
    ("IIT Delhi", 300, 350),
    ("AIIMS", 450, 320),
    ("Hauz Khas", 360, 360),
    ("Saket", 360, 460),
    ("Qutub Minar", 330, 520),
    ("Lotus Temple", 540, 340),
    ("Akshardham", 600, 260),
    ("Vasant Kunj", 280, 490),
    ("IGI Airport", 120, 480),
    ("Gurgaon", 220, 620),
    ("Noida", 680, 420),
];

const DELHI_EDGES: &[(&str, &str, Weight)] = &[
    ("Delhi Cantt", "Vasant Vihar", 7),
    ("Delhi Cantt", "IGI Airport", 9),
    ("Delhi Cantt", "Janakpuri", 6),
    ("Delhi Cantt", "Rajouri Garden", 7),
    ("Delhi Cantt", "NSUT", 10),
    ("Delhi Cantt", "Vasant Vihar", 7),
    ("Delhi Cantt", "Rajiv Chowk", 12),
    ("Delhi Cantt", "Gurgaon", 20),
    ("Vasant Vihar", "Vasant Kunj", 4),
    ("Vasant Vihar", "IIT Delhi", 4),
    ("Connaught Place", "Rajiv Chowk", 1),
    ("Janakpuri", "Paschim Vihar", 4),
    ("Paschim Vihar", "Pitampura", 8),
    ("Rajouri Garden", "Punjabi Bagh", 4),
    ("Punjabi Bagh", "Pitampura", 6),
    ("Rajouri Garden", "Patel Nagar", 6),
    ("Patel Nagar", "Karol Bagh", 3),
    ("Connaught Place", "India Gate", 3),
    ("Connaught Place", "Karol Bagh", 4),
    ("Rajiv Chowk", "New Delhi Railway Station", 2),
    ("New Delhi Railway Station", "Chandni Chowk", 4),
    ("Chandni Chowk", "Red Fort", 2),
    ("Chandni Chowk", "Kashmere Gate", 3),
    ("Kashmere Gate", "Delhi University", 4),
    ("Karol Bagh", "Pitampura", 7),
    ("Pitampura", "Rohini", 6),
    ("Rajouri Garden", "Janakpuri", 5),
    ("Janakpuri", "Dwarka", 8),
    ("Dwarka", "NSUT", 3),
    ("DTU", "Karol Bagh", 10),
    ("IIT Delhi", "AIIMS", 3),
    ("AIIMS", "Hauz Khas", 3),
    ("Hauz Khas", "Saket", 5),
    ("Saket", "Qutub Minar", 6),
    ("Qutub Minar", "Vasant Kunj", 6),
    ("Vasant Kunj", "IGI Airport", 5),
    ("India Gate", "Lotus Temple", 5),
    ("Lotus Temple", "Akshardham", 10),
    ("Akshardham", "Noida", 12),
    ("Connaught Place", "AIIMS", 6),
    ("Connaught Place", "New Delhi Railway Station", 3),
    ("Rajiv Chowk", "Karol Bagh", 3),
    ("Karol Bagh", "Delhi University", 6),
    ("Gurgaon", "IGI Airport", 9),
    ("Gurgaon", "Saket", 20),
    ("Noida", "Akshardham", 12),
    ("Janakpuri", "Rajouri Garden", 6),
    ("Pitampura", "DTU", 9),
    ("IIT Delhi", "Hauz Khas", 6),
    ("New Delhi Railway Station", "Red Fort", 4),
    ("Delhi University", "Connaught Place", 7),
    ("Saket", "AIIMS", 7),
    ("Lotus Temple", "Qutub Minar", 8),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Graph;

    #[test]
    fn test_delhi_counts() {
        let seed = Seed::delhi();
        assert_eq!(seed.nodes.len(), 32);
        assert_eq!(seed.edges.len(), 53);
        seed.validate().unwrap();
    }

    #[test]
    fn test_delhi_graph_keeps_duplicates() {
        let g = Graph::from_seed(&Seed::delhi()).unwrap();
        assert_eq!(g.node_count(), 32);
        assert_eq!(g.edge_count(), 53);
        assert_eq!(g.edges().len(), 50);

        let cantt_to_vv: Vec<_> = g
            .neighbors("Delhi Cantt")
            .filter(|(n, _)| *n == "Vasant Vihar")
            .collect();
        assert_eq!(cantt_to_vv, vec![("Vasant Vihar", 7), ("Vasant Vihar", 7)]);
    }

    #[test]
    fn test_delhi_listing_reports_first_declared_weight() {
        let g = Graph::from_seed(&Seed::delhi()).unwrap();
        let edge = g
            .edges()
            .into_iter()
            .find(|e| {
                (e.source == "Rajouri Garden" && e.target == "Janakpuri")
                    || (e.source == "Janakpuri" && e.target == "Rajouri Garden")
            })
            .unwrap();
        assert_eq!(edge, EdgeRecord::new("Rajouri Garden", "Janakpuri", 5));
    }

    #[test]
    fn test_delhi_first_node_is_connaught_place() {
        let g = Graph::from_seed(&Seed::delhi()).unwrap();
        assert_eq!(g.nodes()[0], Node::new("Connaught Place", 400, 120));
        assert_eq!(g.nodes()[31].id, "Noida");
    }

    #[test]
    fn test_from_json() {
        let seed = Seed::from_json(
            r#"{
                "nodes": [{"id": "A", "x": 1, "y": 2}, {"id": "B"}],
                "edges": [{"source": "A", "target": "B", "weight": 4},
                          {"source": "B", "target": "C"}]
            }"#,
        )
        .unwrap();
        assert_eq!(seed.nodes[1], Node::new("B", 0, 0));
        assert_eq!(seed.edges[1], EdgeRecord::new("B", "C", 0));
    }

    #[test]
    fn test_from_json_rejects_negative_weight() {
        let err = Seed::from_json(
            r#"{"edges": [{"source": "A", "target": "B", "weight": -1}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::Json(_)));
    }

    #[test]
    fn test_from_json_rejects_blank_endpoint() {
        let err = Seed::from_json(
            r#"{"edges": [{"source": "A", "target": "B"}, {"source": " ", "target": "B"}]}"#,
        )
        .unwrap_err();
        assert!(matches!(err, SeedError::EmptyEndpoint { index: 1 }));
        assert_eq!(err.to_string(), "edge #1 has an empty endpoint");
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        assert!(matches!(Seed::from_json("{nodes"), Err(SeedError::Json(_))));
    }
}
