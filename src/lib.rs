//! Edge-list SSSP - single-source shortest paths over undirected edge lists
//!
//! This library loads a weighted undirected graph from a whitespace separated
//! edge list (`<vertex> <vertex> <weight>` per line) and computes the shortest
//! distance from a start vertex to every other vertex with Dijkstra's
//! algorithm over a lazily pruned binary heap.
//!
//! Weights are non-negative integers. Vertices that cannot be reached from the
//! start vertex are reported as [`Distance::Unreachable`] rather than with a
//! numeric sentinel.

pub mod algorithm;
pub mod config;
pub mod data_structures;
pub mod distance;
pub mod graph;
pub mod report;

use std::path::PathBuf;

pub use algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm, ShortestPathResult};
pub use config::{Config, OutputFormat, DEFAULT_START_VERTEX};
pub use distance::Distance;
/// Re-export main types for convenient use
pub use graph::loader::{load_graph, load_graph_from_path};
pub use graph::undirected::UndirectedGraph;
pub use report::DistanceMap;

/// Weight type used by the command line tools
pub type EdgeWeight = u64;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("read error: {0}")]
    Read(#[from] std::io::Error),

    #[error("invalid weight {token:?} on line {line}")]
    MalformedWeight { line: usize, token: String },

    #[error("negative weight {token:?} on line {line}")]
    NegativeWeight { line: usize, token: String },

    #[error("start vertex {0:?} not found in graph")]
    UnknownStartVertex(String),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),

    #[error("cannot render output: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Loads the graph at `config.input` and computes distances from `config.start`
pub fn shortest_distances(config: &Config) -> Result<DistanceMap<EdgeWeight>> {
    let graph: UndirectedGraph<EdgeWeight> = load_graph_from_path(&config.input)?;
    let result = Dijkstra::new().compute_shortest_paths(&graph, &config.start)?;
    Ok(DistanceMap::from_result(&graph, &result))
}
