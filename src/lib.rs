//! Pathgraph - Mutable graphs with generic shortest-path search
//!
//! This library provides a small graph abstraction with directed and
//! undirected variants over a shared vertex/edge store, lazy iteration over
//! vertices, edges, successors and predecessors, and a best-first
//! shortest-path engine (Dijkstra by default, A* when a heuristic estimate
//! is supplied).
//!
//! Vertices are positive integers; zero is reserved to mean "absent" or
//! "no predecessor". Vertex ids are reused: the smallest unused positive id
//! is handed out on insertion, so the id space stays dense under deletions.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    shortest_paths::ShortestPaths, CostModel, DenseStore, HeuristicCost, PathStore, SparseStore,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::undirected::UndirectedGraph;
pub use graph::{EdgeId, Graph, VertexId, NO_VERTEX};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source vertex not found in graph")]
    SourceNotFound,

    #[error("Shortest paths have not been computed yet; call set_paths first")]
    PathsNotComputed,

    #[error("No destination vertex was specified for this search")]
    NoDestination,

    #[error("Vertex {0} is not reachable from the source")]
    Unreachable(VertexId),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
