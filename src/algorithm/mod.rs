pub mod shortest_paths;
pub mod stores;
pub mod traits;

pub use shortest_paths::ShortestPaths;
pub use stores::{DenseStore, SparseStore};
pub use traits::{CostModel, HeuristicCost, PathStore};
