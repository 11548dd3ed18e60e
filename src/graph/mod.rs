pub mod directed;
pub mod iter;
pub mod store;
pub mod traits;
pub mod undirected;

pub use directed::DirectedGraph;
pub use iter::{Edges, Predecessors, Successors, Vertices};
pub use traits::{EdgeId, Graph, VertexId, NO_VERTEX};
pub use undirected::UndirectedGraph;
