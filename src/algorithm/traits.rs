use std::fmt::Debug;

use num_traits::float::FloatCore;
use num_traits::Zero;

use crate::graph::VertexId;

/// Edge weights and the heuristic estimate driving a shortest-path search.
///
/// The default estimate of zero reduces the search to plain Dijkstra; an
/// admissible nonzero estimate turns it into A*. Any closure taking two
/// vertex ids can serve as a cost model with the zero estimate.
pub trait CostModel<W>
where
    W: FloatCore + Zero + Debug + Copy,
{
    /// Returns the weight of the edge (u, v), or positive infinity if the
    /// edge is not in the graph
    fn edge_weight(&self, u: VertexId, v: VertexId) -> W;

    /// Returns an estimated weight of the shortest path from `v` to the
    /// destination, assumed not to exceed the actual weight. Zero by
    /// default.
    fn estimate(&self, _v: VertexId) -> W {
        W::zero()
    }
}

impl<W, F> CostModel<W> for F
where
    W: FloatCore + Zero + Debug + Copy,
    F: Fn(VertexId, VertexId) -> W,
{
    fn edge_weight(&self, u: VertexId, v: VertexId) -> W {
        self(u, v)
    }
}

/// A cost model pairing an edge-weight function with a heuristic estimate,
/// for A* searches toward a known destination
#[derive(Debug, Clone)]
pub struct HeuristicCost<F, H> {
    weights: F,
    heuristic: H,
}

impl<F, H> HeuristicCost<F, H> {
    /// Creates a cost model from an edge-weight function and an estimate
    /// function
    pub fn new(weights: F, heuristic: H) -> Self {
        HeuristicCost { weights, heuristic }
    }
}

impl<W, F, H> CostModel<W> for HeuristicCost<F, H>
where
    W: FloatCore + Zero + Debug + Copy,
    F: Fn(VertexId, VertexId) -> W,
    H: Fn(VertexId) -> W,
{
    fn edge_weight(&self, u: VertexId, v: VertexId) -> W {
        (self.weights)(u, v)
    }

    fn estimate(&self, v: VertexId) -> W {
        (self.heuristic)(v)
    }
}

/// Per-vertex weight and predecessor storage written by the search engine.
///
/// The engine owns no result state of its own; callers may supply any
/// implementation, or rely on the provided [`DenseStore`] and
/// [`SparseStore`] variants.
///
/// [`DenseStore`]: crate::algorithm::stores::DenseStore
/// [`SparseStore`]: crate::algorithm::stores::SparseStore
pub trait PathStore<W>
where
    W: FloatCore + Zero + Debug + Copy,
{
    /// Clears every slot back to positive infinity and no predecessor,
    /// covering vertex ids up to `max_vertex`
    fn reset(&mut self, max_vertex: VertexId);

    /// Returns the stored weight of `v`, or positive infinity if none has
    /// been set
    fn weight(&self, v: VertexId) -> W;

    /// Sets the weight of `v`
    fn set_weight(&mut self, v: VertexId, weight: W);

    /// Returns the stored predecessor of `v`, or `NO_VERTEX` if none has
    /// been set
    fn predecessor(&self, v: VertexId) -> VertexId;

    /// Sets the predecessor of `v`
    fn set_predecessor(&mut self, v: VertexId, u: VertexId);
}
