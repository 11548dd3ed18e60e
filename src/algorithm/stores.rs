use std::collections::HashMap;
use std::fmt::Debug;

use num_traits::float::FloatCore;
use num_traits::Zero;

use crate::algorithm::traits::PathStore;
use crate::graph::{VertexId, NO_VERTEX};

/// Array-backed path store indexed directly by vertex id.
///
/// Sized to the graph's maximum vertex id on `reset`, so it suits the dense
/// id spaces the vertex allocator produces. This is the store the engine
/// uses unless told otherwise.
#[derive(Debug, Clone, Default)]
pub struct DenseStore<W> {
    weights: Vec<W>,
    preds: Vec<VertexId>,
}

impl<W> DenseStore<W>
where
    W: FloatCore + Zero + Debug + Copy,
{
    /// Creates an empty store; `reset` sizes it
    pub fn new() -> Self {
        DenseStore {
            weights: Vec::new(),
            preds: Vec::new(),
        }
    }
}

impl<W> PathStore<W> for DenseStore<W>
where
    W: FloatCore + Zero + Debug + Copy,
{
    fn reset(&mut self, max_vertex: VertexId) {
        self.weights.clear();
        self.weights.resize(max_vertex + 1, W::infinity());
        self.preds.clear();
        self.preds.resize(max_vertex + 1, NO_VERTEX);
    }

    fn weight(&self, v: VertexId) -> W {
        self.weights.get(v).copied().unwrap_or_else(W::infinity)
    }

    fn set_weight(&mut self, v: VertexId, weight: W) {
        if v >= self.weights.len() {
            self.weights.resize(v + 1, W::infinity());
        }
        self.weights[v] = weight;
    }

    fn predecessor(&self, v: VertexId) -> VertexId {
        self.preds.get(v).copied().unwrap_or(NO_VERTEX)
    }

    fn set_predecessor(&mut self, v: VertexId, u: VertexId) {
        if v >= self.preds.len() {
            self.preds.resize(v + 1, NO_VERTEX);
        }
        self.preds[v] = u;
    }
}

/// Hash-map-backed path store for sparse or very large vertex id spaces
#[derive(Debug, Clone, Default)]
pub struct SparseStore<W> {
    weights: HashMap<VertexId, W>,
    preds: HashMap<VertexId, VertexId>,
}

impl<W> SparseStore<W>
where
    W: FloatCore + Zero + Debug + Copy,
{
    /// Creates an empty store
    pub fn new() -> Self {
        SparseStore {
            weights: HashMap::new(),
            preds: HashMap::new(),
        }
    }
}

impl<W> PathStore<W> for SparseStore<W>
where
    W: FloatCore + Zero + Debug + Copy,
{
    fn reset(&mut self, _max_vertex: VertexId) {
        self.weights.clear();
        self.preds.clear();
    }

    fn weight(&self, v: VertexId) -> W {
        self.weights.get(&v).copied().unwrap_or_else(W::infinity)
    }

    fn set_weight(&mut self, v: VertexId, weight: W) {
        self.weights.insert(v, weight);
    }

    fn predecessor(&self, v: VertexId) -> VertexId {
        self.preds.get(&v).copied().unwrap_or(NO_VERTEX)
    }

    fn set_predecessor(&mut self, v: VertexId, u: VertexId) {
        self.preds.insert(v, u);
    }
}
