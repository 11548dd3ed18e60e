use std::collections::HashSet;
use std::fmt::Debug;

use log::{debug, trace};
use num_traits::float::FloatCore;
use num_traits::Zero;
use ordered_float::OrderedFloat;

use crate::algorithm::stores::DenseStore;
use crate::algorithm::traits::{CostModel, PathStore};
use crate::data_structures::KeyedHeap;
use crate::graph::{Graph, VertexId, NO_VERTEX};
use crate::{Error, Result};

/// Best-first shortest-path search over a graph.
///
/// Runs Dijkstra's algorithm by default; a cost model with a nonzero
/// admissible estimate turns the same loop into A*. Edge weights come from
/// the cost model and results are written into a pluggable [`PathStore`],
/// so the engine itself holds no opinion about how either is represented.
///
/// `set_paths` must be called before querying weights, predecessors or
/// paths. Valid only for non-negative edge weights.
#[derive(Debug)]
pub struct ShortestPaths<'g, G, W, C, S = DenseStore<W>>
where
    W: FloatCore + Zero + Debug + Copy + num_traits::Float,
{
    graph: &'g G,
    source: VertexId,
    dest: Option<VertexId>,
    costs: C,
    store: S,
    fringe: KeyedHeap<VertexId, OrderedFloat<W>>,
    visited: HashSet<VertexId>,
    computed: bool,
}

impl<'g, G, W, C> ShortestPaths<'g, G, W, C, DenseStore<W>>
where
    G: Graph,
    W: FloatCore + Zero + Debug + Copy + num_traits::Float,
    C: CostModel<W>,
{
    /// Creates a single-source search over all of `graph` from `source`
    pub fn new(graph: &'g G, source: VertexId, costs: C) -> Self {
        ShortestPaths {
            graph,
            source,
            dest: None,
            costs,
            store: DenseStore::new(),
            fringe: KeyedHeap::new(),
            visited: HashSet::new(),
            computed: false,
        }
    }

    /// Creates a search from `source` that stops once `dest` is settled
    pub fn with_dest(graph: &'g G, source: VertexId, dest: VertexId, costs: C) -> Self {
        let mut paths = ShortestPaths::new(graph, source, costs);
        paths.dest = Some(dest);
        paths
    }
}

impl<'g, G, W, C, S> ShortestPaths<'g, G, W, C, S>
where
    G: Graph,
    W: FloatCore + Zero + Debug + Copy + num_traits::Float,
    C: CostModel<W>,
    S: PathStore<W>,
{
    /// Replaces the result storage, discarding any computed results
    pub fn with_store<T: PathStore<W>>(self, store: T) -> ShortestPaths<'g, G, W, C, T> {
        ShortestPaths {
            graph: self.graph,
            source: self.source,
            dest: self.dest,
            costs: self.costs,
            store,
            fringe: KeyedHeap::new(),
            visited: HashSet::new(),
            computed: false,
        }
    }

    /// Returns the starting vertex
    pub fn source(&self) -> VertexId {
        self.source
    }

    /// Returns the target vertex, if one was specified
    pub fn dest(&self) -> Option<VertexId> {
        self.dest
    }

    /// Computes shortest paths from the source, writing weights and
    /// predecessors into the store. Must be called before `get_weight`,
    /// `get_predecessor` or `path_to`. Re-running after the graph changed
    /// recomputes from scratch.
    pub fn set_paths(&mut self) -> Result<()> {
        if !self.graph.contains(self.source) {
            return Err(Error::SourceNotFound);
        }
        let graph = self.graph;
        debug!(
            "shortest-path search from {} over {} vertices",
            self.source,
            graph.vertex_size()
        );

        self.store.reset(graph.max_vertex());
        self.fringe.clear();
        self.visited.clear();
        for v in graph.vertices() {
            self.store.set_weight(v, <W as FloatCore>::infinity());
            self.store.set_predecessor(v, NO_VERTEX);
            self.fringe
                .push(v, OrderedFloat(<W as FloatCore>::infinity()));
        }
        self.store.set_weight(self.source, W::zero());
        // The fringe has no decrease-key; re-keying is remove + reinsert.
        self.fringe.remove(self.source);
        self.fringe
            .push(self.source, OrderedFloat(self.costs.estimate(self.source)));

        while let Some((v, _)) = self.fringe.pop() {
            self.visited.insert(v);
            if Some(v) == self.dest {
                trace!("destination {} settled", v);
                break;
            }
            for w in graph.successors(v) {
                let candidate = self.store.weight(v) + self.costs.edge_weight(v, w);
                let current = self.store.weight(w);
                // A settled vertex already carries its final weight.
                if self.visited.contains(&w) && candidate >= current {
                    continue;
                }
                if candidate < current || !self.fringe.contains(w) {
                    self.store.set_weight(w, candidate);
                    self.store.set_predecessor(w, v);
                    if self.fringe.contains(w) {
                        self.fringe.remove(w);
                        self.fringe
                            .push(w, OrderedFloat(candidate + self.costs.estimate(w)));
                    }
                }
            }
        }

        debug!("search settled {} vertices", self.visited.len());
        self.computed = true;
        Ok(())
    }

    /// Returns the computed weight of `v`, or positive infinity if `v` is
    /// not in the graph or was not reached
    pub fn get_weight(&self, v: VertexId) -> W {
        if !self.graph.contains(v) {
            return <W as FloatCore>::infinity();
        }
        self.store.weight(v)
    }

    /// Returns the predecessor of `v` on its shortest path from the source,
    /// or `NO_VERTEX` if `v` is not in the graph or has none
    pub fn get_predecessor(&self, v: VertexId) -> VertexId {
        if !self.graph.contains(v) {
            return NO_VERTEX;
        }
        self.store.predecessor(v)
    }

    /// Returns the vertices of a shortest path from the source to `v`,
    /// starting at the source and ending at `v`.
    ///
    /// Fails with [`Error::PathsNotComputed`] before `set_paths` has run and
    /// with [`Error::Unreachable`] when no path to `v` exists.
    pub fn path_to(&self, v: VertexId) -> Result<Vec<VertexId>> {
        if !self.computed {
            return Err(Error::PathsNotComputed);
        }
        if FloatCore::is_infinite(self.get_weight(v)) {
            return Err(Error::Unreachable(v));
        }
        let mut path = vec![v];
        let mut current = v;
        while current != self.source {
            current = self.store.predecessor(current);
            if current == NO_VERTEX || path.len() > self.graph.vertex_size() {
                return Err(Error::Unreachable(v));
            }
            path.push(current);
        }
        path.reverse();
        Ok(path)
    }

    /// Returns the vertices of a shortest path from the source to the
    /// destination this search was created with
    pub fn path_to_dest(&self) -> Result<Vec<VertexId>> {
        let dest = self.dest.ok_or(Error::NoDestination)?;
        self.path_to(dest)
    }
}
