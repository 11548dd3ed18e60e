use std::collections::BTreeSet;

use crate::graph::traits::{EdgeId, VertexId, NO_VERTEX};

/// Storage shared by both graph variants: the set of live vertex ids and the
/// list of edge entries in insertion order.
///
/// The store is direction-agnostic. An entry is one ordered pair (u, v); the
/// graph variants decide whether an edge contributes one entry (directed) or
/// an adjacent mirror pair (undirected, except self edges which are stored
/// once). All removal paths drop whole mirror pairs, so in an undirected
/// graph the entry list always remains a sequence of adjacent pairs and
/// single self entries.
#[derive(Debug, Clone, Default)]
pub struct EdgeStore {
    /// Live vertex ids. A BTreeSet keeps them in ascending order, which is
    /// the order the vertex iteration promises.
    verts: BTreeSet<VertexId>,

    /// Edge entries as ordered (from, to) pairs, in insertion order
    entries: Vec<(VertexId, VertexId)>,
}

impl EdgeStore {
    /// Creates a new empty store
    pub fn new() -> Self {
        EdgeStore {
            verts: BTreeSet::new(),
            entries: Vec::new(),
        }
    }

    /// Allocates the smallest unused positive vertex id and marks it live
    pub fn add_vertex(&mut self) -> VertexId {
        let mut id = 1;
        while self.verts.contains(&id) {
            id += 1;
        }
        self.verts.insert(id);
        id
    }

    /// Removes `v` and every entry incident to it. Incident entries always
    /// form whole mirror pairs in undirected graphs, so pair adjacency in
    /// the entry list survives this sweep.
    pub fn remove_vertex(&mut self, v: VertexId) {
        if self.verts.remove(&v) {
            self.entries.retain(|&(from, to)| from != v && to != v);
        }
    }

    /// Appends the entry (u, v) to the entry list
    pub fn insert_entry(&mut self, u: VertexId, v: VertexId) {
        self.entries.push((u, v));
    }

    /// Removes the entry (u, v) if present
    pub fn remove_entry(&mut self, u: VertexId, v: VertexId) {
        self.entries.retain(|&entry| entry != (u, v));
    }

    /// Returns true if `v` is a live vertex
    pub fn contains_vertex(&self, v: VertexId) -> bool {
        v != NO_VERTEX && self.verts.contains(&v)
    }

    /// Returns true if both endpoints are live and the entry (u, v) exists
    pub fn contains_entry(&self, u: VertexId, v: VertexId) -> bool {
        self.contains_vertex(u) && self.contains_vertex(v) && self.entries.contains(&(u, v))
    }

    /// Returns the number of live vertices
    pub fn vertex_size(&self) -> usize {
        self.verts.len()
    }

    /// Returns the largest live vertex id, or 0 if the store is empty
    pub fn max_vertex(&self) -> VertexId {
        self.verts.iter().next_back().copied().unwrap_or(NO_VERTEX)
    }

    /// Returns the number of stored entries. Variants turn this into a
    /// logical edge count.
    pub fn entry_count(&self) -> usize {
        self.entries.len()
    }

    /// Returns the number of stored self entries (u == v)
    pub fn self_entry_count(&self) -> usize {
        self.entries.iter().filter(|&&(u, v)| u == v).count()
    }

    /// Returns the number of entries whose first component is `v`
    pub fn count_out(&self, v: VertexId) -> usize {
        self.entries.iter().filter(|&&(from, _)| from == v).count()
    }

    /// Returns the entry list in insertion order
    pub fn entries(&self) -> &[(VertexId, VertexId)] {
        &self.entries
    }

    /// Returns the live vertex set
    pub fn verts(&self) -> &BTreeSet<VertexId> {
        &self.verts
    }

    /// Returns the id of the edge (u, v), the Cantor pairing of its
    /// endpoints. Deterministic and orientation-sensitive, but carries no
    /// uniqueness contract across graphs.
    pub fn edge_id(u: VertexId, v: VertexId) -> EdgeId {
        (u + v) * (u + v + 1) / 2 + v
    }
}
