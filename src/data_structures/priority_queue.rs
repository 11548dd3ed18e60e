use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap};
use std::fmt::Debug;
use std::hash::Hash;

/// A min-priority queue over unique values with membership queries and
/// removal, for search fringes that re-key entries.
///
/// The standard binary heap has no decrease-key, so re-keying is modeled as
/// `remove` followed by `push`. Removal is lazy: the key map is the source
/// of truth for membership and current priority, and heap entries that no
/// longer match it are skipped on `pop`. Ties between equal priorities pop
/// in an unspecified but deterministic order.
#[derive(Debug)]
pub struct KeyedHeap<V, P> {
    /// The underlying binary heap, possibly holding stale entries
    heap: BinaryHeap<Reverse<(P, V)>>,

    /// Current priority of each live member
    keys: HashMap<V, P>,
}

impl<V, P> KeyedHeap<V, P>
where
    V: Copy + Eq + Hash + Ord + Debug,
    P: Copy + Ord + Debug,
{
    /// Creates a new empty priority queue
    pub fn new() -> Self {
        KeyedHeap {
            heap: BinaryHeap::new(),
            keys: HashMap::new(),
        }
    }

    /// Returns true if the priority queue has no live members
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    /// Returns the number of live members
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns true if `value` is currently a member
    pub fn contains(&self, value: V) -> bool {
        self.keys.contains_key(&value)
    }

    /// Inserts `value` with the given priority, replacing its previous
    /// priority if it was already a member
    pub fn push(&mut self, value: V, priority: P) {
        self.keys.insert(value, priority);
        self.heap.push(Reverse((priority, value)));
    }

    /// Removes `value` from the queue. The matching heap entry is discarded
    /// lazily on a later `pop`.
    pub fn remove(&mut self, value: V) {
        self.keys.remove(&value);
    }

    /// Removes and returns the member with the minimum priority
    pub fn pop(&mut self) -> Option<(V, P)> {
        while let Some(Reverse((priority, value))) = self.heap.pop() {
            if self.keys.get(&value) == Some(&priority) {
                self.keys.remove(&value);
                return Some((value, priority));
            }
        }
        None
    }

    /// Clears the priority queue
    pub fn clear(&mut self) {
        self.heap.clear();
        self.keys.clear();
    }
}

impl<V, P> Default for KeyedHeap<V, P>
where
    V: Copy + Eq + Hash + Ord + Debug,
    P: Copy + Ord + Debug,
{
    fn default() -> Self {
        KeyedHeap::new()
    }
}
