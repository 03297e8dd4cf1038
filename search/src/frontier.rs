//! Frontiers: the collections of generated-but-unexpanded nodes.
//!
//! [`FifoFrontier`] serves breadth-first tree search. [`PriorityFrontier`]
//! serves the best-first graph searches: it pops the lowest priority first,
//! breaks ties by insertion order, and supports lookup, replacement, and
//! removal of the entry for a given state.
//!
//! Removal is lazy. A removed or replaced entry stays in the heap with its
//! sequence number tombstoned, and `pop` discards tombstoned entries as it
//! meets them. The `entries` map is the authority on which entry is live for
//! each state; at most one live entry exists per state at any time.

use std::cmp::Reverse;
use std::collections::{BinaryHeap, HashMap, HashSet, VecDeque};
use std::hash::Hash;
use std::rc::Rc;

use crate::node::SearchNode;

/// First-in, first-out frontier.
#[derive(Debug)]
pub struct FifoFrontier<S, A> {
    queue: VecDeque<Rc<SearchNode<S, A>>>,
    high_water: usize,
}

impl<S, A> FifoFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            queue: VecDeque::new(),
            high_water: 0,
        }
    }

    pub fn push(&mut self, node: Rc<SearchNode<S, A>>) {
        self.queue.push_back(node);
        self.high_water = self.high_water.max(self.queue.len());
    }

    /// Remove and return the oldest node, or `None` when empty.
    #[must_use]
    pub fn pop(&mut self) -> Option<Rc<SearchNode<S, A>>> {
        self.queue.pop_front()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.queue.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    /// Largest size the frontier has reached.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S, A> Default for FifoFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}

/// Heap ordering key: priority first, then insertion sequence.
///
/// `BinaryHeap` is a max-heap, so entries wrap the key in `Reverse` to pop
/// the lowest priority (and, among equals, the earliest insertion) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
struct FrontierKey {
    priority: u64,
    sequence: u64,
}

#[derive(Debug)]
struct FrontierEntry<S, A> {
    key: Reverse<FrontierKey>,
    node: Rc<SearchNode<S, A>>,
}

impl<S, A> PartialEq for FrontierEntry<S, A> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<S, A> Eq for FrontierEntry<S, A> {}

impl<S, A> PartialOrd for FrontierEntry<S, A> {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl<S, A> Ord for FrontierEntry<S, A> {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.key.cmp(&other.key)
    }
}

/// The authoritative record for a state's live entry.
#[derive(Debug)]
struct LiveEntry<S, A> {
    key: FrontierKey,
    node: Rc<SearchNode<S, A>>,
}

/// Min-priority frontier keyed by state, with lazy deletion.
///
/// Sequence numbers increase monotonically and are never reused, so a
/// tombstoned sequence can never be confused with a later live entry.
#[derive(Debug)]
pub struct PriorityFrontier<S, A> {
    heap: BinaryHeap<FrontierEntry<S, A>>,
    entries: HashMap<S, LiveEntry<S, A>>,
    tombstones: HashSet<u64>,
    next_sequence: u64,
    high_water: usize,
}

impl<S: Clone + Eq + Hash, A> PriorityFrontier<S, A> {
    #[must_use]
    pub fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            entries: HashMap::new(),
            tombstones: HashSet::new(),
            next_sequence: 0,
            high_water: 0,
        }
    }

    /// Add `node` with `priority` as the live entry for its state.
    ///
    /// If the state already has a live entry, that entry is tombstoned first,
    /// so the frontier never holds two live entries for one state.
    pub fn insert(&mut self, node: Rc<SearchNode<S, A>>, priority: u64) {
        if let Some(previous) = self.entries.remove(node.state()) {
            self.tombstones.insert(previous.key.sequence);
        }
        let key = FrontierKey {
            priority,
            sequence: self.next_sequence,
        };
        self.next_sequence += 1;
        self.entries.insert(
            node.state().clone(),
            LiveEntry {
                key,
                node: Rc::clone(&node),
            },
        );
        self.heap.push(FrontierEntry {
            key: Reverse(key),
            node,
        });
        self.high_water = self.high_water.max(self.entries.len());
    }

    /// Tombstone the live entry for `state`. Returns the node it held.
    pub fn remove(&mut self, state: &S) -> Option<Rc<SearchNode<S, A>>> {
        let previous = self.entries.remove(state)?;
        self.tombstones.insert(previous.key.sequence);
        Some(previous.node)
    }

    /// Remove and return the live node with the lowest priority, ties going
    /// to the earliest insertion. `None` once no live entries remain.
    #[must_use]
    pub fn pop(&mut self) -> Option<Rc<SearchNode<S, A>>> {
        while let Some(entry) = self.heap.pop() {
            let Reverse(key) = entry.key;
            if self.tombstones.remove(&key.sequence) {
                continue;
            }
            self.entries.remove(entry.node.state());
            return Some(entry.node);
        }
        None
    }

    #[must_use]
    pub fn contains(&self, state: &S) -> bool {
        self.entries.contains_key(state)
    }

    /// The live node recorded for `state`.
    #[must_use]
    pub fn peek_node(&self, state: &S) -> Option<&Rc<SearchNode<S, A>>> {
        self.entries.get(state).map(|live| &live.node)
    }

    /// The priority of the live entry for `state`.
    #[must_use]
    pub fn peek_priority(&self, state: &S) -> Option<u64> {
        self.entries.get(state).map(|live| live.key.priority)
    }

    /// Number of live entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when no live entries remain, even if tombstones are still queued.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Tombstoned entries not yet discarded by `pop`.
    #[must_use]
    pub fn tombstone_count(&self) -> usize {
        self.tombstones.len()
    }

    /// Largest number of simultaneously live entries.
    #[must_use]
    pub fn high_water(&self) -> usize {
        self.high_water
    }
}

impl<S: Clone + Eq + Hash, A> Default for PriorityFrontier<S, A> {
    fn default() -> Self {
        Self::new()
    }
}
