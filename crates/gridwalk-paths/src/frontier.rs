//! Priority frontier for Dijkstra and A*.
//!
//! Entries are stored in a min-heap keyed by `(priority, seq)`. Lower
//! priorities are popped first; ties are broken by insertion order (FIFO)
//! using a sequence number owned by the frontier itself.

use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use crate::weight::Weight;

#[derive(Debug)]
struct Entry<N, P> {
    node: N,
    priority: P,
    /// Monotonically increasing per frontier; lower = pushed earlier.
    seq: u64,
}

impl<N, P: Weight> PartialEq for Entry<N, P> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<N, P: Weight> Eq for Entry<N, P> {}

impl<N, P: Weight> PartialOrd for Entry<N, P> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<N, P: Weight> Ord for Entry<N, P> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Wrapped in Reverse for the BinaryHeap, so this is the natural
        // order: smaller priority first, then smaller seq.
        self.priority
            .order(&other.priority)
            .then_with(|| self.seq.cmp(&other.seq))
    }
}

/// A min-priority frontier with deterministic FIFO tie-breaking.
pub(crate) struct Frontier<N, P> {
    heap: BinaryHeap<Reverse<Entry<N, P>>>,
    seq: u64,
}

impl<N, P: Weight> Frontier<N, P> {
    pub(crate) fn new() -> Self {
        Self {
            heap: BinaryHeap::new(),
            seq: 0,
        }
    }

    pub(crate) fn push(&mut self, node: N, priority: P) {
        let seq = self.seq;
        self.seq += 1;
        self.heap.push(Reverse(Entry {
            node,
            priority,
            seq,
        }));
    }

    /// Pop the entry with the lowest priority (ties broken FIFO).
    pub(crate) fn pop(&mut self) -> Option<(N, P)> {
        self.heap
            .pop()
            .map(|Reverse(entry)| (entry.node, entry.priority))
    }

    #[cfg(test)]
    pub(crate) fn len(&self) -> usize {
        self.heap.len()
    }
}
