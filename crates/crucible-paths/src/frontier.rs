use std::cmp::Ordering;
use std::collections::BinaryHeap;

use crate::State;

/// A queued `(priority, cost, state)` triple.
///
/// `priority` is `cost` plus the heuristic estimate; with the zero heuristic
/// the two are equal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrontierEntry {
    pub priority: u32,
    pub cost: u32,
    pub state: State,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse so BinaryHeap (max-heap) pops smallest priority first.
        // Ties go to the deeper entry, then to the smaller state.
        other
            .priority
            .cmp(&self.priority)
            .then_with(|| self.cost.cmp(&other.cost))
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Min-ordered working set of the search.
///
/// There is no decrease-key: a better cost for a queued state is pushed as a
/// new entry and the superseded one stays behind. The solver discards such
/// stale entries when they are popped.
#[derive(Debug, Clone, Default)]
pub struct Frontier {
    heap: BinaryHeap<FrontierEntry>,
    peak: usize,
}

impl Frontier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, entry: FrontierEntry) {
        self.heap.push(entry);
        self.peak = self.peak.max(self.heap.len());
    }

    /// Remove and return the entry with the lowest priority.
    pub fn pop_min(&mut self) -> Option<FrontierEntry> {
        self.heap.pop()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Largest size the frontier has reached.
    #[inline]
    pub fn peak(&self) -> usize {
        self.peak
    }
}
