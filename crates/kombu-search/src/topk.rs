//! Bounded top-k selection.
//!
//! Retains the K highest-scoring candidates from a stream using a min-heap of
//! capacity K: O(n log k) time, O(k) auxiliary space, independent of stream
//! length.

use crate::{Result, SearchError};
use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

/// A candidate paired with its similarity score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScoredCandidate<I> {
    /// Caller-supplied identifier.
    pub id: I,
    /// Similarity score (higher = more similar).
    pub score: i64,
}

/// Heap entry. The total order is score first, then earlier arrival ranks
/// higher, so the root of the min-heap is always the weakest retained
/// candidate and equal scores evict in reverse arrival order.
#[derive(Debug)]
struct Entry<I> {
    score: i64,
    seq: u64,
    id: I,
}

impl<I> PartialEq for Entry<I> {
    fn eq(&self, other: &Self) -> bool {
        self.score == other.score && self.seq == other.seq
    }
}

impl<I> Eq for Entry<I> {}

impl<I> PartialOrd for Entry<I> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<I> Ord for Entry<I> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.score
            .cmp(&other.score)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Streaming top-k selector.
///
/// Feed `(id, score)` pairs with [`offer`](Self::offer), drain with
/// [`into_ranked`](Self::into_ranked). Once the selector is full, an incoming
/// candidate replaces the weakest retained one only when it scores strictly
/// higher; ties keep the earlier-seen candidate. Output order is therefore
/// deterministic for a given input order.
#[derive(Debug)]
pub struct TopKSelector<I> {
    capacity: usize,
    next_seq: u64,
    heap: BinaryHeap<Reverse<Entry<I>>>,
}

impl<I> TopKSelector<I> {
    /// Create a selector retaining the `capacity` best candidates.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] when `capacity` is zero.
    pub fn new(capacity: usize) -> Result<Self> {
        if capacity == 0 {
            return Err(SearchError::InvalidArgument(
                "result count must be positive".to_string(),
            ));
        }
        Ok(Self {
            capacity,
            next_seq: 0,
            heap: BinaryHeap::with_capacity(capacity + 1),
        })
    }

    /// Select the top `k` of a whole stream in one call.
    ///
    /// An empty stream yields an empty result; fewer than `k` items yield all
    /// of them, fully sorted.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::InvalidArgument`] when `k` is zero.
    pub fn select(
        stream: impl IntoIterator<Item = (I, i64)>,
        k: usize,
    ) -> Result<Vec<ScoredCandidate<I>>> {
        let mut selector = Self::new(k)?;
        for (id, score) in stream {
            selector.offer(id, score);
        }
        Ok(selector.into_ranked())
    }

    /// Offer one candidate.
    pub fn offer(&mut self, id: I, score: i64) {
        let seq = self.next_seq;
        self.next_seq += 1;
        self.offer_at(seq, id, score);
    }

    /// Offer one candidate under an explicit sequence number.
    ///
    /// Shard workers pass the original candidate index here, so a sharded
    /// scan breaks ties exactly like the sequential one regardless of which
    /// worker saw which candidate. The eviction test uses the full
    /// (score, seq) order, which makes the retained set independent of
    /// arrival order.
    pub(crate) fn offer_at(&mut self, seq: u64, id: I, score: i64) {
        let entry = Entry { score, seq, id };

        if self.heap.len() < self.capacity {
            self.heap.push(Reverse(entry));
            return;
        }

        let replaces = self
            .heap
            .peek()
            .map(|Reverse(weakest)| entry > *weakest)
            .unwrap_or(false);
        if replaces {
            self.heap.pop();
            self.heap.push(Reverse(entry));
        }
    }

    /// Fold shard-local selections into one selector of the given capacity.
    pub(crate) fn merge(parts: Vec<TopKSelector<I>>, capacity: usize) -> Result<TopKSelector<I>> {
        let mut merged = TopKSelector::new(capacity)?;
        for part in parts {
            for Reverse(entry) in part.heap {
                merged.offer_at(entry.seq, entry.id, entry.score);
            }
        }
        Ok(merged)
    }

    /// Drain into descending score order; equal scores keep arrival order.
    pub fn into_ranked(self) -> Vec<ScoredCandidate<I>> {
        let mut entries: Vec<Entry<I>> = self.heap.into_iter().map(|Reverse(e)| e).collect();
        entries.sort_by(|a, b| b.cmp(a));
        entries
            .into_iter()
            .map(|e| ScoredCandidate {
                id: e.id,
                score: e.score,
            })
            .collect()
    }

    /// Number of candidates currently retained.
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether nothing has been retained yet.
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// Maximum number of candidates retained.
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
