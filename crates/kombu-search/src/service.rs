//! Search orchestration.

use crate::topk::TopKSelector;
use crate::{CancelFlag, Result, SearchConfig, SearchError};
use kombu_vector::{dot, QuantizedVector};
use rayon::prelude::*;
use std::fmt::Display;

/// Orchestrates scoring and selection over a candidate stream.
///
/// The service is stateless per call: the only evolving state is each scan's
/// private selector, so one instance can serve concurrent searches. Scoring
/// is the integer dot product; selection is bounded top-k with
/// earlier-seen-wins tie-breaking, which makes repeated runs on identical
/// input byte-identical.
#[derive(Debug, Clone)]
pub struct SearchService {
    dimension: usize,
    config: SearchConfig,
}

impl SearchService {
    /// Create a service for vectors of the given dimension.
    pub fn new(dimension: usize) -> Self {
        Self::with_config(dimension, SearchConfig::default())
    }

    /// Create a service with explicit tuning.
    pub fn with_config(dimension: usize, config: SearchConfig) -> Self {
        Self { dimension, config }
    }

    /// Vector dimension this service expects.
    pub fn dimension(&self) -> usize {
        self.dimension
    }

    /// Find the `max_results` candidates most similar to `query`, best first.
    ///
    /// Every candidate is scored against the query and fed through a bounded
    /// selector, so a sequential scan holds O(max_results) state regardless
    /// of candidate count. With [`SearchConfig::parallel_threshold`] set,
    /// large candidate sets are sharded across worker threads and the partial
    /// selections merged; the result is identical to the sequential scan
    /// because ties break on original candidate position, not worker arrival.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidArgument`] when `max_results` is zero
    /// - [`SearchError::QueryDimensionMismatch`] when the query width
    ///   disagrees with the service dimension
    /// - [`SearchError::CandidateDimensionMismatch`] naming the offending id
    ///   when any candidate width disagrees; no partial result is returned
    pub fn find_closest<I>(
        &self,
        query: &QuantizedVector,
        candidates: impl IntoIterator<Item = (I, QuantizedVector)>,
        max_results: usize,
    ) -> Result<Vec<I>>
    where
        I: Display + Send,
    {
        self.find_closest_cancellable(query, candidates, max_results, &CancelFlag::new())
    }

    /// Like [`find_closest`](Self::find_closest), aborting with
    /// [`SearchError::Cancelled`] once `cancel` is observed set.
    ///
    /// The flag is checked between candidates, never mid-scoring, and a
    /// cancelled scan returns no partial result.
    pub fn find_closest_cancellable<I>(
        &self,
        query: &QuantizedVector,
        candidates: impl IntoIterator<Item = (I, QuantizedVector)>,
        max_results: usize,
        cancel: &CancelFlag,
    ) -> Result<Vec<I>>
    where
        I: Display + Send,
    {
        if query.dimension() != self.dimension {
            return Err(SearchError::QueryDimensionMismatch {
                expected: self.dimension,
                actual: query.dimension(),
            });
        }

        match self.config.parallel_threshold {
            Some(threshold) => {
                let candidates: Vec<(I, QuantizedVector)> = candidates.into_iter().collect();
                if candidates.len() >= threshold {
                    self.scan_sharded(query, candidates, max_results, cancel)
                } else {
                    self.scan_sequential(query, candidates, max_results, cancel)
                }
            }
            None => self.scan_sequential(query, candidates, max_results, cancel),
        }
    }

    /// Single-threaded streaming scan.
    fn scan_sequential<I>(
        &self,
        query: &QuantizedVector,
        candidates: impl IntoIterator<Item = (I, QuantizedVector)>,
        max_results: usize,
        cancel: &CancelFlag,
    ) -> Result<Vec<I>>
    where
        I: Display,
    {
        let mut selector = TopKSelector::new(max_results)?;
        for (id, vector) in candidates {
            if cancel.is_cancelled() {
                return Err(SearchError::Cancelled);
            }
            let score = score_candidate(query, &id, &vector)?;
            selector.offer(id, score);
        }
        Ok(drain_ids(selector))
    }

    /// Sharded scan: each worker runs a private selector over one slice of
    /// the indexed candidate list, then the partial top-k lists are merged.
    fn scan_sharded<I>(
        &self,
        query: &QuantizedVector,
        candidates: Vec<(I, QuantizedVector)>,
        max_results: usize,
        cancel: &CancelFlag,
    ) -> Result<Vec<I>>
    where
        I: Display + Send,
    {
        let shard_size = self.config.shard_size.max(1);

        let indexed: Vec<(u64, I, QuantizedVector)> = candidates
            .into_iter()
            .enumerate()
            .map(|(i, (id, vector))| (i as u64, id, vector))
            .collect();

        let partials: Vec<Result<TopKSelector<I>>> = indexed
            .into_par_iter()
            .chunks(shard_size)
            .map(|shard| {
                let mut selector = TopKSelector::new(max_results)?;
                for (seq, id, vector) in shard {
                    if cancel.is_cancelled() {
                        return Err(SearchError::Cancelled);
                    }
                    let score = score_candidate(query, &id, &vector)?;
                    selector.offer_at(seq, id, score);
                }
                Ok(selector)
            })
            .collect();

        let mut parts = Vec::with_capacity(partials.len());
        for partial in partials {
            parts.push(partial?);
        }

        Ok(drain_ids(TopKSelector::merge(parts, max_results)?))
    }
}

fn score_candidate<I: Display>(
    query: &QuantizedVector,
    id: &I,
    vector: &QuantizedVector,
) -> Result<i64> {
    dot(query, vector).map_err(|_| SearchError::CandidateDimensionMismatch {
        id: id.to_string(),
        expected: query.dimension(),
        actual: vector.dimension(),
    })
}

fn drain_ids<I>(selector: TopKSelector<I>) -> Vec<I> {
    selector.into_ranked().into_iter().map(|c| c.id).collect()
}
