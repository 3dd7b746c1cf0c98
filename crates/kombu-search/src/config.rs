//! Search configuration.

use serde::{Deserialize, Serialize};

/// Tuning parameters for [`SearchService`](crate::SearchService).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    /// Candidate count at which a scan shards across worker threads.
    /// `None` keeps every scan sequential and streaming.
    /// Default: None
    pub parallel_threshold: Option<usize>,

    /// Candidates per shard in a parallel scan.
    /// Default: 1024
    pub shard_size: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: None,
            shard_size: 1024,
        }
    }
}
