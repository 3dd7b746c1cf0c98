//! Nearest-neighbor search over quantized vectors.
//!
//! This crate provides the selection and orchestration half of the Kombu
//! kernel:
//!
//! - **[`TopKSelector`]**: bounded retention of the K highest-scoring
//!   candidates from a stream, O(n log k) time and O(k) space
//! - **[`SearchService`]**: scores a candidate stream against a query and
//!   returns the best ids in order
//! - **[`CancelFlag`]**: cooperative early abort for long scans
//!
//! # Example
//!
//! ```
//! use kombu_search::SearchService;
//! use kombu_vector::QuantizedVector;
//!
//! let service = SearchService::new(4);
//! let query = QuantizedVector::quantize(&[1.0, 0.0, 0.0, 0.0]).unwrap();
//! let candidates = vec![
//!     ("a", QuantizedVector::quantize(&[1.0, 0.0, 0.0, 0.0]).unwrap()),
//!     ("b", QuantizedVector::quantize(&[0.0, 1.0, 0.0, 0.0]).unwrap()),
//! ];
//!
//! let ranked = service.find_closest(&query, candidates, 2).unwrap();
//! assert_eq!(ranked, vec!["a", "b"]);
//! ```

mod cancel;
mod config;
mod service;
mod topk;

pub use cancel::CancelFlag;
pub use config::SearchConfig;
pub use service::SearchService;
pub use topk::{ScoredCandidate, TopKSelector};

/// Error type for search operations.
#[derive(Debug, thiserror::Error)]
pub enum SearchError {
    /// Non-positive result count or other caller mistake.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Query vector width disagrees with the service dimension.
    #[error("Query dimension mismatch: expected {expected}, got {actual}")]
    QueryDimensionMismatch { expected: usize, actual: usize },

    /// A candidate vector width disagrees with the query. The offending id is
    /// reported rather than skipped; a silent skip would hide corrupt data.
    #[error("Candidate {id} dimension mismatch: expected {expected}, got {actual}")]
    CandidateDimensionMismatch {
        id: String,
        expected: usize,
        actual: usize,
    },

    /// Cooperative cancellation was observed mid-scan.
    #[error("Search cancelled")]
    Cancelled,
}

/// Result type for search operations.
pub type Result<T> = std::result::Result<T, SearchError>;
