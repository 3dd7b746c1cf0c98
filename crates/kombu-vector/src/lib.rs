//! Quantized embedding vectors for Kombu.
//!
//! This crate provides the fundamental data unit of the search kernel and the
//! scoring function over it:
//!
//! - **[`QuantizedVector`]**: immutable signed-8-bit encoding of a float embedding
//! - **[`dot`]**: pairwise-product similarity score with a widened accumulator
//! - **[`Embedder`] trait**: collaborator contract for producing query vectors
//!
//! # Quantization convention
//!
//! Kombu uses fixed-scale symmetric quantization: every component of a
//! unit-normalized float embedding is mapped `q = round(v * 127)` and clamped
//! to `[-127, 127]`. Because the scale is a global constant rather than
//! per-vector, vectors quantized at different times remain mutually
//! comparable, and the raw integer dot product preserves cosine ordering as
//! long as the embedder hands in consistently-normalized floats.
//!
//! # Example
//!
//! ```
//! use kombu_vector::{dot, QuantizedVector};
//!
//! let a = QuantizedVector::quantize(&[1.0, 0.0, 0.0, 0.0]).unwrap();
//! let b = QuantizedVector::quantize(&[0.0, 1.0, 0.0, 0.0]).unwrap();
//!
//! assert_eq!(dot(&a, &a).unwrap(), 127 * 127);
//! assert_eq!(dot(&a, &b).unwrap(), 0);
//! ```

mod quantized;
mod score;
mod traits;

pub use quantized::{QuantizedVector, I8_SCALE};
pub use score::dot;
pub use traits::Embedder;

/// Error type for vector operations.
#[derive(Debug, thiserror::Error)]
pub enum VectorError {
    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Non-finite component at index {0}")]
    NonFinite(usize),

    #[error("Empty embedding")]
    Empty,
}

/// Result type for vector operations.
pub type Result<T> = std::result::Result<T, VectorError>;
