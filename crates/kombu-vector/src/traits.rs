//! Collaborator contract for embedding producers.

use crate::{QuantizedVector, Result};

/// Produces quantized vectors from text.
///
/// Implementations wrap whatever backend actually computes the float
/// embedding (a local model, a remote service, a test stub); the search
/// kernel only ever sees the quantized output. Two requirements keep outputs
/// mutually comparable:
///
/// - every call returns a vector of [`dimension`](Self::dimension) width
/// - float embeddings are unit-normalized before quantization, so the
///   fixed-scale convention preserves relative similarity across vectors
///   produced at different times
///
/// The kernel trusts both and does not re-check them at scoring time.
pub trait Embedder: Send + Sync {
    /// Width of every vector this embedder produces.
    fn dimension(&self) -> usize;

    /// Embed `text` into a quantized vector.
    fn embed(&self, text: &str) -> Result<QuantizedVector>;
}
