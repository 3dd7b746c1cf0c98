//! Deterministic text embedder for tests.

use kombu_vector::{Embedder, QuantizedVector, Result};
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Buckets each token contributes to.
const BUCKETS_PER_TOKEN: u64 = 8;

/// A model-free [`Embedder`] for tests and demos.
///
/// Each whitespace token is hashed into a handful of component buckets with
/// signed contributions, the accumulated vector is unit-normalized, then
/// quantized. The same text always embeds to the same vector, and texts
/// sharing tokens land near each other. That is enough structure for ranking
/// tests; it is in no way a semantic model.
pub struct HashEmbedder {
    dimension: usize,
}

impl HashEmbedder {
    /// Create an embedder producing vectors of the given width.
    ///
    /// # Panics
    ///
    /// Panics when `dimension` is zero.
    pub fn new(dimension: usize) -> Self {
        assert!(dimension > 0, "dimension must be positive");
        Self { dimension }
    }
}

impl Embedder for HashEmbedder {
    fn dimension(&self) -> usize {
        self.dimension
    }

    fn embed(&self, text: &str) -> Result<QuantizedVector> {
        let mut accum = vec![0.0f32; self.dimension];

        for token in text.split_whitespace() {
            let token = token.to_lowercase();
            for round in 0..BUCKETS_PER_TOKEN {
                let mut hasher = XxHash64::with_seed(round);
                hasher.write(token.as_bytes());
                let h = hasher.finish();

                let bucket = (h as usize) % self.dimension;
                let sign = if h & (1 << 63) == 0 { 1.0 } else { -1.0 };
                accum[bucket] += sign;
            }
        }

        let norm = accum.iter().map(|x| x * x).sum::<f32>().sqrt();
        if norm > f32::EPSILON {
            for x in &mut accum {
                *x /= norm;
            }
        } else {
            // Empty text still embeds to a valid unit vector.
            accum[0] = 1.0;
        }

        QuantizedVector::quantize(&accum)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kombu_vector::dot;

    #[test]
    fn test_embedding_is_deterministic() {
        let embedder = HashEmbedder::new(256);
        let a = embedder.embed("quantized similarity search").unwrap();
        let b = embedder.embed("quantized similarity search").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_embedding_dimension() {
        let embedder = HashEmbedder::new(128);
        let v = embedder.embed("hello world").unwrap();
        assert_eq!(v.dimension(), 128);
        assert_eq!(embedder.dimension(), 128);
    }

    #[test]
    fn test_case_insensitive() {
        let embedder = HashEmbedder::new(256);
        let a = embedder.embed("Quantized Search").unwrap();
        let b = embedder.embed("quantized search").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_shared_tokens_score_higher() {
        let embedder = HashEmbedder::new(256);

        let query = embedder.embed("alpha beta").unwrap();
        let overlapping = embedder.embed("alpha gamma").unwrap();
        let unrelated = embedder.embed("delta epsilon").unwrap();

        let overlap_score = dot(&query, &overlapping).unwrap();
        let unrelated_score = dot(&query, &unrelated).unwrap();
        assert!(
            overlap_score > unrelated_score,
            "{} vs {}",
            overlap_score,
            unrelated_score
        );
    }

    #[test]
    fn test_empty_text_embeds() {
        let embedder = HashEmbedder::new(64);
        let v = embedder.embed("").unwrap();
        assert_eq!(v.dimension(), 64);
        assert_eq!(v.get(0), 127);
    }
}
