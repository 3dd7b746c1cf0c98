//! Integer similarity scoring.
//!
//! The scorer is designed to be auto-vectorized by the compiler in release
//! builds; no explicit SIMD is used.

use crate::{QuantizedVector, Result, VectorError};

/// Compute the similarity score between two quantized vectors.
///
/// This is the sum of pairwise products of corresponding i8 components,
/// accumulated in a 64-bit signed integer. Each product is at most
/// `127 * 127 = 16_129`, so the accumulator cannot overflow at any realistic
/// dimension. Higher = more similar.
///
/// The raw dot product approximates cosine similarity only when both vectors
/// were quantized from unit-normalized embeddings under the same convention
/// (see [`QuantizedVector::quantize`]); the scorer never re-normalizes.
///
/// The function is pure and safe to call concurrently on shared vectors.
///
/// # Errors
///
/// Returns [`VectorError::DimensionMismatch`] when the dimensions differ.
///
/// # Example
///
/// ```
/// use kombu_vector::{dot, QuantizedVector};
///
/// let a = QuantizedVector::quantize(&[0.6, 0.8]).unwrap();
/// let b = QuantizedVector::quantize(&[0.8, 0.6]).unwrap();
/// assert!(dot(&a, &b).unwrap() > 0);
/// ```
#[inline]
pub fn dot(a: &QuantizedVector, b: &QuantizedVector) -> Result<i64> {
    if a.dimension() != b.dimension() {
        return Err(VectorError::DimensionMismatch {
            expected: a.dimension(),
            actual: b.dimension(),
        });
    }

    let xs = a.as_bytes();
    let ys = b.as_bytes();

    // Process in chunks of 4 for better auto-vectorization
    let mut sum = 0i64;
    let chunks = xs.len() / 4;

    for i in 0..chunks {
        let base = i * 4;
        let p0 = (xs[base] as i8 as i32) * (ys[base] as i8 as i32);
        let p1 = (xs[base + 1] as i8 as i32) * (ys[base + 1] as i8 as i32);
        let p2 = (xs[base + 2] as i8 as i32) * (ys[base + 2] as i8 as i32);
        let p3 = (xs[base + 3] as i8 as i32) * (ys[base + 3] as i8 as i32);
        sum += (p0 + p1 + p2 + p3) as i64;
    }

    // Handle remaining elements
    for i in (chunks * 4)..xs.len() {
        sum += (xs[i] as i8 as i64) * (ys[i] as i8 as i64);
    }

    Ok(sum)
}
