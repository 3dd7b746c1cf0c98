//! Quantized vector representation.

use crate::{Result, VectorError};
use bytes::Bytes;

/// Scale factor for fixed-scale symmetric quantization.
///
/// Components of a unit-normalized embedding lie in `[-1, 1]`; a scale of 127
/// uses the full signed-8-bit range. The scale is a global constant so that
/// vectors quantized at different times stay mutually comparable.
pub const I8_SCALE: f32 = 127.0;

/// An immutable embedding vector with signed-8-bit components.
///
/// Backed by a shared byte buffer, so clones are cheap and candidate streams
/// can hand vectors around by value. There is no mutation after construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuantizedVector {
    buf: Bytes,
}

impl QuantizedVector {
    /// Quantize a float embedding under the fixed-scale convention.
    ///
    /// Each component is scaled by [`I8_SCALE`], rounded to nearest, and
    /// clamped to `[-127, 127]`. The encoding is deterministic: the same
    /// input always produces the same bytes. Callers are expected to pass
    /// unit-normalized embeddings; components outside `[-1, 1]` saturate.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Empty`] for a zero-length input and
    /// [`VectorError::NonFinite`] if any component is NaN or infinite.
    pub fn quantize(values: &[f32]) -> Result<Self> {
        if values.is_empty() {
            return Err(VectorError::Empty);
        }
        for (i, &v) in values.iter().enumerate() {
            if !v.is_finite() {
                return Err(VectorError::NonFinite(i));
            }
        }

        let encoded: Vec<u8> = values
            .iter()
            .map(|&v| (v * I8_SCALE).round().clamp(-127.0, 127.0) as i8 as u8)
            .collect();

        Ok(Self {
            buf: encoded.into(),
        })
    }

    /// Reinterpret a raw buffer as a quantized vector.
    ///
    /// Each byte is read as a two's-complement i8 component, matching the
    /// layout returned by [`as_bytes`](Self::as_bytes). This is the
    /// deserialization path for vectors coming back from a document store.
    ///
    /// # Errors
    ///
    /// Returns [`VectorError::Empty`] when `dimension` is zero and
    /// [`VectorError::DimensionMismatch`] when the buffer length disagrees
    /// with `dimension`.
    pub fn from_bytes(buf: Bytes, dimension: usize) -> Result<Self> {
        if dimension == 0 {
            return Err(VectorError::Empty);
        }
        if buf.len() != dimension {
            return Err(VectorError::DimensionMismatch {
                expected: dimension,
                actual: buf.len(),
            });
        }
        Ok(Self { buf })
    }

    /// Number of components.
    pub fn dimension(&self) -> usize {
        self.buf.len()
    }

    /// Component at index `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= dimension()`.
    pub fn get(&self, i: usize) -> i8 {
        self.buf[i] as i8
    }

    /// Raw buffer view, one byte per component.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buf
    }

    /// Dequantize back to floats.
    ///
    /// Lossy inverse of [`quantize`](Self::quantize): each component comes
    /// back within one quantization step (`1 / 127`) of the value it was
    /// encoded from, assuming that value was inside `[-1, 1]`.
    pub fn to_floats(&self) -> Vec<f32> {
        self.buf.iter().map(|&b| (b as i8) as f32 / I8_SCALE).collect()
    }
}
