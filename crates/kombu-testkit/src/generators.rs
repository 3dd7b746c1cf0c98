//! Seeded random vector generators.

use kombu_vector::QuantizedVector;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// A seeded RNG so generated fixtures reproduce across runs.
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

/// Generate a unit-normalized float vector.
///
/// # Panics
///
/// Panics when `dimension` is zero.
pub fn random_unit_vector(rng: &mut StdRng, dimension: usize) -> Vec<f32> {
    assert!(dimension > 0, "dimension must be positive");

    let mut v: Vec<f32> = (0..dimension).map(|_| rng.gen_range(-1.0f32..1.0)).collect();
    let norm = v.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > f32::EPSILON {
        for x in &mut v {
            *x /= norm;
        }
    } else {
        v[0] = 1.0;
    }
    v
}

/// Generate a quantized vector from a random unit vector.
pub fn random_quantized_vector(rng: &mut StdRng, dimension: usize) -> QuantizedVector {
    QuantizedVector::quantize(&random_unit_vector(rng, dimension))
        .expect("generated vector is finite and non-empty")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_vectors() {
        let a = random_unit_vector(&mut seeded_rng(7), 64);
        let b = random_unit_vector(&mut seeded_rng(7), 64);
        assert_eq!(a, b);
    }

    #[test]
    fn test_unit_norm() {
        let v = random_unit_vector(&mut seeded_rng(42), 128);
        let norm: f32 = v.iter().map(|x| x * x).sum::<f32>().sqrt();
        assert!((norm - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_quantized_dimension() {
        let v = random_quantized_vector(&mut seeded_rng(3), 96);
        assert_eq!(v.dimension(), 96);
    }
}
