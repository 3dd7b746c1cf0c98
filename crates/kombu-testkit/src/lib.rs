//! Deterministic test tooling for Kombu crates.
//!
//! Provides:
//! - seeded random vector generators for fixtures and stress tests
//! - [`HashEmbedder`], a model-free deterministic embedder for exercising
//!   the full embed-store-search flow without a real model backend

mod embedder;
mod generators;

pub use embedder::HashEmbedder;
pub use generators::{random_quantized_vector, random_unit_vector, seeded_rng};
