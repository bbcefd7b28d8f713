//! Random embedding initialization

use ndarray::Array2;
use rand::prelude::*;
use rand_chacha::ChaCha8Rng;
use rand_distr::StandardNormal;

/// Initializes embedding matrices with independent standard-normal values.
///
/// Seed it for reproducible training runs; [`EmbeddingInitializer::new`]
/// draws entropy from the OS.
#[derive(Debug, Clone)]
pub struct EmbeddingInitializer {
    rng: ChaCha8Rng,
}

impl EmbeddingInitializer {
    /// Create an initializer seeded from OS entropy
    pub fn new() -> Self {
        Self {
            rng: ChaCha8Rng::from_os_rng(),
        }
    }

    /// Create a deterministically seeded initializer
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Matrix of standard-normal values shaped (hidden_units × num_labels)
    pub fn initialize(&mut self, hidden_units: usize, num_labels: usize) -> Array2<f32> {
        Array2::from_shape_simple_fn((hidden_units, num_labels), || {
            self.rng.sample(StandardNormal)
        })
    }
}

impl Default for EmbeddingInitializer {
    fn default() -> Self {
        Self::new()
    }
}
