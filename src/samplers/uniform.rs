//! Uniform random sampler drawing minimal samples without replacement.

use crate::core::Sampler;
use crate::types::Point;
use crate::utils::UniformRandomGenerator;

/// Uniform random sampler drawing minimal samples without replacement.
pub struct UniformRandomSampler {
    rng: UniformRandomGenerator<usize>,
}

impl UniformRandomSampler {
    /// Construct a sampler from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: UniformRandomGenerator::from_seed(seed),
        }
    }
}

impl Sampler for UniformRandomSampler {
    fn sample(&mut self, data: &[Point], sample_size: usize, out_indices: &mut [usize]) -> bool {
        let n = data.len();
        if sample_size == 0 || n == 0 || sample_size > n || out_indices.len() < sample_size {
            return false;
        }

        // Sample unique indices in the range [0, n-1].
        self.rng.gen_unique(&mut out_indices[..sample_size], 0, n - 1);
        true
    }
}
