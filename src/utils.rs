//! Miscellaneous utilities.
//!
//! Currently a small seeded wrapper around `rand` that draws sets of unique
//! integers for the samplers.

use std::marker::PhantomData;

use rand::distributions::uniform::SampleUniform;
use rand::distributions::Uniform;
use rand::prelude::*;

/// Seeded generator of distinct uniform integers.
///
/// Every instance owns its RNG, so two generators built from the same seed
/// produce the same sequence regardless of what else runs in the process.
pub struct UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    rng: StdRng,
    _marker: PhantomData<T>,
}

impl<T> UniformRandomGenerator<T>
where
    T: Copy + SampleUniform + PartialOrd,
{
    /// Construct with a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            _marker: PhantomData,
        }
    }

    /// Fill `out` with pairwise-distinct values from `[min, max]`.
    ///
    /// Uses rejection of repeats, which is cheap for the 2- and 3-element
    /// samples drawn here. The caller must ensure the range holds at least
    /// `out.len()` values.
    pub fn gen_unique(&mut self, out: &mut [T], min: T, max: T)
    where
        T: Eq,
    {
        let dist = Uniform::new_inclusive(min, max);
        for i in 0..out.len() {
            loop {
                let candidate = self.rng.sample(&dist);
                if out[..i].iter().all(|&v| v != candidate) {
                    out[i] = candidate;
                    break;
                }
            }
        }
    }
}
