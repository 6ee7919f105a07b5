//! Sampling strategies for minimal samples.
//!
//! Samplers implement the [`Sampler`](crate::core::Sampler) trait and draw
//! indices into the current working set.

pub mod uniform;

pub use uniform::UniformRandomSampler;
