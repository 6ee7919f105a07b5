//! Estimators for geometric primitives.
//!
//! This module contains the minimal-sample solvers:
//! - Line estimation (2 points)
//! - Circle estimation (3 points)

pub mod circle;
pub mod line;

// Re-export all estimators for convenience
pub use circle::CircleEstimator;
pub use line::LineEstimator;
