//! Line estimator for 2D line fitting.

use crate::core::Estimator;
use crate::models::Line;
use crate::types::Point;

/// Fits the infinite line through two sample points.
pub struct LineEstimator;

impl Default for LineEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl LineEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Estimator for LineEstimator {
    type Model = Line;

    fn sample_size(&self) -> usize {
        2 // A line requires 2 points
    }

    fn is_valid_sample(&self, sample: &[Point]) -> bool {
        // Coincident points do not define a direction.
        sample.len() >= self.sample_size() && sample[0] != sample[1]
    }

    fn estimate_model(&self, sample: &[Point]) -> Vec<Self::Model> {
        if sample.len() < self.sample_size() {
            return Vec::new();
        }
        let line = Line::new(sample[0], sample[1]);
        if line.is_degenerate() {
            return Vec::new();
        }
        vec![line]
    }

    fn is_valid_model(&self, model: &Self::Model, _sample: &[Point]) -> bool {
        !model.is_degenerate()
    }
}
