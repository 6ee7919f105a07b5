//! Circle estimator: circumscribed circle of three points.

use crate::core::Estimator;
use crate::models::Circle;
use crate::types::Point;

/// Fits the circle passing through three non-collinear sample points.
///
/// Collinear or nearly collinear samples produce no model; the search then
/// scores the trial as having zero inliers.
pub struct CircleEstimator;

impl Default for CircleEstimator {
    fn default() -> Self {
        Self::new()
    }
}

impl CircleEstimator {
    pub fn new() -> Self {
        Self
    }
}

impl Estimator for CircleEstimator {
    type Model = Circle;

    fn sample_size(&self) -> usize {
        3
    }

    fn is_valid_sample(&self, sample: &[Point]) -> bool {
        if sample.len() < self.sample_size() {
            return false;
        }
        let (p1, p2, p3) = (sample[0], sample[1], sample[2]);
        p1 != p2 && p2 != p3 && p1 != p3
    }

    fn estimate_model(&self, sample: &[Point]) -> Vec<Self::Model> {
        if sample.len() < self.sample_size() {
            return Vec::new();
        }
        Circle::from_points(&sample[0], &sample[1], &sample[2])
            .into_iter()
            .collect()
    }

    fn is_valid_model(&self, model: &Self::Model, _sample: &[Point]) -> bool {
        model.is_finite() && model.radius > 0.0
    }
}
