//! Inlier-count scoring.
//!
//! The score of a candidate model is the number of working-set points whose
//! residual is within the inlier threshold.

use crate::core::Scoring;
use crate::models::Primitive;
use crate::types::Point;

/// Number of inliers supporting a model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Score {
    pub inlier_count: usize,
}

impl Score {
    pub fn new(inlier_count: usize) -> Self {
        Self { inlier_count }
    }
}

/// RANSAC-style scoring that counts inliers using a residual function.
///
/// The residual function takes `(model, point)` and returns a non-negative
/// distance. Non-finite residuals never count as inliers.
pub struct RansacInlierCountScoring<M, F>
where
    F: Fn(&M, &Point) -> f64,
{
    threshold: f64,
    residual_fn: F,
    _marker: std::marker::PhantomData<M>,
}

impl<M, F> RansacInlierCountScoring<M, F>
where
    F: Fn(&M, &Point) -> f64,
{
    pub fn new(threshold: f64, residual_fn: F) -> Self {
        Self {
            threshold,
            residual_fn,
            _marker: std::marker::PhantomData,
        }
    }
}

/// Inlier-count scoring driven by [`Primitive::distance`].
pub type DistanceScoring<M> = RansacInlierCountScoring<M, fn(&M, &Point) -> f64>;

impl<M: Primitive> DistanceScoring<M> {
    /// Scoring by the model's own point-to-primitive distance.
    pub fn by_distance(threshold: f64) -> Self {
        Self::new(threshold, M::distance)
    }
}

impl<M, F> Scoring<M> for RansacInlierCountScoring<M, F>
where
    F: Fn(&M, &Point) -> f64,
{
    type Score = Score;

    fn threshold(&self) -> f64 {
        self.threshold
    }

    fn score(&self, data: &[Point], model: &M, inliers_out: &mut Vec<usize>) -> Self::Score {
        inliers_out.clear();
        for (i, p) in data.iter().enumerate() {
            // NaN and infinity compare false here.
            if (self.residual_fn)(model, p) <= self.threshold {
                inliers_out.push(i);
            }
        }
        Score::new(inliers_out.len())
    }

    fn zero(&self) -> Self::Score {
        Score::default()
    }
}
