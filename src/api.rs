//! High-level API.
//!
//! These functions wire the default components together: the uniform seeded
//! sampler, distance-based inlier counting and the consumption-ratio
//! termination criterion, all configured from one [`RansacSettings`].

use crate::core::{ConsumptionCriterion, Estimator, Ransac};
use crate::error::FitError;
use crate::estimators::{CircleEstimator, LineEstimator};
use crate::extraction::{Extraction, InstanceExtractor};
use crate::models::{Circle, Line, Primitive};
use crate::samplers::UniformRandomSampler;
use crate::scoring::{DistanceScoring, Score};
use crate::settings::RansacSettings;
use crate::types::{Point, PointSet};

/// Result of a single round of RANSAC estimation.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimationResult<M> {
    /// The estimated model.
    pub model: M,
    /// The inlier points, in working-set order.
    pub inliers: Vec<Point>,
    /// Score of the estimated model.
    pub score: Score,
    /// Number of trials performed.
    pub iterations: usize,
}

/// Extract lines from `points` until the settings' stop condition holds.
///
/// # Arguments
/// * `points` - Edge points to explain
/// * `settings` - Optional settings (uses defaults if None)
///
/// # Returns
/// `Extraction` listing the accepted lines in discovery order.
pub fn fit_lines(
    points: &PointSet,
    settings_opt: Option<RansacSettings>,
) -> Result<Extraction<Line>, FitError> {
    extract_with(LineEstimator::new(), points, settings_opt)
}

/// Extract circles from `points` until the settings' stop condition holds.
///
/// # Arguments
/// * `points` - Edge points to explain
/// * `settings` - Optional settings (uses defaults if None)
///
/// # Returns
/// `Extraction` listing the accepted circles in discovery order.
pub fn fit_circles(
    points: &PointSet,
    settings_opt: Option<RansacSettings>,
) -> Result<Extraction<Circle>, FitError> {
    extract_with(CircleEstimator::new(), points, settings_opt)
}

/// Find the single best-supported line in `points`.
///
/// Returns `Ok(None)` if every trial drew a degenerate sample.
pub fn estimate_line(
    points: &PointSet,
    settings_opt: Option<RansacSettings>,
) -> Result<Option<EstimationResult<Line>>, FitError> {
    estimate_with(LineEstimator::new(), points, settings_opt)
}

/// Find the single best-supported circle in `points`.
///
/// Returns `Ok(None)` if every trial drew a degenerate (collinear) sample.
pub fn estimate_circle(
    points: &PointSet,
    settings_opt: Option<RansacSettings>,
) -> Result<Option<EstimationResult<Circle>>, FitError> {
    estimate_with(CircleEstimator::new(), points, settings_opt)
}

fn build_ransac<E>(
    estimator: E,
    settings: RansacSettings,
) -> Ransac<E, UniformRandomSampler, DistanceScoring<E::Model>>
where
    E: Estimator,
    E::Model: Primitive,
{
    let sampler = UniformRandomSampler::from_seed(settings.seed);
    let scoring = DistanceScoring::by_distance(settings.inlier_threshold);
    Ransac::new(settings, estimator, sampler, scoring)
}

fn extract_with<E>(
    estimator: E,
    points: &PointSet,
    settings_opt: Option<RansacSettings>,
) -> Result<Extraction<E::Model>, FitError>
where
    E: Estimator,
    E::Model: Primitive,
{
    let settings = settings_opt.unwrap_or_default();
    let termination = ConsumptionCriterion::from_settings(&settings);
    let mut extractor = InstanceExtractor::new(build_ransac(estimator, settings), termination);
    extractor.extract(points)
}

fn estimate_with<E>(
    estimator: E,
    points: &PointSet,
    settings_opt: Option<RansacSettings>,
) -> Result<Option<EstimationResult<E::Model>>, FitError>
where
    E: Estimator,
    E::Model: Primitive,
{
    let settings = settings_opt.unwrap_or_default();
    settings.validate()?;

    let mut ransac = build_ransac(estimator, settings);
    ransac.run(points.as_slice())?;

    let data = points.as_slice();
    Ok(match (ransac.best_model.take(), ransac.best_score) {
        (Some(model), Some(score)) => Some(EstimationResult {
            model,
            inliers: ransac.best_inliers.iter().map(|&i| data[i]).collect(),
            score,
            iterations: ransac.iteration,
        }),
        _ => None,
    })
}
