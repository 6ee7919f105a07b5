//! Multi-instance extraction.
//!
//! [`InstanceExtractor`] repeatedly runs a single-round [`Ransac`] search on
//! the working set, accepts the winner, and removes its inliers before the
//! next round. It stops when its [`TerminationCriterion`] is satisfied, when
//! a round finds nothing, or when too few points remain to draw a sample.

use log::debug;

use crate::core::{
    Estimator, ExtractionProgress, Ransac, Sampler, Scoring, StopReason, TerminationCriterion,
};
use crate::error::FitError;
use crate::types::{Point, PointSet};

/// One accepted primitive and the points it consumed.
#[derive(Debug, Clone, PartialEq)]
pub struct Detection<M> {
    pub model: M,
    pub inliers: Vec<Point>,
}

/// Result of a multi-instance extraction.
#[derive(Debug, Clone, PartialEq)]
pub struct Extraction<M> {
    /// Accepted primitives in discovery order.
    pub detections: Vec<Detection<M>>,
    pub stop_reason: StopReason,
    /// Size of the input point set.
    pub total_points: usize,
    /// Sum of inlier counts over all detections.
    pub points_seen: usize,
    pub rounds: usize,
    /// Points left unexplained when the loop stopped.
    pub remaining: PointSet,
}

impl<M> Extraction<M> {
    /// Accepted models in discovery order.
    pub fn models(&self) -> impl Iterator<Item = &M> + '_ {
        self.detections.iter().map(|d| &d.model)
    }

    pub fn len(&self) -> usize {
        self.detections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.detections.is_empty()
    }
}

/// Repeated best-fit search with inlier removal.
pub struct InstanceExtractor<E, Sa, Sc, T>
where
    E: Estimator,
    Sa: Sampler,
    Sc: Scoring<E::Model>,
    T: TerminationCriterion,
{
    pub ransac: Ransac<E, Sa, Sc>,
    pub termination: T,
}

impl<E, Sa, Sc, T> InstanceExtractor<E, Sa, Sc, T>
where
    E: Estimator,
    Sa: Sampler,
    Sc: Scoring<E::Model>,
    T: TerminationCriterion,
{
    pub fn new(ransac: Ransac<E, Sa, Sc>, termination: T) -> Self {
        Self {
            ransac,
            termination,
        }
    }

    /// Extract primitives from `points` until a stop condition holds.
    ///
    /// Fails only if the settings are invalid or `points` is smaller than a
    /// minimal sample; both are checked before the first round.
    pub fn extract(&mut self, points: &PointSet) -> Result<Extraction<E::Model>, FitError> {
        self.ransac.settings.validate()?;

        let sample_size = self.ransac.estimator.sample_size();
        if points.len() < sample_size {
            return Err(FitError::TooFewPoints {
                available: points.len(),
                required: sample_size,
            });
        }

        let total_points = points.len();
        let threshold = self.ransac.scoring.threshold();
        let mut working = points.clone();
        let mut detections = Vec::new();
        let mut points_seen = 0usize;
        let mut rounds = 0usize;

        let stop_reason = loop {
            if working.len() < sample_size {
                break StopReason::Exhausted;
            }

            self.ransac.run(working.as_slice())?;

            let model = match self.ransac.best_model.take() {
                Some(model) if !self.ransac.best_inliers.is_empty() => model,
                _ => break StopReason::Stagnated,
            };

            let inliers: Vec<Point> = self
                .ransac
                .best_inliers
                .iter()
                .map(|&i| working.as_slice()[i])
                .collect();

            rounds += 1;
            points_seen += inliers.len();
            working = working.without(&inliers);

            debug!(
                "round {rounds}: accepted model with {} inliers (threshold {threshold}, {} degenerate trials), {points_seen}/{total_points} points explained",
                inliers.len(),
                self.ransac.degenerate_trials,
            );

            detections.push(Detection { model, inliers });

            let progress = ExtractionProgress {
                total_points,
                points_seen,
                rounds,
                remaining: working.len(),
            };
            if let Some(reason) = self.termination.check(&progress) {
                break reason;
            }
        };

        debug!(
            "extraction stopped ({stop_reason:?}) after {rounds} round(s); {} point(s) unexplained",
            working.len()
        );

        Ok(Extraction {
            detections,
            stop_reason,
            total_points,
            points_seen,
            rounds,
            remaining: working,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::collections::HashSet;

    use crate::core::ConsumptionCriterion;
    use crate::estimators::{CircleEstimator, LineEstimator};
    use crate::models::{Circle, Line};
    use crate::samplers::UniformRandomSampler;
    use crate::scoring::DistanceScoring;
    use crate::settings::RansacSettings;

    fn line_extractor(
        settings: RansacSettings,
    ) -> InstanceExtractor<LineEstimator, UniformRandomSampler, DistanceScoring<Line>, ConsumptionCriterion>
    {
        let ransac = Ransac::new(
            settings.clone(),
            LineEstimator::new(),
            UniformRandomSampler::from_seed(settings.seed),
            DistanceScoring::by_distance(settings.inlier_threshold),
        );
        InstanceExtractor::new(ransac, ConsumptionCriterion::from_settings(&settings))
    }

    fn circle_extractor(
        settings: RansacSettings,
    ) -> InstanceExtractor<
        CircleEstimator,
        UniformRandomSampler,
        DistanceScoring<Circle>,
        ConsumptionCriterion,
    > {
        let ransac = Ransac::new(
            settings.clone(),
            CircleEstimator::new(),
            UniformRandomSampler::from_seed(settings.seed),
            DistanceScoring::by_distance(settings.inlier_threshold),
        );
        InstanceExtractor::new(ransac, ConsumptionCriterion::from_settings(&settings))
    }

    /// A horizontal run at y = 0 and a vertical run at x = 40, far apart.
    fn two_segments() -> PointSet {
        let horizontal = (0..30).map(|x| Point::new(x, 0));
        let vertical = (10..40).map(|y| Point::new(40, y));
        PointSet::new(horizontal.chain(vertical))
    }

    fn settings() -> RansacSettings {
        RansacSettings {
            inlier_threshold: 1.0,
            max_iterations: 200,
            consumption_ratio: 1.0,
            ..RansacSettings::default()
        }
    }

    #[test]
    fn consumed_points_are_accounted_exactly_once() {
        let points = two_segments();
        let result = line_extractor(settings()).extract(&points).unwrap();

        assert_eq!(result.total_points, 60);
        assert_eq!(result.len(), 2);
        assert_eq!(result.stop_reason, StopReason::RatioReached);

        let mut seen = HashSet::new();
        for detection in &result.detections {
            for p in &detection.inliers {
                assert!(seen.insert(*p), "point {p:?} consumed twice");
                assert!(points.as_slice().contains(p));
            }
        }
        let consumed: usize = result.detections.iter().map(|d| d.inliers.len()).sum();
        assert_eq!(consumed, result.points_seen);
        assert_eq!(result.remaining.len(), result.total_points - result.points_seen);
        assert!(result.remaining.iter().all(|p| !seen.contains(p)));
    }

    #[test]
    fn round_limit_stops_early() {
        let cfg = RansacSettings {
            max_rounds: 1,
            ..settings()
        };
        let result = line_extractor(cfg).extract(&two_segments()).unwrap();
        assert_eq!(result.stop_reason, StopReason::RoundLimit);
        assert_eq!(result.rounds, 1);
        assert_eq!(result.len(), 1);
    }

    #[test]
    fn exhausted_when_fewer_than_a_sample_remains() {
        let mut coords: Vec<(i32, i32)> = (0..5).map(|x| (x * 3, 0)).collect();
        coords.push((7, 25));
        let points = PointSet::from_points(&coords);

        let result = line_extractor(settings()).extract(&points).unwrap();
        assert_eq!(result.stop_reason, StopReason::Exhausted);
        assert_eq!(result.len(), 1);
        assert_eq!(result.detections[0].inliers.len(), 5);
        assert_eq!(result.remaining.as_slice(), &[Point::new(7, 25)]);
    }

    #[test]
    fn collinear_input_stagnates_the_circle_fitter() {
        let points = PointSet::new((0..10).map(|i| Point::new(i, 2 * i)));
        let result = circle_extractor(settings()).extract(&points).unwrap();

        assert_eq!(result.stop_reason, StopReason::Stagnated);
        assert!(result.is_empty());
        assert_eq!(result.rounds, 0);
        assert_eq!(result.points_seen, 0);
        assert_eq!(result.remaining, points);
    }

    #[test]
    fn too_small_input_fails_before_any_round() {
        let points = PointSet::from_points(&[(3, 4), (5, 6)]);
        let mut extractor = circle_extractor(settings());
        let err = extractor.extract(&points).unwrap_err();
        assert_eq!(
            err,
            FitError::TooFewPoints {
                available: 2,
                required: 3
            }
        );
        assert_eq!(extractor.ransac.iteration, 0);
    }

    #[test]
    fn invalid_settings_fail_before_any_round() {
        let cfg = RansacSettings {
            consumption_ratio: 0.0,
            ..settings()
        };
        let err = line_extractor(cfg).extract(&two_segments()).unwrap_err();
        assert!(matches!(err, FitError::InvalidSettings { .. }));
    }
}
