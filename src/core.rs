//! Core traits and the single-round RANSAC search.
//!
//! The pipeline is assembled from small components:
//! - an [`Estimator`] fitting a model to a minimal sample,
//! - a [`Sampler`] drawing minimal samples from the working set,
//! - a [`Scoring`] strategy counting inliers of a candidate model,
//! - a [`TerminationCriterion`] deciding when multi-instance extraction stops.
//!
//! [`Ransac`] runs one round of best-fit search over a fixed slice of points.
//! The multi-instance loop built on top of it lives in [`crate::extraction`].

use log::trace;

use crate::error::FitError;
use crate::settings::RansacSettings;
use crate::types::Point;

/// Estimator responsible for generating model hypotheses from minimal samples.
pub trait Estimator {
    /// Model type produced by this estimator.
    type Model: Clone;

    /// Size of a minimal sample for this estimator.
    fn sample_size(&self) -> usize;

    /// Check whether a given sample is geometrically valid.
    fn is_valid_sample(&self, sample: &[Point]) -> bool;

    /// Estimate candidate models from a minimal sample.
    ///
    /// Degenerate samples yield an empty vector.
    fn estimate_model(&self, sample: &[Point]) -> Vec<Self::Model>;

    /// Validate a candidate model before scoring.
    fn is_valid_model(&self, model: &Self::Model, sample: &[Point]) -> bool;
}

/// Sampler responsible for drawing minimal samples from the data.
pub trait Sampler {
    /// Draw `sample_size` distinct indices into `data` and write them to
    /// `out_indices`.
    ///
    /// Returns `false` if `data` is too small to provide such a sample.
    fn sample(&mut self, data: &[Point], sample_size: usize, out_indices: &mut [usize]) -> bool;
}

/// Scoring strategy used to evaluate model quality and determine inliers.
pub trait Scoring<M> {
    /// Score type; larger is better.
    type Score: Clone + PartialOrd;

    /// Inlier distance threshold in pixels.
    fn threshold(&self) -> f64;

    /// Score a model against every point and collect the inlier indices.
    fn score(&self, data: &[Point], model: &M, inliers_out: &mut Vec<usize>) -> Self::Score;

    /// Score given to a trial whose sample could not produce a model.
    fn zero(&self) -> Self::Score;
}

/// Running totals of a multi-instance extraction, handed to the
/// termination criterion after every accepted primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractionProgress {
    /// Size of the point set when extraction started.
    pub total_points: usize,
    /// Inliers consumed by all accepted primitives so far.
    pub points_seen: usize,
    /// Completed rounds.
    pub rounds: usize,
    /// Points still in the working set.
    pub remaining: usize,
}

/// Why a multi-instance extraction stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The requested fraction of the original points has been explained.
    RatioReached,
    /// The configured maximum number of rounds was used up.
    RoundLimit,
    /// Fewer points remain than a minimal sample needs.
    Exhausted,
    /// A round found no model with any inliers.
    Stagnated,
}

/// Termination criterion deciding when the extraction loop can stop.
pub trait TerminationCriterion {
    /// Inspect the progress after an accepted round; `Some` stops the loop.
    fn check(&mut self, progress: &ExtractionProgress) -> Option<StopReason>;
}

/// Stops once `ratio * total_points` points have been consumed, or after
/// `max_rounds` rounds, whichever comes first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConsumptionCriterion {
    pub ratio: f64,
    pub max_rounds: usize,
}

impl ConsumptionCriterion {
    pub fn from_settings(settings: &RansacSettings) -> Self {
        Self {
            ratio: settings.consumption_ratio,
            max_rounds: settings.max_rounds,
        }
    }
}

impl TerminationCriterion for ConsumptionCriterion {
    fn check(&mut self, progress: &ExtractionProgress) -> Option<StopReason> {
        let limit = self.ratio * progress.total_points as f64;
        if progress.points_seen as f64 >= limit {
            Some(StopReason::RatioReached)
        } else if progress.rounds >= self.max_rounds {
            Some(StopReason::RoundLimit)
        } else {
            None
        }
    }
}

/// Single-round RANSAC best-fit search.
///
/// [`Ransac::run`] performs exactly `settings.max_iterations` trials and
/// keeps the one with the strictly greatest score; among equal scores the
/// earliest trial wins. Results are left in the public output fields.
#[derive(Debug)]
pub struct Ransac<E, Sa, Sc>
where
    E: Estimator,
    Sa: Sampler,
    Sc: Scoring<E::Model>,
{
    pub settings: RansacSettings,
    pub estimator: E,
    pub sampler: Sa,
    pub scoring: Sc,

    // Outputs / diagnostics
    pub best_model: Option<E::Model>,
    pub best_inliers: Vec<usize>,
    pub best_score: Option<Sc::Score>,
    pub iteration: usize,
    pub degenerate_trials: usize,
}

impl<E, Sa, Sc> Ransac<E, Sa, Sc>
where
    E: Estimator,
    Sa: Sampler,
    Sc: Scoring<E::Model>,
{
    /// Create a new pipeline from its components.
    pub fn new(settings: RansacSettings, estimator: E, sampler: Sa, scoring: Sc) -> Self {
        Self {
            settings,
            estimator,
            sampler,
            scoring,
            best_model: None,
            best_inliers: Vec::new(),
            best_score: None,
            iteration: 0,
            degenerate_trials: 0,
        }
    }

    /// Run one round of best-fit search over `data`.
    ///
    /// `data` is only read. A trial whose sample is degenerate scores zero
    /// and can never become the best, so if every trial is degenerate the
    /// round ends with `best_model == None`.
    pub fn run(&mut self, data: &[Point]) -> Result<(), FitError> {
        let sample_size = self.estimator.sample_size();
        if data.len() < sample_size {
            return Err(FitError::TooFewPoints {
                available: data.len(),
                required: sample_size,
            });
        }

        let mut sample_indices = vec![0usize; sample_size];
        let mut sample_points: Vec<Point> = Vec::with_capacity(sample_size);
        let mut tmp_inliers = Vec::new();

        self.best_model = None;
        self.best_inliers.clear();
        self.best_score = None;
        self.iteration = 0;
        self.degenerate_trials = 0;

        let zero = self.scoring.zero();

        while self.iteration < self.settings.max_iterations {
            self.iteration += 1;

            if !self
                .sampler
                .sample(data, sample_size, &mut sample_indices[..])
            {
                return Err(FitError::TooFewPoints {
                    available: data.len(),
                    required: sample_size,
                });
            }

            sample_points.clear();
            sample_points.extend(sample_indices.iter().map(|&i| data[i]));

            if !self.estimator.is_valid_sample(&sample_points) {
                trace!("trial {}: degenerate sample {:?}", self.iteration, sample_points);
                self.degenerate_trials += 1;
                continue;
            }

            let models = self.estimator.estimate_model(&sample_points);
            if models.is_empty() {
                trace!("trial {}: no model from sample {:?}", self.iteration, sample_points);
                self.degenerate_trials += 1;
                continue;
            }

            for model in models.iter() {
                if !self.estimator.is_valid_model(model, &sample_points) {
                    continue;
                }

                let score = self.scoring.score(data, model, &mut tmp_inliers);

                let better = match &self.best_score {
                    None => score > zero,
                    Some(best) => score > *best,
                };

                if better {
                    self.best_score = Some(score);
                    self.best_model = Some(model.clone());
                    self.best_inliers.clear();
                    self.best_inliers.extend_from_slice(&tmp_inliers);
                }
            }
        }

        Ok(())
    }
}
