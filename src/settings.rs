//! Configuration for the line and circle fitters.
//!
//! [`RansacSettings`] holds every tunable of a run: the per-round trial count
//! and inlier threshold used by the best-fit search, and the consumption
//! ratio, round limit and seed used by the multi-instance extraction loop.
//! It deserializes from any serde format, with missing fields taking their
//! defaults.

use serde::{Deserialize, Serialize};

use crate::error::FitError;

/// Main configuration object for a fitting run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RansacSettings {
    /// Maximum point-to-model distance (pixels) for a point to count as an inlier.
    pub inlier_threshold: f64,
    /// Number of trials per round.
    pub max_iterations: usize,
    /// Fraction of the original point count to explain before stopping, in (0, 1].
    pub consumption_ratio: f64,
    /// Upper bound on the number of rounds (accepted primitives).
    pub max_rounds: usize,
    /// Seed of the sampler's pseudorandom generator.
    pub seed: u64,
}

impl Default for RansacSettings {
    fn default() -> Self {
        Self {
            inlier_threshold: 3.0,
            max_iterations: 100,
            consumption_ratio: 0.7,
            max_rounds: 1000,
            seed: 69,
        }
    }
}

impl RansacSettings {
    /// Check every field against its documented range.
    pub fn validate(&self) -> Result<(), FitError> {
        if !self.inlier_threshold.is_finite() || self.inlier_threshold <= 0.0 {
            return Err(FitError::InvalidSettings {
                field: "inlier_threshold",
                reason: "must be a positive finite number of pixels",
            });
        }
        if self.max_iterations == 0 {
            return Err(FitError::InvalidSettings {
                field: "max_iterations",
                reason: "must be at least 1",
            });
        }
        if !(self.consumption_ratio > 0.0 && self.consumption_ratio <= 1.0) {
            return Err(FitError::InvalidSettings {
                field: "consumption_ratio",
                reason: "must lie in (0, 1]",
            });
        }
        if self.max_rounds == 0 {
            return Err(FitError::InvalidSettings {
                field: "max_rounds",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let cfg = RansacSettings::default();
        assert!((cfg.inlier_threshold - 3.0).abs() < 1e-12);
        assert_eq!(cfg.max_iterations, 100);
        assert!((cfg.consumption_ratio - 0.7).abs() < 1e-12);
        assert_eq!(cfg.seed, 69);
        assert_eq!(cfg.validate(), Ok(()));
    }

    #[test]
    fn out_of_range_fields_are_rejected() {
        let bad_ratio = RansacSettings {
            consumption_ratio: 1.5,
            ..RansacSettings::default()
        };
        assert!(matches!(
            bad_ratio.validate(),
            Err(FitError::InvalidSettings {
                field: "consumption_ratio",
                ..
            })
        ));

        let nan_ratio = RansacSettings {
            consumption_ratio: f64::NAN,
            ..RansacSettings::default()
        };
        assert!(nan_ratio.validate().is_err());

        let zero_threshold = RansacSettings {
            inlier_threshold: 0.0,
            ..RansacSettings::default()
        };
        assert!(matches!(
            zero_threshold.validate(),
            Err(FitError::InvalidSettings {
                field: "inlier_threshold",
                ..
            })
        ));

        let no_trials = RansacSettings {
            max_iterations: 0,
            ..RansacSettings::default()
        };
        assert!(no_trials.validate().is_err());

        let no_rounds = RansacSettings {
            max_rounds: 0,
            ..RansacSettings::default()
        };
        assert!(no_rounds.validate().is_err());
    }

    #[test]
    fn partial_json_falls_back_to_defaults() {
        let cfg: RansacSettings =
            serde_json::from_str(r#"{ "inlier_threshold": 2.0, "seed": 7 }"#).unwrap();
        assert_eq!(
            cfg,
            RansacSettings {
                inlier_threshold: 2.0,
                seed: 7,
                ..RansacSettings::default()
            }
        );
    }
}
