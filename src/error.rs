//! Error type for the fitting pipeline.

use thiserror::Error;

/// Errors reported to callers of the fitting API.
///
/// Numerically degenerate samples never surface here; they are absorbed by
/// the estimators and scored as zero-inlier trials.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FitError {
    #[error("point set has {available} point(s) but a minimal sample needs {required}")]
    TooFewPoints { available: usize, required: usize },

    #[error("invalid setting `{field}`: {reason}")]
    InvalidSettings {
        field: &'static str,
        reason: &'static str,
    },

    #[error("edge mask has {actual} bytes but width * height is {expected}")]
    MaskSizeMismatch { expected: usize, actual: usize },
}
