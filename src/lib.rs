//! # edgefit - multi-instance RANSAC for lines and circles
//!
//! `edgefit` recovers an unknown number of straight lines or circles from a
//! noisy, unordered set of integer edge pixels. Each round runs a RANSAC
//! best-fit search over the points not yet explained, accepts the winning
//! primitive, removes its inliers and repeats until a target fraction of
//! the original points has been consumed.
//!
//! ## Quick Start
//!
//! ```rust
//! use edgefit::{fit_lines, PointSet, RansacSettings};
//!
//! // Two perpendicular runs of edge pixels.
//! let points = PointSet::new(
//!     (0..50)
//!         .map(|x| edgefit::Point::new(x, 10))
//!         .chain((20..60).map(|y| edgefit::Point::new(70, y))),
//! );
//!
//! let settings = RansacSettings {
//!     inlier_threshold: 1.0,
//!     consumption_ratio: 0.9,
//!     ..RansacSettings::default()
//! };
//! let lines = fit_lines(&points, Some(settings)).unwrap();
//! assert_eq!(lines.len(), 2);
//! ```
//!
//! ## Extending the Library
//!
//! The pipeline is assembled from the traits in [`core`]:
//!
//! - **[`Estimator`](core::Estimator)**: fit a model to a minimal sample
//! - **[`Sampler`](core::Sampler)**: draw minimal samples from the working set
//! - **[`Scoring<M>`](core::Scoring)**: count (or otherwise score) inliers
//! - **[`TerminationCriterion`](core::TerminationCriterion)**: decide when
//!   multi-instance extraction stops
//!
//! [`extraction::InstanceExtractor`] combines a [`core::Ransac`] round with a
//! termination criterion; the functions in [`api`] are thin wrappers over it.
//!
//! ## Modules
//!
//! - **[`api`]**: High-level fitting functions
//! - **[`core`]**: Core traits and the single-round `Ransac` search
//! - **[`extraction`]**: The multi-instance extraction loop
//! - **[`estimators`]**: Line and circle minimal solvers
//! - **[`samplers`]**: Seeded uniform sampling
//! - **[`scoring`]**: Inlier-count scoring
//! - **[`models`]**: `Line` and `Circle`
//! - **[`settings`]**: Run configuration
//! - **[`types`]**: `Point` and `PointSet`

pub mod api;
pub mod core;
pub mod error;
pub mod estimators;
pub mod extraction;
pub mod models;
pub mod samplers;
pub mod scoring;
pub mod settings;
pub mod types;
pub mod utils;

// Re-export high-level API
pub use api::{estimate_circle, estimate_line, fit_circles, fit_lines, EstimationResult};

// Re-export core traits for easy access
pub use crate::core::{Estimator, Sampler, Scoring, StopReason, TerminationCriterion};

pub use error::FitError;
pub use extraction::{Detection, Extraction};
pub use models::{Circle, Line, Primitive};
pub use settings::RansacSettings;
pub use types::{Point, PointSet};
