//! # distfit
//!
//! Statistical inference engine for mean-test power analysis and
//! distribution goodness-of-fit.
//!
//! The crate computes:
//! - Power curves and required sample sizes for one-sample mean tests
//!   (z-test for known variance, t-test otherwise)
//! - Parameter estimates for normal, uniform, exponential, and poisson
//!   families, with degenerate-data fallbacks
//! - Goodness-of-fit statistics, p-values, critical values, and reject
//!   decisions for Kolmogorov-Smirnov, chi-square, Anderson-Darling,
//!   and Jarque-Bera
//! - An auto-test sweep over every applicable distribution/test pair
//!   with a ranked recommendation
//!
//! Every function is a pure, stateless transformation of its inputs.
//! Invalid arguments are rejected at the boundary with [`EngineError`];
//! inside the numeric core, degenerate values degrade to NaN instead of
//! panicking.
//!
//! ## Quick Start
//!
//! ```
//! use distfit::{generate_power_curve, run_auto_test, TailType};
//!
//! // Power of a two-tailed z-test across candidate true means
//! let curve = generate_power_curve(0.0, 1.0, 30, 0.05, TailType::TwoTailed, true).unwrap();
//! assert_eq!(curve.len(), 61);
//!
//! // Which distribution fits this sample best?
//! let sample: Vec<f64> = (0..50).map(|i| i as f64 / 49.0).collect();
//! let report = run_auto_test(&sample, 0.05, 10, None).unwrap();
//! println!("recommended: {:?}", report.recommended);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

// Core modules
mod auto;
mod constants;
mod error;
mod power;
mod types;

// Functional modules
pub mod distributions;
pub mod estimate;
pub mod gof;
pub mod histogram;
pub mod output;
pub mod stats;

// Re-exports for public API
pub use auto::{run_auto_test, AccuracyRecord, AutoTestReport, RankedResult};
pub use constants::{MIN_GOF_SAMPLE, NUM_BINS_RANGE, POWER_CURVE_POINTS};
pub use error::EngineError;
pub use estimate::{estimate_parameters, estimate_parameters_with, UniformFit};
pub use gof::ks::ecdf;
pub use gof::{execute_gof_test, GofOptions, GofResult};
pub use histogram::{equal_width_bins, Histogram};
pub use power::{generate_power_curve, power_at_mean, required_sample_size, PowerCurvePoint};
pub use types::{DistParams, Distribution, GofTest, TailType};
