//! Parameter estimation: method-of-moments / MLE per distribution
//! family, with degenerate-data fallbacks.
//!
//! Estimators never return NaN or infinity. When a sample is degenerate
//! (zero variance, non-positive mean for a rate parameter, collapsed
//! range) the estimator falls back to a safe default so downstream tests
//! still receive usable parameters. The caller is expected to have
//! screened out non-finite observations at the boundary.

use crate::stats;
use crate::types::{DistParams, Distribution};

/// How to fit the bounds of a uniform distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum UniformFit {
    /// `a = min(sample)`, `b = max(sample)`. The MLE.
    #[default]
    MinMax,
    /// `a = max(min, Q1 - 3*IQR)`, `b = min(max, Q3 + 3*IQR)`.
    ///
    /// Used by the auto-test path to reduce sensitivity to a single
    /// outlier stretching the fitted support.
    Robust,
}

/// Estimate parameters for `dist` from `sample` using the default
/// (min/max) uniform fit.
pub fn estimate_parameters(sample: &[f64], dist: Distribution) -> DistParams {
    estimate_parameters_with(sample, dist, UniformFit::MinMax)
}

/// Estimate parameters for `dist` from `sample`, selecting the uniform
/// bound-fitting variant explicitly.
pub fn estimate_parameters_with(
    sample: &[f64],
    dist: Distribution,
    uniform_fit: UniformFit,
) -> DistParams {
    match dist {
        Distribution::Normal => estimate_normal(sample),
        Distribution::Uniform => estimate_uniform(sample, uniform_fit),
        Distribution::Exponential => DistParams::Exponential {
            lambda: rate_from_mean(sample).recip(),
        },
        Distribution::Poisson => DistParams::Poisson {
            lambda: rate_from_mean(sample),
        },
    }
}

/// Normal: mean plus sample standard deviation (n-1 divisor).
///
/// If the sample std is zero or non-finite, falls back to the square
/// root of the population variance, then to 1.0, so the scale parameter
/// stays strictly positive.
fn estimate_normal(sample: &[f64]) -> DistParams {
    let mean = finite_or(stats::mean(sample), 0.0);

    let mut std = stats::sample_std(sample);
    if !(std > 0.0) || !std.is_finite() {
        std = stats::population_variance(sample).sqrt();
    }
    if !(std > 0.0) || !std.is_finite() {
        std = 1.0;
    }

    DistParams::Normal { mean, std }
}

/// Uniform: observed range, optionally tightened by the IQR fence.
fn estimate_uniform(sample: &[f64], fit: UniformFit) -> DistParams {
    let min = stats::min(sample);
    let max = stats::max(sample);

    let (mut a, mut b) = match fit {
        UniformFit::MinMax => (min, max),
        UniformFit::Robust => {
            let q1 = stats::quantile(sample, 0.25);
            let q3 = stats::quantile(sample, 0.75);
            let iqr = q3 - q1;
            // Fence clamped to the observed range
            let lo = (q1 - 3.0 * iqr).max(min);
            let hi = (q3 + 3.0 * iqr).min(max);
            if lo < hi {
                (lo, hi)
            } else {
                (min, max)
            }
        }
    };

    if !a.is_finite() || !b.is_finite() {
        a = 0.0;
        b = 1.0;
    } else if a >= b {
        // Collapsed range: widen symmetrically so b - a stays positive
        a -= 0.5;
        b += 0.5;
    }

    DistParams::Uniform { a, b }
}

/// Shared rate fallback for exponential and poisson: a non-positive or
/// non-finite sample mean degrades to a rate of 1 rather than an invalid
/// parameter.
fn rate_from_mean(sample: &[f64]) -> f64 {
    let m = stats::mean(sample);
    if m > 0.0 && m.is_finite() {
        m
    } else {
        1.0
    }
}

fn finite_or(x: f64, fallback: f64) -> f64 {
    if x.is_finite() {
        x
    } else {
        fallback
    }
}
