//! Power analysis for one-sample mean tests: power curves and required
//! sample size.
//!
//! Power at a candidate true mean `mu` is computed from the standardized
//! effect `delta = (mu - mu0) / (sigma / sqrt(n))`:
//!
//! ```text
//! two-tailed:   F(-c - delta) + 1 - F(c - delta)     c = q(1 - alpha/2)
//! right-tailed: 1 - F(c - delta)                     c = q(1 - alpha)
//! left-tailed:  F(-c - delta)
//! ```
//!
//! where `F`/`q` are the standard normal CDF/quantile for a known
//! variance (z-test) and the Student-t CDF/quantile with n-1 degrees of
//! freedom otherwise. At `delta = 0` every tail type reduces to exactly
//! `alpha`, which is the defining correctness check of this module.

use serde::{Deserialize, Serialize};

use crate::constants::{POWER_CURVE_POINTS, POWER_CURVE_SPAN_SE};
use crate::distributions::{normal, student_t};
use crate::error::EngineError;
use crate::types::TailType;

/// A single point on a power curve.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PowerCurvePoint {
    /// Candidate true mean.
    pub mu: f64,
    /// Probability of rejecting H0 at that mean, in [0, 1].
    pub power: f64,
}

fn validate_common(sigma: f64, n: usize, alpha: f64) -> Result<(), EngineError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(EngineError::InvalidParameter {
            name: "alpha",
            value: alpha,
            constraint: "must lie in (0, 1)",
        });
    }
    if !(sigma > 0.0) || !sigma.is_finite() {
        return Err(EngineError::InvalidParameter {
            name: "sigma",
            value: sigma,
            constraint: "must be a positive finite number",
        });
    }
    if n < 2 {
        return Err(EngineError::InvalidParameter {
            name: "n",
            value: n as f64,
            constraint: "must be at least 2",
        });
    }
    Ok(())
}

/// Power of the mean test at a single candidate true mean.
///
/// `variance_known` selects the z-test construction; otherwise the
/// t-test with `n - 1` degrees of freedom is used. The result is
/// clamped to [0, 1].
///
/// # Errors
///
/// `InvalidParameter` for alpha outside (0, 1), non-positive sigma, or
/// n < 2.
pub fn power_at_mean(
    mu: f64,
    mu0: f64,
    sigma: f64,
    n: usize,
    alpha: f64,
    tail: TailType,
    variance_known: bool,
) -> Result<f64, EngineError> {
    validate_common(sigma, n, alpha)?;
    Ok(power_unchecked(mu, mu0, sigma, n, alpha, tail, variance_known))
}

fn power_unchecked(
    mu: f64,
    mu0: f64,
    sigma: f64,
    n: usize,
    alpha: f64,
    tail: TailType,
    variance_known: bool,
) -> f64 {
    let se = sigma / (n as f64).sqrt();
    let delta = (mu - mu0) / se;
    let df = (n - 1) as f64;

    let cdf = |x: f64| {
        if variance_known {
            normal::cdf(x)
        } else {
            student_t::cdf(x, df)
        }
    };
    let quantile = |p: f64| {
        if variance_known {
            normal::quantile(p)
        } else {
            student_t::quantile(p, df)
        }
    };

    let power = match tail {
        TailType::TwoTailed => {
            let c = quantile(1.0 - alpha / 2.0);
            cdf(-c - delta) + 1.0 - cdf(c - delta)
        }
        TailType::RightTailed => {
            let c = quantile(1.0 - alpha);
            1.0 - cdf(c - delta)
        }
        TailType::LeftTailed => {
            let c = quantile(1.0 - alpha);
            cdf(-c - delta)
        }
    };

    power.clamp(0.0, 1.0)
}

/// Generate a power curve over `mu0 ± 3 * (sigma / sqrt(n))`.
///
/// The sweep uses 61 points (0.1 standard-error increments), ordered by
/// `mu` ascending. The midpoint sits at `mu0`, where the power equals
/// `alpha` up to numerical tolerance.
///
/// # Errors
///
/// Same validation as [`power_at_mean`].
pub fn generate_power_curve(
    mu0: f64,
    sigma: f64,
    n: usize,
    alpha: f64,
    tail: TailType,
    variance_known: bool,
) -> Result<Vec<PowerCurvePoint>, EngineError> {
    validate_common(sigma, n, alpha)?;

    let se = sigma / (n as f64).sqrt();
    let step = 2.0 * POWER_CURVE_SPAN_SE * se / (POWER_CURVE_POINTS - 1) as f64;
    let start = mu0 - POWER_CURVE_SPAN_SE * se;

    let curve = (0..POWER_CURVE_POINTS)
        .map(|i| {
            let mu = start + i as f64 * step;
            PowerCurvePoint {
                mu,
                power: power_unchecked(mu, mu0, sigma, n, alpha, tail, variance_known),
            }
        })
        .collect();

    Ok(curve)
}

/// Smallest sample size achieving power `1 - beta` against the
/// alternative `mu1`, for a known-variance mean test.
///
/// Solves `n = ((z_a + z_{1-beta}) * sigma / |mu1 - mu0|)^2`, rounded up,
/// where `z_a` is `z_{1-alpha/2}` for a two-tailed test and `z_{1-alpha}`
/// otherwise. Never returns less than 2.
///
/// # Errors
///
/// `InvalidEffectSize` when `mu1 == mu0`; `InvalidParameter` for alpha
/// or beta outside (0, 1) or non-positive sigma.
pub fn required_sample_size(
    mu1: f64,
    mu0: f64,
    sigma: f64,
    alpha: f64,
    beta: f64,
    tail: TailType,
) -> Result<u64, EngineError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(EngineError::InvalidParameter {
            name: "alpha",
            value: alpha,
            constraint: "must lie in (0, 1)",
        });
    }
    if !(beta > 0.0 && beta < 1.0) {
        return Err(EngineError::InvalidParameter {
            name: "beta",
            value: beta,
            constraint: "must lie in (0, 1)",
        });
    }
    if !(sigma > 0.0) || !sigma.is_finite() {
        return Err(EngineError::InvalidParameter {
            name: "sigma",
            value: sigma,
            constraint: "must be a positive finite number",
        });
    }
    let effect = (mu1 - mu0).abs();
    if effect == 0.0 || !effect.is_finite() {
        return Err(EngineError::InvalidEffectSize);
    }

    let z_alpha = match tail {
        TailType::TwoTailed => normal::quantile(1.0 - alpha / 2.0),
        TailType::LeftTailed | TailType::RightTailed => normal::quantile(1.0 - alpha),
    };
    let z_power = normal::quantile(1.0 - beta);

    let n = ((z_alpha + z_power) * sigma / effect).powi(2);
    Ok((n.ceil() as u64).max(2))
}
