//! Student's t-distribution CDF, PDF, and quantile.

use super::normal;
use super::special::{ln_gamma, regularized_incomplete_beta};

/// CDF of Student's t-distribution with `df` degrees of freedom.
///
/// Uses the incomplete beta function with `x = df / (df + t²)`:
/// `F(t) = 1 - I_x(df/2, 1/2) / 2` for t >= 0, mirrored for t < 0.
/// Returns NaN for df <= 0.
pub fn cdf(t: f64, df: f64) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    if t == 0.0 {
        return 0.5;
    }
    let x = df / (df + t * t);
    let ib = regularized_incomplete_beta(x, df / 2.0, 0.5);
    if t >= 0.0 {
        1.0 - ib / 2.0
    } else {
        ib / 2.0
    }
}

/// PDF of Student's t-distribution.
pub fn pdf(t: f64, df: f64) -> f64 {
    if t.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    let half_df = df / 2.0;
    let log_pdf = ln_gamma(half_df + 0.5)
        - 0.5 * (df * std::f64::consts::PI).ln()
        - ln_gamma(half_df)
        - (half_df + 0.5) * (1.0 + t * t / df).ln();
    log_pdf.exp()
}

/// Quantile of Student's t-distribution.
///
/// Newton-Raphson from the normal quantile as the starting point;
/// converges in a handful of iterations for the df values the engine
/// encounters (df >= 1). Returns NaN for p outside (0, 1) or df <= 0.
pub fn quantile(p: f64, df: f64) -> f64 {
    if p.is_nan() || df.is_nan() || df <= 0.0 || p <= 0.0 || p >= 1.0 {
        return f64::NAN;
    }
    if (p - 0.5).abs() < 1e-15 {
        return 0.0;
    }

    let mut t = normal::quantile(p);
    for _ in 0..50 {
        let c = cdf(t, df);
        let d = pdf(t, df);
        if d.abs() < 1e-300 {
            break;
        }
        let delta = (c - p) / d;
        t -= delta;
        if delta.abs() < 1e-12 * t.abs().max(1.0) {
            break;
        }
    }
    t
}
