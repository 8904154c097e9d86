//! Chi-squared distribution CDF and quantile.

use super::special::regularized_lower_gamma;

/// CDF of the chi-squared distribution with `df` degrees of freedom.
///
/// `F(x; k) = P(k/2, x/2)` via the regularized lower incomplete gamma.
/// Returns NaN for df <= 0, and 0 for x <= 0.
pub fn cdf(x: f64, df: f64) -> f64 {
    if x.is_nan() || df.is_nan() || df <= 0.0 {
        return f64::NAN;
    }
    if x <= 0.0 {
        return 0.0;
    }
    regularized_lower_gamma(df / 2.0, x / 2.0)
}

/// Quantile of the chi-squared distribution.
///
/// Bracketed bisection: doubles an upper bound until the CDF exceeds
/// `p`, then bisects. Robust for every df the engine produces.
/// Returns NaN for p outside (0, 1) or df <= 0.
pub fn quantile(p: f64, df: f64) -> f64 {
    if p.is_nan() || df.is_nan() || df <= 0.0 || p <= 0.0 || p >= 1.0 {
        return f64::NAN;
    }

    let mut hi = df.max(2.0);
    while cdf(hi, df) < p {
        hi *= 2.0;
        if hi > 1e15 {
            return hi;
        }
    }
    let mut lo = 0.0_f64;

    for _ in 0..200 {
        let mid = (lo + hi) / 2.0;
        if hi - lo < 1e-12 * mid.max(1e-15) {
            break;
        }
        if cdf(mid, df) < p {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    (lo + hi) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_boundaries() {
        assert_eq!(cdf(0.0, 5.0), 0.0);
        assert_eq!(cdf(-1.0, 5.0), 0.0);
        assert!(cdf(1.0, -1.0).is_nan());
    }

    #[test]
    fn cdf_exponential_special_case() {
        // chi2(2) has CDF 1 - exp(-x/2)
        for &x in &[1.0, 2.0, 5.0, 10.0] {
            let c = cdf(x, 2.0);
            let expected = 1.0 - (-x / 2.0).exp();
            assert!((c - expected).abs() < 1e-8);
        }
    }

    #[test]
    fn cdf_critical_values() {
        assert!((cdf(3.841, 1.0) - 0.95).abs() < 1e-3);
        assert!((cdf(5.991, 2.0) - 0.95).abs() < 1e-3);
        assert!((cdf(16.919, 9.0) - 0.95).abs() < 1e-3);
    }

    #[test]
    fn quantile_reference_table() {
        assert!((quantile(0.95, 1.0) - 3.841).abs() < 1e-2);
        assert!((quantile(0.95, 2.0) - 5.991).abs() < 1e-2);
        assert!((quantile(0.99, 2.0) - 9.210).abs() < 1e-2);
        assert!((quantile(0.95, 9.0) - 16.919).abs() < 1e-2);
    }

    #[test]
    fn quantile_roundtrip() {
        for &df in &[1.0, 2.0, 5.0, 12.0] {
            for &p in &[0.05, 0.1, 0.5, 0.9, 0.95, 0.99] {
                let x = quantile(p, df);
                assert!((cdf(x, df) - p).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn quantile_domain() {
        assert!(quantile(0.0, 5.0).is_nan());
        assert!(quantile(1.0, 5.0).is_nan());
        assert!(quantile(0.5, 0.0).is_nan());
    }
}
