//! Jarque-Bera moment test for normality.
//!
//! `JB = (n/6) * (S^2 + (K - 3)^2 / 4)` with population skewness S and
//! raw kurtosis K, asymptotically chi-square with 2 degrees of freedom.
//! Normal-only; the dispatch refuses other families.

use super::TestOutcome;
use crate::distributions::chi_squared;
use crate::stats;

/// Jarque-Bera statistic. NaN for a zero-variance sample.
pub fn statistic(sample: &[f64]) -> f64 {
    let n = sample.len() as f64;
    let s = stats::skewness(sample);
    let k = stats::kurtosis(sample);
    n / 6.0 * (s * s + (k - 3.0) * (k - 3.0) / 4.0)
}

pub(crate) fn run(sample: &[f64], alpha: f64) -> TestOutcome {
    let jb = statistic(sample);
    let p_value = 1.0 - chi_squared::cdf(jb, 2.0);
    let critical_value = chi_squared::quantile(1.0 - alpha, 2.0);

    TestOutcome {
        statistic: jb,
        p_value,
        critical_value: Some(critical_value),
        degrees_of_freedom: Some(2),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_mesokurtic_data_scores_low() {
        // Symmetric sample with tails heavier than a uniform grid
        let sample = [
            -2.2, -1.4, -1.0, -0.7, -0.45, -0.3, -0.15, -0.05, 0.05, 0.15, 0.3, 0.45, 0.7, 1.0,
            1.4, 2.2,
        ];
        let out = run(&sample, 0.05);
        assert!(out.statistic < out.critical_value.unwrap());
        assert!(out.p_value > 0.05, "p = {}", out.p_value);
    }

    #[test]
    fn skewed_data_scores_high() {
        let sample: Vec<f64> = (1..=60).map(|i| (i as f64 / 10.0).exp()).collect();
        let out = run(&sample, 0.05);
        assert!(out.statistic > out.critical_value.unwrap());
        assert!(out.p_value < 0.01, "p = {}", out.p_value);
    }

    #[test]
    fn critical_value_is_chi2_quantile() {
        let out = run(&[-1.0, -0.5, 0.0, 0.5, 1.0], 0.05);
        assert!((out.critical_value.unwrap() - 5.991).abs() < 0.01);
        assert_eq!(out.degrees_of_freedom, Some(2));
    }

    #[test]
    fn constant_sample_degrades_to_nan() {
        let out = run(&[3.0; 10], 0.05);
        assert!(out.statistic.is_nan());
        assert!(out.p_value.is_nan());
    }
}
