//! Chi-square goodness-of-fit over binned counts.
//!
//! Continuous families are binned into equal-width intervals with the
//! outer bins extended to the full support, so expected counts sum to
//! n. Poisson uses one category per integer value with the upper tail
//! lumped into a final ">= m" category.
//!
//! Expected counts below 5 make the approximation weak; the result is
//! still returned and the caller decides how to treat it.

use super::TestOutcome;
use crate::distributions::chi_squared;
use crate::histogram;
use crate::types::{DistParams, Distribution};

// Poisson categories are lumped beyond this value to bound the sweep.
const MAX_DISCRETE_CATEGORY: u64 = 100;

/// Statistic and category count for the binned comparison.
fn binned_statistic(sample: &[f64], params: &DistParams, num_bins: usize) -> (f64, usize) {
    match params.distribution() {
        Distribution::Poisson => discrete_statistic(sample, params),
        _ => continuous_statistic(sample, params, num_bins),
    }
}

fn continuous_statistic(sample: &[f64], params: &DistParams, num_bins: usize) -> (f64, usize) {
    let Some(hist) = histogram::equal_width_bins(sample, num_bins) else {
        return (f64::NAN, num_bins);
    };
    let n = sample.len() as f64;
    let k = hist.n_bins();

    let mut stat = 0.0;
    for (i, &observed) in hist.counts.iter().enumerate() {
        // Outer bins absorb the tail probability beyond the observed range
        let lo = if i == 0 { 0.0 } else { params.cdf(hist.edges[i]) };
        let hi = if i == k - 1 {
            1.0
        } else {
            params.cdf(hist.edges[i + 1])
        };
        let expected = n * (hi - lo);
        stat += pearson_term(observed as f64, expected);
    }
    (stat, k)
}

fn discrete_statistic(sample: &[f64], params: &DistParams) -> (f64, usize) {
    let n = sample.len() as f64;
    let max_k = sample
        .iter()
        .map(|&x| x.floor().max(0.0) as u64)
        .max()
        .unwrap_or(0);
    // Categories 0..m-1 plus a lumped ">= m" tail
    let m = max_k.clamp(1, MAX_DISCRETE_CATEGORY);

    let mut observed = vec![0.0_f64; m as usize + 1];
    for &x in sample {
        let k = x.floor().max(0.0) as u64;
        observed[k.min(m) as usize] += 1.0;
    }

    let mut stat = 0.0;
    for k in 0..m {
        let expected = n * params.pmf(k);
        stat += pearson_term(observed[k as usize], expected);
    }
    let tail_expected = n * (1.0 - params.cdf(m as f64 - 1.0));
    stat += pearson_term(observed[m as usize], tail_expected);

    (stat, m as usize + 1)
}

fn pearson_term(observed: f64, expected: f64) -> f64 {
    if expected.is_nan() {
        return f64::NAN;
    }
    if expected <= 0.0 {
        // Nothing expected and nothing observed contributes nothing;
        // observations in a zero-probability category blow the statistic up
        return if observed == 0.0 {
            0.0
        } else {
            observed * observed / 1e-10
        };
    }
    let diff = observed - expected;
    diff * diff / expected
}

pub(crate) fn run(
    sample: &[f64],
    params: &DistParams,
    alpha: f64,
    num_bins: usize,
    estimated_params: usize,
) -> TestOutcome {
    let (statistic, categories) = binned_statistic(sample, params, num_bins);
    let df = (categories.saturating_sub(1).saturating_sub(estimated_params)).max(1) as u64;

    let p_value = 1.0 - chi_squared::cdf(statistic, df as f64);
    let critical_value = chi_squared::quantile(1.0 - alpha, df as f64);

    TestOutcome {
        statistic,
        p_value,
        critical_value: Some(critical_value),
        degrees_of_freedom: Some(df),
    }
}
