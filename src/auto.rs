//! Auto-test orchestrator: run every applicable distribution/test pair,
//! rank the outcomes, and recommend a best-fitting family.
//!
//! Pairs are independent, so the sweep runs on the rayon thread pool;
//! scoring and ranking happen only after all results are collected, and
//! ties fall back to the fixed enumeration order of
//! `Distribution::ALL x GofTest::ALL`.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::constants::{BONUS_THRESHOLD, NUM_BINS_RANGE, RANKING_BONUS};
use crate::error::EngineError;
use crate::estimate::{estimate_parameters_with, UniformFit};
use crate::gof::{execute_gof_test, validate_boundary, GofOptions, GofResult};
use crate::types::{Distribution, GofTest};

/// A scored and ranked goodness-of-fit outcome.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedResult {
    /// The underlying test result.
    #[serde(flatten)]
    pub result: GofResult,
    /// `(p_value + bonus) * method_weight`; higher is a better fit.
    pub combined_score: f64,
    /// 1-based position after sorting by score descending.
    pub rank: usize,
}

/// How the caller-supplied ground-truth distribution fared.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccuracyRecord {
    /// The known true family.
    pub distribution: Distribution,
    /// Best rank any of its tests achieved.
    pub rank: usize,
    /// The p-value at that rank.
    pub p_value: f64,
}

/// Full output of one auto-test sweep.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoTestReport {
    /// Scored results, rank 1 first.
    pub results: Vec<RankedResult>,
    /// Family of the top-ranked result, if any result scored.
    pub recommended: Option<Distribution>,
    /// Present when the caller supplied a known distribution that
    /// produced at least one scored result.
    pub accuracy: Option<AccuracyRecord>,
    /// Pairs whose computation degenerated to NaN; excluded from
    /// ranking but reported for auditing.
    pub failed: Vec<GofResult>,
}

/// Run every applicable (distribution, test) pair against `sample`.
///
/// Parameters are estimated per family with the robust uniform variant
/// (outliers stretch a min/max fit badly when sweeping families the
/// data did not come from). Pairs that degenerate numerically are
/// recorded as failed with `is_reject = true` instead of aborting the
/// sweep.
///
/// # Errors
///
/// Same boundary validation as [`execute_gof_test`], applied once up
/// front: sample length, finiteness, alpha range, and `num_bins` range.
pub fn run_auto_test(
    sample: &[f64],
    alpha: f64,
    num_bins: usize,
    known: Option<Distribution>,
) -> Result<AutoTestReport, EngineError> {
    validate_boundary(sample, alpha)?;
    if !(NUM_BINS_RANGE.0..=NUM_BINS_RANGE.1).contains(&num_bins) {
        return Err(EngineError::InvalidParameter {
            name: "num_bins",
            value: num_bins as f64,
            constraint: "must lie in [5, 50]",
        });
    }

    let pairs: Vec<(usize, Distribution, GofTest)> = Distribution::ALL
        .into_iter()
        .flat_map(|dist| GofTest::ALL.into_iter().map(move |test| (dist, test)))
        .filter(|&(dist, test)| test.applies_to(dist))
        .enumerate()
        .map(|(idx, (dist, test))| (idx, dist, test))
        .collect();

    let options = GofOptions {
        num_bins,
        estimated_params: None,
    };

    let mut collected: Vec<(usize, GofResult)> = pairs
        .par_iter()
        .map(|&(idx, dist, test)| {
            let params = estimate_parameters_with(sample, dist, UniformFit::Robust);
            let result = execute_gof_test(sample, test, dist, alpha, &params, options)
                .unwrap_or_else(|_| failed_placeholder(test, dist, sample.len(), alpha));
            (idx, result)
        })
        .collect();
    // Restore enumeration order so the stable sort below breaks ties by it
    collected.sort_by_key(|&(idx, _)| idx);

    let mut failed = Vec::new();
    let mut scored = Vec::new();
    for (_, result) in collected {
        if result.p_value.is_finite() {
            scored.push(result);
        } else {
            failed.push(failed_mark(result));
        }
    }

    let mut results: Vec<RankedResult> = scored
        .into_iter()
        .map(|result| {
            let bonus = if result.p_value > BONUS_THRESHOLD {
                RANKING_BONUS
            } else {
                0.0
            };
            let combined_score = (result.p_value + bonus) * result.test.method_weight();
            RankedResult {
                result,
                combined_score,
                rank: 0,
            }
        })
        .collect();
    results.sort_by(|a, b| {
        b.combined_score
            .partial_cmp(&a.combined_score)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    for (i, r) in results.iter_mut().enumerate() {
        r.rank = i + 1;
    }

    let recommended = results.first().map(|r| r.result.distribution);
    let accuracy = known.and_then(|dist| {
        results
            .iter()
            .find(|r| r.result.distribution == dist)
            .map(|r| AccuracyRecord {
                distribution: dist,
                rank: r.rank,
                p_value: r.result.p_value,
            })
    });

    Ok(AutoTestReport {
        results,
        recommended,
        accuracy,
        failed,
    })
}

fn failed_placeholder(
    test: GofTest,
    distribution: Distribution,
    sample_size: usize,
    alpha: f64,
) -> GofResult {
    GofResult {
        test,
        distribution,
        statistic: f64::NAN,
        p_value: f64::NAN,
        critical_value: None,
        degrees_of_freedom: None,
        sample_size,
        significance_level: alpha,
        is_reject: true,
    }
}

// A degenerate pair counts as evidence against the fit
fn failed_mark(mut result: GofResult) -> GofResult {
    result.statistic = f64::NAN;
    result.p_value = f64::NAN;
    result.is_reject = true;
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn bell_sample() -> Vec<f64> {
        // Deterministic bell-shaped fixture via normal quantile spacing
        (1..=80)
            .map(|i| crate::distributions::normal::quantile(i as f64 / 81.0))
            .collect()
    }

    #[test]
    fn ranks_are_contiguous_from_one() {
        let report = run_auto_test(&bell_sample(), 0.05, 10, None).unwrap();
        for (i, r) in report.results.iter().enumerate() {
            assert_eq!(r.rank, i + 1);
        }
        assert!(!report.results.is_empty());
    }

    #[test]
    fn scores_are_sorted_descending() {
        let report = run_auto_test(&bell_sample(), 0.05, 10, None).unwrap();
        for w in report.results.windows(2) {
            assert!(w[0].combined_score >= w[1].combined_score);
        }
    }

    #[test]
    fn normal_data_recommends_normal() {
        let report = run_auto_test(&bell_sample(), 0.05, 10, Some(Distribution::Normal)).unwrap();
        assert_eq!(report.recommended, Some(Distribution::Normal));
        let acc = report.accuracy.unwrap();
        assert_eq!(acc.distribution, Distribution::Normal);
        assert_eq!(acc.rank, 1);
        assert!(acc.p_value > 0.05);
    }

    #[test]
    fn pair_count_matches_applicability_matrix() {
        // 4 tests for normal, 2 each for uniform/exponential, 1 for poisson
        let report = run_auto_test(&bell_sample(), 0.05, 10, None).unwrap();
        assert_eq!(report.results.len() + report.failed.len(), 9);
    }

    #[test]
    fn bonus_applies_above_threshold() {
        let report = run_auto_test(&bell_sample(), 0.05, 10, None).unwrap();
        for r in &report.results {
            let expected_bonus = if r.result.p_value > 0.1 { 0.05 } else { 0.0 };
            let expected = (r.result.p_value + expected_bonus) * r.result.test.method_weight();
            assert!((r.combined_score - expected).abs() < 1e-12);
        }
    }

    #[test]
    fn failed_pairs_do_not_abort_the_sweep() {
        // Negative-mean data makes the exponential and poisson fits fall
        // back to lambda = 1, which still produces finite results; a
        // constant sample degenerates JB instead
        let sample = [5.0, 5.0, 5.0, 5.0, 5.0, 5.0];
        let report = run_auto_test(&sample, 0.05, 10, None).unwrap();
        for f in &report.failed {
            assert!(f.statistic.is_nan());
            assert!(f.p_value.is_nan());
            assert!(f.is_reject);
        }
        // Ranked list only holds finite scores
        for r in &report.results {
            assert!(r.combined_score.is_finite());
        }
        assert_eq!(report.results.len() + report.failed.len(), 9);
    }

    #[test]
    fn boundary_validation_happens_once_up_front() {
        assert!(matches!(
            run_auto_test(&[1.0, 2.0], 0.05, 10, None),
            Err(EngineError::InsufficientSample { .. })
        ));
        let sample = bell_sample();
        assert!(matches!(
            run_auto_test(&sample, 0.05, 2, None),
            Err(EngineError::InvalidParameter { name: "num_bins", .. })
        ));
    }
}
