//! Goodness-of-fit test suite.
//!
//! Four tests, each a pure function of (sample, fitted parameters,
//! significance level): Kolmogorov-Smirnov, chi-square,
//! Anderson-Darling, and Jarque-Bera. Every result carries the
//! statistic, the p-value, a critical value, degrees of freedom where
//! the test has them, and the reject decision.
//!
//! The critical value is always obtained by inverting the same p-value
//! function that produced the decision, so `p_value < alpha` and
//! `statistic > critical_value` agree exactly for every result.

pub mod anderson_darling;
pub mod chi_square;
pub mod jarque_bera;
pub mod ks;

use serde::{Deserialize, Serialize};

use crate::constants::{MIN_GOF_SAMPLE, NUM_BINS_RANGE};
use crate::error::EngineError;
use crate::types::{DistParams, Distribution, GofTest};

/// Outcome of a single goodness-of-fit test.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GofResult {
    /// Which test produced this result.
    pub test: GofTest,
    /// Distribution family under test.
    pub distribution: Distribution,
    /// Test statistic on the test's native scale.
    pub statistic: f64,
    /// Probability of a statistic at least this extreme under H0.
    pub p_value: f64,
    /// Statistic threshold at which the decision flips at this alpha.
    pub critical_value: Option<f64>,
    /// Degrees of freedom, for tests that have them.
    pub degrees_of_freedom: Option<u64>,
    /// Number of observations tested.
    pub sample_size: usize,
    /// Significance level the decision was made at.
    pub significance_level: f64,
    /// Whether H0 (the sample follows the distribution) is rejected.
    pub is_reject: bool,
}

/// Per-invocation knobs for [`execute_gof_test`].
#[derive(Debug, Clone, Copy)]
pub struct GofOptions {
    /// Bin count for the chi-square test. Ignored by the other tests.
    pub num_bins: usize,
    /// How many parameters were estimated from the sample, for the
    /// chi-square degrees-of-freedom correction. Defaults to the
    /// distribution's full parameter count (the fit-then-test path).
    pub estimated_params: Option<usize>,
}

impl Default for GofOptions {
    fn default() -> Self {
        Self {
            num_bins: 10,
            estimated_params: None,
        }
    }
}

/// Statistic, p-value, and decision support produced by one test.
pub(crate) struct TestOutcome {
    pub statistic: f64,
    pub p_value: f64,
    pub critical_value: Option<f64>,
    pub degrees_of_freedom: Option<u64>,
}

/// Run one goodness-of-fit test.
///
/// `params` must belong to `distribution`; pass the output of
/// [`crate::estimate::estimate_parameters`] or user-supplied values.
///
/// # Errors
///
/// - `InsufficientSample` for fewer than 5 observations.
/// - `InvalidParameter` for alpha outside (0, 1), non-finite sample
///   values, mismatched or non-finite `params`, or a chi-square bin
///   count outside [5, 50].
/// - `UnsupportedCombination` when the test does not apply to the
///   distribution (KS on poisson, AD or JB on anything but normal).
pub fn execute_gof_test(
    sample: &[f64],
    test: GofTest,
    distribution: Distribution,
    alpha: f64,
    params: &DistParams,
    options: GofOptions,
) -> Result<GofResult, EngineError> {
    validate_boundary(sample, alpha)?;
    if params.distribution() != distribution || !params.is_finite() {
        return Err(EngineError::InvalidParameter {
            name: "params",
            value: f64::NAN,
            constraint: "must be finite parameters of the distribution under test",
        });
    }
    if !test.applies_to(distribution) {
        return Err(EngineError::UnsupportedCombination { test, distribution });
    }
    if test == GofTest::ChiSquare
        && !(NUM_BINS_RANGE.0..=NUM_BINS_RANGE.1).contains(&options.num_bins)
    {
        return Err(EngineError::InvalidParameter {
            name: "num_bins",
            value: options.num_bins as f64,
            constraint: "must lie in [5, 50]",
        });
    }

    let estimated = options
        .estimated_params
        .unwrap_or_else(|| distribution.param_count());

    let outcome = match test {
        GofTest::KolmogorovSmirnov => ks::run(sample, params, alpha),
        GofTest::ChiSquare => chi_square::run(sample, params, alpha, options.num_bins, estimated),
        GofTest::AndersonDarling => anderson_darling::run(sample, params, alpha),
        GofTest::JarqueBera => jarque_bera::run(sample, alpha),
    };

    Ok(GofResult {
        test,
        distribution,
        statistic: outcome.statistic,
        p_value: outcome.p_value,
        critical_value: outcome.critical_value,
        degrees_of_freedom: outcome.degrees_of_freedom,
        sample_size: sample.len(),
        significance_level: alpha,
        is_reject: outcome.p_value < alpha,
    })
}

pub(crate) fn validate_boundary(sample: &[f64], alpha: f64) -> Result<(), EngineError> {
    if !(alpha > 0.0 && alpha < 1.0) {
        return Err(EngineError::InvalidParameter {
            name: "alpha",
            value: alpha,
            constraint: "must lie in (0, 1)",
        });
    }
    if sample.len() < MIN_GOF_SAMPLE {
        return Err(EngineError::InsufficientSample {
            min_required: MIN_GOF_SAMPLE,
            actual: sample.len(),
        });
    }
    if let Some(&bad) = sample.iter().find(|v| !v.is_finite()) {
        return Err(EngineError::InvalidParameter {
            name: "sample",
            value: bad,
            constraint: "observations must be finite",
        });
    }
    Ok(())
}

/// Invert a strictly decreasing p-value function at `alpha` by
/// bisection over `[lo, hi]` on the statistic axis.
///
/// Because the decision and the critical value come from the same
/// function, `p < alpha` and `statistic > critical` cannot disagree.
pub(crate) fn critical_from_p<F>(p_of: F, alpha: f64, mut lo: f64, mut hi: f64) -> f64
where
    F: Fn(f64) -> f64,
{
    for _ in 0..200 {
        let mid = 0.5 * (lo + hi);
        if mid <= lo || mid >= hi {
            break;
        }
        if p_of(mid) > alpha {
            lo = mid;
        } else {
            hi = mid;
        }
    }
    0.5 * (lo + hi)
}
