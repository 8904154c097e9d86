//! Core value types: distribution families, test kinds, tail types, and
//! the distribution parameter tagged-union.
//!
//! Routing is done through exhaustive matches on these enums, so the
//! applicability matrix (which tests apply to which distributions) is
//! checkable at compile time rather than through string comparison.

use serde::{Deserialize, Serialize};

use crate::distributions::{normal, special};

/// Distribution family under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Distribution {
    /// Normal (Gaussian), parameters `{mean, std}`.
    Normal,
    /// Continuous uniform on `[a, b]`.
    Uniform,
    /// Exponential with rate `lambda`.
    Exponential,
    /// Poisson with rate `lambda` (discrete).
    Poisson,
}

impl Distribution {
    /// All families, in the enumeration order used for ranking tie-breaks.
    pub const ALL: [Distribution; 4] = [
        Distribution::Normal,
        Distribution::Uniform,
        Distribution::Exponential,
        Distribution::Poisson,
    ];

    /// Whether the family is continuous (relevant for KS applicability).
    pub fn is_continuous(&self) -> bool {
        !matches!(self, Distribution::Poisson)
    }

    /// Number of parameters estimated from data for this family.
    pub fn param_count(&self) -> usize {
        match self {
            Distribution::Normal | Distribution::Uniform => 2,
            Distribution::Exponential | Distribution::Poisson => 1,
        }
    }
}

impl std::fmt::Display for Distribution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Distribution::Normal => "normal",
            Distribution::Uniform => "uniform",
            Distribution::Exponential => "exponential",
            Distribution::Poisson => "poisson",
        };
        write!(f, "{name}")
    }
}

/// Goodness-of-fit test kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GofTest {
    /// Kolmogorov-Smirnov (continuous distributions only).
    KolmogorovSmirnov,
    /// Chi-square over binned counts (all four families).
    ChiSquare,
    /// Anderson-Darling (normal only).
    AndersonDarling,
    /// Jarque-Bera moment test (normal only).
    JarqueBera,
}

impl GofTest {
    /// All tests, in the enumeration order used for ranking tie-breaks.
    pub const ALL: [GofTest; 4] = [
        GofTest::KolmogorovSmirnov,
        GofTest::ChiSquare,
        GofTest::AndersonDarling,
        GofTest::JarqueBera,
    ];

    /// Whether this test applies to the given distribution family.
    pub fn applies_to(&self, dist: Distribution) -> bool {
        match self {
            GofTest::KolmogorovSmirnov => dist.is_continuous(),
            GofTest::ChiSquare => true,
            GofTest::AndersonDarling | GofTest::JarqueBera => dist == Distribution::Normal,
        }
    }

    /// Ranking weight for the auto-test combined score.
    pub fn method_weight(&self) -> f64 {
        use crate::constants::method_weight;
        match self {
            GofTest::KolmogorovSmirnov => method_weight::KS,
            GofTest::ChiSquare => method_weight::CHI_SQUARE,
            GofTest::AndersonDarling => method_weight::ANDERSON_DARLING,
            GofTest::JarqueBera => method_weight::JARQUE_BERA,
        }
    }
}

impl std::fmt::Display for GofTest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GofTest::KolmogorovSmirnov => "Kolmogorov-Smirnov",
            GofTest::ChiSquare => "chi-square",
            GofTest::AndersonDarling => "Anderson-Darling",
            GofTest::JarqueBera => "Jarque-Bera",
        };
        write!(f, "{name}")
    }
}

/// Alternative-hypothesis orientation for mean tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TailType {
    /// H1: mu != mu0.
    TwoTailed,
    /// H1: mu < mu0.
    LeftTailed,
    /// H1: mu > mu0.
    RightTailed,
}

/// Parameters of a fully specified distribution.
///
/// This is the tagged-union form of the `{name: value}` parameter
/// mapping; [`DistParams::entries`] recovers the mapping for callers
/// that render parameter tables.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "distribution", rename_all = "lowercase")]
pub enum DistParams {
    /// Normal with location `mean` and scale `std`.
    Normal {
        /// Location parameter.
        mean: f64,
        /// Scale parameter (standard deviation).
        std: f64,
    },
    /// Uniform on `[a, b]`.
    Uniform {
        /// Lower bound.
        a: f64,
        /// Upper bound.
        b: f64,
    },
    /// Exponential with rate `lambda`.
    Exponential {
        /// Rate parameter.
        lambda: f64,
    },
    /// Poisson with rate `lambda`.
    Poisson {
        /// Rate parameter.
        lambda: f64,
    },
}

impl DistParams {
    /// The family these parameters describe.
    pub fn distribution(&self) -> Distribution {
        match self {
            DistParams::Normal { .. } => Distribution::Normal,
            DistParams::Uniform { .. } => Distribution::Uniform,
            DistParams::Exponential { .. } => Distribution::Exponential,
            DistParams::Poisson { .. } => Distribution::Poisson,
        }
    }

    /// Theoretical CDF at `x`.
    ///
    /// Degenerate parameters (std <= 0, lambda <= 0, a >= b) yield NaN
    /// rather than panicking; boundary validation is the caller's job.
    pub fn cdf(&self, x: f64) -> f64 {
        match *self {
            DistParams::Normal { mean, std } => {
                if std <= 0.0 || !std.is_finite() {
                    return f64::NAN;
                }
                normal::cdf((x - mean) / std)
            }
            DistParams::Uniform { a, b } => {
                if a >= b || !a.is_finite() || !b.is_finite() {
                    return f64::NAN;
                }
                ((x - a) / (b - a)).clamp(0.0, 1.0)
            }
            DistParams::Exponential { lambda } => {
                if lambda <= 0.0 || !lambda.is_finite() {
                    return f64::NAN;
                }
                if x <= 0.0 {
                    0.0
                } else {
                    1.0 - (-lambda * x).exp()
                }
            }
            DistParams::Poisson { lambda } => {
                if lambda <= 0.0 || !lambda.is_finite() {
                    return f64::NAN;
                }
                if x < 0.0 {
                    0.0
                } else {
                    // P(X <= k) = Q(k+1, lambda), the regularized upper gamma
                    1.0 - special::regularized_lower_gamma(x.floor() + 1.0, lambda)
                }
            }
        }
    }

    /// Probability mass at integer `k` (Poisson only; NaN otherwise).
    pub fn pmf(&self, k: u64) -> f64 {
        match *self {
            DistParams::Poisson { lambda } => {
                if lambda <= 0.0 || !lambda.is_finite() {
                    return f64::NAN;
                }
                let kf = k as f64;
                (kf * lambda.ln() - lambda - special::ln_gamma(kf + 1.0)).exp()
            }
            _ => f64::NAN,
        }
    }

    /// Parameter mapping as `(name, value)` pairs.
    pub fn entries(&self) -> Vec<(&'static str, f64)> {
        match *self {
            DistParams::Normal { mean, std } => vec![("mean", mean), ("std", std)],
            DistParams::Uniform { a, b } => vec![("a", a), ("b", b)],
            DistParams::Exponential { lambda } => vec![("lambda", lambda)],
            DistParams::Poisson { lambda } => vec![("lambda", lambda)],
        }
    }

    /// True if every parameter is finite.
    pub fn is_finite(&self) -> bool {
        self.entries().iter().all(|(_, v)| v.is_finite())
    }
}
