//! Error taxonomy for the inference engine.
//!
//! All four kinds are detected at the API boundary before any numeric
//! work starts. The numeric core itself degrades to NaN sentinels rather
//! than raising, so these errors always carry enough context to be shown
//! to a user directly.

use crate::types::{Distribution, GofTest};

/// All errors produced by engine operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineError {
    /// A scalar argument is outside its valid domain.
    InvalidParameter {
        /// Name of the offending argument (e.g. `"alpha"`, `"sigma"`).
        name: &'static str,
        /// The value that was passed.
        value: f64,
        /// Human-readable constraint (e.g. `"must lie in (0, 1)"`).
        constraint: &'static str,
    },
    /// The sample is too short for the requested operation.
    InsufficientSample {
        /// Minimum number of observations required.
        min_required: usize,
        /// Number of observations actually provided.
        actual: usize,
    },
    /// Sample-size solving with a zero effect (mu1 == mu0).
    InvalidEffectSize,
    /// The requested test does not apply to the chosen distribution.
    UnsupportedCombination {
        /// The test that was requested.
        test: GofTest,
        /// The distribution it was requested against.
        distribution: Distribution,
    },
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EngineError::InvalidParameter {
                name,
                value,
                constraint,
            } => {
                write!(f, "invalid parameter {name} = {value}: {constraint}")
            }
            EngineError::InsufficientSample {
                min_required,
                actual,
            } => {
                write!(
                    f,
                    "insufficient sample: need at least {min_required} observations, got {actual}"
                )
            }
            EngineError::InvalidEffectSize => {
                write!(f, "invalid effect size: mu1 must differ from mu0")
            }
            EngineError::UnsupportedCombination { test, distribution } => {
                write!(f, "{test} does not apply to the {distribution} distribution")
            }
        }
    }
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages_name_the_argument() {
        let err = EngineError::InvalidParameter {
            name: "alpha",
            value: 1.5,
            constraint: "must lie in (0, 1)",
        };
        assert!(err.to_string().contains("alpha"));
        assert!(err.to_string().contains("1.5"));
    }

    #[test]
    fn unsupported_combination_names_both_sides() {
        let err = EngineError::UnsupportedCombination {
            test: GofTest::AndersonDarling,
            distribution: Distribution::Poisson,
        };
        let msg = err.to_string();
        assert!(msg.contains("Anderson-Darling"), "{msg}");
        assert!(msg.contains("poisson"), "{msg}");
    }
}
