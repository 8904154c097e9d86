//! Fixed numeric policy shared across the engine.

/// Number of points on a generated power curve.
///
/// The sweep covers mu0 ± 3 standard errors in increments of 0.1 SE,
/// which gives 61 points including both endpoints.
pub const POWER_CURVE_POINTS: usize = 61;

/// Half-width of the power-curve sweep, in standard errors.
pub const POWER_CURVE_SPAN_SE: f64 = 3.0;

/// Minimum sample length accepted by any goodness-of-fit test.
pub const MIN_GOF_SAMPLE: usize = 5;

/// Valid range for the chi-square bin count.
pub const NUM_BINS_RANGE: (usize, usize) = (5, 50);

/// Ranking bonus added to the p-value when it exceeds [`BONUS_THRESHOLD`].
pub const RANKING_BONUS: f64 = 0.05;

/// P-value above which a result earns the ranking bonus.
pub const BONUS_THRESHOLD: f64 = 0.1;

/// Per-test score multipliers used by the auto-test ranking.
///
/// Anderson-Darling is weighted above 1.0 because it is the most
/// powerful of the four against its (normal-only) alternative; the
/// chi-square and Jarque-Bera weights discount their coarser p-value
/// approximations.
pub mod method_weight {
    /// Kolmogorov-Smirnov.
    pub const KS: f64 = 1.0;
    /// Chi-square.
    pub const CHI_SQUARE: f64 = 0.9;
    /// Anderson-Darling.
    pub const ANDERSON_DARLING: f64 = 1.1;
    /// Jarque-Bera.
    pub const JARQUE_BERA: f64 = 0.8;
}
