//! Descriptive-statistic helpers shared by estimators and tests.
//!
//! Convention: wherever a dispersion estimate feeds a test or an
//! estimator, the SAMPLE standard deviation (n-1 divisor) is used.
//! Population central moments appear only inside skewness/kurtosis,
//! where the Jarque-Bera formula requires them. This convention is
//! applied uniformly across the engine.
//!
//! All functions degrade to NaN on empty or otherwise degenerate input;
//! they never panic. Length checks belong to the API boundary.

/// Arithmetic mean. NaN for an empty slice.
pub fn mean(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample variance (n-1 divisor). NaN for fewer than 2 observations.
pub fn sample_variance(data: &[f64]) -> f64 {
    let n = data.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / (n - 1) as f64
}

/// Sample standard deviation (n-1 divisor). NaN for fewer than 2 observations.
pub fn sample_std(data: &[f64]) -> f64 {
    sample_variance(data).sqrt()
}

/// Population variance (n divisor). NaN for an empty slice.
pub fn population_variance(data: &[f64]) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|x| (x - m) * (x - m)).sum::<f64>() / data.len() as f64
}

/// Central moment of the given order (population form).
fn central_moment(data: &[f64], order: i32) -> f64 {
    if data.is_empty() {
        return f64::NAN;
    }
    let m = mean(data);
    data.iter().map(|x| (x - m).powi(order)).sum::<f64>() / data.len() as f64
}

/// Population skewness: m3 / m2^(3/2). NaN for zero variance.
pub fn skewness(data: &[f64]) -> f64 {
    let m2 = central_moment(data, 2);
    if !(m2 > 0.0) {
        return f64::NAN;
    }
    central_moment(data, 3) / m2.powf(1.5)
}

/// Population kurtosis: m4 / m2^2 (raw, 3.0 for a normal distribution).
///
/// NaN for zero variance. Subtract 3 for the excess form.
pub fn kurtosis(data: &[f64]) -> f64 {
    let m2 = central_moment(data, 2);
    if !(m2 > 0.0) {
        return f64::NAN;
    }
    central_moment(data, 4) / (m2 * m2)
}

/// Quantile of a pre-sorted slice using the R-7 definition
/// (linear interpolation between order statistics).
///
/// The caller must pass data sorted ascending; no verification is
/// performed. NaN for an empty slice or p outside [0, 1].
pub fn quantile_sorted(sorted: &[f64], p: f64) -> f64 {
    if sorted.is_empty() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    let n = sorted.len();
    if n == 1 {
        return sorted[0];
    }

    let h = (n - 1) as f64 * p;
    let h_floor = h.floor() as usize;
    let h_frac = h - h.floor();

    if h_floor >= n - 1 {
        return sorted[n - 1];
    }
    if h_frac == 0.0 {
        return sorted[h_floor];
    }
    // Linear interpolation
    sorted[h_floor] + h_frac * (sorted[h_floor + 1] - sorted[h_floor])
}

/// Quantile of an unsorted slice (sorts a copy). See [`quantile_sorted`].
pub fn quantile(data: &[f64], p: f64) -> f64 {
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.total_cmp(b));
    quantile_sorted(&sorted, p)
}

/// Minimum of a slice. NaN for an empty slice.
pub fn min(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NAN, f64::min)
}

/// Maximum of a slice. NaN for an empty slice.
pub fn max(data: &[f64]) -> f64 {
    data.iter().copied().fold(f64::NAN, f64::max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_and_variance_basics() {
        let data = [2.0, 4.0, 6.0, 8.0];
        assert!((mean(&data) - 5.0).abs() < 1e-12);
        // Sample variance with n-1: (9+1+1+9)/3
        assert!((sample_variance(&data) - 20.0 / 3.0).abs() < 1e-12);
        // Population variance with n: 20/4
        assert!((population_variance(&data) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn degenerate_lengths_yield_nan() {
        assert!(mean(&[]).is_nan());
        assert!(sample_variance(&[1.0]).is_nan());
        assert!(sample_std(&[]).is_nan());
        assert!(skewness(&[3.0, 3.0, 3.0]).is_nan());
        assert!(kurtosis(&[3.0, 3.0, 3.0]).is_nan());
    }

    #[test]
    fn skewness_of_symmetric_data_is_zero() {
        let data = [-2.0, -1.0, 0.0, 1.0, 2.0];
        assert!(skewness(&data).abs() < 1e-12);
    }

    #[test]
    fn skewness_sign_follows_tail() {
        let right_tailed = [1.0, 1.0, 1.0, 2.0, 10.0];
        assert!(skewness(&right_tailed) > 0.0);
        let left_tailed = [-10.0, -2.0, -1.0, -1.0, -1.0];
        assert!(skewness(&left_tailed) < 0.0);
    }

    #[test]
    fn kurtosis_of_uniform_grid_is_platykurtic() {
        // Discrete uniform has raw kurtosis below 3
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let k = kurtosis(&data);
        assert!(k < 3.0, "uniform kurtosis = {k}");
        assert!(k > 1.0);
    }

    #[test]
    fn quantile_median_of_odd_length() {
        let data = [5.0, 1.0, 3.0, 2.0, 4.0];
        assert!((quantile(&data, 0.5) - 3.0).abs() < 1e-12);
    }

    #[test]
    fn quantile_interpolates() {
        let sorted = [1.0, 2.0, 3.0, 4.0];
        // h = 3 * 0.5 = 1.5 -> halfway between 2 and 3
        assert!((quantile_sorted(&sorted, 0.5) - 2.5).abs() < 1e-12);
        assert_eq!(quantile_sorted(&sorted, 0.0), 1.0);
        assert_eq!(quantile_sorted(&sorted, 1.0), 4.0);
    }

    #[test]
    fn quantile_empty_is_nan() {
        assert!(quantile_sorted(&[], 0.5).is_nan());
        assert!(quantile_sorted(&[1.0], 1.5).is_nan());
    }

    #[test]
    fn min_max_basics() {
        let data = [3.0, -1.0, 7.0, 2.0];
        assert_eq!(min(&data), -1.0);
        assert_eq!(max(&data), 7.0);
        assert!(min(&[]).is_nan());
    }
}
