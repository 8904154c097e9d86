//! Standard normal CDF, PDF, and quantile (probit).

/// 1/sqrt(2*pi)
const FRAC_1_SQRT_2PI: f64 = 0.3989422804014327;

/// Standard normal CDF Φ(x), via Abramowitz & Stegun 26.2.17.
///
/// Maximum absolute error < 7.5e-8, comfortably inside the engine's
/// 4-decimal-place accuracy requirement (Φ(1.96) ≈ 0.9750).
pub fn cdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    if x == f64::INFINITY {
        return 1.0;
    }
    if x == f64::NEG_INFINITY {
        return 0.0;
    }

    // Symmetry: Φ(-x) = 1 - Φ(x)
    let abs_x = x.abs();
    let k = 1.0 / (1.0 + 0.2316419 * abs_x);
    let phi = FRAC_1_SQRT_2PI * (-0.5 * abs_x * abs_x).exp();
    let poly = k
        * (0.319381530
            + k * (-0.356563782 + k * (1.781477937 + k * (-1.821255978 + k * 1.330274429))));
    let cdf_abs = 1.0 - phi * poly;

    if x >= 0.0 {
        cdf_abs
    } else {
        1.0 - cdf_abs
    }
}

/// Standard normal PDF φ(x).
pub fn pdf(x: f64) -> f64 {
    if x.is_nan() {
        return f64::NAN;
    }
    FRAC_1_SQRT_2PI * (-0.5 * x * x).exp()
}

/// Inverse standard normal CDF (probit), via Abramowitz & Stegun 26.2.23.
///
/// Accurate to ~4.5e-4 for p in (0, 1). Returns ±∞ at the endpoints and
/// NaN outside [0, 1].
pub fn quantile(p: f64) -> f64 {
    if p.is_nan() || !(0.0..=1.0).contains(&p) {
        return f64::NAN;
    }
    if p == 0.0 {
        return f64::NEG_INFINITY;
    }
    if p == 1.0 {
        return f64::INFINITY;
    }

    // Symmetry: for p > 0.5 compute -probit(1-p)
    let (q, sign) = if p > 0.5 { (1.0 - p, 1.0) } else { (p, -1.0) };

    const C0: f64 = 2.515517;
    const C1: f64 = 0.802853;
    const C2: f64 = 0.010328;
    const D1: f64 = 1.432788;
    const D2: f64 = 0.189269;
    const D3: f64 = 0.001308;

    let t = (-2.0 * q.ln()).sqrt();
    let z = t - (C0 + C1 * t + C2 * t * t) / (1.0 + D1 * t + D2 * t * t + D3 * t * t * t);

    sign * z
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cdf_reference_table() {
        // 68-95-99.7 rule and common critical values
        assert!((cdf(1.0) - 0.8413).abs() < 1e-4);
        assert!((cdf(2.0) - 0.9772).abs() < 1e-4);
        assert!((cdf(1.645) - 0.9500).abs() < 1e-4);
        assert!((cdf(1.96) - 0.9750).abs() < 1e-4);
        assert!((cdf(2.576) - 0.9950).abs() < 1e-4);
    }

    #[test]
    fn cdf_symmetry() {
        for &x in &[0.5, 1.0, 1.5, 2.0, 3.0] {
            let sum = cdf(x) + cdf(-x);
            assert!((sum - 1.0).abs() < 1e-7, "Φ({x}) + Φ(-{x}) = {sum}");
        }
    }

    #[test]
    fn cdf_extremes() {
        assert_eq!(cdf(f64::INFINITY), 1.0);
        assert_eq!(cdf(f64::NEG_INFINITY), 0.0);
        assert!(cdf(f64::NAN).is_nan());
    }

    #[test]
    fn quantile_known_values() {
        assert!(quantile(0.5).abs() < 1e-4);
        assert!((quantile(0.975) - 1.96).abs() < 1e-2);
        assert!((quantile(0.95) - 1.645).abs() < 1e-2);
        assert!((quantile(0.8) - 0.842).abs() < 1e-2);
        assert!((quantile(0.025) + 1.96).abs() < 1e-2);
    }

    #[test]
    fn quantile_domain() {
        assert_eq!(quantile(0.0), f64::NEG_INFINITY);
        assert_eq!(quantile(1.0), f64::INFINITY);
        assert!(quantile(-0.1).is_nan());
        assert!(quantile(1.1).is_nan());
    }

    #[test]
    fn roundtrip_cdf_quantile() {
        for &p in &[0.01, 0.05, 0.1, 0.25, 0.5, 0.75, 0.9, 0.95, 0.99] {
            let z = quantile(p);
            assert!((cdf(z) - p).abs() < 0.002, "roundtrip failed for p={p}");
        }
    }

    #[test]
    fn pdf_peak() {
        assert!((pdf(0.0) - FRAC_1_SQRT_2PI).abs() < 1e-14);
    }
}
