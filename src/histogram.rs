//! Equal-width histogram binning.
//!
//! The chi-square test consumes this directly; it is also exposed for
//! callers rendering observed-versus-expected charts.

use serde::{Deserialize, Serialize};

/// Equal-width histogram over the observed range of a sample.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Histogram {
    /// Bin edges, length `counts.len() + 1`.
    pub edges: Vec<f64>,
    /// Observation count per bin.
    pub counts: Vec<usize>,
    /// Width of each bin.
    pub bin_width: f64,
}

impl Histogram {
    /// Number of bins.
    pub fn n_bins(&self) -> usize {
        self.counts.len()
    }
}

/// Bin `sample` into `num_bins` equal-width intervals spanning
/// `[min(sample), max(sample)]`.
///
/// A collapsed range (all observations equal) is widened by ±0.5 so the
/// bin width stays positive; every observation then lands in the middle
/// bin. Returns `None` for an empty sample, `num_bins == 0`, or
/// non-finite observations.
pub fn equal_width_bins(sample: &[f64], num_bins: usize) -> Option<Histogram> {
    if sample.is_empty() || num_bins == 0 || sample.iter().any(|v| !v.is_finite()) {
        return None;
    }

    let mut min = f64::INFINITY;
    let mut max = f64::NEG_INFINITY;
    for &x in sample {
        min = min.min(x);
        max = max.max(x);
    }
    if max - min < 1e-300 {
        min -= 0.5;
        max += 0.5;
    }

    let bin_width = (max - min) / num_bins as f64;

    let mut edges = Vec::with_capacity(num_bins + 1);
    for i in 0..=num_bins {
        edges.push(min + i as f64 * bin_width);
    }

    let mut counts = vec![0_usize; num_bins];
    for &x in sample {
        let bin = ((x - min) / bin_width).floor() as usize;
        // The maximum lands exactly on the upper edge; fold it into the last bin
        counts[bin.min(num_bins - 1)] += 1;
    }

    Some(Histogram {
        edges,
        counts,
        bin_width,
    })
}
