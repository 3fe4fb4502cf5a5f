//! Fixed-bin-count histograms.
//!
//! The charts render equal-width histograms with a caller-chosen bin count
//! (50 bins for the empirical-rule view, 30 for the CLT and comparison
//! views, 20 for the small-sample view). Both raw counts and normalized
//! densities are produced so either axis convention can be plotted.

/// An equal-width histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// Bin edges (length = bins + 1).
    pub edges: Vec<f64>,
    /// Number of observations per bin.
    pub counts: Vec<usize>,
    /// Normalized densities per bin: count / (n · bin_width), so the bars
    /// integrate to 1.
    pub densities: Vec<f64>,
    /// Common bin width.
    pub bin_width: f64,
}

impl Histogram {
    /// Total number of observations across all bins.
    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Number of bins.
    pub fn bins(&self) -> usize {
        self.counts.len()
    }
}

/// Computes an equal-width histogram over the data's own range.
///
/// Zero-range data (all observations identical) degrades to a single
/// unit-width bin centered on the value, so degenerate but valid samples
/// (e.g. a Binomial with p = 0) still render.
///
/// # Returns
/// - `None` if `data` is empty, `bins == 0`, or data contains NaN/Inf.
///
/// # Examples
/// ```
/// use probalab::histogram::histogram;
/// let data = [0.0, 1.0, 2.0, 3.0, 4.0];
/// let h = histogram(&data, 4).unwrap();
/// assert_eq!(h.counts, vec![1, 1, 1, 2]);
/// assert_eq!(h.total(), 5);
/// ```
pub fn histogram(data: &[f64], bins: usize) -> Option<Histogram> {
    if data.is_empty() || bins == 0 || !data.iter().all(|v| v.is_finite()) {
        return None;
    }
    let lo = data.iter().cloned().reduce(f64::min)?;
    let hi = data.iter().cloned().reduce(f64::max)?;
    if hi - lo < f64::MIN_POSITIVE {
        return Some(degenerate(data.len(), lo));
    }
    histogram_in_range(data, bins, lo, hi)
}

/// Computes an equal-width histogram over an explicit `[lo, hi]` range.
///
/// Observations outside the range are clamped into the first/last bin,
/// which lets two samples share identical bin edges for overlaid plots.
///
/// # Returns
/// - `None` if `data` is empty, `bins == 0`, `lo >= hi`, or any input is
///   not finite.
pub fn histogram_in_range(data: &[f64], bins: usize, lo: f64, hi: f64) -> Option<Histogram> {
    if data.is_empty() || bins == 0 || !data.iter().all(|v| v.is_finite()) {
        return None;
    }
    if !lo.is_finite() || !hi.is_finite() || lo >= hi {
        return None;
    }

    let bin_width = (hi - lo) / bins as f64;
    if !bin_width.is_normal() || bin_width <= 0.0 {
        return None;
    }
    let mut edges = Vec::with_capacity(bins + 1);
    for i in 0..=bins {
        edges.push(lo + i as f64 * bin_width);
    }

    let mut counts = vec![0_usize; bins];
    for &x in data {
        let raw = ((x - lo) / bin_width).floor();
        // Clamp: values at (or beyond) either end land in the edge bins
        let bin = if raw < 0.0 {
            0
        } else {
            (raw as usize).min(bins - 1)
        };
        counts[bin] += 1;
    }

    let norm = 1.0 / (data.len() as f64 * bin_width);
    let densities = counts.iter().map(|&c| c as f64 * norm).collect();

    Some(Histogram {
        edges,
        counts,
        densities,
        bin_width,
    })
}

/// Single-bin histogram for zero-range data.
fn degenerate(count: usize, value: f64) -> Histogram {
    Histogram {
        edges: vec![value - 0.5, value + 0.5],
        counts: vec![count],
        densities: vec![1.0],
        bin_width: 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_sum_to_n() {
        let data: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let h = histogram(&data, 10).unwrap();
        assert_eq!(h.bins(), 10);
        assert_eq!(h.edges.len(), 11);
        assert_eq!(h.total(), 100);
        // Uniform grid data → even bins
        assert!(h.counts.iter().all(|&c| c == 10));
    }

    #[test]
    fn densities_integrate_to_one() {
        let data: Vec<f64> = (0..1000).map(|i| (i as f64 * 0.7).sin()).collect();
        let h = histogram(&data, 25).unwrap();
        let integral: f64 = h.densities.iter().sum::<f64>() * h.bin_width;
        assert!((integral - 1.0).abs() < 1e-10, "integral = {integral}");
    }

    #[test]
    fn max_value_lands_in_last_bin() {
        let data = [0.0, 1.0, 2.0, 3.0, 4.0];
        let h = histogram(&data, 4).unwrap();
        assert_eq!(h.counts, vec![1, 1, 1, 2]);
    }

    #[test]
    fn zero_range_degrades_to_single_bin() {
        let h = histogram(&[5.0, 5.0, 5.0], 30).unwrap();
        assert_eq!(h.bins(), 1);
        assert_eq!(h.counts, vec![3]);
        assert_eq!(h.edges, vec![4.5, 5.5]);
    }

    #[test]
    fn invalid_inputs() {
        assert!(histogram(&[], 10).is_none());
        assert!(histogram(&[1.0, 2.0], 0).is_none());
        assert!(histogram(&[1.0, f64::NAN], 10).is_none());
        assert!(histogram_in_range(&[1.0], 10, 2.0, 1.0).is_none());
        assert!(histogram_in_range(&[1.0], 10, 0.0, f64::INFINITY).is_none());
    }

    #[test]
    fn shared_range_clamps_outliers() {
        let data = [-10.0, 0.1, 0.5, 0.9, 10.0];
        let h = histogram_in_range(&data, 2, 0.0, 1.0).unwrap();
        assert_eq!(h.total(), 5);
        assert_eq!(h.counts[0], 2); // -10.0 and 0.1
        assert_eq!(h.counts[1], 3); // 0.5, 0.9, 10.0
    }

    #[test]
    fn shared_edges_align_between_samples() {
        let a = [0.0, 0.2, 0.4];
        let b = [0.6, 0.8, 1.0];
        let ha = histogram_in_range(&a, 5, 0.0, 1.0).unwrap();
        let hb = histogram_in_range(&b, 5, 0.0, 1.0).unwrap();
        assert_eq!(ha.edges, hb.edges);
    }
}
