//! Descriptive statistics with numerical stability guarantees.
//!
//! All functions handle edge cases explicitly (returning `None` rather than
//! panicking) and use numerically stable algorithms.
//!
//! # Algorithms
//!
//! - **Mean**: Neumaier compensated summation for O(ε) error independent of n.
//! - **Variance/StdDev**: Welford's online algorithm.
//!   Reference: Welford (1962), "Note on a Method for Calculating
//!   Corrected Sums of Squares and Products", *Technometrics* 4(3).
//! - **Quantile**: R-7 linear interpolation (default in R, Python, Excel).
//!   Reference: Hyndman & Fan (1996), "Sample Quantiles in Statistical
//!   Packages", *The American Statistician* 50(4).

use crate::special;

/// Computes the arithmetic mean using compensated summation.
///
/// # Returns
/// - `None` if `data` is empty or contains any NaN/Inf.
///
/// # Examples
/// ```
/// use probalab::stats::mean;
/// let v = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert!((mean(&v).unwrap() - 3.0).abs() < 1e-15);
/// ```
pub fn mean(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    Some(kahan_sum(data) / data.len() as f64)
}

/// Computes the sample variance (Bessel's correction, denominator `n − 1`)
/// using Welford's online algorithm.
///
/// # Returns
/// - `None` if `data.len() < 2` or data contains NaN/Inf.
///
/// # Examples
/// ```
/// use probalab::stats::variance;
/// let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
/// assert!((variance(&v).unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
pub fn variance(data: &[f64]) -> Option<f64> {
    if data.len() < 2 {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    acc.sample_variance()
}

/// Computes the population variance (denominator `n`).
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn population_variance(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut acc = WelfordAccumulator::new();
    for &x in data {
        acc.update(x);
    }
    acc.population_variance()
}

/// Computes the sample standard deviation, `sqrt(variance(data))`.
///
/// # Returns
/// - `None` if `data.len() < 2` or data contains NaN/Inf.
pub fn std_dev(data: &[f64]) -> Option<f64> {
    variance(data).map(f64::sqrt)
}

/// Computes the population standard deviation.
///
/// This is the convention of array libraries (NumPy's default), and the one
/// used throughout the study result types.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
pub fn population_std_dev(data: &[f64]) -> Option<f64> {
    population_variance(data).map(f64::sqrt)
}

/// Returns the minimum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn min(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.min(x))
        }
    })
}

/// Returns the maximum value in the slice.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
pub fn max(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    data.iter().copied().try_fold(f64::NEG_INFINITY, |acc, x| {
        if x.is_nan() {
            None
        } else {
            Some(acc.max(x))
        }
    })
}

/// Computes the median of `data` without mutating the input.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN.
///
/// # Examples
/// ```
/// use probalab::stats::median;
/// assert_eq!(median(&[3.0, 1.0, 2.0]), Some(2.0));
/// assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
/// ```
pub fn median(data: &[f64]) -> Option<f64> {
    if data.is_empty() {
        return None;
    }
    if data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));
    let n = sorted.len();
    if n % 2 == 1 {
        Some(sorted[n / 2])
    } else {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    }
}

/// Computes the `p`-th quantile using the R-7 linear interpolation method.
///
/// Matches `numpy.percentile` and the R default.
///
/// # Returns
/// - `None` if `data` is empty, `p` is outside `[0, 1]`, or data contains NaN.
///
/// # Examples
/// ```
/// use probalab::stats::quantile;
/// let data = [1.0, 2.0, 3.0, 4.0, 5.0];
/// assert_eq!(quantile(&data, 0.0), Some(1.0));
/// assert_eq!(quantile(&data, 0.5), Some(3.0));
/// assert_eq!(quantile(&data, 1.0), Some(5.0));
/// ```
pub fn quantile(data: &[f64], p: f64) -> Option<f64> {
    if data.is_empty() || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if data.iter().any(|x| x.is_nan()) {
        return None;
    }
    let mut sorted = data.to_vec();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("NaN filtered above"));
    quantile_sorted(&sorted, p)
}

/// Computes the `p`-th quantile on **pre-sorted** data (R-7 method).
///
/// Avoids the O(n log n) sort when computing multiple quantiles over the
/// same dataset. The caller must guarantee that `sorted_data` is sorted in
/// non-decreasing order.
///
/// # Returns
/// - `None` if `sorted_data` is empty or `p` is outside `[0, 1]`.
pub fn quantile_sorted(sorted_data: &[f64], p: f64) -> Option<f64> {
    let n = sorted_data.len();
    if n == 0 || !(0.0..=1.0).contains(&p) {
        return None;
    }
    if n == 1 {
        return Some(sorted_data[0]);
    }

    let h = (n - 1) as f64 * p;
    let j = h.floor() as usize;
    let g = h - h.floor();

    if j + 1 >= n {
        Some(sorted_data[n - 1])
    } else {
        Some((1.0 - g) * sorted_data[j] + g * sorted_data[j + 1])
    }
}

/// Computes Fisher's adjusted sample skewness (G₁) with bias correction.
///
/// Matches Excel `SKEW()` and `scipy.stats.skew(bias=False)`.
///
/// Reference: Joanes & Gill (1998), "Comparing measures of sample skewness
/// and kurtosis", *The Statistician* 47(1).
///
/// # Returns
/// - `None` if `data.len() < 3`, data contains NaN/Inf, or variance is zero.
///
/// # Examples
/// ```
/// use probalab::stats::skewness;
/// // Symmetric data → skewness = 0
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().abs() < 1e-14);
/// // Right-skewed data → positive skewness
/// assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]).unwrap() > 0.0);
/// ```
pub fn skewness(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 3 {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let nf = n as f64;
    let m = kahan_sum(data) / nf;
    let mut sum2 = 0.0;
    let mut sum3 = 0.0;
    for &x in data {
        let d = x - m;
        let d2 = d * d;
        sum2 += d2;
        sum3 += d2 * d;
    }
    let m2 = sum2 / nf;
    if m2 == 0.0 {
        return None;
    }
    let m3 = sum3 / nf;
    let g1 = m3 / m2.powf(1.5);
    let correction = (nf * (nf - 1.0)).sqrt() / (nf - 2.0);
    Some(correction * g1)
}

/// Computes Fisher's excess kurtosis (G₂) with bias correction.
///
/// Matches Excel `KURT()` and `scipy.stats.kurtosis(bias=False)`. Returns 0
/// for a normal distribution, positive for heavy tails, negative for light
/// tails.
///
/// # Returns
/// - `None` if `data.len() < 4`, data contains NaN/Inf, or variance is zero.
pub fn kurtosis(data: &[f64]) -> Option<f64> {
    let n = data.len();
    if n < 4 {
        return None;
    }
    if !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let nf = n as f64;
    let m = kahan_sum(data) / nf;
    let mut sum2 = 0.0;
    let mut sum4 = 0.0;
    for &x in data {
        let d = x - m;
        let d2 = d * d;
        sum2 += d2;
        sum4 += d2 * d2;
    }
    let s2 = sum2 / (nf - 1.0);
    if s2 == 0.0 {
        return None;
    }
    let sum_z4 = sum4 / (s2 * s2);
    let a = nf * (nf + 1.0) / ((nf - 1.0) * (nf - 2.0) * (nf - 3.0));
    let b = 3.0 * (nf - 1.0) * (nf - 1.0) / ((nf - 2.0) * (nf - 3.0));
    Some(a * sum_z4 - b)
}

/// Computes the sample covariance between two datasets (n−1 denominator).
///
/// # Returns
/// - `None` if `x.len() != y.len()`, `n < 2`, or data contains NaN/Inf.
///
/// # Examples
/// ```
/// use probalab::stats::covariance;
/// let x = [1.0, 2.0, 3.0, 4.0, 5.0];
/// let y = [2.0, 4.0, 6.0, 8.0, 10.0];
/// assert!((covariance(&x, &y).unwrap() - 5.0).abs() < 1e-14);
/// ```
pub fn covariance(x: &[f64], y: &[f64]) -> Option<f64> {
    let n = x.len();
    if n != y.len() || n < 2 {
        return None;
    }
    if !x.iter().chain(y.iter()).all(|v| v.is_finite()) {
        return None;
    }
    let nf = n as f64;
    let mean_x = kahan_sum(x) / nf;
    let mean_y = kahan_sum(y) / nf;
    let mut sum = 0.0;
    for i in 0..n {
        sum += (x[i] - mean_x) * (y[i] - mean_y);
    }
    Some(sum / (nf - 1.0))
}

/// Computes the running (cumulative) mean after each observation.
///
/// Element `i` of the output is the mean of `data[0..=i]`. This is the
/// convergence trace plotted by the law-of-large-numbers study. Uses a
/// compensated running sum so long traces stay accurate.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use probalab::stats::running_mean;
/// let trace = running_mean(&[1.0, 3.0, 5.0]).unwrap();
/// assert_eq!(trace, vec![1.0, 2.0, 3.0]);
/// ```
pub fn running_mean(data: &[f64]) -> Option<Vec<f64>> {
    if data.is_empty() || !data.iter().all(|x| x.is_finite()) {
        return None;
    }
    let mut out = Vec::with_capacity(data.len());
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for (i, &x) in data.iter().enumerate() {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
        out.push((sum + c) / (i + 1) as f64);
    }
    Some(out)
}

/// Neumaier compensated summation for O(ε) error independent of `n`.
///
/// Improved Kahan variant that also handles addends larger in magnitude
/// than the running sum.
///
/// Reference: Neumaier (1974), *Zeitschrift für Angewandte Mathematik und
/// Mechanik* 54(1).
pub fn kahan_sum(data: &[f64]) -> f64 {
    let mut sum = 0.0_f64;
    let mut c = 0.0_f64;
    for &x in data {
        let t = sum + x;
        if sum.abs() >= x.abs() {
            c += (sum - t) + x;
        } else {
            c += (x - t) + sum;
        }
        sum = t;
    }
    sum + c
}

// ---------------------------------------------------------------------------
// Welford online accumulator
// ---------------------------------------------------------------------------

/// Streaming accumulator for mean and variance.
///
/// Maintains a running mean and sum of squared deviations in a single pass
/// with O(1) memory, avoiding the catastrophic cancellation of the naive
/// `E[X²] − (E[X])²` formula.
///
/// Reference: Welford (1962), *Technometrics* 4(3), pp. 419–420.
///
/// # Examples
/// ```
/// use probalab::stats::WelfordAccumulator;
/// let mut acc = WelfordAccumulator::new();
/// for &x in &[2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0] {
///     acc.update(x);
/// }
/// assert!((acc.mean().unwrap() - 5.0).abs() < 1e-15);
/// assert!((acc.sample_variance().unwrap() - 4.571428571428571).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, Default)]
pub struct WelfordAccumulator {
    count: u64,
    mean_acc: f64,
    m2: f64,
}

impl WelfordAccumulator {
    /// Creates a new empty accumulator.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feeds a new sample into the accumulator.
    pub fn update(&mut self, value: f64) {
        self.count += 1;
        let delta = value - self.mean_acc;
        self.mean_acc += delta / self.count as f64;
        self.m2 += delta * (value - self.mean_acc);
    }

    /// Returns the number of samples seen so far.
    pub fn count(&self) -> u64 {
        self.count
    }

    /// Returns the running mean, or `None` if no samples have been added.
    pub fn mean(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.mean_acc)
        }
    }

    /// Returns the sample variance (n − 1 denominator), or `None` if fewer
    /// than 2 samples have been added.
    pub fn sample_variance(&self) -> Option<f64> {
        if self.count < 2 {
            None
        } else {
            Some(self.m2 / (self.count - 1) as f64)
        }
    }

    /// Returns the population variance (n denominator), or `None` if no
    /// samples have been added.
    pub fn population_variance(&self) -> Option<f64> {
        if self.count == 0 {
            None
        } else {
            Some(self.m2 / self.count as f64)
        }
    }
}

// ---------------------------------------------------------------------------
// Summary block
// ---------------------------------------------------------------------------

/// One-shot descriptive summary of a sample.
///
/// The block the comparison and small-sample studies display next to each
/// chart. Standard deviation uses the population convention; skewness and
/// kurtosis are `None` when the sample is too short or degenerate.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    /// Number of observations.
    pub count: usize,
    /// Arithmetic mean.
    pub mean: f64,
    /// Median (R-7).
    pub median: f64,
    /// Population standard deviation.
    pub std_dev: f64,
    /// Smallest observation.
    pub min: f64,
    /// Largest observation.
    pub max: f64,
    /// Bias-corrected sample skewness, if computable.
    pub skewness: Option<f64>,
    /// Bias-corrected excess kurtosis, if computable.
    pub kurtosis: Option<f64>,
}

/// Computes a [`Summary`] of the sample.
///
/// # Returns
/// - `None` if `data` is empty or contains NaN/Inf.
///
/// # Examples
/// ```
/// use probalab::stats::summary;
/// let s = summary(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
/// assert_eq!(s.count, 5);
/// assert!((s.mean - 3.0).abs() < 1e-15);
/// assert_eq!(s.median, 3.0);
/// assert_eq!(s.min, 1.0);
/// assert_eq!(s.max, 5.0);
/// ```
pub fn summary(data: &[f64]) -> Option<Summary> {
    Some(Summary {
        count: data.len(),
        mean: mean(data)?,
        median: median(data)?,
        std_dev: population_std_dev(data)?,
        min: min(data)?,
        max: max(data)?,
        skewness: skewness(data),
        kurtosis: kurtosis(data),
    })
}

// ---------------------------------------------------------------------------
// Normality statistic
// ---------------------------------------------------------------------------

/// Result of the Jarque–Bera normality test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NormalityTest {
    /// The JB statistic; ~ χ²(2) under the normality hypothesis.
    pub statistic: f64,
    /// Approximate p-value from the χ²(2) distribution.
    pub p_value: f64,
}

/// Jarque–Bera normality test: H₀: data is normally distributed.
///
/// # Algorithm
///
/// JB = (n/6) · [S² + K²/4]
///
/// where S is the sample skewness and K the excess kurtosis. JB ~ χ²(2)
/// under H₀, so small statistics (and large p-values) are consistent with
/// normality. The central-limit study uses this to quantify how normal the
/// distribution of trial means has become.
///
/// Reference: Jarque & Bera (1987), "A test for normality of observations
/// and regression residuals", *International Statistical Review* 55(2).
///
/// # Returns
/// - `None` if fewer than 8 observations, non-finite values, or zero
///   variance.
pub fn jarque_bera(data: &[f64]) -> Option<NormalityTest> {
    let n = data.len();
    if n < 8 {
        return None;
    }
    if !data.iter().all(|v| v.is_finite()) {
        return None;
    }

    let s = skewness(data)?;
    let k = kurtosis(data)?;

    let nf = n as f64;
    let jb = (nf / 6.0) * (s * s + k * k / 4.0);
    let p_value = 1.0 - special::chi_squared_cdf(jb, 2.0);

    Some(NormalityTest {
        statistic: jb,
        p_value,
    })
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mean_basic() {
        assert_eq!(mean(&[1.0, 2.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[]), None);
        assert_eq!(mean(&[1.0, f64::NAN]), None);
        assert_eq!(mean(&[1.0, f64::INFINITY]), None);
    }

    #[test]
    fn variance_textbook() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&v).unwrap() - 32.0 / 7.0).abs() < 1e-12);
        assert!((population_variance(&v).unwrap() - 4.0).abs() < 1e-12);
        assert!((population_std_dev(&v).unwrap() - 2.0).abs() < 1e-12);
    }

    #[test]
    fn variance_edge_cases() {
        assert_eq!(variance(&[1.0]), None);
        assert_eq!(variance(&[]), None);
        assert_eq!(population_variance(&[5.0]), Some(0.0));
        assert_eq!(std_dev(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn min_max_median() {
        let v = [3.0, 1.0, 4.0, 1.0, 5.0];
        assert_eq!(min(&v), Some(1.0));
        assert_eq!(max(&v), Some(5.0));
        assert_eq!(median(&v), Some(3.0));
        assert_eq!(median(&[4.0, 1.0, 3.0, 2.0]), Some(2.5));
        assert_eq!(min(&[]), None);
        assert_eq!(max(&[f64::NAN]), None);
    }

    #[test]
    fn quantile_r7() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0];
        assert_eq!(quantile(&data, 0.0), Some(1.0));
        assert_eq!(quantile(&data, 0.25), Some(2.0));
        assert_eq!(quantile(&data, 0.5), Some(3.0));
        assert_eq!(quantile(&data, 1.0), Some(5.0));
        // Interpolated: h = 3 * 0.8 = 2.4 on 4 points → 3.0 + 0.4*(4-3)
        assert!((quantile(&[1.0, 2.0, 3.0, 4.0], 0.8).unwrap() - 3.4).abs() < 1e-12);
        assert_eq!(quantile(&data, 1.5), None);
        assert_eq!(quantile(&[], 0.5), None);
    }

    #[test]
    fn quantile_sorted_single() {
        assert_eq!(quantile_sorted(&[7.0], 0.99), Some(7.0));
    }

    #[test]
    fn skewness_signs() {
        assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap().abs() < 1e-14);
        assert!(skewness(&[1.0, 2.0, 3.0, 4.0, 50.0]).unwrap() > 0.0);
        assert!(skewness(&[-50.0, 1.0, 2.0, 3.0, 4.0]).unwrap() < 0.0);
        assert_eq!(skewness(&[1.0, 2.0]), None);
        assert_eq!(skewness(&[5.0, 5.0, 5.0]), None);
    }

    #[test]
    fn kurtosis_tails() {
        // Uniform-ish data is platykurtic
        let flat: Vec<f64> = (1..=10).map(|i| i as f64).collect();
        assert!(kurtosis(&flat).unwrap() < 0.0);
        // A sharp outlier makes it leptokurtic
        let spiky = [0.0, 0.0, 0.0, 0.1, -0.1, 0.0, 0.0, 10.0];
        assert!(kurtosis(&spiky).unwrap() > 0.0);
        assert_eq!(kurtosis(&[1.0, 2.0, 3.0]), None);
    }

    #[test]
    fn covariance_perfect_linear() {
        let x = [1.0, 2.0, 3.0, 4.0, 5.0];
        let y = [2.0, 4.0, 6.0, 8.0, 10.0];
        assert!((covariance(&x, &y).unwrap() - 5.0).abs() < 1e-14);
        // Anti-correlated
        let z = [10.0, 8.0, 6.0, 4.0, 2.0];
        assert!((covariance(&x, &z).unwrap() + 5.0).abs() < 1e-14);
        assert_eq!(covariance(&x, &y[..3]), None);
    }

    #[test]
    fn running_mean_trace() {
        let trace = running_mean(&[2.0, 4.0, 6.0, 8.0]).unwrap();
        assert_eq!(trace, vec![2.0, 3.0, 4.0, 5.0]);
        assert_eq!(running_mean(&[]), None);
        assert_eq!(running_mean(&[1.0, f64::NAN]), None);
    }

    #[test]
    fn running_mean_last_equals_mean() {
        let data: Vec<f64> = (0..1000).map(|i| (i as f64).sin()).collect();
        let trace = running_mean(&data).unwrap();
        let m = mean(&data).unwrap();
        assert!((trace.last().unwrap() - m).abs() < 1e-12);
    }

    #[test]
    fn welford_matches_two_pass() {
        let data = [1.5, 2.5, 2.5, 2.75, 3.25, 4.75];
        let mut acc = WelfordAccumulator::new();
        for &x in &data {
            acc.update(x);
        }
        assert_eq!(acc.count(), 6);
        assert!((acc.mean().unwrap() - mean(&data).unwrap()).abs() < 1e-14);
        assert!((acc.sample_variance().unwrap() - variance(&data).unwrap()).abs() < 1e-14);
    }

    #[test]
    fn welford_empty() {
        let acc = WelfordAccumulator::new();
        assert_eq!(acc.mean(), None);
        assert_eq!(acc.sample_variance(), None);
        assert_eq!(acc.population_variance(), None);
    }

    #[test]
    fn summary_block() {
        let s = summary(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(s.count, 5);
        assert!((s.mean - 3.0).abs() < 1e-15);
        assert_eq!(s.median, 3.0);
        assert_eq!(s.min, 1.0);
        assert_eq!(s.max, 5.0);
        assert!(s.skewness.unwrap().abs() < 1e-14);
        assert!(s.kurtosis.is_some());
        assert!(summary(&[]).is_none());
        assert!(summary(&[1.0, f64::NAN]).is_none());
    }

    #[test]
    fn summary_short_sample_drops_moments() {
        let s = summary(&[1.0, 2.0]).unwrap();
        assert_eq!(s.skewness, None);
        assert_eq!(s.kurtosis, None);
    }

    #[test]
    fn jarque_bera_symmetric_vs_skewed() {
        // Symmetric, light-tailed data → small statistic
        let sym = [-1.5, -1.0, -0.5, -0.25, 0.0, 0.25, 0.5, 1.0, 1.5];
        let r = jarque_bera(&sym).unwrap();
        assert!(r.statistic < 3.0, "JB = {}", r.statistic);
        assert!(r.p_value > 0.2);

        // Strongly skewed data → larger statistic, smaller p
        let skewed = [0.1, 0.1, 0.2, 0.2, 0.3, 0.4, 0.5, 0.8, 1.5, 9.0];
        let r2 = jarque_bera(&skewed).unwrap();
        assert!(r2.statistic > r.statistic);
        assert!(r2.p_value < r.p_value);
    }

    #[test]
    fn jarque_bera_edge_cases() {
        assert!(jarque_bera(&[1.0; 7]).is_none()); // < 8
        assert!(jarque_bera(&[5.0; 10]).is_none()); // zero variance
        assert!(jarque_bera(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, f64::NAN]).is_none());
    }
}
