//! Empirical (three-sigma) rule study.
//!
//! Draws a normal sample and measures how much of it falls within ±1σ, ±2σ,
//! and ±3σ of the requested mean, next to the theoretical 68/95/99.7%
//! coverages. The bands are anchored at the *requested* μ and σ — the point
//! of the chart is how the sample fills the theoretical bands, not its own
//! estimates.

use crate::distributions::{ParameterError, SourceDistribution};
use crate::histogram::{histogram, Histogram};
use crate::random::create_rng;
use crate::special::standard_normal_cdf;
use crate::stats;

/// Bin count for the density histogram behind the shaded bands.
const BINS: usize = 50;

/// Parameters of the three-sigma study.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalRuleRequest {
    /// Population mean μ.
    pub mean: f64,
    /// Population standard deviation σ; must be > 0.
    pub std_dev: f64,
    /// Number of draws; must be ≥ 1.
    pub sample_size: usize,
    /// RNG seed.
    pub seed: u64,
}

/// One ±kσ band with its observed and theoretical coverage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SigmaBand {
    /// Sigma multiplier k (1, 2, or 3).
    pub multiplier: u32,
    /// Band lower edge, μ − kσ.
    pub lower: f64,
    /// Band upper edge, μ + kσ.
    pub upper: f64,
    /// Fraction of the sample inside the band.
    pub observed: f64,
    /// Theoretical coverage 2Φ(k) − 1.
    pub expected: f64,
}

/// Output of the three-sigma study.
#[derive(Debug, Clone, PartialEq)]
pub struct EmpiricalRuleResult {
    /// Mean of the drawn sample.
    pub sample_mean: f64,
    /// Population standard deviation of the drawn sample.
    pub sample_std_dev: f64,
    /// The ±1σ, ±2σ, ±3σ bands.
    pub bands: [SigmaBand; 3],
    /// 50-bin density histogram of the sample.
    pub histogram: Histogram,
}

/// Runs the three-sigma study.
///
/// # Errors
/// Returns [`ParameterError::InvalidParameter`] if `sample_size == 0` or
/// the distribution parameters are out of domain.
///
/// # Examples
/// ```
/// use probalab::concepts::empirical_rule::{run, EmpiricalRuleRequest};
///
/// let result = run(&EmpiricalRuleRequest {
///     mean: 50.0,
///     std_dev: 10.0,
///     sample_size: 10_000,
///     seed: 42,
/// })
/// .unwrap();
/// // Roughly 68% of values within one sigma
/// assert!((result.bands[0].observed - 0.68).abs() < 0.03);
/// ```
pub fn run(request: &EmpiricalRuleRequest) -> Result<EmpiricalRuleResult, ParameterError> {
    if request.sample_size == 0 {
        return Err(ParameterError::InvalidParameter(
            "sample size must be a positive integer".into(),
        ));
    }
    let distribution = SourceDistribution::normal(request.mean, request.std_dev)?;

    let mut rng = create_rng(request.seed);
    let sample = distribution.sample_n(request.sample_size, &mut rng)?;

    let n = sample.len() as f64;
    let bands = [1_u32, 2, 3].map(|k| {
        let half_width = k as f64 * request.std_dev;
        let lower = request.mean - half_width;
        let upper = request.mean + half_width;
        let inside = sample.iter().filter(|&&x| x >= lower && x <= upper).count();
        SigmaBand {
            multiplier: k,
            lower,
            upper,
            observed: inside as f64 / n,
            expected: 2.0 * standard_normal_cdf(k as f64) - 1.0,
        }
    });

    Ok(EmpiricalRuleResult {
        sample_mean: stats::mean(&sample).expect("draws are finite and non-empty"),
        sample_std_dev: stats::population_std_dev(&sample)
            .expect("draws are finite and non-empty"),
        bands,
        histogram: histogram(&sample, BINS).expect("non-empty finite sample"),
    })
}
