//! Sampling-variability study (the "law of small numbers").
//!
//! Simulates many independent small samples and shows how widely their
//! means scatter — the visual argument for why conclusions drawn from tiny
//! samples are unreliable. Every simulated sample is reseeded from the base
//! seed plus its index, so any single simulation can be replayed alone.

use crate::distributions::{ParameterError, SourceDistribution};
use crate::histogram::{histogram, Histogram};
use crate::random::trial_rng;
use crate::stats::{self, Summary};

/// Bin count for the means histogram.
const BINS: usize = 20;

/// Parameters of the sampling-variability study.
#[derive(Debug, Clone, PartialEq)]
pub struct SmallSampleRequest {
    /// Source distribution each simulation draws from.
    pub distribution: SourceDistribution,
    /// Size of each small sample; must be ≥ 1.
    pub sample_size: usize,
    /// Number of simulated samples; must be ≥ 1.
    pub simulations: usize,
    /// Base RNG seed; simulation `i` uses `seed + i`.
    pub seed: u64,
}

/// Output of the sampling-variability study.
#[derive(Debug, Clone, PartialEq)]
pub struct SmallSampleResult {
    /// One mean per simulated sample.
    pub means: Vec<f64>,
    /// Descriptive summary of the means.
    pub summary: Summary,
    /// 20-bin histogram of the means.
    pub histogram: Histogram,
}

/// Runs the sampling-variability study.
///
/// # Errors
/// Returns [`ParameterError::InvalidParameter`] on zero counts or
/// out-of-domain distribution parameters.
///
/// # Examples
/// ```
/// use probalab::concepts::small_samples::{run, SmallSampleRequest};
/// use probalab::distributions::SourceDistribution;
///
/// let result = run(&SmallSampleRequest {
///     distribution: SourceDistribution::normal(0.0, 1.0).unwrap(),
///     sample_size: 5,
///     simulations: 500,
///     seed: 1000,
/// })
/// .unwrap();
/// assert_eq!(result.means.len(), 500);
/// ```
pub fn run(request: &SmallSampleRequest) -> Result<SmallSampleResult, ParameterError> {
    if request.sample_size == 0 {
        return Err(ParameterError::InvalidParameter(
            "sample size must be a positive integer".into(),
        ));
    }
    if request.simulations == 0 {
        return Err(ParameterError::InvalidParameter(
            "simulation count must be a positive integer".into(),
        ));
    }
    request.distribution.validate()?;

    let mut means = Vec::with_capacity(request.simulations);
    for i in 0..request.simulations {
        let mut rng = trial_rng(request.seed, i as u64);
        let sample = request.distribution.sample_n(request.sample_size, &mut rng)?;
        means.push(stats::mean(&sample).expect("draws are finite and non-empty"));
    }

    Ok(SmallSampleResult {
        summary: stats::summary(&means).expect("means are finite and non-empty"),
        histogram: histogram(&means, BINS).expect("non-empty finite sample"),
        means,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(sample_size: usize) -> SmallSampleRequest {
        SmallSampleRequest {
            distribution: SourceDistribution::normal(0.0, 1.0).unwrap(),
            sample_size,
            simulations: 500,
            seed: 1000,
        }
    }

    #[test]
    fn one_mean_per_simulation() {
        let result = run(&request(5)).unwrap();
        assert_eq!(result.means.len(), 500);
        assert_eq!(result.summary.count, 500);
        assert_eq!(result.histogram.total(), 500);
    }

    #[test]
    fn smaller_samples_scatter_more() {
        let tiny = run(&request(2)).unwrap();
        let moderate = run(&request(30)).unwrap();
        // Theoretical ratio of spreads is √(30/2) ≈ 3.9
        assert!(
            tiny.summary.std_dev > 2.0 * moderate.summary.std_dev,
            "n=2 spread {} vs n=30 spread {}",
            tiny.summary.std_dev,
            moderate.summary.std_dev
        );
    }

    #[test]
    fn means_center_on_expectation() {
        let result = run(&request(5)).unwrap();
        // SE of the grand mean ≈ (1/√5)/√500 ≈ 0.02
        assert!(result.summary.mean.abs() < 0.1);
    }

    #[test]
    fn per_simulation_seeding_is_stable_under_count_changes() {
        // Growing the simulation count must not disturb earlier simulations
        let short = run(&SmallSampleRequest {
            simulations: 100,
            ..request(5)
        })
        .unwrap();
        let long = run(&SmallSampleRequest {
            simulations: 200,
            ..request(5)
        })
        .unwrap();
        assert_eq!(short.means[..], long.means[..100]);
    }

    #[test]
    fn bimodal_source_works() {
        let result = run(&SmallSampleRequest {
            distribution: SourceDistribution::bimodal(-2.0, 1.0, 2.0, 1.0).unwrap(),
            sample_size: 4,
            simulations: 300,
            seed: 7,
        })
        .unwrap();
        assert_eq!(result.means.len(), 300);
        assert!(result.summary.mean.abs() < 0.5);
    }

    #[test]
    fn invalid_inputs_rejected() {
        let mut req = request(5);
        req.sample_size = 0;
        assert!(run(&req).is_err());

        let mut req = request(5);
        req.simulations = 0;
        assert!(run(&req).is_err());

        let mut req = request(5);
        req.distribution = SourceDistribution::Uniform { min: 1.0, max: 1.0 };
        assert!(run(&req).is_err());
    }

    #[test]
    fn reproducible_for_fixed_seed() {
        assert_eq!(run(&request(5)).unwrap(), run(&request(5)).unwrap());
    }
}
