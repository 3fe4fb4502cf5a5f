//! The simulation engine: one request in, one result out.
//!
//! [`run_simulation`] is the operation behind every chart refresh. It is a
//! pure function of its request — same seed, same output — and carries no
//! state between invocations; the host UI re-runs it on each widget change.

use crate::distributions::{ParameterError, SourceDistribution};
use crate::histogram::{histogram, Histogram};
use crate::random::create_rng;
use crate::stats;

/// Default histogram bin count used by request constructors.
pub const DEFAULT_BINS: usize = 30;

/// Parameters of a single simulation run.
///
/// Built fresh per UI interaction and never mutated afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationRequest {
    /// What to sample from.
    pub distribution: SourceDistribution,
    /// Draws per trial; must be ≥ 1.
    pub sample_size: usize,
    /// Number of trials; must be ≥ 1.
    pub trials: usize,
    /// Histogram bin count; must be ≥ 1.
    pub bins: usize,
    /// RNG seed; a fixed seed reproduces the run exactly.
    pub seed: u64,
}

impl SimulationRequest {
    /// Convenience constructor with the default bin count.
    pub fn new(
        distribution: SourceDistribution,
        sample_size: usize,
        trials: usize,
        seed: u64,
    ) -> Self {
        Self {
            distribution,
            sample_size,
            trials,
            bins: DEFAULT_BINS,
            seed,
        }
    }
}

/// Central quantiles of the simulated values.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PercentileBands {
    /// 5th percentile.
    pub p5: f64,
    /// First quartile.
    pub p25: f64,
    /// Median.
    pub median: f64,
    /// Third quartile.
    pub p75: f64,
    /// 95th percentile.
    pub p95: f64,
}

/// Output of one simulation run, consumed once by the rendering layer.
#[derive(Debug, Clone, PartialEq)]
pub struct SimulationResult {
    /// All sampled values, trial-major; length = `sample_size × trials`.
    pub values: Vec<f64>,
    /// Mean of each trial's draws; length = `trials`.
    pub trial_means: Vec<f64>,
    /// Mean over all values.
    pub mean: f64,
    /// Population standard deviation over all values.
    pub std_dev: f64,
    /// Central percentile bands over all values.
    pub bands: PercentileBands,
    /// Equal-width histogram of all values.
    pub histogram: Histogram,
}

/// Runs one simulation.
///
/// Draws `sample_size × trials` pseudo-random values from the requested
/// distribution, computes each trial's mean, and summarizes the aggregate
/// with mean, standard deviation, percentile bands, and a histogram.
///
/// # Errors
/// Returns [`ParameterError::InvalidParameter`] if `sample_size`, `trials`,
/// or `bins` is zero, if their product overflows, or if the distribution
/// parameters are out of domain. Validation happens before any sampling.
///
/// # Examples
/// ```
/// use probalab::distributions::SourceDistribution;
/// use probalab::engine::{run_simulation, SimulationRequest};
///
/// let request = SimulationRequest::new(
///     SourceDistribution::normal(0.0, 1.0).unwrap(),
///     100,
///     10,
///     42,
/// );
/// let result = run_simulation(&request).unwrap();
/// assert_eq!(result.values.len(), 1000);
/// assert_eq!(result.trial_means.len(), 10);
/// ```
pub fn run_simulation(request: &SimulationRequest) -> Result<SimulationResult, ParameterError> {
    if request.sample_size == 0 {
        return Err(ParameterError::InvalidParameter(
            "sample size must be a positive integer".into(),
        ));
    }
    if request.trials == 0 {
        return Err(ParameterError::InvalidParameter(
            "trial count must be a positive integer".into(),
        ));
    }
    if request.bins == 0 {
        return Err(ParameterError::InvalidParameter(
            "histogram bin count must be a positive integer".into(),
        ));
    }
    let total = request
        .sample_size
        .checked_mul(request.trials)
        .ok_or_else(|| {
            ParameterError::InvalidParameter(
                "sample size × trial count overflows the addressable range".into(),
            )
        })?;
    request.distribution.validate()?;

    let mut rng = create_rng(request.seed);
    let mut values = Vec::with_capacity(total);
    let mut trial_means = Vec::with_capacity(request.trials);

    for _ in 0..request.trials {
        let draw = request.distribution.sample_n(request.sample_size, &mut rng)?;
        let trial_mean = stats::mean(&draw).expect("draws are finite and non-empty");
        trial_means.push(trial_mean);
        values.extend(draw);
    }

    let mean = stats::mean(&values).expect("draws are finite and non-empty");
    let std_dev = stats::population_std_dev(&values).expect("draws are finite and non-empty");

    let mut sorted = values.clone();
    sorted.sort_unstable_by(|a, b| a.partial_cmp(b).expect("draws are finite"));
    let q = |p: f64| stats::quantile_sorted(&sorted, p).expect("sorted sample is non-empty");
    let bands = PercentileBands {
        p5: q(0.05),
        p25: q(0.25),
        median: q(0.5),
        p75: q(0.75),
        p95: q(0.95),
    };

    let histogram =
        histogram(&values, request.bins).expect("non-empty finite sample with bins ≥ 1");

    Ok(SimulationResult {
        values,
        trial_means,
        mean,
        std_dev,
        bands,
        histogram,
    })
}
