//! Central limit theorem study.
//!
//! Repeats "draw a sample, take its mean" many times and shows that the
//! trial means pile up in a normal-looking distribution no matter what the
//! source looks like, with spread shrinking as σ/√n. A Jarque–Bera
//! statistic quantifies "normal-looking"; the progression sweep replays the
//! study over growing sample sizes for the animated view.

use rand::Rng;

use crate::distributions::{ParameterError, SourceDistribution};
use crate::histogram::{histogram, Histogram};
use crate::random::create_rng;
use crate::stats::{self, NormalityTest};

/// Bin count for the trial-means histogram.
const BINS: usize = 30;

/// Sample sizes swept by [`progression`].
pub const PROGRESSION_SIZES: [usize; 7] = [2, 5, 10, 20, 30, 50, 100];

/// Parameters of the CLT study.
#[derive(Debug, Clone, PartialEq)]
pub struct CltRequest {
    /// Source distribution the trials draw from.
    pub distribution: SourceDistribution,
    /// Draws per trial; must be ≥ 1.
    pub sample_size: usize,
    /// Number of trials; must be ≥ 1.
    pub trials: usize,
    /// RNG seed.
    pub seed: u64,
}

/// Output of the CLT study.
#[derive(Debug, Clone, PartialEq)]
pub struct CltResult {
    /// One mean per trial.
    pub trial_means: Vec<f64>,
    /// Mean of the trial means.
    pub mean_of_means: f64,
    /// Population standard deviation of the trial means.
    pub std_dev_of_means: f64,
    /// Analytic expectation of the source (where the means should center).
    pub expected_mean: f64,
    /// Theoretical standard error σ/√n.
    pub expected_std_error: f64,
    /// Jarque–Bera normality statistic of the trial means, if computable
    /// (requires ≥ 8 trials with nonzero spread).
    pub normality: Option<NormalityTest>,
    /// 30-bin histogram of the trial means.
    pub histogram: Histogram,
}

/// One stage of the sample-size progression.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CltStage {
    /// Draws per trial at this stage.
    pub sample_size: usize,
    /// Mean of the trial means.
    pub mean_of_means: f64,
    /// Population standard deviation of the trial means.
    pub std_dev_of_means: f64,
    /// Theoretical standard error σ/√n at this stage.
    pub expected_std_error: f64,
}

/// Computes the mean of each of `trials` samples of `sample_size` draws.
///
/// # Errors
/// Returns [`ParameterError::InvalidParameter`] if either count is zero or
/// the distribution parameters are out of domain.
pub fn sample_means<R: Rng>(
    distribution: &SourceDistribution,
    sample_size: usize,
    trials: usize,
    rng: &mut R,
) -> Result<Vec<f64>, ParameterError> {
    if sample_size == 0 {
        return Err(ParameterError::InvalidParameter(
            "sample size must be a positive integer".into(),
        ));
    }
    if trials == 0 {
        return Err(ParameterError::InvalidParameter(
            "trial count must be a positive integer".into(),
        ));
    }
    distribution.validate()?;

    let mut means = Vec::with_capacity(trials);
    for _ in 0..trials {
        let draw = distribution.sample_n(sample_size, rng)?;
        means.push(stats::mean(&draw).expect("draws are finite and non-empty"));
    }
    Ok(means)
}

/// Runs the CLT study.
///
/// # Errors
/// Returns [`ParameterError::InvalidParameter`] on zero counts or
/// out-of-domain distribution parameters.
///
/// # Examples
/// ```
/// use probalab::concepts::central_limit::{run, CltRequest};
/// use probalab::distributions::SourceDistribution;
///
/// let result = run(&CltRequest {
///     distribution: SourceDistribution::uniform(0.0, 1.0).unwrap(),
///     sample_size: 30,
///     trials: 1000,
///     seed: 42,
/// })
/// .unwrap();
/// assert_eq!(result.trial_means.len(), 1000);
/// // Means of a U(0,1) sample center on 0.5
/// assert!((result.mean_of_means - 0.5).abs() < 0.01);
/// ```
pub fn run(request: &CltRequest) -> Result<CltResult, ParameterError> {
    let mut rng = create_rng(request.seed);
    let trial_means = sample_means(
        &request.distribution,
        request.sample_size,
        request.trials,
        &mut rng,
    )?;

    let mean_of_means = stats::mean(&trial_means).expect("means are finite and non-empty");
    let std_dev_of_means =
        stats::population_std_dev(&trial_means).expect("means are finite and non-empty");

    Ok(CltResult {
        normality: stats::jarque_bera(&trial_means),
        histogram: histogram(&trial_means, BINS).expect("non-empty finite sample"),
        mean_of_means,
        std_dev_of_means,
        expected_mean: request.distribution.mean(),
        expected_std_error: request.distribution.std_dev()
            / (request.sample_size as f64).sqrt(),
        trial_means,
    })
}

/// Replays the study over [`PROGRESSION_SIZES`], one stage per size.
///
/// Each stage draws its own trials from a fresh RNG derived from the seed,
/// so stages are independent and individually reproducible.
///
/// # Errors
/// Returns [`ParameterError::InvalidParameter`] on a zero trial count or
/// out-of-domain distribution parameters.
pub fn progression(
    distribution: &SourceDistribution,
    trials: usize,
    seed: u64,
) -> Result<Vec<CltStage>, ParameterError> {
    let mut stages = Vec::with_capacity(PROGRESSION_SIZES.len());
    for (i, &sample_size) in PROGRESSION_SIZES.iter().enumerate() {
        let mut rng = create_rng(seed.wrapping_add(i as u64));
        let means = sample_means(distribution, sample_size, trials, &mut rng)?;
        stages.push(CltStage {
            sample_size,
            mean_of_means: stats::mean(&means).expect("means are finite and non-empty"),
            std_dev_of_means: stats::population_std_dev(&means)
                .expect("means are finite and non-empty"),
            expected_std_error: distribution.std_dev() / (sample_size as f64).sqrt(),
        });
    }
    Ok(stages)
}
