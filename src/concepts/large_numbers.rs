//! Law of large numbers study.
//!
//! Draws one long sample and traces the cumulative mean after every draw
//! against the analytic expectation the trace converges to.

use crate::distributions::{ParameterError, SourceDistribution};
use crate::random::create_rng;
use crate::stats;

/// Parameters of the LLN study.
#[derive(Debug, Clone, PartialEq)]
pub struct LlnRequest {
    /// Source distribution to draw from.
    pub distribution: SourceDistribution,
    /// Number of draws; must be ≥ 1.
    pub trials: usize,
    /// RNG seed.
    pub seed: u64,
}

/// Output of the LLN study.
#[derive(Debug, Clone, PartialEq)]
pub struct LlnResult {
    /// Cumulative mean after draw 1, 2, …, `trials`.
    pub running_means: Vec<f64>,
    /// Analytic expectation of the source.
    pub expected_mean: f64,
    /// The final cumulative mean.
    pub final_mean: f64,
    /// |final_mean − expected_mean|.
    pub final_abs_error: f64,
}

/// Runs the LLN study.
///
/// # Errors
/// Returns [`ParameterError::InvalidParameter`] if `trials == 0` or the
/// distribution parameters are out of domain.
///
/// # Examples
/// ```
/// use probalab::concepts::large_numbers::{run, LlnRequest};
/// use probalab::distributions::SourceDistribution;
///
/// let result = run(&LlnRequest {
///     distribution: SourceDistribution::exponential(1.0).unwrap(),
///     trials: 10_000,
///     seed: 42,
/// })
/// .unwrap();
/// assert_eq!(result.running_means.len(), 10_000);
/// assert!(result.final_abs_error < 0.1);
/// ```
pub fn run(request: &LlnRequest) -> Result<LlnResult, ParameterError> {
    if request.trials == 0 {
        return Err(ParameterError::InvalidParameter(
            "trial count must be a positive integer".into(),
        ));
    }
    request.distribution.validate()?;

    let mut rng = create_rng(request.seed);
    let sample = request.distribution.sample_n(request.trials, &mut rng)?;
    let running_means =
        stats::running_mean(&sample).expect("draws are finite and non-empty");

    let expected_mean = request.distribution.mean();
    let final_mean = *running_means.last().expect("trace is non-empty");

    Ok(LlnResult {
        running_means,
        expected_mean,
        final_mean,
        final_abs_error: (final_mean - expected_mean).abs(),
    })
}
