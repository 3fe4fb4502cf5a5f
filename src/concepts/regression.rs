//! Regression-to-the-mean study.
//!
//! Models a test/retest experiment: each subject has a latent ability, and
//! both test scores are that ability plus independent noise. Selecting the
//! top performers on the first test and re-measuring them shows their
//! second-test mean slide back toward the population mean — the extreme
//! first scores were partly luck.
//!
//! Ability and noise each get half the requested spread (σ/2), which fixes
//! the test–retest correlation at 0.5.

use crate::distributions::{ParameterError, SourceDistribution};
use crate::random::create_rng;
use crate::stats;

/// Parameters of the regression-to-the-mean study.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionRequest {
    /// True population mean of the measured trait.
    pub population_mean: f64,
    /// Overall score spread σ; ability and per-test noise each contribute σ/2.
    pub std_dev: f64,
    /// Number of subjects; must be ≥ 2.
    pub subjects: usize,
    /// Selection threshold as a percentile of first-test scores, in [0, 100).
    pub selection_percentile: f64,
    /// RNG seed.
    pub seed: u64,
}

/// Output of the regression-to-the-mean study.
#[derive(Debug, Clone, PartialEq)]
pub struct RegressionResult {
    /// First-test score per subject.
    pub test1: Vec<f64>,
    /// Second-test score per subject.
    pub test2: Vec<f64>,
    /// Indices of the subjects at or above the selection threshold.
    pub selected: Vec<usize>,
    /// First-test score at the selection percentile.
    pub threshold: f64,
    /// Mean first-test score, all subjects.
    pub mean_test1_all: f64,
    /// Mean second-test score, all subjects.
    pub mean_test2_all: f64,
    /// Mean first-test score of the selected group.
    pub mean_test1_selected: f64,
    /// Mean second-test score of the selected group.
    pub mean_test2_selected: f64,
    /// How far the selected group slid back: test1 minus test2 group means.
    pub regression_gap: f64,
    /// The gap as a percentage of the selected group's first-test mean
    /// (0 when that mean is 0).
    pub regression_gap_pct: f64,
    /// Pearson correlation between the two tests, if computable.
    pub test_retest_correlation: Option<f64>,
}

/// Runs the regression-to-the-mean study.
///
/// # Errors
/// Returns [`ParameterError::InvalidParameter`] if `subjects < 2`,
/// `std_dev ≤ 0`, the percentile is outside `[0, 100)`, or the population
/// mean is not finite.
///
/// # Examples
/// ```
/// use probalab::concepts::regression::{run, RegressionRequest};
///
/// let result = run(&RegressionRequest {
///     population_mean: 50.0,
///     std_dev: 15.0,
///     subjects: 200,
///     selection_percentile: 80.0,
///     seed: 42,
/// })
/// .unwrap();
/// // The top group scores lower on the retest
/// assert!(result.regression_gap > 0.0);
/// ```
pub fn run(request: &RegressionRequest) -> Result<RegressionResult, ParameterError> {
    if request.subjects < 2 {
        return Err(ParameterError::InvalidParameter(format!(
            "regression study requires at least 2 subjects, got {}",
            request.subjects
        )));
    }
    if !request.selection_percentile.is_finite()
        || !(0.0..100.0).contains(&request.selection_percentile)
    {
        return Err(ParameterError::InvalidParameter(format!(
            "selection percentile must be in [0, 100), got {}",
            request.selection_percentile
        )));
    }
    // Also covers non-finite mean and std_dev ≤ 0
    let ability = SourceDistribution::normal(request.population_mean, request.std_dev / 2.0)?;
    let noise = SourceDistribution::normal(0.0, request.std_dev / 2.0)?;

    let mut rng = create_rng(request.seed);
    let abilities = ability.sample_n(request.subjects, &mut rng)?;
    let noise1 = noise.sample_n(request.subjects, &mut rng)?;
    let noise2 = noise.sample_n(request.subjects, &mut rng)?;

    let test1: Vec<f64> = abilities.iter().zip(&noise1).map(|(a, e)| a + e).collect();
    let test2: Vec<f64> = abilities.iter().zip(&noise2).map(|(a, e)| a + e).collect();

    let threshold = stats::quantile(&test1, request.selection_percentile / 100.0)
        .expect("scores are finite and non-empty");
    // The maximum score always meets the threshold, so the group is non-empty
    let selected: Vec<usize> = test1
        .iter()
        .enumerate()
        .filter(|(_, &score)| score >= threshold)
        .map(|(i, _)| i)
        .collect();

    let selected_test1: Vec<f64> = selected.iter().map(|&i| test1[i]).collect();
    let selected_test2: Vec<f64> = selected.iter().map(|&i| test2[i]).collect();

    let mean_test1_all = stats::mean(&test1).expect("scores are finite and non-empty");
    let mean_test2_all = stats::mean(&test2).expect("scores are finite and non-empty");
    let mean_test1_selected =
        stats::mean(&selected_test1).expect("selected group is non-empty");
    let mean_test2_selected =
        stats::mean(&selected_test2).expect("selected group is non-empty");

    let regression_gap = mean_test1_selected - mean_test2_selected;
    let regression_gap_pct = if mean_test1_selected != 0.0 {
        regression_gap / mean_test1_selected * 100.0
    } else {
        0.0
    };

    let test_retest_correlation = pearson(&test1, &test2);

    Ok(RegressionResult {
        test1,
        test2,
        selected,
        threshold,
        mean_test1_all,
        mean_test2_all,
        mean_test1_selected,
        mean_test2_selected,
        regression_gap,
        regression_gap_pct,
        test_retest_correlation,
    })
}

/// Pearson correlation coefficient, `None` when either side is degenerate.
fn pearson(x: &[f64], y: &[f64]) -> Option<f64> {
    let cov = stats::covariance(x, y)?;
    let sx = stats::std_dev(x)?;
    let sy = stats::std_dev(y)?;
    if sx == 0.0 || sy == 0.0 {
        return None;
    }
    Some(cov / (sx * sy))
}
