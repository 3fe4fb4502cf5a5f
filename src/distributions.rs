//! Source distributions for the simulation engine.
//!
//! A [`SourceDistribution`] is what the UI's distribution dropdown maps to:
//! a validated parameter set with analytical moments, a PDF/PMF, balanced
//! sampling, and a plot-ready theoretical density curve.
//!
//! # Supported Distributions
//!
//! | Kind | Parameters | Mean | Variance |
//! |---|---|---|---|
//! | Normal | μ, σ | μ | σ² |
//! | Uniform | min, max | (min+max)/2 | (max−min)²/12 |
//! | Exponential | λ | 1/λ | 1/λ² |
//! | Bimodal | μ₁, σ₁, μ₂, σ₂ | (μ₁+μ₂)/2 | mixture formula |
//! | Binomial | n, p | n·p | n·p·(1−p) |
//! | Poisson | λ | λ | λ |
//!
//! The bimodal kind is an equal-weight mixture of two normals; a sample of
//! size n draws ⌊n/2⌋ values from the low component and the rest from the
//! high one, so both modes are always populated.

use rand::Rng;
use rand_distr::{Binomial, Distribution, Exp, Normal, Poisson, Uniform};

use crate::special;

/// Largest accepted Poisson rate; the sampler degrades beyond this.
const MAX_POISSON_RATE: f64 = 1e9;

/// Error type for invalid user-supplied parameters.
#[derive(Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter violates its domain constraints.
    InvalidParameter(String),
}

impl std::fmt::Display for ParameterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParameterError::InvalidParameter(msg) => {
                write!(f, "invalid parameter: {msg}")
            }
        }
    }
}

impl std::error::Error for ParameterError {}

/// Theoretical density data for plotting.
///
/// For continuous kinds `xs` is an evenly spaced grid and `ys` the PDF; for
/// discrete kinds `xs` enumerates the (truncated) support and `ys` the PMF,
/// rendered as bars rather than a curve.
#[derive(Debug, Clone, PartialEq)]
pub struct DensityCurve {
    /// Evaluation points.
    pub xs: Vec<f64>,
    /// PDF or PMF values at each point.
    pub ys: Vec<f64>,
    /// True for PMF bars (Binomial, Poisson).
    pub discrete: bool,
}

/// A validated source distribution for sampling.
///
/// Construct through the checked constructors ([`SourceDistribution::normal`]
/// and friends); literal construction is possible but every sampling entry
/// point re-runs [`validate`](SourceDistribution::validate), so out-of-domain
/// parameters surface as [`ParameterError`] rather than bad data.
#[derive(Debug, Clone, PartialEq)]
pub enum SourceDistribution {
    /// Normal (Gaussian) N(μ, σ²).
    Normal { mean: f64, std_dev: f64 },
    /// Continuous uniform on `[min, max)`.
    Uniform { min: f64, max: f64 },
    /// Exponential with rate λ (mean 1/λ).
    Exponential { rate: f64 },
    /// Equal-weight mixture of N(μ₁, σ₁²) and N(μ₂, σ₂²).
    Bimodal {
        mean_lo: f64,
        std_lo: f64,
        mean_hi: f64,
        std_hi: f64,
    },
    /// Binomial: successes in `trials` attempts with success probability `p`.
    Binomial { trials: u64, p: f64 },
    /// Poisson with rate λ.
    Poisson { rate: f64 },
}

impl SourceDistribution {
    /// Creates a normal distribution N(μ, σ).
    ///
    /// # Errors
    /// Returns `Err` if `std_dev ≤ 0` or parameters are not finite.
    pub fn normal(mean: f64, std_dev: f64) -> Result<Self, ParameterError> {
        let d = Self::Normal { mean, std_dev };
        d.validate()?;
        Ok(d)
    }

    /// Creates a uniform distribution on `[min, max)`.
    ///
    /// # Errors
    /// Returns `Err` if `min >= max` or either bound is not finite.
    pub fn uniform(min: f64, max: f64) -> Result<Self, ParameterError> {
        let d = Self::Uniform { min, max };
        d.validate()?;
        Ok(d)
    }

    /// Creates an exponential distribution with rate λ.
    ///
    /// # Errors
    /// Returns `Err` if `rate ≤ 0` or not finite.
    pub fn exponential(rate: f64) -> Result<Self, ParameterError> {
        let d = Self::Exponential { rate };
        d.validate()?;
        Ok(d)
    }

    /// Creates an equal-weight two-normal mixture.
    ///
    /// # Errors
    /// Returns `Err` if either σ ≤ 0 or any parameter is not finite.
    pub fn bimodal(
        mean_lo: f64,
        std_lo: f64,
        mean_hi: f64,
        std_hi: f64,
    ) -> Result<Self, ParameterError> {
        let d = Self::Bimodal {
            mean_lo,
            std_lo,
            mean_hi,
            std_hi,
        };
        d.validate()?;
        Ok(d)
    }

    /// Creates a binomial distribution B(n, p).
    ///
    /// # Errors
    /// Returns `Err` if `trials == 0` or `p` is outside `[0, 1]`.
    pub fn binomial(trials: u64, p: f64) -> Result<Self, ParameterError> {
        let d = Self::Binomial { trials, p };
        d.validate()?;
        Ok(d)
    }

    /// Creates a Poisson distribution with rate λ.
    ///
    /// # Errors
    /// Returns `Err` if `rate ≤ 0` or not finite.
    pub fn poisson(rate: f64) -> Result<Self, ParameterError> {
        let d = Self::Poisson { rate };
        d.validate()?;
        Ok(d)
    }

    /// Checks the parameters against their domain constraints.
    ///
    /// # Errors
    /// Returns `Err` with a user-facing message naming the offending
    /// parameter.
    pub fn validate(&self) -> Result<(), ParameterError> {
        match *self {
            Self::Normal { mean, std_dev } => {
                if !mean.is_finite() || !std_dev.is_finite() || std_dev <= 0.0 {
                    return Err(ParameterError::InvalidParameter(format!(
                        "Normal requires finite mean and std_dev > 0, got mean={mean}, std_dev={std_dev}"
                    )));
                }
            }
            Self::Uniform { min, max } => {
                if !min.is_finite() || !max.is_finite() || min >= max {
                    return Err(ParameterError::InvalidParameter(format!(
                        "Uniform requires min < max, got min={min}, max={max}"
                    )));
                }
            }
            Self::Exponential { rate } => {
                if !rate.is_finite() || rate <= 0.0 {
                    return Err(ParameterError::InvalidParameter(format!(
                        "Exponential requires rate > 0, got rate={rate}"
                    )));
                }
            }
            Self::Bimodal {
                mean_lo,
                std_lo,
                mean_hi,
                std_hi,
            } => {
                if !mean_lo.is_finite()
                    || !mean_hi.is_finite()
                    || !std_lo.is_finite()
                    || !std_hi.is_finite()
                    || std_lo <= 0.0
                    || std_hi <= 0.0
                {
                    return Err(ParameterError::InvalidParameter(format!(
                        "Bimodal requires finite means and both std devs > 0, \
                         got ({mean_lo}, {std_lo}) and ({mean_hi}, {std_hi})"
                    )));
                }
            }
            Self::Binomial { trials, p } => {
                if trials == 0 || !p.is_finite() || !(0.0..=1.0).contains(&p) {
                    return Err(ParameterError::InvalidParameter(format!(
                        "Binomial requires trials ≥ 1 and 0 ≤ p ≤ 1, got trials={trials}, p={p}"
                    )));
                }
            }
            Self::Poisson { rate } => {
                if !rate.is_finite() || rate <= 0.0 || rate > MAX_POISSON_RATE {
                    return Err(ParameterError::InvalidParameter(format!(
                        "Poisson requires 0 < rate ≤ {MAX_POISSON_RATE}, got rate={rate}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Display name of the distribution kind.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Normal { .. } => "Normal",
            Self::Uniform { .. } => "Uniform",
            Self::Exponential { .. } => "Exponential",
            Self::Bimodal { .. } => "Bimodal",
            Self::Binomial { .. } => "Binomial",
            Self::Poisson { .. } => "Poisson",
        }
    }

    /// Analytical mean.
    pub fn mean(&self) -> f64 {
        match *self {
            Self::Normal { mean, .. } => mean,
            Self::Uniform { min, max } => (min + max) / 2.0,
            Self::Exponential { rate } => 1.0 / rate,
            Self::Bimodal {
                mean_lo, mean_hi, ..
            } => (mean_lo + mean_hi) / 2.0,
            Self::Binomial { trials, p } => trials as f64 * p,
            Self::Poisson { rate } => rate,
        }
    }

    /// Analytical variance.
    pub fn variance(&self) -> f64 {
        match *self {
            Self::Normal { std_dev, .. } => std_dev * std_dev,
            Self::Uniform { min, max } => {
                let range = max - min;
                range * range / 12.0
            }
            Self::Exponential { rate } => 1.0 / (rate * rate),
            Self::Bimodal {
                mean_lo,
                std_lo,
                mean_hi,
                std_hi,
            } => {
                // Equal-weight mixture: Var = E[X²] − (E[X])²
                let second = 0.5 * (std_lo * std_lo + mean_lo * mean_lo)
                    + 0.5 * (std_hi * std_hi + mean_hi * mean_hi);
                let m = (mean_lo + mean_hi) / 2.0;
                second - m * m
            }
            Self::Binomial { trials, p } => trials as f64 * p * (1.0 - p),
            Self::Poisson { rate } => rate,
        }
    }

    /// Analytical standard deviation, `sqrt(variance())`.
    pub fn std_dev(&self) -> f64 {
        self.variance().sqrt()
    }

    /// PDF (continuous kinds) or PMF (discrete kinds) at `x`.
    ///
    /// For discrete kinds, non-integer or out-of-support `x` yields 0.
    pub fn density(&self, x: f64) -> f64 {
        if !x.is_finite() {
            return 0.0;
        }
        match *self {
            Self::Normal { mean, std_dev } => {
                let z = (x - mean) / std_dev;
                special::standard_normal_pdf(z) / std_dev
            }
            Self::Uniform { min, max } => {
                if x >= min && x < max {
                    1.0 / (max - min)
                } else {
                    0.0
                }
            }
            Self::Exponential { rate } => {
                if x >= 0.0 {
                    rate * (-rate * x).exp()
                } else {
                    0.0
                }
            }
            Self::Bimodal {
                mean_lo,
                std_lo,
                mean_hi,
                std_hi,
            } => {
                let z_lo = (x - mean_lo) / std_lo;
                let z_hi = (x - mean_hi) / std_hi;
                0.5 * special::standard_normal_pdf(z_lo) / std_lo
                    + 0.5 * special::standard_normal_pdf(z_hi) / std_hi
            }
            Self::Binomial { trials, p } => binomial_pmf(trials, p, x),
            Self::Poisson { rate } => poisson_pmf(rate, x),
        }
    }

    /// Draws `n` values.
    ///
    /// The bimodal kind draws balanced halves (⌊n/2⌋ from the low
    /// component, the rest from the high one); all other kinds draw i.i.d.
    /// Discrete samples are returned as `f64` counts.
    ///
    /// # Errors
    /// Returns `Err` if the parameters fail [`validate`](Self::validate).
    ///
    /// # Examples
    /// ```
    /// use probalab::distributions::SourceDistribution;
    /// use probalab::random::create_rng;
    ///
    /// let dist = SourceDistribution::normal(0.0, 1.0).unwrap();
    /// let mut rng = create_rng(42);
    /// let sample = dist.sample_n(100, &mut rng).unwrap();
    /// assert_eq!(sample.len(), 100);
    /// ```
    pub fn sample_n<R: Rng>(&self, n: usize, rng: &mut R) -> Result<Vec<f64>, ParameterError> {
        self.validate()?;
        let values = match *self {
            Self::Normal { mean, std_dev } => {
                let dist = Normal::new(mean, std_dev).expect("validated parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Self::Uniform { min, max } => {
                let dist = Uniform::new(min, max).expect("validated parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Self::Exponential { rate } => {
                let dist = Exp::new(rate).expect("validated parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
            Self::Bimodal {
                mean_lo,
                std_lo,
                mean_hi,
                std_hi,
            } => {
                let lo = Normal::new(mean_lo, std_lo).expect("validated parameters");
                let hi = Normal::new(mean_hi, std_hi).expect("validated parameters");
                let half = n / 2;
                let mut values: Vec<f64> = (0..half).map(|_| lo.sample(rng)).collect();
                values.extend((half..n).map(|_| hi.sample(rng)));
                values
            }
            Self::Binomial { trials, p } => {
                let dist = Binomial::new(trials, p).expect("validated parameters");
                (0..n).map(|_| dist.sample(rng) as f64).collect()
            }
            Self::Poisson { rate } => {
                let dist = Poisson::new(rate).expect("validated parameters");
                (0..n).map(|_| dist.sample(rng)).collect()
            }
        };
        Ok(values)
    }

    /// Theoretical density curve for the distribution-catalog view.
    ///
    /// Continuous kinds are evaluated on an `n_points` grid over a range
    /// that captures essentially all the mass (±4σ for normal kinds, a
    /// quarter-range pad for uniform, 5/λ for exponential). Discrete kinds
    /// enumerate their support instead and ignore `n_points`.
    ///
    /// # Errors
    /// Returns `Err` if the parameters fail validation or `n_points < 2`
    /// for a continuous kind.
    pub fn density_curve(&self, n_points: usize) -> Result<DensityCurve, ParameterError> {
        self.validate()?;

        let (lo, hi) = match *self {
            Self::Normal { mean, std_dev } => (mean - 4.0 * std_dev, mean + 4.0 * std_dev),
            Self::Uniform { min, max } => {
                let pad = 0.25 * (max - min);
                (min - pad, max + pad)
            }
            Self::Exponential { rate } => (0.0, 5.0 / rate),
            Self::Bimodal {
                mean_lo,
                std_lo,
                mean_hi,
                std_hi,
            } => (
                (mean_lo - 4.0 * std_lo).min(mean_hi - 4.0 * std_hi),
                (mean_lo + 4.0 * std_lo).max(mean_hi + 4.0 * std_hi),
            ),
            Self::Binomial { trials, .. } => {
                let xs: Vec<f64> = (0..=trials).map(|k| k as f64).collect();
                let ys = xs.iter().map(|&x| self.density(x)).collect();
                return Ok(DensityCurve {
                    xs,
                    ys,
                    discrete: true,
                });
            }
            Self::Poisson { rate } => {
                // Support truncated at λ + 4√λ, which covers the visible mass
                let upper = (rate + 4.0 * rate.sqrt()).ceil() as u64;
                let xs: Vec<f64> = (0..=upper).map(|k| k as f64).collect();
                let ys = xs.iter().map(|&x| self.density(x)).collect();
                return Ok(DensityCurve {
                    xs,
                    ys,
                    discrete: true,
                });
            }
        };

        if n_points < 2 {
            return Err(ParameterError::InvalidParameter(format!(
                "density curve requires at least 2 points, got {n_points}"
            )));
        }

        let step = (hi - lo) / (n_points - 1) as f64;
        let xs: Vec<f64> = (0..n_points).map(|i| lo + i as f64 * step).collect();
        let ys = xs.iter().map(|&x| self.density(x)).collect();
        Ok(DensityCurve {
            xs,
            ys,
            discrete: false,
        })
    }
}

/// Binomial PMF at `x`, treating non-integer or out-of-support `x` as 0.
fn binomial_pmf(trials: u64, p: f64, x: f64) -> f64 {
    if x < 0.0 || x.fract() != 0.0 || x > trials as f64 {
        return 0.0;
    }
    let k = x;
    let n = trials as f64;
    // Degenerate edges where the ln-form would take ln(0)
    if p == 0.0 {
        return if k == 0.0 { 1.0 } else { 0.0 };
    }
    if p == 1.0 {
        return if k == n { 1.0 } else { 0.0 };
    }
    let ln_choose =
        special::ln_gamma(n + 1.0) - special::ln_gamma(k + 1.0) - special::ln_gamma(n - k + 1.0);
    (ln_choose + k * p.ln() + (n - k) * (1.0 - p).ln()).exp()
}

/// Poisson PMF at `x`, treating non-integer or negative `x` as 0.
fn poisson_pmf(rate: f64, x: f64) -> f64 {
    if x < 0.0 || x.fract() != 0.0 {
        return 0.0;
    }
    (x * rate.ln() - rate - special::ln_gamma(x + 1.0)).exp()
}

// ============================================================================
// Tests
// ============================================================================


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::random::create_rng;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(300))]

        #[test]
        fn in_domain_normal_always_validates(
            mean in -1e6_f64..1e6,
            std_dev in 1e-3_f64..1e3,
        ) {
            prop_assert!(SourceDistribution::normal(mean, std_dev).is_ok());
        }

        #[test]
        fn in_domain_uniform_always_validates(
            min in -1e6_f64..0.0,
            width in 1e-3_f64..1e6,
        ) {
            prop_assert!(SourceDistribution::uniform(min, min + width).is_ok());
        }

        #[test]
        fn variance_non_negative(
            mean_lo in -100.0_f64..100.0,
            std_lo in 0.01_f64..50.0,
            mean_hi in -100.0_f64..100.0,
            std_hi in 0.01_f64..50.0,
        ) {
            let d = SourceDistribution::bimodal(mean_lo, std_lo, mean_hi, std_hi).unwrap();
            prop_assert!(d.variance() >= 0.0);
        }

        #[test]
        fn density_non_negative(
            mean in -100.0_f64..100.0,
            std_dev in 0.01_f64..50.0,
            x in -500.0_f64..500.0,
        ) {
            let d = SourceDistribution::normal(mean, std_dev).unwrap();
            prop_assert!(d.density(x) >= 0.0);
        }
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(64))]

        #[test]
        fn samples_are_finite(seed in 0_u64..1000, n in 1_usize..200) {
            let d = SourceDistribution::exponential(1.0).unwrap();
            let sample = d.sample_n(n, &mut create_rng(seed)).unwrap();
            prop_assert_eq!(sample.len(), n);
            prop_assert!(sample.iter().all(|v| v.is_finite()));
        }
    }
}
