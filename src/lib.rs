//! # probalab
//!
//! Statistical simulation engine for interactive probability demonstrations.
//!
//! This crate generates synthetic random samples and derived summary
//! statistics for classic probability concepts — the empirical (three-sigma)
//! rule, the central limit theorem, the law of large numbers, sampling
//! variability, distribution comparison, and regression to the mean. It is
//! UI-agnostic: every operation is a pure request → result function that a
//! rendering layer calls once per interaction, with no state carried between
//! calls.
//!
//! ## Modules
//!
//! - [`engine`] — `SimulationRequest` → `SimulationResult` core operation
//! - [`concepts`] — one study per demonstrated concept
//! - [`distributions`] — validated source distributions with sampling and
//!   theoretical density curves
//! - [`stats`] — descriptive statistics with numerical stability guarantees
//! - [`histogram`] — fixed-bin-count histograms with counts and densities
//! - [`random`] — seeded RNG construction for reproducible runs
//! - [`special`] — normal CDF/PDF, ln Γ, χ² CDF approximations
//! - [`quiz`] — knowledge-check question bank and session state
//!
//! ## Design Philosophy
//!
//! - **Pure functions**: a fixed seed reproduces a run bit for bit
//! - **Numerical stability**: Kahan summation for means, Welford's
//!   algorithm for variance
//! - **Validation first**: invalid parameters are rejected with
//!   [`distributions::ParameterError`] before any sampling runs

pub mod concepts;
pub mod distributions;
pub mod engine;
pub mod histogram;
pub mod quiz;
pub mod random;
pub mod special;
pub mod stats;
