//! proba - Classical Probability Distributions and Statistical Tests
//!
//! proba provides the working vocabulary of a first statistics course as a
//! plain-`f64` Rust library: descriptive summaries, the standard continuous
//! and discrete distributions with exact closed-form densities and
//! quantiles, correlation and least-squares regression, and the classical
//! parametric and nonparametric hypothesis tests.
//!
//! Everything is scalar and deterministic. There are no tensors, random
//! number generators or fitting routines here; the only dependency is
//! `libm` for the `erfc` and `lgamma` kernels, and every p-value comes
//! from a closed-form or iteratively refined special function, not
//! simulation.
//!
//! # Current Modules
//!
//! - [`descriptive`] - Location, dispersion, quartiles, ranks and z-scores
//! - [`moments`] - Standardized moments, skewness and kurtosis
//! - [`continuous`] - Normal, Student t, chi-squared, F and gamma distributions
//! - [`discrete`] - Binomial distribution
//! - [`correlation`] - Pearson and Spearman correlation with significance
//! - [`regression`] - Least-squares line fitting with standard errors
//! - [`hypothesis`] - z, t, ANOVA, chi-squared, sign, signed-rank, runs and
//!   normality tests
//!
//! # Example
//!
//! ```ignore
//! use proba::hypothesis::ttest_1samp;
//! use proba::{ContinuousDistribution, Normal};
//!
//! // Is the mean fill volume still 2.5 litres?
//! let volumes = [2.3, 2.5, 2.7, 2.9, 3.1];
//! let test = ttest_1samp(&volumes, 2.5)?;
//! assert!(test.pvalue > 0.05);
//!
//! // Tail probabilities straight from the distribution types
//! let standard = Normal::new(0.0, 1.0)?;
//! assert!((standard.cdf(1.96) - 0.975).abs() < 1e-3);
//! ```

pub mod continuous;
pub mod correlation;
pub mod descriptive;
pub mod discrete;
pub mod distribution;
pub mod error;
pub mod hypothesis;
pub mod moments;
pub mod regression;

pub(crate) mod special;

// Re-export main types for convenience
pub use continuous::{ChiSquared, FDistribution, Gamma, Normal, StudentT};
pub use correlation::{CorrelationResult, CorrelationStrength};
pub use descriptive::{DescriptiveStats, Quartiles};
pub use discrete::Binomial;
pub use distribution::{ContinuousDistribution, DiscreteDistribution, Distribution};
pub use error::{StatsError, StatsResult};
pub use hypothesis::{
    // Test configuration
    Alternative,
    AnovaResult,
    Chi2ContingencyResult,
    ChiSquareResult,
    MeanTest,
    // Result types
    MeanTestReport,
    RunsTestResult,
    ShapiroResult,
    SignTestResult,
    TTestResult,
    WilcoxonResult,
};
pub use moments::{Kurtosis, Skewness};
pub use regression::LinregressResult;
