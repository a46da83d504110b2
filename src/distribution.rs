//! Core distribution traits.
//!
//! Every distribution implements [`Distribution`] for its moments and shape
//! summaries, plus either [`ContinuousDistribution`] or
//! [`DiscreteDistribution`] for its probability functions.

use crate::error::{StatsError, StatsResult};

/// Moments and shape summaries common to all distributions.
pub trait Distribution {
    /// Mean of the distribution.
    fn mean(&self) -> f64;

    /// Variance of the distribution.
    fn var(&self) -> f64;

    /// Standard deviation of the distribution.
    fn std(&self) -> f64 {
        self.var().sqrt()
    }

    /// Differential (or discrete) entropy in nats.
    fn entropy(&self) -> f64;

    /// Median of the distribution.
    fn median(&self) -> f64;

    /// Mode of the distribution.
    fn mode(&self) -> f64;

    /// Skewness (third standardized moment).
    fn skewness(&self) -> f64;

    /// Excess kurtosis (fourth standardized moment minus 3).
    fn kurtosis(&self) -> f64;
}

/// Probability functions of a continuous distribution.
pub trait ContinuousDistribution: Distribution {
    /// Probability density function at `x`.
    fn pdf(&self, x: f64) -> f64;

    /// Natural log of the PDF at `x`.
    fn log_pdf(&self, x: f64) -> f64 {
        self.pdf(x).ln()
    }

    /// Cumulative distribution function P(X ≤ x).
    fn cdf(&self, x: f64) -> f64;

    /// Survival function P(X > x).
    fn sf(&self, x: f64) -> f64 {
        1.0 - self.cdf(x)
    }

    /// Quantile function: smallest x with CDF(x) ≥ p.
    ///
    /// # Errors
    ///
    /// Returns an error when `p` is outside [0, 1].
    fn ppf(&self, p: f64) -> StatsResult<f64>;

    /// Central interval containing `confidence` of the probability mass,
    /// i.e. the (α/2, 1 − α/2) quantile pair for α = 1 − confidence.
    ///
    /// # Errors
    ///
    /// Returns an error when `confidence` is outside [0, 1].
    fn interval(&self, confidence: f64) -> StatsResult<(f64, f64)> {
        if !(0.0..=1.0).contains(&confidence) {
            return Err(StatsError::InvalidProbability { value: confidence });
        }
        let alpha = 1.0 - confidence;
        let lower = self.ppf(alpha / 2.0)?;
        let upper = self.ppf(1.0 - alpha / 2.0)?;
        Ok((lower, upper))
    }
}

/// Probability functions of a distribution over non-negative integers.
pub trait DiscreteDistribution: Distribution {
    /// Probability mass function P(X = k).
    fn pmf(&self, k: u64) -> f64;

    /// Natural log of the PMF at `k`.
    fn log_pmf(&self, k: u64) -> f64 {
        self.pmf(k).ln()
    }

    /// Cumulative distribution function P(X ≤ k).
    fn cdf(&self, k: u64) -> f64;

    /// Survival function P(X > k).
    fn sf(&self, k: u64) -> f64 {
        1.0 - self.cdf(k)
    }

    /// Quantile function: smallest k with CDF(k) ≥ p.
    ///
    /// # Errors
    ///
    /// Returns an error when `p` is outside [0, 1].
    fn ppf(&self, p: f64) -> StatsResult<u64>;
}
