//! Normal (Gaussian) distribution.

use crate::distribution::{ContinuousDistribution, Distribution};
use crate::error::{StatsError, StatsResult};
use crate::special::{self, INV_SQRT_2PI, LN_SQRT_2PI};
use std::f64::consts::{E, PI};

/// Normal distribution N(μ, σ²), parameterized by mean and standard deviation.
///
/// f(x) = (1 / (σ√(2π))) exp(−(x − μ)² / (2σ²))
///
/// # Examples
///
/// ```ignore
/// use proba::{ContinuousDistribution, Distribution, Normal};
///
/// // Exam scores modeled as N(75, 10²)
/// let scores = Normal::new(75.0, 10.0).unwrap();
/// let p_pass = scores.sf(60.0);            // P(X > 60)
/// let cutoff = scores.ppf(0.90).unwrap();  // 90th percentile
///
/// let z = Normal::standard();
/// assert!((z.cdf(1.96) - 0.975).abs() < 1e-3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Normal {
    /// Mean (μ)
    mu: f64,
    /// Standard deviation (σ)
    sigma: f64,
}

impl Normal {
    /// Create a normal distribution from its mean and standard deviation.
    ///
    /// # Errors
    ///
    /// Returns an error unless `sigma` is positive and `mu` is finite.
    pub fn new(mu: f64, sigma: f64) -> StatsResult<Self> {
        if !mu.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "mu",
                value: mu,
                reason: "must be finite",
            });
        }
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(StatsError::InvalidParameter {
                name: "sigma",
                value: sigma,
                reason: "must be positive and finite",
            });
        }
        Ok(Self { mu, sigma })
    }

    /// The standard normal N(0, 1).
    pub fn standard() -> Self {
        Self {
            mu: 0.0,
            sigma: 1.0,
        }
    }

    /// Mean parameter μ.
    pub fn mu(&self) -> f64 {
        self.mu
    }

    /// Standard deviation parameter σ.
    pub fn sigma(&self) -> f64 {
        self.sigma
    }

    /// Standardized score z = (x − μ) / σ.
    pub fn zscore(&self, x: f64) -> f64 {
        (x - self.mu) / self.sigma
    }

    /// Probability that X lands within the symmetric band around the mean
    /// reaching out to `x`, i.e. P(|X − μ| ≤ |x − μ|) = |2 Φ(z) − 1|.
    pub fn central_probability(&self, x: f64) -> f64 {
        (2.0 * self.cdf(x) - 1.0).abs()
    }
}

impl Distribution for Normal {
    fn mean(&self) -> f64 {
        self.mu
    }

    fn var(&self) -> f64 {
        self.sigma * self.sigma
    }

    fn std(&self) -> f64 {
        self.sigma
    }

    fn entropy(&self) -> f64 {
        // H = ln(σ √(2πe))
        (self.sigma * (2.0 * PI * E).sqrt()).ln()
    }

    fn median(&self) -> f64 {
        self.mu
    }

    fn mode(&self) -> f64 {
        self.mu
    }

    fn skewness(&self) -> f64 {
        0.0
    }

    fn kurtosis(&self) -> f64 {
        0.0
    }
}

impl ContinuousDistribution for Normal {
    fn pdf(&self, x: f64) -> f64 {
        let z = self.zscore(x);
        INV_SQRT_2PI / self.sigma * (-0.5 * z * z).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        let z = self.zscore(x);
        -LN_SQRT_2PI - self.sigma.ln() - 0.5 * z * z
    }

    fn cdf(&self, x: f64) -> f64 {
        special::norm_cdf(self.zscore(x))
    }

    fn sf(&self, x: f64) -> f64 {
        special::norm_cdf(-self.zscore(x))
    }

    fn ppf(&self, p: f64) -> StatsResult<f64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }
        if p == 0.0 {
            return Ok(f64::NEG_INFINITY);
        }
        if p == 1.0 {
            return Ok(f64::INFINITY);
        }
        Ok(self.mu + self.sigma * special::norm_ppf(p))
    }
}
