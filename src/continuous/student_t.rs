//! Student's t distribution.

use crate::distribution::{ContinuousDistribution, Distribution};
use crate::error::{StatsError, StatsResult};
use crate::special;
use std::f64::consts::PI;

/// Student's t distribution with ν degrees of freedom.
///
/// f(x) = Γ((ν+1)/2) / (√(νπ) Γ(ν/2)) (1 + x²/ν)^(−(ν+1)/2)
///
/// Heavier-tailed than the normal for small ν; converges to N(0, 1) as
/// ν grows. This is the reference distribution for t statistics built from
/// sample standard deviations.
///
/// # Examples
///
/// ```ignore
/// use proba::{ContinuousDistribution, StudentT};
///
/// let t = StudentT::new(10.0).unwrap();
/// // two-sided critical value at alpha = 0.05
/// let t_crit = t.ppf(0.975).unwrap(); // 2.2281 from the tables
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StudentT {
    /// Degrees of freedom (ν)
    nu: f64,
    /// Precomputed ln Γ((ν+1)/2) − ½ ln(νπ) − ln Γ(ν/2)
    log_norm: f64,
}

impl StudentT {
    /// Create a t distribution with `nu` degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns an error unless `nu` is positive and finite.
    pub fn new(nu: f64) -> StatsResult<Self> {
        if !(nu > 0.0 && nu.is_finite()) {
            return Err(StatsError::InvalidParameter {
                name: "nu",
                value: nu,
                reason: "degrees of freedom must be positive and finite",
            });
        }
        let log_norm =
            special::lgamma((nu + 1.0) / 2.0) - 0.5 * (nu * PI).ln() - special::lgamma(nu / 2.0);
        Ok(Self { nu, log_norm })
    }

    /// Degrees of freedom.
    pub fn df(&self) -> f64 {
        self.nu
    }
}

impl Distribution for StudentT {
    fn mean(&self) -> f64 {
        if self.nu > 1.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    fn var(&self) -> f64 {
        if self.nu > 2.0 {
            self.nu / (self.nu - 2.0)
        } else if self.nu > 1.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }

    fn entropy(&self) -> f64 {
        let half = self.nu / 2.0;
        let half_p1 = (self.nu + 1.0) / 2.0;
        half_p1 * (special::digamma(half_p1) - special::digamma(half))
            + 0.5 * self.nu.ln()
            + special::lbeta(half, 0.5)
    }

    fn median(&self) -> f64 {
        0.0
    }

    fn mode(&self) -> f64 {
        0.0
    }

    fn skewness(&self) -> f64 {
        if self.nu > 3.0 {
            0.0
        } else {
            f64::NAN
        }
    }

    fn kurtosis(&self) -> f64 {
        if self.nu > 4.0 {
            6.0 / (self.nu - 4.0)
        } else if self.nu > 2.0 {
            f64::INFINITY
        } else {
            f64::NAN
        }
    }
}

impl ContinuousDistribution for StudentT {
    fn pdf(&self, x: f64) -> f64 {
        self.log_pdf(x).exp()
    }

    fn log_pdf(&self, x: f64) -> f64 {
        self.log_norm - 0.5 * (self.nu + 1.0) * (1.0 + x * x / self.nu).ln()
    }

    fn cdf(&self, x: f64) -> f64 {
        if x == 0.0 {
            return 0.5;
        }
        // one tail through the incomplete beta, the other by symmetry
        let t = self.nu / (self.nu + x * x);
        let tail = 0.5 * special::betainc(self.nu / 2.0, 0.5, t);
        if x > 0.0 {
            1.0 - tail
        } else {
            tail
        }
    }

    fn sf(&self, x: f64) -> f64 {
        self.cdf(-x)
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
        if p == 0.5 {
            return Ok(0.0);
        }

        // invert the tail relation: I_t(nu/2, 1/2) = 2 min(p, 1-p)
        let (tail, sign) = if p > 0.5 {
            (2.0 * (1.0 - p), 1.0)
        } else {
            (2.0 * p, -1.0)
        };
        let t = special::betaincinv(self.nu / 2.0, 0.5, tail);
        Ok(sign * (self.nu * (1.0 / t - 1.0)).sqrt())
    }
}
