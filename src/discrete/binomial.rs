//! Binomial distribution.

use super::log_binom;
use crate::distribution::{DiscreteDistribution, Distribution};
use crate::error::{StatsError, StatsResult};
use crate::special;

/// Binomial distribution: number of successes in `n` independent trials with
/// success probability `p`.
///
/// P(X = k) = C(n, k) p^k (1−p)^(n−k)
///
/// # Examples
///
/// ```ignore
/// use proba::{Binomial, DiscreteDistribution};
///
/// let coin = Binomial::new(10, 0.5).unwrap();
/// let p_five = coin.pmf(5);     // exactly five heads
/// let p_at_most_3 = coin.cdf(3);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Binomial {
    /// Number of trials
    n: u64,
    /// Success probability
    p: f64,
    /// Failure probability 1 − p
    q: f64,
}

impl Binomial {
    /// Create a binomial distribution with `n` trials and success
    /// probability `p`.
    ///
    /// # Errors
    ///
    /// Returns an error when `p` is outside [0, 1].
    pub fn new(n: u64, p: f64) -> StatsResult<Self> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidParameter {
                name: "p",
                value: p,
                reason: "probability must be in [0, 1]",
            });
        }
        Ok(Self { n, p, q: 1.0 - p })
    }

    /// Number of trials.
    pub fn n(&self) -> u64 {
        self.n
    }

    /// Success probability.
    pub fn p(&self) -> f64 {
        self.p
    }
}

impl Distribution for Binomial {
    fn mean(&self) -> f64 {
        self.n as f64 * self.p
    }

    fn var(&self) -> f64 {
        self.n as f64 * self.p * self.q
    }

    fn entropy(&self) -> f64 {
        if self.n == 0 || self.var() == 0.0 {
            return 0.0;
        }
        // normal approximation 0.5 ln(2 pi e npq), adequate away from the edges
        0.5 * (2.0 * std::f64::consts::PI * std::f64::consts::E * self.var()).ln()
    }

    fn median(&self) -> f64 {
        (self.n as f64 * self.p).floor()
    }

    fn mode(&self) -> f64 {
        (((self.n + 1) as f64) * self.p).floor()
    }

    fn skewness(&self) -> f64 {
        if self.var() == 0.0 {
            return 0.0;
        }
        (self.q - self.p) / self.var().sqrt()
    }

    fn kurtosis(&self) -> f64 {
        if self.var() == 0.0 {
            return 0.0;
        }
        (1.0 - 6.0 * self.p * self.q) / self.var()
    }
}

impl DiscreteDistribution for Binomial {
    fn pmf(&self, k: u64) -> f64 {
        if k > self.n {
            return 0.0;
        }
        if self.p == 0.0 {
            return if k == 0 { 1.0 } else { 0.0 };
        }
        if self.p == 1.0 {
            return if k == self.n { 1.0 } else { 0.0 };
        }
        self.log_pmf(k).exp()
    }

    fn log_pmf(&self, k: u64) -> f64 {
        if k > self.n {
            return f64::NEG_INFINITY;
        }
        if self.p == 0.0 {
            return if k == 0 { 0.0 } else { f64::NEG_INFINITY };
        }
        if self.p == 1.0 {
            return if k == self.n { 0.0 } else { f64::NEG_INFINITY };
        }
        log_binom(self.n, k) + k as f64 * self.p.ln() + (self.n - k) as f64 * self.q.ln()
    }

    fn cdf(&self, k: u64) -> f64 {
        if k >= self.n {
            return 1.0;
        }
        if self.p == 0.0 {
            return 1.0;
        }
        if self.p == 1.0 {
            return 0.0;
        }
        // P(X <= k) = 1 - I_p(k+1, n-k)
        1.0 - special::betainc((k + 1) as f64, (self.n - k) as f64, self.p)
    }

    fn sf(&self, k: u64) -> f64 {
        if k >= self.n {
            return 0.0;
        }
        if self.p == 0.0 {
            return 0.0;
        }
        if self.p == 1.0 {
            return 1.0;
        }
        // P(X > k) = I_p(k+1, n-k)
        special::betainc((k + 1) as f64, (self.n - k) as f64, self.p)
    }

    fn ppf(&self, p: f64) -> StatsResult<u64> {
        if !(0.0..=1.0).contains(&p) {
            return Err(StatsError::InvalidProbability { value: p });
        }
        if p == 0.0 {
            return Ok(0);
        }
        if p == 1.0 {
            return Ok(self.n);
        }

        // smallest k with CDF(k) >= p, by bisection on the CDF
        let mut lo = 0u64;
        let mut hi = self.n;
        while lo < hi {
            let mid = lo + (hi - lo) / 2;
            if self.cdf(mid) < p {
                lo = mid + 1;
            } else {
                hi = mid;
            }
        }
        Ok(lo)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_creation() {
        let b = Binomial::new(10, 0.5).unwrap();
        assert_eq!(b.n(), 10);
        assert!((b.p() - 0.5).abs() < 1e-15);

        assert!(Binomial::new(10, -0.01).is_err());
        assert!(Binomial::new(10, 1.01).is_err());
    }

    #[test]
    fn test_moments() {
        let b = Binomial::new(20, 0.3).unwrap();
        assert!((b.mean() - 6.0).abs() < 1e-12);
        assert!((b.var() - 4.2).abs() < 1e-12);
        assert!((b.skewness() - 0.4 / 4.2f64.sqrt()).abs() < 1e-12);
        assert!((b.mode() - 6.0).abs() < 1e-12);

        let degenerate = Binomial::new(5, 1.0).unwrap();
        assert_eq!(degenerate.skewness(), 0.0);
        assert_eq!(degenerate.kurtosis(), 0.0);
    }

    #[test]
    fn test_pmf_fair_coin() {
        let b = Binomial::new(10, 0.5).unwrap();
        // C(10, 5) / 2^10 = 252/1024
        assert!((b.pmf(5) - 252.0 / 1024.0).abs() < 1e-12);
        // symmetric for p = 1/2
        assert!((b.pmf(3) - b.pmf(7)).abs() < 1e-12);

        let total: f64 = (0..=10).map(|k| b.pmf(k)).sum();
        assert!((total - 1.0).abs() < 1e-12);
        assert_eq!(b.pmf(11), 0.0);
    }

    #[test]
    fn test_cdf_matches_pmf_sums() {
        let b = Binomial::new(12, 0.35).unwrap();
        for k in 0..12 {
            let direct: f64 = (0..=k).map(|j| b.pmf(j)).sum();
            assert!((b.cdf(k) - direct).abs() < 1e-10, "mismatch at k = {k}");
            assert!((b.sf(k) - (1.0 - direct)).abs() < 1e-10);
        }
        assert_eq!(b.cdf(12), 1.0);
        assert_eq!(b.sf(12), 0.0);
    }

    #[test]
    fn test_ppf_is_smallest_k() {
        let b = Binomial::new(15, 0.4).unwrap();
        for k in 0..=15 {
            let p = b.cdf(k);
            let found = b.ppf(p).unwrap();
            assert!(b.cdf(found) >= p);
            if found > 0 {
                assert!(b.cdf(found - 1) < p);
            }
        }
        assert_eq!(b.ppf(0.0).unwrap(), 0);
        assert_eq!(b.ppf(1.0).unwrap(), 15);
        assert!(b.ppf(-0.5).is_err());
    }

    #[test]
    fn test_degenerate_probabilities() {
        let never = Binomial::new(8, 0.0).unwrap();
        assert_eq!(never.pmf(0), 1.0);
        assert_eq!(never.pmf(3), 0.0);
        assert_eq!(never.cdf(0), 1.0);

        let always = Binomial::new(8, 1.0).unwrap();
        assert_eq!(always.pmf(8), 1.0);
        assert_eq!(always.pmf(7), 0.0);
        assert_eq!(always.cdf(7), 0.0);

        let empty = Binomial::new(0, 0.5).unwrap();
        assert_eq!(empty.pmf(0), 1.0);
        assert_eq!(empty.entropy(), 0.0);
    }

    #[test]
    fn test_log_pmf_large_n() {
        // direct C(n,k) would overflow long before n = 500
        let b = Binomial::new(500, 0.5).unwrap();
        let lp = b.log_pmf(250);
        assert!(lp.is_finite());
        // normal approximation to the central term: 1/sqrt(2 pi n p q)
        let approx = -(0.5 * (2.0 * std::f64::consts::PI * 125.0).ln());
        assert!((lp - approx).abs() < 1e-3);
    }
}
