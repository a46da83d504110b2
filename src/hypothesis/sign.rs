//! Sign test for the median of a sample.

use super::Alternative;
use crate::discrete::{log_binom, Binomial};
use crate::distribution::DiscreteDistribution;
use crate::error::{StatsError, StatsResult};

/// Counts and p-value of a [`sign_test`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignTestResult {
    /// Observations above the hypothesized median
    pub pos: usize,
    /// Observations below the hypothesized median
    pub neg: usize,
    /// Observations equal to the hypothesized median, excluded from the test
    pub zeros: usize,
    /// Probability of exactly this sign split under H0
    pub point_probability: f64,
    /// p-value from the binomial(n, 1/2) tail under the chosen alternative
    pub pvalue: f64,
}

impl SignTestResult {
    /// Whether H0 is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

/// Sign test of H0: the population median equals `center`.
///
/// Observations equal to `center` are dropped; the count of positive signs
/// among the remaining n is referred to a binomial(n, 1/2) law.
/// [`Alternative::Greater`] puts the alternative median above `center` and
/// takes the upper tail, [`Alternative::Less`] the lower; the two-sided
/// p-value doubles the smaller tail and is clipped to one.
///
/// # Errors
///
/// Returns an error when every observation equals `center`.
pub fn sign_test(
    data: &[f64],
    center: f64,
    alternative: Alternative,
) -> StatsResult<SignTestResult> {
    let pos = data.iter().filter(|&&x| x > center).count();
    let neg = data.iter().filter(|&&x| x < center).count();
    let n = pos + neg;
    if n == 0 {
        return Err(StatsError::InsufficientData {
            required: 1,
            got: 0,
            context: "sign test (non-tied observations)",
        });
    }

    let half = Binomial::new(n as u64, 0.5)?;
    let log_point = log_binom(n as u64, pos as u64) + n as f64 * 0.5f64.ln();
    let pvalue = match alternative {
        Alternative::Less => half.cdf(pos as u64),
        Alternative::Greater => {
            if pos == 0 {
                1.0
            } else {
                half.sf((pos - 1) as u64)
            }
        }
        Alternative::TwoSided => (2.0 * half.cdf(pos.min(neg) as u64)).min(1.0),
    };
    Ok(SignTestResult {
        pos,
        neg,
        zeros: data.len() - n,
        point_probability: log_point.exp(),
        pvalue,
    })
}
