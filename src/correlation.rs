//! Correlation coefficients and their significance.

use crate::continuous::StudentT;
use crate::descriptive::rankdata;
use crate::distribution::ContinuousDistribution;
use crate::error::{StatsError, StatsResult};
use std::fmt;

/// Correlation coefficient together with its two-sided p-value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CorrelationResult {
    /// Correlation coefficient in [−1, 1]
    pub r: f64,
    /// Two-sided p-value for the null hypothesis of zero correlation
    pub pvalue: f64,
}

/// Strength band of a correlation coefficient, judged on |r|.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CorrelationStrength {
    /// |r| below 0.01
    None,
    /// |r| in [0.01, 0.3)
    Weak,
    /// |r| in [0.3, 0.5)
    Moderate,
    /// |r| in [0.5, 0.7)
    Strong,
    /// |r| of 0.7 and above
    VeryStrong,
}

impl fmt::Display for CorrelationStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CorrelationStrength::None => write!(f, "no correlation"),
            CorrelationStrength::Weak => write!(f, "weak correlation"),
            CorrelationStrength::Moderate => write!(f, "moderate correlation"),
            CorrelationStrength::Strong => write!(f, "strong correlation"),
            CorrelationStrength::VeryStrong => write!(f, "very strong correlation"),
        }
    }
}

/// Classify a correlation coefficient into its strength band.
pub fn interpret_correlation(r: f64) -> CorrelationStrength {
    let a = r.abs();
    if a < 0.01 {
        CorrelationStrength::None
    } else if a < 0.3 {
        CorrelationStrength::Weak
    } else if a < 0.5 {
        CorrelationStrength::Moderate
    } else if a < 0.7 {
        CorrelationStrength::Strong
    } else {
        CorrelationStrength::VeryStrong
    }
}

/// Pearson product-moment correlation with a t-based two-sided p-value on
/// n − 2 degrees of freedom.
///
/// # Errors
///
/// Returns an error when the samples differ in length, have fewer than two
/// observations, or either sample is constant.
pub fn pearsonr(x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "pearson correlation",
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: n,
            context: "pearson correlation",
        });
    }

    let mx = x.iter().sum::<f64>() / n as f64;
    let my = y.iter().sum::<f64>() / n as f64;
    let mut sxx = 0.0;
    let mut syy = 0.0;
    let mut sxy = 0.0;
    for i in 0..n {
        let dx = x[i] - mx;
        let dy = y[i] - my;
        sxx += dx * dx;
        syy += dy * dy;
        sxy += dx * dy;
    }
    if sxx == 0.0 || syy == 0.0 {
        return Err(StatsError::NumericalError {
            message: "correlation is undefined for a constant sample".to_string(),
        });
    }

    let r = (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0);
    Ok(CorrelationResult {
        r,
        pvalue: correlation_pvalue(r, n)?,
    })
}

/// Spearman rank correlation: Pearson correlation of the mid-ranks, which
/// handles ties exactly.
///
/// # Errors
///
/// Returns an error when the samples differ in length, have fewer than two
/// observations, or either sample is constant.
pub fn spearmanr(x: &[f64], y: &[f64]) -> StatsResult<CorrelationResult> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "spearman correlation",
        });
    }
    pearsonr(&rankdata(x), &rankdata(y))
}

// Two-sided p-value for r on n observations via t = r sqrt((n-2)/(1-r^2)).
fn correlation_pvalue(r: f64, n: usize) -> StatsResult<f64> {
    let df = n - 2;
    if df == 0 {
        // two points always fit a line exactly
        return Ok(1.0);
    }
    let denom = 1.0 - r * r;
    if denom <= 0.0 {
        return Ok(0.0);
    }
    let t_stat = r * (df as f64 / denom).sqrt();
    let dist = StudentT::new(df as f64)?;
    Ok((2.0 * dist.sf(t_stat.abs())).min(1.0))
}
