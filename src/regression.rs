//! Simple least-squares linear regression.

use crate::continuous::StudentT;
use crate::distribution::ContinuousDistribution;
use crate::error::{StatsError, StatsResult};

/// Fit of the line y = slope · x + intercept.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinregressResult {
    /// Least-squares slope
    pub slope: f64,
    /// Least-squares intercept
    pub intercept: f64,
    /// Pearson correlation of x and y
    pub rvalue: f64,
    /// Two-sided p-value for the null hypothesis of zero slope
    pub pvalue: f64,
    /// Standard error of the slope
    pub stderr: f64,
    /// Standard error of the intercept
    pub intercept_stderr: f64,
}

/// Least-squares fit of a straight line through (x, y) pairs.
///
/// The slope hypothesis test uses t = r √((n−2)/(1−r²)) on n − 2 degrees of
/// freedom, the same statistic the Pearson correlation test uses.
///
/// # Errors
///
/// Returns an error when the samples differ in length, have fewer than two
/// observations, or `x` is constant.
pub fn linregress(x: &[f64], y: &[f64]) -> StatsResult<LinregressResult> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "linear regression",
        });
    }
    let n = x.len();
    if n < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: n,
            context: "linear regression",
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
    if sxx == 0.0 {
        return Err(StatsError::NumericalError {
            message: "regression is undefined for a constant predictor".to_string(),
        });
    }

    let slope = sxy / sxx;
    let intercept = my - slope * mx;
    // constant response: a flat line fits exactly, report zero correlation
    let rvalue = if syy == 0.0 {
        0.0
    } else {
        (sxy / (sxx * syy).sqrt()).clamp(-1.0, 1.0)
    };

    let df = n - 2;
    if df == 0 {
        return Ok(LinregressResult {
            slope,
            intercept,
            rvalue,
            pvalue: 1.0,
            stderr: 0.0,
            intercept_stderr: 0.0,
        });
    }

    // residual variance from the identity RSS = Syy (1 - r^2)
    let rss = (syy * (1.0 - rvalue * rvalue)).max(0.0);
    let s2 = rss / df as f64;
    let stderr = (s2 / sxx).sqrt();
    let intercept_stderr = (s2 * (1.0 / n as f64 + mx * mx / sxx)).sqrt();

    let pvalue = if syy == 0.0 {
        1.0
    } else {
        let denom = 1.0 - rvalue * rvalue;
        if denom <= 0.0 {
            0.0
        } else {
            let t_stat = rvalue * (df as f64 / denom).sqrt();
            let dist = StudentT::new(df as f64)?;
            (2.0 * dist.sf(t_stat.abs())).min(1.0)
        }
    };

    Ok(LinregressResult {
        slope,
        intercept,
        rvalue,
        pvalue,
        stderr,
        intercept_stderr,
    })
}
