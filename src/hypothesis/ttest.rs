//! Student's t tests for one and two samples.
//!
//! All p-values are two-sided. The `_from_stats` variants accept summary
//! statistics with the sample (n − 1) standard deviation convention.

use crate::continuous::StudentT;
use crate::distribution::ContinuousDistribution;
use crate::error::{StatsError, StatsResult};

/// Statistic, degrees of freedom and two-sided p-value of a t test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TTestResult {
    /// t statistic
    pub statistic: f64,
    /// Degrees of freedom (fractional for the Welch test)
    pub df: f64,
    /// Two-sided p-value
    pub pvalue: f64,
}

impl TTestResult {
    /// Whether H0 is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

fn two_sided_pvalue(t_stat: f64, df: f64) -> StatsResult<f64> {
    let dist = StudentT::new(df)?;
    Ok((2.0 * dist.sf(t_stat.abs())).min(1.0))
}

fn sample_mean_and_std(data: &[f64], context: &'static str) -> StatsResult<(f64, f64)> {
    if data.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: data.len(),
            context,
        });
    }
    let n = data.len() as f64;
    let mean = data.iter().sum::<f64>() / n;
    let ss: f64 = data.iter().map(|x| (x - mean) * (x - mean)).sum();
    Ok((mean, (ss / (n - 1.0)).sqrt()))
}

/// One-sample t test of H0: μ = `popmean` from summary statistics.
///
/// # Errors
///
/// Returns an error when `n` is below 2 or `sample_std` is not positive.
pub fn ttest_1samp_from_stats(
    sample_mean: f64,
    sample_std: f64,
    n: usize,
    popmean: f64,
) -> StatsResult<TTestResult> {
    if n < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: n,
            context: "one-sample t test",
        });
    }
    if !(sample_std > 0.0 && sample_std.is_finite()) {
        return Err(StatsError::InvalidParameter {
            name: "sample_std",
            value: sample_std,
            reason: "must be positive and finite",
        });
    }
    let df = (n - 1) as f64;
    let statistic = (sample_mean - popmean) * (n as f64).sqrt() / sample_std;
    Ok(TTestResult {
        statistic,
        df,
        pvalue: two_sided_pvalue(statistic, df)?,
    })
}

/// One-sample t test of H0: μ = `popmean`.
///
/// # Errors
///
/// Returns an error when fewer than two observations are given or the
/// sample is constant.
pub fn ttest_1samp(data: &[f64], popmean: f64) -> StatsResult<TTestResult> {
    let (mean, std) = sample_mean_and_std(data, "one-sample t test")?;
    if std == 0.0 {
        return Err(StatsError::NumericalError {
            message: "t statistic is undefined for a constant sample".to_string(),
        });
    }
    ttest_1samp_from_stats(mean, std, data.len(), popmean)
}

/// Paired t test: one-sample t test on the elementwise differences x − y
/// against zero.
///
/// # Errors
///
/// Returns an error when the samples differ in length, are shorter than
/// two, or the differences are constant.
pub fn ttest_rel(x: &[f64], y: &[f64]) -> StatsResult<TTestResult> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "paired t test",
        });
    }
    let diffs: Vec<f64> = x.iter().zip(y).map(|(a, b)| a - b).collect();
    ttest_1samp(&diffs, 0.0)
}

/// Two-sample t test from summary statistics; `equal_var` selects the
/// pooled-variance test, otherwise Welch's unequal-variance test with
/// Welch–Satterthwaite degrees of freedom.
///
/// # Errors
///
/// Returns an error when either sample has fewer than two observations, a
/// standard deviation is not positive, or both variances vanish.
#[allow(clippy::too_many_arguments)]
pub fn ttest_ind_from_stats(
    mean1: f64,
    std1: f64,
    n1: usize,
    mean2: f64,
    std2: f64,
    n2: usize,
    equal_var: bool,
) -> StatsResult<TTestResult> {
    if n1 < 2 || n2 < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: n1.min(n2),
            context: "two-sample t test",
        });
    }
    for (name, std) in [("std1", std1), ("std2", std2)] {
        if !(std >= 0.0 && std.is_finite()) {
            return Err(StatsError::InvalidParameter {
                name,
                value: std,
                reason: "must be non-negative and finite",
            });
        }
    }
    let (v1, v2) = (std1 * std1, std2 * std2);
    let (fn1, fn2) = (n1 as f64, n2 as f64);

    let (se2, df) = if equal_var {
        let df = fn1 + fn2 - 2.0;
        let pooled = ((fn1 - 1.0) * v1 + (fn2 - 1.0) * v2) / df;
        (pooled * (1.0 / fn1 + 1.0 / fn2), df)
    } else {
        let (a, b) = (v1 / fn1, v2 / fn2);
        let se2 = a + b;
        let df = se2 * se2 / (a * a / (fn1 - 1.0) + b * b / (fn2 - 1.0));
        (se2, df)
    };
    if se2 == 0.0 {
        return Err(StatsError::NumericalError {
            message: "t statistic is undefined when both samples are constant".to_string(),
        });
    }

    let statistic = (mean1 - mean2) / se2.sqrt();
    Ok(TTestResult {
        statistic,
        df,
        pvalue: two_sided_pvalue(statistic, df)?,
    })
}

/// Two-sample t test of H0: μ₁ = μ₂ on raw data.
///
/// # Errors
///
/// Returns an error when either sample has fewer than two observations or
/// both samples are constant.
pub fn ttest_ind(x: &[f64], y: &[f64], equal_var: bool) -> StatsResult<TTestResult> {
    let (m1, s1) = sample_mean_and_std(x, "two-sample t test")?;
    let (m2, s2) = sample_mean_and_std(y, "two-sample t test")?;
    ttest_ind_from_stats(m1, s1, x.len(), m2, s2, y.len(), equal_var)
}
