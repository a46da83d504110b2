//! One-way analysis of variance.

use crate::continuous::FDistribution;
use crate::distribution::ContinuousDistribution;
use crate::error::{StatsError, StatsResult};

/// Full decomposition produced by [`f_oneway`].
#[derive(Debug, Clone, PartialEq)]
pub struct AnovaResult {
    /// F statistic, the ratio of the mean squares
    pub statistic: f64,
    /// Upper-tail p-value
    pub pvalue: f64,
    /// Between-group degrees of freedom, k − 1
    pub df_between: usize,
    /// Within-group degrees of freedom, N − k
    pub df_within: usize,
    /// Between-group sum of squares
    pub ss_between: f64,
    /// Within-group sum of squares
    pub ss_within: f64,
    /// Between-group mean square
    pub ms_between: f64,
    /// Within-group mean square
    pub ms_within: f64,
}

impl AnovaResult {
    /// Whether H0 is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

/// One-way ANOVA F test of H0: all group means are equal.
///
/// The total variation is split into between-group and within-group sums
/// of squares; their mean squares form the F statistic, referred to the
/// F distribution with (k − 1, N − k) degrees of freedom.
///
/// # Errors
///
/// Returns an error when fewer than two groups are given, any group has
/// fewer than two observations, or the within-group variance is zero.
pub fn f_oneway(groups: &[&[f64]]) -> StatsResult<AnovaResult> {
    if groups.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: groups.len(),
            context: "ANOVA groups",
        });
    }
    let mut total = 0.0;
    let mut count = 0usize;
    for group in groups {
        if group.len() < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                got: group.len(),
                context: "ANOVA group",
            });
        }
        total += group.iter().sum::<f64>();
        count += group.len();
    }
    let k = groups.len();
    let grand_mean = total / count as f64;

    let mut ss_between = 0.0;
    let mut ss_within = 0.0;
    for group in groups {
        let n = group.len() as f64;
        let mean = group.iter().sum::<f64>() / n;
        ss_between += n * (mean - grand_mean) * (mean - grand_mean);
        ss_within += group.iter().map(|x| (x - mean) * (x - mean)).sum::<f64>();
    }

    let df_between = k - 1;
    let df_within = count - k;
    let ms_between = ss_between / df_between as f64;
    let ms_within = ss_within / df_within as f64;
    if ms_within == 0.0 {
        return Err(StatsError::NumericalError {
            message: "F statistic is undefined with zero within-group variance".to_string(),
        });
    }

    let statistic = ms_between / ms_within;
    let dist = FDistribution::new(df_between as f64, df_within as f64)?;
    Ok(AnovaResult {
        statistic,
        pvalue: dist.sf(statistic),
        df_between,
        df_within,
        ss_between,
        ss_within,
        ms_between,
        ms_within,
    })
}
