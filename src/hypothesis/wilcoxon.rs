//! Wilcoxon signed-rank test for paired samples.

use crate::continuous::Normal;
use crate::descriptive::rankdata;
use crate::distribution::ContinuousDistribution;
use crate::error::{StatsError, StatsResult};

/// Rank sums and normal-approximation p-value of a [`wilcoxon`] test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WilcoxonResult {
    /// The smaller of the two signed rank sums
    pub statistic: f64,
    /// Sum of ranks of positive differences
    pub w_plus: f64,
    /// Sum of ranks of negative differences
    pub w_minus: f64,
    /// Standardized statistic under the normal approximation
    pub zvalue: f64,
    /// Two-sided p-value
    pub pvalue: f64,
}

impl WilcoxonResult {
    /// Whether H0 is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

/// Wilcoxon signed-rank test of H0: the paired differences x − y are
/// symmetric about zero.
///
/// Zero differences are discarded and tied absolute differences receive
/// mid-ranks. The statistic is the smaller signed rank sum, referred to
/// its tie-corrected normal approximation; the p-value is two-sided.
///
/// # Errors
///
/// Returns an error when the samples differ in length or every
/// difference is zero.
pub fn wilcoxon(x: &[f64], y: &[f64]) -> StatsResult<WilcoxonResult> {
    if x.len() != y.len() {
        return Err(StatsError::LengthMismatch {
            expected: x.len(),
            got: y.len(),
            context: "Wilcoxon signed-rank test",
        });
    }
    let diffs: Vec<f64> = x
        .iter()
        .zip(y)
        .map(|(a, b)| a - b)
        .filter(|d| *d != 0.0)
        .collect();
    if diffs.is_empty() {
        return Err(StatsError::InsufficientData {
            required: 1,
            got: 0,
            context: "Wilcoxon signed-rank test (non-zero differences)",
        });
    }

    let abs: Vec<f64> = diffs.iter().map(|d| d.abs()).collect();
    let ranks = rankdata(&abs);
    let mut w_plus = 0.0;
    for (d, r) in diffs.iter().zip(&ranks) {
        if *d > 0.0 {
            w_plus += r;
        }
    }
    let n = diffs.len() as f64;
    let w_minus = n * (n + 1.0) / 2.0 - w_plus;
    let statistic = w_plus.min(w_minus);

    // tie correction: sum t^3 - t over groups of equal |d|
    let mut sorted = abs;
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let mut tie_sum = 0.0;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        let t = (j - i) as f64;
        tie_sum += t * t * t - t;
        i = j;
    }

    let mean = n * (n + 1.0) / 4.0;
    let var = n * (n + 1.0) * (2.0 * n + 1.0) / 24.0 - tie_sum / 48.0;
    let zvalue = (statistic - mean) / var.sqrt();

    let standard = Normal::standard();
    let pvalue = (2.0 * standard.cdf(zvalue)).min(1.0);
    Ok(WilcoxonResult {
        statistic,
        w_plus,
        w_minus,
        zvalue,
        pvalue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distinct_ranks() {
        // differences [-2,-1,3..10]: W- = 3, W+ = 52
        let x = [0.0, 0.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0];
        let y = [2.0, 1.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0, 0.0];
        let res = wilcoxon(&x, &y).unwrap();
        assert_eq!(res.w_plus, 52.0);
        assert_eq!(res.w_minus, 3.0);
        assert_eq!(res.statistic, 3.0);
        // z = (3 - 27.5)/sqrt(96.25)
        assert!((res.zvalue + 24.5 / 96.25f64.sqrt()).abs() < 1e-12);
        assert!((res.pvalue - 0.012515).abs() < 1e-4);
        assert!(res.reject(0.05));
        assert!(!res.reject(0.01));
    }

    #[test]
    fn test_tied_ranks_are_averaged() {
        // differences [1,-1,2,2,3]: mid-ranks 1.5,1.5,3.5,3.5,5
        let x = [1.0, 0.0, 2.0, 2.0, 3.0];
        let y = [0.0, 1.0, 0.0, 0.0, 0.0];
        let res = wilcoxon(&x, &y).unwrap();
        assert!((res.w_minus - 1.5).abs() < 1e-12);
        assert!((res.w_plus - 13.5).abs() < 1e-12);
        // two tie groups of size two shave 12/48 off the variance
        assert!((res.zvalue + 6.0 / 13.5f64.sqrt()).abs() < 1e-12);
        assert!((res.pvalue - 0.1025).abs() < 1e-3);
    }

    #[test]
    fn test_zero_differences_are_dropped() {
        let x = [5.0, 6.0, 3.0, 9.0];
        let y = [5.0, 5.0, 5.0, 6.0];
        let res = wilcoxon(&x, &y).unwrap();
        // remaining differences [1,-2,3]
        assert_eq!(res.w_plus, 4.0);
        assert_eq!(res.w_minus, 2.0);
        assert!((res.zvalue + 1.0 / 3.5f64.sqrt()).abs() < 1e-12);
        assert!((res.pvalue - 0.593).abs() < 1e-3);
    }

    #[test]
    fn test_rank_sums_are_complementary() {
        let x = [1.2, 3.4, 2.2, 5.1, 0.3, 2.8];
        let y = [0.8, 2.9, 2.9, 4.0, 1.1, 2.0];
        let res = wilcoxon(&x, &y).unwrap();
        assert!((res.w_plus + res.w_minus - 21.0).abs() < 1e-12);
        // swapping the samples swaps the rank sums but not the p-value
        let swapped = wilcoxon(&y, &x).unwrap();
        assert_eq!(res.w_plus, swapped.w_minus);
        assert!((res.pvalue - swapped.pvalue).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(wilcoxon(&[1.0, 2.0], &[1.0]).is_err());
        assert!(wilcoxon(&[1.0, 2.0], &[1.0, 2.0]).is_err());
    }
}
