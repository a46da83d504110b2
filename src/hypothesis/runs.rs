//! Wald–Wolfowitz runs test for randomness.

use crate::continuous::Normal;
use crate::descriptive::median;
use crate::distribution::ContinuousDistribution;
use crate::error::{StatsError, StatsResult};

/// Run counts and normal-approximation p-value of a [`runs_test`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RunsTestResult {
    /// Number of runs of consecutive same-side observations
    pub runs: usize,
    /// Observations below the sample median
    pub n_below: usize,
    /// Observations above the sample median
    pub n_above: usize,
    /// Standardized run count under the normal approximation
    pub zvalue: f64,
    /// Two-sided p-value
    pub pvalue: f64,
}

impl RunsTestResult {
    /// Whether H0 is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

/// Runs test of H0: the sequence is random, using the sample median as
/// the cut point. Observations equal to the median are discarded.
///
/// Too few runs indicate clustering, too many indicate oscillation; both
/// directions count against H0 through the two-sided p-value.
///
/// # Errors
///
/// Returns an error when the data are empty or, after dropping
/// median-tied values, one side is unpopulated.
pub fn runs_test(data: &[f64]) -> StatsResult<RunsTestResult> {
    let med = median(data)?;
    let sides: Vec<bool> = data
        .iter()
        .filter(|&&x| x != med)
        .map(|&x| x > med)
        .collect();
    let n_above = sides.iter().filter(|&&s| s).count();
    let n_below = sides.len() - n_above;
    if n_below == 0 || n_above == 0 {
        return Err(StatsError::InsufficientData {
            required: 1,
            got: 0,
            context: "runs test (observations on each side of the median)",
        });
    }

    let runs = 1 + sides.windows(2).filter(|w| w[0] != w[1]).count();

    let (a, b) = (n_below as f64, n_above as f64);
    let n = a + b;
    let two_ab = 2.0 * a * b;
    let mean = two_ab / n + 1.0;
    let var = two_ab * (two_ab - n) / (n * n * (n - 1.0));
    let zvalue = (runs as f64 - mean) / var.sqrt();

    let standard = Normal::standard();
    let pvalue = (2.0 * standard.sf(zvalue.abs())).min(1.0);
    Ok(RunsTestResult {
        runs,
        n_below,
        n_above,
        zvalue,
        pvalue,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alternating_sequence() {
        // perfect oscillation: 8 runs where 5 are expected
        let data = [1.0, 2.0, 1.0, 2.0, 1.0, 2.0, 1.0, 2.0];
        let res = runs_test(&data).unwrap();
        assert_eq!(res.runs, 8);
        assert_eq!(res.n_below, 4);
        assert_eq!(res.n_above, 4);
        assert!((res.zvalue - 3.0 * (7.0f64 / 12.0).sqrt()).abs() < 1e-12);
        assert!((res.pvalue - 0.02195).abs() < 1e-4);
        assert!(res.reject(0.05));
        assert!(!res.reject(0.01));
    }

    #[test]
    fn test_clustered_sequence_mirrors_alternating() {
        // two runs where 5 are expected: same |z| as perfect oscillation
        let data = [1.0, 1.0, 1.0, 1.0, 2.0, 2.0, 2.0, 2.0];
        let res = runs_test(&data).unwrap();
        assert_eq!(res.runs, 2);
        assert!((res.zvalue + 3.0 * (7.0f64 / 12.0).sqrt()).abs() < 1e-12);
        assert!((res.pvalue - 0.02195).abs() < 1e-4);
    }

    #[test]
    fn test_median_ties_are_dropped() {
        // median 2: the three 2s drop, leaving below/above/below/above
        let data = [1.0, 2.0, 3.0, 2.0, 1.0, 2.0, 3.0];
        let res = runs_test(&data).unwrap();
        assert_eq!(res.n_below, 2);
        assert_eq!(res.n_above, 2);
        assert_eq!(res.runs, 4);
        assert!((res.zvalue - 1.5f64.sqrt()).abs() < 1e-12);
        assert!((res.pvalue - 0.2207).abs() < 1e-3);
    }

    #[test]
    fn test_monotone_sequence_has_two_runs() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0];
        let res = runs_test(&data).unwrap();
        assert_eq!(res.runs, 2);
        assert!((res.zvalue + 2.0 / 1.2f64.sqrt()).abs() < 1e-12);
        assert!(res.pvalue < 0.1);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(runs_test(&[]).is_err());
        assert!(runs_test(&[3.0, 3.0, 3.0]).is_err());
    }
}
