//! Chi-squared tests for frequency data: one-way goodness of fit and
//! contingency-table independence.

use crate::continuous::ChiSquared;
use crate::distribution::ContinuousDistribution;
use crate::error::{StatsError, StatsResult};

/// Statistic, degrees of freedom and p-value of a one-way chi-squared test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChiSquareResult {
    /// Chi-squared statistic
    pub statistic: f64,
    /// Degrees of freedom
    pub df: usize,
    /// Upper-tail p-value
    pub pvalue: f64,
}

impl ChiSquareResult {
    /// Whether H0 is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

/// Result of a chi-squared independence test on a contingency table.
#[derive(Debug, Clone, PartialEq)]
pub struct Chi2ContingencyResult {
    /// Chi-squared statistic
    pub statistic: f64,
    /// Degrees of freedom, (rows − 1)(cols − 1)
    pub df: usize,
    /// Upper-tail p-value
    pub pvalue: f64,
    /// Expected frequencies under independence
    pub expected: Vec<Vec<f64>>,
}

impl Chi2ContingencyResult {
    /// Whether H0 is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

fn chi2_pvalue(statistic: f64, df: usize) -> StatsResult<f64> {
    Ok(ChiSquared::new(df as u64)?.sf(statistic))
}

/// Chi-squared goodness-of-fit test of observed against expected
/// frequencies, with `ddof` extra degrees of freedom consumed by
/// parameters estimated from the data (df = k − 1 − ddof).
///
/// # Errors
///
/// Returns an error when the slices differ in length, an expected
/// frequency is not positive, or too few categories remain for the
/// requested `ddof`.
pub fn chisquare(observed: &[f64], expected: &[f64], ddof: usize) -> StatsResult<ChiSquareResult> {
    if observed.len() != expected.len() {
        return Err(StatsError::LengthMismatch {
            expected: observed.len(),
            got: expected.len(),
            context: "chi-squared test",
        });
    }
    if observed.len() < ddof + 2 {
        return Err(StatsError::InsufficientData {
            required: ddof + 2,
            got: observed.len(),
            context: "chi-squared test",
        });
    }
    let mut statistic = 0.0;
    for (&o, &e) in observed.iter().zip(expected) {
        if !(e > 0.0 && e.is_finite()) {
            return Err(StatsError::InvalidParameter {
                name: "expected",
                value: e,
                reason: "expected frequencies must be positive and finite",
            });
        }
        let d = o - e;
        statistic += d * d / e;
    }
    let df = observed.len() - 1 - ddof;
    Ok(ChiSquareResult {
        statistic,
        df,
        pvalue: chi2_pvalue(statistic, df)?,
    })
}

/// Goodness-of-fit test against a theoretical distribution given up to a
/// constant factor: `theoretical` is rescaled so its total matches the
/// observed total before the chi-squared statistic is formed.
///
/// # Errors
///
/// Returns an error when the slices differ in length, the theoretical
/// weights do not sum to a positive value, or any rescaled frequency is
/// not positive.
pub fn goodness_of_fit(
    empirical: &[f64],
    theoretical: &[f64],
    ddof: usize,
) -> StatsResult<ChiSquareResult> {
    if empirical.len() != theoretical.len() {
        return Err(StatsError::LengthMismatch {
            expected: empirical.len(),
            got: theoretical.len(),
            context: "goodness-of-fit test",
        });
    }
    let total: f64 = empirical.iter().sum();
    let weight: f64 = theoretical.iter().sum();
    if !(weight > 0.0 && weight.is_finite()) {
        return Err(StatsError::InvalidParameter {
            name: "theoretical",
            value: weight,
            reason: "weights must sum to a positive finite value",
        });
    }
    let scale = total / weight;
    let expected: Vec<f64> = theoretical.iter().map(|&t| t * scale).collect();
    chisquare(empirical, &expected, ddof)
}

/// Chi-squared test of independence on a two-way contingency table. The
/// expected cell counts are the outer product of the row and column
/// totals divided by the grand total. No continuity correction is
/// applied.
///
/// # Errors
///
/// Returns an error when the table is smaller than 2×2 or ragged, a cell
/// is negative, or a row or column sums to zero.
pub fn chi2_contingency(table: &[Vec<f64>]) -> StatsResult<Chi2ContingencyResult> {
    let rows = table.len();
    if rows < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: rows,
            context: "contingency table rows",
        });
    }
    let cols = table[0].len();
    if cols < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: cols,
            context: "contingency table columns",
        });
    }
    for row in table {
        if row.len() != cols {
            return Err(StatsError::LengthMismatch {
                expected: cols,
                got: row.len(),
                context: "contingency table row",
            });
        }
        for &cell in row {
            if !(cell >= 0.0 && cell.is_finite()) {
                return Err(StatsError::InvalidParameter {
                    name: "table",
                    value: cell,
                    reason: "cell counts must be non-negative and finite",
                });
            }
        }
    }

    let mut row_totals = vec![0.0; rows];
    let mut col_totals = vec![0.0; cols];
    for (i, row) in table.iter().enumerate() {
        for (j, &cell) in row.iter().enumerate() {
            row_totals[i] += cell;
            col_totals[j] += cell;
        }
    }
    let grand: f64 = row_totals.iter().sum();
    if row_totals.iter().chain(&col_totals).any(|&t| t == 0.0) {
        return Err(StatsError::NumericalError {
            message: "contingency table has an empty row or column".to_string(),
        });
    }

    let mut statistic = 0.0;
    let mut expected = vec![vec![0.0; cols]; rows];
    for i in 0..rows {
        for j in 0..cols {
            let e = row_totals[i] * col_totals[j] / grand;
            let d = table[i][j] - e;
            statistic += d * d / e;
            expected[i][j] = e;
        }
    }
    let df = (rows - 1) * (cols - 1);
    Ok(Chi2ContingencyResult {
        statistic,
        df,
        pvalue: chi2_pvalue(statistic, df)?,
        expected,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fair_die() {
        // 88 rolls against a uniform die: chi2 = 2 exactly
        let observed = [16.0, 18.0, 16.0, 14.0, 12.0, 12.0];
        let expected = [88.0 / 6.0; 6];
        let res = chisquare(&observed, &expected, 0).unwrap();
        assert!((res.statistic - 2.0).abs() < 1e-12);
        assert_eq!(res.df, 5);
        // scipy.stats.chisquare gives pvalue 0.84915
        assert!((res.pvalue - 0.84915).abs() < 1e-4);
        assert!(!res.reject(0.05));
    }

    #[test]
    fn test_ddof_shifts_df() {
        let observed = [16.0, 18.0, 16.0, 14.0, 12.0, 12.0];
        let expected = [88.0 / 6.0; 6];
        let res = chisquare(&observed, &expected, 1).unwrap();
        assert_eq!(res.df, 4);
        // chi2(4) survival at 2 is (1 + 1) e^{-1}
        assert!((res.pvalue - 2.0 * (-1.0f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_perfect_fit() {
        let freqs = [10.0, 20.0, 30.0];
        let res = chisquare(&freqs, &freqs, 0).unwrap();
        assert_eq!(res.statistic, 0.0);
        assert!((res.pvalue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_goodness_of_fit_rescales() {
        // proportions 1:2:3:4 against matching counts out of 100
        let empirical = [10.0, 20.0, 30.0, 40.0];
        let theoretical = [1.0, 2.0, 3.0, 4.0];
        let res = goodness_of_fit(&empirical, &theoretical, 0).unwrap();
        assert!(res.statistic.abs() < 1e-12);
        assert!((res.pvalue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_goodness_of_fit_mendel_style() {
        // 1:2:1 cross with 100 offspring: chi2 = 2.62, df = 2
        let empirical = [18.0, 55.0, 27.0];
        let theoretical = [0.25, 0.5, 0.25];
        let res = goodness_of_fit(&empirical, &theoretical, 0).unwrap();
        assert!((res.statistic - 2.62).abs() < 1e-12);
        assert_eq!(res.df, 2);
        // chi2(2) survival is e^{-x/2}
        assert!((res.pvalue - (-1.31f64).exp()).abs() < 1e-12);
    }

    #[test]
    fn test_contingency_2x3() {
        // balanced margins give expected [[25,25,50],[25,25,50]]
        let table = vec![vec![20.0, 30.0, 50.0], vec![30.0, 20.0, 50.0]];
        let res = chi2_contingency(&table).unwrap();
        assert!((res.statistic - 4.0).abs() < 1e-12);
        assert_eq!(res.df, 2);
        assert!((res.pvalue - (-2.0f64).exp()).abs() < 1e-12);
        assert!((res.expected[0][0] - 25.0).abs() < 1e-12);
        assert!((res.expected[1][2] - 50.0).abs() < 1e-12);
        // e^{-2} = 0.135: kept at 5%, rejected at 20%
        assert!(!res.reject(0.05));
        assert!(res.reject(0.2));
    }

    #[test]
    fn test_contingency_2x2() {
        let table = vec![vec![10.0, 20.0], vec![30.0, 40.0]];
        let res = chi2_contingency(&table).unwrap();
        assert!((res.statistic - 0.7936507936507936).abs() < 1e-12);
        assert_eq!(res.df, 1);
        assert!((res.pvalue - 0.3730).abs() < 1e-3);
        assert!((res.expected[0][0] - 12.0).abs() < 1e-12);
        assert!((res.expected[1][1] - 42.0).abs() < 1e-12);
    }

    #[test]
    fn test_independent_table_accepts() {
        // rows proportional to each other: statistic is exactly zero
        let table = vec![vec![10.0, 20.0, 30.0], vec![20.0, 40.0, 60.0]];
        let res = chi2_contingency(&table).unwrap();
        assert!(res.statistic.abs() < 1e-12);
        assert!((res.pvalue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_rejects_bad_input() {
        assert!(chisquare(&[1.0, 2.0], &[1.0], 0).is_err());
        assert!(chisquare(&[1.0, 2.0], &[1.0, 0.0], 0).is_err());
        assert!(chisquare(&[1.0, 2.0], &[1.0, 2.0], 1).is_err()); // df would be 0
        assert!(goodness_of_fit(&[1.0, 2.0], &[0.0, 0.0], 0).is_err());
        assert!(chi2_contingency(&[vec![1.0, 2.0]]).is_err());
        assert!(chi2_contingency(&[vec![1.0], vec![2.0]]).is_err());
        assert!(chi2_contingency(&[vec![1.0, 2.0], vec![3.0]]).is_err());
        assert!(chi2_contingency(&[vec![1.0, 0.0], vec![2.0, 0.0]]).is_err());
        assert!(chi2_contingency(&[vec![1.0, -2.0], vec![3.0, 4.0]]).is_err());
    }
}
