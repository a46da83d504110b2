//! Descriptive statistics over f64 samples.
//!
//! Centers (mean, median, mode, the Pythagorean means), dispersion measures
//! (variance in both the sample and population convention, absolute
//! deviation, coefficient of variation), positional measures (quartiles,
//! interquartile range) and the small utilities the hypothesis tests build
//! on (ranks, z-scores, standard error of the mean).
//!
//! Quartiles follow the median-of-halves convention: the data is sorted and
//! split at the median, the middle element is excluded when the length is
//! odd, and Q1/Q3 are the medians of the halves.

use crate::error::{StatsError, StatsResult};
use std::cmp::Ordering;

/// Lower quartile, median and upper quartile of a sample.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quartiles {
    /// First quartile Q1
    pub q1: f64,
    /// Second quartile (median)
    pub q2: f64,
    /// Third quartile Q3
    pub q3: f64,
}

/// Summary returned by [`describe`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DescriptiveStats {
    /// Number of observations
    pub count: usize,
    /// Sum of the observations
    pub sum: f64,
    /// Arithmetic mean
    pub mean: f64,
    /// Median
    pub median: f64,
    /// Most frequent value (smallest on ties)
    pub mode: f64,
    /// Sample variance (n − 1 denominator)
    pub variance: f64,
    /// Sample standard deviation (n − 1 denominator)
    pub std: f64,
    /// Smallest observation
    pub min: f64,
    /// First quartile
    pub q1: f64,
    /// Third quartile
    pub q3: f64,
    /// Largest observation
    pub max: f64,
    /// Spread max − min
    pub range: f64,
    /// Geometric mean, `None` unless every observation is positive
    pub geometric_mean: Option<f64>,
    /// Harmonic mean, `None` when an observation is negative
    pub harmonic_mean: Option<f64>,
}

/// Arithmetic mean.
///
/// # Errors
///
/// Returns an error when `data` is empty.
pub fn mean(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData { context: "mean" });
    }
    Ok(data.iter().sum::<f64>() / data.len() as f64)
}

/// Smallest observation.
pub fn minimum(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData { context: "minimum" });
    }
    Ok(data.iter().copied().fold(f64::INFINITY, f64::min))
}

/// Largest observation.
pub fn maximum(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData { context: "maximum" });
    }
    Ok(data.iter().copied().fold(f64::NEG_INFINITY, f64::max))
}

/// Spread between the largest and smallest observation.
pub fn range(data: &[f64]) -> StatsResult<f64> {
    Ok(maximum(data)? - minimum(data)?)
}

/// Median of the sample.
///
/// # Errors
///
/// Returns an error when `data` is empty.
pub fn median(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData { context: "median" });
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    Ok(median_sorted(&sorted))
}

// Median of an already sorted, nonempty slice.
fn median_sorted(sorted: &[f64]) -> f64 {
    let n = sorted.len();
    let mid = n / 2;
    if n % 2 == 1 {
        sorted[mid]
    } else {
        0.5 * (sorted[mid - 1] + sorted[mid])
    }
}

/// Most frequent value; when several values share the highest count the
/// smallest of them is returned.
///
/// # Errors
///
/// Returns an error when `data` is empty.
pub fn mode(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData { context: "mode" });
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let mut best_value = sorted[0];
    let mut best_count = 0usize;
    let mut i = 0;
    while i < sorted.len() {
        let mut j = i + 1;
        while j < sorted.len() && sorted[j] == sorted[i] {
            j += 1;
        }
        // strict comparison keeps the smallest value on ties
        if j - i > best_count {
            best_count = j - i;
            best_value = sorted[i];
        }
        i = j;
    }
    Ok(best_value)
}

/// Sample variance with the n − 1 denominator.
///
/// # Errors
///
/// Returns an error when fewer than two observations are given.
pub fn variance(data: &[f64]) -> StatsResult<f64> {
    if data.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: data.len(),
            context: "sample variance",
        });
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    Ok(ss / (data.len() - 1) as f64)
}

/// Sample standard deviation with the n − 1 denominator.
pub fn std_dev(data: &[f64]) -> StatsResult<f64> {
    Ok(variance(data)?.sqrt())
}

/// Population variance with the n denominator.
///
/// # Errors
///
/// Returns an error when `data` is empty.
pub fn population_variance(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData {
            context: "population variance",
        });
    }
    let m = mean(data)?;
    let ss: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    Ok(ss / data.len() as f64)
}

/// Population standard deviation with the n denominator.
pub fn population_std_dev(data: &[f64]) -> StatsResult<f64> {
    Ok(population_variance(data)?.sqrt())
}

/// Geometric mean, defined for strictly positive data. Computed through the
/// mean of logs so long products cannot overflow.
///
/// # Errors
///
/// Returns an error when `data` is empty or contains a non-positive value.
pub fn geometric_mean(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData {
            context: "geometric mean",
        });
    }
    let mut log_sum = 0.0;
    for &x in data {
        if x <= 0.0 {
            return Err(StatsError::OutOfSupport {
                value: x,
                support: "(0, inf)",
            });
        }
        log_sum += x.ln();
    }
    Ok((log_sum / data.len() as f64).exp())
}

/// Harmonic mean of non-negative data. A single zero pulls the mean down to
/// zero, matching the limit of the defining formula.
///
/// # Errors
///
/// Returns an error when `data` is empty or contains a negative value.
pub fn harmonic_mean(data: &[f64]) -> StatsResult<f64> {
    if data.is_empty() {
        return Err(StatsError::EmptyData {
            context: "harmonic mean",
        });
    }
    let mut recip_sum = 0.0;
    let mut has_zero = false;
    for &x in data {
        if x < 0.0 {
            return Err(StatsError::OutOfSupport {
                value: x,
                support: "[0, inf)",
            });
        }
        if x == 0.0 {
            has_zero = true;
        } else {
            recip_sum += 1.0 / x;
        }
    }
    if has_zero {
        return Ok(0.0);
    }
    Ok(data.len() as f64 / recip_sum)
}

/// Coefficient of variation: population standard deviation over the mean.
///
/// # Errors
///
/// Returns an error when `data` is empty or its mean is zero.
pub fn coefficient_of_variation(data: &[f64]) -> StatsResult<f64> {
    let m = mean(data)?;
    if m == 0.0 {
        return Err(StatsError::NumericalError {
            message: "coefficient of variation is undefined for a zero mean".to_string(),
        });
    }
    Ok(population_std_dev(data)? / m)
}

/// Mean absolute deviation about the mean.
///
/// # Errors
///
/// Returns an error when `data` is empty.
pub fn mean_absolute_deviation(data: &[f64]) -> StatsResult<f64> {
    let m = mean(data)?;
    Ok(data.iter().map(|x| (x - m).abs()).sum::<f64>() / data.len() as f64)
}

/// Quartiles by the median-of-halves rule (the middle element is excluded
/// from both halves when the length is odd).
///
/// # Errors
///
/// Returns an error when fewer than two observations are given.
pub fn quartiles(data: &[f64]) -> StatsResult<Quartiles> {
    if data.len() < 2 {
        return Err(StatsError::InsufficientData {
            required: 2,
            got: data.len(),
            context: "quartiles",
        });
    }
    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));

    let n = sorted.len();
    let half = n / 2;
    Ok(Quartiles {
        q1: median_sorted(&sorted[..half]),
        q2: median_sorted(&sorted),
        q3: median_sorted(&sorted[n - half..]),
    })
}

/// Interquartile range Q3 − Q1.
pub fn iqr(data: &[f64]) -> StatsResult<f64> {
    let q = quartiles(data)?;
    Ok(q.q3 - q.q1)
}

/// Ranks of the observations, 1-based, with tied values sharing the average
/// of the ranks they occupy.
pub fn rankdata(data: &[f64]) -> Vec<f64> {
    let n = data.len();
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| data[a].partial_cmp(&data[b]).unwrap_or(Ordering::Equal));

    let mut ranks = vec![0.0; n];
    let mut i = 0;
    while i < n {
        let mut j = i;
        while j + 1 < n && data[order[j + 1]] == data[order[i]] {
            j += 1;
        }
        let shared = (i + j) as f64 / 2.0 + 1.0;
        for &idx in &order[i..=j] {
            ranks[idx] = shared;
        }
        i = j + 1;
    }
    ranks
}

/// Standard scores (x − mean) / population standard deviation.
///
/// # Errors
///
/// Returns an error when `data` is empty or has zero spread.
pub fn zscores(data: &[f64]) -> StatsResult<Vec<f64>> {
    let m = mean(data)?;
    let sd = population_std_dev(data)?;
    if sd == 0.0 {
        return Err(StatsError::NumericalError {
            message: "z-scores are undefined for a constant sample".to_string(),
        });
    }
    Ok(data.iter().map(|x| (x - m) / sd).collect())
}

/// Standard error of the mean s / √n with the sample standard deviation.
///
/// # Errors
///
/// Returns an error when fewer than two observations are given.
pub fn sem(data: &[f64]) -> StatsResult<f64> {
    Ok(std_dev(data)? / (data.len() as f64).sqrt())
}

/// Complete summary panel: count, sum, the three centers, dispersion in the
/// sample convention, the five-number summary and the Pythagorean means.
///
/// The geometric and harmonic means are only defined on positive
/// (respectively non-negative) data; outside their domain the corresponding
/// field is `None` rather than the whole summary failing.
///
/// # Errors
///
/// Returns an error when fewer than two observations are given.
pub fn describe(data: &[f64]) -> StatsResult<DescriptiveStats> {
    let q = quartiles(data)?;
    let min = minimum(data)?;
    let max = maximum(data)?;
    let var = variance(data)?;
    Ok(DescriptiveStats {
        count: data.len(),
        sum: data.iter().sum(),
        mean: mean(data)?,
        median: q.q2,
        mode: mode(data)?,
        variance: var,
        std: var.sqrt(),
        min,
        q1: q.q1,
        q3: q.q3,
        max,
        range: max - min,
        geometric_mean: geometric_mean(data).ok(),
        harmonic_mean: harmonic_mean(data).ok(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    // worked example used throughout the dispersion formulas
    const WAGES: [f64; 7] = [40.0, 42.0, 47.0, 53.0, 54.0, 59.0, 65.0];

    #[test]
    fn test_mean() {
        assert!((mean(&WAGES).unwrap() - 360.0 / 7.0).abs() < 1e-12);
        assert!(mean(&[]).is_err());
    }

    #[test]
    fn test_min_max_range() {
        assert_eq!(minimum(&WAGES).unwrap(), 40.0);
        assert_eq!(maximum(&WAGES).unwrap(), 65.0);
        assert_eq!(range(&WAGES).unwrap(), 25.0);
        assert!(range(&[]).is_err());
    }

    #[test]
    fn test_variance_conventions() {
        // sum of squared deviations is 489.714285...; the two conventions
        // divide by 6 and 7 respectively
        assert!((variance(&WAGES).unwrap() - 489.7142857142857 / 6.0).abs() < 1e-10);
        assert!((population_variance(&WAGES).unwrap() - 489.7142857142857 / 7.0).abs() < 1e-10);
        assert!((std_dev(&WAGES).unwrap() - (489.7142857142857f64 / 6.0).sqrt()).abs() < 1e-12);
        assert!(
            (population_std_dev(&WAGES).unwrap() - (489.7142857142857f64 / 7.0).sqrt()).abs()
                < 1e-12
        );

        assert!(variance(&[1.0]).is_err());
        assert!((population_variance(&[1.0]).unwrap()).abs() < 1e-15);
    }

    #[test]
    fn test_coefficient_of_variation() {
        let expected = population_std_dev(&WAGES).unwrap() / (360.0 / 7.0);
        assert!((coefficient_of_variation(&WAGES).unwrap() - expected).abs() < 1e-12);
        assert!(coefficient_of_variation(&[-1.0, 1.0]).is_err());
    }

    #[test]
    fn test_mean_absolute_deviation() {
        // deviations sum to 50.571428...
        assert!((mean_absolute_deviation(&WAGES).unwrap() - 50.57142857142857 / 7.0).abs() < 1e-10);
        assert_eq!(mean_absolute_deviation(&[3.0, 3.0]).unwrap(), 0.0);
    }

    #[test]
    fn test_median() {
        assert_eq!(median(&WAGES).unwrap(), 53.0);
        assert_eq!(median(&[4.0, 1.0]).unwrap(), 2.5);
        assert_eq!(median(&[9.0]).unwrap(), 9.0);
        // order of the input does not matter
        assert_eq!(median(&[5.0, 1.0, 4.0, 2.0, 3.0]).unwrap(), 3.0);
    }

    #[test]
    fn test_mode() {
        assert_eq!(mode(&[1.0, 2.0, 2.0, 3.0]).unwrap(), 2.0);
        // ties resolve to the smallest value
        assert_eq!(mode(&[3.0, 3.0, 2.0, 2.0, 5.0]).unwrap(), 2.0);
        // all singletons: every value ties, smallest wins
        assert_eq!(mode(&[4.0, 1.0, 7.0]).unwrap(), 1.0);
        assert!(mode(&[]).is_err());
    }

    #[test]
    fn test_geometric_mean() {
        assert!((geometric_mean(&[1.0, 3.0, 9.0]).unwrap() - 3.0).abs() < 1e-12);
        assert!((geometric_mean(&[2.0, 8.0]).unwrap() - 4.0).abs() < 1e-12);
        assert!(geometric_mean(&[1.0, 0.0]).is_err());
        assert!(geometric_mean(&[1.0, -2.0]).is_err());
    }

    #[test]
    fn test_harmonic_mean() {
        assert!((harmonic_mean(&[1.0, 4.0, 4.0]).unwrap() - 2.0).abs() < 1e-12);
        // any zero collapses the harmonic mean to zero
        assert_eq!(harmonic_mean(&[2.0, 0.0, 5.0]).unwrap(), 0.0);
        assert!(harmonic_mean(&[2.0, -1.0]).is_err());
    }

    #[test]
    fn test_quartiles_odd_length() {
        // 13 observations; middle element excluded from both halves
        let data = [
            7.0, 7.0, 31.0, 31.0, 47.0, 75.0, 87.0, 115.0, 116.0, 119.0, 119.0, 155.0, 177.0,
        ];
        let q = quartiles(&data).unwrap();
        assert_eq!(q.q1, 31.0);
        assert_eq!(q.q2, 87.0);
        assert_eq!(q.q3, 119.0);
        assert_eq!(iqr(&data).unwrap(), 88.0);
    }

    #[test]
    fn test_quartiles_even_length() {
        let data = [
            1.0, 3.0, 7.0, 7.0, 31.0, 31.0, 47.0, 75.0, 87.0, 115.0, 116.0, 119.0, 119.0, 155.0,
            177.0, 198.0,
        ];
        let q = quartiles(&data).unwrap();
        assert_eq!(q.q1, 19.0);
        assert_eq!(q.q2, 81.0);
        assert_eq!(q.q3, 119.0);
        assert_eq!(iqr(&data).unwrap(), 100.0);
    }

    #[test]
    fn test_quartiles_small_samples() {
        let q = quartiles(&[1.0, 2.0]).unwrap();
        assert_eq!(q.q1, 1.0);
        assert_eq!(q.q2, 1.5);
        assert_eq!(q.q3, 2.0);
        assert!(quartiles(&[1.0]).is_err());
    }

    #[test]
    fn test_rankdata() {
        assert_eq!(rankdata(&[3.0, 1.0, 4.0, 1.0, 5.0]), vec![3.0, 1.5, 4.0, 1.5, 5.0]);
        // all equal values share the middle rank
        assert_eq!(rankdata(&[2.0, 2.0, 2.0]), vec![2.0, 2.0, 2.0]);
        assert!(rankdata(&[]).is_empty());
    }

    #[test]
    fn test_zscores() {
        let z = zscores(&[2.0, 4.0, 6.0]).unwrap();
        let r = (1.5f64).sqrt();
        assert!((z[0] + r).abs() < 1e-12);
        assert!(z[1].abs() < 1e-12);
        assert!((z[2] - r).abs() < 1e-12);
        // standardized scores always have zero mean
        assert!(z.iter().sum::<f64>().abs() < 1e-12);
        assert!(zscores(&[5.0, 5.0]).is_err());
    }

    #[test]
    fn test_sem() {
        let expected = std_dev(&WAGES).unwrap() / 7f64.sqrt();
        assert!((sem(&WAGES).unwrap() - expected).abs() < 1e-12);
        assert!(sem(&[1.0]).is_err());
    }

    #[test]
    fn test_describe() {
        let data = [
            7.0, 7.0, 31.0, 31.0, 47.0, 75.0, 87.0, 115.0, 116.0, 119.0, 119.0, 155.0, 177.0,
        ];
        let d = describe(&data).unwrap();
        assert_eq!(d.count, 13);
        assert_eq!(d.sum, 1086.0);
        assert_eq!(d.min, 7.0);
        assert_eq!(d.q1, 31.0);
        assert_eq!(d.median, 87.0);
        assert_eq!(d.q3, 119.0);
        assert_eq!(d.max, 177.0);
        assert_eq!(d.range, 170.0);
        // counts tie at two for 7, 31 and 119; the smallest wins
        assert_eq!(d.mode, 7.0);
        assert!((d.mean - mean(&data).unwrap()).abs() < 1e-12);
        assert!((d.variance - variance(&data).unwrap()).abs() < 1e-12);
        assert!((d.std - std_dev(&data).unwrap()).abs() < 1e-12);
        let gm = d.geometric_mean.unwrap();
        assert!((gm - geometric_mean(&data).unwrap()).abs() < 1e-12);
        let hm = d.harmonic_mean.unwrap();
        assert!((hm - harmonic_mean(&data).unwrap()).abs() < 1e-12);
        assert!(describe(&[1.0]).is_err());
    }

    #[test]
    fn test_describe_outside_log_domain() {
        // signed data still summarizes, the log-based means switch off
        let d = describe(&[-3.0, -1.0, 2.0, 6.0]).unwrap();
        assert_eq!(d.sum, 4.0);
        assert_eq!(d.range, 9.0);
        assert!(d.geometric_mean.is_none());
        assert!(d.harmonic_mean.is_none());

        // a zero keeps the harmonic mean defined (as zero) but not the geometric
        let z = describe(&[0.0, 1.0, 2.0]).unwrap();
        assert!(z.geometric_mean.is_none());
        assert_eq!(z.harmonic_mean, Some(0.0));
    }
}
