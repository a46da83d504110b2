//! Shapiro–Wilk test of normality (Royston's AS R94 approximation).

use crate::error::{StatsError, StatsResult};
use crate::special::{norm_cdf, norm_ppf};

/// W statistic and p-value of a [`shapiro`] test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ShapiroResult {
    /// Shapiro–Wilk W, in (0, 1]; values near one are consistent with
    /// normality
    pub statistic: f64,
    /// Upper-tail p-value
    pub pvalue: f64,
}

impl ShapiroResult {
    /// Whether H0 is rejected at significance level `alpha`.
    pub fn reject(&self, alpha: f64) -> bool {
        self.pvalue < alpha
    }
}

// Horner evaluation with the highest-degree coefficient first.
fn polyval(coeffs: &[f64], x: f64) -> f64 {
    coeffs.iter().fold(0.0, |acc, &c| acc * x + c)
}

/// Shapiro–Wilk test of H0: the sample is drawn from a normal
/// distribution, for 3 to 5000 observations.
///
/// The W statistic compares the best linear unbiased estimate of the
/// standard deviation, formed from the ordered sample and expected
/// normal order statistics, with the usual sum of squares. Weights and
/// p-values follow Royston's 1995 approximation; for n = 3 the p-value
/// is exact.
///
/// # Examples
///
/// ```ignore
/// let heights = [160.2, 164.8, 168.1, 170.3, 171.0, 173.6, 175.9, 179.4];
/// let res = shapiro(&heights)?;
/// assert!(res.pvalue > 0.05);
/// ```
///
/// # Errors
///
/// Returns an error when fewer than 3 or more than 5000 observations are
/// given, or when the sample is constant.
pub fn shapiro(data: &[f64]) -> StatsResult<ShapiroResult> {
    let n = data.len();
    if n < 3 {
        return Err(StatsError::InsufficientData {
            required: 3,
            got: n,
            context: "Shapiro-Wilk test",
        });
    }
    if n > 5000 {
        return Err(StatsError::InvalidParameter {
            name: "n",
            value: n as f64,
            reason: "the approximation is calibrated for at most 5000 observations",
        });
    }

    let mut sorted = data.to_vec();
    sorted.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));
    let nf = n as f64;
    let mean = sorted.iter().sum::<f64>() / nf;
    let ss: f64 = sorted.iter().map(|x| (x - mean) * (x - mean)).sum();
    if ss == 0.0 {
        return Err(StatsError::NumericalError {
            message: "Shapiro-Wilk W is undefined for a constant sample".to_string(),
        });
    }

    // expected normal order statistics (Blom scores)
    let m: Vec<f64> = (1..=n)
        .map(|i| norm_ppf((i as f64 - 0.375) / (nf + 0.25)))
        .collect();
    let ssumm2: f64 = m.iter().map(|v| v * v).sum();

    let mut weights = vec![0.0; n];
    if n == 3 {
        weights[0] = -std::f64::consts::FRAC_1_SQRT_2;
        weights[2] = std::f64::consts::FRAC_1_SQRT_2;
    } else {
        let u = 1.0 / nf.sqrt();
        let rsn = ssumm2.sqrt();
        let wn = polyval(
            &[-2.706056, 4.434687, -2.071190, -0.147981, 0.221157, 0.0],
            u,
        ) + m[n - 1] / rsn;
        weights[n - 1] = wn;
        weights[0] = -wn;
        if n <= 5 {
            let phi = (ssumm2 - 2.0 * m[n - 1] * m[n - 1]) / (1.0 - 2.0 * wn * wn);
            let scale = phi.sqrt();
            for i in 1..n - 1 {
                weights[i] = m[i] / scale;
            }
        } else {
            let wn1 = polyval(
                &[-3.582633, 5.682633, -1.752461, -0.293762, 0.042981, 0.0],
                u,
            ) + m[n - 2] / rsn;
            weights[n - 2] = wn1;
            weights[1] = -wn1;
            let phi = (ssumm2 - 2.0 * m[n - 1] * m[n - 1] - 2.0 * m[n - 2] * m[n - 2])
                / (1.0 - 2.0 * wn * wn - 2.0 * wn1 * wn1);
            let scale = phi.sqrt();
            for i in 2..n - 2 {
                weights[i] = m[i] / scale;
            }
        }
    }

    let blue: f64 = weights.iter().zip(&sorted).map(|(w, x)| w * x).sum();
    let statistic = (blue * blue / ss).min(1.0);

    let pvalue = if n == 3 {
        let p = 6.0 / std::f64::consts::PI
            * (statistic.sqrt().asin() - 0.75f64.sqrt().asin());
        p.clamp(0.0, 1.0)
    } else {
        let complement = (1.0 - statistic).max(1e-99);
        let (z_mean, z_std, y) = if n <= 11 {
            let g = -2.273 + 0.459 * nf;
            let y = -(g - complement.ln()).ln();
            let z_mean = polyval(&[-0.0006714, 0.025054, -0.39978, 0.5440], nf);
            let z_std = polyval(&[-0.0020322, 0.062767, -0.77857, 1.3822], nf).exp();
            (z_mean, z_std, y)
        } else {
            let x = nf.ln();
            let y = complement.ln();
            let z_mean = polyval(&[0.0038915, -0.083751, -0.31082, -1.5861], x);
            let z_std = polyval(&[0.0030302, -0.082676, -0.4803], x).exp();
            (z_mean, z_std, y)
        };
        norm_cdf(-(y - z_mean) / z_std)
    };

    Ok(ShapiroResult { statistic, pvalue })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_points_symmetric() {
        // an evenly spaced triple attains W = 1 and the exact p-value 1
        let res = shapiro(&[1.0, 2.0, 3.0]).unwrap();
        assert!((res.statistic - 1.0).abs() < 1e-12);
        assert!((res.pvalue - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_three_points_skewed() {
        let res = shapiro(&[1.0, 2.0, 10.0]).unwrap();
        // W = 40.5 / (146/3)
        assert!((res.statistic - 0.8321918).abs() < 1e-6);
        assert!((res.pvalue - 0.1939).abs() < 1e-3);
    }

    #[test]
    fn test_equally_spaced_small_sample() {
        let data = [1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0];
        let res = shapiro(&data).unwrap();
        // scipy.stats.shapiro gives W = 0.9749, p = 0.933
        assert!((res.statistic - 0.9749).abs() < 2e-3);
        assert!((res.pvalue - 0.933).abs() < 0.03);
    }

    #[test]
    fn test_outlier_is_flagged() {
        // exercises the n <= 5 weight branch
        let res = shapiro(&[1.0, 2.0, 3.0, 4.0, 100.0]).unwrap();
        assert!((res.statistic - 0.5772).abs() < 2e-3);
        assert!(res.pvalue < 0.01);
        assert!(res.reject(0.05));
    }

    #[test]
    fn test_symmetric_sample_passes() {
        let data = [
            -2.0, -1.5, -1.0, -0.5, -0.25, 0.0, 0.0, 0.25, 0.5, 1.0, 1.5, 2.0,
        ];
        let res = shapiro(&data).unwrap();
        assert!(res.statistic > 0.93);
        assert!(res.pvalue > 0.2);
    }

    #[test]
    fn test_heavy_right_skew_is_rejected() {
        let data = [
            0.1, 0.2, 0.3, 0.5, 0.7, 1.0, 1.4, 1.9, 2.6, 3.5, 5.0, 8.0, 12.0, 20.0,
        ];
        let res = shapiro(&data).unwrap();
        assert!((res.statistic - 0.723).abs() < 0.01);
        assert!(res.pvalue < 0.01);
    }

    #[test]
    fn test_rejects_degenerate_input() {
        assert!(shapiro(&[1.0, 2.0]).is_err());
        assert!(shapiro(&[4.0, 4.0, 4.0, 4.0]).is_err());
        assert!(shapiro(&vec![0.0; 5001]).is_err());
    }
}
