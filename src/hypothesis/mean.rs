//! One-sample location tests for the population mean.
//!
//! [`MeanTest`] fixes the null mean, the significance level and the tail,
//! then runs either the z flavor (population standard deviation known) or
//! the t flavor (standard deviation estimated from the sample). The report
//! carries the statistic next to its critical value and the matching
//! confidence interval, the way the test is worked on paper.

use super::Alternative;
use crate::continuous::{Normal, StudentT};
use crate::descriptive;
use crate::distribution::ContinuousDistribution;
use crate::error::{StatsError, StatsResult};

/// Outcome of a [`MeanTest`] run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MeanTestReport {
    /// Standardized test statistic (z or t)
    pub statistic: f64,
    /// Critical value the statistic is compared against, signed by the tail
    pub critical_value: f64,
    /// p-value under the chosen alternative
    pub pvalue: f64,
    /// Whether H0 is rejected at the configured level
    pub reject: bool,
    /// Half-width (one-sided: full offset) of the confidence interval
    pub margin_of_error: f64,
    /// Confidence interval for the mean at level 1 − α; one-sided
    /// alternatives leave the matching end unbounded
    pub confidence_interval: (f64, f64),
}

/// One-sample test of H0: μ = `null_mean` against a chosen alternative.
///
/// # Examples
///
/// ```ignore
/// use proba::{Alternative, MeanTest};
///
/// // machine fills bottles with sigma = 20 ml; 196 bottles average 1005 ml
/// let test = MeanTest::new(1000.0, 0.01, Alternative::Greater).unwrap();
/// let report = test.z_test_from_stats(1005.0, 20.0, 196).unwrap();
/// assert!(report.reject); // z = 3.5 clears the 0.01 critical value
/// ```
#[derive(Debug, Clone, Copy)]
pub struct MeanTest {
    null_mean: f64,
    alpha: f64,
    alternative: Alternative,
}

impl MeanTest {
    /// Configure a test of H0: μ = `null_mean` at significance level
    /// `alpha`.
    ///
    /// # Errors
    ///
    /// Returns an error unless `alpha` lies strictly between 0 and 1 and
    /// `null_mean` is finite.
    pub fn new(null_mean: f64, alpha: f64, alternative: Alternative) -> StatsResult<Self> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(StatsError::InvalidProbability { value: alpha });
        }
        if !null_mean.is_finite() {
            return Err(StatsError::InvalidParameter {
                name: "null_mean",
                value: null_mean,
                reason: "must be finite",
            });
        }
        Ok(Self {
            null_mean,
            alpha,
            alternative,
        })
    }

    /// Null-hypothesis mean.
    pub fn null_mean(&self) -> f64 {
        self.null_mean
    }

    /// Significance level.
    pub fn alpha(&self) -> f64 {
        self.alpha
    }

    /// Configured alternative.
    pub fn alternative(&self) -> Alternative {
        self.alternative
    }

    /// z flavor from summary statistics: the population standard deviation
    /// `sigma` is known.
    ///
    /// # Errors
    ///
    /// Returns an error when `sigma` is not positive or `n` is zero.
    pub fn z_test_from_stats(
        &self,
        sample_mean: f64,
        sigma: f64,
        n: usize,
    ) -> StatsResult<MeanTestReport> {
        if !(sigma > 0.0 && sigma.is_finite()) {
            return Err(StatsError::InvalidParameter {
                name: "sigma",
                value: sigma,
                reason: "must be positive and finite",
            });
        }
        if n == 0 {
            return Err(StatsError::InsufficientData {
                required: 1,
                got: 0,
                context: "z test",
            });
        }
        let se = sigma / (n as f64).sqrt();
        let z = (sample_mean - self.null_mean) / se;
        self.build_report(z, sample_mean, se, &Normal::standard())
    }

    /// z flavor from raw data with known population standard deviation.
    pub fn z_test(&self, data: &[f64], sigma: f64) -> StatsResult<MeanTestReport> {
        let sample_mean = descriptive::mean(data)?;
        self.z_test_from_stats(sample_mean, sigma, data.len())
    }

    /// t flavor from summary statistics: `sample_std` is the n − 1 sample
    /// standard deviation, the reference distribution is t with n − 1
    /// degrees of freedom.
    ///
    /// # Errors
    ///
    /// Returns an error when `sample_std` is not positive or `n` is below 2.
    pub fn t_test_from_stats(
        &self,
        sample_mean: f64,
        sample_std: f64,
        n: usize,
    ) -> StatsResult<MeanTestReport> {
        if !(sample_std > 0.0 && sample_std.is_finite()) {
            return Err(StatsError::InvalidParameter {
                name: "sample_std",
                value: sample_std,
                reason: "must be positive and finite",
            });
        }
        if n < 2 {
            return Err(StatsError::InsufficientData {
                required: 2,
                got: n,
                context: "t test",
            });
        }
        let se = sample_std / (n as f64).sqrt();
        let t = (sample_mean - self.null_mean) / se;
        let dist = StudentT::new((n - 1) as f64)?;
        self.build_report(t, sample_mean, se, &dist)
    }

    /// t flavor from raw data.
    pub fn t_test(&self, data: &[f64]) -> StatsResult<MeanTestReport> {
        let sample_mean = descriptive::mean(data)?;
        let sample_std = descriptive::std_dev(data)?;
        self.t_test_from_stats(sample_mean, sample_std, data.len())
    }

    fn build_report(
        &self,
        statistic: f64,
        sample_mean: f64,
        se: f64,
        dist: &dyn ContinuousDistribution,
    ) -> StatsResult<MeanTestReport> {
        let (critical_value, reject, pvalue) = match self.alternative {
            Alternative::Less => {
                let crit = dist.ppf(self.alpha)?;
                (crit, statistic < crit, dist.cdf(statistic))
            }
            Alternative::Greater => {
                let crit = dist.ppf(1.0 - self.alpha)?;
                (crit, statistic > crit, dist.sf(statistic))
            }
            Alternative::TwoSided => {
                let crit = dist.ppf(1.0 - self.alpha / 2.0)?;
                let p = (2.0 * dist.sf(statistic.abs())).min(1.0);
                (crit, statistic.abs() > crit, p)
            }
        };

        let margin_of_error = critical_value.abs() * se;
        let confidence_interval = match self.alternative {
            Alternative::Less => (f64::NEG_INFINITY, sample_mean + margin_of_error),
            Alternative::Greater => (sample_mean - margin_of_error, f64::INFINITY),
            Alternative::TwoSided => (
                sample_mean - margin_of_error,
                sample_mean + margin_of_error,
            ),
        };

        Ok(MeanTestReport {
            statistic,
            critical_value,
            pvalue,
            reject,
            margin_of_error,
            confidence_interval,
        })
    }
}

/// Smallest sample size that keeps the estimation error of the mean within
/// `margin`, for a population with standard deviation `sigma` and the
/// normal quantile `critical` of the chosen confidence level:
/// n = (critical · sigma / margin)².
///
/// The result is fractional; round up to the next whole observation.
///
/// # Errors
///
/// Returns an error unless all three arguments are positive.
pub fn minimal_sample_count(critical: f64, sigma: f64, margin: f64) -> StatsResult<f64> {
    if !(critical > 0.0 && critical.is_finite()) {
        return Err(StatsError::InvalidParameter {
            name: "critical",
            value: critical,
            reason: "must be positive and finite",
        });
    }
    if !(sigma > 0.0 && sigma.is_finite()) {
        return Err(StatsError::InvalidParameter {
            name: "sigma",
            value: sigma,
            reason: "must be positive and finite",
        });
    }
    if !(margin > 0.0 && margin.is_finite()) {
        return Err(StatsError::InvalidParameter {
            name: "margin",
            value: margin,
            reason: "must be positive and finite",
        });
    }
    let root = critical * sigma / margin;
    Ok(root * root)
}

#[cfg(test)]
mod tests {
    use super::*;

    // bottling line: H0 mean 1000, sigma 20, sample of 196 averaging 1005
    const NULL_MEAN: f64 = 1000.0;
    const SIGMA: f64 = 20.0;
    const SAMPLE_MEAN: f64 = 1005.0;
    const N: usize = 196;

    #[test]
    fn test_z_statistic() {
        let test = MeanTest::new(NULL_MEAN, 0.01, Alternative::Greater).unwrap();
        let report = test.z_test_from_stats(SAMPLE_MEAN, SIGMA, N).unwrap();
        // z = (1005 - 1000) * 14 / 20
        assert!((report.statistic - 3.5).abs() < 1e-12);
    }

    #[test]
    fn test_right_tail_rejects_at_one_percent() {
        let test = MeanTest::new(NULL_MEAN, 0.01, Alternative::Greater).unwrap();
        let report = test.z_test_from_stats(SAMPLE_MEAN, SIGMA, N).unwrap();
        // critical z at 0.99 is 2.3263478740408408
        assert!((report.critical_value - 2.3263478740408408).abs() < 1e-9);
        assert!(report.reject);
        // p = 1 - Phi(3.5) = 0.0002326290790355
        assert!((report.pvalue - 2.3263e-4).abs() < 1e-8);
    }

    #[test]
    fn test_two_sided_rejection_depends_on_level() {
        let at_1pct = MeanTest::new(NULL_MEAN, 0.01, Alternative::TwoSided).unwrap();
        assert!(at_1pct
            .z_test_from_stats(SAMPLE_MEAN, SIGMA, N)
            .unwrap()
            .reject);

        // at alpha = 0.0002 the two-sided critical value 3.719 beats z = 3.5
        let strict = MeanTest::new(NULL_MEAN, 0.0002, Alternative::TwoSided).unwrap();
        let report = strict.z_test_from_stats(SAMPLE_MEAN, SIGMA, N).unwrap();
        assert!(!report.reject);
        assert!(report.pvalue > 0.0002);
    }

    #[test]
    fn test_two_sided_confidence_interval() {
        let test = MeanTest::new(NULL_MEAN, 0.01, Alternative::TwoSided).unwrap();
        let report = test.z_test_from_stats(SAMPLE_MEAN, SIGMA, N).unwrap();
        let (lo, hi) = report.confidence_interval;
        assert!((lo - 1001.3202).abs() < 1e-3);
        assert!((hi - 1008.6798).abs() < 1e-3);
        // interval is centered on the sample mean
        assert!((0.5 * (lo + hi) - SAMPLE_MEAN).abs() < 1e-9);
    }

    #[test]
    fn test_left_tail() {
        let test = MeanTest::new(NULL_MEAN, 0.01, Alternative::Less).unwrap();
        let report = test.z_test_from_stats(995.0, SIGMA, N).unwrap();
        assert!((report.statistic + 3.5).abs() < 1e-12);
        assert!(report.critical_value < 0.0);
        assert!(report.reject);
        // one-sided interval: unbounded below, capped above
        let (lo, hi) = report.confidence_interval;
        assert!(lo.is_infinite() && lo < 0.0);
        assert!((hi - (995.0 + 2.3263478740408408 * SIGMA / 14.0)).abs() < 1e-6);
    }

    #[test]
    fn test_margin_of_error_at_five_percent() {
        let test = MeanTest::new(NULL_MEAN, 0.05, Alternative::TwoSided).unwrap();
        let report = test.z_test_from_stats(SAMPLE_MEAN, SIGMA, N).unwrap();
        // 1.959964 * 20 / 14
        assert!((report.margin_of_error - 2.79995).abs() < 1e-4);
    }

    #[test]
    fn test_z_test_from_data() {
        let test = MeanTest::new(2.0, 0.05, Alternative::TwoSided).unwrap();
        let report = test.z_test(&[1.0, 2.0, 3.0], 1.0).unwrap();
        assert!(report.statistic.abs() < 1e-12);
        assert!((report.pvalue - 1.0).abs() < 1e-12);
        assert!(!report.reject);
    }

    #[test]
    fn test_t_flavor_small_sample() {
        let data = [2.3, 2.5, 2.7, 2.9, 3.1];
        let test = MeanTest::new(2.5, 0.05, Alternative::TwoSided).unwrap();
        let report = test.t_test(&data).unwrap();
        // t = 0.2 / (sqrt(0.1)/sqrt(5)) = sqrt(2)
        assert!((report.statistic - std::f64::consts::SQRT_2).abs() < 1e-12);
        // critical value is t(4, 0.975) = 2.7764
        assert!((report.critical_value - 2.7764).abs() < 1e-3);
        assert!(!report.reject);
        assert!((report.pvalue - 0.2302).abs() < 1e-3);
    }

    #[test]
    fn test_t_interval_wider_than_z() {
        let test = MeanTest::new(0.0, 0.05, Alternative::TwoSided).unwrap();
        let t_report = test.t_test_from_stats(1.0, 2.0, 10).unwrap();
        let z_report = test.z_test_from_stats(1.0, 2.0, 10).unwrap();
        assert!(t_report.margin_of_error > z_report.margin_of_error);
    }

    #[test]
    fn test_minimal_sample_count() {
        // 95% confidence, sigma 2.3, margin 0.45: about 100.4 observations
        let n = minimal_sample_count(1.96, 2.3, 0.45).unwrap();
        assert!((n - 100.356).abs() < 1e-2);
        // quadruple the precision costs four times the sample
        let n2 = minimal_sample_count(1.96, 2.3, 0.225).unwrap();
        assert!((n2 / n - 4.0).abs() < 1e-9);
    }

    #[test]
    fn test_rejects_bad_configuration() {
        assert!(MeanTest::new(0.0, 0.0, Alternative::TwoSided).is_err());
        assert!(MeanTest::new(0.0, 1.0, Alternative::TwoSided).is_err());
        assert!(MeanTest::new(f64::NAN, 0.05, Alternative::TwoSided).is_err());

        let test = MeanTest::new(0.0, 0.05, Alternative::TwoSided).unwrap();
        assert!(test.z_test_from_stats(1.0, 0.0, 10).is_err());
        assert!(test.z_test_from_stats(1.0, 1.0, 0).is_err());
        assert!(test.t_test_from_stats(1.0, 1.0, 1).is_err());
        assert!(test.t_test(&[1.0]).is_err());
        assert!(minimal_sample_count(1.96, 2.3, 0.0).is_err());
        assert!(minimal_sample_count(-1.0, 2.3, 0.5).is_err());
    }
}
