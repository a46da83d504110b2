//! Standardized central moments and the symmetry measures built on them.
//!
//! All moments here use the population convention (n denominator), so the
//! kurtosis is the plain fourth standardized moment; a normal sample sits
//! near 3, not near 0.

use crate::descriptive::{mean, median, population_std_dev};
use crate::error::{StatsError, StatsResult};
use std::fmt;

/// Direction of asymmetry read off a skewness value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Skewness {
    /// Longer left tail, skewness below zero
    LeftSkewed,
    /// No asymmetry
    Symmetric,
    /// Longer right tail, skewness above zero
    RightSkewed,
}

impl fmt::Display for Skewness {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Skewness::LeftSkewed => write!(f, "left skewed"),
            Skewness::Symmetric => write!(f, "symmetric"),
            Skewness::RightSkewed => write!(f, "right skewed"),
        }
    }
}

/// Tail weight read off a kurtosis value, relative to the normal value 3.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kurtosis {
    /// Lighter tails than the normal (kurtosis below 3)
    Platykurtic,
    /// Normal tail weight (kurtosis equal to 3)
    Mesokurtic,
    /// Heavier tails than the normal (kurtosis above 3)
    Leptokurtic,
}

impl fmt::Display for Kurtosis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Kurtosis::Platykurtic => write!(f, "platykurtic"),
            Kurtosis::Mesokurtic => write!(f, "normal"),
            Kurtosis::Leptokurtic => write!(f, "leptokurtic"),
        }
    }
}

/// Standardized central moment m_r / σ^r of order 1 through 4, with the
/// population σ.
///
/// Order 1 is identically zero and order 2 identically one; they are allowed
/// for completeness.
///
/// # Errors
///
/// Returns an error when `order` is outside 1..=4, `data` is empty, or the
/// sample is constant.
pub fn standardized_moment(data: &[f64], order: u32) -> StatsResult<f64> {
    if !(1..=4).contains(&order) {
        return Err(StatsError::InvalidParameter {
            name: "order",
            value: order as f64,
            reason: "only orders 1 through 4 are defined",
        });
    }
    if data.is_empty() {
        return Err(StatsError::EmptyData {
            context: "standardized moment",
        });
    }
    let m = mean(data)?;
    let sd = population_std_dev(data)?;
    if sd == 0.0 {
        return Err(StatsError::NumericalError {
            message: "standardized moments are undefined for a constant sample".to_string(),
        });
    }
    let central: f64 = data
        .iter()
        .map(|x| (x - m).powi(order as i32))
        .sum::<f64>()
        / data.len() as f64;
    Ok(central / sd.powi(order as i32))
}

/// Skewness: the third standardized moment.
pub fn skewness(data: &[f64]) -> StatsResult<f64> {
    standardized_moment(data, 3)
}

/// Kurtosis: the fourth standardized moment (not excess; compare against 3).
pub fn kurtosis(data: &[f64]) -> StatsResult<f64> {
    standardized_moment(data, 4)
}

/// Nonparametric skew (mean − median) / σ with the population σ.
///
/// Bounded by ±1 and zero for any symmetric sample.
///
/// # Errors
///
/// Returns an error when `data` is empty or constant.
pub fn nonparametric_skew(data: &[f64]) -> StatsResult<f64> {
    let m = mean(data)?;
    let med = median(data)?;
    let sd = population_std_dev(data)?;
    if sd == 0.0 {
        return Err(StatsError::NumericalError {
            message: "nonparametric skew is undefined for a constant sample".to_string(),
        });
    }
    Ok((m - med) / sd)
}

/// Classify a skewness value by its sign.
pub fn interpret_skewness(value: f64) -> Skewness {
    if value > 0.0 {
        Skewness::RightSkewed
    } else if value < 0.0 {
        Skewness::LeftSkewed
    } else {
        Skewness::Symmetric
    }
}

/// Classify a kurtosis value against the normal reference value 3.
pub fn interpret_kurtosis(value: f64) -> Kurtosis {
    if value > 3.0 {
        Kurtosis::Leptokurtic
    } else if value < 3.0 {
        Kurtosis::Platykurtic
    } else {
        Kurtosis::Mesokurtic
    }
}
