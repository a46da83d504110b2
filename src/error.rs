//! Error types shared by every statistical operation in the crate.

use std::fmt;

/// Result alias used throughout the crate.
pub type StatsResult<T> = Result<T, StatsError>;

/// Errors produced by statistical operations.
///
/// Degenerate inputs (empty samples, zero variance, invalid distribution
/// parameters) are reported through this enum rather than surfacing as NaN
/// or a panic.
#[derive(Debug, Clone, PartialEq)]
pub enum StatsError {
    /// A distribution or test parameter is outside its valid range.
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// A sample was empty where at least one observation is required.
    EmptyData { context: &'static str },

    /// A sample has fewer observations than the operation needs.
    InsufficientData {
        required: usize,
        got: usize,
        context: &'static str,
    },

    /// A probability argument fell outside [0, 1].
    InvalidProbability { value: f64 },

    /// A point lies outside the support of the distribution.
    OutOfSupport { value: f64, support: &'static str },

    /// A computation degenerated (division by zero variance and the like).
    NumericalError { message: String },

    /// Two paired samples differ in length.
    LengthMismatch {
        expected: usize,
        got: usize,
        context: &'static str,
    },
}

impl fmt::Display for StatsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidParameter {
                name,
                value,
                reason,
            } => {
                write!(f, "invalid parameter '{}' = {}: {}", name, value, reason)
            }
            Self::EmptyData { context } => {
                write!(f, "empty sample in {}", context)
            }
            Self::InsufficientData {
                required,
                got,
                context,
            } => {
                write!(
                    f,
                    "{} requires at least {} observations, got {}",
                    context, required, got
                )
            }
            Self::InvalidProbability { value } => {
                write!(f, "probability {} is outside [0, 1]", value)
            }
            Self::OutOfSupport { value, support } => {
                write!(f, "value {} is outside the support {}", value, support)
            }
            Self::NumericalError { message } => {
                write!(f, "numerical error: {}", message)
            }
            Self::LengthMismatch {
                expected,
                got,
                context,
            } => {
                write!(
                    f,
                    "{} expects samples of equal length: {} vs {}",
                    context, expected, got
                )
            }
        }
    }
}

impl std::error::Error for StatsError {}
