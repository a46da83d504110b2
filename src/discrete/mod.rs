//! Discrete probability distributions.

mod binomial;

pub use binomial::Binomial;

/// Log of the binomial coefficient ln C(n, k), computed through log-gamma so
/// large n stays finite.
pub(crate) fn log_binom(n: u64, k: u64) -> f64 {
    use crate::special::lgamma;

    if k > n {
        return f64::NEG_INFINITY;
    }
    if k == 0 || k == n {
        return 0.0;
    }

    let n = n as f64;
    let k = k as f64;
    lgamma(n + 1.0) - lgamma(k + 1.0) - lgamma(n - k + 1.0)
}
