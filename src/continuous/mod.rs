//! Continuous probability distributions.

mod chi_squared;
mod f_distribution;
mod gamma;
mod normal;
mod student_t;

pub use chi_squared::ChiSquared;
pub use f_distribution::FDistribution;
pub use gamma::Gamma;
pub use normal::Normal;
pub use student_t::StudentT;
