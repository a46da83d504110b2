//! Hypothesis tests.
//!
//! Parametric location tests ([`MeanTest`], the t-test family), analysis of
//! variance, chi-squared tests, and the classical nonparametric tests (sign,
//! Wilcoxon signed-rank, Wald–Wolfowitz runs, Shapiro–Wilk normality).

mod anova;
mod chisquare;
mod mean;
mod runs;
mod shapiro;
mod sign;
mod ttest;
mod wilcoxon;

pub use anova::{f_oneway, AnovaResult};
pub use chisquare::{
    chi2_contingency, chisquare, goodness_of_fit, Chi2ContingencyResult, ChiSquareResult,
};
pub use mean::{minimal_sample_count, MeanTest, MeanTestReport};
pub use runs::{runs_test, RunsTestResult};
pub use shapiro::{shapiro, ShapiroResult};
pub use sign::{sign_test, SignTestResult};
pub use ttest::{
    ttest_1samp, ttest_1samp_from_stats, ttest_ind, ttest_ind_from_stats, ttest_rel, TTestResult,
};
pub use wilcoxon::{wilcoxon, WilcoxonResult};

/// Direction of the alternative hypothesis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alternative {
    /// H1: the parameter is below the null value (left tail)
    Less,
    /// H1: the parameter is above the null value (right tail)
    Greater,
    /// H1: the parameter differs from the null value (both tails)
    #[default]
    TwoSided,
}
