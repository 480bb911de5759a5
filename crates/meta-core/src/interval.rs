//! Normal-approximation confidence intervals

use serde::{Deserialize, Serialize};
use std::fmt;

/// Two-sided critical value of the standard normal for a 95% interval.
pub const Z_95: f64 = 1.96;

/// Confidence level matching [`Z_95`].
pub const CONFIDENCE_95: f64 = 0.95;

/// A confidence interval with lower and upper bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    /// Lower bound of the interval
    pub lower: f64,
    /// Upper bound of the interval
    pub upper: f64,
    /// The point estimate (center of interval)
    pub estimate: f64,
    /// Confidence level (e.g., 0.95 for 95% CI)
    pub confidence_level: f64,
}

impl ConfidenceInterval {
    /// Create a new confidence interval
    pub fn new(lower: f64, upper: f64, estimate: f64, confidence_level: f64) -> Self {
        Self {
            lower,
            upper,
            estimate,
            confidence_level,
        }
    }

    /// 95% interval `estimate ± 1.96·standard_error`
    pub fn normal_95(estimate: f64, standard_error: f64) -> Self {
        Self::new(
            estimate - Z_95 * standard_error,
            estimate + Z_95 * standard_error,
            estimate,
            CONFIDENCE_95,
        )
    }

    /// Width of the confidence interval
    pub fn width(&self) -> f64 {
        self.upper - self.lower
    }

    /// Check if a value is contained in the interval
    pub fn contains(&self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// True when the interval excludes zero, i.e. the effect is significant
    /// at the interval's confidence level.
    pub fn excludes_zero(&self) -> bool {
        !self.contains(0.0)
    }
}

impl fmt::Display for ConfidenceInterval {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let precision = f.precision().unwrap_or(2);
        write!(
            f,
            "{:.*} [{:.*}, {:.*}]",
            precision, self.estimate, precision, self.lower, precision, self.upper
        )
    }
}
