//! Tail probabilities from theoretical distributions
//!
//! Thin wrappers over `statrs` so callers get `meta_core::Error` instead of
//! distribution construction errors.

use meta_core::{Error, Result};
use statrs::distribution::{ChiSquared, ContinuousCDF, Normal, StudentsT};

/// Two-sided p-value of a z statistic under the standard normal
pub fn normal_two_sided_p(z: f64) -> Result<f64> {
    let normal = Normal::new(0.0, 1.0).map_err(|e| {
        Error::Computation(format!("Failed to create normal distribution: {}", e))
    })?;
    Ok(2.0 * (1.0 - normal.cdf(z.abs())))
}

/// Two-sided p-value of a t statistic with `df` degrees of freedom
pub fn students_t_two_sided_p(t: f64, df: usize) -> Result<f64> {
    if df == 0 {
        return Err(Error::InvalidInput(
            "Not enough data for t-distribution".to_string(),
        ));
    }
    let t_dist = StudentsT::new(0.0, 1.0, df as f64).map_err(|e| {
        Error::Computation(format!("Failed to create t-distribution: {}", e))
    })?;
    Ok(2.0 * (1.0 - t_dist.cdf(t.abs())))
}

/// Upper-tail probability of `statistic` under χ² with `df` degrees of freedom
pub fn chi_squared_upper_p(statistic: f64, df: usize) -> Result<f64> {
    if df == 0 {
        return Err(Error::InvalidInput(
            "Chi-squared test needs at least one degree of freedom".to_string(),
        ));
    }
    let chi = ChiSquared::new(df as f64).map_err(|e| {
        Error::Computation(format!("Failed to create chi-squared distribution: {}", e))
    })?;
    Ok(1.0 - chi.cdf(statistic.max(0.0)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_normal_p_value() {
        assert_abs_diff_eq!(normal_two_sided_p(1.96).unwrap(), 0.05, epsilon = 1e-3);
        assert_abs_diff_eq!(normal_two_sided_p(-1.96).unwrap(), 0.05, epsilon = 1e-3);
        assert_abs_diff_eq!(normal_two_sided_p(0.0).unwrap(), 1.0, epsilon = 1e-12);
    }

    #[test]
    fn test_students_t_p_value() {
        // t(10) two-sided 5% critical value is 2.228
        assert_abs_diff_eq!(students_t_two_sided_p(2.228, 10).unwrap(), 0.05, epsilon = 1e-3);
        assert!(students_t_two_sided_p(1.0, 0).is_err());
    }

    #[test]
    fn test_chi_squared_p_value() {
        // chi2(2) upper 5% point is 5.991
        assert_abs_diff_eq!(chi_squared_upper_p(5.991, 2).unwrap(), 0.05, epsilon = 1e-3);
        assert_abs_diff_eq!(chi_squared_upper_p(0.0, 3).unwrap(), 1.0, epsilon = 1e-12);
        assert!(chi_squared_upper_p(1.0, 0).is_err());
    }
}
