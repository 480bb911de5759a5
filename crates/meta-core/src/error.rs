//! Error types for meta-analysis computations
//!
//! Provides a unified error type for all meta-forest crates.

use thiserror::Error;

/// Core error type for effect-size and pooling operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Degrees of freedom are zero or negative for the given arm sizes
    #[error(
        "Invalid sample size: n_control={n_control}, n_treatment={n_treatment} \
         leaves no degrees of freedom"
    )]
    InvalidSampleSize { n_control: usize, n_treatment: usize },

    /// Zero pooled standard deviation with a nonzero mean difference
    #[error("Degenerate variance: zero spread with mean difference {mean_difference}")]
    DegenerateVariance { mean_difference: f64 },

    /// Aggregation requested over zero studies
    #[error("Empty input: {0} requires at least one study")]
    EmptyInput(String),

    /// Invalid input data
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Numerical computation error
    #[error("Computation error: {0}")]
    Computation(String),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an error for an empty study set
    pub fn empty_input(operation: &str) -> Self {
        Self::EmptyInput(operation.to_string())
    }

    /// Create an error for NaN/Inf values
    pub fn non_finite(context: &str) -> Self {
        Self::InvalidInput(format!("{context} contains NaN or infinite values"))
    }

    /// Create an error for a negative standard deviation
    pub fn negative_spread(context: &str, value: f64) -> Self {
        Self::InvalidInput(format!(
            "{context} standard deviation must be non-negative, got {value}"
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::InvalidSampleSize {
            n_control: 1,
            n_treatment: 1,
        };
        assert_eq!(
            err.to_string(),
            "Invalid sample size: n_control=1, n_treatment=1 leaves no degrees of freedom"
        );

        let err = Error::DegenerateVariance {
            mean_difference: 0.5,
        };
        assert_eq!(
            err.to_string(),
            "Degenerate variance: zero spread with mean difference 0.5"
        );

        let err = Error::InvalidInput("bad data".to_string());
        assert_eq!(err.to_string(), "Invalid input: bad data");

        let err = Error::Computation("chi-squared with zero df".to_string());
        assert_eq!(err.to_string(), "Computation error: chi-squared with zero df");
    }

    #[test]
    fn test_error_helper_functions() {
        let err = Error::empty_input("fixed-effects pooling");
        assert_eq!(err, Error::EmptyInput("fixed-effects pooling".to_string()));
        assert_eq!(
            err.to_string(),
            "Empty input: fixed-effects pooling requires at least one study"
        );

        let err = Error::non_finite("mean_control");
        assert_eq!(
            err.to_string(),
            "Invalid input: mean_control contains NaN or infinite values"
        );

        let err = Error::negative_spread("sd_treatment", -1.5);
        assert!(err.to_string().contains("-1.5"));
    }

    #[test]
    fn test_error_patterns() {
        fn check_arms(n_control: usize, n_treatment: usize) -> Result<usize> {
            if n_control + n_treatment <= 2 {
                return Err(Error::InvalidSampleSize {
                    n_control,
                    n_treatment,
                });
            }
            Ok(n_control + n_treatment - 2)
        }

        assert_eq!(check_arms(15, 15), Ok(28));
        assert!(matches!(
            check_arms(1, 1),
            Err(Error::InvalidSampleSize { .. })
        ));
    }
}
