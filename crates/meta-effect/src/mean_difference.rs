//! Raw (unstandardized) mean difference
//!
//! Keeps the outcome's own units, which is what clinicians read for
//! outcomes such as BMI. The standard error treats the arms as independent.

use crate::{EffectSizeEstimator, EffectSizeType, MeanDifferenceResult};
use meta_core::{Error, Result, StudyInput, Z_95};
use tracing::trace;

/// Mean difference estimator
///
/// MD = mean_treatment - mean_control
/// se = sqrt(s_c²/n_c + s_t²/n_t)
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanDifference;

impl MeanDifference {
    /// Create a new mean difference estimator
    pub fn new() -> Self {
        Self
    }

    /// Standard error of the difference between two independent means
    pub fn standard_error(study: &StudyInput) -> f64 {
        (study.sd_control * study.sd_control / study.n_control as f64
            + study.sd_treatment * study.sd_treatment / study.n_treatment as f64)
            .sqrt()
    }
}

impl EffectSizeEstimator for MeanDifference {
    type Output = MeanDifferenceResult;

    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::MeanDifference
    }

    fn compute(&self, study: &StudyInput) -> Result<MeanDifferenceResult> {
        study.validate()?;

        let mean_difference = study.mean_difference();
        let standard_error = Self::standard_error(study);
        if standard_error == 0.0 {
            return Err(Error::DegenerateVariance { mean_difference });
        }

        trace!(study = %study.name, mean_difference, standard_error, "computed mean difference");

        Ok(MeanDifferenceResult {
            name: study.name.clone(),
            n_control: study.n_control,
            n_treatment: study.n_treatment,
            mean_control: study.mean_control,
            mean_treatment: study.mean_treatment,
            mean_difference,
            standard_error,
            ci_lower: mean_difference - Z_95 * standard_error,
            ci_upper: mean_difference + Z_95 * standard_error,
            weight: 1.0 / (standard_error * standard_error),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_bmi_values() {
        let study = StudyInput::new("Shokrpour, 2019", (26, 27.1, 3.3), (27, 27.8, 3.0));
        let result = MeanDifference::new().compute(&study).unwrap();

        assert_abs_diff_eq!(result.mean_difference, 0.7, epsilon = 1e-12);
        assert_abs_diff_eq!(result.standard_error, 0.867_282_818_450_525_5, epsilon = 1e-12);
        assert_abs_diff_eq!(result.weight, 1.329_469_916_482_018, epsilon = 1e-12);
        assert_abs_diff_eq!(result.ci_lower, -0.999_874_324_163_030_6, epsilon = 1e-12);
        assert_abs_diff_eq!(result.ci_upper, 2.399_874_324_163_029, epsilon = 1e-12);
    }

    #[test]
    fn test_zero_spread_is_degenerate() {
        let study = StudyInput::new("flat", (10, 5.0, 0.0), (10, 5.0, 0.0));
        assert_eq!(
            MeanDifference::new().compute(&study),
            Err(Error::DegenerateVariance {
                mean_difference: 0.0
            })
        );
    }

    #[test]
    fn test_effect_type() {
        assert_eq!(
            MeanDifference::new().effect_size_type(),
            EffectSizeType::MeanDifference
        );
    }
}
