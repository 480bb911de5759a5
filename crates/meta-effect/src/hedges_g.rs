//! Hedges' g effect size
//!
//! Hedges' g is a bias-corrected version of Cohen's d that provides a less biased
//! estimate of effect size, especially for small samples. It applies a correction
//! factor to account for the upward bias in Cohen's d.

use crate::cohen_d::CohenD;
use crate::{EffectSizeEstimator, EffectSizeInterpretation, EffectSizeResult, EffectSizeType};
use meta_core::{Error, Result, StudyInput, Z_95};
use tracing::trace;

/// Hedges' g effect size estimator
///
/// Hedges' g is calculated as:
/// g = d × J
///
/// where d is Cohen's d and J is the bias correction factor:
/// J = 1 - 3/(4·df - 1), df = n₁ + n₂ - 2
///
/// Its standard error is
/// se = sqrt((n₁ + n₂)/(n₁·n₂) + g²/(2·df))
#[derive(Debug, Clone, Copy, Default)]
pub struct HedgesG {
    /// Underlying Cohen's d estimator
    cohen_d: CohenD,
}

impl HedgesG {
    /// Create a new Hedges' g estimator
    pub fn new() -> Self {
        Self {
            cohen_d: CohenD::new(),
        }
    }

    /// Calculate the bias correction factor J
    ///
    /// Returns `None` for `df == 0`, where the correction is undefined.
    pub fn bias_correction_factor(df: usize) -> Option<f64> {
        if df == 0 {
            return None;
        }
        Some(1.0 - 3.0 / (4.0 * df as f64 - 1.0))
    }

    /// Standard error of g for the given arm sizes
    pub fn standard_error(n_control: usize, n_treatment: usize, hedges_g: f64, df: usize) -> f64 {
        let (n_c, n_t) = (n_control as f64, n_treatment as f64);
        let sampling = (n_c + n_t) / (n_c * n_t);
        (sampling + hedges_g * hedges_g / (2.0 * df as f64)).sqrt()
    }
}

impl EffectSizeEstimator for HedgesG {
    type Output = EffectSizeResult;

    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::StandardizedMeanDifference
    }

    fn compute(&self, study: &StudyInput) -> Result<EffectSizeResult> {
        let df = study.validate()?;
        let components = self.cohen_d.compute_with_df(study, df)?;

        let correction_factor =
            Self::bias_correction_factor(df).ok_or(Error::InvalidSampleSize {
                n_control: study.n_control,
                n_treatment: study.n_treatment,
            })?;
        let hedges_g = components.cohens_d * correction_factor;

        let standard_error =
            Self::standard_error(study.n_control, study.n_treatment, hedges_g, df);
        let ci_lower = hedges_g - Z_95 * standard_error;
        let ci_upper = hedges_g + Z_95 * standard_error;
        let weight = 1.0 / (standard_error * standard_error);

        trace!(
            study = %study.name,
            cohens_d = components.cohens_d,
            hedges_g,
            standard_error,
            "computed Hedges' g"
        );

        Ok(EffectSizeResult {
            name: study.name.clone(),
            n_control: study.n_control,
            n_treatment: study.n_treatment,
            mean_difference: components.mean_difference,
            pooled_sd: components.pooled_sd,
            cohens_d: components.cohens_d,
            df,
            correction_factor,
            hedges_g,
            standard_error,
            ci_lower,
            ci_upper,
            weight,
            magnitude_label: EffectSizeInterpretation::from_magnitude(hedges_g),
        })
    }
}
