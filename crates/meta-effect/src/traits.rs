//! Core traits for effect size estimation

use crate::types::{
    EffectSizeInterpretation, EffectSizeResult, EffectSizeType, MeanDifferenceResult,
};
use meta_core::{ConfidenceInterval, Result, StudyInput};

/// A per-study effect that can be combined by inverse-variance weighting
///
/// The pooling layer only sees this view, so any effect measure whose
/// results implement it can be aggregated.
pub trait WeightedEffect {
    /// Study label
    fn label(&self) -> &str;

    /// Scale the effect is measured on
    fn effect_size_type(&self) -> EffectSizeType;

    /// Point estimate on the measure's scale
    fn effect(&self) -> f64;

    /// Standard error of the estimate
    fn standard_error(&self) -> f64;

    /// Inverse-variance weight
    fn weight(&self) -> f64;

    /// Sample sizes (control, treatment)
    fn arm_sizes(&self) -> (usize, usize);

    /// 95% interval around [`WeightedEffect::effect`]
    fn confidence_interval(&self) -> ConfidenceInterval;

    /// Cohen's-convention label, when the measure is standardized
    fn interpretation(&self) -> Option<EffectSizeInterpretation> {
        None
    }
}

/// Base trait for effect size estimators over two-arm summary statistics
pub trait EffectSizeEstimator {
    /// Per-study result produced by this estimator
    type Output: WeightedEffect;

    /// Get the type of effect size this estimator computes
    fn effect_size_type(&self) -> EffectSizeType;

    /// Compute the effect for one study
    fn compute(&self, study: &StudyInput) -> Result<Self::Output>;

    /// Compute every study in order, stopping at the first failure
    fn compute_all(&self, studies: &[StudyInput]) -> Result<Vec<Self::Output>> {
        studies.iter().map(|study| self.compute(study)).collect()
    }
}

impl WeightedEffect for EffectSizeResult {
    fn label(&self) -> &str {
        &self.name
    }

    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::StandardizedMeanDifference
    }

    fn effect(&self) -> f64 {
        self.hedges_g
    }

    fn standard_error(&self) -> f64 {
        self.standard_error
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn arm_sizes(&self) -> (usize, usize) {
        (self.n_control, self.n_treatment)
    }

    fn confidence_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval::new(
            self.ci_lower,
            self.ci_upper,
            self.hedges_g,
            meta_core::CONFIDENCE_95,
        )
    }

    fn interpretation(&self) -> Option<EffectSizeInterpretation> {
        Some(self.magnitude_label)
    }
}

impl WeightedEffect for MeanDifferenceResult {
    fn label(&self) -> &str {
        &self.name
    }

    fn effect_size_type(&self) -> EffectSizeType {
        EffectSizeType::MeanDifference
    }

    fn effect(&self) -> f64 {
        self.mean_difference
    }

    fn standard_error(&self) -> f64 {
        self.standard_error
    }

    fn weight(&self) -> f64 {
        self.weight
    }

    fn arm_sizes(&self) -> (usize, usize) {
        (self.n_control, self.n_treatment)
    }

    fn confidence_interval(&self) -> ConfidenceInterval {
        MeanDifferenceResult::confidence_interval(self)
    }
}
