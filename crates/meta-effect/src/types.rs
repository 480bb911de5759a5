//! Types for effect size representation

use meta_core::ConfidenceInterval;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Types of effect sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSizeType {
    /// Standardized mean difference (Cohen's d family)
    StandardizedMeanDifference,
    /// Unstandardized difference in the outcome's own units
    MeanDifference,
}

impl EffectSizeType {
    /// Get the name of the effect size type
    pub fn name(&self) -> &'static str {
        match self {
            Self::StandardizedMeanDifference => "Standardized Mean Difference",
            Self::MeanDifference => "Mean Difference",
        }
    }

    /// Short axis label used by reports and plots
    pub fn axis_label(&self) -> &'static str {
        match self {
            Self::StandardizedMeanDifference => "Effect size (Hedges' g)",
            Self::MeanDifference => "Mean difference (treatment - control)",
        }
    }

    /// Whether magnitudes of this type can be read against Cohen's conventions
    pub fn is_standardized(&self) -> bool {
        matches!(self, Self::StandardizedMeanDifference)
    }
}

/// Interpretation of a standardized effect following Cohen's conventions
///
/// Intervals are half-open on the right: a value sitting exactly on a
/// boundary belongs to the higher category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectSizeInterpretation {
    /// `|g| < 0.2`
    NoEffect,
    /// `0.2 <= |g| < 0.5`
    Small,
    /// `0.5 <= |g| < 0.8`
    Moderate,
    /// `|g| >= 0.8`
    Large,
}

impl EffectSizeInterpretation {
    /// Classify the absolute value of a standardized effect
    pub fn from_magnitude(magnitude: f64) -> Self {
        let abs_magnitude = magnitude.abs();

        if abs_magnitude < 0.2 {
            Self::NoEffect
        } else if abs_magnitude < 0.5 {
            Self::Small
        } else if abs_magnitude < 0.8 {
            Self::Moderate
        } else {
            Self::Large
        }
    }

    /// Human-readable label
    pub fn label(&self) -> &'static str {
        match self {
            Self::NoEffect => "no effect",
            Self::Small => "small",
            Self::Moderate => "moderate",
            Self::Large => "large",
        }
    }

    /// Lower bound of the category on the `|g|` scale
    pub fn lower_bound(&self) -> f64 {
        match self {
            Self::NoEffect => 0.0,
            Self::Small => 0.2,
            Self::Moderate => 0.5,
            Self::Large => 0.8,
        }
    }

    /// All categories, smallest first
    pub const ALL: [Self; 4] = [Self::NoEffect, Self::Small, Self::Moderate, Self::Large];
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hedges' g for one study, together with everything derived on the way
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EffectSizeResult {
    pub name: String,
    pub n_control: usize,
    pub n_treatment: usize,
    /// `mean_treatment - mean_control`
    pub mean_difference: f64,
    /// Arm variances combined with `(n - 1)` weights
    pub pooled_sd: f64,
    pub cohens_d: f64,
    /// Degrees of freedom `n_control + n_treatment - 2`
    pub df: usize,
    /// Small-sample correction `J = 1 - 3 / (4 df - 1)`
    pub correction_factor: f64,
    pub hedges_g: f64,
    pub standard_error: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    /// Inverse-variance weight `1 / se²`
    pub weight: f64,
    pub magnitude_label: EffectSizeInterpretation,
}

impl EffectSizeResult {
    /// Combined sample size of both arms
    pub fn n_total(&self) -> usize {
        self.n_control + self.n_treatment
    }
}

impl fmt::Display for EffectSizeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: g = {:.2} [{:.2}, {:.2}] ({})",
            self.name, self.hedges_g, self.ci_lower, self.ci_upper, self.magnitude_label
        )
    }
}

/// Raw mean difference for one study
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeanDifferenceResult {
    pub name: String,
    pub n_control: usize,
    pub n_treatment: usize,
    pub mean_control: f64,
    pub mean_treatment: f64,
    pub mean_difference: f64,
    /// `sqrt(sd_c² / n_c + sd_t² / n_t)`
    pub standard_error: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub weight: f64,
}

impl MeanDifferenceResult {
    /// Combined sample size of both arms
    pub fn n_total(&self) -> usize {
        self.n_control + self.n_treatment
    }

    /// 95% interval around the mean difference
    pub fn confidence_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval::new(
            self.ci_lower,
            self.ci_upper,
            self.mean_difference,
            meta_core::CONFIDENCE_95,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_effect_size_interpretation() {
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.1),
            EffectSizeInterpretation::NoEffect
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(-0.3),
            EffectSizeInterpretation::Small
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.6),
            EffectSizeInterpretation::Moderate
        );
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(-1.0),
            EffectSizeInterpretation::Large
        );
    }

    #[test]
    fn test_boundaries_go_to_higher_category() {
        for category in EffectSizeInterpretation::ALL {
            let bound = category.lower_bound();
            assert_eq!(EffectSizeInterpretation::from_magnitude(bound), category);
            assert_eq!(EffectSizeInterpretation::from_magnitude(-bound), category);
        }
        assert_eq!(
            EffectSizeInterpretation::from_magnitude(0.199_999),
            EffectSizeInterpretation::NoEffect
        );
    }

    #[test]
    fn test_interpretation_display() {
        assert_eq!(EffectSizeInterpretation::NoEffect.to_string(), "no effect");
        assert_eq!(EffectSizeInterpretation::Moderate.to_string(), "moderate");
    }

    #[test]
    fn test_effect_size_type() {
        assert!(EffectSizeType::StandardizedMeanDifference.is_standardized());
        assert!(!EffectSizeType::MeanDifference.is_standardized());
        assert_eq!(EffectSizeType::MeanDifference.name(), "Mean Difference");
    }
}
