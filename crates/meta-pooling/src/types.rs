//! Common types for pooled estimates

use crate::heterogeneity::Heterogeneity;
use meta_core::{ConfidenceInterval, CONFIDENCE_95};
use meta_effect::{EffectSizeInterpretation, EffectSizeType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Fixed-effects summary of one outcome category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PooledResult {
    /// Scale of `pooled_effect`
    pub effect_type: EffectSizeType,
    /// Inverse-variance-weighted mean of the per-study effects
    pub pooled_effect: f64,
    /// `sqrt(1 / Σw)`
    pub pooled_se: f64,
    pub pooled_ci_lower: f64,
    pub pooled_ci_upper: f64,
    /// `pooled_effect / pooled_se`
    pub z_value: f64,
    /// Two-sided normal p-value of `z_value`
    pub p_value: f64,
    pub heterogeneity: Heterogeneity,
    pub n_total_control: usize,
    pub n_total_treatment: usize,
    pub n_studies: usize,
    /// Cohen's-convention label; only set for standardized effects
    pub magnitude_label: Option<EffectSizeInterpretation>,
}

impl PooledResult {
    /// Participants across both arms and all studies
    pub fn n_total(&self) -> usize {
        self.n_total_control + self.n_total_treatment
    }

    /// 95% interval around the pooled effect
    pub fn confidence_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval::new(
            self.pooled_ci_lower,
            self.pooled_ci_upper,
            self.pooled_effect,
            CONFIDENCE_95,
        )
    }

    /// Cochran's Q
    pub fn q(&self) -> f64 {
        self.heterogeneity.q
    }

    /// Degrees of freedom of Q (`k - 1`)
    pub fn df(&self) -> usize {
        self.heterogeneity.df
    }

    /// I² in percent
    pub fn i_squared(&self) -> f64 {
        self.heterogeneity.i_squared
    }

    /// Whether the 95% interval excludes zero
    pub fn is_significant(&self) -> bool {
        self.confidence_interval().excludes_zero()
    }
}

impl fmt::Display for PooledResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {} from {} studies (n={}), I²={:.1}%",
            self.effect_type.name(),
            self.confidence_interval(),
            self.n_studies,
            self.n_total(),
            self.i_squared()
        )?;
        if let Some(label) = self.magnitude_label {
            write!(f, ", {}", label)?;
        }
        Ok(())
    }
}
