//! Cohen's d from two-arm summary statistics
//!
//! Cohen's d expresses the difference between two group means in units of
//! the pooled standard deviation. Here it is computed from reported means,
//! standard deviations and arm sizes rather than from raw observations.

use meta_core::{Error, Result, StudyInput};

/// Cohen's d effect size estimator
///
/// d = (mean_treatment - mean_control) / sd_pooled
///
/// with
///
/// sd_pooled = sqrt(((n_c - 1) s_c² + (n_t - 1) s_t²) / (n_c + n_t - 2))
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD;

/// Intermediate quantities of a Cohen's d computation
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CohenDComponents {
    pub mean_difference: f64,
    pub pooled_sd: f64,
    pub cohens_d: f64,
}

impl CohenD {
    /// Create a new Cohen's d estimator
    pub fn new() -> Self {
        Self
    }

    /// Pooled standard deviation of the two arms
    ///
    /// `df` must be `n_control + n_treatment - 2` and positive.
    pub fn pooled_sd(study: &StudyInput, df: usize) -> f64 {
        let control_ss = (study.n_control as f64 - 1.0) * (study.sd_control * study.sd_control);
        let treatment_ss =
            (study.n_treatment as f64 - 1.0) * (study.sd_treatment * study.sd_treatment);
        ((control_ss + treatment_ss) / df as f64).sqrt()
    }

    /// Compute Cohen's d for a study
    ///
    /// A zero pooled standard deviation is only accepted when the means are
    /// equal too, in which case d is defined as zero.
    pub fn compute(&self, study: &StudyInput) -> Result<CohenDComponents> {
        let df = study.validate()?;
        self.compute_with_df(study, df)
    }

    pub(crate) fn compute_with_df(
        &self,
        study: &StudyInput,
        df: usize,
    ) -> Result<CohenDComponents> {
        let mean_difference = study.mean_difference();
        let pooled_sd = Self::pooled_sd(study, df);

        let cohens_d = if pooled_sd == 0.0 {
            if mean_difference != 0.0 {
                return Err(Error::DegenerateVariance { mean_difference });
            }
            0.0
        } else {
            mean_difference / pooled_sd
        };

        Ok(CohenDComponents {
            mean_difference,
            pooled_sd,
            cohens_d,
        })
    }
}
