//! Per-study summary statistics

use crate::{Error, Result};
use serde::{Deserialize, Serialize};

/// One trial's summary statistics for a control and a treatment arm
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudyInput {
    /// Study label, usually "Author, year"
    pub name: String,
    pub n_control: usize,
    pub n_treatment: usize,
    pub mean_control: f64,
    pub mean_treatment: f64,
    pub sd_control: f64,
    pub sd_treatment: f64,
}

impl StudyInput {
    /// Create a new study record
    pub fn new(
        name: impl Into<String>,
        (n_control, mean_control, sd_control): (usize, f64, f64),
        (n_treatment, mean_treatment, sd_treatment): (usize, f64, f64),
    ) -> Self {
        Self {
            name: name.into(),
            n_control,
            n_treatment,
            mean_control,
            mean_treatment,
            sd_control,
            sd_treatment,
        }
    }

    /// Combined sample size of both arms, saturating at `usize::MAX`
    pub fn n_total(&self) -> usize {
        self.n_control.saturating_add(self.n_treatment)
    }

    /// Degrees of freedom `n_control + n_treatment - 2`
    ///
    /// Fails with [`Error::InvalidSampleSize`] when the arms leave no
    /// degrees of freedom or when either arm is empty.
    pub fn degrees_of_freedom(&self) -> Result<usize> {
        let invalid = || Error::InvalidSampleSize {
            n_control: self.n_control,
            n_treatment: self.n_treatment,
        };
        if self.n_control == 0 || self.n_treatment == 0 {
            return Err(invalid());
        }
        match self.n_control.checked_add(self.n_treatment) {
            Some(n_total) if n_total > 2 => Ok(n_total - 2),
            _ => Err(invalid()),
        }
    }

    /// Treatment mean minus control mean
    pub fn mean_difference(&self) -> f64 {
        self.mean_treatment - self.mean_control
    }

    /// Validate sample sizes and that every statistic is usable.
    ///
    /// Returns the degrees of freedom on success.
    pub fn validate(&self) -> Result<usize> {
        let df = self.degrees_of_freedom()?;
        self.check_statistics()?;
        Ok(df)
    }

    /// Check that means and SDs are finite and the SDs non-negative
    ///
    /// Sample sizes are not looked at.
    pub fn check_statistics(&self) -> Result<()> {
        for (label, value) in [
            ("mean_control", self.mean_control),
            ("mean_treatment", self.mean_treatment),
            ("sd_control", self.sd_control),
            ("sd_treatment", self.sd_treatment),
        ] {
            if !value.is_finite() {
                return Err(Error::non_finite(&format!("{} {label}", self.name)));
            }
        }
        if self.sd_control < 0.0 {
            return Err(Error::negative_spread("control", self.sd_control));
        }
        if self.sd_treatment < 0.0 {
            return Err(Error::negative_spread("treatment", self.sd_treatment));
        }
        Ok(())
    }
}
