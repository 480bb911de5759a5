//! Combining several cohorts of the same arm
//!
//! Some reports only give per-cohort summaries for each arm. The cohorts are
//! merged into one arm with a size-weighted mean and a combined standard
//! deviation that accounts for both within-cohort variance and the spread
//! of cohort means:
//!
//! var = Σ[(nᵢ - 1)sᵢ² + nᵢ(mᵢ - M)²] / (N - k)

use crate::significance::students_t_two_sided_p;
use meta_core::{ConfidenceInterval, Error, Result, CONFIDENCE_95, Z_95};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Summary statistics of one cohort within an arm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmCohort {
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
}

impl ArmCohort {
    /// Cohort without range information
    pub fn new(n: usize, mean: f64, sd: f64) -> Self {
        Self {
            n,
            mean,
            sd,
            min: None,
            max: None,
        }
    }

    /// Attach the observed range
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }
}

/// One arm after merging its cohorts
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmSummary {
    pub n: usize,
    pub mean: f64,
    pub sd: f64,
    /// Smallest reported minimum, if any cohort reported one
    pub min: Option<f64>,
    /// Largest reported maximum, if any cohort reported one
    pub max: Option<f64>,
    pub n_cohorts: usize,
}

/// Merge the cohorts of one arm
pub fn pool_arm(cohorts: &[ArmCohort]) -> Result<ArmSummary> {
    if cohorts.is_empty() {
        return Err(Error::empty_input("arm pooling"));
    }
    for (i, cohort) in cohorts.iter().enumerate() {
        if cohort.n == 0 {
            return Err(Error::InvalidInput(format!("cohort {i} has no participants")));
        }
        if !cohort.mean.is_finite() || !cohort.sd.is_finite() {
            return Err(Error::non_finite(&format!("cohort {i}")));
        }
        if cohort.sd < 0.0 {
            return Err(Error::negative_spread(&format!("cohort {i}"), cohort.sd));
        }
    }

    let k = cohorts.len();
    let n_total = cohorts
        .iter()
        .try_fold(0usize, |acc, c| acc.checked_add(c.n))
        .ok_or_else(|| Error::InvalidInput("arm size overflows usize".to_string()))?;
    if n_total <= k {
        return Err(Error::InvalidInput(format!(
            "{k} cohort(s) with {n_total} participant(s) leave no degrees of freedom"
        )));
    }

    let mean = cohorts.iter().map(|c| c.mean * c.n as f64).sum::<f64>() / n_total as f64;

    let mut sum_squares = 0.0;
    for cohort in cohorts {
        sum_squares += (cohort.n as f64 - 1.0) * (cohort.sd * cohort.sd);
        sum_squares += cohort.n as f64 * (cohort.mean - mean).powi(2);
    }
    let sd = (sum_squares / (n_total - k) as f64).sqrt();

    let min = cohorts.iter().filter_map(|c| c.min).reduce(f64::min);
    let max = cohorts.iter().filter_map(|c| c.max).reduce(f64::max);

    Ok(ArmSummary {
        n: n_total,
        mean,
        sd,
        min,
        max,
        n_cohorts: k,
    })
}

/// Difference between a pooled treatment arm and a pooled control arm
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArmComparison {
    pub control: ArmSummary,
    pub treatment: ArmSummary,
    /// `treatment.mean - control.mean`
    pub mean_difference: f64,
    /// `sqrt(sd_c² / N_c + sd_t² / N_t)`
    pub standard_error: f64,
    pub t_statistic: f64,
    /// `N_c + N_t - 2`
    pub df: usize,
    /// Two-sided Student-t p-value
    pub p_value: f64,
}

impl ArmComparison {
    /// 95% normal-approximation interval of the difference
    pub fn confidence_interval(&self) -> ConfidenceInterval {
        ConfidenceInterval::new(
            self.mean_difference - Z_95 * self.standard_error,
            self.mean_difference + Z_95 * self.standard_error,
            self.mean_difference,
            CONFIDENCE_95,
        )
    }
}

/// Pool both arms and compare them
pub fn compare_arms(control: &[ArmCohort], treatment: &[ArmCohort]) -> Result<ArmComparison> {
    let control = pool_arm(control)?;
    let treatment = pool_arm(treatment)?;

    let mean_difference = treatment.mean - control.mean;
    let standard_error = (control.sd * control.sd / control.n as f64
        + treatment.sd * treatment.sd / treatment.n as f64)
        .sqrt();
    if standard_error == 0.0 {
        return Err(Error::DegenerateVariance { mean_difference });
    }

    let t_statistic = mean_difference / standard_error;
    let df = control
        .n
        .checked_add(treatment.n)
        .map(|n| n - 2)
        .ok_or_else(|| Error::InvalidInput("combined arm size overflows usize".to_string()))?;
    let p_value = students_t_two_sided_p(t_statistic, df)?;

    debug!(mean_difference, standard_error, t_statistic, p_value, "compared pooled arms");

    Ok(ArmComparison {
        control,
        treatment,
        mean_difference,
        standard_error,
        t_statistic,
        df,
        p_value,
    })
}
