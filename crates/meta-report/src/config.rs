//! Configuration types for report generation

use meta_effect::EffectSizeType;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Effect measure computed for every study
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EffectMeasure {
    /// Bias-corrected standardized mean difference
    #[default]
    HedgesG,

    /// Raw difference in the outcome's units
    MeanDifference,
}

impl EffectMeasure {
    /// Get the name of this measure
    pub fn name(&self) -> &'static str {
        match self {
            Self::HedgesG => "hedges-g",
            Self::MeanDifference => "mean-difference",
        }
    }

    /// Short symbol used in tables ("g" or "MD")
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::HedgesG => "g",
            Self::MeanDifference => "MD",
        }
    }

    pub fn effect_size_type(&self) -> EffectSizeType {
        match self {
            Self::HedgesG => EffectSizeType::StandardizedMeanDifference,
            Self::MeanDifference => EffectSizeType::MeanDifference,
        }
    }
}

impl fmt::Display for EffectMeasure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Options shared by the analysis, summary and plotting stages
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    pub measure: EffectMeasure,

    /// Order categories by the absolute pooled effect, largest first
    pub sort_by_magnitude: bool,

    /// Show heterogeneity as "n/a" for categories with a single study
    pub suppress_single_study_heterogeneity: bool,

    /// Decimal places for effects and interval bounds
    pub decimals: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            measure: EffectMeasure::HedgesG,
            sort_by_magnitude: false,
            suppress_single_study_heterogeneity: true,
            decimals: 2,
        }
    }
}

impl ReportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_measure(mut self, measure: EffectMeasure) -> Self {
        self.measure = measure;
        self
    }

    pub fn with_sort_by_magnitude(mut self, sort: bool) -> Self {
        self.sort_by_magnitude = sort;
        self
    }

    pub fn with_suppress_single_study_heterogeneity(mut self, suppress: bool) -> Self {
        self.suppress_single_study_heterogeneity = suppress;
        self
    }

    pub fn with_decimals(mut self, decimals: usize) -> Self {
        self.decimals = decimals;
        self
    }

    /// Format an effect or bound with the configured precision
    pub fn format_value(&self, value: f64) -> String {
        format!("{:.*}", self.decimals, value)
    }

    /// Format `estimate [lower, upper]` with the configured precision
    pub fn format_interval(&self, estimate: f64, lower: f64, upper: f64) -> String {
        format!(
            "{} [{}, {}]",
            self.format_value(estimate),
            self.format_value(lower),
            self.format_value(upper)
        )
    }
}
