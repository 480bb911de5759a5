//! Forest-plot row model
//!
//! Renderers never compute statistics. They walk [`ForestPlot::rows`] top to
//! bottom: a header per category, its studies, the pooled estimate and a
//! spacer between categories.

use crate::analysis::Report;
use crate::config::ReportConfig;
use meta_effect::{EffectSizeInterpretation, EffectSizeType};
use serde::Serialize;
use std::fmt;

/// One estimate with its interval, as drawn on a row
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestEstimate {
    pub label: String,
    pub effect: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub n_total: usize,
    /// Position of the owning category, used to pick a colour
    pub category_index: usize,
    /// Right-hand column text, e.g. "-0.26 [-0.80, 0.28]"
    pub value_text: String,
}

/// A row of the plot
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ForestRow {
    Header {
        label: String,
    },
    Study(ForestEstimate),
    Pooled {
        #[serde(flatten)]
        estimate: ForestEstimate,
        /// "I²=..%, Q=.." or `None` when heterogeneity is hidden
        heterogeneity_text: Option<String>,
    },
    Spacer,
}

impl ForestRow {
    /// Estimate drawn on this row, if any
    pub fn estimate(&self) -> Option<&ForestEstimate> {
        match self {
            Self::Study(estimate) | Self::Pooled { estimate, .. } => Some(estimate),
            Self::Header { .. } | Self::Spacer => None,
        }
    }

    /// Left-hand column text
    pub fn label(&self) -> &str {
        match self {
            Self::Header { label } => label,
            Self::Study(estimate) | Self::Pooled { estimate, .. } => &estimate.label,
            Self::Spacer => "",
        }
    }
}

/// Everything a renderer needs to draw a forest plot
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForestPlot {
    pub title: String,
    pub effect_type: EffectSizeType,
    pub rows: Vec<ForestRow>,
    pub n_categories: usize,
}

impl ForestPlot {
    /// Lay out every analyzed category of a report
    pub fn from_report<K: fmt::Display>(report: &Report<K>, config: &ReportConfig) -> Self {
        let mut rows = Vec::new();
        let n_categories = report.categories.len();

        for (index, analysis) in report.categories.iter().enumerate() {
            rows.push(ForestRow::Header {
                label: analysis.category.to_string(),
            });

            for study in analysis.rows() {
                rows.push(ForestRow::Study(ForestEstimate {
                    value_text: config.format_interval(
                        study.effect,
                        study.ci_lower,
                        study.ci_upper,
                    ),
                    label: study.name.clone(),
                    effect: study.effect,
                    ci_lower: study.ci_lower,
                    ci_upper: study.ci_upper,
                    n_total: study.n_total(),
                    category_index: index,
                }));
            }

            let pooled = &analysis.pooled;
            let mut value_text = config.format_interval(
                pooled.pooled_effect,
                pooled.pooled_ci_lower,
                pooled.pooled_ci_upper,
            );
            if let Some(label) = pooled.magnitude_label {
                value_text.push_str(&format!(" - {label}"));
            }
            let heterogeneity_text = analysis
                .shows_heterogeneity(config)
                .then(|| format!("I²={:.1}%, Q={:.2}", pooled.i_squared(), pooled.q()));

            rows.push(ForestRow::Pooled {
                estimate: ForestEstimate {
                    label: format!("Pooled ({} studies)", pooled.n_studies),
                    effect: pooled.pooled_effect,
                    ci_lower: pooled.pooled_ci_lower,
                    ci_upper: pooled.pooled_ci_upper,
                    n_total: pooled.n_total(),
                    category_index: index,
                    value_text,
                },
                heterogeneity_text,
            });

            if index + 1 < n_categories {
                rows.push(ForestRow::Spacer);
            }
        }

        Self {
            title: report.title.clone(),
            effect_type: report.measure.effect_size_type(),
            rows,
            n_categories,
        }
    }

    /// Rows that carry an estimate
    pub fn estimates(&self) -> impl Iterator<Item = &ForestEstimate> {
        self.rows.iter().filter_map(ForestRow::estimate)
    }

    /// Horizontal axis range
    ///
    /// The widest interval bounds are stretched by 20%, and the range always
    /// covers at least [-0.5, 0.5] so the zero line sits inside.
    pub fn x_range(&self) -> (f64, f64) {
        let lower = self.estimates().map(|e| e.ci_lower).fold(f64::INFINITY, f64::min);
        let upper = self.estimates().map(|e| e.ci_upper).fold(f64::NEG_INFINITY, f64::max);

        if !lower.is_finite() || !upper.is_finite() {
            return (-2.0, 2.0);
        }
        ((lower * 1.2).min(-0.5), (upper * 1.2).max(0.5))
    }

    /// Shaded magnitude bands for standardized effects, clipped to `x_range`
    ///
    /// Each band is `(from, to, category)`; both signs are returned.
    pub fn magnitude_bands(&self) -> Vec<(f64, f64, EffectSizeInterpretation)> {
        if !self.effect_type.is_standardized() {
            return Vec::new();
        }
        let (x_min, x_max) = self.x_range();

        let mut bands = Vec::new();
        for (i, category) in EffectSizeInterpretation::ALL.iter().enumerate() {
            let inner = category.lower_bound();
            let outer = EffectSizeInterpretation::ALL
                .get(i + 1)
                .map_or(f64::INFINITY, |next| next.lower_bound());

            if *category == EffectSizeInterpretation::NoEffect {
                bands.push((-outer, outer, *category));
                continue;
            }
            for (from, to) in [(inner, outer), (-outer, -inner)] {
                let (from, to) = (from.max(x_min), to.min(x_max));
                if from < to {
                    bands.push((from, to, *category));
                }
            }
        }
        bands
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::Report;
    use crate::builtin::inositol_dataset;
    use crate::config::EffectMeasure;

    fn plot(config: &ReportConfig) -> ForestPlot {
        ForestPlot::from_report(&Report::build(&inositol_dataset(), config), config)
    }

    #[test]
    fn test_row_layout() {
        let plot = plot(&ReportConfig::default());

        // 23 studies, 7 headers, 7 pooled rows, 6 spacers
        assert_eq!(plot.rows.len(), 43);
        assert_eq!(plot.n_categories, 7);
        assert_eq!(plot.rows[0].label(), "Fasting glucose");
        assert_eq!(plot.rows[1].label(), "Shokrpour, 2019");
        assert_eq!(plot.rows[4].label(), "Pooled (3 studies)");
        assert_eq!(plot.rows[5], ForestRow::Spacer);
        assert!(matches!(plot.rows.last(), Some(ForestRow::Pooled { .. })));
    }

    #[test]
    fn test_pooled_texts() {
        let plot = plot(&ReportConfig::default());
        let pooled: Vec<_> = plot
            .rows
            .iter()
            .filter_map(|row| match row {
                ForestRow::Pooled {
                    estimate,
                    heterogeneity_text,
                } => Some((estimate, heterogeneity_text)),
                _ => None,
            })
            .collect();

        let (homa, homa_het) = pooled[2];
        assert_eq!(homa.value_text, "-0.99 [-1.32, -0.66] - large");
        assert_eq!(homa_het.as_deref(), Some("I²=93.1%, Q=58.16"));

        let (_, cycles_het) = pooled[5];
        assert_eq!(*cycles_het, None);
    }

    #[test]
    fn test_x_range_covers_every_interval() {
        let plot = plot(&ReportConfig::default());
        let (x_min, x_max) = plot.x_range();

        assert!(x_min <= -0.5 && x_max >= 0.5);
        for estimate in plot.estimates() {
            assert!(estimate.ci_lower >= x_min && estimate.ci_upper <= x_max);
        }
    }

    #[test]
    fn test_x_range_without_estimates() {
        let plot = ForestPlot {
            title: String::new(),
            effect_type: EffectSizeType::StandardizedMeanDifference,
            rows: vec![ForestRow::Spacer],
            n_categories: 0,
        };
        assert_eq!(plot.x_range(), (-2.0, 2.0));
    }

    #[test]
    fn test_magnitude_bands() {
        let plot = plot(&ReportConfig::default());
        let bands = plot.magnitude_bands();

        assert_eq!(bands[0], (-0.2, 0.2, EffectSizeInterpretation::NoEffect));
        assert!(bands.contains(&(0.2, 0.5, EffectSizeInterpretation::Small)));
        assert!(bands.contains(&(-0.8, -0.5, EffectSizeInterpretation::Moderate)));
        assert_eq!(
            bands
                .iter()
                .filter(|b| b.2 == EffectSizeInterpretation::Large)
                .count(),
            2
        );

        let raw = plot_with(EffectMeasure::MeanDifference);
        assert!(raw.magnitude_bands().is_empty());
    }

    fn plot_with(measure: EffectMeasure) -> ForestPlot {
        plot(&ReportConfig::default().with_measure(measure))
    }
}
