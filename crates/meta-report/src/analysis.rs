//! Per-category analysis: effect sizes for every study, then one pooled estimate

use crate::config::{EffectMeasure, ReportConfig};
use crate::dataset::{CategoryStudies, Dataset};
use crate::error::CategoryError;
use meta_core::StudyInput;
use meta_effect::{
    EffectSizeEstimator, EffectSizeInterpretation, EffectSizeResult, HedgesG, MeanDifference,
    MeanDifferenceResult, WeightedEffect,
};
use meta_pooling::{FixedEffects, PooledResult};
use serde::Serialize;
use std::fmt;
use tracing::{debug, instrument, warn};

/// Per-study results of one category, on the configured measure
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "measure", content = "results", rename_all = "kebab-case")]
pub enum StudyResults {
    HedgesG(Vec<EffectSizeResult>),
    MeanDifference(Vec<MeanDifferenceResult>),
}

impl StudyResults {
    pub fn len(&self) -> usize {
        match self {
            Self::HedgesG(results) => results.len(),
            Self::MeanDifference(results) => results.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Measure-independent view of every study, in input order
    pub fn rows(&self) -> Vec<StudyRow> {
        match self {
            Self::HedgesG(results) => results.iter().map(StudyRow::from_effect).collect(),
            Self::MeanDifference(results) => results.iter().map(StudyRow::from_effect).collect(),
        }
    }
}

/// One study as reports and plots see it
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyRow {
    pub name: String,
    pub n_control: usize,
    pub n_treatment: usize,
    pub effect: f64,
    pub standard_error: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub weight: f64,
    pub magnitude_label: Option<EffectSizeInterpretation>,
}

impl StudyRow {
    fn from_effect<W: WeightedEffect>(result: &W) -> Self {
        let (n_control, n_treatment) = result.arm_sizes();
        let ci = result.confidence_interval();
        Self {
            name: result.label().to_string(),
            n_control,
            n_treatment,
            effect: result.effect(),
            standard_error: result.standard_error(),
            ci_lower: ci.lower,
            ci_upper: ci.upper,
            weight: result.weight(),
            magnitude_label: result.interpretation(),
        }
    }

    pub fn n_total(&self) -> usize {
        self.n_control + self.n_treatment
    }
}

/// Results of one category
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryAnalysis<K> {
    pub category: K,
    pub studies: StudyResults,
    pub pooled: PooledResult,
}

impl<K> CategoryAnalysis<K> {
    pub fn n_studies(&self) -> usize {
        self.studies.len()
    }

    pub fn rows(&self) -> Vec<StudyRow> {
        self.studies.rows()
    }

    /// Whether heterogeneity should be shown for this category
    pub fn shows_heterogeneity(&self, config: &ReportConfig) -> bool {
        !config.suppress_single_study_heterogeneity || self.pooled.heterogeneity.is_defined()
    }
}

/// Compute every study of a category and pool them
#[instrument(skip_all, fields(category = %category, k = studies.len()))]
pub fn analyze_category<K: Clone + fmt::Display>(
    category: &K,
    studies: &[StudyInput],
    measure: EffectMeasure,
) -> meta_core::Result<CategoryAnalysis<K>> {
    let pooler = FixedEffects::new();
    let (studies, pooled) = match measure {
        EffectMeasure::HedgesG => {
            let results = HedgesG::new().compute_all(studies)?;
            let pooled = pooler.aggregate(&results)?;
            (StudyResults::HedgesG(results), pooled)
        }
        EffectMeasure::MeanDifference => {
            let results = MeanDifference::new().compute_all(studies)?;
            let pooled = pooler.aggregate(&results)?;
            (StudyResults::MeanDifference(results), pooled)
        }
    };

    debug!(pooled_effect = pooled.pooled_effect, "analyzed category");

    Ok(CategoryAnalysis {
        category: category.clone(),
        studies,
        pooled,
    })
}

fn analyze_entry<K: Clone + fmt::Display>(
    entry: &CategoryStudies<K>,
    measure: EffectMeasure,
) -> Result<CategoryAnalysis<K>, CategoryError> {
    analyze_category(&entry.category, &entry.studies, measure).map_err(|source| CategoryError {
        category: entry.category.to_string(),
        source,
    })
}

/// Analyze every category, one result each, in dataset order
///
/// With the `parallel` feature the categories run on rayon's pool; the
/// output order is unchanged.
pub fn analyze_all<K>(
    dataset: &Dataset<K>,
    measure: EffectMeasure,
) -> Vec<Result<CategoryAnalysis<K>, CategoryError>>
where
    K: Clone + fmt::Display + Send + Sync,
{
    #[cfg(feature = "parallel")]
    let results: Vec<_> = {
        use rayon::prelude::*;
        dataset
            .categories
            .par_iter()
            .map(|entry| analyze_entry(entry, measure))
            .collect()
    };

    #[cfg(not(feature = "parallel"))]
    let results: Vec<_> = dataset
        .categories
        .iter()
        .map(|entry| analyze_entry(entry, measure))
        .collect();

    results
}

/// Order categories by absolute pooled effect, largest first
///
/// The sort is stable, so ties keep dataset order.
pub fn sort_by_magnitude<K>(analyses: &mut [CategoryAnalysis<K>]) {
    analyses.sort_by(|a, b| {
        b.pooled
            .pooled_effect
            .abs()
            .total_cmp(&a.pooled.pooled_effect.abs())
    });
}

/// Everything needed to print, plot or export one dataset
#[derive(Debug, Clone, Serialize)]
pub struct Report<K> {
    pub title: String,
    pub measure: EffectMeasure,
    pub categories: Vec<CategoryAnalysis<K>>,
    /// Categories left out because their analysis failed
    #[serde(skip)]
    pub skipped: Vec<CategoryError>,
}

impl<K> Report<K>
where
    K: Clone + fmt::Display + Send + Sync,
{
    /// Analyze a dataset, skipping categories that fail
    #[instrument(skip_all, fields(title = %dataset.title))]
    pub fn build(dataset: &Dataset<K>, config: &ReportConfig) -> Self {
        let mut categories = Vec::with_capacity(dataset.categories.len());
        let mut skipped = Vec::new();

        for outcome in analyze_all(dataset, config.measure) {
            match outcome {
                Ok(analysis) => categories.push(analysis),
                Err(err) => {
                    warn!(category = %err.category, error = %err.source, "skipping category");
                    skipped.push(err);
                }
            }
        }

        if config.sort_by_magnitude {
            sort_by_magnitude(&mut categories);
        }

        debug!(
            analyzed = categories.len(),
            skipped = skipped.len(),
            "built report"
        );

        Self {
            title: dataset.title.clone(),
            measure: config.measure,
            categories,
            skipped,
        }
    }
}

impl<K> Report<K> {
    pub fn n_studies(&self) -> usize {
        self.categories.iter().map(|c| c.n_studies()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtin::inositol_dataset;
    use crate::outcome::Outcome;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_analyze_category_hedges() {
        let studies = crate::builtin::studies_for(Outcome::HomaIr);
        let analysis =
            analyze_category(&Outcome::HomaIr, &studies, EffectMeasure::HedgesG).unwrap();

        assert_eq!(analysis.n_studies(), 5);
        assert_abs_diff_eq!(
            analysis.pooled.pooled_effect,
            -0.990_171_901_824_223_7,
            epsilon = 1e-10
        );

        let rows = analysis.rows();
        assert_eq!(rows[0].name, "Shokrpour, 2019");
        assert_abs_diff_eq!(rows[2].effect, -2.099_209, epsilon = 1e-5);
        assert_eq!(rows[4].magnitude_label, Some(EffectSizeInterpretation::Large));
    }

    #[test]
    fn test_analyze_category_mean_difference() {
        let studies = crate::builtin::studies_for(Outcome::Bmi);
        let analysis =
            analyze_category(&Outcome::Bmi, &studies, EffectMeasure::MeanDifference).unwrap();

        assert!(matches!(analysis.studies, StudyResults::MeanDifference(_)));
        assert_eq!(analysis.rows()[0].magnitude_label, None);
        assert_abs_diff_eq!(analysis.rows()[0].effect, 0.7, epsilon = 1e-12);
        assert_eq!(analysis.pooled.magnitude_label, None);
    }

    #[test]
    fn test_analyze_all_keeps_order_and_reports_failures() {
        let dataset = inositol_dataset().with_category(Outcome::Bmi, Vec::new());
        let results = analyze_all(&dataset, EffectMeasure::HedgesG);

        assert_eq!(results.len(), 8);
        for (result, expected) in results.iter().zip(Outcome::ALL) {
            assert_eq!(result.as_ref().unwrap().category, expected);
        }
        let failure = results[7].as_ref().unwrap_err();
        assert_eq!(failure.category, "BMI");
        assert!(matches!(failure.source, meta_core::Error::EmptyInput(_)));
    }

    #[test]
    fn test_report_skips_failing_category() {
        let dataset = Dataset::new("partial")
            .with_category("empty".to_string(), Vec::new())
            .with_category(
                "cycles".to_string(),
                crate::builtin::studies_for(Outcome::MenstrualCycles),
            );
        let report = Report::build(&dataset, &ReportConfig::default());

        assert_eq!(report.categories.len(), 1);
        assert_eq!(report.categories[0].category, "cycles");
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.n_studies(), 1);
    }

    #[test]
    fn test_sort_by_magnitude() {
        let config = ReportConfig::default().with_sort_by_magnitude(true);
        let report = Report::build(&inositol_dataset(), &config);

        let magnitudes: Vec<f64> = report
            .categories
            .iter()
            .map(|c| c.pooled.pooled_effect.abs())
            .collect();
        assert!(magnitudes.windows(2).all(|w| w[0] >= w[1]));
        assert_eq!(report.categories.last().unwrap().category, Outcome::FreeTestosterone);
    }

    #[test]
    fn test_single_study_heterogeneity_display() {
        let report = Report::build(&inositol_dataset(), &ReportConfig::default());
        let cycles = report
            .categories
            .iter()
            .find(|c| c.category == Outcome::MenstrualCycles)
            .unwrap();

        assert!(!cycles.shows_heterogeneity(&ReportConfig::default()));
        assert!(cycles.shows_heterogeneity(
            &ReportConfig::default().with_suppress_single_study_heterogeneity(false)
        ));
    }
}
