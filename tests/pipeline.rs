//! Whole-pipeline checks through the facade crate

use approx::assert_abs_diff_eq;
use meta_forest::prelude::*;
use meta_forest::report::{builtin, summary};

#[test]
fn test_free_testosterone_single_study() {
    let study = StudyInput::new("Troisi, 2019", (15, 2.5, 0.98), (15, 2.48, 1.06));
    let result = HedgesG::new().compute(&study).unwrap();

    assert_abs_diff_eq!(result.pooled_sd, 1.0208, epsilon = 1e-4);
    assert_abs_diff_eq!(result.cohens_d, -0.0196, epsilon = 1e-4);
    assert_eq!(result.df, 28);
    assert_abs_diff_eq!(result.correction_factor, 1.0 - 3.0 / 111.0, epsilon = 1e-12);
    assert_abs_diff_eq!(result.hedges_g, -0.0191, epsilon = 1e-4);
    assert_eq!(result.magnitude_label, EffectSizeInterpretation::NoEffect);

    let pooled = FixedEffects::new().aggregate(&[result.clone()]).unwrap();
    assert_abs_diff_eq!(pooled.pooled_effect, result.hedges_g, epsilon = 1e-12);
    assert_eq!(pooled.i_squared(), 0.0);
}

#[test]
fn test_degenerate_sample_size() {
    let study = StudyInput::new("tiny", (1, 1.0, 1.0), (1, 2.0, 1.0));
    assert!(matches!(
        HedgesG::new().compute(&study),
        Err(Error::InvalidSampleSize { n_control: 1, n_treatment: 1 })
    ));
}

#[test]
fn test_empty_aggregate() {
    let empty: Vec<EffectSizeResult> = Vec::new();
    assert!(matches!(
        FixedEffects::new().aggregate(&empty),
        Err(Error::EmptyInput(_))
    ));
}

#[test]
fn test_report_from_facade() -> anyhow::Result<()> {
    let config = ReportConfig::default();
    let report = Report::build(&builtin::inositol_dataset(), &config);
    let table = summary::format_summary_table(&report, &config);

    assert!(table.contains("Total testosterone"));
    let svg = SvgForestPlot::default().render(&ForestPlot::from_report(&report, &config))?;
    assert!(svg.contains("Total testosterone"));
    Ok(())
}
