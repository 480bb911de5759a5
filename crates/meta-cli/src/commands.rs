//! Subcommand implementations

use crate::Commands;
use anyhow::{bail, Context};
use meta_report::{
    builtin, export, summary, Dataset, ForestPlot, ForestPlotRenderer, Report, ReportConfig,
    SvgForestPlot,
};
use serde::Serialize;
use std::fmt;
use std::path::Path;
use tracing::info;

/// Run against the built-in inositol dataset
pub fn run_builtin(command: &Commands, config: &ReportConfig) -> anyhow::Result<()> {
    run(&builtin::inositol_dataset(), command, config)
}

/// Run against a JSON dataset with free-form category labels
pub fn run_file(path: &Path, command: &Commands, config: &ReportConfig) -> anyhow::Result<()> {
    let dataset = Dataset::<String>::from_path(path)
        .with_context(|| format!("failed to load dataset {}", path.display()))?;
    run(&dataset, command, config)
}

fn run<K>(dataset: &Dataset<K>, command: &Commands, config: &ReportConfig) -> anyhow::Result<()>
where
    K: Clone + fmt::Display + Serialize + Send + Sync,
{
    let report = Report::build(dataset, config);
    if report.is_empty() {
        bail!(
            "no category could be analyzed ({} skipped)",
            report.skipped.len()
        );
    }

    match command {
        Commands::Summary => print_summary(&report, config),
        Commands::Studies => print!("{}", summary::format_study_table(&report, config)),
        Commands::Plot { output, width } => {
            let plot = ForestPlot::from_report(&report, config);
            SvgForestPlot::default()
                .with_width(*width)
                .render_to_file(&plot, output)
                .with_context(|| format!("failed to write {}", output.display()))?;
            info!(path = %output.display(), "forest plot written");
        }
        Commands::Export { csv, json } => {
            if let Some(path) = csv {
                export::write_csv_path(&report, path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "CSV export written");
            }
            if let Some(path) = json {
                export::write_json_path(&report, path)
                    .with_context(|| format!("failed to write {}", path.display()))?;
                info!(path = %path.display(), "JSON export written");
            }
        }
    }
    Ok(())
}

fn print_summary<K: fmt::Display>(report: &Report<K>, config: &ReportConfig) {
    if !report.title.is_empty() {
        println!("{}", report.title);
    }
    println!("Studies analyzed: {}", report.n_studies());
    println!("Outcome categories: {}", report.categories.len());
    println!();
    println!("META-ANALYSIS SUMMARY ({}):", report.measure);
    print!("{}", summary::format_summary_table(report, config));
    println!();
    println!("Main findings:");
    for finding in summary::findings(report, config) {
        println!("{finding}");
    }
    for skipped in &report.skipped {
        println!("(skipped {skipped})");
    }
}
