//! CSV and JSON export
//!
//! CSV holds one record per study. JSON holds the whole report: per-study
//! results and the pooled estimate of every category.

use crate::analysis::Report;
use crate::Result;
use serde::Serialize;
use std::fmt;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use tracing::debug;

/// Flat per-study CSV record
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudyRecord {
    pub category: String,
    pub study: String,
    pub measure: &'static str,
    pub n_control: usize,
    pub n_treatment: usize,
    pub effect: f64,
    pub standard_error: f64,
    pub ci_lower: f64,
    pub ci_upper: f64,
    pub weight: f64,
    /// Empty for unstandardized measures
    pub magnitude: &'static str,
}

/// Every study of every analyzed category, in report order
pub fn study_records<K: fmt::Display>(report: &Report<K>) -> Vec<StudyRecord> {
    report
        .categories
        .iter()
        .flat_map(|analysis| {
            let category = analysis.category.to_string();
            analysis.rows().into_iter().map(move |row| StudyRecord {
                category: category.clone(),
                study: row.name,
                measure: report.measure.name(),
                n_control: row.n_control,
                n_treatment: row.n_treatment,
                effect: row.effect,
                standard_error: row.standard_error,
                ci_lower: row.ci_lower,
                ci_upper: row.ci_upper,
                weight: row.weight,
                magnitude: row.magnitude_label.map_or("", |label| label.label()),
            })
        })
        .collect()
}

/// Write the per-study CSV to any writer
pub fn write_csv<K: fmt::Display, W: Write>(report: &Report<K>, writer: W) -> Result<()> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for record in study_records(report) {
        csv_writer.serialize(record)?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Write the per-study CSV to `path`
pub fn write_csv_path<K: fmt::Display>(report: &Report<K>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    write_csv(report, BufWriter::new(File::create(path)?))?;
    debug!(path = %path.display(), "wrote CSV export");
    Ok(())
}

/// Pretty-printed JSON of the whole report
pub fn to_json<K: Serialize>(report: &Report<K>) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

/// Write the JSON export to `path`
pub fn write_json_path<K: Serialize>(report: &Report<K>, path: impl AsRef<Path>) -> Result<()> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote JSON export");
    Ok(())
}
