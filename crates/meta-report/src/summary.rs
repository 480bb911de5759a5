//! Text summaries: the per-category table, the per-study table and headline findings

use crate::analysis::{CategoryAnalysis, Report};
use crate::config::ReportConfig;
use std::fmt::{self, Write as _};

/// One line of the summary table, already formatted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub category: String,
    pub n_studies: usize,
    pub n_participants: usize,
    pub effect: String,
    pub interpretation: String,
    pub i_squared: String,
}

impl SummaryRow {
    pub fn from_analysis<K: fmt::Display>(
        analysis: &CategoryAnalysis<K>,
        config: &ReportConfig,
    ) -> Self {
        let pooled = &analysis.pooled;
        Self {
            category: analysis.category.to_string(),
            n_studies: pooled.n_studies,
            n_participants: pooled.n_total(),
            effect: config.format_interval(
                pooled.pooled_effect,
                pooled.pooled_ci_lower,
                pooled.pooled_ci_upper,
            ),
            interpretation: pooled
                .magnitude_label
                .map_or_else(|| "-".to_string(), |label| label.to_string()),
            i_squared: format_i_squared(analysis, config),
        }
    }
}

fn format_i_squared<K>(analysis: &CategoryAnalysis<K>, config: &ReportConfig) -> String {
    if analysis.shows_heterogeneity(config) {
        format!("{:.1}%", analysis.pooled.i_squared())
    } else {
        "n/a".to_string()
    }
}

/// Summary rows in report order
pub fn summary_rows<K: fmt::Display>(report: &Report<K>, config: &ReportConfig) -> Vec<SummaryRow> {
    report
        .categories
        .iter()
        .map(|analysis| SummaryRow::from_analysis(analysis, config))
        .collect()
}

/// Left-aligned fixed-width table
fn render_table(header: &[String], rows: &[Vec<String>]) -> String {
    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let mut out = String::new();
    let mut push_line = |cells: &[String]| {
        let line: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| {
                let pad = width - cell.chars().count();
                format!("{cell}{}", " ".repeat(pad))
            })
            .collect();
        out.push_str(line.join("  ").trim_end());
        out.push('\n');
    };

    push_line(header);
    for row in rows {
        push_line(row.as_slice());
    }
    out
}

/// The per-category summary table
pub fn format_summary_table<K: fmt::Display>(report: &Report<K>, config: &ReportConfig) -> String {
    let header = vec![
        "Category".to_string(),
        "Studies".to_string(),
        "Participants".to_string(),
        format!("Effect ({})", report.measure.symbol()),
        "Interpretation".to_string(),
        "I²".to_string(),
    ];
    let rows: Vec<Vec<String>> = summary_rows(report, config)
        .into_iter()
        .map(|row| {
            vec![
                row.category,
                row.n_studies.to_string(),
                row.n_participants.to_string(),
                row.effect,
                row.interpretation,
                row.i_squared,
            ]
        })
        .collect();
    render_table(&header, &rows)
}

/// Every study under its category heading, with weights as a share of the category
pub fn format_study_table<K: fmt::Display>(report: &Report<K>, config: &ReportConfig) -> String {
    let header = vec![
        "Study".to_string(),
        "n (C/T)".to_string(),
        format!("{} [95% CI]", report.measure.symbol()),
        "SE".to_string(),
        "Weight".to_string(),
        "Interpretation".to_string(),
    ];

    let mut out = String::new();
    for analysis in &report.categories {
        let rows = analysis.rows();
        let total_weight: f64 = rows.iter().map(|r| r.weight).sum();
        let table: Vec<Vec<String>> = rows
            .iter()
            .map(|row| {
                vec![
                    row.name.clone(),
                    format!("{}/{}", row.n_control, row.n_treatment),
                    config.format_interval(row.effect, row.ci_lower, row.ci_upper),
                    config.format_value(row.standard_error),
                    format!("{:.1}%", row.weight / total_weight * 100.0),
                    row.magnitude_label
                        .map_or_else(|| "-".to_string(), |label| label.to_string()),
                ]
            })
            .collect();

        let _ = writeln!(out, "{}", analysis.category);
        out.push_str(&render_table(&header, &table));
        out.push('\n');
    }
    out
}

/// Headline result of one category
#[derive(Debug, Clone, PartialEq)]
pub struct Finding {
    pub category: String,
    pub n_studies: usize,
    pub n_participants: usize,
    pub symbol: &'static str,
    pub effect: String,
    /// Direction and, for standardized effects, magnitude, e.g. "-large"
    pub direction: String,
    pub i_squared: String,
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "- {} ({} studies, n={}): {}={}, effect {}, I²={}",
            self.category,
            self.n_studies,
            self.n_participants,
            self.symbol,
            self.effect,
            self.direction,
            self.i_squared
        )
    }
}

fn effect_sign(effect: f64) -> &'static str {
    if effect > 0.0 {
        "+"
    } else if effect < 0.0 {
        "-"
    } else {
        "±"
    }
}

/// One finding per analyzed category
pub fn findings<K: fmt::Display>(report: &Report<K>, config: &ReportConfig) -> Vec<Finding> {
    report
        .categories
        .iter()
        .map(|analysis| {
            let row = SummaryRow::from_analysis(analysis, config);
            let sign = effect_sign(analysis.pooled.pooled_effect);
            let direction = match analysis.pooled.magnitude_label {
                Some(label) => format!("{sign}{label}"),
                None => sign.to_string(),
            };
            Finding {
                category: row.category,
                n_studies: row.n_studies,
                n_participants: row.n_participants,
                symbol: report.measure.symbol(),
                effect: row.effect,
                direction,
                i_squared: row.i_squared,
            }
        })
        .collect()
}
