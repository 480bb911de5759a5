//! Meta-analysis reports: categories in, tables, forest plots and exports out
//!
//! A [`Dataset`] groups studies by category. [`Report::build`] computes every
//! study's effect on the configured measure, pools each category with a
//! fixed-effects model and drops the categories that cannot be analyzed.
//! The report then feeds:
//!
//! - **Summaries**: the per-category table, the per-study table and headline findings
//! - **Forest plots**: a [`ForestPlot`] row model drawn by a [`ForestPlotRenderer`]
//! - **Exports**: per-study CSV and whole-report JSON
//!
//! # Example
//!
//! ```rust
//! use meta_report::{builtin, ForestPlot, ForestPlotRenderer, Report, ReportConfig, SvgForestPlot};
//!
//! let config = ReportConfig::default();
//! let report = Report::build(&builtin::inositol_dataset(), &config);
//!
//! for finding in meta_report::summary::findings(&report, &config) {
//!     println!("{finding}");
//! }
//!
//! let plot = ForestPlot::from_report(&report, &config);
//! let svg = SvgForestPlot::default().render(&plot).unwrap();
//! assert!(svg.contains("HOMA-IR"));
//! ```

pub mod analysis;
pub mod builtin;
pub mod config;
pub mod dataset;
pub mod error;
pub mod export;
pub mod forest;
pub mod outcome;
pub mod summary;
pub mod svg;
pub mod visualization;

pub use analysis::{analyze_all, analyze_category, CategoryAnalysis, Report, StudyResults, StudyRow};
pub use config::{EffectMeasure, ReportConfig};
pub use dataset::{CategoryStudies, Dataset};
pub use error::{CategoryError, Error, Result};
pub use forest::{ForestEstimate, ForestPlot, ForestRow};
pub use outcome::Outcome;
pub use svg::SvgForestPlot;
pub use visualization::{ForestPlotRenderer, NullRenderer};
