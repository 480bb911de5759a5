//! # meta-forest
//!
//! Fixed-effects meta-analysis of two-arm clinical trials, from per-study
//! summary statistics to pooled estimates and forest plots.
//!
//! ## Crates
//!
//! - [`core`]: `StudyInput`, confidence intervals, the error taxonomy
//! - [`effect`]: Cohen's d, Hedges' g and the raw mean difference per study
//! - [`pooling`]: inverse-variance pooling, Cochran's Q, I², arm pooling
//! - [`report`]: per-category reports, summaries, forest plots, exports
//!
//! ## Example
//!
//! ```rust
//! use meta_forest::prelude::*;
//!
//! let studies = vec![
//!     StudyInput::new("Troisi, 2019", (15, 42.7, 9.91), (15, 34.98, 8.11)),
//!     StudyInput::new("Nordio, 2021", (20, 63.0, 11.8), (20, 37.0, 9.8)),
//!     StudyInput::new("Genazzani, 2019", (24, 54.3, 5.0), (24, 54.8, 7.0)),
//! ];
//!
//! let results = HedgesG::new().compute_all(&studies).unwrap();
//! let pooled = FixedEffects::new().aggregate(&results).unwrap();
//!
//! assert_eq!(pooled.magnitude_label, Some(EffectSizeInterpretation::Moderate));
//! println!("{pooled}");
//! ```

pub use meta_core as core;
pub use meta_effect as effect;
pub use meta_pooling as pooling;
pub use meta_report as report;

/// Commonly used items
pub mod prelude {
    pub use meta_core::{ConfidenceInterval, Error, Result, StudyInput, Z_95};
    pub use meta_effect::{
        EffectSizeEstimator, EffectSizeInterpretation, EffectSizeResult, EffectSizeType, HedgesG,
        MeanDifference, MeanDifferenceResult, WeightedEffect,
    };
    pub use meta_pooling::{FixedEffects, Heterogeneity, PooledResult};
    pub use meta_report::{
        Dataset, EffectMeasure, ForestPlot, ForestPlotRenderer, Outcome, Report, ReportConfig,
        SvgForestPlot,
    };
}
