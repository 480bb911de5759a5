//! Per-study effect sizes from two-arm summary statistics
//!
//! Clinical trials usually report only the size, mean and standard deviation
//! of each arm. This crate turns those summaries into effect sizes that can
//! be pooled across studies.
//!
//! # Supported Effect Sizes
//!
//! - **Cohen's d**: Standardized mean difference over the pooled SD
//! - **Hedges' g**: Bias-corrected Cohen's d, with standard error, 95% CI,
//!   inverse-variance weight and a magnitude label
//! - **Mean difference**: Unstandardized difference in the outcome's units
//!
//! # Example
//!
//! ```rust
//! use meta_core::StudyInput;
//! use meta_effect::{EffectSizeEstimator, EffectSizeInterpretation, HedgesG};
//!
//! let study = StudyInput::new("Troisi, 2019", (15, 2.5, 0.98), (15, 2.48, 1.06));
//! let result = HedgesG::new().compute(&study).unwrap();
//!
//! assert_eq!(result.df, 28);
//! assert_eq!(result.magnitude_label, EffectSizeInterpretation::NoEffect);
//! println!("{result}");
//! ```

mod cohen_d;
mod hedges_g;
mod mean_difference;
mod traits;
mod types;

// Re-exports
pub use cohen_d::{CohenD, CohenDComponents};
pub use hedges_g::HedgesG;
pub use mean_difference::MeanDifference;
pub use traits::{EffectSizeEstimator, WeightedEffect};
pub use types::{EffectSizeInterpretation, EffectSizeResult, EffectSizeType, MeanDifferenceResult};

// Convenience constructors
pub fn hedges_g() -> HedgesG {
    HedgesG::new()
}

pub fn mean_difference() -> MeanDifference {
    MeanDifference::new()
}
