//! Fixed-effects pooling of per-study effect sizes
//!
//! This crate combines the per-study results from `meta-effect` into one
//! estimate per outcome category:
//!
//! - **Fixed effects**: inverse-variance-weighted mean, its standard error
//!   and 95% interval, z-test
//! - **Heterogeneity**: Cochran's Q, degrees of freedom, I² and the χ² test of Q
//! - **Arm pooling**: merging per-cohort summaries of one arm before comparing arms
//!
//! # Example
//!
//! ```rust
//! use meta_core::StudyInput;
//! use meta_effect::{EffectSizeEstimator, HedgesG};
//! use meta_pooling::FixedEffects;
//!
//! let studies = vec![
//!     StudyInput::new("Shokrpour, 2019", (26, 2.8, 0.7), (27, 2.6, 0.8)),
//!     StudyInput::new("Genazzani, 2019", (24, 2.8, 0.6), (24, 1.9, 0.5)),
//! ];
//! let results = HedgesG::new().compute_all(&studies).unwrap();
//! let pooled = FixedEffects::new().aggregate(&results).unwrap();
//!
//! assert!(pooled.pooled_effect < 0.0);
//! assert!((0.0..=100.0).contains(&pooled.i_squared()));
//! ```

pub mod arm_pooling;
pub mod fixed_effects;
pub mod heterogeneity;
pub mod significance;
mod types;

pub use arm_pooling::{compare_arms, pool_arm, ArmCohort, ArmComparison, ArmSummary};
pub use fixed_effects::FixedEffects;
pub use heterogeneity::Heterogeneity;
pub use types::PooledResult;

/// Pool results with the default fixed-effects aggregator
pub fn aggregate<W: meta_effect::WeightedEffect>(results: &[W]) -> meta_core::Result<PooledResult> {
    FixedEffects::new().aggregate(results)
}
