//! Core types for fixed-effects meta-analysis
//!
//! This crate holds the pieces every other meta-forest crate shares:
//!
//! - [`StudyInput`]: one trial's two-arm summary statistics
//! - [`ConfidenceInterval`] and the [`Z_95`] critical value
//! - [`Error`] / [`Result`]: the error taxonomy surfaced by the computation layer
//!
//! # Example
//!
//! ```rust
//! use meta_core::{ConfidenceInterval, StudyInput};
//!
//! let study = StudyInput::new("Troisi, 2019", (15, 2.5, 0.98), (15, 2.48, 1.06));
//! assert_eq!(study.degrees_of_freedom().unwrap(), 28);
//!
//! let ci = ConfidenceInterval::normal_95(-0.5, 0.1);
//! assert!(ci.excludes_zero());
//! ```

pub mod error;
pub mod interval;
pub mod study;

pub use error::{Error, Result};
pub use interval::{ConfidenceInterval, CONFIDENCE_95, Z_95};
pub use study::StudyInput;
