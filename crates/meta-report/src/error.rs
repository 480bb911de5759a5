//! Error types for meta-report

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Meta-analysis error: {0}")]
    Meta(#[from] meta_core::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Render error: {0}")]
    Render(String),

    #[error("Invalid dataset: {0}")]
    InvalidDataset(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// A category whose analysis failed and was left out of the report
#[derive(Error, Debug, Clone, PartialEq)]
#[error("category '{category}': {source}")]
pub struct CategoryError {
    pub category: String,
    #[source]
    pub source: meta_core::Error,
}

impl Error {
    /// Wrap any plotting backend failure
    pub fn render(err: impl std::fmt::Display) -> Self {
        Self::Render(err.to_string())
    }
}
