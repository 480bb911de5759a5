//! Study datasets grouped by category
//!
//! A dataset is an ordered list of categories, each with an ordered list of
//! studies. On disk it is JSON:
//!
//! ```json
//! {
//!   "title": "My review",
//!   "categories": [
//!     { "category": "BMI", "studies": [ { "name": "A, 2020", "n_control": 20, ... } ] }
//!   ]
//! }
//! ```

use crate::{Error, Result};
use meta_core::StudyInput;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use tracing::debug;

/// Studies reporting on one category
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryStudies<K> {
    pub category: K,
    pub studies: Vec<StudyInput>,
}

/// Ordered mapping from category to studies
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset<K> {
    #[serde(default)]
    pub title: String,
    pub categories: Vec<CategoryStudies<K>>,
}

impl<K> Dataset<K> {
    /// Create an empty dataset
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            categories: Vec::new(),
        }
    }

    /// Append a category, keeping insertion order
    pub fn with_category(mut self, category: K, studies: Vec<StudyInput>) -> Self {
        self.categories.push(CategoryStudies { category, studies });
        self
    }

    /// Total number of studies over all categories
    pub fn n_studies(&self) -> usize {
        self.categories.iter().map(|c| c.studies.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl<K: fmt::Display> Dataset<K> {
    /// Check the dataset's structure and every study's statistics
    ///
    /// Sample sizes and empty categories are left to the analysis, where a
    /// failure only drops its own category.
    pub fn validate(&self) -> Result<()> {
        if self.categories.is_empty() {
            return Err(Error::InvalidDataset(
                "dataset has no categories".to_string(),
            ));
        }

        for entry in &self.categories {
            for study in &entry.studies {
                study.check_statistics().map_err(|err| {
                    Error::InvalidDataset(format!(
                        "category '{}', study '{}': {}",
                        entry.category, study.name, err
                    ))
                })?;
            }
        }
        Ok(())
    }
}

impl<K: DeserializeOwned + fmt::Display> Dataset<K> {
    /// Parse and validate a JSON dataset
    pub fn from_json_str(json: &str) -> Result<Self> {
        let dataset: Self = serde_json::from_str(json)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Parse and validate a JSON dataset from a reader
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let dataset: Self = serde_json::from_reader(reader)?;
        dataset.validate()?;
        Ok(dataset)
    }

    /// Load a JSON dataset from disk
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let dataset = Self::from_reader(BufReader::new(File::open(path)?))?;
        debug!(
            path = %path.display(),
            categories = dataset.categories.len(),
            studies = dataset.n_studies(),
            "loaded dataset"
        );
        Ok(dataset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const JSON: &str = r#"{
        "title": "Inositol review",
        "categories": [
            {
                "category": "Menstrual cycles",
                "studies": [
                    {
                        "name": "Troisi, 2019",
                        "n_control": 15,
                        "n_treatment": 15,
                        "mean_control": 1.6,
                        "mean_treatment": 2.0,
                        "sd_control": 0.5,
                        "sd_treatment": 0.7
                    }
                ]
            }
        ]
    }"#;

    #[test]
    fn test_parse() {
        let dataset = Dataset::<String>::from_json_str(JSON).unwrap();
        assert_eq!(dataset.title, "Inositol review");
        assert_eq!(dataset.categories[0].category, "Menstrual cycles");
        assert_eq!(dataset.categories[0].studies[0].n_total(), 30);
    }

    #[test]
    fn test_rejects_malformed_study() {
        let json = JSON.replace("\"sd_control\": 0.5", "\"sd_control\": -0.5");
        let err = Dataset::<String>::from_json_str(&json).unwrap_err();
        assert!(matches!(err, Error::InvalidDataset(_)));
        assert!(err.to_string().contains("Troisi, 2019"));

        let json = JSON.replace("\"sd_treatment\": 0.7", "\"sd_treatment\": 1e400");
        assert!(Dataset::<String>::from_json_str(&json).is_err());
    }

    #[test]
    fn test_sample_sizes_checked_at_analysis() {
        let json = JSON.replace("\"n_treatment\": 15", "\"n_treatment\": 0");
        let dataset = Dataset::<String>::from_json_str(&json).unwrap();
        assert_eq!(dataset.categories[0].studies[0].n_treatment, 0);
    }

    #[test]
    fn test_rejects_missing_field() {
        let json = JSON.replace("\"mean_control\": 1.6,", "");
        assert!(matches!(
            Dataset::<String>::from_json_str(&json),
            Err(Error::Json(_))
        ));
    }

    #[test]
    fn test_rejects_no_categories() {
        assert!(matches!(
            Dataset::<String>::from_json_str(r#"{"categories": []}"#),
            Err(Error::InvalidDataset(_))
        ));
    }

    #[test]
    fn test_builder_keeps_order() {
        let dataset = Dataset::new("t")
            .with_category("b", vec![])
            .with_category("a", vec![]);
        let keys: Vec<_> = dataset.categories.iter().map(|c| c.category).collect();
        assert_eq!(keys, vec!["b", "a"]);
        assert_eq!(dataset.n_studies(), 0);
    }
}
