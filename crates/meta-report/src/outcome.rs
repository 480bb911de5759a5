//! Outcome categories of the built-in dataset

use serde::{Deserialize, Serialize};
use std::fmt;

/// Clinical outcome a set of studies reports on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Outcome {
    FastingGlucose,
    FreeTestosterone,
    HomaIr,
    Bmi,
    FastingInsulin,
    MenstrualCycles,
    TotalTestosterone,
}

impl Outcome {
    /// Every outcome, in report order
    pub const ALL: [Self; 7] = [
        Self::FastingGlucose,
        Self::FreeTestosterone,
        Self::HomaIr,
        Self::Bmi,
        Self::FastingInsulin,
        Self::MenstrualCycles,
        Self::TotalTestosterone,
    ];

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::FastingGlucose => "Fasting glucose",
            Self::FreeTestosterone => "Free testosterone",
            Self::HomaIr => "HOMA-IR",
            Self::Bmi => "BMI",
            Self::FastingInsulin => "Fasting insulin",
            Self::MenstrualCycles => "Menstrual cycles",
            Self::TotalTestosterone => "Total testosterone",
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
