//! Built-in inositol dataset
//!
//! Summary statistics of the randomized trials of inositol supplementation
//! in polycystic ovary syndrome, one entry per trial and outcome.

use crate::dataset::Dataset;
use crate::outcome::Outcome;
use meta_core::StudyInput;

pub const INOSITOL_TITLE: &str = "Forest Plot: Efficacy of Inositol on Clinical Parameters";

/// Studies for every [`Outcome`], in report order
pub fn inositol_dataset() -> Dataset<Outcome> {
    Outcome::ALL
        .iter()
        .fold(Dataset::new(INOSITOL_TITLE), |dataset, &outcome| {
            dataset.with_category(outcome, studies_for(outcome))
        })
}

/// Studies reporting on one outcome
pub fn studies_for(outcome: Outcome) -> Vec<StudyInput> {
    match outcome {
        Outcome::FastingGlucose => vec![
            StudyInput::new("Shokrpour, 2019", (26, 94.8, 9.7), (27, 89.8, 8.5)),
            StudyInput::new("Troisi, 2019", (15, 83.9, 7.5), (15, 88.0, 8.5)),
            StudyInput::new("Nordio, 2021", (20, 105.0, 0.93), (20, 99.0, 1.375)),
        ],
        Outcome::FreeTestosterone => vec![StudyInput::new(
            "Troisi, 2019",
            (15, 2.5, 0.98),
            (15, 2.48, 1.06),
        )],
        Outcome::HomaIr => vec![
            StudyInput::new("Shokrpour, 2019", (26, 2.8, 0.7), (27, 2.6, 0.8)),
            StudyInput::new("Troisi, 2019", (15, 1.68, 0.64), (15, 1.76, 0.99)),
            StudyInput::new("Nordio, 2019", (8, 5.05, 1.51), (8, 2.45, 0.68)),
            StudyInput::new("Nordio, 2021", (20, 4.4, 0.307), (20, 3.0, 0.263)),
            StudyInput::new("Genazzani, 2019", (24, 2.8, 0.6), (24, 1.9, 0.5)),
        ],
        Outcome::Bmi => vec![
            StudyInput::new("Shokrpour, 2019", (26, 27.1, 3.3), (27, 27.8, 3.0)),
            StudyInput::new("Donne, 2019", (21, 31.9, 5.2), (12, 31.8, 6.0)),
            StudyInput::new("Troisi, 2019", (15, 28.4, 1.7), (15, 26.4, 1.7)),
            StudyInput::new("Nordio, 2019", (8, 24.08, 3.0), (8, 23.91, 2.9)),
            StudyInput::new("Nordio, 2021", (20, 28.0, 0.625), (20, 26.0, 0.313)),
            StudyInput::new("Genazzani, 2019", (24, 28.4, 1.7), (24, 27.1, 1.3)),
        ],
        Outcome::FastingInsulin => vec![
            StudyInput::new("Shokrpour, 2019", (26, 11.9, 2.4), (27, 10.8, 3.0)),
            StudyInput::new("Troisi, 2019", (15, 8.0, 3.1), (15, 7.9, 3.8)),
            StudyInput::new("Nordio, 2021", (20, 21.0, 1.56), (20, 15.5, 1.313)),
            StudyInput::new("Genazzani, 2019", (24, 12.6, 2.4), (24, 9.8, 1.8)),
        ],
        Outcome::MenstrualCycles => vec![StudyInput::new(
            "Troisi, 2019",
            (15, 1.6, 0.5),
            (15, 2.0, 0.7),
        )],
        Outcome::TotalTestosterone => vec![
            StudyInput::new("Troisi, 2019", (15, 42.7, 9.91), (15, 34.98, 8.11)),
            StudyInput::new("Nordio, 2021", (20, 63.0, 11.8), (20, 37.0, 9.8)),
            StudyInput::new("Genazzani, 2019", (24, 54.3, 5.0), (24, 54.8, 7.0)),
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dataset_shape() {
        let dataset = inositol_dataset();
        assert_eq!(dataset.categories.len(), 7);
        assert_eq!(dataset.n_studies(), 23);
        assert_eq!(dataset.categories[2].category, Outcome::HomaIr);
        assert_eq!(dataset.categories[2].studies.len(), 5);
        assert!(dataset.validate().is_ok());
    }

    #[test]
    fn test_every_outcome_has_studies() {
        for outcome in Outcome::ALL {
            assert!(!studies_for(outcome).is_empty(), "{outcome} has no studies");
        }
    }
}
