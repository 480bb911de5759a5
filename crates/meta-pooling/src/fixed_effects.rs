//! Fixed-effects (inverse-variance) pooling
//!
//! Every study is assumed to estimate the same underlying effect, so the
//! pooled estimate is the weighted mean of the study effects with weights
//! `1 / se²`.

use crate::heterogeneity::Heterogeneity;
use crate::significance::normal_two_sided_p;
use crate::PooledResult;
use meta_core::{Error, Result, Z_95};
use meta_effect::{EffectSizeInterpretation, WeightedEffect};
use tracing::{debug, instrument};

/// Fixed-effects meta-analysis aggregator
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedEffects;

impl FixedEffects {
    /// Create a new aggregator
    pub fn new() -> Self {
        Self
    }

    /// Pool a category's per-study results
    ///
    /// Fails with [`Error::EmptyInput`] when `results` is empty and with
    /// [`Error::InvalidInput`] when a weight is not positive and finite.
    #[instrument(skip_all, fields(k = results.len()))]
    pub fn aggregate<W: WeightedEffect>(&self, results: &[W]) -> Result<PooledResult> {
        let first = results
            .first()
            .ok_or_else(|| Error::empty_input("fixed-effects pooling"))?;
        let effect_type = first.effect_size_type();

        if let Some(bad) = results
            .iter()
            .find(|r| !(r.weight().is_finite() && r.weight() > 0.0))
        {
            return Err(Error::InvalidInput(format!(
                "study '{}' has unusable weight {}",
                bad.label(),
                bad.weight()
            )));
        }

        let total_weight: f64 = results.iter().map(|r| r.weight()).sum();
        let pooled_effect =
            results.iter().map(|r| r.effect() * r.weight()).sum::<f64>() / total_weight;
        let pooled_se = (1.0 / total_weight).sqrt();

        let heterogeneity = Heterogeneity::compute(results, pooled_effect)?;

        let z_value = pooled_effect / pooled_se;
        let p_value = normal_two_sided_p(z_value)?;

        let (n_total_control, n_total_treatment) = results
            .iter()
            .map(|r| r.arm_sizes())
            .fold((0, 0), |(c, t), (n_c, n_t)| (c + n_c, t + n_t));

        let magnitude_label = effect_type
            .is_standardized()
            .then(|| EffectSizeInterpretation::from_magnitude(pooled_effect));

        debug!(
            pooled_effect,
            pooled_se,
            q = heterogeneity.q,
            i_squared = heterogeneity.i_squared,
            "pooled fixed-effects estimate"
        );

        Ok(PooledResult {
            effect_type,
            pooled_effect,
            pooled_se,
            pooled_ci_lower: pooled_effect - Z_95 * pooled_se,
            pooled_ci_upper: pooled_effect + Z_95 * pooled_se,
            z_value,
            p_value,
            heterogeneity,
            n_total_control,
            n_total_treatment,
            n_studies: results.len(),
            magnitude_label,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use meta_core::StudyInput;
    use meta_effect::{EffectSizeEstimator, EffectSizeResult, HedgesG, MeanDifference};

    fn hedges(studies: &[StudyInput]) -> Vec<EffectSizeResult> {
        HedgesG::new().compute_all(studies).unwrap()
    }

    #[test]
    fn test_empty_input() {
        let empty: Vec<EffectSizeResult> = Vec::new();
        assert_eq!(
            FixedEffects::new().aggregate(&empty),
            Err(Error::EmptyInput("fixed-effects pooling".to_string()))
        );
    }

    #[test]
    fn test_single_study_reproduces_study() {
        let results = hedges(&[StudyInput::new(
            "Troisi, 2019",
            (15, 1.6, 0.5),
            (15, 2.0, 0.7),
        )]);
        let pooled = FixedEffects::new().aggregate(&results).unwrap();

        assert_abs_diff_eq!(pooled.pooled_effect, results[0].hedges_g, epsilon = 1e-12);
        assert_abs_diff_eq!(pooled.pooled_se, results[0].standard_error, epsilon = 1e-12);
        assert_eq!(pooled.df(), 0);
        assert_abs_diff_eq!(pooled.q(), 0.0, epsilon = 1e-12);
        assert_eq!(pooled.i_squared(), 0.0);
        assert_eq!(pooled.heterogeneity.p_value, None);
        assert_eq!(pooled.n_studies, 1);
        assert_eq!(pooled.n_total(), 30);
    }

    #[test]
    fn test_total_testosterone() {
        let results = hedges(&[
            StudyInput::new("Troisi, 2019", (15, 42.7, 9.91), (15, 34.98, 8.11)),
            StudyInput::new("Nordio, 2021", (20, 63.0, 11.8), (20, 37.0, 9.8)),
            StudyInput::new("Genazzani, 2019", (24, 54.3, 5.0), (24, 54.8, 7.0)),
        ]);
        let pooled = FixedEffects::new().aggregate(&results).unwrap();

        assert_abs_diff_eq!(pooled.pooled_effect, -0.743_908_212_773_182_5, epsilon = 1e-10);
        assert_abs_diff_eq!(pooled.pooled_se, 0.201_417_104_898_202_33, epsilon = 1e-10);
        assert_abs_diff_eq!(pooled.q(), 23.139_454_259_321_15, epsilon = 1e-8);
        assert_abs_diff_eq!(pooled.i_squared(), 91.356_753_804_189_88, epsilon = 1e-8);
        assert_eq!(pooled.df(), 2);
        assert_eq!(
            pooled.magnitude_label,
            Some(EffectSizeInterpretation::Moderate)
        );
        assert!(pooled.heterogeneity.p_value.unwrap() < 0.001);
        assert!(pooled.p_value < 0.001);
        assert!(pooled.is_significant());
    }

    #[test]
    fn test_mean_difference_has_no_label() {
        let results = MeanDifference::new()
            .compute_all(&[
                StudyInput::new("Shokrpour, 2019", (26, 27.1, 3.3), (27, 27.8, 3.0)),
                StudyInput::new("Donne, 2019", (21, 31.9, 5.2), (12, 31.8, 6.0)),
                StudyInput::new("Troisi, 2019", (15, 28.4, 1.7), (15, 26.4, 1.7)),
            ])
            .unwrap();
        let pooled = FixedEffects::new().aggregate(&results).unwrap();

        assert_eq!(pooled.magnitude_label, None);
        assert_abs_diff_eq!(pooled.pooled_effect, -1.030_099_687_006_310_6, epsilon = 1e-10);
        assert_abs_diff_eq!(pooled.pooled_se, 0.490_416_771_944_288_4, epsilon = 1e-10);
        assert_eq!(pooled.n_total_control, 62);
        assert_eq!(pooled.n_total_treatment, 54);
    }

    #[test]
    fn test_rejects_unusable_weight() {
        let mut results = hedges(&[StudyInput::new("a", (10, 1.0, 1.0), (10, 1.5, 1.0))]);
        results[0].weight = f64::INFINITY;
        assert!(matches!(
            FixedEffects::new().aggregate(&results),
            Err(Error::InvalidInput(_))
        ));
    }
}
