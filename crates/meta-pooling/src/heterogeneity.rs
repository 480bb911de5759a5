//! Between-study heterogeneity (Cochran's Q and I²)

use crate::significance::chi_squared_upper_p;
use meta_core::Result;
use meta_effect::WeightedEffect;
use serde::{Deserialize, Serialize};

/// Heterogeneity of a set of studies around their pooled effect
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Heterogeneity {
    /// Cochran's Q: weighted squared deviations from the pooled effect
    pub q: f64,
    /// `k - 1`
    pub df: usize,
    /// Share of variability beyond sampling error, in percent, within [0, 100]
    pub i_squared: f64,
    /// Upper-tail χ²(df) probability of Q; `None` for a single study
    pub p_value: Option<f64>,
}

impl Heterogeneity {
    /// Compute Q, df, I² and the Q-test p-value around `pooled_effect`.
    ///
    /// `results` must be non-empty. With one study df is 0 and I² is
    /// reported as 0, since heterogeneity is undefined there.
    pub fn compute<W: WeightedEffect>(results: &[W], pooled_effect: f64) -> Result<Self> {
        let q: f64 = results
            .iter()
            .map(|r| r.weight() * (r.effect() - pooled_effect).powi(2))
            .sum();
        let df = results.len().saturating_sub(1);

        let p_value = if df == 0 {
            None
        } else {
            Some(chi_squared_upper_p(q, df)?)
        };

        Ok(Self {
            q,
            df,
            i_squared: i_squared(q, df),
            p_value,
        })
    }

    /// Whether there are enough studies for heterogeneity to mean anything
    pub fn is_defined(&self) -> bool {
        self.df > 0
    }
}

/// `max(0, (Q - df) / Q · 100)`, or 0 when Q is not positive or df is 0
pub fn i_squared(q: f64, df: usize) -> f64 {
    if df == 0 || q <= 0.0 {
        return 0.0;
    }
    ((q - df as f64) / q * 100.0).max(0.0)
}
