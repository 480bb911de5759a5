//! Rendering interface for forest plots
//!
//! Renderers consume a finished [`ForestPlot`] and never touch the
//! statistics, so a report can be drawn by any backend or by none.

use crate::forest::ForestPlot;
use crate::Result;

/// Trait for drawing a forest plot
pub trait ForestPlotRenderer {
    /// What a render produces (a document, a file handle, nothing)
    type Output;

    /// Draw the plot
    fn render(&self, plot: &ForestPlot) -> Result<Self::Output>;

    /// Check if this renderer produces anything
    fn is_enabled(&self) -> bool {
        true
    }
}

/// Null renderer that performs no operations
#[derive(Default, Clone, Copy, Debug)]
pub struct NullRenderer;

impl ForestPlotRenderer for NullRenderer {
    type Output = ();

    #[inline(always)]
    fn render(&self, _: &ForestPlot) -> Result<()> {
        Ok(())
    }

    #[inline(always)]
    fn is_enabled(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forest::ForestRow;
    use meta_effect::EffectSizeType;

    #[test]
    fn test_null_renderer() {
        let plot = ForestPlot {
            title: "empty".to_string(),
            effect_type: EffectSizeType::StandardizedMeanDifference,
            rows: vec![ForestRow::Spacer],
            n_categories: 0,
        };
        let renderer = NullRenderer;
        assert!(!renderer.is_enabled());
        assert!(renderer.render(&plot).is_ok());
    }
}
