//! SVG forest plots drawn with plotters
//!
//! Layout, left to right: study labels, the effect axis with intervals,
//! then the numeric `estimate [lower, upper]` column. Studies are circles
//! sized by sample size; pooled estimates are diamonds spanning their
//! interval.

use crate::forest::{ForestEstimate, ForestPlot, ForestRow};
use crate::visualization::ForestPlotRenderer;
use crate::{Error, Result};
use meta_effect::EffectSizeInterpretation;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;
use tracing::debug;

/// One colour per category, cycled
const CATEGORY_COLORS: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

const TOP_MARGIN: i32 = 10;
const BOTTOM_MARGIN: i32 = 70;
const X_LABEL_AREA: i32 = 45;
const POOLED_HALF_HEIGHT: f64 = 0.35;

fn category_color(index: usize) -> RGBColor {
    CATEGORY_COLORS[index % CATEGORY_COLORS.len()]
}

fn band_color(category: EffectSizeInterpretation) -> RGBColor {
    match category {
        EffectSizeInterpretation::NoEffect => RGBColor(211, 211, 211),
        EffectSizeInterpretation::Small => RGBColor(255, 255, 224),
        EffectSizeInterpretation::Moderate => RGBColor(255, 222, 173),
        EffectSizeInterpretation::Large => RGBColor(144, 238, 144),
    }
}

fn band_legend(category: EffectSizeInterpretation) -> &'static str {
    match category {
        EffectSizeInterpretation::NoEffect => "No effect (|g| < 0.2)",
        EffectSizeInterpretation::Small => "Small (0.2 <= |g| < 0.5)",
        EffectSizeInterpretation::Moderate => "Moderate (0.5 <= |g| < 0.8)",
        EffectSizeInterpretation::Large => "Large (|g| >= 0.8)",
    }
}

/// Marker radius in pixels, growing with the study's sample size
pub fn marker_radius(n_total: usize) -> i32 {
    let area = (n_total as f64 / 5.0).clamp(30.0, 150.0);
    (area.sqrt() / 2.0).round() as i32
}

fn text_style(size: u32, style: FontStyle) -> TextStyle<'static> {
    ("sans-serif", size)
        .into_font()
        .style(style)
        .color(&BLACK)
        .pos(Pos::new(HPos::Left, VPos::Center))
}

/// Forest-plot renderer producing an SVG document
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SvgForestPlot {
    /// Total image width in pixels
    pub width: u32,
    /// Height of one row in pixels
    pub row_height: u32,
    /// Width of the left label column
    pub label_width: u32,
    /// Width of the right value column
    pub value_width: u32,
}

impl Default for SvgForestPlot {
    fn default() -> Self {
        Self {
            width: 1500,
            row_height: 26,
            label_width: 300,
            value_width: 340,
        }
    }
}

impl SvgForestPlot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }

    pub fn with_row_height(mut self, row_height: u32) -> Self {
        self.row_height = row_height;
        self
    }

    /// Image height for a plot with `n_rows` rows
    pub fn height(&self, n_rows: usize) -> u32 {
        // caption plus axis area
        (TOP_MARGIN + 40 + X_LABEL_AREA + BOTTOM_MARGIN) as u32 + n_rows as u32 * self.row_height
    }

    /// Render and write the SVG document to `path`
    pub fn render_to_file(&self, plot: &ForestPlot, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let svg = self.render(plot)?;
        std::fs::write(path, svg)?;
        debug!(path = %path.display(), rows = plot.rows.len(), "wrote forest plot");
        Ok(())
    }

    fn draw(&self, plot: &ForestPlot, buffer: &mut String) -> Result<()> {
        if self.label_width + self.value_width >= self.width {
            return Err(Error::Render(format!(
                "image width {} leaves no room for the plot",
                self.width
            )));
        }

        let n_rows = plot.rows.len().max(1);
        let height = self.height(n_rows);
        let y_max = n_rows as f64;
        let (x_min, x_max) = plot.x_range();

        let root = SVGBackend::with_string(buffer, (self.width, height)).into_drawing_area();
        root.fill(&WHITE).map_err(Error::render)?;

        let plot_area = root.margin(
            TOP_MARGIN,
            BOTTOM_MARGIN,
            self.label_width as i32,
            self.value_width as i32,
        );
        let mut chart = ChartBuilder::on(&plot_area)
            .caption(
                &plot.title,
                ("sans-serif", 22).into_font().style(FontStyle::Bold),
            )
            .x_label_area_size(X_LABEL_AREA)
            .build_cartesian_2d(x_min..x_max, 0f64..y_max)
            .map_err(Error::render)?;

        chart
            .configure_mesh()
            .disable_y_mesh()
            .disable_y_axis()
            .x_desc(plot.effect_type.axis_label())
            .x_label_formatter(&|v: &f64| format!("{:.1}", v))
            .draw()
            .map_err(Error::render)?;

        for (from, to, category) in plot.magnitude_bands() {
            chart
                .draw_series(std::iter::once(Rectangle::new(
                    [(from, 0.0), (to, y_max)],
                    band_color(category).mix(0.3).filled(),
                )))
                .map_err(Error::render)?;
        }

        chart
            .draw_series(std::iter::once(PathElement::new(
                vec![(0.0, 0.0), (0.0, y_max)],
                BLACK.stroke_width(1),
            )))
            .map_err(Error::render)?;

        let label_x = 10;
        let value_x = (self.width - self.value_width + 10) as i32;

        for (i, row) in plot.rows.iter().enumerate() {
            let y = y_max - i as f64 - 0.5;
            let (_, py) = chart.backend_coord(&(x_min, y));

            match row {
                ForestRow::Header { label } => {
                    root.draw(&Text::new(
                        label.as_str(),
                        (label_x, py),
                        text_style(15, FontStyle::Bold),
                    ))
                    .map_err(Error::render)?;
                }
                ForestRow::Study(estimate) => {
                    let color = category_color(estimate.category_index);
                    chart
                        .draw_series(std::iter::once(PathElement::new(
                            vec![(estimate.ci_lower, y), (estimate.ci_upper, y)],
                            color.stroke_width(2),
                        )))
                        .map_err(Error::render)?;
                    chart
                        .draw_series(std::iter::once(Circle::new(
                            (estimate.effect, y),
                            marker_radius(estimate.n_total),
                            color.filled(),
                        )))
                        .map_err(Error::render)?;

                    self.draw_texts(&root, estimate, py, FontStyle::Normal)?;
                }
                ForestRow::Pooled {
                    estimate,
                    heterogeneity_text,
                } => {
                    chart
                        .draw_series(std::iter::once(Polygon::new(
                            vec![
                                (estimate.ci_lower, y),
                                (estimate.effect, y + POOLED_HALF_HEIGHT),
                                (estimate.ci_upper, y),
                                (estimate.effect, y - POOLED_HALF_HEIGHT),
                            ],
                            RED.mix(0.85).filled(),
                        )))
                        .map_err(Error::render)?;

                    self.draw_texts(&root, estimate, py, FontStyle::Bold)?;
                    if let Some(text) = heterogeneity_text {
                        let offset = (self.row_height / 2) as i32;
                        root.draw(&Text::new(
                            text.as_str(),
                            (value_x, py + offset),
                            text_style(11, FontStyle::Italic),
                        ))
                        .map_err(Error::render)?;
                    }
                }
                ForestRow::Spacer => {}
            }
        }

        // favours labels under the axis ends
        let (left_px, axis_py) = chart.backend_coord(&(x_min, 0.0));
        let (right_px, _) = chart.backend_coord(&(x_max, 0.0));
        let favours_y = axis_py + X_LABEL_AREA + 12;
        root.draw(&Text::new(
            "Favours control",
            (left_px, favours_y),
            text_style(12, FontStyle::Normal),
        ))
        .map_err(Error::render)?;
        root.draw(&Text::new(
            "Favours intervention",
            (right_px - 140, favours_y),
            text_style(12, FontStyle::Normal),
        ))
        .map_err(Error::render)?;

        if plot.effect_type.is_standardized() {
            let legend_y = favours_y + 28;
            let mut x = left_px;
            for category in EffectSizeInterpretation::ALL {
                root.draw(&Rectangle::new(
                    [(x, legend_y - 6), (x + 12, legend_y + 6)],
                    band_color(category).filled(),
                ))
                .map_err(Error::render)?;
                root.draw(&Text::new(
                    band_legend(category),
                    (x + 18, legend_y),
                    text_style(11, FontStyle::Normal),
                ))
                .map_err(Error::render)?;
                x += 200;
            }
        }

        root.present().map_err(Error::render)?;
        Ok(())
    }

    fn draw_texts(
        &self,
        root: &DrawingArea<SVGBackend<'_>, Shift>,
        estimate: &ForestEstimate,
        py: i32,
        style: FontStyle,
    ) -> Result<()> {
        let value_x = (self.width - self.value_width + 10) as i32;
        root.draw(&Text::new(estimate.label.as_str(), (10, py), text_style(13, style)))
            .map_err(Error::render)?;
        root.draw(&Text::new(
            estimate.value_text.as_str(),
            (value_x, py),
            text_style(13, style),
        ))
        .map_err(Error::render)?;
        Ok(())
    }
}

impl ForestPlotRenderer for SvgForestPlot {
    type Output = String;

    fn render(&self, plot: &ForestPlot) -> Result<String> {
        let mut buffer = String::new();
        self.draw(plot, &mut buffer)?;
        debug!(rows = plot.rows.len(), bytes = buffer.len(), "rendered forest plot");
        Ok(buffer)
    }
}
