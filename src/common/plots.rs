//! Plotting infrastructure for last digit bar charts
//!
//! This module provides functionality to create bar charts of a [`DigitHistogram`]
//! using the [`plotters`] crate. Charts are saved as PNG files with fixed 1200x800 resolution.

use crate::analysis::last_digit::{output_stem, DigitHistogram};
use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Chart width in pixels
pub const CHART_WIDTH: u32 = 1200;

/// Chart height in pixels
pub const CHART_HEIGHT: u32 = 800;

/// Most bars that still render legibly at [`CHART_WIDTH`]
pub const MAX_BARS: usize = 500;

/// Bars above this count are drawn without a value label
const MAX_LABELLED_BARS: usize = 64;

/// Sky blue bar fill
const BAR_FILL: RGBColor = RGBColor(135, 206, 235);

/// Errors that can occur during plot generation
#[derive(Error, Debug)]
pub enum PlotError {
    #[error("Failed to create drawing area: {0}")]
    DrawingArea(String),

    #[error("Failed to configure chart: {0}")]
    ChartConfig(String),

    #[error("Failed to draw chart elements: {0}")]
    Drawing(String),

    #[error("Failed to save plot to file: {0}")]
    FileSave(#[from] std::io::Error),

    #[error("Invalid data: {0}")]
    InvalidData(String),
}

type Result<T> = core::result::Result<T, PlotError>;

/// Everything needed to draw a bar chart, computed without touching a backend
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BarChartLayout {
    /// Chart title displayed at the top of the plot
    pub title: String,
    /// Label for the X-axis
    pub x_label: String,
    /// Label for the Y-axis
    pub y_label: String,
    /// `(digit, count)` per bar, ascending by digit
    pub bars: Vec<(u64, u64)>,
    /// Exclusive upper bound of the Y-axis, leaving room for value labels
    pub y_max: u64,
}

/// Computes the bar chart layout for a histogram
///
/// # Arguments
/// * `histogram` - Digit counts to plot
/// * `limit` - Exclusive upper bound the primes were generated with, shown in the title
///
/// # Returns
/// * `Ok(BarChartLayout)` - Layout ready for drawing
/// * `Err(PlotError::InvalidData)` - If there are no bars or more than [`MAX_BARS`]
pub fn bar_chart_layout(histogram: &DigitHistogram, limit: u64) -> Result<BarChartLayout> {
    if histogram.is_empty() {
        return Err(PlotError::InvalidData(
            "Histogram cannot be empty".to_string(),
        ));
    }

    if histogram.len() > MAX_BARS {
        return Err(PlotError::InvalidData(format!(
            "Base {} has more digits than the {} bars a chart can show",
            histogram.base(),
            MAX_BARS
        )));
    }

    let base = histogram.base();
    let bars: Vec<(u64, u64)> = histogram
        .iter()
        .map(|(digit, count)| (digit, count as u64))
        .collect();

    // 10% headroom so the value labels stay inside the plot
    let max_count = histogram.max_count() as u64;
    let y_max = max_count + max_count / 10 + 1;

    Ok(BarChartLayout {
        title: format!(
            "Distribution of Last Digits of Primes (up to {}) in Base {}",
            limit, base
        ),
        x_label: format!("Last Digits in Base {}", base),
        y_label: "Frequency".to_string(),
        bars,
        y_max,
    })
}

/// Creates the last digit bar chart and saves it as `last-digits-base-<base>.png`
///
/// # Arguments
/// * `histogram` - Digit counts to plot
/// * `limit` - Exclusive upper bound the primes were generated with
/// * `output_dir` - Directory where the PNG file should be saved
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written chart
/// * `Err(PlotError)` - If an error occurred during chart generation
///
/// # Headless Compatibility
/// Uses plotters' bitmap backend, so no display is required. Fonts still need to be
/// resolvable through the `ttf` feature.
pub fn create_last_digit_plot(
    histogram: &DigitHistogram,
    limit: u64,
    output_dir: &Path,
) -> Result<PathBuf> {
    let layout = bar_chart_layout(histogram, limit)?;
    let output_path = output_dir.join(format!("{}.png", output_stem(histogram.base())));

    draw_bar_chart(&layout, &output_path)?;
    tracing::debug!(path = %output_path.display(), bars = layout.bars.len(), "chart saved");

    Ok(output_path)
}

fn draw_bar_chart(layout: &BarChartLayout, output_path: &Path) -> Result<()> {
    let root = BitMapBackend::new(output_path, (CHART_WIDTH, CHART_HEIGHT));
    let drawing_area = root.into_drawing_area();

    drawing_area
        .fill(&WHITE)
        .map_err(|e| PlotError::DrawingArea(e.to_string()))?;

    let digit_count = layout.bars.len() as u64;
    let mut chart_context = ChartBuilder::on(&drawing_area)
        .caption(&layout.title, ("sans-serif", 30))
        .margin(20)
        .x_label_area_size(60)
        .y_label_area_size(85)
        .build_cartesian_2d((0u64..digit_count).into_segmented(), 0u64..layout.y_max)
        .map_err(|e| PlotError::ChartConfig(e.to_string()))?;

    // Horizontal grid only
    chart_context
        .configure_mesh()
        .disable_x_mesh()
        .bold_line_style(BLACK.mix(0.2))
        .light_line_style(BLACK.mix(0.05))
        .x_labels(layout.bars.len().min(MAX_LABELLED_BARS))
        .x_label_formatter(&|value| match value {
            SegmentValue::CenterOf(digit) | SegmentValue::Exact(digit) => digit.to_string(),
            SegmentValue::Last => String::new(),
        })
        .x_desc(layout.x_label.as_str())
        .y_desc(layout.y_label.as_str())
        .axis_desc_style(("sans-serif", 25))
        .label_style(("sans-serif", 20))
        .draw()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(layout.bars.iter().map(|&(digit, count)| {
            let mut bar = Rectangle::new(
                [
                    (SegmentValue::Exact(digit), 0),
                    (SegmentValue::Exact(digit + 1), count),
                ],
                BAR_FILL.filled(),
            );
            bar.set_margin(0, 0, 4, 4);
            bar
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    chart_context
        .draw_series(layout.bars.iter().map(|&(digit, count)| {
            let mut outline = Rectangle::new(
                [
                    (SegmentValue::Exact(digit), 0),
                    (SegmentValue::Exact(digit + 1), count),
                ],
                BLACK.stroke_width(1),
            );
            outline.set_margin(0, 0, 4, 4);
            outline
        }))
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    if layout.bars.len() <= MAX_LABELLED_BARS {
        let label_style = TextStyle::from(("sans-serif", 18).into_font())
            .pos(Pos::new(HPos::Center, VPos::Bottom));

        chart_context
            .draw_series(layout.bars.iter().map(|&(digit, count)| {
                Text::new(
                    count.to_string(),
                    (SegmentValue::CenterOf(digit), count),
                    label_style.clone(),
                )
            }))
            .map_err(|e| PlotError::Drawing(e.to_string()))?;
    }

    drawing_area
        .present()
        .map_err(|e| PlotError::Drawing(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::last_digit::count_last_digits;

    #[test]
    fn test_layout_for_small_primes() {
        let histogram = count_last_digits(&[2, 3, 5, 7, 11], 10).unwrap();
        let layout = bar_chart_layout(&histogram, 12).unwrap();

        assert_eq!(
            layout.title,
            "Distribution of Last Digits of Primes (up to 12) in Base 10"
        );
        assert_eq!(layout.x_label, "Last Digits in Base 10");
        assert_eq!(layout.y_label, "Frequency");
        assert_eq!(layout.bars.len(), 10);
        assert_eq!(layout.bars[0], (0, 0));
        assert_eq!(layout.bars[1], (1, 1));
        assert_eq!(layout.bars[7], (7, 1));
        assert_eq!(layout.y_max, 2);
    }

    #[test]
    fn test_layout_headroom() {
        let primes = crate::primes::generate_primes(10_000);
        let histogram = count_last_digits(&primes, 10).unwrap();
        let layout = bar_chart_layout(&histogram, 10_000).unwrap();

        let tallest = layout.bars.iter().map(|&(_, count)| count).max().unwrap();
        assert!(layout.y_max > tallest);
        assert_eq!(layout.y_max, tallest + tallest / 10 + 1);
    }

    #[test]
    fn test_layout_all_zero_has_valid_range() {
        let histogram = count_last_digits(&[], 4).unwrap();
        let layout = bar_chart_layout(&histogram, 0).unwrap();

        assert_eq!(layout.bars, vec![(0, 0), (1, 0), (2, 0), (3, 0)]);
        assert_eq!(layout.y_max, 1);
    }

    #[test]
    fn test_layout_rejects_too_many_bars() {
        let histogram = count_last_digits(&[2, 3], MAX_BARS as u64 + 1).unwrap();
        let result = bar_chart_layout(&histogram, 5);
        assert!(matches!(result, Err(PlotError::InvalidData(_))));

        let histogram = count_last_digits(&[2, 3], MAX_BARS as u64).unwrap();
        assert!(bar_chart_layout(&histogram, 5).is_ok());
    }

    #[test]
    fn test_invalid_data_is_reported_before_drawing() {
        let dir = tempfile::tempdir().unwrap();
        let histogram = count_last_digits(&[2], 1_000).unwrap();

        let result = create_last_digit_plot(&histogram, 3, dir.path());
        assert!(matches!(result, Err(PlotError::InvalidData(_))));
        assert!(!dir.path().join("last-digits-base-1000.png").exists());
    }

    #[test]
    fn test_create_last_digit_plot_success() {
        let dir = tempfile::tempdir().unwrap();
        let primes = crate::primes::generate_primes(1_000);
        let histogram = count_last_digits(&primes, 10).unwrap();

        let path = create_last_digit_plot(&histogram, 1_000, dir.path()).unwrap();

        assert_eq!(path, dir.path().join("last-digits-base-10.png"));
        assert!(path.exists());
    }
}
