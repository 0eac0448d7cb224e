//! Render primitives for the mood chart.
//!
//! The UI layer draws the curve as short rotated lines between consecutive
//! smoothed points, translucent rectangles for hill fill, and one axis label
//! per period. [`render_text`] draws the same chart onto a character grid.

use serde::{Deserialize, Serialize};

use super::fill::{fill_segments, FillSegment};
use super::layout::ChartLayout;
use super::projection::{project, ChartPoint};
use super::spline::smooth_curve;
use crate::mood::MoodSeries;

/// A straight line primitive anchored at `start`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub start: ChartPoint,
    pub length: f64,
    /// Clockwise rotation in degrees (screen y grows downward)
    pub angle_degrees: f64,
}

/// Period label placed under the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub text: String,
    /// Centre of the period's horizontal bucket
    pub x: f64,
}

/// Everything needed to draw one series.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MoodChart {
    pub points: Vec<ChartPoint>,
    pub smoothed: Vec<ChartPoint>,
    pub fills: Vec<FillSegment>,
    pub lines: Vec<LineSegment>,
    pub labels: Vec<AxisLabel>,
}

impl MoodChart {
    /// Nothing to draw (fewer than two samples).
    pub fn is_empty(&self) -> bool {
        self.smoothed.is_empty()
    }
}

pub fn line_segments(points: &[ChartPoint]) -> Vec<LineSegment> {
    points
        .windows(2)
        .map(|pair| {
            let (a, b) = (pair[0], pair[1]);
            LineSegment {
                start: a,
                length: a.distance_to(&b),
                angle_degrees: (b.y - a.y).atan2(b.x - a.x).to_degrees(),
            }
        })
        .collect()
}

pub fn axis_labels(series: &MoodSeries, layout: &ChartLayout) -> Vec<AxisLabel> {
    if series.is_empty() {
        return Vec::new();
    }
    let bucket = layout.canvas_width / series.len() as f64;
    series
        .labels()
        .enumerate()
        .map(|(i, label)| AxisLabel {
            text: label.to_string(),
            x: (i as f64 + 0.5) * bucket,
        })
        .collect()
}

/// Project, smooth and classify `series` in one pass.
pub fn build_chart(series: &MoodSeries, layout: &ChartLayout) -> MoodChart {
    let points = project(series, layout);
    let smoothed = smooth_curve(&points, layout.steps, layout.tension);
    let fills = fill_segments(&smoothed, layout.baseline_y);
    let lines = line_segments(&smoothed);

    tracing::debug!(
        samples = points.len(),
        smoothed = smoothed.len(),
        fills = fills.len(),
        "built mood chart"
    );

    MoodChart {
        points,
        smoothed,
        fills,
        lines,
        labels: axis_labels(series, layout),
    }
}

const CURVE: char = '•';
const FILL: char = '░';
const BASELINE: char = '┄';

/// Largest text grid [`render_text`] will draw.
pub const MAX_TEXT_ROWS: usize = 200;
pub const MAX_TEXT_COLS: usize = 500;

fn to_cell(value: f64, extent: f64, cells: usize) -> usize {
    if extent <= 0.0 || !value.is_finite() {
        return 0;
    }
    let cell = (value / extent * cells as f64).floor();
    (cell.max(0.0) as usize).min(cells - 1)
}

/// Draw the chart onto a `rows` x `cols` character grid plus a label line.
///
/// The grid is clamped to [`MAX_TEXT_ROWS`] x [`MAX_TEXT_COLS`].
pub fn render_text(chart: &MoodChart, layout: &ChartLayout, rows: usize, cols: usize) -> String {
    if chart.is_empty() || rows == 0 || cols == 0 {
        return "(no data)\n".to_string();
    }
    let rows = rows.min(MAX_TEXT_ROWS);
    let cols = cols.min(MAX_TEXT_COLS);

    let mut grid = vec![vec![' '; cols]; rows];
    let col_of = |x: f64| to_cell(x, layout.canvas_width, cols);
    let row_of = |y: f64| to_cell(y, layout.canvas_height, rows);

    let baseline_row = row_of(layout.baseline_y);
    grid[baseline_row].iter_mut().for_each(|c| *c = BASELINE);

    for seg in &chart.fills {
        let col = col_of(seg.x);
        for row in row_of(seg.top)..=row_of(seg.bottom) {
            grid[row][col] = FILL;
        }
    }

    for p in &chart.smoothed {
        grid[row_of(p.y)][col_of(p.x)] = CURVE;
    }

    let mut out = String::with_capacity((rows + 1) * (cols + 1));
    for row in &grid {
        out.extend(row.iter());
        out.push('\n');
    }

    let mut label_line = vec![' '; cols];
    for label in &chart.labels {
        let width = label.text.chars().count();
        let start = col_of(label.x).saturating_sub(width / 2);
        for (offset, ch) in label.text.chars().enumerate() {
            if let Some(cell) = label_line.get_mut(start + offset) {
                *cell = ch;
            }
        }
    }
    out.extend(label_line.iter());
    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::{weekly_sample, MoodPeriod};

    #[test]
    fn test_line_segment_geometry() {
        let lines = line_segments(&[
            ChartPoint::new(0.0, 10.0),
            ChartPoint::new(4.0, 10.0),
            ChartPoint::new(4.0, 13.0),
        ]);
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].length, 4.0);
        assert_eq!(lines[0].angle_degrees, 0.0);
        assert_eq!(lines[1].length, 3.0);
        assert!((lines[1].angle_degrees - 90.0).abs() < 1e-9);
    }

    #[test]
    fn test_axis_labels_centered_in_buckets() {
        let labels = axis_labels(&weekly_sample(), &ChartLayout::default());
        assert_eq!(labels.len(), 7);
        assert_eq!(labels[0].text, "Mon");
        assert!((labels[0].x - 358.0 / 14.0).abs() < 1e-9);
        assert!((labels[6].x - 358.0 * 13.0 / 14.0).abs() < 1e-9);
    }

    #[test]
    fn test_build_chart_counts() {
        let chart = build_chart(&weekly_sample(), &ChartLayout::default());
        assert_eq!(chart.points.len(), 28);
        assert_eq!(chart.smoothed.len(), 27 * 21);
        assert_eq!(chart.lines.len(), chart.smoothed.len() - 1);
        assert!(!chart.fills.is_empty());
        assert!(chart.fills.len() < chart.lines.len());
    }

    #[test]
    fn test_single_sample_chart_is_empty() {
        let series = MoodSeries::new(vec![MoodPeriod::new("Mon", vec![7.0])]);
        let chart = build_chart(&series, &ChartLayout::default());
        assert_eq!(chart.points.len(), 1);
        assert!(chart.is_empty());
        assert!(chart.lines.is_empty());
        assert_eq!(chart.labels.len(), 1);
        assert_eq!(render_text(&chart, &ChartLayout::default(), 8, 40), "(no data)\n");
    }

    #[test]
    fn test_render_text_shape() {
        let layout = ChartLayout::default();
        let chart = build_chart(&weekly_sample(), &layout);
        let text = render_text(&chart, &layout, 10, 56);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), 11);
        assert!(lines.iter().all(|l| l.chars().count() == 56));
        assert!(text.contains(CURVE));
        assert!(lines[10].contains("Mon") && lines[10].contains("Sun"));
    }

    #[test]
    fn test_render_text_clamps_grid() {
        let layout = ChartLayout::default();
        let chart = build_chart(&weekly_sample(), &layout);
        let text = render_text(&chart, &layout, usize::MAX, usize::MAX);
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(lines.len(), MAX_TEXT_ROWS + 1);
        assert!(lines.iter().all(|l| l.chars().count() == MAX_TEXT_COLS));
    }
}
