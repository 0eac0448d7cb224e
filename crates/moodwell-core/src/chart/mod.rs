//! Mood chart geometry.
//!
//! Turns a mood series into drawable pieces: projected sample points, a
//! Catmull-Rom smoothed curve, hill fill rectangles, line primitives and axis
//! labels. Everything here is a pure function of the series and the layout.

mod fill;
mod layout;
mod projection;
mod render;
mod spline;

pub use fill::{classify_pair, fill_segments, is_dip, FillSegment};
pub use layout::{ChartLayout, MAX_STEPS};
pub use projection::{project, ChartPoint};
pub use render::{
    axis_labels, build_chart, line_segments, render_text, AxisLabel, LineSegment, MoodChart,
    MAX_TEXT_COLS, MAX_TEXT_ROWS,
};
pub use spline::smooth_curve;
