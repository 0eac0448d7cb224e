//! Chart geometry and display constants.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Upper bound for interpolation steps per spline segment.
pub const MAX_STEPS: u32 = 1000;

/// Pixel-space layout of the mood chart.
///
/// Smaller `y` is higher on screen, i.e. a better mood.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartLayout {
    #[serde(default = "default_canvas_width")]
    pub canvas_width: f64,
    #[serde(default = "default_canvas_height")]
    pub canvas_height: f64,
    /// Distance from the top edge to `max_mood`
    #[serde(default = "default_top_inset")]
    pub top_inset: f64,
    /// Pixel height covered by `min_mood..=max_mood`
    #[serde(default = "default_vertical_span")]
    pub vertical_span: f64,
    #[serde(default = "default_min_mood")]
    pub min_mood: f64,
    #[serde(default = "default_max_mood")]
    pub max_mood: f64,
    /// Fill baseline separating hills from dips
    #[serde(default = "default_baseline_y")]
    pub baseline_y: f64,
    /// Interpolation steps per spline segment
    #[serde(default = "default_steps")]
    pub steps: u32,
    #[serde(default = "default_tension")]
    pub tension: f64,
}

fn default_canvas_width() -> f64 {
    358.0
}
fn default_canvas_height() -> f64 {
    148.0
}
fn default_top_inset() -> f64 {
    20.0
}
fn default_vertical_span() -> f64 {
    108.0
}
fn default_min_mood() -> f64 {
    5.5
}
fn default_max_mood() -> f64 {
    8.0
}
fn default_baseline_y() -> f64 {
    110.0
}
fn default_steps() -> u32 {
    20
}
fn default_tension() -> f64 {
    0.5
}

impl Default for ChartLayout {
    fn default() -> Self {
        Self {
            canvas_width: default_canvas_width(),
            canvas_height: default_canvas_height(),
            top_inset: default_top_inset(),
            vertical_span: default_vertical_span(),
            min_mood: default_min_mood(),
            max_mood: default_max_mood(),
            baseline_y: default_baseline_y(),
            steps: default_steps(),
            tension: default_tension(),
        }
    }
}

impl ChartLayout {
    /// Reject layouts the projection cannot work with.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let invalid = |field: &str, message: String| ValidationError::InvalidValue {
            field: field.to_string(),
            message,
        };

        if !(self.canvas_width.is_finite() && self.canvas_width > 0.0) {
            return Err(invalid(
                "canvas_width",
                format!("must be positive, got {}", self.canvas_width),
            ));
        }
        if !(self.min_mood.is_finite() && self.max_mood.is_finite()) || self.max_mood <= self.min_mood {
            return Err(invalid(
                "max_mood",
                format!(
                    "must be greater than min_mood ({} <= {})",
                    self.max_mood, self.min_mood
                ),
            ));
        }
        if self.steps == 0 || self.steps > MAX_STEPS {
            return Err(invalid(
                "steps",
                format!("must be between 1 and {MAX_STEPS}, got {}", self.steps),
            ));
        }
        Ok(())
    }

    /// Vertical pixel position of a mood value.
    pub fn mood_to_y(&self, value: f64) -> f64 {
        let normalized = (value - self.min_mood) / (self.max_mood - self.min_mood);
        self.top_inset + (1.0 - normalized) * self.vertical_span
    }

    /// Inverse of [`mood_to_y`](Self::mood_to_y).
    pub fn y_to_mood(&self, y: f64) -> f64 {
        let normalized = 1.0 - (y - self.top_inset) / self.vertical_span;
        self.min_mood + normalized * (self.max_mood - self.min_mood)
    }
}
