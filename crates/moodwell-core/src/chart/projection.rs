//! Projection of mood samples into chart pixel space.

use serde::{Deserialize, Serialize};

use super::layout::ChartLayout;
use crate::mood::MoodSeries;

/// A point in chart pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPoint {
    pub x: f64,
    pub y: f64,
}

impl ChartPoint {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn distance_to(&self, other: &ChartPoint) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }
}

/// Project every sample of `series` to a pixel-space point.
///
/// Each period owns an equal horizontal bucket; its samples are spaced evenly
/// inside the bucket, leaving one gap at each edge. Points come out in
/// period-then-sample order, so `x` never decreases. Periods without samples
/// still take up their bucket.
pub fn project(series: &MoodSeries, layout: &ChartLayout) -> Vec<ChartPoint> {
    if series.is_empty() {
        return Vec::new();
    }

    let period_width = layout.canvas_width / series.len() as f64;
    let mut points = Vec::with_capacity(series.sample_count());

    for (period_index, period) in series.periods().iter().enumerate() {
        let value_spacing = period_width / (period.values.len() + 1) as f64;
        let period_left = period_index as f64 * period_width;

        for (value_index, &value) in period.values.iter().enumerate() {
            let x = period_left + (value_index + 1) as f64 * value_spacing;
            points.push(ChartPoint::new(x, layout.mood_to_y(value)));
        }
    }

    points
}
