//! Area fill beneath the mood curve.
//!
//! Only "hills" get tinted: a pair of consecutive curve points is skipped when
//! both lie below the baseline on screen (`y > baseline_y`), i.e. both sit in
//! a dip of worse mood.

use serde::{Deserialize, Serialize};

use super::projection::ChartPoint;

/// Fill rectangle between two consecutive curve points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FillSegment {
    /// Index of the first point of the pair in the smoothed curve
    pub index: usize,
    pub x: f64,
    pub width: f64,
    /// Upper edge (smaller y of the pair)
    pub top: f64,
    /// Lower edge, never above the baseline
    pub bottom: f64,
}

impl FillSegment {
    pub fn height(&self) -> f64 {
        self.bottom - self.top
    }
}

/// True when both points sit below the baseline.
pub fn is_dip(a: &ChartPoint, b: &ChartPoint, baseline_y: f64) -> bool {
    a.y > baseline_y && b.y > baseline_y
}

/// Fill rectangle for one pair, `None` for a dip.
pub fn classify_pair(
    index: usize,
    a: &ChartPoint,
    b: &ChartPoint,
    baseline_y: f64,
) -> Option<FillSegment> {
    if is_dip(a, b, baseline_y) {
        return None;
    }

    Some(FillSegment {
        index,
        x: a.x,
        width: b.x - a.x,
        top: a.y.min(b.y),
        bottom: baseline_y.max(a.y.max(b.y)),
    })
}

/// Fill rectangles for every hill pair of a smoothed curve, in curve order.
pub fn fill_segments(points: &[ChartPoint], baseline_y: f64) -> Vec<FillSegment> {
    points
        .windows(2)
        .enumerate()
        .filter_map(|(i, pair)| classify_pair(i, &pair[0], &pair[1], baseline_y))
        .collect()
}
