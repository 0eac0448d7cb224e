//! Catmull-Rom curve smoothing.

use super::layout::MAX_STEPS;
use super::projection::ChartPoint;

/// Evaluate one axis of the Catmull-Rom blend at `t`.
fn blend(tension: f64, p0: f64, p1: f64, p2: f64, p3: f64, t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    tension
        * (2.0 * p1
            + (-p0 + p2) * t
            + (2.0 * p0 - 5.0 * p1 + 4.0 * p2 - p3) * t2
            + (-p0 + 3.0 * p1 - 3.0 * p2 + p3) * t3)
}

/// Interpolate a dense polyline through `points`.
///
/// Every segment `points[i]..points[i + 1]` is sampled at `steps + 1` evenly
/// spaced parameters `t = 0..=1`, using `points[i - 1]` and `points[i + 2]` as
/// outer control points (the segment's own endpoint stands in when a neighbour
/// is missing). Segment boundaries are emitted twice, once as the end of one
/// segment and once as the start of the next, so the output has
/// `(points.len() - 1) * (steps + 1)` entries in generation order.
///
/// Fewer than two points yields an empty curve. `steps` is capped at
/// [`MAX_STEPS`].
pub fn smooth_curve(points: &[ChartPoint], steps: u32, tension: f64) -> Vec<ChartPoint> {
    if points.len() < 2 || steps == 0 {
        tracing::debug!(points = points.len(), steps, "not enough samples to smooth");
        return Vec::new();
    }
    if steps > MAX_STEPS {
        tracing::debug!(steps, max = MAX_STEPS, "clamping spline steps");
    }
    let steps = steps.min(MAX_STEPS);

    let segments = points.len() - 1;
    let mut smoothed = Vec::with_capacity(segments * (steps as usize + 1));

    for i in 0..segments {
        let p0 = if i == 0 { points[i] } else { points[i - 1] };
        let p1 = points[i];
        let p2 = points[i + 1];
        let p3 = points.get(i + 2).copied().unwrap_or(p2);

        for step in 0..=steps {
            let t = f64::from(step) / f64::from(steps);
            smoothed.push(ChartPoint::new(
                blend(tension, p0.x, p1.x, p2.x, p3.x, t),
                blend(tension, p0.y, p1.y, p2.y, p3.y, t),
            ));
        }
    }

    smoothed
}
