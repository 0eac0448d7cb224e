//! Integration and property tests for chart geometry.

use moodwell_core::chart::{
    build_chart, fill_segments, project, smooth_curve, ChartLayout, ChartPoint,
};
use moodwell_core::mood::{average, percentage_change, try_percentage_change, weekly_sample};
use moodwell_core::{MoodPeriod, MoodSeries};
use proptest::prelude::*;

fn series_from(periods: Vec<Vec<f64>>) -> MoodSeries {
    periods
        .into_iter()
        .enumerate()
        .map(|(i, values)| MoodPeriod::new(format!("p{i}"), values))
        .collect()
}

fn mood_series(min: f64, max: f64) -> impl Strategy<Value = MoodSeries> {
    proptest::collection::vec(proptest::collection::vec(min..max, 0..6), 1..9)
        .prop_map(series_from)
}

#[test]
fn test_weekly_curve_endpoints() {
    let layout = ChartLayout::default();
    let points = project(&weekly_sample(), &layout);
    let smoothed = smooth_curve(&points, layout.steps, layout.tension);

    let first = smoothed.first().unwrap();
    let last = smoothed.last().unwrap();
    assert!((first.x - points[0].x).abs() < 1e-9 && (first.y - points[0].y).abs() < 1e-9);
    assert!((last.x - points[27].x).abs() < 1e-9 && (last.y - points[27].y).abs() < 1e-9);
}

#[test]
fn test_series_below_baseline_has_no_fill() {
    let series = series_from(vec![vec![5.6, 5.5, 5.7], vec![5.6, 5.6], vec![5.5, 5.7, 5.6]]);
    let chart = build_chart(&series, &ChartLayout::default());
    assert!(!chart.smoothed.is_empty());
    assert!(chart.smoothed.iter().all(|p| p.y > 110.0));
    assert!(chart.fills.is_empty());
}

#[test]
fn test_custom_baseline_changes_fill() {
    let layout = ChartLayout::default();
    let chart = build_chart(&weekly_sample(), &layout);

    // baseline at the very bottom: nothing counts as a dip
    let everything = fill_segments(&chart.smoothed, layout.canvas_height + 100.0);
    assert_eq!(everything.len(), chart.smoothed.len() - 1);

    // baseline above the canvas: every pair is a dip
    assert!(fill_segments(&chart.smoothed, -1.0).is_empty());
}

proptest! {
    #[test]
    fn projected_x_is_non_decreasing(series in mood_series(5.5, 8.0)) {
        let points = project(&series, &ChartLayout::default());
        prop_assert_eq!(points.len(), series.sample_count());
        for pair in points.windows(2) {
            prop_assert!(pair[0].x <= pair[1].x, "{:?}", pair);
        }
    }

    #[test]
    fn smoothed_curve_hits_endpoints(series in mood_series(5.5, 8.0), steps in 1u32..30) {
        let points = project(&series, &ChartLayout::default());
        let smoothed = smooth_curve(&points, steps, 0.5);

        if points.len() < 2 {
            prop_assert!(smoothed.is_empty());
        } else {
            prop_assert_eq!(smoothed.len(), (points.len() - 1) * (steps as usize + 1));
            let (first, last) = (smoothed[0], smoothed[smoothed.len() - 1]);
            let (p_first, p_last) = (points[0], points[points.len() - 1]);
            prop_assert!((first.x - p_first.x).abs() < 1e-6 && (first.y - p_first.y).abs() < 1e-6);
            prop_assert!((last.x - p_last.x).abs() < 1e-6 && (last.y - p_last.y).abs() < 1e-6);
        }
    }

    #[test]
    fn dips_never_fill(series in mood_series(5.5, 5.7)) {
        let chart = build_chart(&series, &ChartLayout::default());
        prop_assert!(chart.fills.is_empty());
    }

    #[test]
    fn fills_are_hill_pairs(series in mood_series(5.5, 8.0)) {
        let layout = ChartLayout::default();
        let chart = build_chart(&series, &layout);
        for seg in &chart.fills {
            let (a, b) = (chart.smoothed[seg.index], chart.smoothed[seg.index + 1]);
            prop_assert!(a.y <= layout.baseline_y || b.y <= layout.baseline_y);
            prop_assert!(seg.bottom >= layout.baseline_y);
            prop_assert!(seg.top <= seg.bottom);
        }
    }

    #[test]
    fn computation_is_deterministic(series in mood_series(5.5, 8.0)) {
        let layout = ChartLayout::default();
        prop_assert_eq!(build_chart(&series, &layout), build_chart(&series, &layout));
        prop_assert_eq!(average(&series), average(&series));
        prop_assert_eq!(percentage_change(&series), percentage_change(&series));
    }

    #[test]
    fn rising_series_has_positive_change(
        base in 5.5f64..7.0,
        step in 0.01f64..0.2,
        len in 4usize..10,
    ) {
        let rising = series_from((0..len).map(|i| vec![base + i as f64 * step]).collect());
        let falling = series_from((0..len).map(|i| vec![base - i as f64 * step]).collect());
        prop_assert!(try_percentage_change(&rising).unwrap() > 0.0);
        prop_assert!(try_percentage_change(&falling).unwrap() < 0.0);
    }

    #[test]
    fn single_point_never_smooths(x in 0.0f64..358.0, y in 0.0f64..148.0) {
        prop_assert!(smooth_curve(&[ChartPoint::new(x, y)], 20, 0.5).is_empty());
    }
}
