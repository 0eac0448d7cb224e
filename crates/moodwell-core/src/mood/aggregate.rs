//! Scalar mood summaries: overall average and period-over-period trend.
//!
//! The trend compares the first three periods of a series against the last
//! three. Series shorter than six periods get overlapping windows (a 4-period
//! series compares `[0, 1, 2]` with `[1, 2, 3]`); this matches the behavior
//! the dashboard has always shown and is kept as is.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::series::{MoodPeriod, MoodSeries};
use crate::error::AggregateError;

/// Number of periods in each trend window.
pub const TREND_WINDOW: usize = 3;

/// Direction of the mood trend, from the sign of the percentage change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrendDirection {
    Up,
    Down,
    Flat,
}

impl TrendDirection {
    pub fn from_change(change: f64) -> Self {
        if change > 0.0 {
            Self::Up
        } else if change < 0.0 {
            Self::Down
        } else {
            Self::Flat
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Self::Up => "↑",
            Self::Down => "↓",
            Self::Flat => "→",
        }
    }
}

/// Display-ready summary of one series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSummary {
    /// Mean of all samples; `None` when the series holds no samples
    pub average: Option<f64>,
    /// Percentage change of the last window vs the first, one decimal place
    pub percentage_change: f64,
    pub trend: TrendDirection,
    pub sample_count: usize,
}

impl MoodSummary {
    /// Average formatted to one decimal place, or "—" when missing.
    pub fn average_text(&self) -> String {
        match self.average {
            Some(avg) => format!("{:.1}", round_to_tenth(avg)),
            None => "—".to_string(),
        }
    }

    /// Percentage change with a `%` suffix.
    pub fn change_text(&self) -> String {
        format!("{:.1}%", round_to_tenth(self.percentage_change))
    }
}

impl fmt::Display for MoodSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {}",
            self.average_text(),
            self.trend.arrow(),
            self.change_text()
        )
    }
}

/// Round to one decimal place by the exact decimal value of `value`.
///
/// Ties go away from zero. A double sits exactly halfway between two tenths
/// only when its fractional part is `.25` or `.75`; every other value is
/// rounded by the exact formatter, so `1.45` (stored as `1.4499…`) gives `1.4`.
pub fn round_to_tenth(value: f64) -> f64 {
    let is_tie = (value * 4.0).fract() == 0.0 && (value * 2.0).fract() != 0.0;
    let rounded = if is_tie {
        (value * 10.0).round() / 10.0
    } else {
        format!("{value:.1}").parse().unwrap_or(value)
    };
    // -0.0 would print as "-0.0%"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

fn mean_of(periods: &[MoodPeriod]) -> Result<f64, AggregateError> {
    let (sum, count) = periods
        .iter()
        .flat_map(|p| p.values.iter())
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));

    if count == 0 {
        return Err(AggregateError::EmptySeries);
    }
    Ok(sum / count as f64)
}

/// Mean of every sample in the series.
pub fn try_average(series: &MoodSeries) -> Result<f64, AggregateError> {
    mean_of(series.periods())
}

/// Mean of every sample, `None` for a series without samples.
pub fn average(series: &MoodSeries) -> Option<f64> {
    match try_average(series) {
        Ok(avg) => Some(avg),
        Err(err) => {
            tracing::debug!(%err, "average unavailable");
            None
        }
    }
}

/// Unrounded percentage change between the first and last trend windows.
pub fn try_percentage_change(series: &MoodSeries) -> Result<f64, AggregateError> {
    let periods = series.periods();
    let first = &periods[..periods.len().min(TREND_WINDOW)];
    let last = &periods[periods.len().saturating_sub(TREND_WINDOW)..];

    let mean_first = mean_of(first)?;
    let mean_last = mean_of(last)?;

    if mean_first == 0.0 {
        return Err(AggregateError::DivisionByZero);
    }
    Ok((mean_last - mean_first) / mean_first * 100.0)
}

/// Percentage change rounded to one decimal place; `0.0` when undefined.
pub fn percentage_change(series: &MoodSeries) -> f64 {
    match try_percentage_change(series) {
        Ok(change) => round_to_tenth(change),
        Err(err) => {
            tracing::debug!(%err, periods = series.len(), "percentage change unavailable");
            0.0
        }
    }
}

/// Compute the full summary for a series.
pub fn summarize(series: &MoodSeries) -> MoodSummary {
    let percentage_change = percentage_change(series);
    MoodSummary {
        average: average(series),
        percentage_change,
        trend: TrendDirection::from_change(percentage_change),
        sample_count: series.sample_count(),
    }
}
