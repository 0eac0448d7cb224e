//! Mood series and their scalar summaries.
//!
//! This module provides the series data model, the built-in sample store and
//! the aggregator producing the dashboard's average score and trend.

mod aggregate;
mod samples;
mod series;

pub use aggregate::{
    average, percentage_change, round_to_tenth, summarize, try_average, try_percentage_change,
    MoodSummary, TrendDirection, TREND_WINDOW,
};
pub use samples::{monthly_sample, trailing_month_labels, weekly_sample, MoodSeriesStore};
pub use series::{MoodPeriod, MoodSeries, PeriodScale};
