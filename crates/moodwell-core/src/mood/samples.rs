//! Mood series store with the built-in sample data.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::series::{MoodPeriod, MoodSeries, PeriodScale};

const MONTH_ABBREVIATIONS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Weekly sample: one bucket per day, four check-ins each.
pub fn weekly_sample() -> MoodSeries {
    MoodSeries::new(vec![
        MoodPeriod::new("Mon", vec![7.2, 7.4, 7.6, 7.3]),
        MoodPeriod::new("Tue", vec![7.0, 6.8, 6.5, 6.9]),
        MoodPeriod::new("Wed", vec![6.8, 7.0, 7.2, 7.1]),
        MoodPeriod::new("Thu", vec![6.5, 6.2, 6.0, 6.3]),
        MoodPeriod::new("Fri", vec![6.0, 5.8, 6.2, 6.4]),
        MoodPeriod::new("Sat", vec![6.8, 7.5, 7.8, 7.6]),
        MoodPeriod::new("Sun", vec![7.4, 7.2, 7.0, 7.3]),
    ])
}

/// Monthly sample: seven months, five samples each.
pub fn monthly_sample() -> MoodSeries {
    MoodSeries::new(vec![
        MoodPeriod::new("Jun", vec![6.8, 7.0, 7.2, 7.1, 6.9]),
        MoodPeriod::new("Jul", vec![7.1, 7.3, 7.5, 7.2, 7.4]),
        MoodPeriod::new("Aug", vec![6.9, 7.1, 7.3, 7.0, 7.2]),
        MoodPeriod::new("Sep", vec![6.5, 6.8, 7.0, 6.7, 6.9]),
        MoodPeriod::new("Oct", vec![6.2, 6.5, 6.8, 6.3, 6.6]),
        MoodPeriod::new("Nov", vec![6.8, 7.2, 7.5, 7.1, 7.3]),
        MoodPeriod::new("Dec", vec![7.0, 7.3, 7.6, 7.2, 7.4]),
    ])
}

/// Abbreviations of the `count` months preceding `today`'s month, oldest first.
///
/// `trailing_month_labels(2025-01-15, 7)` yields `Jun..Dec`.
pub fn trailing_month_labels(today: NaiveDate, count: usize) -> Vec<String> {
    let first_of_month = today.with_day(1).unwrap_or(today);
    (1..=count)
        .rev()
        .filter_map(|back| first_of_month.checked_sub_months(Months::new(back as u32)))
        .map(|date| MONTH_ABBREVIATIONS[date.month0() as usize].to_string())
        .collect()
}

/// Holds the weekly and monthly series the dashboard switches between.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodSeriesStore {
    pub weekly: MoodSeries,
    pub monthly: MoodSeries,
}

impl Default for MoodSeriesStore {
    fn default() -> Self {
        Self::sample()
    }
}

impl MoodSeriesStore {
    /// Store backed by the built-in sample data.
    pub fn sample() -> Self {
        Self {
            weekly: weekly_sample(),
            monthly: monthly_sample(),
        }
    }

    /// Sample data with monthly labels ending at the month before `today`.
    pub fn sample_relative_to(today: NaiveDate) -> Self {
        let monthly = monthly_sample();
        let labels = trailing_month_labels(today, monthly.len());
        Self {
            weekly: weekly_sample(),
            monthly: monthly.relabeled(labels),
        }
    }

    pub fn from_series(weekly: MoodSeries, monthly: MoodSeries) -> Self {
        Self { weekly, monthly }
    }

    pub fn series(&self, scale: PeriodScale) -> &MoodSeries {
        match scale {
            PeriodScale::Weekly => &self.weekly,
            PeriodScale::Monthly => &self.monthly,
        }
    }

    /// Replace the series for one scale.
    pub fn set_series(&mut self, scale: PeriodScale, series: MoodSeries) {
        match scale {
            PeriodScale::Weekly => self.weekly = series,
            PeriodScale::Monthly => self.monthly = series,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_shapes() {
        let store = MoodSeriesStore::sample();
        assert_eq!(store.weekly.len(), 7);
        assert_eq!(store.weekly.sample_count(), 28);
        assert_eq!(store.monthly.len(), 7);
        assert_eq!(store.monthly.sample_count(), 35);
    }

    #[test]
    fn test_trailing_month_labels_wraps_year() {
        let today = NaiveDate::from_ymd_opt(2025, 1, 15).unwrap();
        let labels = trailing_month_labels(today, 7);
        assert_eq!(labels, vec!["Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec"]);
    }

    #[test]
    fn test_trailing_month_labels_mid_year() {
        let today = NaiveDate::from_ymd_opt(2026, 10, 31).unwrap();
        let labels = trailing_month_labels(today, 3);
        assert_eq!(labels, vec!["Jul", "Aug", "Sep"]);
    }

    #[test]
    fn test_sample_relative_to_relabels_monthly_only() {
        let today = NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
        let store = MoodSeriesStore::sample_relative_to(today);
        let labels: Vec<_> = store.monthly.labels().collect();
        assert_eq!(labels, vec!["Aug", "Sep", "Oct", "Nov", "Dec", "Jan", "Feb"]);
        assert_eq!(store.weekly, weekly_sample());
        assert_eq!(store.monthly.periods()[0].values, monthly_sample().periods()[0].values);
    }

    #[test]
    fn test_series_selection() {
        let mut store = MoodSeriesStore::sample();
        assert_eq!(store.series(PeriodScale::Weekly).periods()[0].label, "Mon");
        store.set_series(PeriodScale::Monthly, MoodSeries::default());
        assert!(store.series(PeriodScale::Monthly).is_empty());
    }
}
