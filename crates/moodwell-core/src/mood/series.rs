//! Mood series types.
//!
//! A series is an ordered list of labeled periods (days of a week or months),
//! each holding the mood samples recorded during that period in order.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Time scale a series covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PeriodScale {
    /// One bucket per day of the week
    #[default]
    Weekly,
    /// One bucket per month
    Monthly,
}

impl PeriodScale {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
        }
    }

    /// Caption shown next to the summary ("This week" / "This month").
    pub fn caption(self) -> &'static str {
        match self {
            Self::Weekly => "This week",
            Self::Monthly => "This month",
        }
    }
}

impl fmt::Display for PeriodScale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodScale {
    type Err = ValidationError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "weekly" | "week" | "w" => Ok(Self::Weekly),
            "monthly" | "month" | "m" => Ok(Self::Monthly),
            other => Err(ValidationError::InvalidValue {
                field: "period".to_string(),
                message: format!("expected 'weekly' or 'monthly', got '{other}'"),
            }),
        }
    }
}

/// Mood samples recorded within one labeled period.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPeriod {
    /// Short display label ("Mon", "Jun", ...)
    pub label: String,
    /// Mood scores in chronological order within the period
    #[serde(default)]
    pub values: Vec<f64>,
}

impl MoodPeriod {
    pub fn new(label: impl Into<String>, values: Vec<f64>) -> Self {
        Self {
            label: label.into(),
            values,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Ordered sequence of periods for one time scale.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MoodSeries {
    periods: Vec<MoodPeriod>,
}

impl MoodSeries {
    pub fn new(periods: Vec<MoodPeriod>) -> Self {
        Self { periods }
    }

    pub fn periods(&self) -> &[MoodPeriod] {
        &self.periods
    }

    /// Number of periods, including periods without samples.
    pub fn len(&self) -> usize {
        self.periods.len()
    }

    pub fn is_empty(&self) -> bool {
        self.periods.is_empty()
    }

    /// Total number of samples across all periods.
    pub fn sample_count(&self) -> usize {
        self.periods.iter().map(|p| p.values.len()).sum()
    }

    /// All samples flattened in period-then-intra-period order.
    pub fn samples(&self) -> impl Iterator<Item = f64> + '_ {
        self.periods.iter().flat_map(|p| p.values.iter().copied())
    }

    pub fn labels(&self) -> impl Iterator<Item = &str> + '_ {
        self.periods.iter().map(|p| p.label.as_str())
    }

    /// Returns a copy with period labels replaced in order.
    ///
    /// Extra labels are ignored; periods without a replacement keep theirs.
    pub fn relabeled<I, S>(&self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut periods = self.periods.clone();
        for (period, label) in periods.iter_mut().zip(labels) {
            period.label = label.into();
        }
        Self { periods }
    }

    /// Rejects non-finite samples.
    pub fn validate(&self) -> std::result::Result<(), ValidationError> {
        for period in &self.periods {
            if let Some(bad) = period.values.iter().find(|v| !v.is_finite()) {
                return Err(ValidationError::InvalidValue {
                    field: format!("{}.values", period.label),
                    message: format!("mood value must be finite, got {bad}"),
                });
            }
        }
        Ok(())
    }

    /// Parse a series from a JSON array of `{ "label", "values" }` objects.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let series: MoodSeries = serde_json::from_str(json)?;
        series.validate()?;
        Ok(series)
    }

    /// Read and parse a JSON series file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let series = Self::from_json_str(&content)?;
        tracing::debug!(
            path = %path.display(),
            periods = series.len(),
            samples = series.sample_count(),
            "loaded mood series"
        );
        Ok(series)
    }
}

impl From<Vec<MoodPeriod>> for MoodSeries {
    fn from(periods: Vec<MoodPeriod>) -> Self {
        Self::new(periods)
    }
}

impl FromIterator<MoodPeriod> for MoodSeries {
    fn from_iter<T: IntoIterator<Item = MoodPeriod>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}
