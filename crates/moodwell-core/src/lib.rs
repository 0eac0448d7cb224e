//! # Moodwell Core Library
//!
//! This library provides the computational core of the Moodwell mood
//! dashboard. The CLI binary and any GUI front end are thin layers over the
//! same pure functions.
//!
//! ## Architecture
//!
//! - **Mood**: series data model, sample store, and the aggregator computing
//!   the average score and the first-vs-last window trend
//! - **Chart**: pixel-space projection, Catmull-Rom smoothing, hill fill
//!   classification and render primitives
//! - **Dashboard**: explicit selection state with a reducer, and a view model
//!   derived from it
//! - **Storage**: TOML-based configuration of the chart constants
//!
//! Degenerate input never panics: an empty series averages to `None`, an
//! undefined trend reads `0.0`, and fewer than two samples produce an empty
//! curve.
//!
//! ## Key Components
//!
//! - [`Dashboard`]: Series store plus layout, producing [`DashboardView`]s
//! - [`ChartLayout`]: Canvas geometry, mood range, baseline and spline settings
//! - [`Config`]: Application configuration management

pub mod chart;
pub mod dashboard;
pub mod error;
pub mod mood;
pub mod storage;

pub use chart::{build_chart, ChartLayout, ChartPoint, FillSegment, MoodChart, MAX_STEPS};
pub use dashboard::{Dashboard, DashboardAction, DashboardState, DashboardView};
pub use error::{AggregateError, ConfigError, CoreError, ValidationError};
pub use mood::{MoodPeriod, MoodSeries, MoodSeriesStore, MoodSummary, PeriodScale, TrendDirection};
pub use storage::Config;
