pub mod chart;
pub mod config;
pub mod curve;
pub mod summary;

use std::path::PathBuf;

use chrono::Local;
use clap::Args;

use moodwell_core::{Config, Dashboard, DashboardState, MoodSeries, MoodSeriesStore, PeriodScale};

/// Series selection shared by the data commands.
#[derive(Args)]
pub struct SeriesArgs {
    /// Period scale (weekly or monthly); defaults to display.default_period
    #[arg(long)]
    pub period: Option<PeriodScale>,
    /// JSON file with a mood series to use instead of the sample data
    #[arg(long)]
    pub file: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Resolved dashboard plus the state selecting the requested series.
pub struct Selection {
    pub config: Config,
    pub dashboard: Dashboard,
    pub state: DashboardState,
}

impl SeriesArgs {
    pub fn resolve(&self) -> Result<Selection, Box<dyn std::error::Error>> {
        let config = Config::load_or_default();
        let period = self.period.unwrap_or(config.display.default_period);

        let mut store = MoodSeriesStore::sample_relative_to(Local::now().date_naive());
        if let Some(path) = &self.file {
            let series = MoodSeries::load(path)?;
            tracing::info!(path = %path.display(), %period, "using series from file");
            store.set_series(period, series);
        }

        Ok(Selection {
            dashboard: Dashboard::new(store, config.chart),
            state: DashboardState::new(period),
            config,
        })
    }
}
