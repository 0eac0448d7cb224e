//! Dashboard state and view model.
//!
//! The selected period lives in an explicit [`DashboardState`] that only
//! changes through [`DashboardState::reduce`]. [`Dashboard::view`] derives a
//! fresh [`DashboardView`] from the state on every call.

use serde::{Deserialize, Serialize};

use crate::chart::{build_chart, ChartLayout, MoodChart};
use crate::mood::{summarize, MoodSeriesStore, MoodSummary, PeriodScale};

/// UI state driving the mood summary card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DashboardState {
    pub period: PeriodScale,
}

/// State transitions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DashboardAction {
    SelectPeriod(PeriodScale),
    /// Flip between weekly and monthly
    TogglePeriod,
}

impl DashboardState {
    pub fn new(period: PeriodScale) -> Self {
        Self { period }
    }

    pub fn reduce(self, action: DashboardAction) -> Self {
        match action {
            DashboardAction::SelectPeriod(period) => Self { period },
            DashboardAction::TogglePeriod => Self {
                period: match self.period {
                    PeriodScale::Weekly => PeriodScale::Monthly,
                    PeriodScale::Monthly => PeriodScale::Weekly,
                },
            },
        }
    }
}

/// Everything the summary card shows for one period selection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardView {
    pub period: PeriodScale,
    /// "This week" / "This month"
    pub caption: String,
    pub summary: MoodSummary,
    pub chart: MoodChart,
}

/// Mood data plus chart layout.
#[derive(Debug, Clone)]
pub struct Dashboard {
    store: MoodSeriesStore,
    layout: ChartLayout,
}

impl Default for Dashboard {
    fn default() -> Self {
        Self::new(MoodSeriesStore::sample(), ChartLayout::default())
    }
}

impl Dashboard {
    pub fn new(store: MoodSeriesStore, layout: ChartLayout) -> Self {
        Self { store, layout }
    }

    pub fn store(&self) -> &MoodSeriesStore {
        &self.store
    }

    pub fn layout(&self) -> &ChartLayout {
        &self.layout
    }

    pub fn view(&self, state: &DashboardState) -> DashboardView {
        let series = self.store.series(state.period);
        tracing::debug!(period = %state.period, periods = series.len(), "rendering dashboard view");

        DashboardView {
            period: state.period,
            caption: state.period.caption().to_string(),
            summary: summarize(series),
            chart: build_chart(series, &self.layout),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reduce_select_and_toggle() {
        let state = DashboardState::default();
        assert_eq!(state.period, PeriodScale::Weekly);

        let state = state.reduce(DashboardAction::SelectPeriod(PeriodScale::Monthly));
        assert_eq!(state.period, PeriodScale::Monthly);

        let state = state.reduce(DashboardAction::TogglePeriod);
        assert_eq!(state.period, PeriodScale::Weekly);
    }

    #[test]
    fn test_view_follows_state() {
        let dashboard = Dashboard::default();
        let weekly = dashboard.view(&DashboardState::new(PeriodScale::Weekly));
        let monthly = dashboard.view(&DashboardState::new(PeriodScale::Monthly));

        assert_eq!(weekly.caption, "This week");
        assert_eq!(monthly.caption, "This month");
        assert_eq!(weekly.summary.sample_count, 28);
        assert_eq!(monthly.summary.sample_count, 35);
        assert_eq!(monthly.chart.labels[0].text, "Jun");
    }

    #[test]
    fn test_view_is_deterministic() {
        let dashboard = Dashboard::default();
        let state = DashboardState::default();
        assert_eq!(dashboard.view(&state), dashboard.view(&state));
    }
}
