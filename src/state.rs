use crate::color::{diverging_pair, ColorMap};
use crate::config::{DashboardConfig, Layout};
use crate::data::context::DataContext;
use crate::data::filter::{filter_records, FilterState};
use crate::data::model::{
    DailyRecord, DayCategory, HumidityCategory, Month, Season, WeatherSituation,
};
use crate::data::summary::DashboardSummary;
use crate::text::DisplayText;

// ---------------------------------------------------------------------------
// Chart colours
// ---------------------------------------------------------------------------

/// One colour map per grouped chart, fixed for the whole session.
pub struct ChartColors {
    pub day_category: ColorMap,
    pub season: ColorMap,
    pub month: ColorMap,
    pub weather: ColorMap,
    pub humidity: ColorMap,
    pub hour: ColorMap,
}

impl Default for ChartColors {
    fn default() -> Self {
        Self {
            day_category: ColorMap::new(
                &labels(DayCategory::ALL, DayCategory::label),
                diverging_pair().to_vec(),
            ),
            season: ColorMap::sequential(&labels(Season::ALL, Season::label)),
            month: ColorMap::sequential(&labels(Month::ALL, Month::label)),
            weather: ColorMap::categorical(&labels(WeatherSituation::ALL, WeatherSituation::label)),
            humidity: ColorMap::categorical(&labels(HumidityCategory::ALL, HumidityCategory::label)),
            hour: ColorMap::sequential(&HOUR_LABELS),
        }
    }
}

fn labels<T: Copy>(all: &[T], label: fn(T) -> &'static str) -> Vec<&'static str> {
    all.iter().copied().map(label).collect()
}

/// "0" through "23".
pub const HOUR_LABELS: [&str; 24] = [
    "0", "1", "2", "3", "4", "5", "6", "7", "8", "9", "10", "11", "12", "13", "14", "15", "16",
    "17", "18", "19", "20", "21", "22", "23",
];

/// Outcome of the last user action, shown in the top bar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Prepared tables, loaded once before the window opens.
    pub context: DataContext,

    /// Current selector values.
    pub filters: FilterState,

    /// Aggregates for `filters`, recomputed on every change.
    pub summary: DashboardSummary,

    pub text: DisplayText,
    pub layout: Layout,
    pub colors: ChartColors,

    /// Status / error message shown in the UI.
    pub status_message: Option<StatusMessage>,
}

impl AppState {
    pub fn new(context: DataContext, config: &DashboardConfig) -> Self {
        let filters = FilterState::default();
        let summary = context.summarize(filters);
        Self {
            context,
            filters,
            summary,
            text: DisplayText::for_language(config.language),
            layout: config.layout,
            colors: ChartColors::default(),
            status_message: None,
        }
    }

    /// Replace the selectors and run one recomputation pass.
    pub fn set_filters(&mut self, filters: FilterState) {
        if filters == self.filters {
            return;
        }
        self.filters = filters;
        self.refilter();
    }

    /// Recompute the summary for the current selectors.
    pub fn refilter(&mut self) {
        self.summary = self.context.summarize(self.filters);
        self.status_message = None;
    }

    /// Daily rows behind the current summary, for the table view.
    pub fn daily_rows(&self) -> Vec<&DailyRecord> {
        filter_records(&self.context.daily, &self.filters)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::context::DataSources;
    use crate::data::filter::Selector;
    use crate::data::fixtures::mixed_tables;
    use crate::data::prepare::PrepareOptions;
    use crate::data::model::Year;

    fn state() -> AppState {
        let (daily, hourly) = mixed_tables();
        let config = DashboardConfig {
            sources: DataSources {
                daily_path: "day.csv".into(),
                hourly_path: "hour.csv".into(),
                prepare: PrepareOptions::default(),
            },
            language: Default::default(),
            layout: Layout::Overview,
        };
        AppState::new(DataContext { daily, hourly }, &config)
    }

    #[test]
    fn starts_unfiltered() {
        let state = state();
        assert!(state.filters.is_unrestricted());
        assert_eq!(state.summary.daily_rows, state.context.daily.len());
    }

    #[test]
    fn changing_filters_replaces_the_summary() {
        let mut state = state();
        state.set_filters(FilterState {
            year: Selector::Only(Year::Y2011),
            ..FilterState::default()
        });
        assert_eq!(state.summary.filters.year, Selector::Only(Year::Y2011));
        assert_eq!(state.summary.daily_rows, 4);
        assert_eq!(state.daily_rows().len(), 4);
        assert!(state.daily_rows().iter().all(|d| d.year == Year::Y2011));

        state.set_filters(FilterState {
            year: Selector::Only(Year::Y2011),
            season: Selector::Only(Season::Winter),
            day_type: Selector::Only(DayCategory::Weekend),
        });
        assert_eq!(state.summary.daily_rows, 0);
        assert_eq!(state.summary.total_rentals, 0);
    }
}
