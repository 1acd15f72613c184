use std::collections::BTreeMap;

use serde::Serialize;

use super::aggregate::{
    self, compare_day_types, DayTypeComparison, PeakDay, RiderSplit,
};
use super::filter::{FilterState, FilteredView};
use super::model::{DayCategory, HumidityCategory, Month, Season, WeatherSituation};

/// Non-fatal conditions shown next to the affected widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Notice {
    /// No row passes the current selectors.
    EmptyResult,
    /// Only this day category has rows, so there is nothing to compare.
    SingleBucket(DayCategory),
}

/// Everything the presentation layer needs for one filter state.
///
/// Recomputed from scratch on every selector change; never reused across
/// filter states.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub filters: FilterState,
    pub daily_rows: usize,
    pub hourly_rows: usize,
    pub total_rentals: u64,
    pub mean_rentals_per_day: Option<f64>,
    pub peak_day: Option<PeakDay>,
    pub rentals_by_day_category: BTreeMap<DayCategory, u64>,
    pub rentals_by_hour: BTreeMap<u8, u64>,
    pub rentals_by_season: BTreeMap<Season, u64>,
    pub rentals_by_month: BTreeMap<Month, u64>,
    pub rentals_by_weather: BTreeMap<WeatherSituation, u64>,
    pub rentals_by_humidity: BTreeMap<HumidityCategory, u64>,
    pub rider_split: RiderSplit,
    pub temperature_correlation: Option<f64>,
    /// `[temperature, total_rentals]` per filtered day.
    pub temperature_points: Vec<[f64; 2]>,
    pub day_type_comparison: DayTypeComparison,
    pub notices: Vec<Notice>,
}

impl DashboardSummary {
    pub fn compute(filters: FilterState, view: &FilteredView<'_>) -> Self {
        let daily = &view.daily;
        let by_category = aggregate::rentals_by_day_category(daily);
        let comparison = compare_day_types(&by_category);

        let mut notices = Vec::new();
        if daily.is_empty() {
            log::warn!("No rows match {filters}");
            notices.push(Notice::EmptyResult);
        }
        match comparison {
            DayTypeComparison::OnlyWeekday { .. } => {
                log::warn!("Only weekday rows match {filters}");
                notices.push(Notice::SingleBucket(DayCategory::Weekday));
            }
            DayTypeComparison::OnlyWeekend { .. } => {
                log::warn!("Only weekend rows match {filters}");
                notices.push(Notice::SingleBucket(DayCategory::Weekend));
            }
            _ => {}
        }

        Self {
            filters,
            daily_rows: daily.len(),
            hourly_rows: view.hourly.len(),
            total_rentals: aggregate::total_rentals(daily),
            mean_rentals_per_day: aggregate::mean_rentals(daily),
            peak_day: aggregate::peak_day(daily),
            rentals_by_day_category: by_category,
            rentals_by_hour: aggregate::rentals_by_hour(&view.hourly),
            rentals_by_season: aggregate::rentals_by_season(daily),
            rentals_by_month: aggregate::rentals_by_month(daily),
            rentals_by_weather: aggregate::rentals_by_weather(daily),
            rentals_by_humidity: aggregate::rentals_by_humidity(daily),
            rider_split: aggregate::rider_split(daily),
            temperature_correlation: aggregate::temperature_correlation(daily),
            temperature_points: aggregate::temperature_points(daily),
            day_type_comparison: comparison,
            notices,
        }
    }
}
