use std::path::PathBuf;

use super::filter::{apply_filters, FilterState, FilteredView};
use super::loader::{load_table, RawTable, TableKind};
use super::model::{DailyRecord, HourlyRecord};
use super::prepare::{prepare, PrepareOptions};
use super::summary::DashboardSummary;
use crate::error::Result;

/// Where the raw sources live and how to prepare them.
#[derive(Debug, Clone, PartialEq)]
pub struct DataSources {
    pub daily_path: PathBuf,
    pub hourly_path: PathBuf,
    pub prepare: PrepareOptions,
}

/// The prepared tables, built once at startup and only borrowed afterwards.
#[derive(Debug, Clone)]
pub struct DataContext {
    pub daily: Vec<DailyRecord>,
    pub hourly: Vec<HourlyRecord>,
}

impl DataContext {
    /// Blocking load of both sources followed by preparation.
    pub fn load(sources: &DataSources) -> Result<Self> {
        let daily = load_table(&sources.daily_path, TableKind::Daily)?;
        let hourly = load_table(&sources.hourly_path, TableKind::Hourly)?;
        Self::from_raw(&daily, &hourly, &sources.prepare)
    }

    pub fn from_raw(daily: &RawTable, hourly: &RawTable, options: &PrepareOptions) -> Result<Self> {
        let (daily, hourly) = prepare(daily, hourly, options)?;
        log::info!(
            "Prepared {} daily and {} hourly records",
            daily.len(),
            hourly.len()
        );
        Ok(Self { daily, hourly })
    }

    pub fn view(&self, filters: &FilterState) -> FilteredView<'_> {
        apply_filters(&self.daily, &self.hourly, filters)
    }

    /// One full recomputation pass: filter, then aggregate.
    pub fn summarize(&self, filters: FilterState) -> DashboardSummary {
        let view = self.view(&filters);
        log::debug!(
            "{filters}: {} daily / {} hourly rows",
            view.daily.len(),
            view.hourly.len()
        );
        DashboardSummary::compute(filters, &view)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{DAILY_CSV, HOURLY_CSV};
    use crate::error::DataSourceError;

    fn write_sources(dir: &std::path::Path) -> DataSources {
        let daily_path = dir.join("day.csv");
        let hourly_path = dir.join("hour.csv");
        std::fs::write(&daily_path, DAILY_CSV).unwrap();
        std::fs::write(&hourly_path, HOURLY_CSV).unwrap();
        DataSources {
            daily_path,
            hourly_path,
            prepare: PrepareOptions::default(),
        }
    }

    #[test]
    fn loads_and_summarizes_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let context = DataContext::load(&write_sources(dir.path())).unwrap();
        assert_eq!(context.daily.len(), 4);
        assert_eq!(context.hourly.len(), 3);

        let summary = context.summarize(FilterState::default());
        assert_eq!(summary.total_rentals, 985 + 801 + 1349 + 1562);
        assert_eq!(summary.rentals_by_hour[&0u8], 16 + 17);
    }

    #[test]
    fn summarizing_leaves_prepared_tables_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let context = DataContext::load(&write_sources(dir.path())).unwrap();
        let before = context.daily.clone();
        let _ = context.summarize(FilterState::default());
        assert_eq!(context.daily, before);
    }

    #[test]
    fn missing_hourly_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let mut sources = write_sources(dir.path());
        sources.hourly_path = dir.path().join("missing.csv");
        let err = DataContext::load(&sources).unwrap_err();
        assert!(matches!(err, DataSourceError::Io { .. }));
    }
}
