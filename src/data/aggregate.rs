use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Serialize;

use super::model::{
    DailyRecord, DayCategory, HourlyRecord, HumidityCategory, Month, Rental, Season,
    WeatherSituation,
};

// ---------------------------------------------------------------------------
// Scalar metrics
// ---------------------------------------------------------------------------

pub fn total_rentals<R: Rental>(records: &[&R]) -> u64 {
    records
        .iter()
        .map(|r| u64::from(r.rental().total_rentals))
        .sum()
}

/// Mean rentals per row; `None` for an empty table.
pub fn mean_rentals<R: Rental>(records: &[&R]) -> Option<f64> {
    if records.is_empty() {
        return None;
    }
    Some(total_rentals(records) as f64 / records.len() as f64)
}

/// The busiest day in a filtered daily table.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PeakDay {
    pub date: NaiveDate,
    pub total_rentals: u32,
}

impl PeakDay {
    /// Day-month-year, e.g. "04 Dec 2012".
    pub fn date_label(&self) -> String {
        self.date.format("%d %b %Y").to_string()
    }
}

/// First row with the highest count; `None` for an empty table.
pub fn peak_day(daily: &[&DailyRecord]) -> Option<PeakDay> {
    let mut best: Option<&DailyRecord> = None;
    for &record in daily {
        match best {
            Some(b) if b.total_rentals >= record.total_rentals => {}
            _ => best = Some(record),
        }
    }
    best.map(|r| PeakDay {
        date: r.date,
        total_rentals: r.total_rentals,
    })
}

/// Casual vs registered riders.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RiderSplit {
    pub casual: u64,
    pub registered: u64,
}

pub fn rider_split(daily: &[&DailyRecord]) -> RiderSplit {
    daily.iter().fold(RiderSplit::default(), |acc, r| RiderSplit {
        casual: acc.casual + u64::from(r.casual_rentals),
        registered: acc.registered + u64::from(r.registered_rentals),
    })
}

// ---------------------------------------------------------------------------
// Grouped sums
// ---------------------------------------------------------------------------

/// Sum of rentals per key. Only keys present in `records` appear.
pub fn sum_by<R, K, F>(records: &[&R], key: F) -> BTreeMap<K, u64>
where
    R: Rental,
    K: Ord,
    F: Fn(&R) -> K,
{
    let mut sums = BTreeMap::new();
    for &record in records {
        *sums.entry(key(record)).or_insert(0) += u64::from(record.rental().total_rentals);
    }
    sums
}

pub fn rentals_by_day_category(daily: &[&DailyRecord]) -> BTreeMap<DayCategory, u64> {
    sum_by(daily, |r| r.day_category)
}

pub fn rentals_by_hour(hourly: &[&HourlyRecord]) -> BTreeMap<u8, u64> {
    sum_by(hourly, |r| r.hour)
}

pub fn rentals_by_season(daily: &[&DailyRecord]) -> BTreeMap<Season, u64> {
    sum_by(daily, |r| r.season)
}

pub fn rentals_by_month(daily: &[&DailyRecord]) -> BTreeMap<Month, u64> {
    sum_by(daily, |r| r.month)
}

pub fn rentals_by_weather(daily: &[&DailyRecord]) -> BTreeMap<WeatherSituation, u64> {
    sum_by(daily, |r| r.weather_situation)
}

pub fn rentals_by_humidity(daily: &[&DailyRecord]) -> BTreeMap<HumidityCategory, u64> {
    sum_by(daily, |r| r.humidity_category)
}

// ---------------------------------------------------------------------------
// Correlation
// ---------------------------------------------------------------------------

/// Pearson correlation coefficient.
///
/// `None` when the inputs differ in length, hold fewer than two points,
/// either side has zero variance, or a non-finite input poisons the result.
pub fn pearson(xs: &[f64], ys: &[f64]) -> Option<f64> {
    let n = xs.len();
    if n < 2 || n != ys.len() {
        return None;
    }
    let mean_x = xs.iter().sum::<f64>() / n as f64;
    let mean_y = ys.iter().sum::<f64>() / n as f64;

    let (mut cov, mut var_x, mut var_y) = (0.0, 0.0, 0.0);
    for (x, y) in xs.iter().zip(ys) {
        let dx = x - mean_x;
        let dy = y - mean_y;
        cov += dx * dy;
        var_x += dx * dx;
        var_y += dy * dy;
    }
    if var_x == 0.0 || var_y == 0.0 {
        return None;
    }
    let r = cov / (var_x.sqrt() * var_y.sqrt());
    r.is_finite().then_some(r)
}

pub fn temperature_correlation(daily: &[&DailyRecord]) -> Option<f64> {
    let (temps, rentals): (Vec<f64>, Vec<f64>) = daily
        .iter()
        .map(|r| (r.temperature, f64::from(r.total_rentals)))
        .unzip();
    pearson(&temps, &rentals)
}

/// `(temperature, total_rentals)` pairs for the scatter chart.
pub fn temperature_points(daily: &[&DailyRecord]) -> Vec<[f64; 2]> {
    daily
        .iter()
        .map(|r| [r.temperature, f64::from(r.total_rentals)])
        .collect()
}

// ---------------------------------------------------------------------------
// Weekday vs weekend
// ---------------------------------------------------------------------------

/// Outcome of comparing the Weekday and Weekend buckets.
///
/// Either bucket may be missing when a selector removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum DayTypeComparison {
    WeekdayHigher { weekday: u64, weekend: u64 },
    WeekendHigher { weekday: u64, weekend: u64 },
    Equal { rentals: u64 },
    OnlyWeekday { weekday: u64 },
    OnlyWeekend { weekend: u64 },
    NoData,
}

pub fn compare_day_types(by_category: &BTreeMap<DayCategory, u64>) -> DayTypeComparison {
    let weekday = by_category.get(&DayCategory::Weekday).copied();
    let weekend = by_category.get(&DayCategory::Weekend).copied();
    match (weekday, weekend) {
        (Some(weekday), Some(weekend)) if weekday > weekend => {
            DayTypeComparison::WeekdayHigher { weekday, weekend }
        }
        (Some(weekday), Some(weekend)) if weekend > weekday => {
            DayTypeComparison::WeekendHigher { weekday, weekend }
        }
        (Some(rentals), Some(_)) => DayTypeComparison::Equal { rentals },
        (Some(weekday), None) => DayTypeComparison::OnlyWeekday { weekday },
        (None, Some(weekend)) => DayTypeComparison::OnlyWeekend { weekend },
        (None, None) => DayTypeComparison::NoData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::{daily, hourly, mixed_tables};
    use crate::data::model::DayOfWeek;

    #[test]
    fn three_day_scenario() {
        let days = vec![
            daily((2011, 1, 3), DayOfWeek::Monday, 100),
            daily((2011, 1, 8), DayOfWeek::Saturday, 50),
            daily((2011, 1, 9), DayOfWeek::Sunday, 70),
        ];
        let view: Vec<&DailyRecord> = days.iter().collect();

        let by_category = rentals_by_day_category(&view);
        assert_eq!(by_category[&DayCategory::Weekday], 100);
        assert_eq!(by_category[&DayCategory::Weekend], 120);
        assert_eq!(
            compare_day_types(&by_category),
            DayTypeComparison::WeekendHigher {
                weekday: 100,
                weekend: 120
            }
        );

        assert_eq!(total_rentals(&view), 220);
        assert!((mean_rentals(&view).unwrap() - 220.0 / 3.0).abs() < 1e-9);
        let peak = peak_day(&view).unwrap();
        assert_eq!(peak.total_rentals, 100);
        assert_eq!(peak.date_label(), "03 Jan 2011");
    }

    #[test]
    fn perfectly_linear_correlation_is_one() {
        let mut days = Vec::new();
        for (i, (temp, total)) in [(0.2, 100), (0.4, 200), (0.6, 300), (0.8, 400)]
            .into_iter()
            .enumerate()
        {
            let mut record = daily((2012, 5, 1 + i as u32), DayOfWeek::Tuesday, total);
            record.temperature = temp;
            days.push(record);
        }
        let view: Vec<&DailyRecord> = days.iter().collect();
        let r = temperature_correlation(&view).unwrap();
        assert!((r - 1.0).abs() < 1e-9, "got {r}");
    }

    #[test]
    fn correlation_undefined_cases() {
        assert_eq!(pearson(&[], &[]), None);
        assert_eq!(pearson(&[0.5], &[10.0]), None);
        assert_eq!(pearson(&[0.5, 0.5, 0.5], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson(&[0.1, 0.2], &[7.0, 7.0]), None);
        let r = pearson(&[1.0, 2.0, 3.0], &[3.0, 2.0, 1.0]).unwrap();
        assert!((r + 1.0).abs() < 1e-12);
    }

    #[test]
    fn non_finite_inputs_leave_correlation_undefined() {
        assert_eq!(pearson(&[0.1, f64::NAN, 0.3], &[1.0, 2.0, 3.0]), None);
        assert_eq!(pearson(&[0.1, 0.2, 0.3], &[1.0, f64::INFINITY, 3.0]), None);

        let mut days = vec![
            daily((2011, 1, 3), DayOfWeek::Monday, 100),
            daily((2011, 1, 4), DayOfWeek::Tuesday, 200),
        ];
        days[0].temperature = f64::NAN;
        let view: Vec<&DailyRecord> = days.iter().collect();
        assert_eq!(temperature_correlation(&view), None);
    }

    #[test]
    fn empty_table_degrades_to_no_data() {
        let view: Vec<&DailyRecord> = Vec::new();
        assert_eq!(total_rentals(&view), 0);
        assert_eq!(mean_rentals(&view), None);
        assert_eq!(peak_day(&view), None);
        assert!(rentals_by_day_category(&view).is_empty());
        assert_eq!(temperature_correlation(&view), None);
        assert_eq!(rider_split(&view), RiderSplit::default());
        assert_eq!(
            compare_day_types(&rentals_by_day_category(&view)),
            DayTypeComparison::NoData
        );
    }

    #[test]
    fn missing_bucket_is_reported_not_indexed() {
        let days = vec![
            daily((2011, 1, 8), DayOfWeek::Saturday, 50),
            daily((2011, 1, 9), DayOfWeek::Sunday, 70),
        ];
        let view: Vec<&DailyRecord> = days.iter().collect();
        assert_eq!(
            compare_day_types(&rentals_by_day_category(&view)),
            DayTypeComparison::OnlyWeekend { weekend: 120 }
        );

        let mut only_weekday = BTreeMap::new();
        only_weekday.insert(DayCategory::Weekday, 9);
        assert_eq!(
            compare_day_types(&only_weekday),
            DayTypeComparison::OnlyWeekday { weekday: 9 }
        );
    }

    #[test]
    fn equal_buckets_are_a_tie() {
        let mut sums = BTreeMap::new();
        sums.insert(DayCategory::Weekday, 10);
        sums.insert(DayCategory::Weekend, 10);
        assert_eq!(
            compare_day_types(&sums),
            DayTypeComparison::Equal { rentals: 10 }
        );
    }

    #[test]
    fn grouped_sums_never_drop_rows() {
        let (days, hours) = mixed_tables();
        let daily_view: Vec<&DailyRecord> = days.iter().collect();
        let hourly_view: Vec<&HourlyRecord> = hours.iter().collect();
        let total = total_rentals(&daily_view);

        assert_eq!(rentals_by_day_category(&daily_view).values().sum::<u64>(), total);
        assert_eq!(rentals_by_season(&daily_view).values().sum::<u64>(), total);
        assert_eq!(rentals_by_month(&daily_view).values().sum::<u64>(), total);
        assert_eq!(rentals_by_weather(&daily_view).values().sum::<u64>(), total);
        assert_eq!(rentals_by_humidity(&daily_view).values().sum::<u64>(), total);
        assert_eq!(rentals_by_hour(&hourly_view).values().sum::<u64>(), total);

        let split = rider_split(&daily_view);
        assert_eq!(split.casual + split.registered, total);
    }

    #[test]
    fn hourly_sums_keyed_by_hour() {
        let day = daily((2011, 1, 3), DayOfWeek::Monday, 0);
        let hours = [hourly(&day, 8, 5), hourly(&day, 17, 7), hourly(&day, 8, 1)];
        let view: Vec<&HourlyRecord> = hours.iter().collect();
        let by_hour = rentals_by_hour(&view);
        assert_eq!(by_hour.into_iter().collect::<Vec<_>>(), [(8, 6), (17, 7)]);
    }

    #[test]
    fn seasons_come_out_in_calendar_order() {
        let (days, _) = mixed_tables();
        let view: Vec<&DailyRecord> = days.iter().collect();
        let seasons: Vec<Season> = rentals_by_season(&view).into_keys().collect();
        assert_eq!(seasons, Season::ALL);
    }

    #[test]
    fn peak_day_keeps_first_maximum() {
        let days = vec![
            daily((2011, 1, 3), DayOfWeek::Monday, 300),
            daily((2011, 1, 4), DayOfWeek::Tuesday, 300),
        ];
        let view: Vec<&DailyRecord> = days.iter().collect();
        assert_eq!(
            peak_day(&view).unwrap().date,
            NaiveDate::from_ymd_opt(2011, 1, 3).unwrap()
        );
    }
}
