use chrono::NaiveDate;

use super::loader::{RawRecord, RawTable};
use super::model::{
    DailyRecord, DayCategory, DayOfWeek, HourlyRecord, HumidityCategory, Month, RentalRecord,
    Season, WeatherSituation, Year,
};
use super::schema::Categorical;
use crate::error::{DataSourceError, Result};

/// Humidity below this (percent) is "Dry".
pub const DRY_BELOW: f64 = 45.0;
/// Humidity below this (percent) and at least [`DRY_BELOW`] is "Ideal".
pub const IDEAL_BELOW: f64 = 65.0;

/// Knobs for turning raw values into prepared ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrepareOptions {
    /// Multiplier from the raw `hum` column to percent. The published
    /// dataset stores humidity divided by 100.
    pub humidity_scale: f64,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        Self {
            humidity_scale: 100.0,
        }
    }
}

// ---------------------------------------------------------------------------
// Derived columns
// ---------------------------------------------------------------------------

pub fn categorize_day(day: DayOfWeek) -> DayCategory {
    match day {
        DayOfWeek::Saturday | DayOfWeek::Sunday => DayCategory::Weekend,
        _ => DayCategory::Weekday,
    }
}

/// Bucket a humidity percentage. Boundaries belong to the higher bucket.
pub fn categorize_humidity(humidity: f64) -> HumidityCategory {
    if humidity < DRY_BELOW {
        HumidityCategory::Dry
    } else if humidity < IDEAL_BELOW {
        HumidityCategory::Ideal
    } else {
        HumidityCategory::Humid
    }
}

// ---------------------------------------------------------------------------
// Pipeline
// ---------------------------------------------------------------------------

/// Turn both raw sources into prepared tables.
///
/// Pure: the same raw tables always produce the same output. Fails on the
/// first row with an unmapped code, bad date, non-finite measurement, or
/// count outside `0..=u32::MAX`.
pub fn prepare(
    daily: &RawTable,
    hourly: &RawTable,
    options: &PrepareOptions,
) -> Result<(Vec<DailyRecord>, Vec<HourlyRecord>)> {
    let daily_records = daily
        .rows
        .iter()
        .enumerate()
        .map(|(i, raw)| prepare_record(raw, i + 1, options))
        .collect::<Result<Vec<_>>>()?;

    let hourly_records = hourly
        .rows
        .iter()
        .enumerate()
        .map(|(i, raw)| prepare_hourly_record(raw, i + 1, options))
        .collect::<Result<Vec<_>>>()?;

    Ok((daily_records, hourly_records))
}

/// Prepare one row. `row` is the 1-based data row number, for errors.
pub fn prepare_record(raw: &RawRecord, row: usize, options: &PrepareOptions) -> Result<RentalRecord> {
    let date = NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d").map_err(|_| {
        DataSourceError::InvalidDate {
            value: raw.date.clone(),
            row,
        }
    })?;

    let day_of_week = DayOfWeek::decode(raw.day_of_week, row)?;
    let humidity = finite(
        to_percent(raw.humidity, options.humidity_scale),
        "humidity",
        row,
    )?;

    Ok(RentalRecord {
        date,
        season: Season::decode(raw.season, row)?,
        year: Year::decode(raw.year, row)?,
        month: Month::decode(raw.month, row)?,
        holiday: bool::decode(raw.holiday, row)?,
        day_of_week,
        weather_situation: WeatherSituation::decode(raw.weather_situation, row)?,
        temperature: finite(raw.temperature, "temperature", row)?,
        feeling_temperature: finite(raw.feeling_temperature, "feeling_temperature", row)?,
        humidity,
        wind_speed: finite(raw.wind_speed, "wind_speed", row)?,
        casual_rentals: count(raw.casual_rentals, row)?,
        registered_rentals: count(raw.registered_rentals, row)?,
        total_rentals: count(raw.total_rentals, row)?,
        day_category: categorize_day(day_of_week),
        humidity_category: categorize_humidity(humidity),
    })
}

fn prepare_hourly_record(raw: &RawRecord, row: usize, options: &PrepareOptions) -> Result<HourlyRecord> {
    let code = raw.hour.ok_or(DataSourceError::MissingValue {
        column: "hour",
        row,
    })?;
    let hour = u8::try_from(code)
        .ok()
        .filter(|h| *h < 24)
        .ok_or(DataSourceError::UnmappedCode {
            column: "hour",
            code,
            row,
        })?;

    Ok(HourlyRecord {
        hour,
        record: prepare_record(raw, row, options)?,
    })
}

fn count(value: i64, row: usize) -> Result<u32> {
    if value < 0 {
        return Err(DataSourceError::NegativeCount { row });
    }
    u32::try_from(value).map_err(|_| DataSourceError::CountOutOfRange { value, row })
}

/// CSV happily parses `NaN` and `inf` into `f64`.
fn finite(value: f64, column: &'static str, row: usize) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(DataSourceError::NonFiniteValue { column, row })
    }
}

/// Scale and round to 6 decimals so 0.45 lands on exactly 45.0.
fn to_percent(raw: f64, scale: f64) -> f64 {
    (raw * scale * 1e6).round() / 1e6
}
