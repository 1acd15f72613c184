use crate::error::{DataSourceError, Result};

use super::model::{DayOfWeek, Month, Season, WeatherSituation, Year};

// ---------------------------------------------------------------------------
// Column names
// ---------------------------------------------------------------------------

/// Raw column identifier → semantic name used everywhere after loading.
pub const COLUMN_RENAMES: &[(&str, &str)] = &[
    ("dteday", "date"),
    ("season", "season"),
    ("yr", "year"),
    ("mnth", "month"),
    ("hr", "hour"),
    ("holiday", "holiday"),
    ("weekday", "day_of_week"),
    ("weathersit", "weather_situation"),
    ("temp", "temperature"),
    ("atemp", "feeling_temperature"),
    ("hum", "humidity"),
    ("windspeed", "wind_speed"),
    ("casual", "casual_rentals"),
    ("registered", "registered_rentals"),
    ("cnt", "total_rentals"),
];

/// Present in the raw files but never used.
pub const DROPPED_COLUMNS: &[&str] = &["workingday"];

/// Raw columns every source must carry.
pub const SHARED_COLUMNS: &[&str] = &[
    "dteday",
    "season",
    "yr",
    "mnth",
    "holiday",
    "weekday",
    "weathersit",
    "temp",
    "atemp",
    "hum",
    "windspeed",
    "casual",
    "registered",
    "cnt",
];

/// Raw columns only the hourly source carries.
pub const HOURLY_COLUMNS: &[&str] = &["hr"];

/// Semantic name for a raw header. Dropped and unknown columns map to `None`
/// and are left out of the prepared schema.
pub fn semantic_name(raw: &str) -> Option<&'static str> {
    if DROPPED_COLUMNS.contains(&raw) {
        return None;
    }
    COLUMN_RENAMES
        .iter()
        .find(|(from, _)| *from == raw)
        .map(|(_, to)| *to)
}

// ---------------------------------------------------------------------------
// Categorical code tables
// ---------------------------------------------------------------------------

/// A column stored as integer codes in the raw files.
///
/// `CODES` is the complete mapping; any other code is a source error.
pub trait Categorical: Copy + 'static {
    /// Semantic column name, used in error messages.
    const COLUMN: &'static str;
    const CODES: &'static [(i64, Self)];

    fn decode(code: i64, row: usize) -> Result<Self> {
        Self::CODES
            .iter()
            .find(|(c, _)| *c == code)
            .map(|(_, value)| *value)
            .ok_or(DataSourceError::UnmappedCode {
                column: Self::COLUMN,
                code,
                row,
            })
    }
}

impl Categorical for Season {
    const COLUMN: &'static str = "season";
    const CODES: &'static [(i64, Self)] = &[
        (1, Season::Spring),
        (2, Season::Summer),
        (3, Season::Fall),
        (4, Season::Winter),
    ];
}

impl Categorical for Year {
    const COLUMN: &'static str = "year";
    const CODES: &'static [(i64, Self)] = &[(0, Year::Y2011), (1, Year::Y2012)];
}

impl Categorical for Month {
    const COLUMN: &'static str = "month";
    const CODES: &'static [(i64, Self)] = &[
        (1, Month::Jan),
        (2, Month::Feb),
        (3, Month::Mar),
        (4, Month::Apr),
        (5, Month::May),
        (6, Month::Jun),
        (7, Month::Jul),
        (8, Month::Aug),
        (9, Month::Sep),
        (10, Month::Oct),
        (11, Month::Nov),
        (12, Month::Dec),
    ];
}

impl Categorical for DayOfWeek {
    const COLUMN: &'static str = "day_of_week";
    const CODES: &'static [(i64, Self)] = &[
        (0, DayOfWeek::Sunday),
        (1, DayOfWeek::Monday),
        (2, DayOfWeek::Tuesday),
        (3, DayOfWeek::Wednesday),
        (4, DayOfWeek::Thursday),
        (5, DayOfWeek::Friday),
        (6, DayOfWeek::Saturday),
    ];
}

impl Categorical for WeatherSituation {
    const COLUMN: &'static str = "weather_situation";
    const CODES: &'static [(i64, Self)] = &[
        (1, WeatherSituation::Clear),
        (2, WeatherSituation::Misty),
        (3, WeatherSituation::LightRainSnow),
        (4, WeatherSituation::HeavyRainSnow),
    ];
}

/// The holiday flag keeps its 0/1 semantics.
impl Categorical for bool {
    const COLUMN: &'static str = "holiday";
    const CODES: &'static [(i64, Self)] = &[(0, false), (1, true)];
}
