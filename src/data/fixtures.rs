//! Shared test data.

use chrono::NaiveDate;

use super::model::{
    DailyRecord, DayOfWeek, HourlyRecord, Month, Season, WeatherSituation, Year,
};
use super::prepare::{categorize_day, categorize_humidity};

pub const DAILY_CSV: &str = "\
instant,dteday,season,yr,mnth,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,6,0,2,0.344167,0.363625,0.805833,0.160446,331,654,985
2,2011-01-02,1,0,1,0,0,0,2,0.363478,0.353739,0.696087,0.248539,131,670,801
3,2011-01-03,1,0,1,0,1,1,1,0.196364,0.189405,0.437273,0.248309,120,1229,1349
4,2011-01-04,1,0,1,0,2,1,1,0.2,0.212122,0.590435,0.160296,108,1454,1562
";

pub const HOURLY_CSV: &str = "\
instant,dteday,season,yr,mnth,hr,holiday,weekday,workingday,weathersit,temp,atemp,hum,windspeed,casual,registered,cnt
1,2011-01-01,1,0,1,0,0,6,0,1,0.24,0.2879,0.81,0,3,13,16
2,2011-01-01,1,0,1,1,0,6,0,1,0.22,0.2727,0.8,0,8,32,40
3,2011-01-02,1,0,1,0,0,0,0,2,0.46,0.4545,0.88,0.2985,4,13,17
";

/// A daily record with consistent derived columns and neutral defaults.
pub fn daily(date: (i32, u32, u32), day_of_week: DayOfWeek, total_rentals: u32) -> DailyRecord {
    let (y, m, d) = date;
    let humidity = 50.0;
    DailyRecord {
        date: NaiveDate::from_ymd_opt(y, m, d).unwrap(),
        season: Season::Spring,
        year: if y == 2011 { Year::Y2011 } else { Year::Y2012 },
        month: Month::ALL[(m - 1) as usize],
        holiday: false,
        day_of_week,
        weather_situation: WeatherSituation::Clear,
        temperature: 0.5,
        feeling_temperature: 0.5,
        humidity,
        wind_speed: 0.1,
        casual_rentals: total_rentals / 4,
        registered_rentals: total_rentals - total_rentals / 4,
        total_rentals,
        day_category: categorize_day(day_of_week),
        humidity_category: categorize_humidity(humidity),
    }
}

pub fn hourly(record: &DailyRecord, hour: u8, total_rentals: u32) -> HourlyRecord {
    HourlyRecord {
        hour,
        record: DailyRecord {
            total_rentals,
            casual_rentals: 0,
            registered_rentals: total_rentals,
            ..record.clone()
        },
    }
}

/// Two years, all seasons, both day types; hourly rows for each day.
pub fn mixed_tables() -> (Vec<DailyRecord>, Vec<HourlyRecord>) {
    let mut days = Vec::new();
    let plan = [
        ((2011, 1, 8), DayOfWeek::Saturday, Season::Spring, 400),
        ((2011, 1, 10), DayOfWeek::Monday, Season::Spring, 900),
        ((2011, 7, 11), DayOfWeek::Monday, Season::Fall, 4200),
        ((2011, 7, 16), DayOfWeek::Saturday, Season::Fall, 3900),
        ((2012, 4, 15), DayOfWeek::Sunday, Season::Summer, 5100),
        ((2012, 4, 17), DayOfWeek::Tuesday, Season::Summer, 6100),
        ((2012, 11, 20), DayOfWeek::Tuesday, Season::Winter, 4700),
    ];
    for (date, dow, season, total) in plan {
        let mut record = daily(date, dow, total);
        record.season = season;
        days.push(record);
    }
    let hours = days
        .iter()
        .flat_map(|d| {
            let third = d.total_rentals / 3;
            [
                hourly(d, 8, third),
                hourly(d, 17, third),
                hourly(d, 23, d.total_rentals - 2 * third),
            ]
        })
        .collect();
    (days, hours)
}
