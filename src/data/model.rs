use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Categorical columns – closed label sets
// ---------------------------------------------------------------------------

/// Declares a fieldless enum whose variants carry a fixed display label.
/// The label is also the serialized form, so exported summaries read
/// "Light Rain/Snow" rather than a Rust identifier.
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every variant, in declaration (and sort) order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            pub fn label(self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }
    };
}

labelled_enum! {
    Season {
        Spring => "Spring",
        Summer => "Summer",
        Fall => "Fall",
        Winter => "Winter",
    }
}

labelled_enum! {
    /// Recording year. Only two years exist in the dataset.
    Year {
        Y2011 => "2011",
        Y2012 => "2012",
    }
}

labelled_enum! {
    Month {
        Jan => "Jan",
        Feb => "Feb",
        Mar => "Mar",
        Apr => "Apr",
        May => "May",
        Jun => "Jun",
        Jul => "Jul",
        Aug => "Aug",
        Sep => "Sep",
        Oct => "Oct",
        Nov => "Nov",
        Dec => "Dec",
    }
}

labelled_enum! {
    /// Week starts on Sunday, matching the raw `weekday` codes 0..=6.
    DayOfWeek {
        Sunday => "Sunday",
        Monday => "Monday",
        Tuesday => "Tuesday",
        Wednesday => "Wednesday",
        Thursday => "Thursday",
        Friday => "Friday",
        Saturday => "Saturday",
    }
}

labelled_enum! {
    WeatherSituation {
        Clear => "Clear",
        Misty => "Misty",
        LightRainSnow => "Light Rain/Snow",
        HeavyRainSnow => "Heavy Rain/Snow",
    }
}

labelled_enum! {
    /// Derived from [`DayOfWeek`]: Saturday and Sunday are the weekend.
    DayCategory {
        Weekday => "Weekday",
        Weekend => "Weekend",
    }
}

labelled_enum! {
    /// Derived from humidity (percent).
    HumidityCategory {
        Dry => "Dry",
        Ideal => "Ideal",
        Humid => "Humid",
    }
}

// ---------------------------------------------------------------------------
// RentalRecord – one prepared row
// ---------------------------------------------------------------------------

/// A cleaned, relabelled row shared by both tables.
///
/// `day_category` and `humidity_category` are filled in by
/// [`crate::data::prepare`] from `day_of_week` and `humidity`; records are
/// never edited after preparation, so the derived columns stay in step.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RentalRecord {
    pub date: NaiveDate,
    pub season: Season,
    pub year: Year,
    pub month: Month,
    pub holiday: bool,
    pub day_of_week: DayOfWeek,
    pub weather_situation: WeatherSituation,
    /// Normalized temperature (0..1).
    pub temperature: f64,
    /// Normalized "feels like" temperature (0..1).
    pub feeling_temperature: f64,
    /// Relative humidity in percent (0..100).
    pub humidity: f64,
    /// Normalized wind speed (0..1).
    pub wind_speed: f64,
    pub casual_rentals: u32,
    pub registered_rentals: u32,
    pub total_rentals: u32,
    pub day_category: DayCategory,
    pub humidity_category: HumidityCategory,
}

/// One row per calendar date.
pub type DailyRecord = RentalRecord;

/// One row per calendar date and hour of day.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HourlyRecord {
    /// Hour of day, 0..=23.
    pub hour: u8,
    #[serde(flatten)]
    pub record: RentalRecord,
}

/// Access to the shared columns of a daily or hourly row.
pub trait Rental {
    fn rental(&self) -> &RentalRecord;
}

impl Rental for RentalRecord {
    fn rental(&self) -> &RentalRecord {
        self
    }
}

impl Rental for HourlyRecord {
    fn rental(&self) -> &RentalRecord {
        &self.record
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_follow_declaration_order() {
        let labels: Vec<&str> = Season::ALL.iter().map(|s| s.label()).collect();
        assert_eq!(labels, ["Spring", "Summer", "Fall", "Winter"]);
        assert!(Month::Jan < Month::Dec);
        assert_eq!(Month::ALL.len(), 12);
        assert_eq!(DayOfWeek::ALL[0], DayOfWeek::Sunday);
    }

    #[test]
    fn serializes_as_label() {
        let json = serde_json::to_string(&WeatherSituation::LightRainSnow).unwrap();
        assert_eq!(json, "\"Light Rain/Snow\"");
        assert_eq!(Year::Y2012.to_string(), "2012");
    }
}
