use std::fmt;

use serde::{Serialize, Serializer};

use super::model::{DailyRecord, DayCategory, HourlyRecord, Rental, RentalRecord, Season, Year};

// ---------------------------------------------------------------------------
// Selectors
// ---------------------------------------------------------------------------

/// One filter dimension: unrestricted, or pinned to a single value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Selector<T> {
    All,
    Only(T),
}

impl<T> Default for Selector<T> {
    fn default() -> Self {
        Selector::All
    }
}

impl<T: Copy + PartialEq> Selector<T> {
    pub fn matches(&self, value: T) -> bool {
        match self {
            Selector::All => true,
            Selector::Only(wanted) => *wanted == value,
        }
    }

    /// "All" followed by every value, in the order given.
    pub fn options(values: &[T]) -> Vec<Selector<T>> {
        std::iter::once(Selector::All)
            .chain(values.iter().copied().map(Selector::Only))
            .collect()
    }
}

impl<T: fmt::Display> fmt::Display for Selector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Selector::All => f.write_str("All"),
            Selector::Only(v) => v.fmt(f),
        }
    }
}

impl<T: fmt::Display> Serialize for Selector<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// The three user-facing selectors. Filtering is conjunctive.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct FilterState {
    pub year: Selector<Year>,
    pub season: Selector<Season>,
    pub day_type: Selector<DayCategory>,
}

impl FilterState {
    pub fn matches(&self, record: &RentalRecord) -> bool {
        self.year.matches(record.year)
            && self.season.matches(record.season)
            && self.day_type.matches(record.day_category)
    }

    pub fn is_unrestricted(&self) -> bool {
        *self == FilterState::default()
    }
}

impl fmt::Display for FilterState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "year={} season={} day_type={}",
            self.year, self.season, self.day_type
        )
    }
}

// ---------------------------------------------------------------------------
// Filtered views
// ---------------------------------------------------------------------------

/// Both tables narrowed to the rows passing a [`FilterState`].
///
/// Borrows from the prepared tables; nothing is copied or mutated.
#[derive(Debug, Clone, Default)]
pub struct FilteredView<'a> {
    pub daily: Vec<&'a DailyRecord>,
    pub hourly: Vec<&'a HourlyRecord>,
}

/// Rows of one table passing every active selector.
pub fn filter_records<'a, R: Rental>(records: &'a [R], filters: &FilterState) -> Vec<&'a R> {
    records
        .iter()
        .filter(|r| filters.matches(r.rental()))
        .collect()
}

pub fn apply_filters<'a>(
    daily: &'a [DailyRecord],
    hourly: &'a [HourlyRecord],
    filters: &FilterState,
) -> FilteredView<'a> {
    FilteredView {
        daily: filter_records(daily, filters),
        hourly: filter_records(hourly, filters),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::fixtures::mixed_tables;

    fn every_filter_state() -> Vec<FilterState> {
        let mut states = Vec::new();
        for year in Selector::options(Year::ALL) {
            for season in Selector::options(Season::ALL) {
                for day_type in Selector::options(DayCategory::ALL) {
                    states.push(FilterState {
                        year,
                        season,
                        day_type,
                    });
                }
            }
        }
        states
    }

    #[test]
    fn all_selectors_return_everything() {
        let (days, hours) = mixed_tables();
        let view = apply_filters(&days, &hours, &FilterState::default());
        assert_eq!(view.daily.len(), days.len());
        assert_eq!(view.hourly.len(), hours.len());
        assert!(view.daily.iter().zip(&days).all(|(a, b)| *a == b));
    }

    #[test]
    fn record_kept_iff_every_active_selector_matches() {
        let (days, hours) = mixed_tables();
        let states = every_filter_state();
        assert_eq!(states.len(), 3 * 5 * 3);

        for filters in states {
            let view = apply_filters(&days, &hours, &filters);
            for day in &days {
                let expected = (filters.year == Selector::All
                    || filters.year == Selector::Only(day.year))
                    && (filters.season == Selector::All
                        || filters.season == Selector::Only(day.season))
                    && (filters.day_type == Selector::All
                        || filters.day_type == Selector::Only(day.day_category));
                let kept = view.daily.iter().any(|d| std::ptr::eq(*d, day));
                assert_eq!(kept, expected, "{filters} on {}", day.date);
            }
            assert!(view.hourly.iter().all(|h| filters.matches(&h.record)));
        }
    }

    #[test]
    fn selectors_combine_conjunctively() {
        let (days, hours) = mixed_tables();
        let filters = FilterState {
            year: Selector::Only(Year::Y2012),
            season: Selector::Only(Season::Summer),
            day_type: Selector::Only(DayCategory::Weekday),
        };
        let view = apply_filters(&days, &hours, &filters);
        assert_eq!(view.daily.len(), 1);
        assert_eq!(view.daily[0].total_rentals, 6100);
        assert_eq!(view.hourly.len(), 3);
    }

    #[test]
    fn unmatched_combination_is_empty_not_an_error() {
        let (days, hours) = mixed_tables();
        let filters = FilterState {
            year: Selector::Only(Year::Y2011),
            season: Selector::Only(Season::Winter),
            day_type: Selector::Only(DayCategory::Weekend),
        };
        let view = apply_filters(&days, &hours, &filters);
        assert!(view.daily.is_empty());
        assert!(view.hourly.is_empty());
    }

    #[test]
    fn selector_display_and_options() {
        assert_eq!(Selector::<Year>::All.to_string(), "All");
        assert_eq!(Selector::Only(Year::Y2011).to_string(), "2011");
        let options = Selector::options(DayCategory::ALL);
        assert_eq!(
            options,
            [
                Selector::All,
                Selector::Only(DayCategory::Weekday),
                Selector::Only(DayCategory::Weekend)
            ]
        );
        assert!(FilterState::default().is_unrestricted());
    }
}
