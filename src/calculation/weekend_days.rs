//! Day classification and weekend counting.
//!
//! This module provides utilities for determining the day type (weekday,
//! Saturday, Sunday) of a date and for walking the days of a rental period.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// Represents the type of day for billing.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::DayType;
///
/// let day_type = DayType::Saturday;
/// assert_eq!(format!("{:?}", day_type), "Saturday");
/// assert!(day_type.is_weekend());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DayType {
    /// Monday through Friday.
    Weekday,
    /// Saturday.
    Saturday,
    /// Sunday.
    Sunday,
}

impl DayType {
    /// Whether this day type falls on the weekend.
    pub fn is_weekend(&self) -> bool {
        matches!(self, DayType::Saturday | DayType::Sunday)
    }
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Weekday => write!(f, "Weekday"),
            DayType::Saturday => write!(f, "Saturday"),
            DayType::Sunday => write!(f, "Sunday"),
        }
    }
}

/// Determines the day type for a given date.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::{get_day_type, DayType};
/// use chrono::NaiveDate;
///
/// // 2015-07-04 is a Saturday
/// let saturday = NaiveDate::from_ymd_opt(2015, 7, 4).unwrap();
/// assert_eq!(get_day_type(saturday), DayType::Saturday);
///
/// // 2015-07-06 is a Monday
/// let monday = NaiveDate::from_ymd_opt(2015, 7, 6).unwrap();
/// assert_eq!(get_day_type(monday), DayType::Weekday);
/// ```
pub fn get_day_type(date: NaiveDate) -> DayType {
    match date.weekday() {
        Weekday::Sat => DayType::Saturday,
        Weekday::Sun => DayType::Sunday,
        _ => DayType::Weekday,
    }
}

/// Iterates the days of a rental period.
///
/// The checkout day is the pickup day and is not part of the period; the
/// period runs from the following day through `due_date` inclusive.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::rental_period_days;
/// use chrono::NaiveDate;
///
/// let checkout = NaiveDate::from_ymd_opt(2020, 7, 2).unwrap();
/// let due = NaiveDate::from_ymd_opt(2020, 7, 4).unwrap();
///
/// let days: Vec<NaiveDate> = rental_period_days(checkout, due).collect();
/// assert_eq!(days, vec![
///     NaiveDate::from_ymd_opt(2020, 7, 3).unwrap(),
///     NaiveDate::from_ymd_opt(2020, 7, 4).unwrap(),
/// ]);
/// ```
pub fn rental_period_days(
    checkout_date: NaiveDate,
    due_date: NaiveDate,
) -> impl Iterator<Item = NaiveDate> {
    checkout_date
        .iter_days()
        .skip(1)
        .take_while(move |date| *date <= due_date)
}

/// Counts the Saturdays and Sundays in a rental period.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::count_weekend_days;
/// use chrono::NaiveDate;
///
/// // Thursday 2015-07-02 through Tuesday 2015-07-07
/// let checkout = NaiveDate::from_ymd_opt(2015, 7, 2).unwrap();
/// let due = NaiveDate::from_ymd_opt(2015, 7, 7).unwrap();
/// assert_eq!(count_weekend_days(checkout, due), 2);
/// ```
pub fn count_weekend_days(checkout_date: NaiveDate, due_date: NaiveDate) -> u32 {
    let count = rental_period_days(checkout_date, due_date)
        .filter(|date| get_day_type(*date).is_weekend())
        .count();
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_monday_is_weekday() {
        // 2026-01-12 is a Monday
        assert_eq!(get_day_type(make_date("2026-01-12")), DayType::Weekday);
    }

    #[test]
    fn test_friday_is_weekday() {
        // 2026-01-16 is a Friday
        assert_eq!(get_day_type(make_date("2026-01-16")), DayType::Weekday);
    }

    #[test]
    fn test_saturday_is_saturday() {
        assert_eq!(get_day_type(make_date("2026-01-17")), DayType::Saturday);
    }

    #[test]
    fn test_sunday_is_sunday() {
        assert_eq!(get_day_type(make_date("2026-01-18")), DayType::Sunday);
    }

    #[test]
    fn test_period_excludes_checkout_day() {
        // Checkout on a Saturday; only Sunday counts
        let count = count_weekend_days(make_date("2015-07-04"), make_date("2015-07-06"));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_period_includes_due_day() {
        // Due on a Saturday
        let count = count_weekend_days(make_date("2015-07-08"), make_date("2015-07-11"));
        assert_eq!(count, 1);
    }

    #[test]
    fn test_two_full_weeks() {
        let count = count_weekend_days(make_date("2026-01-11"), make_date("2026-01-25"));
        assert_eq!(count, 4);
    }

    #[test]
    fn test_weekday_only_period() {
        // Monday 2026-01-12 through Friday 2026-01-16
        let count = count_weekend_days(make_date("2026-01-12"), make_date("2026-01-16"));
        assert_eq!(count, 0);
    }

    #[test]
    fn test_period_length_matches_day_difference() {
        let checkout = make_date("2015-12-28");
        let due = make_date("2016-01-09");
        let days: Vec<NaiveDate> = rental_period_days(checkout, due).collect();
        assert_eq!(days.len() as i64, (due - checkout).num_days());
        assert_eq!(days.first(), Some(&make_date("2015-12-29")));
        assert_eq!(days.last(), Some(&due));
    }

    #[test]
    fn test_empty_period() {
        let date = make_date("2015-07-04");
        assert_eq!(rental_period_days(date, date).count(), 0);
        assert_eq!(count_weekend_days(date, date), 0);
    }

    #[test]
    fn test_day_type_display() {
        assert_eq!(format!("{}", DayType::Weekday), "Weekday");
        assert_eq!(format!("{}", DayType::Saturday), "Saturday");
        assert_eq!(format!("{}", DayType::Sunday), "Sunday");
    }

    #[test]
    fn test_day_type_serialization() {
        let json = serde_json::to_string(&DayType::Sunday).unwrap();
        assert_eq!(json, "\"sunday\"");

        let deserialized: DayType = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, DayType::Sunday);
    }
}
