//! Observed holiday model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A holiday as it is recognized for billing in one year.
///
/// The observed date is the weekday the holiday is taken on. It differs
/// from the nominal date when the nominal date falls on a weekend.
///
/// # Example
///
/// ```
/// use tool_rental::models::ObservedHoliday;
/// use chrono::NaiveDate;
///
/// // July 4, 2015 was a Saturday.
/// let holiday = ObservedHoliday {
///     name: "Independence Day".to_string(),
///     nominal_date: NaiveDate::from_ymd_opt(2015, 7, 4).unwrap(),
///     observed_date: NaiveDate::from_ymd_opt(2015, 7, 3).unwrap(),
/// };
/// assert!(holiday.is_shifted());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservedHoliday {
    /// The name of the holiday (e.g. "Labor Day").
    pub name: String,
    /// The calendar date of the holiday.
    pub nominal_date: NaiveDate,
    /// The date the holiday is observed on.
    pub observed_date: NaiveDate,
}

impl ObservedHoliday {
    /// Whether the holiday was moved off its nominal date.
    pub fn is_shifted(&self) -> bool {
        self.nominal_date != self.observed_date
    }
}
