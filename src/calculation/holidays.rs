//! Holiday observance rules.
//!
//! Two holidays are recognized for billing:
//!
//! - Independence Day, July 4. When it falls on a Saturday it is observed on
//!   the Friday before; when it falls on a Sunday, on the Monday after.
//! - Labor Day, the first Monday in September.
//!
//! Observed dates are therefore always weekdays.

use chrono::{Datelike, NaiveDate, Weekday};

use crate::models::ObservedHoliday;

/// Name of the July 4 holiday.
pub const INDEPENDENCE_DAY: &str = "Independence Day";

/// Name of the September holiday.
pub const LABOR_DAY: &str = "Labor Day";

/// Returns Independence Day for `year`, shifted off the weekend if needed.
///
/// Returns `None` only for years outside chrono's supported range.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::independence_day;
/// use chrono::NaiveDate;
///
/// // 2015-07-04 is a Saturday, observed on Friday the 3rd.
/// let holiday = independence_day(2015).unwrap();
/// assert_eq!(holiday.observed_date, NaiveDate::from_ymd_opt(2015, 7, 3).unwrap());
///
/// // 2021-07-04 is a Sunday, observed on Monday the 5th.
/// let holiday = independence_day(2021).unwrap();
/// assert_eq!(holiday.observed_date, NaiveDate::from_ymd_opt(2021, 7, 5).unwrap());
/// ```
pub fn independence_day(year: i32) -> Option<ObservedHoliday> {
    let nominal_date = NaiveDate::from_ymd_opt(year, 7, 4)?;
    let observed_date = match nominal_date.weekday() {
        Weekday::Sat => nominal_date.pred_opt()?,
        Weekday::Sun => nominal_date.succ_opt()?,
        _ => nominal_date,
    };

    Some(ObservedHoliday {
        name: INDEPENDENCE_DAY.to_string(),
        nominal_date,
        observed_date,
    })
}

/// Returns Labor Day for `year`.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::labor_day;
/// use chrono::NaiveDate;
///
/// let holiday = labor_day(2015).unwrap();
/// assert_eq!(holiday.observed_date, NaiveDate::from_ymd_opt(2015, 9, 7).unwrap());
/// assert!(!holiday.is_shifted());
/// ```
pub fn labor_day(year: i32) -> Option<ObservedHoliday> {
    let date = NaiveDate::from_weekday_of_month_opt(year, 9, Weekday::Mon, 1)?;

    Some(ObservedHoliday {
        name: LABOR_DAY.to_string(),
        nominal_date: date,
        observed_date: date,
    })
}

/// Returns every recognized holiday of `year`, in date order.
pub fn holidays_for_year(year: i32) -> Vec<ObservedHoliday> {
    [independence_day(year), labor_day(year)]
        .into_iter()
        .flatten()
        .collect()
}

/// Returns the holidays observed within a rental period.
///
/// The period runs from the day after `checkout_date` through `due_date`
/// inclusive. Only the holidays of the checkout date's calendar year are
/// considered, so a rental running into the next year is not exempted for
/// that year's holidays.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::holidays_in_period;
/// use chrono::NaiveDate;
///
/// let checkout = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
/// let due = NaiveDate::from_ymd_opt(2015, 9, 9).unwrap();
///
/// let holidays = holidays_in_period(checkout, due);
/// assert_eq!(holidays.len(), 1);
/// assert_eq!(holidays[0].name, "Labor Day");
/// ```
pub fn holidays_in_period(checkout_date: NaiveDate, due_date: NaiveDate) -> Vec<ObservedHoliday> {
    if due_date <= checkout_date {
        return Vec::new();
    }

    holidays_for_year(checkout_date.year())
        .into_iter()
        .filter(|holiday| {
            holiday.observed_date > checkout_date && holiday.observed_date <= due_date
        })
        .collect()
}
