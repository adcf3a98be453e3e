//! Billable day calculation.
//!
//! Maps a rental period and a tool's [`ChargePolicy`] to the number of days
//! the customer pays for. Holidays are looked up at their observed dates
//! and weekend days at their literal calendar dates. Observed holidays are
//! always weekdays, so no day is ever exempted twice.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::{ChargePolicy, ObservedHoliday};

use super::{count_weekend_days, holidays_in_period};

/// The outcome of a charge day calculation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeDaysResult {
    /// Days the customer is billed for.
    pub charge_days: u32,
    /// Holidays exempted from the charge. Empty when holidays are billed.
    pub holidays: Vec<ObservedHoliday>,
    /// Weekend days exempted from the charge. Zero when weekends are billed.
    pub weekend_days: u32,
}

impl ChargeDaysResult {
    /// Total days exempted from the charge.
    pub fn exempt_days(&self) -> u32 {
        self.holiday_days() + self.weekend_days
    }

    /// Number of exempted holidays.
    pub fn holiday_days(&self) -> u32 {
        u32::try_from(self.holidays.len()).unwrap_or(u32::MAX)
    }
}

/// Calculates the billable days of a rental.
///
/// The period covers the day after `checkout_date` through `due_date`.
/// Holidays are subtracted when the policy does not charge for them, and
/// Saturdays and Sundays are subtracted when the policy does not charge
/// for weekends.
///
/// # Arguments
///
/// * `policy` - The charge policy of the rented tool
/// * `checkout_date` - The pickup day (not billed)
/// * `due_date` - The return day (billed)
/// * `rental_days` - The number of days in the period
///
/// # Example
///
/// ```
/// use tool_rental::calculation::calculate_charge_days;
/// use tool_rental::models::ToolCategory;
/// use chrono::NaiveDate;
///
/// // Jackhammer over Labor Day weekend 2015: Sat, Sun and Mon are free.
/// let policy = ToolCategory::Jackhammer.standard_policy();
/// let checkout = NaiveDate::from_ymd_opt(2015, 9, 3).unwrap();
/// let due = NaiveDate::from_ymd_opt(2015, 9, 9).unwrap();
///
/// let result = calculate_charge_days(&policy, checkout, due, 6);
/// assert_eq!(result.charge_days, 3);
/// assert_eq!(result.weekend_days, 2);
/// assert_eq!(result.holidays.len(), 1);
/// ```
pub fn calculate_charge_days(
    policy: &ChargePolicy,
    checkout_date: NaiveDate,
    due_date: NaiveDate,
    rental_days: u32,
) -> ChargeDaysResult {
    let holidays = if policy.holiday_charge {
        Vec::new()
    } else {
        holidays_in_period(checkout_date, due_date)
    };

    let weekend_days = if policy.weekend_charge {
        0
    } else {
        count_weekend_days(checkout_date, due_date)
    };

    let mut result = ChargeDaysResult {
        charge_days: 0,
        holidays,
        weekend_days,
    };
    debug_assert!(
        result.exempt_days() <= rental_days,
        "{} exempt days in a {} day rental",
        result.exempt_days(),
        rental_days
    );
    result.charge_days = rental_days.saturating_sub(result.exempt_days());
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ToolCategory;
    use chrono::Datelike;
    use rust_decimal::Decimal;

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn charge_days(category: ToolCategory, checkout: &str, due: &str, days: u32) -> u32 {
        calculate_charge_days(
            &category.standard_policy(),
            make_date(checkout),
            make_date(due),
            days,
        )
        .charge_days
    }

    fn policy(weekend_charge: bool, holiday_charge: bool) -> ChargePolicy {
        ChargePolicy {
            daily_rate: Decimal::ONE,
            weekend_charge,
            holiday_charge,
        }
    }

    #[test]
    fn test_ladder_skips_shifted_independence_day() {
        // 2020-07-04 is Saturday, observed Friday 07-03
        assert_eq!(
            charge_days(ToolCategory::Ladder, "2020-07-02", "2020-07-04", 2),
            1
        );
    }

    #[test]
    fn test_chainsaw_skips_weekend_but_not_holiday() {
        assert_eq!(
            charge_days(ToolCategory::Chainsaw, "2015-07-02", "2015-07-07", 5),
            3
        );
    }

    #[test]
    fn test_jackhammer_labor_day_weekend() {
        assert_eq!(
            charge_days(ToolCategory::Jackhammer, "2015-09-03", "2015-09-09", 6),
            3
        );
    }

    #[test]
    fn test_jackhammer_saturday_independence_day() {
        // Fri 07-03 is the holiday, Sat 07-04, Sun 07-05 and Sat 07-11 are weekend days
        let result = calculate_charge_days(
            &ToolCategory::Jackhammer.standard_policy(),
            make_date("2015-07-02"),
            make_date("2015-07-11"),
            9,
        );
        assert_eq!(result.charge_days, 5);
        assert_eq!(result.holiday_days(), 1);
        assert_eq!(result.weekend_days, 3);
    }

    #[test]
    fn test_jackhammer_half_week_around_shifted_holiday() {
        // Fri holiday, Sat, Sun free; only Monday 07-06 is billed
        assert_eq!(
            charge_days(ToolCategory::Jackhammer, "2020-07-02", "2020-07-06", 4),
            1
        );
    }

    #[test]
    fn test_sunday_independence_day_observed_monday() {
        // 2021-07-04 is Sunday, observed Monday 07-05
        let result = calculate_charge_days(
            &policy(false, false),
            make_date("2021-07-01"),
            make_date("2021-07-06"),
            5,
        );
        assert_eq!(result.holiday_days(), 1);
        assert_eq!(result.holidays[0].observed_date, make_date("2021-07-05"));
        assert_eq!(result.weekend_days, 2);
        assert_eq!(result.charge_days, 2);
    }

    #[test]
    fn test_everything_charged() {
        let result = calculate_charge_days(
            &policy(true, true),
            make_date("2015-07-02"),
            make_date("2015-07-11"),
            9,
        );
        assert_eq!(result.charge_days, 9);
        assert_eq!(result.exempt_days(), 0);
        assert!(result.holidays.is_empty());
    }

    #[test]
    fn test_charged_flags_suppress_breakdown() {
        let result = calculate_charge_days(
            &policy(true, false),
            make_date("2015-07-02"),
            make_date("2015-07-11"),
            9,
        );
        assert_eq!(result.weekend_days, 0);
        assert_eq!(result.holiday_days(), 1);
        assert_eq!(result.charge_days, 8);
    }

    #[test]
    fn test_weekend_only_rental_is_free_for_jackhammer() {
        // Checkout Friday 2026-01-16, back Sunday
        assert_eq!(
            charge_days(ToolCategory::Jackhammer, "2026-01-16", "2026-01-18", 2),
            0
        );
    }

    #[test]
    fn test_exempt_days_never_exceed_rental_days() {
        // Every checkout day of 2015 and 2020, for rentals up to two weeks
        for year in [2015, 2020] {
            let start = NaiveDate::from_ymd_opt(year, 1, 1).unwrap();
            for checkout in start.iter_days().take_while(|d| d.year() == year) {
                for days in 1..=14u32 {
                    let due = checkout + chrono::Days::new(u64::from(days));
                    let result = calculate_charge_days(&policy(false, false), checkout, due, days);
                    assert!(result.exempt_days() <= days, "{} + {} days", checkout, days);
                    assert_eq!(result.charge_days + result.exempt_days(), days);
                }
            }
        }
    }

    #[test]
    fn test_single_weekday_rental() {
        assert_eq!(
            charge_days(ToolCategory::Jackhammer, "2026-01-12", "2026-01-13", 1),
            1
        );
    }
}
