//! Rental request model.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The clerk's input for one checkout.
///
/// Day count and discount are signed so out-of-range input reaches
/// validation in [`crate::checkout::CheckoutService`] instead of failing
/// to parse.
///
/// # Example
///
/// ```
/// use tool_rental::models::RentalRequest;
/// use chrono::NaiveDate;
///
/// let request = RentalRequest {
///     tool_code: "LADW".to_string(),
///     rental_days: 2,
///     discount_percent: 10,
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
/// };
/// assert_eq!(request.rental_days, 2);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalRequest {
    /// The code of the tool being rented.
    pub tool_code: String,
    /// Number of days the tool is rented for.
    pub rental_days: i64,
    /// Discount as a whole percentage.
    pub discount_percent: i64,
    /// The day the tool is picked up.
    pub checkout_date: NaiveDate,
}
