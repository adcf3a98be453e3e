//! Request types for the tool rental API.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::models::RentalRequest;

/// Request body for the `/checkout` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutRequest {
    /// The code of the tool being rented (e.g. "JAKR").
    pub tool_code: String,
    /// Number of days the tool is rented for.
    pub rental_days: i64,
    /// Discount as a whole percentage.
    #[serde(default)]
    pub discount_percent: i64,
    /// The pickup date, as `YYYY-MM-DD`.
    pub checkout_date: NaiveDate,
}

impl From<CheckoutRequest> for RentalRequest {
    fn from(req: CheckoutRequest) -> Self {
        RentalRequest {
            tool_code: req.tool_code,
            rental_days: req.rental_days,
            discount_percent: req.discount_percent,
            checkout_date: req.checkout_date,
        }
    }
}
