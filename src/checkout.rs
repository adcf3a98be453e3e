//! Checkout orchestration.
//!
//! [`CheckoutService`] validates a rental request, resolves the tool through
//! its injected [`ToolLookup`], and runs the charge day and pricing
//! calculations to produce a [`RentalAgreement`].

use chrono::{Days, NaiveDate};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculation::{ChargeDaysResult, calculate_charge_days, compute_charges};
use crate::config::{ToolCatalog, ToolLookup};
use crate::error::{RentalError, RentalResult};
use crate::models::{RentalAgreement, RentalRequest};

/// Largest discount that can be applied, in percent.
pub const MAX_DISCOUNT_PERCENT: i64 = 100;

/// An agreement together with the exemptions that produced its charge days.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutOutcome {
    /// The completed agreement.
    pub agreement: RentalAgreement,
    /// Which holidays and weekend days were not billed.
    pub charge_days: ChargeDaysResult,
}

/// Returns the due date of a rental: `rental_days` calendar days after checkout.
///
/// Returns `None` if the date cannot be represented.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::calculate_due_date;
/// use chrono::NaiveDate;
///
/// let checkout = NaiveDate::from_ymd_opt(2015, 12, 30).unwrap();
/// assert_eq!(
///     calculate_due_date(checkout, 5),
///     NaiveDate::from_ymd_opt(2016, 1, 4)
/// );
/// ```
pub fn calculate_due_date(checkout_date: NaiveDate, rental_days: u32) -> Option<NaiveDate> {
    checkout_date.checked_add_days(Days::new(u64::from(rental_days)))
}

/// Produces rental agreements from checkout requests.
///
/// # Example
///
/// ```
/// use tool_rental::checkout::CheckoutService;
/// use tool_rental::config::ToolCatalog;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let service = CheckoutService::new(ToolCatalog::standard());
/// let agreement = service
///     .checkout("LADW", 2, 10, NaiveDate::from_ymd_opt(2020, 7, 2).unwrap())
///     .unwrap();
///
/// assert_eq!(agreement.charge_days, 1);
/// assert_eq!(agreement.final_charge, Decimal::new(179, 2));
/// ```
#[derive(Debug, Clone)]
pub struct CheckoutService<L = ToolCatalog> {
    lookup: L,
}

impl<L: ToolLookup> CheckoutService<L> {
    /// Creates a service that resolves tools through `lookup`.
    pub fn new(lookup: L) -> Self {
        Self { lookup }
    }

    /// Returns the tool lookup backing this service.
    pub fn lookup(&self) -> &L {
        &self.lookup
    }

    /// Checks out a tool.
    ///
    /// # Errors
    ///
    /// Checked in this order:
    /// - [`RentalError::InvalidRentalDays`] if `rental_days` is below 1
    /// - [`RentalError::InvalidDiscount`] if `discount_percent` is outside 0..=100
    /// - [`RentalError::ToolNotFound`] if no tool has `tool_code`
    /// - [`RentalError::DateOutOfRange`] if the due date cannot be represented
    pub fn checkout(
        &self,
        tool_code: &str,
        rental_days: i64,
        discount_percent: i64,
        checkout_date: NaiveDate,
    ) -> RentalResult<RentalAgreement> {
        self.checkout_request(&RentalRequest {
            tool_code: tool_code.to_string(),
            rental_days,
            discount_percent,
            checkout_date,
        })
    }

    /// Checks out a tool described by a [`RentalRequest`].
    pub fn checkout_request(&self, request: &RentalRequest) -> RentalResult<RentalAgreement> {
        self.checkout_with_details(request)
            .map(|outcome| outcome.agreement)
    }

    /// Checks out a tool and also returns the charge day breakdown.
    pub fn checkout_with_details(&self, request: &RentalRequest) -> RentalResult<CheckoutOutcome> {
        if request.rental_days < 1 {
            return Err(RentalError::InvalidRentalDays {
                days: request.rental_days,
            });
        }

        if !(0..=MAX_DISCOUNT_PERCENT).contains(&request.discount_percent) {
            return Err(RentalError::InvalidDiscount {
                percent: request.discount_percent,
            });
        }

        let tool = self
            .lookup
            .resolve(&request.tool_code)
            .ok_or_else(|| RentalError::ToolNotFound {
                code: request.tool_code.clone(),
            })?;

        let out_of_range = || RentalError::DateOutOfRange {
            date: request.checkout_date,
            days: request.rental_days,
        };
        let rental_days = u32::try_from(request.rental_days).map_err(|_| out_of_range())?;
        let discount_percent =
            u32::try_from(request.discount_percent).map_err(|_| RentalError::InvalidDiscount {
                percent: request.discount_percent,
            })?;
        let due_date =
            calculate_due_date(request.checkout_date, rental_days).ok_or_else(out_of_range)?;

        let charge_days =
            calculate_charge_days(&tool.policy, request.checkout_date, due_date, rental_days);
        let charges = compute_charges(
            charge_days.charge_days,
            tool.policy.daily_rate,
            discount_percent,
        );

        debug!(
            tool_code = %tool.code,
            rental_days,
            charge_days = charge_days.charge_days,
            holidays = charge_days.holiday_days(),
            weekend_days = charge_days.weekend_days,
            final_charge = %charges.final_charge,
            "Checkout calculated"
        );

        let agreement = RentalAgreement {
            tool_code: tool.code.clone(),
            tool_type: tool.category,
            tool_brand: tool.brand.clone(),
            rental_days,
            checkout_date: request.checkout_date,
            due_date,
            daily_rental_charge: tool.policy.daily_rate,
            charge_days: charge_days.charge_days,
            pre_discount_charge: charges.pre_discount_charge,
            discount_percent,
            discount_amount: charges.discount_amount,
            final_charge: charges.final_charge,
        };

        Ok(CheckoutOutcome {
            agreement,
            charge_days,
        })
    }
}
