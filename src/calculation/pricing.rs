//! Rental charge calculation.
//!
//! The pre-discount charge and the discount amount are both rounded up to
//! the next cent. The final charge is their difference, which is already
//! exact to the cent and only normalized to two places.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// The money side of a rental agreement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargeBreakdown {
    /// Charge days times the daily rate, rounded up to the cent.
    pub pre_discount_charge: Decimal,
    /// Discount on the pre-discount charge, rounded up to the cent.
    pub discount_amount: Decimal,
    /// Amount owed after the discount.
    pub final_charge: Decimal,
}

/// Rounds a non-negative amount up to the next whole cent.
///
/// # Example
///
/// ```
/// use tool_rental::calculation::round_up_to_cent;
/// use rust_decimal::Decimal;
///
/// assert_eq!(round_up_to_cent(Decimal::new(1495, 3)), Decimal::new(150, 2));
/// assert_eq!(round_up_to_cent(Decimal::new(199, 3)), Decimal::new(20, 2));
/// assert_eq!(round_up_to_cent(Decimal::new(447, 2)), Decimal::new(447, 2));
/// ```
pub fn round_up_to_cent(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::AwayFromZero)
}

/// Computes the charges for a rental.
///
/// # Arguments
///
/// * `charge_days` - Billable days in the rental period
/// * `daily_rate` - Charge per billable day
/// * `discount_percent` - Discount as a whole percentage, 0 to 100
///
/// # Example
///
/// ```
/// use tool_rental::calculation::compute_charges;
/// use rust_decimal::Decimal;
///
/// // 3 days at $1.49 with 25% off
/// let charges = compute_charges(3, Decimal::new(149, 2), 25);
/// assert_eq!(charges.pre_discount_charge, Decimal::new(447, 2));
/// assert_eq!(charges.discount_amount, Decimal::new(112, 2));
/// assert_eq!(charges.final_charge, Decimal::new(335, 2));
/// ```
pub fn compute_charges(charge_days: u32, daily_rate: Decimal, discount_percent: u32) -> ChargeBreakdown {
    let pre_discount_charge = round_up_to_cent(Decimal::from(charge_days) * daily_rate);
    let discount_amount = round_up_to_cent(
        pre_discount_charge * Decimal::from(discount_percent) / Decimal::new(100, 0),
    );
    let final_charge = (pre_discount_charge - discount_amount)
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);

    ChargeBreakdown {
        pre_discount_charge,
        discount_amount,
        final_charge,
    }
}
