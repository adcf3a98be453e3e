//! Calculation logic for the tool rental engine.
//!
//! This module contains the billable day engine (holiday observance,
//! weekend detection and the charge day count) and the pricing rules that
//! turn charge days into money.

mod charge_days;
mod holidays;
mod pricing;
mod weekend_days;

pub use charge_days::{ChargeDaysResult, calculate_charge_days};
pub use holidays::{
    INDEPENDENCE_DAY, LABOR_DAY, holidays_for_year, holidays_in_period, independence_day,
    labor_day,
};
pub use pricing::{ChargeBreakdown, compute_charges, round_up_to_cent};
pub use weekend_days::{DayType, count_weekend_days, get_day_type, rental_period_days};
