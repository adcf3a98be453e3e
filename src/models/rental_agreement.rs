//! Rental agreement model and its printed form.
//!
//! A [`RentalAgreement`] is the only output of a checkout. It keeps dates
//! and money in their native types; [`RentalAgreement::render`] produces
//! the text handed to the customer.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{CurrencyFormat, ToolCategory};

/// Date format used on printed agreements (e.g. "07-02-20").
pub const AGREEMENT_DATE_FORMAT: &str = "%m-%d-%y";

/// The completed agreement for one tool checkout.
///
/// # Example
///
/// ```
/// use tool_rental::models::{RentalAgreement, ToolCategory};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let agreement = RentalAgreement {
///     tool_code: "LADW".to_string(),
///     tool_type: ToolCategory::Ladder,
///     tool_brand: "Werner".to_string(),
///     rental_days: 2,
///     checkout_date: NaiveDate::from_ymd_opt(2020, 7, 2).unwrap(),
///     due_date: NaiveDate::from_ymd_opt(2020, 7, 4).unwrap(),
///     daily_rental_charge: Decimal::new(199, 2),
///     charge_days: 1,
///     pre_discount_charge: Decimal::new(199, 2),
///     discount_percent: 10,
///     discount_amount: Decimal::new(20, 2),
///     final_charge: Decimal::new(179, 2),
/// };
///
/// assert!(agreement.render().starts_with("Tool code: LADW\nTool type: Ladder\n"));
/// assert!(agreement.render().ends_with("Final charge: $1.79"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RentalAgreement {
    /// The rented tool's code.
    pub tool_code: String,
    /// The rented tool's category.
    pub tool_type: ToolCategory,
    /// The rented tool's brand.
    pub tool_brand: String,
    /// Number of days rented.
    pub rental_days: u32,
    /// The day the tool was picked up.
    pub checkout_date: NaiveDate,
    /// The day the tool is due back.
    pub due_date: NaiveDate,
    /// The category's charge per billable day.
    pub daily_rental_charge: Decimal,
    /// Number of billable days in the rental period.
    pub charge_days: u32,
    /// Charge before the discount, rounded up to the cent.
    pub pre_discount_charge: Decimal,
    /// Discount as a whole percentage.
    pub discount_percent: u32,
    /// Discount amount, rounded up to the cent.
    pub discount_amount: Decimal,
    /// Amount owed.
    pub final_charge: Decimal,
}

impl RentalAgreement {
    /// Renders the agreement one field per line, without a trailing newline.
    pub fn render(&self) -> String {
        self.render_with(&CurrencyFormat::US_DOLLAR)
    }

    /// Renders the agreement using the given currency format.
    pub fn render_with(&self, currency: &CurrencyFormat) -> String {
        [
            format!("Tool code: {}", self.tool_code),
            format!("Tool type: {}", self.tool_type.label()),
            format!("Tool brand: {}", self.tool_brand),
            format!("Rental days: {}", self.rental_days),
            format!(
                "Checkout date: {}",
                self.checkout_date.format(AGREEMENT_DATE_FORMAT)
            ),
            format!("Due date: {}", self.due_date.format(AGREEMENT_DATE_FORMAT)),
            format!(
                "Daily rental charge: {}",
                currency.format(self.daily_rental_charge)
            ),
            format!("Charge days: {}", self.charge_days),
            format!(
                "Pre-discount charge: {}",
                currency.format(self.pre_discount_charge)
            ),
            format!("Discount percent: {}%", self.discount_percent),
            format!("Discount amount: {}", currency.format(self.discount_amount)),
            format!("Final charge: {}", currency.format(self.final_charge)),
        ]
        .join("\n")
    }

    /// Prints the rendered agreement to standard output.
    pub fn print(&self) {
        println!("{}", self.render());
    }
}

impl std::fmt::Display for RentalAgreement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.render())
    }
}
