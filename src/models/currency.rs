//! Currency display.
//!
//! Amounts are kept as [`Decimal`] everywhere and only turned into text
//! here, when an agreement is rendered.

use rust_decimal::{Decimal, RoundingStrategy};

/// How money is written on an agreement.
///
/// # Example
///
/// ```
/// use tool_rental::models::CurrencyFormat;
/// use rust_decimal::Decimal;
///
/// let usd = CurrencyFormat::US_DOLLAR;
/// assert_eq!(usd.format(Decimal::new(199, 2)), "$1.99");
/// assert_eq!(usd.format(Decimal::new(123456789, 2)), "$1,234,567.89");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CurrencyFormat {
    /// The symbol written before the amount.
    pub symbol: &'static str,
    /// Separator between groups of three whole digits.
    pub thousands_separator: char,
    /// Separator before the cents.
    pub decimal_separator: char,
}

impl CurrencyFormat {
    /// United States dollars.
    pub const US_DOLLAR: CurrencyFormat = CurrencyFormat {
        symbol: "$",
        thousands_separator: ',',
        decimal_separator: '.',
    };

    /// Formats an amount with the symbol, digit grouping and exactly two decimals.
    pub fn format(&self, amount: Decimal) -> String {
        let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
        let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
            "-"
        } else {
            ""
        };

        let text = format!("{:.2}", rounded.abs());
        let (whole, cents) = text.split_once('.').unwrap_or((text.as_str(), "00"));

        let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
        for (i, digit) in whole.chars().enumerate() {
            if i > 0 && (whole.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(digit);
        }

        format!(
            "{sign}{}{grouped}{}{cents}",
            self.symbol, self.decimal_separator
        )
    }
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self::US_DOLLAR
    }
}
