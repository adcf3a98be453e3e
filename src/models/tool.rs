//! Tool and charge policy models.
//!
//! This module contains the [`Tool`] record held by the catalog, the
//! [`ToolCategory`] it belongs to, and the [`ChargePolicy`] that decides
//! which days of a rental are billed.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// The kinds of tool offered for rent.
///
/// # Example
///
/// ```
/// use tool_rental::models::ToolCategory;
///
/// assert_eq!(ToolCategory::Jackhammer.to_string(), "Jackhammer");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ToolCategory {
    /// Chainsaws: charged on holidays, free on weekends.
    Chainsaw,
    /// Ladders: charged on weekends, free on holidays.
    Ladder,
    /// Jackhammers: free on both weekends and holidays.
    Jackhammer,
}

impl ToolCategory {
    /// All categories, in display order.
    pub const ALL: [ToolCategory; 3] = [
        ToolCategory::Chainsaw,
        ToolCategory::Ladder,
        ToolCategory::Jackhammer,
    ];

    /// The label printed on the rental agreement.
    pub fn label(&self) -> &'static str {
        match self {
            ToolCategory::Chainsaw => "Chainsaw",
            ToolCategory::Ladder => "Ladder",
            ToolCategory::Jackhammer => "Jackhammer",
        }
    }

    /// The built-in charge policy for this category.
    ///
    /// ```
    /// use tool_rental::models::ToolCategory;
    /// use rust_decimal::Decimal;
    ///
    /// let policy = ToolCategory::Ladder.standard_policy();
    /// assert_eq!(policy.daily_rate, Decimal::new(199, 2));
    /// assert!(policy.weekend_charge);
    /// assert!(!policy.holiday_charge);
    /// ```
    pub fn standard_policy(&self) -> ChargePolicy {
        match self {
            ToolCategory::Ladder => ChargePolicy {
                daily_rate: Decimal::new(199, 2),
                weekend_charge: true,
                holiday_charge: false,
            },
            ToolCategory::Chainsaw => ChargePolicy {
                daily_rate: Decimal::new(149, 2),
                weekend_charge: false,
                holiday_charge: true,
            },
            ToolCategory::Jackhammer => ChargePolicy {
                daily_rate: Decimal::new(299, 2),
                weekend_charge: false,
                holiday_charge: false,
            },
        }
    }
}

impl std::fmt::Display for ToolCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Billing rules shared by every tool of a category.
///
/// Weekdays are always charged. A `false` flag makes that kind of day free.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChargePolicy {
    /// The charge per billable day.
    pub daily_rate: Decimal,
    /// Whether Saturdays and Sundays are billed.
    pub weekend_charge: bool,
    /// Whether observed holidays are billed.
    pub holiday_charge: bool,
}

/// A rentable tool, keyed by its four character code.
///
/// # Example
///
/// ```
/// use tool_rental::models::{Tool, ToolCategory};
///
/// let tool = Tool::new("JAKR", ToolCategory::Jackhammer, "Ridgid");
/// assert_eq!(tool.code, "JAKR");
/// assert!(!tool.policy.weekend_charge);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// The unique tool code (e.g. "LADW").
    pub code: String,
    /// The kind of tool.
    pub category: ToolCategory,
    /// The manufacturer.
    pub brand: String,
    /// The charge policy of the tool's category.
    pub policy: ChargePolicy,
}

impl Tool {
    /// Creates a tool carrying its category's standard policy.
    pub fn new(code: impl Into<String>, category: ToolCategory, brand: impl Into<String>) -> Self {
        Self::with_policy(code, category, brand, category.standard_policy())
    }

    /// Creates a tool with an explicit charge policy.
    pub fn with_policy(
        code: impl Into<String>,
        category: ToolCategory,
        brand: impl Into<String>,
        policy: ChargePolicy,
    ) -> Self {
        Self {
            code: code.into(),
            category,
            brand: brand.into(),
            policy,
        }
    }
}
