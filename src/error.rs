//! Error types for the tool rental engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during a checkout or while
//! loading the tool catalog.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the tool rental engine.
///
/// The three input-validation variants carry the exact messages shown to
/// the clerk at checkout; see [`RentalError::is_invalid_argument`].
///
/// # Example
///
/// ```
/// use tool_rental::error::RentalError;
///
/// let error = RentalError::InvalidRentalDays { days: 0 };
/// assert_eq!(error.to_string(), "Rental day count must be at least 1.");
/// ```
#[derive(Debug, Error)]
pub enum RentalError {
    /// The rental day count was zero or negative.
    #[error("Rental day count must be at least 1.")]
    InvalidRentalDays {
        /// The rejected day count.
        days: i64,
    },

    /// The discount percent was outside 0..=100.
    #[error("Discount percent must be between 0 and 100.")]
    InvalidDiscount {
        /// The rejected discount percent.
        percent: i64,
    },

    /// The tool code is not in the catalog.
    #[error("Tool code does not correspond to an existing tool.")]
    ToolNotFound {
        /// The code that was looked up.
        code: String,
    },

    /// The due date could not be represented.
    #[error("Due date is out of range: {days} days after {date}")]
    DateOutOfRange {
        /// The checkout date.
        date: NaiveDate,
        /// The requested rental day count.
        days: i64,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The catalog parsed but is inconsistent.
    #[error("Invalid tool catalog: {message}")]
    InvalidCatalog {
        /// What is wrong with the catalog.
        message: String,
    },
}

impl RentalError {
    /// Returns true for errors caused by the checkout arguments themselves.
    pub fn is_invalid_argument(&self) -> bool {
        matches!(
            self,
            RentalError::InvalidRentalDays { .. }
                | RentalError::InvalidDiscount { .. }
                | RentalError::ToolNotFound { .. }
        )
    }
}

/// A type alias for Results that return RentalError.
pub type RentalResult<T> = Result<T, RentalError>;
