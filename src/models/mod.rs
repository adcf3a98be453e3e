//! Core data models for the tool rental engine.
//!
//! This module contains all the domain models used throughout the engine.

mod currency;
mod holiday;
mod rental_agreement;
mod rental_request;
mod tool;

pub use currency::CurrencyFormat;
pub use holiday::ObservedHoliday;
pub use rental_agreement::{AGREEMENT_DATE_FORMAT, RentalAgreement};
pub use rental_request::RentalRequest;
pub use tool::{ChargePolicy, Tool, ToolCategory};
