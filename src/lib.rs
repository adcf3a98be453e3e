//! Tool rental checkout engine.
//!
//! This crate computes rental agreements for tool checkouts: the billable
//! days of a rental period (with weekend and U.S. holiday exemptions that
//! depend on the tool category), the pre-discount, discount and final
//! charges, and the printed agreement.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod checkout;
pub mod config;
pub mod error;
pub mod models;
