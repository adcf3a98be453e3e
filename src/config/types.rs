//! Configuration types for the tool catalog.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use serde::Deserialize;
use std::collections::BTreeMap;

use crate::models::{ChargePolicy, ToolCategory};

/// Contents of `categories.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoriesConfig {
    /// Charge policy of each category.
    pub categories: BTreeMap<ToolCategory, ChargePolicy>,
}

/// One entry of `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolEntry {
    /// The unique tool code.
    pub code: String,
    /// The category, which selects the charge policy.
    pub category: ToolCategory,
    /// The manufacturer.
    pub brand: String,
}

/// Contents of `tools.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct ToolsConfig {
    /// All tools offered for rent.
    pub tools: Vec<ToolEntry>,
}
