//! Catalog loading functionality.
//!
//! This module provides the [`CatalogLoader`] type for loading a tool
//! catalog from YAML files.

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{RentalError, RentalResult};
use crate::models::Tool;

use super::ToolCatalog;
use super::types::{CategoriesConfig, ToolsConfig};

/// Loads a [`ToolCatalog`] from a configuration directory.
///
/// # Directory Structure
///
/// ```text
/// config/tools/
/// ├── categories.yaml   # Charge policy per category
/// └── tools.yaml        # Tool code, category and brand
/// ```
///
/// # Example
///
/// ```no_run
/// use tool_rental::config::{CatalogLoader, ToolLookup};
///
/// let catalog = CatalogLoader::load("./config/tools")?;
/// println!("{} tools", catalog.len());
/// # Ok::<(), tool_rental::error::RentalError>(())
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CatalogLoader;

impl CatalogLoader {
    /// Loads and validates the catalog in `path`.
    ///
    /// Fails if either file is missing or malformed, if a tool uses a
    /// category without a charge policy, or if tool codes repeat.
    pub fn load<P: AsRef<Path>>(path: P) -> RentalResult<ToolCatalog> {
        let path = path.as_ref();

        let categories = Self::load_yaml::<CategoriesConfig>(&path.join("categories.yaml"))?;
        let tools = Self::load_yaml::<ToolsConfig>(&path.join("tools.yaml"))?;

        let records = tools
            .tools
            .into_iter()
            .map(|entry| -> RentalResult<Tool> {
                let policy = categories.categories.get(&entry.category).ok_or_else(|| {
                    RentalError::InvalidCatalog {
                        message: format!(
                            "tool '{}' has category '{}' with no charge policy",
                            entry.code, entry.category
                        ),
                    }
                })?;
                Ok(Tool::with_policy(entry.code, entry.category, entry.brand, *policy))
            })
            .collect::<RentalResult<Vec<Tool>>>()?;

        let catalog = ToolCatalog::from_tools(records)?;
        debug!(path = %path.display(), tools = catalog.len(), "Loaded tool catalog");
        Ok(catalog)
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> RentalResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| RentalError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| RentalError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }
}
