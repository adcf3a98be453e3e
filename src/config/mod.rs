//! Tool catalog configuration.
//!
//! The catalog is either the built-in table ([`ToolCatalog::standard`]) or
//! loaded from YAML files by [`CatalogLoader`]. Either way it is read-only
//! once built.
//!
//! # Example
//!
//! ```no_run
//! use tool_rental::config::CatalogLoader;
//!
//! let catalog = CatalogLoader::load("./config/tools").unwrap();
//! for tool in catalog.tools() {
//!     println!("{} {}", tool.code, tool.brand);
//! }
//! ```

mod catalog;
mod loader;
mod types;

pub use catalog::{ToolCatalog, ToolLookup};
pub use loader::CatalogLoader;
pub use types::{CategoriesConfig, ToolEntry, ToolsConfig};
