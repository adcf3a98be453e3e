//! The tool catalog and the lookup seam used at checkout.

use std::collections::{BTreeMap, HashMap};

use crate::error::{RentalError, RentalResult};
use crate::models::{Tool, ToolCategory};

/// Resolves a tool code to its record.
///
/// [`crate::checkout::CheckoutService`] depends on this trait rather than
/// on a concrete table, so any read-only mapping can back a checkout.
pub trait ToolLookup {
    /// Returns the tool for `code`, or `None` if no such tool exists.
    fn resolve(&self, code: &str) -> Option<&Tool>;
}

impl ToolLookup for HashMap<String, Tool> {
    fn resolve(&self, code: &str) -> Option<&Tool> {
        self.get(code)
    }
}

/// A read-only set of rentable tools keyed by code.
///
/// # Example
///
/// ```
/// use tool_rental::config::{ToolCatalog, ToolLookup};
///
/// let catalog = ToolCatalog::standard();
/// assert_eq!(catalog.len(), 4);
/// assert_eq!(catalog.resolve("LADW").unwrap().brand, "Werner");
/// assert!(catalog.resolve("ladw").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolCatalog {
    tools: BTreeMap<String, Tool>,
}

impl ToolCatalog {
    /// Builds a catalog, rejecting empty or duplicate codes.
    pub fn from_tools(tools: impl IntoIterator<Item = Tool>) -> RentalResult<Self> {
        let mut by_code = BTreeMap::new();

        for tool in tools {
            if tool.code.trim().is_empty() {
                return Err(RentalError::InvalidCatalog {
                    message: format!("tool with brand '{}' has an empty code", tool.brand),
                });
            }
            if tool.policy.daily_rate.is_sign_negative() {
                return Err(RentalError::InvalidCatalog {
                    message: format!("tool '{}' has a negative daily rate", tool.code),
                });
            }
            if by_code.contains_key(&tool.code) {
                return Err(RentalError::InvalidCatalog {
                    message: format!("duplicate tool code '{}'", tool.code),
                });
            }
            by_code.insert(tool.code.clone(), tool);
        }

        Ok(Self { tools: by_code })
    }

    /// The built-in catalog of four tools.
    pub fn standard() -> Self {
        let tools = [
            Tool::new("CHNS", ToolCategory::Chainsaw, "Stihl"),
            Tool::new("LADW", ToolCategory::Ladder, "Werner"),
            Tool::new("JAKD", ToolCategory::Jackhammer, "DeWalt"),
            Tool::new("JAKR", ToolCategory::Jackhammer, "Ridgid"),
        ];
        Self {
            tools: tools
                .into_iter()
                .map(|tool| (tool.code.clone(), tool))
                .collect(),
        }
    }

    /// Returns the tool for `code`.
    pub fn get(&self, code: &str) -> Option<&Tool> {
        self.tools.get(code)
    }

    /// Iterates all tools in code order.
    pub fn tools(&self) -> impl Iterator<Item = &Tool> {
        self.tools.values()
    }

    /// Number of tools in the catalog.
    pub fn len(&self) -> usize {
        self.tools.len()
    }

    /// Whether the catalog has no tools.
    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

impl ToolLookup for ToolCatalog {
    fn resolve(&self, code: &str) -> Option<&Tool> {
        self.get(code)
    }
}
