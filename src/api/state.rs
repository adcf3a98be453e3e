//! Application state for the tool rental API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::checkout::CheckoutService;
use crate::config::ToolCatalog;

/// Shared application state.
///
/// Holds the checkout service and, through it, the read-only catalog.
#[derive(Clone)]
pub struct AppState {
    service: Arc<CheckoutService<ToolCatalog>>,
}

impl AppState {
    /// Creates a new application state serving the given catalog.
    pub fn new(catalog: ToolCatalog) -> Self {
        Self {
            service: Arc::new(CheckoutService::new(catalog)),
        }
    }

    /// Returns the checkout service.
    pub fn service(&self) -> &CheckoutService<ToolCatalog> {
        &self.service
    }

    /// Returns the tool catalog.
    pub fn catalog(&self) -> &ToolCatalog {
        self.service.lookup()
    }
}
