//! HTTP API module for the tool rental engine.
//!
//! This module provides the REST endpoints for checking out tools and
//! listing the catalog.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::CheckoutRequest;
pub use response::{ApiError, ApiErrorResponse, CheckoutResponse, ToolSummary};
pub use state::AppState;
