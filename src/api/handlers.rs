//! HTTP request handlers for the tool rental API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use chrono::Utc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::models::RentalRequest;

use super::request::CheckoutRequest;
use super::response::{ApiError, ApiErrorResponse, CheckoutResponse, ToolSummary};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/checkout", post(checkout_handler))
        .route("/tools", get(tools_handler))
        .with_state(state)
}

/// Handler for GET /tools.
///
/// Lists the catalog in tool code order.
async fn tools_handler(State(state): State<AppState>) -> impl IntoResponse {
    let tools: Vec<ToolSummary> = state.catalog().tools().map(ToolSummary::from).collect();
    (StatusCode::OK, Json(tools))
}

/// Handler for POST /checkout.
///
/// Accepts a checkout request and returns the rental agreement.
async fn checkout_handler(
    State(state): State<AppState>,
    payload: Result<Json<CheckoutRequest>, JsonRejection>,
) -> impl IntoResponse {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing checkout request");

    let request: RentalRequest = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => {
            let error = ApiError::from_rejection(&rejection);
            warn!(
                correlation_id = %correlation_id,
                code = %error.code,
                error = %error.message,
                "Checkout body rejected"
            );
            return (
                StatusCode::BAD_REQUEST,
                [(header::CONTENT_TYPE, "application/json")],
                Json(error),
            )
                .into_response();
        }
    };

    let start_time = Instant::now();
    match state.service().checkout_with_details(&request) {
        Ok(outcome) => {
            info!(
                correlation_id = %correlation_id,
                tool_code = %outcome.agreement.tool_code,
                charge_days = outcome.agreement.charge_days,
                final_charge = %outcome.agreement.final_charge,
                duration_us = start_time.elapsed().as_micros(),
                "Checkout completed successfully"
            );
            let response = CheckoutResponse {
                agreement_id: Uuid::new_v4(),
                timestamp: Utc::now(),
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                rendered: outcome.agreement.render(),
                exempt_holidays: outcome.charge_days.holidays,
                exempt_weekend_days: outcome.charge_days.weekend_days,
                agreement: outcome.agreement,
            };
            (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/json")],
                Json(response),
            )
                .into_response()
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                tool_code = %request.tool_code,
                error = %err,
                "Checkout rejected"
            );
            let api_error: ApiErrorResponse = err.into();
            (
                api_error.status,
                [(header::CONTENT_TYPE, "application/json")],
                Json(api_error.error),
            )
                .into_response()
        }
    }
}
