//! Response types for the tool rental API.
//!
//! This module defines the success bodies, the error response structure,
//! and the mapping from [`RentalError`] to HTTP status codes.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::RentalError;
use crate::models::{ObservedHoliday, RentalAgreement, Tool, ToolCategory};

/// Response body for a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckoutResponse {
    /// Unique identifier of this agreement.
    pub agreement_id: Uuid,
    /// When the agreement was produced.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the agreement.
    pub engine_version: String,
    /// The agreement itself.
    pub agreement: RentalAgreement,
    /// Holidays that were not billed.
    pub exempt_holidays: Vec<ObservedHoliday>,
    /// Weekend days that were not billed.
    pub exempt_weekend_days: u32,
    /// The agreement as printed for the customer.
    pub rendered: String,
}

/// One catalog entry as listed by `/tools`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ToolSummary {
    /// The tool code.
    pub code: String,
    /// The tool category.
    pub tool_type: ToolCategory,
    /// The manufacturer.
    pub brand: String,
    /// Charge per billable day.
    pub daily_charge: Decimal,
    /// Whether weekdays are billed. Always true.
    pub weekday_charge: bool,
    /// Whether weekends are billed.
    pub weekend_charge: bool,
    /// Whether holidays are billed.
    pub holiday_charge: bool,
}

impl From<&Tool> for ToolSummary {
    fn from(tool: &Tool) -> Self {
        ToolSummary {
            code: tool.code.clone(),
            tool_type: tool.category,
            brand: tool.brand.clone(),
            daily_charge: tool.policy.daily_rate,
            weekday_charge: true,
            weekend_charge: tool.policy.weekend_charge,
            holiday_charge: tool.policy.holiday_charge,
        }
    }
}

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
    /// Optional details about the error.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

impl ApiError {
    /// Creates an error without details.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Attaches details to the error.
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Maps a rejected `/checkout` body to an error.
    ///
    /// A body missing a required field is a `VALIDATION_ERROR`; a body
    /// sent without a JSON content type is `MISSING_CONTENT_TYPE`;
    /// anything else that fails to parse is `MALFORMED_JSON`.
    pub fn from_rejection(rejection: &JsonRejection) -> Self {
        let message = rejection.body_text();
        let code = match rejection {
            JsonRejection::JsonDataError(_) if message.contains("missing field") => {
                "VALIDATION_ERROR"
            }
            JsonRejection::MissingJsonContentType(_) => "MISSING_CONTENT_TYPE",
            _ => "MALFORMED_JSON",
        };
        Self::new(code, message)
    }
}

/// API error with HTTP status code.
pub struct ApiErrorResponse {
    /// The HTTP status code.
    pub status: StatusCode,
    /// The error body.
    pub error: ApiError,
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<RentalError> for ApiErrorResponse {
    fn from(error: RentalError) -> Self {
        let message = error.to_string();
        match error {
            RentalError::InvalidRentalDays { days } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_RENTAL_DAYS", message)
                    .with_details(format!("Received rental_days = {}", days)),
            },
            RentalError::InvalidDiscount { percent } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("INVALID_DISCOUNT", message)
                    .with_details(format!("Received discount_percent = {}", percent)),
            },
            RentalError::ToolNotFound { code } => ApiErrorResponse {
                status: StatusCode::NOT_FOUND,
                error: ApiError::new("TOOL_NOT_FOUND", message)
                    .with_details(format!("The tool code '{}' is not in the catalog", code)),
            },
            RentalError::DateOutOfRange { .. } => ApiErrorResponse {
                status: StatusCode::BAD_REQUEST,
                error: ApiError::new("DATE_OUT_OF_RANGE", message),
            },
            RentalError::ConfigNotFound { .. }
            | RentalError::ConfigParseError { .. }
            | RentalError::InvalidCatalog { .. } => ApiErrorResponse {
                status: StatusCode::INTERNAL_SERVER_ERROR,
                error: ApiError::new("CONFIG_ERROR", "Configuration error").with_details(message),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_serialization() {
        let error = ApiError::new("TOOL_NOT_FOUND", "No such tool");
        let json = serde_json::to_string(&error).unwrap();
        assert!(json.contains("\"code\":\"TOOL_NOT_FOUND\""));
        assert!(json.contains("\"message\":\"No such tool\""));
        assert!(!json.contains("details"));

        let json = serde_json::to_string(&error.with_details("code 'XXXX'")).unwrap();
        assert!(json.contains("\"details\":\"code 'XXXX'\""));
    }

    #[test]
    fn test_tool_not_found_maps_to_404() {
        let api_error: ApiErrorResponse = RentalError::ToolNotFound {
            code: "XXXX".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::NOT_FOUND);
        assert_eq!(api_error.error.code, "TOOL_NOT_FOUND");
        assert_eq!(
            api_error.error.message,
            "Tool code does not correspond to an existing tool."
        );
    }

    #[test]
    fn test_validation_errors_map_to_400() {
        let days: ApiErrorResponse = RentalError::InvalidRentalDays { days: 0 }.into();
        assert_eq!(days.status, StatusCode::BAD_REQUEST);
        assert_eq!(days.error.code, "INVALID_RENTAL_DAYS");

        let discount: ApiErrorResponse = RentalError::InvalidDiscount { percent: 120 }.into();
        assert_eq!(discount.status, StatusCode::BAD_REQUEST);
        assert_eq!(discount.error.code, "INVALID_DISCOUNT");
        assert_eq!(
            discount.error.details.as_deref(),
            Some("Received discount_percent = 120")
        );
    }

    #[test]
    fn test_config_errors_map_to_500() {
        let api_error: ApiErrorResponse = RentalError::InvalidCatalog {
            message: "duplicate tool code 'JAKR'".to_string(),
        }
        .into();
        assert_eq!(api_error.status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(api_error.error.code, "CONFIG_ERROR");
    }

    #[test]
    fn test_tool_summary_from_tool() {
        let tool = Tool::new("CHNS", ToolCategory::Chainsaw, "Stihl");
        let summary = ToolSummary::from(&tool);
        assert_eq!(summary.code, "CHNS");
        assert_eq!(summary.daily_charge, Decimal::new(149, 2));
        assert!(summary.weekday_charge);
        assert!(!summary.weekend_charge);
        assert!(summary.holiday_charge);
    }
}
