//! Response types for the worklog engine API.
//!
//! Defines the JSON response bodies and the error-response mapping from
//! engine errors to HTTP statuses.

use std::collections::BTreeMap;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::earnings::ShiftTypeBreakdown;
use crate::error::EngineError;
use crate::locale::Locale;
use crate::models::CurrencyConfig;

/// API error response structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiError {
    /// Error code for programmatic handling.
    pub code: String,
    /// Human-readable error message.
    pub message: String,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }

    /// Creates a malformed JSON error response.
    pub fn malformed_json(message: impl Into<String>) -> Self {
        Self::new("MALFORMED_JSON", message)
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

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let (status, code) = match &error {
            EngineError::InvalidShift { .. } => (StatusCode::BAD_REQUEST, "INVALID_SHIFT"),
            EngineError::DuplicateType { .. } => (StatusCode::CONFLICT, "DUPLICATE_TYPE"),
            EngineError::ShiftTypeNotFound { .. } => {
                (StatusCode::NOT_FOUND, "SHIFT_TYPE_NOT_FOUND")
            }
            EngineError::InvalidDate { .. } => (StatusCode::BAD_REQUEST, "INVALID_DATE"),
            EngineError::Storage { .. } => (StatusCode::INTERNAL_SERVER_ERROR, "STORAGE_ERROR"),
        };
        ApiErrorResponse {
            status,
            error: ApiError::new(code, error.to_string()),
        }
    }
}

/// Response body for `GET /calendar/{year}/{month}`.
#[derive(Debug, Serialize)]
pub struct MonthCalendarResponse {
    /// The requested year.
    pub year: i32,
    /// The requested month, 1-12.
    pub month: u32,
    /// Day of month -> assigned shift-type key.
    pub days: BTreeMap<u32, String>,
}

/// Response body for `GET /earnings/{year}/{month}`.
#[derive(Debug, Serialize)]
pub struct MonthEarningsResponse {
    /// The requested year.
    pub year: i32,
    /// The requested month, 1-12.
    pub month: u32,
    /// Total earnings for the month.
    pub total: Decimal,
    /// Per-shift-type aggregation, catalog order, occurring types only.
    pub breakdown: Vec<ShiftTypeBreakdown>,
    /// Day of month -> achievement-tier symbol, for days that earn one.
    pub tiers: BTreeMap<u32, String>,
}

/// Response body for `GET /earnings/{year}`.
#[derive(Debug, Serialize)]
pub struct YearEarningsResponse {
    /// The requested year.
    pub year: i32,
    /// Total earnings for the year.
    pub total: Decimal,
    /// Monthly totals, January first.
    pub months: Vec<Decimal>,
}

/// Response body for the settings endpoints.
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    /// The hourly base rate.
    pub base_rate: Decimal,
    /// Currency display configuration.
    pub currency: CurrencyConfig,
    /// The active locale.
    pub locale: Locale,
}
