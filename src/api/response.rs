//! Response types for the wage engine API.
//!
//! This module defines the success bodies for each endpoint, the error
//! response structure, and the mapping from engine errors to HTTP statuses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::calculation::DayType;
use crate::error::EngineError;
use crate::models::{DailyWageResult, MonthlyAggregate, MonthlyTotals};

/// Response body for the `/daily` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWageResponse {
    /// Employee identifier.
    pub employee_id: String,
    /// The calendar date.
    pub date: NaiveDate,
    /// Day type the wage was computed under.
    pub day_type: DayType,
    /// Hourly rate, full precision.
    pub hourly_rate: Decimal,
    /// Payable hours after break deduction.
    pub effective_hours: Decimal,
    /// Minutes deducted for breaks.
    pub total_break_minutes: u32,
    /// Daily salary rounded to 2 decimal places.
    pub daily_salary: Decimal,
    /// Full wage result with breakdown and structured trail.
    pub wage: DailyWageResult,
    /// The trail rendered as one line.
    pub trail: String,
}

/// Response body for the `/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyWageResponse {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// Version of the engine that produced the result.
    pub engine_version: String,
    /// Employee identifier.
    pub employee_id: String,
    /// Monthly base salary used.
    pub monthly_salary: Decimal,
    /// Hourly rate, full precision.
    pub hourly_rate: Decimal,
    /// Per-day results, full-precision totals and skipped records.
    pub aggregate: MonthlyAggregate,
    /// Totals rounded to 2 decimal places.
    pub totals: MonthlyTotals,
    /// Rendered trail log, one line per day.
    pub trail_log: Vec<String>,
    /// Base salary plus total daily wages, rounded to 2 decimal places.
    pub total_compensation: Decimal,
    /// Calculation time in microseconds.
    pub duration_us: u64,
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
    /// Creates a new API error.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: None,
        }
    }

    /// Creates a new API error with details.
    pub fn with_details(
        code: impl Into<String>,
        message: impl Into<String>,
        details: impl Into<String>,
    ) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            details: Some(details.into()),
        }
    }

    /// Creates a validation error response.
    pub fn validation_error(message: impl Into<String>) -> Self {
        Self::new("VALIDATION_ERROR", message)
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

impl ApiErrorResponse {
    fn bad_request(error: ApiError) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            error,
        }
    }

    fn internal(error: ApiError) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            error,
        }
    }
}

impl IntoResponse for ApiErrorResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.error)).into_response()
    }
}

impl From<EngineError> for ApiErrorResponse {
    fn from(error: EngineError) -> Self {
        let message = error.to_string();
        match error {
            EngineError::ConfigNotFound { .. } | EngineError::ConfigParseError { .. } => {
                Self::internal(ApiError::with_details(
                    "CONFIG_ERROR",
                    "Configuration error",
                    message,
                ))
            }
            EngineError::InvalidBreakSchedule { .. } => Self::internal(ApiError::with_details(
                "CONFIG_ERROR",
                "Invalid break schedule",
                message,
            )),
            EngineError::InvalidPunchTime { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_PUNCH_TIME",
                message,
                "Punch times must be HH:MM",
            )),
            EngineError::InvalidDate { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_DATE",
                message,
                "Dates must be YYYY-MM-DD",
            )),
            EngineError::InvalidHours { .. } => {
                Self::bad_request(ApiError::new("INVALID_HOURS", message))
            }
            EngineError::InvalidHourlyRate { .. } => {
                Self::bad_request(ApiError::new("INVALID_HOURLY_RATE", message))
            }
            EngineError::InvalidEmployee { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_EMPLOYEE",
                message,
                "The employee data contains invalid information",
            )),
            EngineError::InvalidPeriod { .. } => Self::bad_request(ApiError::with_details(
                "INVALID_PERIOD",
                message,
                "Month must be between 1 and 12",
            )),
        }
    }
}
