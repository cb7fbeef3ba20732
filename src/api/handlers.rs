//! HTTP request handlers for the wage engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use chrono::Utc;
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{
    aggregate_month, build_monthly_export, calculate_from_punches, classify_date,
};
use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, parse_clock_time, parse_date, round_2dp};

use super::request::{DailyWageRequest, ExportRequest, MonthlyWageRequest};
use super::response::{ApiError, ApiErrorResponse, DailyWageResponse, MonthlyWageResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/daily", post(daily_handler))
        .route("/monthly", post(monthly_handler))
        .route("/export", post(export_handler))
        .with_state(state)
}

/// Handler for POST /daily.
///
/// Computes one day's wage from a punch pair.
async fn daily_handler(
    State(state): State<AppState>,
    payload: Result<Json<DailyWageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing daily wage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let start_time = Instant::now();
    match perform_daily(&state, request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                day_type = %result.day_type,
                daily_salary = %result.daily_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Daily wage calculated"
            );
            json_response(result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /monthly.
///
/// Aggregates a month of attendance records for one employee.
async fn monthly_handler(
    State(state): State<AppState>,
    payload: Result<Json<MonthlyWageRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing monthly wage request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    match perform_monthly(&state, request) {
        Ok(result) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %result.employee_id,
                days = result.aggregate.days.len(),
                skipped = result.aggregate.skipped.len(),
                total_compensation = %result.total_compensation,
                duration_us = result.duration_us,
                "Monthly calculation completed successfully"
            );
            json_response(result)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

/// Handler for POST /export.
///
/// Lays out a month as calendar, trail and summary tables.
async fn export_handler(
    State(state): State<AppState>,
    payload: Result<Json<ExportRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing export request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(rejection, correlation_id),
    };

    let employee: Employee = request.employee.into();
    match build_monthly_export(
        request.year,
        request.month,
        &employee,
        &request.records,
        state.policy(),
    ) {
        Ok(export) => {
            info!(
                correlation_id = %correlation_id,
                employee_id = %employee.id,
                file_stem = %export.file_stem(),
                total_wage = %export.summary.total_wage,
                "Export built"
            );
            json_response(export)
        }
        Err(err) => engine_error_response(err, correlation_id),
    }
}

fn perform_daily(state: &AppState, request: DailyWageRequest) -> EngineResult<DailyWageResponse> {
    let employee: Employee = request.employee.into();
    let hourly_rate = state.config().hourly_rate(&employee)?;

    let date = parse_date(&request.date)?;
    let punch_in = parse_clock_time(&request.punch_in_time, "punch_in")?;
    let punch_out = parse_clock_time(&request.punch_out_time, "punch_out")?;
    let day_type = classify_date(date, request.is_holiday);

    let result = calculate_from_punches(
        punch_in,
        punch_out,
        hourly_rate,
        day_type,
        state.policy().break_schedule(),
    )?;

    Ok(DailyWageResponse {
        employee_id: employee.id,
        date,
        day_type,
        hourly_rate,
        effective_hours: result.effective.effective_hours,
        total_break_minutes: result.effective.total_break_minutes,
        daily_salary: result.wage.rounded_salary(),
        trail: result.wage.trail.render(),
        wage: result.wage,
    })
}

fn perform_monthly(
    state: &AppState,
    request: MonthlyWageRequest,
) -> EngineResult<MonthlyWageResponse> {
    let start_time = Instant::now();
    let employee: Employee = request.employee.into();
    let monthly_salary = state.config().monthly_salary(&employee)?;
    let hourly_rate = state.config().hourly_rate(&employee)?;

    let aggregate = aggregate_month(&request.records, hourly_rate, state.policy())?;
    let totals = aggregate.totals.rounded();
    let trail_log = aggregate.render_trail();
    let total_compensation = round_2dp(aggregate.total_compensation(monthly_salary));

    Ok(MonthlyWageResponse {
        calculation_id: Uuid::new_v4(),
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id: employee.id,
        monthly_salary,
        hourly_rate,
        aggregate,
        totals,
        trail_log,
        total_compensation,
        duration_us: start_time.elapsed().as_micros() as u64,
    })
}

fn json_response<T: Serialize>(body: T) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(body),
    )
        .into_response()
}

fn engine_error_response(err: EngineError, correlation_id: Uuid) -> Response {
    warn!(
        correlation_id = %correlation_id,
        error = %err,
        "Calculation failed"
    );
    let api_error: ApiErrorResponse = err.into();
    (
        api_error.status,
        [(header::CONTENT_TYPE, "application/json")],
        Json(api_error.error),
    )
        .into_response()
}

fn rejection_response(rejection: JsonRejection, correlation_id: Uuid) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };
    (
        StatusCode::BAD_REQUEST,
        [(header::CONTENT_TYPE, "application/json")],
        Json(error),
    )
        .into_response()
}
