//! HTTP API module for the wage engine.
//!
//! This module provides the REST API endpoints for computing daily wages,
//! monthly aggregates and monthly exports from attendance punches.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{DailyWageRequest, EmployeeRequest, ExportRequest, MonthlyWageRequest};
pub use response::{ApiError, ApiErrorResponse, DailyWageResponse, MonthlyWageResponse};
pub use state::AppState;
