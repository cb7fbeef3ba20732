//! Request types for the wage engine API.
//!
//! This module defines the JSON request bodies for the `/daily`, `/monthly`
//! and `/export` endpoints.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{AttendanceRecord, Employee};

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// Display name.
    #[serde(default)]
    pub name: Option<String>,
    /// Monthly base salary; the policy default applies when omitted.
    #[serde(default)]
    pub salary: Option<Decimal>,
}

impl From<EmployeeRequest> for Employee {
    fn from(req: EmployeeRequest) -> Self {
        Employee {
            id: req.id,
            name: req.name,
            salary: req.salary,
        }
    }
}

/// Request body for the `/daily` endpoint: a single punched day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DailyWageRequest {
    /// The employee being paid.
    pub employee: EmployeeRequest,
    /// The calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// Punch-in clock time, `HH:MM`.
    pub punch_in_time: String,
    /// Punch-out clock time, `HH:MM`.
    pub punch_out_time: String,
    /// Whether the day is flagged as a holiday.
    #[serde(default)]
    pub is_holiday: bool,
}

/// Request body for the `/monthly` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonthlyWageRequest {
    /// The employee being paid.
    pub employee: EmployeeRequest,
    /// The month's attendance records.
    pub records: Vec<AttendanceRecord>,
}

/// Request body for the `/export` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportRequest {
    /// The employee being paid.
    pub employee: EmployeeRequest,
    /// Export year.
    pub year: i32,
    /// Export month, 1-12.
    pub month: u32,
    /// Attendance records; entries outside the month are ignored.
    #[serde(default)]
    pub records: Vec<AttendanceRecord>,
}
