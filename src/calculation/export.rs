//! Monthly export.
//!
//! Lays a month's aggregate out as three tables: a calendar with one row
//! per day of the month, a trail table with one row per computed day, and
//! a summary. The tables are plain serializable rows; rendering them to a
//! spreadsheet or CSV is left to the caller.

use std::collections::BTreeMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::WagePolicy;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    AttendanceRecord, DailyEntry, Employee, MonthlyAggregate, SkippedRecord, parse_date,
    round_2dp,
};

use super::DayType;
use super::monthly_aggregate::aggregate_month;

const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// One calendar day of the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarRow {
    /// The calendar date.
    pub date: NaiveDate,
    /// Short weekday label, e.g. `Mon`.
    pub weekday: String,
    /// Punch-in as recorded, if any.
    pub punch_in: Option<String>,
    /// Punch-out as recorded, if any.
    pub punch_out: Option<String>,
    /// Day type the wage was computed under; `None` when not a working day.
    pub day_type: Option<DayType>,
    /// Punched span before break deduction.
    pub raw_hours: Decimal,
    /// Payable hours after break deduction.
    pub effective_hours: Decimal,
    /// Break hours deducted.
    pub break_hours: Decimal,
    /// Normal hours.
    pub normal_hours: Decimal,
    /// Overtime hours.
    pub overtime_hours: Decimal,
    /// Daily salary, rounded to 2 decimal places.
    pub daily_salary: Decimal,
    /// The record's free-text reason.
    pub note: String,
}

/// One computed day's explanation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailRow {
    /// The calendar date.
    pub date: NaiveDate,
    /// Rendered calculation trail.
    pub description: String,
    /// Daily salary, rounded to 2 decimal places.
    pub daily_salary: Decimal,
}

/// Month-level figures for the export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSummary {
    /// Employee identifier.
    pub employee_id: String,
    /// Employee display name.
    pub employee_name: String,
    /// Export year.
    pub year: i32,
    /// Export month, 1-12.
    pub month: u32,
    /// Monthly base salary.
    pub base_monthly_salary: Decimal,
    /// Hourly rate, rounded to 4 decimal places.
    pub hourly_rate: Decimal,
    /// Sum of punched spans before deduction.
    pub total_raw_hours: Decimal,
    /// Sum of payable hours.
    pub total_net_hours: Decimal,
    /// Sum of break hours deducted.
    pub total_rest_hours: Decimal,
    /// Sum of normal hours.
    pub total_normal_hours: Decimal,
    /// Sum of overtime hours.
    pub total_overtime_hours: Decimal,
    /// Sum of daily salaries, rounded to 2 decimal places.
    pub total_wage: Decimal,
}

/// A month laid out for export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthlyExport {
    /// Month-level figures.
    pub summary: ExportSummary,
    /// One row per calendar day.
    pub calendar: Vec<CalendarRow>,
    /// One row per computed day.
    pub trail: Vec<TrailRow>,
    /// Records that could not be used.
    pub skipped: Vec<SkippedRecord>,
}

impl MonthlyExport {
    /// A file name stem such as `Lin-2025-03`, with path-unsafe characters
    /// removed and whitespace replaced by underscores.
    pub fn file_stem(&self) -> String {
        let name: String = self
            .summary
            .employee_name
            .chars()
            .filter(|c| !matches!(c, '/' | '\\' | ':' | '*' | '?' | '"' | '<' | '>' | '|'))
            .collect();
        let name = name.split_whitespace().collect::<Vec<_>>().join("_");
        let name = if name.is_empty() {
            "unknown".to_string()
        } else {
            name
        };
        format!("{}-{}-{:02}", name, self.summary.year, self.summary.month)
    }
}

/// Builds the export for one employee and month.
///
/// Records are keyed by date; when a date appears more than once the last
/// record wins. Records dated outside the month are ignored. Records with an
/// unparseable date are reported in `skipped`.
///
/// # Errors
///
/// - [`EngineError::InvalidPeriod`] if `year`/`month` is not a valid month
/// - [`EngineError::InvalidEmployee`] if the employee's salary is not positive
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::build_monthly_export;
/// use wage_engine::config::WagePolicy;
/// use wage_engine::models::Employee;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: Some("Lin".to_string()),
///     salary: Some(Decimal::from(36000)),
/// };
///
/// let export = build_monthly_export(2024, 2, &employee, &[], &WagePolicy::default()).unwrap();
///
/// assert_eq!(export.calendar.len(), 29);
/// assert_eq!(export.summary.hourly_rate, Decimal::from(150));
/// assert_eq!(export.file_stem(), "Lin-2024-02");
/// ```
pub fn build_monthly_export(
    year: i32,
    month: u32,
    employee: &Employee,
    records: &[AttendanceRecord],
    policy: &WagePolicy,
) -> EngineResult<MonthlyExport> {
    let first_day =
        NaiveDate::from_ymd_opt(year, month, 1).ok_or(EngineError::InvalidPeriod { year, month })?;
    let base_monthly_salary = employee.monthly_salary(policy)?;
    let hourly_rate = employee.hourly_rate(policy)?;

    let mut by_date: BTreeMap<NaiveDate, &AttendanceRecord> = BTreeMap::new();
    let mut undated: Vec<AttendanceRecord> = Vec::new();
    for record in records {
        match parse_date(&record.date) {
            Ok(date) if date.year() == year && date.month() == month => {
                by_date.insert(date, record);
            }
            Ok(date) => debug!(date = %date, "Record outside export period ignored"),
            Err(_) => undated.push(record.clone()),
        }
    }

    let month_records: Vec<AttendanceRecord> = by_date
        .values()
        .map(|r| (*r).clone())
        .chain(undated)
        .collect();
    let aggregate = aggregate_month(&month_records, hourly_rate, policy)?;

    let calendar: Vec<CalendarRow> = first_day
        .iter_days()
        .take_while(|date| date.month() == month)
        .map(|date| calendar_row(date, by_date.get(&date).copied(), &aggregate))
        .collect();

    let trail = aggregate
        .days
        .iter()
        .map(|day| TrailRow {
            date: day.date,
            description: day.wage.trail.render(),
            daily_salary: day.wage.rounded_salary(),
        })
        .collect();

    let totals = aggregate.totals.rounded();
    let summary = ExportSummary {
        employee_id: employee.id.clone(),
        employee_name: employee.display_name().to_string(),
        year,
        month,
        base_monthly_salary,
        hourly_rate: hourly_rate.round_dp(4),
        total_raw_hours: round_2dp(aggregate.days.iter().map(raw_hours).sum()),
        total_net_hours: totals.net_hours,
        total_rest_hours: totals.rest_hours,
        total_normal_hours: totals.normal_hours,
        total_overtime_hours: totals.overtime_hours,
        total_wage: totals.total_wage,
    };

    Ok(MonthlyExport {
        summary,
        calendar,
        trail,
        skipped: aggregate.skipped,
    })
}

fn raw_hours(day: &DailyEntry) -> Decimal {
    Decimal::from(day.span_minutes()) / MINUTES_PER_HOUR
}

fn calendar_row(
    date: NaiveDate,
    record: Option<&AttendanceRecord>,
    aggregate: &MonthlyAggregate,
) -> CalendarRow {
    let recorded = |value: Option<&String>| {
        value
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
    };

    let mut row = CalendarRow {
        date,
        weekday: date.format("%a").to_string(),
        punch_in: record.and_then(|r| recorded(r.punch_in_time.as_ref())),
        punch_out: record.and_then(|r| recorded(r.punch_out_time.as_ref())),
        day_type: None,
        raw_hours: Decimal::ZERO,
        effective_hours: Decimal::ZERO,
        break_hours: Decimal::ZERO,
        normal_hours: Decimal::ZERO,
        overtime_hours: Decimal::ZERO,
        daily_salary: Decimal::ZERO,
        note: record.map(|r| r.reason.clone()).unwrap_or_default(),
    };

    if let Some(day) = aggregate.day(date) {
        let breakdown = &day.wage.hour_breakdown;
        row.day_type = Some(day.day_type);
        row.raw_hours = round_2dp(raw_hours(day));
        row.effective_hours = day.effective.effective_hours;
        row.break_hours = breakdown.rest_hours;
        row.normal_hours = round_2dp(breakdown.normal_hours);
        row.overtime_hours = round_2dp(breakdown.overtime_hours);
        row.daily_salary = day.wage.rounded_salary();
    }

    row
}
