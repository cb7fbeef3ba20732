//! Calculation logic for the wage engine.
//!
//! This module contains the calculation functions for turning attendance
//! punches into pay: day type classification, break-time deduction, the
//! per-day-type wage rules, the punch-to-wage pipeline, monthly aggregation
//! and the monthly export layout.

mod break_deduction;
mod daily_wage;
mod day_classification;
mod export;
mod monthly_aggregate;
mod punch_pipeline;

pub use break_deduction::compute_effective_hours;
pub use daily_wage::{
    MAX_DAILY_HOURS, MAX_HOURLY_RATE, NORMAL_WORK_HOURS, OVERTIME_TIER_1_HOURS,
    REST_DAY_TIER_2_HOURS, calculate_daily_wage,
};
pub use day_classification::{DayType, DayTypeRule, classify_date, classify_day, day_type_rules};
pub use export::{CalendarRow, ExportSummary, MonthlyExport, TrailRow, build_monthly_export};
pub use monthly_aggregate::aggregate_month;
pub use punch_pipeline::calculate_from_punches;
