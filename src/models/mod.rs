//! Core data models for the wage engine.
//!
//! This module contains the domain models used throughout the engine.

mod attendance;
mod employee;
mod monthly;
mod wage_result;

pub use attendance::{
    AttendanceRecord, CLOCK_TIME_FORMAT, DATE_FORMAT, PunchPair, minutes_since_midnight,
    parse_clock_time, parse_date,
};
pub use employee::Employee;
pub use monthly::{DailyEntry, DailyTrailEntry, MonthlyAggregate, MonthlyTotals, SkippedRecord};
pub use wage_result::{
    CalculationTrail, DailyWageResult, EffectiveHoursResult, HourBreakdown, Multiplier,
    NO_PAYABLE_HOURS_NOTE, PayCategory, PunchWageResult, TrailItem, round_2dp,
};
