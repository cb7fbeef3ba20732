//! Punch-to-wage pipeline.
//!
//! Composes break deduction and the day type wage calculation for a single
//! punched day.

use chrono::NaiveTime;
use rust_decimal::Decimal;
use tracing::debug;

use crate::config::BreakSchedule;
use crate::error::EngineResult;
use crate::models::{DailyWageResult, PunchWageResult};

use super::DayType;
use super::break_deduction::compute_effective_hours;
use super::daily_wage::{calculate_daily_wage, validate_hourly_rate};

/// Computes a day's wage directly from its punches.
///
/// Breaks are deducted first. The deducted time is reported as
/// `rest_hours` in the breakdown even when nothing is payable, and
/// `net_hours` always equals the effective hours.
///
/// # Arguments
///
/// * `punch_in` - Clock time the employee punched in
/// * `punch_out` - Clock time the employee punched out, same day
/// * `hourly_rate` - The employee's hourly rate
/// * `day_type` - The statutory day type of the date
/// * `schedule` - The break windows to deduct
///
/// # Errors
///
/// [`crate::error::EngineError::InvalidHourlyRate`] if `hourly_rate` is not
/// positive or exceeds [`super::MAX_HOURLY_RATE`], whether or not the span
/// has payable hours.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::{calculate_from_punches, DayType};
/// use wage_engine::config::BreakSchedule;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let result = calculate_from_punches(
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     Decimal::from(150),
///     DayType::Normal,
///     &BreakSchedule::default(),
/// )
/// .unwrap();
///
/// assert_eq!(result.effective.effective_hours, Decimal::from(8));
/// assert_eq!(result.wage.daily_salary, Decimal::from(1200));
/// assert_eq!(result.wage.hour_breakdown.rest_hours, Decimal::from(1));
/// ```
pub fn calculate_from_punches(
    punch_in: NaiveTime,
    punch_out: NaiveTime,
    hourly_rate: Decimal,
    day_type: DayType,
    schedule: &BreakSchedule,
) -> EngineResult<PunchWageResult> {
    validate_hourly_rate(hourly_rate)?;

    let effective = compute_effective_hours(punch_in, punch_out, schedule);
    let rest_hours = effective.break_hours();

    let mut wage = if effective.effective_hours.is_zero() {
        DailyWageResult::no_payable_hours()
    } else {
        calculate_daily_wage(effective.effective_hours, hourly_rate, day_type)?
    };
    wage.hour_breakdown.rest_hours = rest_hours;
    wage.hour_breakdown.net_hours = effective.effective_hours;

    debug!(
        punch_in = %punch_in.format("%H:%M"),
        punch_out = %punch_out.format("%H:%M"),
        day_type = %day_type,
        effective_hours = %effective.effective_hours,
        break_minutes = effective.total_break_minutes,
        "Punches converted to wage"
    );

    Ok(PunchWageResult { effective, wage })
}
