//! Day type wage calculation.
//!
//! Converts a day's effective hours into pay according to its day type.
//!
//! ## Rate Structure
//!
//! | Day type | Pay |
//! |---|---|
//! | Normal | 8h at 1×, then 2h at 4/3×, remainder at 5/3× |
//! | Rest day | 2h at 4/3×, next 6h at 5/3×, remainder at 8/3× |
//! | Holiday | 8h at 1× regardless of hours, then 2h at 4/3×, remainder at 5/3× |
//! | Regular day off | 8h at 1× regardless of hours, excess at 2×, plus 8h at 1× compensatory leave |
//!
//! On every day type except a normal day, all worked hours count as overtime.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{EngineError, EngineResult};
use crate::models::{
    CalculationTrail, DailyWageResult, HourBreakdown, Multiplier, PayCategory, TrailItem,
};

use super::DayType;

/// Hours in a standard working day.
pub const NORMAL_WORK_HOURS: Decimal = Decimal::from_parts(8, 0, 0, false, 0);

/// Overtime hours paid at the first (4/3) tier.
pub const OVERTIME_TIER_1_HOURS: Decimal = Decimal::from_parts(2, 0, 0, false, 0);

/// Rest-day hours paid at 5/3 after the first tier.
pub const REST_DAY_TIER_2_HOURS: Decimal = Decimal::from_parts(6, 0, 0, false, 0);

/// Most hours a single day can contain.
pub const MAX_DAILY_HOURS: Decimal = Decimal::from_parts(24, 0, 0, false, 0);

/// Largest hourly rate the calculator accepts.
pub const MAX_HOURLY_RATE: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

/// Calculates the wage for one day of `hours` effective hours.
///
/// The trail lists every component in the order it was applied and its
/// total equals `daily_salary`. `rest_hours` is left at zero; the punch
/// pipeline fills it in.
///
/// # Arguments
///
/// * `hours` - Effective hours worked, after break deduction
/// * `hourly_rate` - The employee's hourly rate
/// * `day_type` - The statutory day type selecting the rate structure
///
/// # Returns
///
/// A [`DailyWageResult`] containing:
/// - `daily_salary`: the day's pay at full precision
/// - `trail`: one item per pay component, 1-4 depending on day type and hours
/// - `hour_breakdown`: normal and overtime hours summing to `hours`
///
/// # Errors
///
/// - [`EngineError::InvalidHours`] if `hours` is negative or above [`MAX_DAILY_HOURS`]
/// - [`EngineError::InvalidHourlyRate`] if `hourly_rate` is not positive or
///   above [`MAX_HOURLY_RATE`]
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::{calculate_daily_wage, DayType};
/// use rust_decimal::Decimal;
///
/// let result = calculate_daily_wage(Decimal::from(10), Decimal::from(150), DayType::Normal).unwrap();
///
/// // 8 × 150 + 2 × 150 × 4/3
/// assert_eq!(result.daily_salary, Decimal::from(1600));
/// assert_eq!(result.hour_breakdown.normal_hours, Decimal::from(8));
/// assert_eq!(result.hour_breakdown.overtime_hours, Decimal::from(2));
/// ```
pub fn calculate_daily_wage(
    hours: Decimal,
    hourly_rate: Decimal,
    day_type: DayType,
) -> EngineResult<DailyWageResult> {
    validate_hourly_rate(hourly_rate)?;
    if hours < Decimal::ZERO || hours > MAX_DAILY_HOURS {
        return Err(EngineError::InvalidHours { hours });
    }

    if hours.is_zero() {
        return Ok(DailyWageResult::no_payable_hours());
    }

    let (items, normal_hours) = match day_type {
        DayType::Normal => normal_day_items(hours, hourly_rate),
        DayType::RestDay => (rest_day_items(hours, hourly_rate), Decimal::ZERO),
        DayType::Holiday => (holiday_items(hours, hourly_rate), Decimal::ZERO),
        DayType::RegularOff => (regular_off_items(hours, hourly_rate), Decimal::ZERO),
    };

    let trail = CalculationTrail::from_items(items);
    let hour_breakdown = HourBreakdown {
        normal_hours,
        overtime_hours: hours - normal_hours,
        rest_hours: Decimal::ZERO,
        net_hours: hours,
    };

    debug!(
        day_type = %day_type,
        hours = %hours,
        daily_salary = %trail.total,
        "Daily wage calculated"
    );

    Ok(DailyWageResult {
        daily_salary: trail.total,
        trail,
        hour_breakdown,
    })
}

/// Checks that an hourly rate is positive and no larger than [`MAX_HOURLY_RATE`].
pub(crate) fn validate_hourly_rate(hourly_rate: Decimal) -> EngineResult<()> {
    if hourly_rate <= Decimal::ZERO || hourly_rate > MAX_HOURLY_RATE {
        return Err(EngineError::InvalidHourlyRate { rate: hourly_rate });
    }
    Ok(())
}

/// Splits overtime hours into the 4/3 tier and the remainder.
fn split_tier_1(overtime_hours: Decimal) -> (Decimal, Decimal) {
    let tier_1 = overtime_hours.min(OVERTIME_TIER_1_HOURS);
    (tier_1, overtime_hours - tier_1)
}

fn push_if_positive(
    items: &mut Vec<TrailItem>,
    category: PayCategory,
    rate: Decimal,
    hours: Decimal,
    multiplier: Multiplier,
) {
    if hours > Decimal::ZERO {
        items.push(TrailItem::new(category, rate, hours, multiplier));
    }
}

fn normal_day_items(hours: Decimal, rate: Decimal) -> (Vec<TrailItem>, Decimal) {
    let normal_hours = hours.min(NORMAL_WORK_HOURS);
    let (tier_1, tier_2) = split_tier_1(hours - normal_hours);

    let mut items = Vec::with_capacity(3);
    push_if_positive(&mut items, PayCategory::NormalTime, rate, normal_hours, Multiplier::ONE);
    push_if_positive(
        &mut items,
        PayCategory::WeekdayOvertimeFirstTwoHours,
        rate,
        tier_1,
        Multiplier::FOUR_THIRDS,
    );
    push_if_positive(
        &mut items,
        PayCategory::WeekdayOvertimeAfterTwoHours,
        rate,
        tier_2,
        Multiplier::FIVE_THIRDS,
    );
    (items, normal_hours)
}

fn rest_day_items(hours: Decimal, rate: Decimal) -> Vec<TrailItem> {
    let (tier_1, remaining) = split_tier_1(hours);
    let tier_2 = remaining.min(REST_DAY_TIER_2_HOURS);
    let tier_3 = remaining - tier_2;

    let mut items = Vec::with_capacity(3);
    push_if_positive(
        &mut items,
        PayCategory::RestDayFirstTwoHours,
        rate,
        tier_1,
        Multiplier::FOUR_THIRDS,
    );
    push_if_positive(
        &mut items,
        PayCategory::RestDayThirdToEighthHour,
        rate,
        tier_2,
        Multiplier::FIVE_THIRDS,
    );
    push_if_positive(
        &mut items,
        PayCategory::RestDayBeyondEightHours,
        rate,
        tier_3,
        Multiplier::EIGHT_THIRDS,
    );
    items
}

fn holiday_items(hours: Decimal, rate: Decimal) -> Vec<TrailItem> {
    let excess = (hours - NORMAL_WORK_HOURS).max(Decimal::ZERO);
    let (tier_1, tier_2) = split_tier_1(excess);

    let mut items = vec![TrailItem::new(
        PayCategory::HolidayDailyWage,
        rate,
        NORMAL_WORK_HOURS,
        Multiplier::ONE,
    )];
    push_if_positive(
        &mut items,
        PayCategory::HolidayOvertimeFirstTwoHours,
        rate,
        tier_1,
        Multiplier::FOUR_THIRDS,
    );
    push_if_positive(
        &mut items,
        PayCategory::HolidayOvertimeAfterTwoHours,
        rate,
        tier_2,
        Multiplier::FIVE_THIRDS,
    );
    items
}

fn regular_off_items(hours: Decimal, rate: Decimal) -> Vec<TrailItem> {
    let excess = (hours - NORMAL_WORK_HOURS).max(Decimal::ZERO);

    let mut items = vec![TrailItem::new(
        PayCategory::RegularOffDailyWage,
        rate,
        NORMAL_WORK_HOURS,
        Multiplier::ONE,
    )];
    push_if_positive(
        &mut items,
        PayCategory::RegularOffExcessHours,
        rate,
        excess,
        Multiplier::DOUBLE,
    );
    items.push(TrailItem::new(
        PayCategory::RegularOffCompensatoryLeave,
        rate,
        NORMAL_WORK_HOURS,
        Multiplier::ONE,
    ));
    items
}
