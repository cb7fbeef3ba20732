//! Break-time deduction.
//!
//! Subtracts the portions of a punched span that fall inside the configured
//! meal windows. Both punches are clock times on the same day; a span whose
//! punch-out is not after its punch-in (including overnight shifts) yields
//! zero effective hours and zero break minutes.

use chrono::NaiveTime;
use rust_decimal::Decimal;

use crate::config::BreakSchedule;
use crate::models::{EffectiveHoursResult, minutes_since_midnight, round_2dp};

/// Minutes in an hour, as a decimal divisor.
const MINUTES_PER_HOUR: Decimal = Decimal::from_parts(60, 0, 0, false, 0);

/// Computes payable hours for a punched span after removing break overlap.
///
/// Break minutes are the sum, over every window, of the overlap between
/// the window and `[punch_in, punch_out)`. Effective hours are
/// `max(0, span - breaks) / 60`, rounded to 2 decimal places.
///
/// # Arguments
///
/// * `punch_in` - Clock time the employee punched in
/// * `punch_out` - Clock time the employee punched out, same day
/// * `schedule` - The break windows to deduct
///
/// # Returns
///
/// An [`EffectiveHoursResult`] containing:
/// - `effective_hours`: payable hours, rounded to 2 decimal places
/// - `total_break_minutes`: minutes of the span that fell inside break windows
///
/// Both are zero when `punch_out` is not after `punch_in`.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::compute_effective_hours;
/// use wage_engine::config::BreakSchedule;
/// use chrono::NaiveTime;
/// use rust_decimal::Decimal;
///
/// let schedule = BreakSchedule::default();
/// let result = compute_effective_hours(
///     NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
///     NaiveTime::from_hms_opt(17, 0, 0).unwrap(),
///     &schedule,
/// );
///
/// assert_eq!(result.total_break_minutes, 60);
/// assert_eq!(result.effective_hours, Decimal::from(8));
/// ```
pub fn compute_effective_hours(
    punch_in: NaiveTime,
    punch_out: NaiveTime,
    schedule: &BreakSchedule,
) -> EffectiveHoursResult {
    let start = minutes_since_midnight(punch_in);
    let end = minutes_since_midnight(punch_out);

    if end <= start {
        return EffectiveHoursResult::default();
    }

    let total_break_minutes: u32 = schedule
        .windows()
        .iter()
        .map(|window| {
            let overlap_start = start.max(window.start_minute);
            let overlap_end = end.min(window.end_minute);
            overlap_end.saturating_sub(overlap_start)
        })
        .sum();

    let worked_minutes = (end - start).saturating_sub(total_break_minutes);

    EffectiveHoursResult {
        effective_hours: round_2dp(Decimal::from(worked_minutes) / MINUTES_PER_HOUR),
        total_break_minutes,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BreakWindow;
    use std::str::FromStr;

    fn t(value: &str) -> NaiveTime {
        NaiveTime::parse_from_str(value, "%H:%M").unwrap()
    }

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn compute(punch_in: &str, punch_out: &str) -> EffectiveHoursResult {
        compute_effective_hours(t(punch_in), t(punch_out), &BreakSchedule::default())
    }

    #[test]
    fn test_span_covering_lunch_deducts_one_hour() {
        let result = compute("08:00", "17:00");
        assert_eq!(result.total_break_minutes, 60);
        assert_eq!(result.effective_hours, dec("8"));
    }

    #[test]
    fn test_span_covering_all_three_meals() {
        let result = compute("06:00", "20:00");
        assert_eq!(result.total_break_minutes, 120);
        assert_eq!(result.effective_hours, dec("12"));
    }

    #[test]
    fn test_partial_overlap_counts_only_overlap() {
        let result = compute("12:30", "18:00");
        assert_eq!(result.total_break_minutes, 30);
        assert_eq!(result.effective_hours, dec("5"));
    }

    #[test]
    fn test_span_inside_break_is_all_break() {
        let result = compute("06:00", "06:30");
        assert_eq!(result.total_break_minutes, 30);
        assert_eq!(result.effective_hours, Decimal::ZERO);
    }

    #[test]
    fn test_punch_out_before_punch_in_is_zero() {
        assert_eq!(compute("17:00", "08:00"), EffectiveHoursResult::default());
    }

    #[test]
    fn test_equal_punches_is_zero() {
        assert_eq!(compute("09:00", "09:00"), EffectiveHoursResult::default());
    }

    #[test]
    fn test_overnight_span_is_zero() {
        assert_eq!(compute("22:00", "06:00"), EffectiveHoursResult::default());
    }

    #[test]
    fn test_span_touching_window_edge_has_no_overlap() {
        let result = compute("13:00", "19:00");
        assert_eq!(result.total_break_minutes, 0);
        assert_eq!(result.effective_hours, dec("6"));
    }

    #[test]
    fn test_effective_hours_rounded_to_two_places() {
        // 20 minutes = 0.333... hours
        let result = compute("09:00", "09:20");
        assert_eq!(result.effective_hours, dec("0.33"));
    }

    #[test]
    fn test_empty_schedule_deducts_nothing() {
        let result =
            compute_effective_hours(t("08:00"), t("17:00"), &BreakSchedule::empty());
        assert_eq!(result.total_break_minutes, 0);
        assert_eq!(result.effective_hours, dec("9"));
    }

    #[test]
    fn test_custom_schedule() {
        let schedule =
            BreakSchedule::new(vec![BreakWindow::new("tea", 15 * 60, 15 * 60 + 15)]).unwrap();
        let result = compute_effective_hours(t("14:00"), t("16:00"), &schedule);
        assert_eq!(result.total_break_minutes, 15);
        assert_eq!(result.effective_hours, dec("1.75"));
    }
}
