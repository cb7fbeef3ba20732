//! Property tests for the wage calculation core.

use chrono::{NaiveDate, NaiveTime};
use proptest::prelude::*;
use rust_decimal::Decimal;

use wage_engine::calculation::{
    DayType, aggregate_month, calculate_daily_wage, calculate_from_punches,
    compute_effective_hours,
};
use wage_engine::config::{BreakSchedule, WagePolicy};
use wage_engine::models::{AttendanceRecord, round_2dp};

fn day_type_strategy() -> impl Strategy<Value = DayType> {
    prop_oneof![
        Just(DayType::Normal),
        Just(DayType::RestDay),
        Just(DayType::Holiday),
        Just(DayType::RegularOff),
    ]
}

/// Hours in quarter-hour steps from 0 to 16.
fn hours_strategy() -> impl Strategy<Value = Decimal> {
    (0i64..=64).prop_map(|quarters| Decimal::new(quarters * 25, 2))
}

/// Hourly rates from 100.00 to 400.00.
fn rate_strategy() -> impl Strategy<Value = Decimal> {
    (10_000i64..=40_000).prop_map(|cents| Decimal::new(cents, 2))
}

fn clock_time(minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(minute / 60, minute % 60, 0).unwrap()
}

proptest! {
    #[test]
    fn net_hours_split_into_normal_and_overtime(
        hours in hours_strategy(),
        rate in rate_strategy(),
        day_type in day_type_strategy(),
    ) {
        let result = calculate_daily_wage(hours, rate, day_type).unwrap();
        let breakdown = result.hour_breakdown;
        prop_assert_eq!(breakdown.net_hours, hours);
        prop_assert_eq!(breakdown.net_hours, breakdown.normal_hours + breakdown.overtime_hours);
        if day_type != DayType::Normal {
            prop_assert_eq!(breakdown.normal_hours, Decimal::ZERO);
        }
    }

    #[test]
    fn salary_is_non_negative_and_matches_trail(
        hours in hours_strategy(),
        rate in rate_strategy(),
        day_type in day_type_strategy(),
    ) {
        let result = calculate_daily_wage(hours, rate, day_type).unwrap();
        prop_assert!(result.daily_salary >= Decimal::ZERO);
        prop_assert_eq!(result.trail.total, result.daily_salary);
    }

    #[test]
    fn more_hours_never_pay_less(
        hours in hours_strategy(),
        rate in rate_strategy(),
        day_type in day_type_strategy(),
    ) {
        let shorter = calculate_daily_wage(hours, rate, day_type).unwrap();
        let longer = calculate_daily_wage(hours + Decimal::new(25, 2), rate, day_type).unwrap();
        prop_assert!(longer.daily_salary >= shorter.daily_salary);
    }

    #[test]
    fn effective_hours_never_exceed_span(
        start in 0u32..1440,
        end in 0u32..1440,
    ) {
        let result = compute_effective_hours(clock_time(start), clock_time(end), &BreakSchedule::default());
        if end <= start {
            prop_assert_eq!(result.effective_hours, Decimal::ZERO);
            prop_assert_eq!(result.total_break_minutes, 0);
        } else {
            prop_assert!(result.total_break_minutes <= end - start);
            let span_hours = round_2dp(Decimal::from(end - start) / Decimal::from(60));
            prop_assert!(result.effective_hours <= span_hours);
        }
    }

    #[test]
    fn pipeline_is_deterministic(
        start in 0u32..1440,
        end in 0u32..1440,
        rate in rate_strategy(),
        day_type in day_type_strategy(),
    ) {
        let schedule = BreakSchedule::default();
        let first = calculate_from_punches(clock_time(start), clock_time(end), rate, day_type, &schedule).unwrap();
        let second = calculate_from_punches(clock_time(start), clock_time(end), rate, day_type, &schedule).unwrap();
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first.wage.hour_breakdown.net_hours, first.effective.effective_hours);
    }

    #[test]
    fn monthly_totals_are_consistent(
        days in prop::collection::vec((0u32..1440, 0u32..1440, any::<bool>()), 0..31),
        rate in rate_strategy(),
    ) {
        let first_day = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
        let records: Vec<AttendanceRecord> = days
            .iter()
            .enumerate()
            .map(|(i, (start, end, is_holiday))| AttendanceRecord {
                date: (first_day + chrono::Days::new(i as u64)).format("%Y-%m-%d").to_string(),
                punch_in_time: Some(clock_time(*start).format("%H:%M").to_string()),
                punch_out_time: Some(clock_time(*end).format("%H:%M").to_string()),
                is_holiday: *is_holiday,
                reason: String::new(),
            })
            .collect();

        let aggregate = aggregate_month(&records, rate, &WagePolicy::default()).unwrap();
        let totals = aggregate.totals;

        prop_assert_eq!(aggregate.days.len(), records.len());
        prop_assert!(aggregate.skipped.is_empty());
        prop_assert_eq!(totals.net_hours, totals.normal_hours + totals.overtime_hours);
        prop_assert_eq!(totals.gross_hours, totals.net_hours + totals.rest_hours);
        let wage_sum: Decimal = aggregate.days.iter().map(|d| d.wage.daily_salary).sum();
        prop_assert_eq!(totals.total_wage, wage_sum);
    }
}
