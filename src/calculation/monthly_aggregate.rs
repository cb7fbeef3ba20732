//! Monthly aggregation.
//!
//! Folds a month of attendance records into per-day results, monthly
//! totals and a trail log. Records without both punches are not working
//! days. Records whose date or times cannot be parsed are reported in
//! [`MonthlyAggregate::skipped`] rather than failing the whole month.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::WagePolicy;
use crate::error::EngineResult;
use crate::models::{
    AttendanceRecord, DailyEntry, DailyTrailEntry, MonthlyAggregate, MonthlyTotals, PunchPair,
    SkippedRecord,
};

use super::daily_wage::validate_hourly_rate;
use super::day_classification::classify_date;
use super::punch_pipeline::calculate_from_punches;

/// Aggregates a month of attendance records.
///
/// Days are processed in input order. Daily salaries are summed at full
/// precision; use [`MonthlyTotals::rounded`] for display.
///
/// # Errors
///
/// [`crate::error::EngineError::InvalidHourlyRate`] if `hourly_rate` is not
/// positive or exceeds [`super::MAX_HOURLY_RATE`]. Bad records never fail
/// the aggregation.
///
/// # Examples
///
/// ```
/// use wage_engine::calculation::aggregate_month;
/// use wage_engine::config::WagePolicy;
/// use wage_engine::models::AttendanceRecord;
/// use rust_decimal::Decimal;
///
/// let records = vec![AttendanceRecord {
///     date: "2025-03-03".to_string(),
///     punch_in_time: Some("08:00".to_string()),
///     punch_out_time: Some("19:00".to_string()),
///     is_holiday: false,
///     reason: String::new(),
/// }];
///
/// let aggregate = aggregate_month(&records, Decimal::from(150), &WagePolicy::default()).unwrap();
///
/// assert_eq!(aggregate.totals.normal_hours, Decimal::from(8));
/// assert_eq!(aggregate.totals.overtime_hours, Decimal::from(2));
/// assert_eq!(aggregate.totals.total_wage, Decimal::from(1600));
/// ```
pub fn aggregate_month(
    records: &[AttendanceRecord],
    hourly_rate: Decimal,
    policy: &WagePolicy,
) -> EngineResult<MonthlyAggregate> {
    validate_hourly_rate(hourly_rate)?;

    let mut aggregate = MonthlyAggregate::default();

    for record in records {
        let punches = match record.to_punch_pair() {
            Ok(Some(punches)) => punches,
            Ok(None) => {
                debug!(date = %record.date, "No punch pair, not a working day");
                continue;
            }
            Err(err) => {
                warn!(date = %record.date, error = %err, "Skipping attendance record");
                aggregate.skipped.push(SkippedRecord {
                    date: record.date.clone(),
                    reason: err.to_string(),
                });
                continue;
            }
        };

        let entry = compute_day(&punches, hourly_rate, policy)?;
        accumulate(&mut aggregate.totals, &entry);

        if entry.effective.effective_hours > Decimal::ZERO || entry.effective.total_break_minutes > 0
        {
            aggregate.trail.push(DailyTrailEntry {
                date: entry.date,
                punch_in: entry.punch_in,
                punch_out: entry.punch_out,
                break_hours: entry.wage.hour_breakdown.rest_hours,
                effective_hours: entry.effective.effective_hours,
                trail: entry.wage.trail.clone(),
            });
        }
        aggregate.days.push(entry);
    }

    let totals = &mut aggregate.totals;
    totals.net_hours = totals.normal_hours + totals.overtime_hours;
    totals.gross_hours = totals.net_hours + totals.rest_hours;

    debug!(
        days = aggregate.days.len(),
        skipped = aggregate.skipped.len(),
        total_wage = %aggregate.totals.total_wage,
        "Month aggregated"
    );

    Ok(aggregate)
}

fn compute_day(
    punches: &PunchPair,
    hourly_rate: Decimal,
    policy: &WagePolicy,
) -> EngineResult<DailyEntry> {
    let day_type = classify_date(punches.date, punches.is_holiday);
    let result = calculate_from_punches(
        punches.punch_in,
        punches.punch_out,
        hourly_rate,
        day_type,
        policy.break_schedule(),
    )?;

    Ok(DailyEntry {
        date: punches.date,
        punch_in: punches.punch_in,
        punch_out: punches.punch_out,
        day_type,
        effective: result.effective,
        wage: result.wage,
    })
}

fn accumulate(totals: &mut MonthlyTotals, entry: &DailyEntry) {
    let breakdown = &entry.wage.hour_breakdown;
    totals.normal_hours += breakdown.normal_hours;
    totals.overtime_hours += breakdown.overtime_hours;
    totals.rest_hours += breakdown.rest_hours;
    totals.total_break_minutes += entry.effective.total_break_minutes;
    totals.total_wage += entry.wage.daily_salary;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculation::DayType;
    use crate::error::EngineError;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn record(date: &str, punch_in: &str, punch_out: &str, is_holiday: bool) -> AttendanceRecord {
        AttendanceRecord {
            date: date.to_string(),
            punch_in_time: Some(punch_in.to_string()),
            punch_out_time: Some(punch_out.to_string()),
            is_holiday,
            reason: String::new(),
        }
    }

    fn aggregate(records: &[AttendanceRecord]) -> MonthlyAggregate {
        aggregate_month(records, dec("150"), &WagePolicy::default()).unwrap()
    }

    #[test]
    fn test_empty_month() {
        let result = aggregate(&[]);
        assert!(result.days.is_empty());
        assert_eq!(result.totals, MonthlyTotals::default());
    }

    #[test]
    fn test_mixed_week() {
        let records = vec![
            // Monday, 10h after lunch
            record("2025-03-03", "08:00", "19:00", false),
            // Saturday rest day, 9h after lunch
            record("2025-03-01", "08:00", "18:00", true),
            // Sunday regular day off, 4h
            record("2025-03-02", "08:00", "12:00", true),
        ];
        let result = aggregate(&records);

        assert_eq!(result.days.len(), 3);
        assert_eq!(result.days[1].day_type, DayType::RestDay);
        assert_eq!(result.days[2].day_type, DayType::RegularOff);

        assert_eq!(result.totals.normal_hours, dec("8"));
        assert_eq!(result.totals.overtime_hours, dec("15"));
        assert_eq!(result.totals.net_hours, dec("23"));
        assert_eq!(result.totals.rest_hours, dec("2"));
        assert_eq!(result.totals.gross_hours, dec("25"));
        assert_eq!(result.totals.total_break_minutes, 120);
        // 1600 + 2300 + 2400
        assert_eq!(result.totals.total_wage, dec("6300"));
    }

    #[test]
    fn test_missing_punches_are_not_working_days() {
        let mut absent = record("2025-03-04", "08:00", "17:00", false);
        absent.punch_out_time = None;
        let mut blank = record("2025-03-05", "08:00", "17:00", false);
        blank.punch_in_time = Some("  ".to_string());

        let result = aggregate(&[absent, blank]);
        assert!(result.days.is_empty());
        assert!(result.skipped.is_empty());
    }

    #[test]
    fn test_unparseable_record_skipped_and_reported() {
        let records = vec![
            record("2025-03-03", "08:00", "17:00", false),
            record("2025-03-04", "8am", "17:00", false),
            record("not-a-date", "08:00", "17:00", false),
        ];
        let result = aggregate(&records);

        assert_eq!(result.days.len(), 1);
        assert_eq!(result.skipped.len(), 2);
        assert_eq!(result.skipped[0].date, "2025-03-04");
        assert!(result.skipped[0].reason.contains("8am"));
        assert_eq!(result.skipped[1].date, "not-a-date");
    }

    #[test]
    fn test_trail_includes_break_only_days() {
        let records = vec![
            record("2025-03-03", "06:00", "06:30", false),
            record("2025-03-04", "18:00", "09:00", false),
        ];
        let result = aggregate(&records);

        assert_eq!(result.days.len(), 2);
        assert_eq!(result.trail.len(), 1);
        assert_eq!(
            result.render_trail(),
            vec!["2025-03-03 (06:00-06:30): break deduction 0.50h, net 0.00h, no payable hours"]
        );
        assert_eq!(result.totals.rest_hours, dec("0.5"));
        assert_eq!(result.totals.total_wage, Decimal::ZERO);
    }

    #[test]
    fn test_totals_consistent_with_days() {
        let records = vec![
            record("2025-03-03", "07:10", "21:40", false),
            record("2025-03-05", "09:00", "12:20", true),
            record("2025-03-08", "05:30", "20:00", true),
        ];
        let result = aggregate(&records);

        let wage_sum: Decimal = result.days.iter().map(|d| d.wage.daily_salary).sum();
        assert_eq!(result.totals.total_wage, wage_sum);
        assert_eq!(
            result.totals.net_hours,
            result.totals.normal_hours + result.totals.overtime_hours
        );
        assert!(result.day(make_date("2025-03-05")).is_some());
    }

    #[test]
    fn test_uses_policy_break_schedule() {
        let policy = WagePolicy::default().with_break_schedule(crate::config::BreakSchedule::empty());
        let records = vec![record("2025-03-03", "08:00", "17:00", false)];
        let result = aggregate_month(&records, dec("150"), &policy).unwrap();
        assert_eq!(result.totals.net_hours, dec("9"));
        assert_eq!(result.totals.rest_hours, Decimal::ZERO);
    }

    #[test]
    fn test_invalid_rate_rejected() {
        let result = aggregate_month(&[], dec("-1"), &WagePolicy::default());
        assert!(matches!(result, Err(EngineError::InvalidHourlyRate { .. })));
    }

    fn full_holiday_month() -> Vec<AttendanceRecord> {
        (1..=31)
            .map(|day| record(&format!("2025-03-{:02}", day), "00:00", "23:59", true))
            .collect()
    }

    #[test]
    fn test_oversized_rate_rejected_before_summing() {
        let result = aggregate_month(&full_holiday_month(), Decimal::MAX, &WagePolicy::default());
        assert!(matches!(result, Err(EngineError::InvalidHourlyRate { .. })));
    }

    #[test]
    fn test_oversized_salary_rejected_before_aggregation() {
        let employee = crate::models::Employee {
            id: "emp_001".to_string(),
            name: None,
            salary: Some(Decimal::MAX),
        };
        let result = employee.hourly_rate(&WagePolicy::default());
        assert!(matches!(result, Err(EngineError::InvalidEmployee { .. })));
    }

    #[test]
    fn test_maximum_salary_month_stays_in_range() {
        let policy = WagePolicy::default();
        let employee = crate::models::Employee {
            id: "emp_001".to_string(),
            name: None,
            salary: Some(crate::config::MAX_MONTHLY_SALARY),
        };
        let rate = employee.hourly_rate(&policy).unwrap();
        let result = aggregate_month(&full_holiday_month(), rate, &policy).unwrap();

        assert_eq!(result.days.len(), 31);
        assert!(result.totals.total_wage > Decimal::ZERO);
        let total = result.total_compensation(crate::config::MAX_MONTHLY_SALARY);
        assert_eq!(total, crate::config::MAX_MONTHLY_SALARY + result.totals.total_wage);
    }
}
