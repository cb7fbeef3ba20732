//! Monthly aggregate models.
//!
//! A [`MonthlyAggregate`] is built on demand from a month of attendance
//! records and discarded after display or export.

use chrono::{NaiveDate, NaiveTime};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::DayType;

use super::attendance::minutes_since_midnight;
use super::wage_result::{CalculationTrail, DailyWageResult, EffectiveHoursResult, round_2dp};

/// One computed working day within a month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyEntry {
    /// The calendar date.
    pub date: NaiveDate,
    /// Punch-in clock time.
    pub punch_in: NaiveTime,
    /// Punch-out clock time.
    pub punch_out: NaiveTime,
    /// Statutory day type the wage was computed under.
    pub day_type: DayType,
    /// Break deduction for the day.
    pub effective: EffectiveHoursResult,
    /// The day's wage.
    pub wage: DailyWageResult,
}

impl DailyEntry {
    /// Minutes between punch-in and punch-out before breaks, or zero for an
    /// inverted span.
    pub fn span_minutes(&self) -> u32 {
        minutes_since_midnight(self.punch_out).saturating_sub(minutes_since_midnight(self.punch_in))
    }
}

/// A day's explanation in the monthly trail log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyTrailEntry {
    /// The calendar date.
    pub date: NaiveDate,
    /// Punch-in clock time.
    pub punch_in: NaiveTime,
    /// Punch-out clock time.
    pub punch_out: NaiveTime,
    /// Break hours deducted.
    pub break_hours: Decimal,
    /// Payable hours after deduction.
    pub effective_hours: Decimal,
    /// The day's calculation trail.
    pub trail: CalculationTrail,
}

impl DailyTrailEntry {
    /// Renders the entry as a single human-readable line.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_engine::models::{CalculationTrail, DailyTrailEntry};
    /// use chrono::{NaiveDate, NaiveTime};
    /// use rust_decimal::Decimal;
    ///
    /// let entry = DailyTrailEntry {
    ///     date: NaiveDate::from_ymd_opt(2025, 3, 3).unwrap(),
    ///     punch_in: NaiveTime::from_hms_opt(6, 0, 0).unwrap(),
    ///     punch_out: NaiveTime::from_hms_opt(6, 30, 0).unwrap(),
    ///     break_hours: Decimal::new(50, 2),
    ///     effective_hours: Decimal::ZERO,
    ///     trail: CalculationTrail::with_note("no payable hours"),
    /// };
    /// assert_eq!(
    ///     entry.render(),
    ///     "2025-03-03 (06:00-06:30): break deduction 0.50h, net 0.00h, no payable hours"
    /// );
    /// ```
    pub fn render(&self) -> String {
        format!(
            "{} ({}-{}): break deduction {:.2}h, net {:.2}h, {}",
            self.date,
            self.punch_in.format("%H:%M"),
            self.punch_out.format("%H:%M"),
            round_2dp(self.break_hours),
            round_2dp(self.effective_hours),
            self.trail.render()
        )
    }
}

/// A record the aggregator could not use.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedRecord {
    /// The raw date string of the record.
    pub date: String,
    /// Why the record was skipped.
    pub reason: String,
}

/// Monthly sums of hours and pay.
///
/// `net_hours == normal_hours + overtime_hours` and
/// `gross_hours == net_hours + rest_hours`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyTotals {
    /// Total normal hours.
    pub normal_hours: Decimal,
    /// Total overtime hours.
    pub overtime_hours: Decimal,
    /// Total payable hours.
    pub net_hours: Decimal,
    /// Total break hours deducted.
    pub rest_hours: Decimal,
    /// Payable plus break hours.
    pub gross_hours: Decimal,
    /// Total break minutes deducted.
    pub total_break_minutes: u32,
    /// Sum of daily salaries, excluding the monthly base salary.
    pub total_wage: Decimal,
}

impl MonthlyTotals {
    /// Returns a copy with every decimal field rounded to 2 places for display.
    pub fn rounded(&self) -> Self {
        Self {
            normal_hours: round_2dp(self.normal_hours),
            overtime_hours: round_2dp(self.overtime_hours),
            net_hours: round_2dp(self.net_hours),
            rest_hours: round_2dp(self.rest_hours),
            gross_hours: round_2dp(self.gross_hours),
            total_break_minutes: self.total_break_minutes,
            total_wage: round_2dp(self.total_wage),
        }
    }
}

/// The result of folding a month of attendance records.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyAggregate {
    /// Computed working days, in input order.
    pub days: Vec<DailyEntry>,
    /// Monthly totals.
    pub totals: MonthlyTotals,
    /// Explanation log for days with payable or break time, in input order.
    pub trail: Vec<DailyTrailEntry>,
    /// Records that could not be parsed.
    pub skipped: Vec<SkippedRecord>,
}

impl MonthlyAggregate {
    /// Base salary plus the month's total daily wages.
    pub fn total_compensation(&self, monthly_salary: Decimal) -> Decimal {
        monthly_salary + self.totals.total_wage
    }

    /// Renders the trail log, one line per entry.
    pub fn render_trail(&self) -> Vec<String> {
        self.trail.iter().map(DailyTrailEntry::render).collect()
    }

    /// Looks up the computed entry for a date.
    pub fn day(&self, date: NaiveDate) -> Option<&DailyEntry> {
        self.days.iter().find(|d| d.date == date)
    }
}
