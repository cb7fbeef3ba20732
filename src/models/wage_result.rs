//! Daily wage result models.
//!
//! This module contains the [`DailyWageResult`] type and the structures that
//! make up its audit trail: [`Multiplier`], [`PayCategory`], [`TrailItem`]
//! and [`CalculationTrail`]. Amounts are kept at full decimal precision;
//! rounding happens only when rendering.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Rounds a value to 2 decimal places, midpoint away from zero.
///
/// # Example
///
/// ```
/// use wage_engine::models::round_2dp;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// assert_eq!(round_2dp(Decimal::from_str("0.125").unwrap()), Decimal::from_str("0.13").unwrap());
/// ```
pub fn round_2dp(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// An exact rational pay multiplier such as 4/3.
///
/// Applying a multiplier multiplies before dividing so thirds never pass
/// through a truncated decimal fraction.
///
/// # Example
///
/// ```
/// use wage_engine::models::Multiplier;
/// use rust_decimal::Decimal;
///
/// let pay = Multiplier::FOUR_THIRDS.apply(Decimal::from(150), Decimal::from(2));
/// assert_eq!(pay, Decimal::from(400));
/// assert_eq!(Multiplier::FOUR_THIRDS.to_string(), "4/3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Multiplier {
    /// Numerator of the multiplier.
    pub numerator: u32,
    /// Denominator of the multiplier.
    pub denominator: u32,
}

impl Multiplier {
    /// Straight time.
    pub const ONE: Self = Self::new(1, 1);
    /// Double time.
    pub const DOUBLE: Self = Self::new(2, 1);
    /// First overtime tier.
    pub const FOUR_THIRDS: Self = Self::new(4, 3);
    /// Second overtime tier.
    pub const FIVE_THIRDS: Self = Self::new(5, 3);
    /// Rest-day hours beyond a full day.
    pub const EIGHT_THIRDS: Self = Self::new(8, 3);

    /// Creates a multiplier. The denominator must be nonzero.
    pub const fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Returns `rate × hours × numerator / denominator`.
    pub fn apply(&self, rate: Decimal, hours: Decimal) -> Decimal {
        rate * hours * Decimal::from(self.numerator) / Decimal::from(self.denominator)
    }
}

impl std::fmt::Display for Multiplier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.denominator == 1 {
            write!(f, "{}", self.numerator)
        } else {
            write!(f, "{}/{}", self.numerator, self.denominator)
        }
    }
}

/// The statutory category of a trail line item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayCategory {
    /// Regular-day hours up to the daily limit.
    NormalTime,
    /// Regular-day overtime, first two hours.
    WeekdayOvertimeFirstTwoHours,
    /// Regular-day overtime beyond two hours.
    WeekdayOvertimeAfterTwoHours,
    /// Rest-day hours 1-2.
    RestDayFirstTwoHours,
    /// Rest-day hours 3-8.
    RestDayThirdToEighthHour,
    /// Rest-day hours beyond 8.
    RestDayBeyondEightHours,
    /// Holiday minimum of one day's wage.
    HolidayDailyWage,
    /// Holiday overtime beyond 8 hours, first two hours.
    HolidayOvertimeFirstTwoHours,
    /// Holiday overtime beyond 8 hours, after two hours.
    HolidayOvertimeAfterTwoHours,
    /// Regular day off: one day's wage regardless of hours.
    RegularOffDailyWage,
    /// Regular day off: hours beyond 8 at double time.
    RegularOffExcessHours,
    /// Regular day off: compensatory leave day paid out in cash.
    RegularOffCompensatoryLeave,
}

impl PayCategory {
    /// Human-readable label used in rendered trails.
    pub fn description(&self) -> &'static str {
        match self {
            PayCategory::NormalTime => "regular day, normal hours",
            PayCategory::WeekdayOvertimeFirstTwoHours => "regular day overtime 1-2h",
            PayCategory::WeekdayOvertimeAfterTwoHours => "regular day overtime >2h",
            PayCategory::RestDayFirstTwoHours => "rest day 1-2h",
            PayCategory::RestDayThirdToEighthHour => "rest day 3-8h",
            PayCategory::RestDayBeyondEightHours => "rest day >8h",
            PayCategory::HolidayDailyWage => {
                "holiday, at least one day's wage regardless of hours"
            }
            PayCategory::HolidayOvertimeFirstTwoHours => "holiday overtime 1-2h",
            PayCategory::HolidayOvertimeAfterTwoHours => "holiday overtime >2h",
            PayCategory::RegularOffDailyWage => {
                "regular day off, at least one day's wage regardless of hours"
            }
            PayCategory::RegularOffExcessHours => "regular day off >8h",
            PayCategory::RegularOffCompensatoryLeave => {
                "regular day off, compensatory leave paid out"
            }
        }
    }
}

/// One line of a calculation trail: `rate × hours × multiplier = amount`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrailItem {
    /// The pay category of this line.
    pub category: PayCategory,
    /// Human-readable description of the line.
    pub description: String,
    /// Hourly rate applied.
    pub hourly_rate: Decimal,
    /// Hours covered by this line.
    pub hours: Decimal,
    /// Multiplier applied to the rate.
    pub multiplier: Multiplier,
    /// Resulting amount, full precision.
    pub amount: Decimal,
}

impl TrailItem {
    /// Builds a line, computing the amount from rate, hours and multiplier.
    pub fn new(
        category: PayCategory,
        hourly_rate: Decimal,
        hours: Decimal,
        multiplier: Multiplier,
    ) -> Self {
        Self {
            category,
            description: category.description().to_string(),
            hourly_rate,
            hours,
            multiplier,
            amount: multiplier.apply(hourly_rate, hours),
        }
    }

    /// Renders the line, e.g. `150.00 × 2 × 4/3 (regular day overtime 1-2h) = 400.00`.
    pub fn render(&self) -> String {
        let multiplier = if self.multiplier == Multiplier::ONE {
            String::new()
        } else {
            format!(" × {}", self.multiplier)
        };
        format!(
            "{:.2} × {}{} ({}) = {:.2}",
            round_2dp(self.hourly_rate),
            self.hours.normalize(),
            multiplier,
            self.description,
            round_2dp(self.amount)
        )
    }
}

/// Ordered audit trail explaining how a daily wage was derived.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CalculationTrail {
    /// Line items in the order they were applied.
    pub items: Vec<TrailItem>,
    /// A note for trails without line items (e.g. no payable hours).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Sum of all item amounts.
    pub total: Decimal,
}

/// Trail note used when a day has nothing to pay.
pub const NO_PAYABLE_HOURS_NOTE: &str = "no payable hours";

impl CalculationTrail {
    /// Builds a trail from items; the total is their sum.
    pub fn from_items(items: Vec<TrailItem>) -> Self {
        let total = items.iter().map(|item| item.amount).sum();
        Self {
            items,
            note: None,
            total,
        }
    }

    /// An empty trail carrying only a note.
    pub fn with_note(note: impl Into<String>) -> Self {
        Self {
            items: Vec::new(),
            note: Some(note.into()),
            total: Decimal::ZERO,
        }
    }

    /// Renders the trail as one line, ending with the total.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_engine::models::{CalculationTrail, Multiplier, PayCategory, TrailItem};
    /// use rust_decimal::Decimal;
    ///
    /// let trail = CalculationTrail::from_items(vec![TrailItem::new(
    ///     PayCategory::RestDayFirstTwoHours,
    ///     Decimal::from(150),
    ///     Decimal::from(2),
    ///     Multiplier::FOUR_THIRDS,
    /// )]);
    /// assert_eq!(
    ///     trail.render(),
    ///     "150.00 × 2 × 4/3 (rest day 1-2h) = 400.00; Total = 400.00"
    /// );
    /// ```
    pub fn render(&self) -> String {
        if self.items.is_empty() {
            return self
                .note
                .clone()
                .unwrap_or_else(|| NO_PAYABLE_HOURS_NOTE.to_string());
        }

        let mut parts: Vec<String> = self.items.iter().map(TrailItem::render).collect();
        parts.push(format!("Total = {:.2}", round_2dp(self.total)));
        parts.join("; ")
    }
}

/// Hours for a day split by statutory category.
///
/// `net_hours == normal_hours + overtime_hours`; `rest_hours` is the break
/// time deducted before the split.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct HourBreakdown {
    /// Hours paid as normal time (regular days only).
    pub normal_hours: Decimal,
    /// Hours classified as overtime.
    pub overtime_hours: Decimal,
    /// Break hours deducted from the punched span.
    pub rest_hours: Decimal,
    /// Payable hours.
    pub net_hours: Decimal,
}

/// Payable hours after break deduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct EffectiveHoursResult {
    /// Worked span minus breaks, in hours, rounded to 2 decimal places.
    pub effective_hours: Decimal,
    /// Minutes of the span that fell inside break windows.
    pub total_break_minutes: u32,
}

impl EffectiveHoursResult {
    /// Break minutes expressed in hours, rounded to 2 decimal places.
    pub fn break_hours(&self) -> Decimal {
        round_2dp(Decimal::from(self.total_break_minutes) / Decimal::from(60))
    }
}

/// A single day's wage with its hour breakdown and audit trail.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyWageResult {
    /// The day's pay, full precision.
    pub daily_salary: Decimal,
    /// How the pay was derived.
    pub trail: CalculationTrail,
    /// Hours by category.
    pub hour_breakdown: HourBreakdown,
}

impl DailyWageResult {
    /// A zero-pay day with the "no payable hours" note.
    pub fn no_payable_hours() -> Self {
        Self {
            daily_salary: Decimal::ZERO,
            trail: CalculationTrail::with_note(NO_PAYABLE_HOURS_NOTE),
            hour_breakdown: HourBreakdown::default(),
        }
    }

    /// The daily salary rounded for display.
    pub fn rounded_salary(&self) -> Decimal {
        round_2dp(self.daily_salary)
    }
}

/// Output of the punch-to-wage pipeline: the break deduction and the wage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchWageResult {
    /// Effective hours and deducted break minutes.
    pub effective: EffectiveHoursResult,
    /// The day's wage.
    pub wage: DailyWageResult,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_multiplier_apply_is_exact_for_thirds() {
        assert_eq!(Multiplier::FIVE_THIRDS.apply(dec("150"), dec("6")), dec("1500"));
        assert_eq!(Multiplier::EIGHT_THIRDS.apply(dec("150"), dec("1")), dec("400"));
    }

    #[test]
    fn test_multiplier_display() {
        assert_eq!(Multiplier::ONE.to_string(), "1");
        assert_eq!(Multiplier::DOUBLE.to_string(), "2");
        assert_eq!(Multiplier::EIGHT_THIRDS.to_string(), "8/3");
    }

    #[test]
    fn test_trail_item_amount_computed() {
        let item = TrailItem::new(
            PayCategory::WeekdayOvertimeFirstTwoHours,
            dec("125"),
            dec("1.5"),
            Multiplier::FOUR_THIRDS,
        );
        assert_eq!(item.amount, dec("250"));
        assert_eq!(item.description, "regular day overtime 1-2h");
    }

    #[test]
    fn test_trail_item_render_omits_unit_multiplier() {
        let item = TrailItem::new(PayCategory::NormalTime, dec("150"), dec("8"), Multiplier::ONE);
        assert_eq!(item.render(), "150.00 × 8 (regular day, normal hours) = 1200.00");
    }

    #[test]
    fn test_trail_total_sums_items() {
        let trail = CalculationTrail::from_items(vec![
            TrailItem::new(PayCategory::NormalTime, dec("150"), dec("8"), Multiplier::ONE),
            TrailItem::new(
                PayCategory::WeekdayOvertimeFirstTwoHours,
                dec("150"),
                dec("2"),
                Multiplier::FOUR_THIRDS,
            ),
        ]);
        assert_eq!(trail.total, dec("1600"));
        assert!(trail.render().ends_with("Total = 1600.00"));
    }

    #[test]
    fn test_empty_trail_renders_note() {
        let trail = CalculationTrail::with_note(NO_PAYABLE_HOURS_NOTE);
        assert_eq!(trail.render(), "no payable hours");
        assert_eq!(trail.total, Decimal::ZERO);
    }

    #[test]
    fn test_pay_category_serialization() {
        let json = serde_json::to_string(&PayCategory::RegularOffCompensatoryLeave).unwrap();
        assert_eq!(json, "\"regular_off_compensatory_leave\"");
    }

    #[test]
    fn test_break_hours_rounds() {
        let effective = EffectiveHoursResult {
            effective_hours: Decimal::ZERO,
            total_break_minutes: 20,
        };
        assert_eq!(effective.break_hours(), dec("0.33"));
    }

    #[test]
    fn test_no_payable_hours_is_all_zero() {
        let result = DailyWageResult::no_payable_hours();
        assert_eq!(result.daily_salary, Decimal::ZERO);
        assert_eq!(result.hour_breakdown, HourBreakdown::default());
        assert_eq!(result.trail.note.as_deref(), Some("no payable hours"));
    }

    #[test]
    fn test_trail_serialization_skips_missing_note() {
        let trail = CalculationTrail::from_items(vec![]);
        let json = serde_json::to_string(&trail).unwrap();
        assert!(!json.contains("note"));
    }
}
