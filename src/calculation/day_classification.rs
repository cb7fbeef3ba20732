//! Day type classification.
//!
//! Maps a weekday and holiday flag onto the statutory day type that governs
//! overtime multipliers. The policy is an ordered rule table evaluated
//! first-match-wins, so precedence (Sunday, then Saturday, then any other
//! holiday, then a normal day) is data rather than control flow.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

/// The statutory category of a calendar day.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::DayType;
///
/// assert_eq!(DayType::RegularOff.to_string(), "Regular day off");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DayType {
    /// A regular working day: 8 normal hours, then tiered overtime.
    Normal,
    /// Rest day: every hour is overtime at 4/3, 5/3, 8/3 tiers.
    RestDay,
    /// Regular day off: one day's wage, double time past 8h, plus a
    /// compensatory day paid out.
    RegularOff,
    /// Holiday: at least one day's wage, tiered overtime past 8h.
    Holiday,
}

impl std::fmt::Display for DayType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DayType::Normal => write!(f, "Normal"),
            DayType::RestDay => write!(f, "Rest day"),
            DayType::RegularOff => write!(f, "Regular day off"),
            DayType::Holiday => write!(f, "Holiday"),
        }
    }
}

/// One row of the classification table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayTypeRule {
    /// Weekday the rule is restricted to, or `None` for any weekday.
    pub weekday: Option<Weekday>,
    /// Whether the rule only applies to days flagged as holidays.
    pub requires_holiday: bool,
    /// The day type assigned when the rule matches.
    pub day_type: DayType,
}

impl DayTypeRule {
    /// Returns true if this rule applies to the given day.
    pub fn matches(&self, weekday: Weekday, is_holiday: bool) -> bool {
        (!self.requires_holiday || is_holiday) && self.weekday.is_none_or(|w| w == weekday)
    }
}

const DAY_TYPE_RULES: [DayTypeRule; 4] = [
    DayTypeRule {
        weekday: Some(Weekday::Sun),
        requires_holiday: true,
        day_type: DayType::RegularOff,
    },
    DayTypeRule {
        weekday: Some(Weekday::Sat),
        requires_holiday: true,
        day_type: DayType::RestDay,
    },
    DayTypeRule {
        weekday: None,
        requires_holiday: true,
        day_type: DayType::Holiday,
    },
    DayTypeRule {
        weekday: None,
        requires_holiday: false,
        day_type: DayType::Normal,
    },
];

/// The classification rules in precedence order. The last rule matches
/// every day, so classification is total.
pub fn day_type_rules() -> &'static [DayTypeRule] {
    &DAY_TYPE_RULES
}

/// Classifies a day from its weekday and holiday flag.
///
/// The holiday flag covers both designated non-working days and national
/// holidays; only flagged weekends become rest days or regular days off.
///
/// # Example
///
/// ```
/// use wage_engine::calculation::{classify_day, DayType};
/// use chrono::Weekday;
///
/// assert_eq!(classify_day(Weekday::Sun, true), DayType::RegularOff);
/// assert_eq!(classify_day(Weekday::Sat, true), DayType::RestDay);
/// assert_eq!(classify_day(Weekday::Wed, true), DayType::Holiday);
/// assert_eq!(classify_day(Weekday::Sun, false), DayType::Normal);
/// ```
pub fn classify_day(weekday: Weekday, is_holiday: bool) -> DayType {
    DAY_TYPE_RULES
        .iter()
        .find(|rule| rule.matches(weekday, is_holiday))
        .map_or(DayType::Normal, |rule| rule.day_type)
}

/// Classifies a calendar date, deriving the weekday from the date.
pub fn classify_date(date: NaiveDate, is_holiday: bool) -> DayType {
    classify_day(date.weekday(), is_holiday)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_WEEKDAYS: [Weekday; 7] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
        Weekday::Sat,
        Weekday::Sun,
    ];

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_sunday_holiday_is_regular_off() {
        assert_eq!(classify_day(Weekday::Sun, true), DayType::RegularOff);
    }

    #[test]
    fn test_saturday_holiday_is_rest_day() {
        assert_eq!(classify_day(Weekday::Sat, true), DayType::RestDay);
    }

    #[test]
    fn test_weekday_holiday_is_holiday() {
        for weekday in &ALL_WEEKDAYS[..5] {
            assert_eq!(classify_day(*weekday, true), DayType::Holiday);
        }
    }

    #[test]
    fn test_unflagged_days_are_normal_including_weekends() {
        for weekday in ALL_WEEKDAYS {
            assert_eq!(classify_day(weekday, false), DayType::Normal);
        }
    }

    #[test]
    fn test_every_input_matches_some_rule() {
        for weekday in ALL_WEEKDAYS {
            for is_holiday in [true, false] {
                assert!(day_type_rules().iter().any(|r| r.matches(weekday, is_holiday)));
            }
        }
    }

    #[test]
    fn test_rule_table_order_is_sunday_saturday_holiday_normal() {
        let order: Vec<DayType> = day_type_rules().iter().map(|r| r.day_type).collect();
        assert_eq!(
            order,
            vec![
                DayType::RegularOff,
                DayType::RestDay,
                DayType::Holiday,
                DayType::Normal
            ]
        );
    }

    #[test]
    fn test_classify_date_uses_weekday() {
        // 2025-03-02 is a Sunday, 2025-03-01 a Saturday, 2025-03-03 a Monday
        assert_eq!(classify_date(make_date("2025-03-02"), true), DayType::RegularOff);
        assert_eq!(classify_date(make_date("2025-03-01"), true), DayType::RestDay);
        assert_eq!(classify_date(make_date("2025-03-03"), true), DayType::Holiday);
        assert_eq!(classify_date(make_date("2025-03-03"), false), DayType::Normal);
    }

    #[test]
    fn test_day_type_serialization() {
        assert_eq!(
            serde_json::to_string(&DayType::RegularOff).unwrap(),
            "\"REGULAR_OFF\""
        );
        let parsed: DayType = serde_json::from_str("\"REST_DAY\"").unwrap();
        assert_eq!(parsed, DayType::RestDay);
    }
}
