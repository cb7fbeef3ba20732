//! Configuration types for wage policy.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files, plus the validated
//! [`WagePolicy`] the calculators consume.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Metadata identifying the wage policy in force.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PolicyMetadata {
    /// Short policy code (e.g., "TW-LSA").
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// URL to the governing statute.
    pub source_url: String,
}

impl Default for PolicyMetadata {
    fn default() -> Self {
        Self {
            code: "TW-LSA".to_string(),
            name: "Labor Standards Act overtime schedule".to_string(),
            version: "2025-01-01".to_string(),
            source_url: "https://law.moj.gov.tw/LawClass/LawAll.aspx?pcode=N0030001".to_string(),
        }
    }
}

/// Structure of `policy.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct PolicyFile {
    /// Short policy code.
    pub code: String,
    /// The human-readable name of the policy.
    pub name: String,
    /// The version or effective date of the policy.
    pub version: String,
    /// URL to the governing statute.
    pub source_url: String,
    /// Divisor turning a monthly salary into an hourly rate.
    pub standard_monthly_hours: Decimal,
    /// Monthly salary assumed when an employee record carries none.
    pub default_monthly_salary: Decimal,
}

/// A single break window as written in `breaks.yaml` (`HH:MM` strings).
#[derive(Debug, Clone, Deserialize)]
pub struct BreakWindowEntry {
    /// Name of the break (e.g., "lunch").
    pub label: String,
    /// Start of the window, `HH:MM`.
    pub start: String,
    /// End of the window, `HH:MM`.
    pub end: String,
}

/// Structure of `breaks.yaml`.
#[derive(Debug, Clone, Deserialize)]
pub struct BreaksFile {
    /// Break windows in chronological order.
    pub breaks: Vec<BreakWindowEntry>,
}

/// A fixed daily break, expressed in minutes since midnight.
///
/// # Example
///
/// ```
/// use wage_engine::config::BreakWindow;
///
/// let lunch = BreakWindow::new("lunch", 12 * 60, 13 * 60);
/// assert_eq!(lunch.duration_minutes(), 60);
/// assert_eq!(lunch.to_string(), "lunch 12:00-13:00");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreakWindow {
    /// Name of the break.
    pub label: String,
    /// Start of the window in minutes since midnight (inclusive).
    pub start_minute: u32,
    /// End of the window in minutes since midnight (exclusive).
    pub end_minute: u32,
}

impl BreakWindow {
    /// Creates a break window from minute offsets.
    pub fn new(label: impl Into<String>, start_minute: u32, end_minute: u32) -> Self {
        Self {
            label: label.into(),
            start_minute,
            end_minute,
        }
    }

    /// Length of the window in minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minute.saturating_sub(self.start_minute)
    }
}

impl std::fmt::Display for BreakWindow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {:02}:{:02}-{:02}:{:02}",
            self.label,
            self.start_minute / 60,
            self.start_minute % 60,
            self.end_minute / 60,
            self.end_minute % 60
        )
    }
}

/// Ordered, non-overlapping set of break windows deducted from worked time.
///
/// Construction through [`BreakSchedule::new`] validates that every window
/// ends after it starts, lies within one day, and that windows are sorted
/// and do not overlap.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakSchedule {
    windows: Vec<BreakWindow>,
}

impl BreakSchedule {
    /// Builds a validated schedule.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidBreakSchedule`] for an inverted window,
    /// a window past midnight, or windows that are out of order or overlap.
    ///
    /// # Example
    ///
    /// ```
    /// use wage_engine::config::{BreakSchedule, BreakWindow};
    ///
    /// let overlapping = BreakSchedule::new(vec![
    ///     BreakWindow::new("lunch", 720, 780),
    ///     BreakWindow::new("tea", 770, 790),
    /// ]);
    /// assert!(overlapping.is_err());
    /// ```
    pub fn new(windows: Vec<BreakWindow>) -> EngineResult<Self> {
        for window in &windows {
            if window.start_minute >= window.end_minute {
                return Err(EngineError::InvalidBreakSchedule {
                    message: format!("window '{}' must end after it starts", window),
                });
            }
            if window.end_minute > 24 * 60 {
                return Err(EngineError::InvalidBreakSchedule {
                    message: format!("window '{}' extends past midnight", window),
                });
            }
        }

        for pair in windows.windows(2) {
            if pair[1].start_minute < pair[0].end_minute {
                return Err(EngineError::InvalidBreakSchedule {
                    message: format!(
                        "window '{}' overlaps or precedes '{}'",
                        pair[1], pair[0]
                    ),
                });
            }
        }

        Ok(Self { windows })
    }

    /// A schedule with no breaks.
    pub fn empty() -> Self {
        Self {
            windows: Vec::new(),
        }
    }

    /// The windows in chronological order.
    pub fn windows(&self) -> &[BreakWindow] {
        &self.windows
    }
}

impl Default for BreakSchedule {
    /// Breakfast 06:00-06:30, lunch 12:00-13:00, dinner 19:00-19:30.
    fn default() -> Self {
        Self {
            windows: vec![
                BreakWindow::new("breakfast", 6 * 60, 6 * 60 + 30),
                BreakWindow::new("lunch", 12 * 60, 13 * 60),
                BreakWindow::new("dinner", 19 * 60, 19 * 60 + 30),
            ],
        }
    }
}

/// The complete wage policy loaded from YAML files.
///
/// Holds the monthly-hours divisor, the fallback salary and the break table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WagePolicy {
    metadata: PolicyMetadata,
    standard_monthly_hours: Decimal,
    default_monthly_salary: Decimal,
    break_schedule: BreakSchedule,
}

/// Standard hours per month used to derive an hourly rate (30 days × 8 hours).
pub const DEFAULT_STANDARD_MONTHLY_HOURS: Decimal = Decimal::from_parts(240, 0, 0, false, 0);

/// Fallback monthly salary when an employee record has none.
pub const DEFAULT_MONTHLY_SALARY: Decimal = Decimal::from_parts(30000, 0, 0, false, 0);

/// Largest monthly salary the engine accepts.
///
/// Together with a divisor of at least one hour this keeps every hourly
/// rate, and a month of pay at that rate, well inside `Decimal` range.
pub const MAX_MONTHLY_SALARY: Decimal = Decimal::from_parts(1_000_000_000, 0, 0, false, 0);

impl WagePolicy {
    /// Creates a new policy from its component parts.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::ConfigParseError`] when the monthly hours
    /// divisor is below one, or the default salary is not positive or
    /// exceeds [`MAX_MONTHLY_SALARY`].
    pub fn new(
        metadata: PolicyMetadata,
        standard_monthly_hours: Decimal,
        default_monthly_salary: Decimal,
        break_schedule: BreakSchedule,
    ) -> EngineResult<Self> {
        if standard_monthly_hours < Decimal::ONE {
            return Err(EngineError::ConfigParseError {
                path: "policy.yaml".to_string(),
                message: format!(
                    "standard_monthly_hours must be at least 1, got {}",
                    standard_monthly_hours
                ),
            });
        }
        if default_monthly_salary <= Decimal::ZERO || default_monthly_salary > MAX_MONTHLY_SALARY {
            return Err(EngineError::ConfigParseError {
                path: "policy.yaml".to_string(),
                message: format!(
                    "default_monthly_salary must be in (0, {}], got {}",
                    MAX_MONTHLY_SALARY, default_monthly_salary
                ),
            });
        }

        Ok(Self {
            metadata,
            standard_monthly_hours,
            default_monthly_salary,
            break_schedule,
        })
    }

    /// Returns the policy metadata.
    pub fn metadata(&self) -> &PolicyMetadata {
        &self.metadata
    }

    /// Returns the divisor turning a monthly salary into an hourly rate.
    pub fn standard_monthly_hours(&self) -> Decimal {
        self.standard_monthly_hours
    }

    /// Returns the fallback monthly salary.
    pub fn default_monthly_salary(&self) -> Decimal {
        self.default_monthly_salary
    }

    /// Returns the break table.
    pub fn break_schedule(&self) -> &BreakSchedule {
        &self.break_schedule
    }

    /// Returns a copy of this policy using a different break table.
    pub fn with_break_schedule(mut self, break_schedule: BreakSchedule) -> Self {
        self.break_schedule = break_schedule;
        self
    }
}

impl Default for WagePolicy {
    fn default() -> Self {
        Self {
            metadata: PolicyMetadata::default(),
            standard_monthly_hours: DEFAULT_STANDARD_MONTHLY_HOURS,
            default_monthly_salary: DEFAULT_MONTHLY_SALARY,
            break_schedule: BreakSchedule::default(),
        }
    }
}
