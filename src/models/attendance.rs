//! Attendance record and punch pair models.
//!
//! [`AttendanceRecord`] mirrors the wire shape delivered by the attendance
//! API (string dates and clock times, either punch possibly missing).
//! [`PunchPair`] is the parsed, strongly-typed form the calculators use.

use chrono::{NaiveDate, NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Format of punch clock times on the wire.
pub const CLOCK_TIME_FORMAT: &str = "%H:%M";

/// Format of record dates on the wire.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Parses an `HH:MM` clock time.
///
/// # Example
///
/// ```
/// use wage_engine::models::parse_clock_time;
/// use chrono::NaiveTime;
///
/// let time = parse_clock_time("08:30", "punch_in").unwrap();
/// assert_eq!(time, NaiveTime::from_hms_opt(8, 30, 0).unwrap());
/// assert!(parse_clock_time("8h30", "punch_in").is_err());
/// ```
pub fn parse_clock_time(value: &str, field: &str) -> EngineResult<NaiveTime> {
    NaiveTime::parse_from_str(value.trim(), CLOCK_TIME_FORMAT).map_err(|_| {
        EngineError::InvalidPunchTime {
            field: field.to_string(),
            value: value.to_string(),
        }
    })
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(value: &str) -> EngineResult<NaiveDate> {
    NaiveDate::parse_from_str(value.trim(), DATE_FORMAT).map_err(|_| EngineError::InvalidDate {
        value: value.to_string(),
    })
}

/// Minutes elapsed since midnight for a clock time (seconds are dropped).
pub fn minutes_since_midnight(time: NaiveTime) -> u32 {
    time.num_seconds_from_midnight() / 60
}

/// A single day's attendance as delivered by the attendance API.
///
/// Field names follow the API's camelCase JSON.
///
/// # Example
///
/// ```
/// use wage_engine::models::AttendanceRecord;
///
/// let json = r#"{
///     "date": "2025-03-03",
///     "punchInTime": "08:00",
///     "punchOutTime": "17:00",
///     "isHoliday": false,
///     "reason": ""
/// }"#;
/// let record: AttendanceRecord = serde_json::from_str(json).unwrap();
/// assert!(record.has_both_punches());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AttendanceRecord {
    /// The calendar date, `YYYY-MM-DD`.
    pub date: String,
    /// First punch-in of the day, `HH:MM`.
    #[serde(default)]
    pub punch_in_time: Option<String>,
    /// Last punch-out of the day, `HH:MM`.
    #[serde(default)]
    pub punch_out_time: Option<String>,
    /// Whether the day is a designated non-working day or national holiday.
    #[serde(default)]
    pub is_holiday: bool,
    /// Free-text reason or note attached to the day.
    #[serde(default)]
    pub reason: String,
}

impl AttendanceRecord {
    /// Returns true when both punches are present and non-empty.
    pub fn has_both_punches(&self) -> bool {
        let present = |p: &Option<String>| p.as_deref().is_some_and(|s| !s.trim().is_empty());
        present(&self.punch_in_time) && present(&self.punch_out_time)
    }

    /// Parses this record into a [`PunchPair`].
    ///
    /// Returns `Ok(None)` when either punch is missing (not a working day).
    ///
    /// # Errors
    ///
    /// [`EngineError::InvalidDate`] or [`EngineError::InvalidPunchTime`]
    /// when a present field cannot be parsed.
    pub fn to_punch_pair(&self) -> EngineResult<Option<PunchPair>> {
        if !self.has_both_punches() {
            return Ok(None);
        }

        let date = parse_date(&self.date)?;
        let punch_in = parse_clock_time(self.punch_in_time.as_deref().unwrap_or_default(), "punch_in")?;
        let punch_out =
            parse_clock_time(self.punch_out_time.as_deref().unwrap_or_default(), "punch_out")?;

        Ok(Some(PunchPair {
            date,
            punch_in,
            punch_out,
            is_holiday: self.is_holiday,
        }))
    }
}

/// A day's first punch-in and last punch-out.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PunchPair {
    /// The calendar date.
    pub date: NaiveDate,
    /// Punch-in clock time.
    pub punch_in: NaiveTime,
    /// Punch-out clock time.
    pub punch_out: NaiveTime,
    /// Whether the day is flagged as a holiday.
    pub is_holiday: bool,
}
