//! Error types for the wage engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition the engine can report.

use rust_decimal::Decimal;
use thiserror::Error;

/// The main error type for the wage engine.
///
/// # Example
///
/// ```
/// use wage_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/policy.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/policy.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The break window table is malformed (inverted or overlapping windows).
    #[error("Invalid break schedule: {message}")]
    InvalidBreakSchedule {
        /// A description of what made the schedule invalid.
        message: String,
    },

    /// A punch time could not be parsed as `HH:MM`.
    #[error("Invalid punch time '{value}' for {field}")]
    InvalidPunchTime {
        /// Which punch the value belongs to (`punch_in` or `punch_out`).
        field: String,
        /// The raw value that failed to parse.
        value: String,
    },

    /// A record date could not be parsed as `YYYY-MM-DD`.
    #[error("Invalid date '{value}'")]
    InvalidDate {
        /// The raw value that failed to parse.
        value: String,
    },

    /// Hours outside 0-24 were passed to the wage calculator.
    #[error("Hours must be between 0 and 24, got {hours}")]
    InvalidHours {
        /// The offending hours value.
        hours: Decimal,
    },

    /// A non-positive or out-of-range hourly rate was passed to the wage calculator.
    #[error("Hourly rate must be positive and at most 1000000000, got {rate}")]
    InvalidHourlyRate {
        /// The offending rate.
        rate: Decimal,
    },

    /// An employee record was invalid or contained inconsistent data.
    #[error("Invalid employee field '{field}': {message}")]
    InvalidEmployee {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// The requested year/month does not name a real calendar month.
    #[error("Invalid period {year}-{month:02}")]
    InvalidPeriod {
        /// The requested year.
        year: i32,
        /// The requested month (1-12).
        month: u32,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
