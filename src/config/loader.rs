//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading wage policy
//! from YAML files.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};
use crate::models::{Employee, minutes_since_midnight, parse_clock_time};

use super::types::{
    BreakSchedule, BreakWindow, BreakWindowEntry, BreaksFile, PolicyFile, PolicyMetadata,
    WagePolicy,
};

/// Loads and provides access to wage policy configuration.
///
/// # Directory Structure
///
/// ```text
/// config/tw_lsa/
/// ├── policy.yaml   # Metadata, monthly hours divisor, default salary
/// └── breaks.yaml   # Daily break windows
/// ```
///
/// # Example
///
/// ```no_run
/// use wage_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/tw_lsa").unwrap();
/// println!("Loaded policy: {}", loader.policy().metadata().name);
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    policy: WagePolicy,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Errors
    ///
    /// - [`EngineError::ConfigNotFound`] if either file is missing
    /// - [`EngineError::ConfigParseError`] for invalid YAML, a bad clock time
    ///   or a non-positive divisor/salary
    /// - [`EngineError::InvalidBreakSchedule`] for inverted or overlapping windows
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();

        let policy_path = path.join("policy.yaml");
        let policy_file = Self::load_yaml::<PolicyFile>(&policy_path)?;

        let breaks_path = path.join("breaks.yaml");
        let breaks_file = Self::load_yaml::<BreaksFile>(&breaks_path)?;
        let break_schedule = Self::build_break_schedule(&breaks_path, breaks_file.breaks)?;

        let metadata = PolicyMetadata {
            code: policy_file.code,
            name: policy_file.name,
            version: policy_file.version,
            source_url: policy_file.source_url,
        };

        let policy = WagePolicy::new(
            metadata,
            policy_file.standard_monthly_hours,
            policy_file.default_monthly_salary,
            break_schedule,
        )?;

        Ok(Self { policy })
    }

    /// Wraps an already-built policy, bypassing the filesystem.
    pub fn from_policy(policy: WagePolicy) -> Self {
        Self { policy }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Converts the `HH:MM` entries of `breaks.yaml` into a validated schedule.
    fn build_break_schedule(
        path: &Path,
        entries: Vec<BreakWindowEntry>,
    ) -> EngineResult<BreakSchedule> {
        let mut windows = Vec::with_capacity(entries.len());

        for entry in entries {
            let parse = |value: &str, field: &str| {
                parse_clock_time(value, field).map_err(|e| EngineError::ConfigParseError {
                    path: path.display().to_string(),
                    message: format!("break '{}': {}", entry.label, e),
                })
            };
            let start = parse(&entry.start, "start")?;
            let end = parse(&entry.end, "end")?;

            windows.push(BreakWindow::new(
                entry.label.clone(),
                minutes_since_midnight(start),
                minutes_since_midnight(end),
            ));
        }

        BreakSchedule::new(windows)
    }

    /// Returns the loaded policy.
    pub fn policy(&self) -> &WagePolicy {
        &self.policy
    }

    /// Returns the monthly salary to use for an employee, falling back to
    /// the policy default when the record carries none.
    pub fn monthly_salary(&self, employee: &Employee) -> EngineResult<rust_decimal::Decimal> {
        employee.monthly_salary(&self.policy)
    }

    /// Returns the hourly rate for an employee under this policy.
    pub fn hourly_rate(&self, employee: &Employee) -> EngineResult<rust_decimal::Decimal> {
        employee.hourly_rate(&self.policy)
    }
}
