//! Configuration loading and management for the wage engine.
//!
//! This module loads the wage policy (monthly hours divisor, fallback salary
//! and the break window table) from YAML files.
//!
//! # Example
//!
//! ```no_run
//! use wage_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/tw_lsa").unwrap();
//! println!("Loaded policy: {}", config.policy().metadata().name);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    BreakSchedule, BreakWindow, BreakWindowEntry, BreaksFile, DEFAULT_MONTHLY_SALARY,
    DEFAULT_STANDARD_MONTHLY_HOURS, MAX_MONTHLY_SALARY, PolicyFile, PolicyMetadata, WagePolicy,
};
