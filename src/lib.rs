//! Punch-to-Wage Engine
//!
//! This crate turns daily punch-in/punch-out records into pay under the
//! Taiwan Labor Standards Act overtime schedule: break-time deduction,
//! day-type classification, tiered overtime multipliers and monthly totals
//! with a human-readable calculation trail.

#![warn(missing_docs)]

pub mod api;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
