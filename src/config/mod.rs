//! Policy configuration for the Attendance and Payroll Engine.
//!
//! This module provides functionality to load the company policy from a
//! YAML file: attendance thresholds, manual-mark times, leave accrual,
//! and payroll rules.
//!
//! # Example
//!
//! ```no_run
//! use payroll_engine::config::ConfigLoader;
//!
//! let loader = ConfigLoader::load("./config/policy.yaml").unwrap();
//! println!("Default working days: {}", loader.policy().payroll.default_working_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AttendanceRules, LeaveRules, PayrollRules, PolicyConfig};
