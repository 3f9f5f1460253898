//! Configuration loading and management for the Leave Accrual Engine.
//!
//! This module loads the accrual policy and the branch directory from YAML
//! files. The branch directory plays the part of the organizational-unit
//! store: it maps each branch name to its leave calculation standard.
//!
//! # Example
//!
//! ```no_run
//! use leave_accrual::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Default entitlement: {}", config.policy().default_annual_leave_days);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{AccrualPolicy, BranchesConfig, EngineConfig, DEFAULT_ANNUAL_LEAVE_DAYS};
