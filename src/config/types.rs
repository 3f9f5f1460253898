//! Configuration types for leave accrual.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files.

use rust_decimal::Decimal;
use serde::Deserialize;
use std::collections::HashMap;

use crate::models::Branch;

/// Annual leave returned when an employee has no hire date on record.
pub const DEFAULT_ANNUAL_LEAVE_DAYS: u32 = 15;

/// Policy constants injected into the dispatcher.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct AccrualPolicy {
    /// Days returned when the hire date is missing.
    #[serde(default = "default_annual_leave_days")]
    pub default_annual_leave_days: Decimal,
}

fn default_annual_leave_days() -> Decimal {
    Decimal::from(DEFAULT_ANNUAL_LEAVE_DAYS)
}

impl Default for AccrualPolicy {
    fn default() -> Self {
        Self {
            default_annual_leave_days: default_annual_leave_days(),
        }
    }
}

/// Branches configuration file structure.
#[derive(Debug, Clone, Deserialize)]
pub struct BranchesConfig {
    /// All configured branches.
    #[serde(default)]
    pub branches: Vec<Branch>,
}

/// The complete engine configuration loaded from YAML files.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Accrual policy constants.
    policy: AccrualPolicy,
    /// Branches keyed by name.
    branches: HashMap<String, Branch>,
}

impl EngineConfig {
    /// Creates a new EngineConfig from its component parts.
    ///
    /// When two branches share a name the later one wins.
    pub fn new(policy: AccrualPolicy, branches: Vec<Branch>) -> Self {
        let branches = branches
            .into_iter()
            .map(|branch| (branch.name.clone(), branch))
            .collect();
        Self { policy, branches }
    }

    /// Returns the accrual policy.
    pub fn policy(&self) -> &AccrualPolicy {
        &self.policy
    }

    /// Returns all branches keyed by name.
    pub fn branches(&self) -> &HashMap<String, Branch> {
        &self.branches
    }
}
