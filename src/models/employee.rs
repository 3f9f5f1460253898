//! Employee model.
//!
//! Employees are owned by the surrounding application; the engine only reads
//! them. Of all the fields, the accrual rules look at `hire_date` alone.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Represents an employee whose leave entitlement is being calculated.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    #[serde(default)]
    pub name: String,
    /// Name of the branch the employee belongs to.
    #[serde(default)]
    pub branch: Option<String>,
    /// The date the employee was hired, if recorded.
    #[serde(default)]
    pub hire_date: Option<NaiveDate>,
}
