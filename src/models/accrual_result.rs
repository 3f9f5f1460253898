//! Accrual result models for the Leave Accrual Engine.
//!
//! This module contains the [`AccrualResult`] value produced by the policy
//! dispatcher, the audit types that record each rule decision, and the
//! [`EntitlementReport`] envelope returned by the HTTP API.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{LeaveBalance, LeaveStandard};

/// Identifies which rule produced an entitlement figure.
///
/// # Example
///
/// ```
/// use leave_accrual::models::AccrualRule;
///
/// let rule = AccrualRule::FiscalSecondYear;
/// assert_eq!(serde_json::to_string(&rule).unwrap(), "\"fiscal_second_year\"");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccrualRule {
    /// No hire date on record; the configured default was returned.
    Default,
    /// The as-of date precedes the hire date.
    NotYetHired,
    /// First-year monthly accrual.
    Monthly,
    /// Annual entitlement by completed years of service.
    HireDateAnnual,
    /// Fiscal-year standard, hire year (monthly only).
    FiscalHireYear,
    /// Fiscal-year standard, year after hire (prorated plus monthly).
    FiscalSecondYear,
    /// Fiscal-year standard, third calendar year onward.
    FiscalThirdYearOnward,
}

/// A single step in the audit trace recording a calculation decision.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditStep {
    /// The sequential step number.
    pub step_number: u32,
    /// The unique identifier of the rule that was applied.
    pub rule_id: String,
    /// The human-readable name of the rule.
    pub rule_name: String,
    /// The input data for this step.
    pub input: serde_json::Value,
    /// The output data from this step.
    pub output: serde_json::Value,
    /// Human-readable explanation of the decision.
    pub reasoning: String,
}

/// A data-quality warning raised during calculation.
///
/// Warnings never stop a calculation; they explain why a fallback was used.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuditWarning {
    /// A code identifying the type of warning.
    pub code: String,
    /// A human-readable description of the warning.
    pub message: String,
    /// The severity level (e.g., "low", "medium", "high").
    pub severity: String,
}

/// The leave entitlement computed for one employee at one date.
///
/// No identity and no persistence: the same inputs always produce the same
/// value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccrualResult {
    /// Days earned. Whole for every rule except fiscal second year.
    pub days: Decimal,
    /// The standard the calculation ran under.
    pub standard: LeaveStandard,
    /// The rule that produced `days`.
    pub rule: AccrualRule,
    /// The hire date used, if any.
    pub hire_date: Option<NaiveDate>,
    /// The date the entitlement was computed for.
    pub as_of_date: NaiveDate,
    /// Ordered record of every rule applied.
    pub audit_steps: Vec<AuditStep>,
    /// Fallbacks taken along the way.
    pub warnings: Vec<AuditWarning>,
}

/// The complete response of an entitlement or balance request.
///
/// # Example
///
/// ```
/// use leave_accrual::models::{AccrualResult, AccrualRule, EntitlementReport, LeaveStandard};
/// use chrono::{NaiveDate, Utc};
/// use rust_decimal::Decimal;
/// use uuid::Uuid;
///
/// let report = EntitlementReport {
///     calculation_id: Uuid::new_v4(),
///     timestamp: Utc::now(),
///     engine_version: "0.1.0".to_string(),
///     employee_id: "emp_001".to_string(),
///     entitlement: AccrualResult {
///         days: Decimal::from(15),
///         standard: LeaveStandard::HireDate,
///         rule: AccrualRule::HireDateAnnual,
///         hire_date: NaiveDate::from_ymd_opt(2023, 1, 15),
///         as_of_date: NaiveDate::from_ymd_opt(2024, 1, 15).unwrap(),
///         audit_steps: vec![],
///         warnings: vec![],
///     },
///     balance: None,
///     duration_us: 12,
/// };
/// assert!(report.balance.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EntitlementReport {
    /// Unique identifier for this calculation.
    pub calculation_id: Uuid,
    /// When the calculation was performed.
    pub timestamp: DateTime<Utc>,
    /// The version of the engine that performed the calculation.
    pub engine_version: String,
    /// The employee the report is for.
    pub employee_id: String,
    /// The computed entitlement.
    pub entitlement: AccrualResult,
    /// The leave balance, when leave requests were supplied.
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub balance: Option<LeaveBalance>,
    /// The calculation duration in microseconds.
    pub duration_us: u64,
}
