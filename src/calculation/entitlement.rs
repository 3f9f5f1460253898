//! Policy dispatcher: the single entry point for leave entitlement.
//!
//! Selects the hire-date or fiscal-year rule from the employee's branch and
//! returns the rule's figure unmodified, together with the audit trail.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use tracing::{debug, warn};

use crate::config::AccrualPolicy;
use crate::error::EngineResult;
use crate::models::{
    AccrualResult, AccrualRule, AuditStep, AuditWarning, Branch, Employee, LeaveStandard,
};

use super::calendar::parse_date;
use super::fiscal_year_annual::calculate_annual_leave_by_fiscal_year;
use super::hire_date_annual::calculate_annual_leave_by_hire_date;

/// Computes an employee's leave entitlement as of `as_of`.
///
/// # Arguments
///
/// * `employee` - The employee; only `hire_date` is read
/// * `branch` - The employee's branch, if known; `None` means hire-date standard,
///   as does a branch whose standard is unrecognized (recorded as a warning)
/// * `as_of` - The date to compute the entitlement for
/// * `policy` - Policy constants, including the missing-hire-date fallback
///
/// # Returns
///
/// - the policy default (15 days) with a warning when no hire date is recorded
/// - 0 when `as_of` precedes the hire date
/// - otherwise the selected rule's result
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::leave_entitlement;
/// use leave_accrual::config::AccrualPolicy;
/// use leave_accrual::models::{Branch, Employee};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let employee = Employee {
///     id: "emp_001".to_string(),
///     name: "Kim Minji".to_string(),
///     branch: Some("Seoul".to_string()),
///     hire_date: NaiveDate::from_ymd_opt(2020, 3, 10),
/// };
/// let branch = Branch {
///     name: "Seoul".to_string(),
///     leave_calculation_standard: Some("fiscal_year".to_string()),
/// };
/// let as_of = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
///
/// let result = leave_entitlement(&employee, Some(&branch), as_of, &AccrualPolicy::default());
/// assert_eq!(result.days, Decimal::from(16));
/// ```
pub fn leave_entitlement(
    employee: &Employee,
    branch: Option<&Branch>,
    as_of: NaiveDate,
    policy: &AccrualPolicy,
) -> AccrualResult {
    let mut warnings = Vec::new();
    let standard = match branch {
        Some(branch) => {
            resolve_standard(branch.leave_calculation_standard.as_deref(), &mut warnings)
        }
        None => {
            debug!(employee_id = %employee.id, "No branch settings, using hire-date standard");
            LeaveStandard::HireDate
        }
    };

    calculate_entitlement(employee.hire_date, standard, as_of, policy, warnings)
}

/// String boundary of the dispatcher.
///
/// Parses the dates up front so that an unparseable value fails immediately
/// with `InvalidDate`. An absent or empty hire date falls back to the policy
/// default; an absent or unrecognized standard falls back to hire-date, with
/// the latter recorded as a warning.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidDate`] if either date cannot be parsed.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::leave_entitlement_from_strings;
/// use leave_accrual::config::AccrualPolicy;
/// use rust_decimal::Decimal;
///
/// let policy = AccrualPolicy::default();
/// let result = leave_entitlement_from_strings(
///     Some("2023-01-15"),
///     Some("hire_date"),
///     "2024-01-15",
///     &policy,
/// )?;
/// assert_eq!(result.days, Decimal::from(15));
///
/// assert!(leave_entitlement_from_strings(Some("15/01/2023"), None, "2024-01-15", &policy).is_err());
/// # Ok::<(), leave_accrual::error::EngineError>(())
/// ```
pub fn leave_entitlement_from_strings(
    hire_date: Option<&str>,
    standard: Option<&str>,
    as_of: &str,
    policy: &AccrualPolicy,
) -> EngineResult<AccrualResult> {
    let as_of = parse_date(as_of)?;
    let hire_date = match hire_date.map(str::trim) {
        Some(value) if !value.is_empty() => Some(parse_date(value)?),
        _ => None,
    };

    let mut warnings = Vec::new();
    let standard = resolve_standard(standard, &mut warnings);

    Ok(calculate_entitlement(hire_date, standard, as_of, policy, warnings))
}

/// Maps a raw standard to a [`LeaveStandard`], recording unknown values.
fn resolve_standard(raw: Option<&str>, warnings: &mut Vec<AuditWarning>) -> LeaveStandard {
    let Some(raw) = raw.map(str::trim).filter(|value| !value.is_empty()) else {
        return LeaveStandard::HireDate;
    };

    match LeaveStandard::parse_known(raw) {
        Some(standard) => standard,
        None => {
            warn!(standard = %raw, "Unknown leave calculation standard, using hire-date");
            warnings.push(AuditWarning {
                code: "UNKNOWN_STANDARD".to_string(),
                message: format!(
                    "Leave calculation standard '{}' is not recognized; hire_date was used",
                    raw
                ),
                severity: "low".to_string(),
            });
            LeaveStandard::HireDate
        }
    }
}

fn calculate_entitlement(
    hire_date: Option<NaiveDate>,
    standard: LeaveStandard,
    as_of: NaiveDate,
    policy: &AccrualPolicy,
    mut warnings: Vec<AuditWarning>,
) -> AccrualResult {
    let Some(hire) = hire_date else {
        warn!(
            default_days = %policy.default_annual_leave_days,
            "No hire date on record, returning default entitlement"
        );
        warnings.push(AuditWarning {
            code: "MISSING_HIRE_DATE".to_string(),
            message: "No hire date on record; the default annual leave was used".to_string(),
            severity: "medium".to_string(),
        });
        let audit_step = AuditStep {
            step_number: 1,
            rule_id: "default_entitlement".to_string(),
            rule_name: "Default Entitlement".to_string(),
            input: serde_json::json!({ "hire_date": null, "standard": standard }),
            output: serde_json::json!({ "days": policy.default_annual_leave_days.to_string() }),
            reasoning: format!(
                "No hire date; returning configured default of {} days",
                policy.default_annual_leave_days
            ),
        };
        return AccrualResult {
            days: policy.default_annual_leave_days,
            standard,
            rule: AccrualRule::Default,
            hire_date: None,
            as_of_date: as_of,
            audit_steps: vec![audit_step],
            warnings,
        };
    };

    let selection_step = AuditStep {
        step_number: 1,
        rule_id: "policy_selection".to_string(),
        rule_name: "Leave Standard Selection".to_string(),
        input: serde_json::json!({
            "hire_date": hire.to_string(),
            "as_of_date": as_of.to_string()
        }),
        output: serde_json::json!({ "standard": standard }),
        reasoning: format!("Calculating under the {} standard", standard),
    };

    if as_of < hire {
        debug!(%hire, %as_of, "As-of date precedes hire date");
        let audit_step = AuditStep {
            step_number: 2,
            rule_id: "not_yet_hired".to_string(),
            rule_name: "Not Yet Hired".to_string(),
            input: serde_json::json!({
                "hire_date": hire.to_string(),
                "as_of_date": as_of.to_string()
            }),
            output: serde_json::json!({ "days": "0" }),
            reasoning: "As-of date precedes the hire date; nothing has accrued".to_string(),
        };
        return AccrualResult {
            days: Decimal::ZERO,
            standard,
            rule: AccrualRule::NotYetHired,
            hire_date: Some(hire),
            as_of_date: as_of,
            audit_steps: vec![selection_step, audit_step],
            warnings,
        };
    }

    let (days, rule, rule_steps) = match standard {
        LeaveStandard::HireDate => {
            let result = calculate_annual_leave_by_hire_date(hire, as_of, 2);
            let rule = if result.monthly_only {
                AccrualRule::Monthly
            } else {
                AccrualRule::HireDateAnnual
            };
            (Decimal::from(result.days), rule, result.audit_steps)
        }
        LeaveStandard::FiscalYear => {
            let result = calculate_annual_leave_by_fiscal_year(hire, as_of, 2);
            (result.days, result.rule, result.audit_steps)
        }
    };

    debug!(%hire, %as_of, %standard, %days, ?rule, "Leave entitlement calculated");

    let mut audit_steps = Vec::with_capacity(rule_steps.len() + 1);
    audit_steps.push(selection_step);
    audit_steps.extend(rule_steps);

    AccrualResult {
        days,
        standard,
        rule,
        hire_date: Some(hire),
        as_of_date: as_of,
        audit_steps,
        warnings,
    }
}
