//! Monthly leave accrual for employees in their first year of service.
//!
//! One day is earned for each completed month-anniversary of the hire date,
//! up to a maximum of eleven.

use chrono::NaiveDate;

use crate::models::AuditStep;

use super::calendar::{count_month_anniversaries, days_between};

/// Maximum monthly leave an employee can accrue.
pub const MONTHLY_LEAVE_CAP: u32 = 11;

/// Minimum service, in days, before any monthly leave is granted.
pub const MONTHLY_LEAVE_MIN_SERVICE_DAYS: i64 = 30;

/// The result of a monthly leave calculation, including the audit step.
#[derive(Debug, Clone)]
pub struct MonthlyLeaveResult {
    /// Days of monthly leave earned (0..=11).
    pub days: u32,
    /// The audit step recording this calculation.
    pub audit_step: AuditStep,
}

/// Counts monthly leave days earned between `hire_date` and `as_of`.
///
/// Returns 0 when fewer than 30 days have elapsed (this includes an `as_of`
/// before the hire date). Otherwise every month-anniversary of the hire date
/// that is on or before `as_of` counts as one day, capped at
/// [`MONTHLY_LEAVE_CAP`]. Anniversaries clamp to the end of short months, so
/// an employee hired on the 31st completes February on the 28th (or 29th).
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::monthly_leave;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
/// assert_eq!(monthly_leave(hire, as_of), 5);
/// ```
pub fn monthly_leave(hire_date: NaiveDate, as_of: NaiveDate) -> u32 {
    if days_between(hire_date, as_of) < MONTHLY_LEAVE_MIN_SERVICE_DAYS {
        return 0;
    }

    count_month_anniversaries(hire_date, 1, as_of, MONTHLY_LEAVE_CAP)
}

/// Calculates monthly leave and records an audit step.
pub fn calculate_monthly_leave(
    hire_date: NaiveDate,
    as_of: NaiveDate,
    step_number: u32,
) -> MonthlyLeaveResult {
    let elapsed = days_between(hire_date, as_of);
    let days = monthly_leave(hire_date, as_of);

    let reasoning = if elapsed < MONTHLY_LEAVE_MIN_SERVICE_DAYS {
        format!(
            "{} days of service is under the {}-day minimum; no monthly leave",
            elapsed, MONTHLY_LEAVE_MIN_SERVICE_DAYS
        )
    } else if days == MONTHLY_LEAVE_CAP {
        format!("Monthly leave capped at {} days", MONTHLY_LEAVE_CAP)
    } else {
        format!(
            "{} completed month-anniversaries since {}",
            days, hire_date
        )
    };

    let audit_step = AuditStep {
        step_number,
        rule_id: "monthly_leave".to_string(),
        rule_name: "Monthly Leave".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "as_of_date": as_of.to_string(),
            "days_elapsed": elapsed
        }),
        output: serde_json::json!({
            "days": days,
            "capped": days == MONTHLY_LEAVE_CAP
        }),
        reasoning,
    };

    MonthlyLeaveResult { days, audit_step }
}
