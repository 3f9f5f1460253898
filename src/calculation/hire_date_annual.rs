//! Annual leave under the hire-date standard.
//!
//! Entitlement is anchored to the employee's personal hire anniversary:
//! monthly leave until the first anniversary, then 15 days rising by one day
//! for every two further completed years, capped at 25.

use chrono::{Datelike, NaiveDate};
use tracing::debug;

use crate::models::AuditStep;

use super::calendar::days_between;
use super::monthly_leave::calculate_monthly_leave;

/// Days granted on completing the first year of service.
pub const HIRE_DATE_BASE_DAYS: u32 = 15;

/// Upper bound on hire-date annual leave.
pub const HIRE_DATE_MAX_DAYS: u32 = 25;

/// Elapsed days below which the employee is still on monthly accrual.
pub const FIRST_YEAR_DAYS: i64 = 365;

/// The result of a hire-date annual leave calculation.
#[derive(Debug, Clone)]
pub struct HireDateAnnualResult {
    /// Days of leave earned.
    pub days: u32,
    /// Whether the first-year monthly rule produced `days`.
    pub monthly_only: bool,
    /// Completed years of service, when the annual ladder was used.
    pub years_worked: Option<i32>,
    /// Audit steps recording this calculation, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Returns completed years of service, counting the anniversary day itself.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::completed_years;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// assert_eq!(completed_years(hire, NaiveDate::from_ymd_opt(2026, 1, 14).unwrap()), 2);
/// assert_eq!(completed_years(hire, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()), 3);
/// ```
pub fn completed_years(hire_date: NaiveDate, as_of: NaiveDate) -> i32 {
    let mut years = as_of.year() - hire_date.year();
    if (as_of.month(), as_of.day()) < (hire_date.month(), hire_date.day()) {
        years -= 1;
    }
    years
}

/// Computes annual leave by the hire-date standard.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::annual_leave_by_hire_date;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 1, 15).unwrap();
/// assert_eq!(annual_leave_by_hire_date(hire, NaiveDate::from_ymd_opt(2023, 6, 15).unwrap()), 5);
/// assert_eq!(annual_leave_by_hire_date(hire, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()), 15);
/// assert_eq!(annual_leave_by_hire_date(hire, NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()), 16);
/// ```
pub fn annual_leave_by_hire_date(hire_date: NaiveDate, as_of: NaiveDate) -> u32 {
    calculate_annual_leave_by_hire_date(hire_date, as_of, 1).days
}

/// Computes annual leave by the hire-date standard with audit steps.
///
/// # Arguments
///
/// * `hire_date` - The employee's hire date
/// * `as_of` - The date to compute the entitlement for
/// * `step_number` - The step number for audit trail sequencing
///
/// # Returns
///
/// Under 365 elapsed days the monthly rule is used as-is. Otherwise the
/// result is `min(25, 15 + (years_worked - 1) / 2)`, or 0 if the anniversary
/// has not been reached despite 365 elapsed days (a Feb 29 in the interval).
pub fn calculate_annual_leave_by_hire_date(
    hire_date: NaiveDate,
    as_of: NaiveDate,
    step_number: u32,
) -> HireDateAnnualResult {
    let elapsed = days_between(hire_date, as_of);

    if elapsed < FIRST_YEAR_DAYS {
        debug!(%hire_date, %as_of, elapsed, "Hire-date standard: first year, using monthly leave");
        let monthly = calculate_monthly_leave(hire_date, as_of, step_number);
        return HireDateAnnualResult {
            days: monthly.days,
            monthly_only: true,
            years_worked: None,
            audit_steps: vec![monthly.audit_step],
        };
    }

    let years_worked = completed_years(hire_date, as_of);

    let (days, reasoning) = if years_worked < 1 {
        (
            0,
            format!(
                "{} days elapsed but the first anniversary has not been reached",
                elapsed
            ),
        )
    } else {
        let additional = (years_worked as u32 - 1) / 2;
        let days = (HIRE_DATE_BASE_DAYS + additional).min(HIRE_DATE_MAX_DAYS);
        (
            days,
            format!(
                "{} years worked: {} base + {} additional = {} days (max {})",
                years_worked,
                HIRE_DATE_BASE_DAYS,
                additional,
                days,
                HIRE_DATE_MAX_DAYS
            ),
        )
    };

    debug!(%hire_date, %as_of, years_worked, days, "Hire-date standard: annual ladder");

    let audit_step = AuditStep {
        step_number,
        rule_id: "hire_date_annual".to_string(),
        rule_name: "Hire-Date Annual Leave".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "as_of_date": as_of.to_string(),
            "days_elapsed": elapsed
        }),
        output: serde_json::json!({
            "years_worked": years_worked,
            "days": days
        }),
        reasoning,
    };

    HireDateAnnualResult {
        days,
        monthly_only: false,
        years_worked: Some(years_worked),
        audit_steps: vec![audit_step],
    }
}
