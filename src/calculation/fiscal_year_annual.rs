//! Annual leave under the fiscal-year standard.
//!
//! Entitlement is anchored to the calendar year rather than the hire
//! anniversary. Three branches are selected by how many calendar years
//! separate the as-of date from the hire date:
//!
//! - hire year: monthly leave only
//! - second year: the hire year's prorated share of 15 days, plus a second
//!   monthly counter starting at the first hire anniversary (capped at 10)
//! - third year onward: 15 days plus one day for every two further calendar
//!   years, with at most 10 additional days

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use crate::models::{AccrualRule, AuditStep};

use super::calendar::{count_month_anniversaries, days_in_year};
use super::monthly_leave::calculate_monthly_leave;

/// Base annual days under the fiscal-year standard.
pub const FISCAL_BASE_DAYS: u32 = 15;

/// Cap on the second-year monthly component.
pub const FISCAL_SECOND_YEAR_MONTHLY_CAP: u32 = 10;

/// Cap on additional days earned from the third calendar year onward.
pub const FISCAL_MAX_ADDITIONAL_DAYS: u32 = 10;

/// The result of a fiscal-year annual leave calculation.
#[derive(Debug, Clone)]
pub struct FiscalYearAnnualResult {
    /// Days of leave earned; fractional in the second year.
    pub days: Decimal,
    /// The branch that produced `days`.
    pub rule: AccrualRule,
    /// Audit steps recording this calculation, in order.
    pub audit_steps: Vec<AuditStep>,
}

/// Returns the number of days from `hire_date` to Dec 31 of its year, inclusive.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::days_remaining_in_hire_year;
/// use chrono::NaiveDate;
///
/// let hire = NaiveDate::from_ymd_opt(2023, 7, 1).unwrap();
/// assert_eq!(days_remaining_in_hire_year(hire), 184);
/// ```
pub fn days_remaining_in_hire_year(hire_date: NaiveDate) -> u32 {
    days_in_year(hire_date.year()) - hire_date.ordinal0()
}

/// Computes annual leave by the fiscal-year standard.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::annual_leave_by_fiscal_year;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let hire = NaiveDate::from_ymd_opt(2020, 3, 10).unwrap();
/// let as_of = NaiveDate::from_ymd_opt(2025, 3, 10).unwrap();
/// assert_eq!(annual_leave_by_fiscal_year(hire, as_of), Decimal::from(16));
/// ```
pub fn annual_leave_by_fiscal_year(hire_date: NaiveDate, as_of: NaiveDate) -> Decimal {
    calculate_annual_leave_by_fiscal_year(hire_date, as_of, 1).days
}

/// Computes annual leave by the fiscal-year standard with audit steps.
///
/// An as-of year before the hire year yields 0 under
/// [`AccrualRule::NotYetHired`].
pub fn calculate_annual_leave_by_fiscal_year(
    hire_date: NaiveDate,
    as_of: NaiveDate,
    step_number: u32,
) -> FiscalYearAnnualResult {
    let year_diff = as_of.year() - hire_date.year();

    match year_diff {
        diff if diff < 0 => not_yet_hired(hire_date, as_of, step_number),
        0 => hire_year(hire_date, as_of, step_number),
        1 => second_year(hire_date, as_of, step_number),
        _ => third_year_onward(hire_date, as_of, year_diff, step_number),
    }
}

fn not_yet_hired(hire_date: NaiveDate, as_of: NaiveDate, step_number: u32) -> FiscalYearAnnualResult {
    let audit_step = AuditStep {
        step_number,
        rule_id: "fiscal_year_annual".to_string(),
        rule_name: "Fiscal-Year Annual Leave".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "as_of_date": as_of.to_string()
        }),
        output: serde_json::json!({ "days": "0" }),
        reasoning: "As-of year precedes the hire year".to_string(),
    };

    FiscalYearAnnualResult {
        days: Decimal::ZERO,
        rule: AccrualRule::NotYetHired,
        audit_steps: vec![audit_step],
    }
}

fn hire_year(hire_date: NaiveDate, as_of: NaiveDate, step_number: u32) -> FiscalYearAnnualResult {
    debug!(%hire_date, %as_of, "Fiscal-year standard: hire year");
    let monthly = calculate_monthly_leave(hire_date, as_of, step_number);

    FiscalYearAnnualResult {
        days: Decimal::from(monthly.days),
        rule: AccrualRule::FiscalHireYear,
        audit_steps: vec![monthly.audit_step],
    }
}

fn second_year(hire_date: NaiveDate, as_of: NaiveDate, step_number: u32) -> FiscalYearAnnualResult {
    let first_year_days = days_remaining_in_hire_year(hire_date);
    let year_length = days_in_year(hire_date.year());
    let proportional = Decimal::from(first_year_days) * Decimal::from(FISCAL_BASE_DAYS)
        / Decimal::from(year_length);

    // Anniversaries run from hire + 12 months; at most 12 fit in this year.
    let second_year_monthly = count_month_anniversaries(hire_date, 12, as_of, 12);
    let capped_monthly = second_year_monthly.min(FISCAL_SECOND_YEAR_MONTHLY_CAP);

    let days = proportional + Decimal::from(capped_monthly);

    debug!(
        %hire_date,
        %as_of,
        first_year_days,
        second_year_monthly,
        %days,
        "Fiscal-year standard: second year"
    );

    let proration_step = AuditStep {
        step_number,
        rule_id: "fiscal_year_proration".to_string(),
        rule_name: "Fiscal-Year Hire-Year Proration".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "first_year_days": first_year_days,
            "days_in_year": year_length
        }),
        output: serde_json::json!({ "proportional_days": proportional.to_string() }),
        reasoning: format!(
            "({} / {}) x {} = {}",
            first_year_days,
            year_length,
            FISCAL_BASE_DAYS,
            proportional.round_dp(2)
        ),
    };

    let monthly_step = AuditStep {
        step_number: step_number + 1,
        rule_id: "fiscal_year_second_year_monthly".to_string(),
        rule_name: "Fiscal-Year Second-Year Monthly Leave".to_string(),
        input: serde_json::json!({
            "hire_date": hire_date.to_string(),
            "as_of_date": as_of.to_string()
        }),
        output: serde_json::json!({
            "anniversaries": second_year_monthly,
            "days": capped_monthly,
            "capped": second_year_monthly > FISCAL_SECOND_YEAR_MONTHLY_CAP
        }),
        reasoning: format!(
            "{} month-anniversaries since the first hire anniversary, capped at {}: {} days; total {}",
            second_year_monthly,
            FISCAL_SECOND_YEAR_MONTHLY_CAP,
            capped_monthly,
            days.round_dp(2)
        ),
    };

    FiscalYearAnnualResult {
        days,
        rule: AccrualRule::FiscalSecondYear,
        audit_steps: vec![proration_step, monthly_step],
    }
}

fn third_year_onward(
    hire_date: NaiveDate,
    as_of: NaiveDate,
    year_diff: i32,
    step_number: u32,
) -> FiscalYearAnnualResult {
    let additional_years = year_diff - 2;
    let additional_days = if additional_years > 0 {
        (additional_years as u32 / 2).min(FISCAL_MAX_ADDITIONAL_DAYS)
    } else {
        0
    };
    let total = FISCAL_BASE_DAYS + additional_days;

    debug!(
        hire_year = hire_date.year(),
        as_of_year = as_of.year(),
        additional_years,
        total,
        "Fiscal-year standard: third year onward"
    );

    let audit_step = AuditStep {
        step_number,
        rule_id: "fiscal_year_annual".to_string(),
        rule_name: "Fiscal-Year Annual Leave".to_string(),
        input: serde_json::json!({
            "hire_year": hire_date.year(),
            "as_of_year": as_of.year(),
            "additional_years": additional_years
        }),
        output: serde_json::json!({
            "base_days": FISCAL_BASE_DAYS,
            "additional_days": additional_days,
            "days": total
        }),
        reasoning: format!(
            "{} base + {} additional = {} days",
            FISCAL_BASE_DAYS, additional_days, total
        ),
    };

    FiscalYearAnnualResult {
        days: Decimal::from(total),
        rule: AccrualRule::FiscalThirdYearOnward,
        audit_steps: vec![audit_step],
    }
}
