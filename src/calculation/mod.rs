//! Calculation logic for the Leave Accrual Engine.
//!
//! This module contains the calendar arithmetic, the monthly accrual rule,
//! the hire-date and fiscal-year annual rules, the policy dispatcher that
//! selects between them, and the leave balance summary.

mod calendar;
mod entitlement;
mod fiscal_year_annual;
mod hire_date_annual;
mod leave_balance;
mod monthly_leave;

pub use calendar::{
    add_months_clamped, days_between, days_in_year, is_leap_year, last_day_of_month, parse_date,
};
pub use entitlement::{leave_entitlement, leave_entitlement_from_strings};
pub use fiscal_year_annual::{
    annual_leave_by_fiscal_year, calculate_annual_leave_by_fiscal_year,
    days_remaining_in_hire_year, FiscalYearAnnualResult, FISCAL_BASE_DAYS,
    FISCAL_MAX_ADDITIONAL_DAYS, FISCAL_SECOND_YEAR_MONTHLY_CAP,
};
pub use hire_date_annual::{
    annual_leave_by_hire_date, calculate_annual_leave_by_hire_date, completed_years,
    HireDateAnnualResult, FIRST_YEAR_DAYS, HIRE_DATE_BASE_DAYS, HIRE_DATE_MAX_DAYS,
};
pub use leave_balance::calculate_leave_balance;
pub use monthly_leave::{
    calculate_monthly_leave, monthly_leave, MonthlyLeaveResult, MONTHLY_LEAVE_CAP,
    MONTHLY_LEAVE_MIN_SERVICE_DAYS,
};
