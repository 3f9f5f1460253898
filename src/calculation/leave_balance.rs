//! Leave balance summary.
//!
//! Combines an earned entitlement with an employee's leave requests for one
//! calendar year into earned / used / pending / remaining figures.

use chrono::Datelike;
use rust_decimal::Decimal;
use tracing::debug;

use crate::error::EngineResult;
use crate::models::{LeaveBalance, LeaveRequest, LeaveStatus};

/// Calculates the leave balance for `employee_id` in `year`.
///
/// Only requests belonging to the employee whose start date falls in `year`
/// are counted. Approved requests are used, pending requests are held, and
/// rejected requests are ignored. Each request's days come from
/// [`LeaveRequest::days_requested`]. `remaining` is not clamped at zero.
///
/// # Errors
///
/// Returns [`crate::error::EngineError::InvalidLeaveRequest`] if any of the
/// employee's requests has inconsistent dates, whatever its year or status.
///
/// # Example
///
/// ```
/// use leave_accrual::calculation::calculate_leave_balance;
/// use leave_accrual::models::{LeaveRequest, LeaveStatus, LeaveType};
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let requests = vec![LeaveRequest {
///     id: "req_001".to_string(),
///     employee_id: "emp_001".to_string(),
///     leave_type: LeaveType::Full,
///     start_date: NaiveDate::from_ymd_opt(2024, 5, 2).unwrap(),
///     end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
///     status: LeaveStatus::Approved,
/// }];
///
/// let balance = calculate_leave_balance("emp_001", Decimal::from(15), &requests, 2024)?;
/// assert_eq!(balance.used, Decimal::from(2));
/// assert_eq!(balance.remaining, Decimal::from(13));
/// # Ok::<(), leave_accrual::error::EngineError>(())
/// ```
pub fn calculate_leave_balance(
    employee_id: &str,
    earned: Decimal,
    requests: &[LeaveRequest],
    year: i32,
) -> EngineResult<LeaveBalance> {
    let mut used = Decimal::ZERO;
    let mut pending = Decimal::ZERO;

    for request in requests.iter().filter(|r| r.employee_id == employee_id) {
        let days = request.days_requested()?;
        if request.start_date.year() != year {
            continue;
        }
        match request.status {
            LeaveStatus::Approved => used += days,
            LeaveStatus::Pending => pending += days,
            LeaveStatus::Rejected => {}
        }
    }

    let remaining = earned - used - pending;

    debug!(
        employee_id,
        year,
        %earned,
        %used,
        %pending,
        %remaining,
        "Leave balance calculated"
    );

    Ok(LeaveBalance {
        year,
        earned,
        used,
        pending,
        remaining,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EngineError;
    use crate::models::LeaveType;
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn make_date(date_str: &str) -> NaiveDate {
        NaiveDate::parse_from_str(date_str, "%Y-%m-%d").unwrap()
    }

    fn full_day(
        id: &str,
        employee_id: &str,
        start: &str,
        end: &str,
        status: LeaveStatus,
    ) -> LeaveRequest {
        LeaveRequest {
            id: id.to_string(),
            employee_id: employee_id.to_string(),
            leave_type: LeaveType::Full,
            start_date: make_date(start),
            end_date: make_date(end),
            status,
        }
    }

    fn half_day(id: &str, employee_id: &str, date: &str, status: LeaveStatus) -> LeaveRequest {
        LeaveRequest {
            leave_type: LeaveType::Half,
            ..full_day(id, employee_id, date, date, status)
        }
    }

    #[test]
    fn test_approved_and_pending_are_separated() {
        let requests = vec![
            full_day("r1", "emp_001", "2024-03-04", "2024-03-05", LeaveStatus::Approved),
            half_day("r2", "emp_001", "2024-06-10", LeaveStatus::Approved),
            full_day("r3", "emp_001", "2024-09-02", "2024-09-04", LeaveStatus::Pending),
            full_day("r4", "emp_001", "2024-10-01", "2024-10-05", LeaveStatus::Rejected),
        ];

        let balance = calculate_leave_balance("emp_001", dec("15"), &requests, 2024).unwrap();

        assert_eq!(balance.used, dec("2.5"));
        assert_eq!(balance.pending, dec("3"));
        assert_eq!(balance.remaining, dec("9.5"));
        assert_eq!(balance.year, 2024);
    }

    #[test]
    fn test_other_years_and_employees_are_ignored() {
        let requests = vec![
            full_day("r1", "emp_001", "2023-12-28", "2023-12-29", LeaveStatus::Approved),
            full_day("r2", "emp_002", "2024-02-01", "2024-02-04", LeaveStatus::Approved),
            full_day("r3", "emp_001", "2024-02-01", "2024-02-01", LeaveStatus::Approved),
        ];

        let balance = calculate_leave_balance("emp_001", dec("15"), &requests, 2024).unwrap();

        assert_eq!(balance.used, dec("1"));
        assert_eq!(balance.remaining, dec("14"));
    }

    #[test]
    fn test_multi_day_span_counts_each_day() {
        let requests = vec![full_day(
            "r1",
            "emp_001",
            "2024-05-01",
            "2024-05-07",
            LeaveStatus::Approved,
        )];

        let balance = calculate_leave_balance("emp_001", dec("15"), &requests, 2024).unwrap();

        assert_eq!(balance.used, dec("7"));
        assert_eq!(balance.remaining, dec("8"));
    }

    #[test]
    fn test_remaining_can_go_negative() {
        let requests = vec![full_day(
            "r1",
            "emp_001",
            "2024-02-01",
            "2024-02-07",
            LeaveStatus::Approved,
        )];

        let balance = calculate_leave_balance("emp_001", dec("5"), &requests, 2024).unwrap();

        assert_eq!(balance.remaining, dec("-2"));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        let requests = vec![
            full_day("r1", "emp_001", "2024-02-01", "2024-02-01", LeaveStatus::Approved),
            full_day("r2", "emp_001", "2024-05-07", "2024-05-01", LeaveStatus::Approved),
        ];

        match calculate_leave_balance("emp_001", dec("15"), &requests, 2024) {
            Err(EngineError::InvalidLeaveRequest { id, .. }) => assert_eq!(id, "r2"),
            other => panic!("Expected InvalidLeaveRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_other_employees_invalid_requests_are_ignored() {
        let requests = vec![full_day(
            "r1",
            "emp_002",
            "2024-05-07",
            "2024-05-01",
            LeaveStatus::Approved,
        )];

        let balance = calculate_leave_balance("emp_001", dec("15"), &requests, 2024).unwrap();

        assert_eq!(balance.remaining, dec("15"));
    }

    #[test]
    fn test_fractional_earned_carries_through() {
        let balance = calculate_leave_balance("emp_001", dec("13.5616"), &[], 2024).unwrap();
        assert_eq!(balance.remaining, dec("13.5616"));
        assert_eq!(balance.used, Decimal::ZERO);
    }
}
