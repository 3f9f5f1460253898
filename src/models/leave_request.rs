//! Leave request and leave balance models.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Whether a request covers whole days or a single half day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveType {
    /// One or more whole days, from `start_date` through `end_date`.
    #[default]
    Full,
    /// Half a day; starts and ends on the same date.
    Half,
}

/// The approval state of a leave request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LeaveStatus {
    /// Awaiting approval.
    Pending,
    /// Approved; the days count as used.
    Approved,
    /// Rejected; the days do not count.
    Rejected,
}

/// A leave request submitted by an employee.
///
/// The number of days is not supplied by the caller. It follows from the
/// dates and the leave type, see [`LeaveRequest::days_requested`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveRequest {
    /// Unique identifier for the request.
    pub id: String,
    /// The employee who submitted the request.
    pub employee_id: String,
    /// Full-day or half-day leave.
    #[serde(default)]
    pub leave_type: LeaveType,
    /// First day of leave.
    pub start_date: NaiveDate,
    /// Last day of leave (inclusive).
    pub end_date: NaiveDate,
    /// The approval state.
    pub status: LeaveStatus,
}

impl LeaveRequest {
    /// Returns the number of leave days this request consumes.
    ///
    /// A half-day request is 0.5 days. A full-day request counts every
    /// calendar day from `start_date` through `end_date`.
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::InvalidLeaveRequest`] if `end_date` precedes
    /// `start_date`, or if a half-day request spans more than one date.
    ///
    /// # Example
    ///
    /// ```
    /// use leave_accrual::models::{LeaveRequest, LeaveStatus, LeaveType};
    /// use chrono::NaiveDate;
    /// use rust_decimal::Decimal;
    ///
    /// let request = LeaveRequest {
    ///     id: "req_001".to_string(),
    ///     employee_id: "emp_001".to_string(),
    ///     leave_type: LeaveType::Full,
    ///     start_date: NaiveDate::from_ymd_opt(2024, 5, 1).unwrap(),
    ///     end_date: NaiveDate::from_ymd_opt(2024, 5, 3).unwrap(),
    ///     status: LeaveStatus::Approved,
    /// };
    /// assert_eq!(request.days_requested()?, Decimal::from(3));
    /// # Ok::<(), leave_accrual::error::EngineError>(())
    /// ```
    pub fn days_requested(&self) -> EngineResult<Decimal> {
        if self.end_date < self.start_date {
            return Err(self.invalid(format!(
                "end date {} precedes start date {}",
                self.end_date, self.start_date
            )));
        }

        match self.leave_type {
            LeaveType::Half if self.end_date != self.start_date => Err(self.invalid(format!(
                "half-day leave must start and end on the same date, got {} to {}",
                self.start_date, self.end_date
            ))),
            LeaveType::Half => Ok(Decimal::new(5, 1)),
            LeaveType::Full => {
                let span = self.end_date.signed_duration_since(self.start_date).num_days();
                Ok(Decimal::from(span + 1))
            }
        }
    }

    fn invalid(&self, message: String) -> EngineError {
        EngineError::InvalidLeaveRequest {
            id: self.id.clone(),
            message,
        }
    }
}

/// Summary of an employee's leave for a single year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaveBalance {
    /// The calendar year the balance covers.
    pub year: i32,
    /// Days earned under the applicable accrual rule.
    pub earned: Decimal,
    /// Days consumed by approved requests.
    pub used: Decimal,
    /// Days held by pending requests.
    pub pending: Decimal,
    /// `earned - used - pending`; negative when over-committed.
    pub remaining: Decimal,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn request(leave_type: LeaveType, start: NaiveDate, end: NaiveDate) -> LeaveRequest {
        LeaveRequest {
            id: "req_001".to_string(),
            employee_id: "emp_001".to_string(),
            leave_type,
            start_date: start,
            end_date: end,
            status: LeaveStatus::Approved,
        }
    }

    #[test]
    fn test_deserialize_leave_request() {
        let json = r#"{
            "id": "req_001",
            "employee_id": "emp_001",
            "leave_type": "half",
            "start_date": "2024-05-01",
            "end_date": "2024-05-01",
            "status": "approved"
        }"#;

        let request: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_type, LeaveType::Half);
        assert_eq!(request.status, LeaveStatus::Approved);
    }

    #[test]
    fn test_leave_type_defaults_to_full() {
        let json = r#"{
            "id": "req_002",
            "employee_id": "emp_001",
            "start_date": "2024-05-01",
            "end_date": "2024-05-02",
            "status": "pending"
        }"#;

        let request: LeaveRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.leave_type, LeaveType::Full);
    }

    #[test]
    fn test_unknown_leave_type_is_rejected() {
        let json = r#"{
            "id": "req_003",
            "employee_id": "emp_001",
            "leave_type": "vacation",
            "start_date": "2024-05-01",
            "end_date": "2024-05-01",
            "status": "pending"
        }"#;

        assert!(serde_json::from_str::<LeaveRequest>(json).is_err());
    }

    #[test]
    fn test_half_day_is_half() {
        let half = request(LeaveType::Half, date(2024, 5, 1), date(2024, 5, 1));
        assert_eq!(half.days_requested().unwrap(), Decimal::new(5, 1));
    }

    #[test]
    fn test_half_day_spanning_dates_is_rejected() {
        let half = request(LeaveType::Half, date(2024, 5, 1), date(2024, 5, 2));
        match half.days_requested() {
            Err(EngineError::InvalidLeaveRequest { id, .. }) => assert_eq!(id, "req_001"),
            other => panic!("Expected InvalidLeaveRequest, got {:?}", other),
        }
    }

    #[test]
    fn test_single_full_day_is_one() {
        let full = request(LeaveType::Full, date(2024, 5, 1), date(2024, 5, 1));
        assert_eq!(full.days_requested().unwrap(), Decimal::ONE);
    }

    #[test]
    fn test_full_day_span_is_inclusive() {
        let full = request(LeaveType::Full, date(2024, 2, 27), date(2024, 3, 1));
        // Feb 27, 28, 29 and Mar 1
        assert_eq!(full.days_requested().unwrap(), Decimal::from(4));
    }

    #[test]
    fn test_end_before_start_is_rejected() {
        for leave_type in [LeaveType::Full, LeaveType::Half] {
            let backwards = request(leave_type, date(2024, 5, 3), date(2024, 5, 1));
            assert!(matches!(
                backwards.days_requested(),
                Err(EngineError::InvalidLeaveRequest { .. })
            ));
        }
    }

    #[test]
    fn test_leave_status_serialization() {
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Pending).unwrap(),
            "\"pending\""
        );
        assert_eq!(
            serde_json::to_string(&LeaveStatus::Rejected).unwrap(),
            "\"rejected\""
        );
    }
}
