//! Request types for the Leave Accrual Engine API.
//!
//! Dates arrive as strings and are parsed by the engine, so a malformed date
//! surfaces as `INVALID_DATE` rather than a generic JSON error.

use serde::{Deserialize, Serialize};

use crate::models::LeaveRequest;

/// Request body for the `/entitlement` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EntitlementRequest {
    /// The employee information.
    pub employee: EmployeeRequest,
    /// Explicit standard; when absent the employee's branch is consulted.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leave_calculation_standard: Option<String>,
    /// The date to compute for (`YYYY-MM-DD`); defaults to today (UTC).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub as_of_date: Option<String>,
}

/// Employee information in a request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's display name.
    #[serde(default)]
    pub name: String,
    /// Name of the employee's branch.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub branch: Option<String>,
    /// Hire date as `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<String>,
}

/// Request body for the `/balance` endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRequest {
    /// The entitlement portion of the request.
    #[serde(flatten)]
    pub entitlement: EntitlementRequest,
    /// The employee's leave requests.
    #[serde(default)]
    pub leave_requests: Vec<LeaveRequest>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_entitlement_request() {
        let json = r#"{
            "employee": {
                "id": "emp_001",
                "name": "Kim Minji",
                "branch": "Seoul",
                "hire_date": "2023-07-01"
            },
            "as_of_date": "2024-12-31"
        }"#;

        let request: EntitlementRequest = serde_json::from_str(json).unwrap();
        assert_eq!(request.employee.id, "emp_001");
        assert_eq!(request.employee.branch.as_deref(), Some("Seoul"));
        assert_eq!(request.as_of_date.as_deref(), Some("2024-12-31"));
        assert!(request.leave_calculation_standard.is_none());
    }

    #[test]
    fn test_deserialize_minimal_request() {
        let json = r#"{ "employee": { "id": "emp_002" } }"#;

        let request: EntitlementRequest = serde_json::from_str(json).unwrap();
        assert!(request.employee.hire_date.is_none());
        assert!(request.as_of_date.is_none());
    }

    #[test]
    fn test_deserialize_balance_request_with_leave_requests() {
        let json = r#"{
            "employee": { "id": "emp_001", "hire_date": "2020-03-10" },
            "leave_calculation_standard": "fiscal_year",
            "as_of_date": "2025-03-10",
            "leave_requests": [
                {
                    "id": "req_001",
                    "employee_id": "emp_001",
                    "leave_type": "half",
                    "start_date": "2025-02-03",
                    "end_date": "2025-02-03",
                    "status": "approved"
                }
            ]
        }"#;

        let request: BalanceRequest = serde_json::from_str(json).unwrap();
        assert_eq!(
            request.entitlement.leave_calculation_standard.as_deref(),
            Some("fiscal_year")
        );
        assert_eq!(request.leave_requests.len(), 1);
    }

    #[test]
    fn test_missing_employee_id_is_rejected() {
        let json = r#"{ "employee": { "hire_date": "2020-03-10" } }"#;
        let result: Result<EntitlementRequest, _> = serde_json::from_str(json);
        assert!(result.is_err());
    }
}
