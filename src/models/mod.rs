//! Core data models for the Leave Accrual Engine.
//!
//! This module contains all the domain models used throughout the engine.

mod accrual_result;
mod branch;
mod employee;
mod leave_request;

pub use accrual_result::{AccrualResult, AccrualRule, AuditStep, AuditWarning, EntitlementReport};
pub use branch::{Branch, LeaveStandard};
pub use employee::Employee;
pub use leave_request::{LeaveBalance, LeaveRequest, LeaveStatus, LeaveType};
