//! HTTP API module for the Leave Accrual Engine.
//!
//! This module provides the REST API endpoints for computing leave
//! entitlements and leave balances.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::{BalanceRequest, EmployeeRequest, EntitlementRequest};
pub use response::{ApiError, ApiErrorResponse};
pub use state::AppState;
