//! HTTP request handlers for the Leave Accrual Engine API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use chrono::{Datelike, NaiveDate, Utc};
use tracing::{info, warn};
use uuid::Uuid;

use crate::calculation::{calculate_leave_balance, leave_entitlement_from_strings};
use crate::config::ConfigLoader;
use crate::error::EngineResult;
use crate::models::{AccrualResult, AuditWarning, EntitlementReport, LeaveBalance};

use super::request::{BalanceRequest, EntitlementRequest};
use super::response::{ApiError, ApiErrorResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/entitlement", post(entitlement_handler))
        .route("/balance", post(balance_handler))
        .with_state(state)
}

/// Handler for POST /entitlement.
///
/// Returns the employee's leave entitlement as of the requested date.
async fn entitlement_handler(
    State(state): State<AppState>,
    payload: Result<Json<EntitlementRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing entitlement request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match resolve_entitlement(&request, state.config(), today()) {
        Ok(entitlement) => {
            let report = build_report(
                correlation_id,
                request.employee.id,
                entitlement,
                None,
                start_time,
            );
            info!(
                correlation_id = %correlation_id,
                employee_id = %report.employee_id,
                standard = %report.entitlement.standard,
                days = %report.entitlement.days,
                duration_us = report.duration_us,
                "Entitlement calculated"
            );
            json_ok(&report)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Entitlement calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Handler for POST /balance.
///
/// Returns the entitlement together with the leave balance for the as-of year.
async fn balance_handler(
    State(state): State<AppState>,
    payload: Result<Json<BalanceRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing balance request");

    let request = match payload {
        Ok(Json(req)) => req,
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    let outcome = resolve_entitlement(&request.entitlement, state.config(), today())
        .and_then(|entitlement| {
            let balance = balance_for(&request, &entitlement)?;
            Ok((entitlement, balance))
        });

    match outcome {
        Ok((entitlement, balance)) => {
            let report = build_report(
                correlation_id,
                request.entitlement.employee.id,
                entitlement,
                Some(balance),
                start_time,
            );
            info!(
                correlation_id = %correlation_id,
                employee_id = %report.employee_id,
                leave_requests = request.leave_requests.len(),
                duration_us = report.duration_us,
                "Leave balance calculated"
            );
            json_ok(&report)
        }
        Err(err) => {
            warn!(correlation_id = %correlation_id, error = %err, "Balance calculation failed");
            ApiErrorResponse::from(err).into_response()
        }
    }
}

/// Computes the entitlement for a request.
///
/// An explicit `leave_calculation_standard` wins; otherwise the employee's
/// branch is looked up in the configured directory. A branch name that is not
/// configured falls back to the hire-date standard with a warning, as does a
/// configured branch whose standard is not recognized.
fn resolve_entitlement(
    request: &EntitlementRequest,
    config: &ConfigLoader,
    today: NaiveDate,
) -> EngineResult<AccrualResult> {
    let mut warnings = Vec::new();

    let standard = match request.leave_calculation_standard.as_deref() {
        Some(raw) => Some(raw),
        None => match request.employee.branch.as_deref() {
            Some(name) => match config.get_branch(name) {
                Some(branch) => branch.leave_calculation_standard.as_deref(),
                None => {
                    warn!(branch = %name, "Branch not configured, using hire-date standard");
                    warnings.push(AuditWarning {
                        code: "UNKNOWN_BRANCH".to_string(),
                        message: format!(
                            "Branch '{}' is not configured; hire_date was used",
                            name
                        ),
                        severity: "low".to_string(),
                    });
                    None
                }
            },
            None => None,
        },
    };

    let as_of = request
        .as_of_date
        .clone()
        .unwrap_or_else(|| today.to_string());

    let mut result = leave_entitlement_from_strings(
        request.employee.hire_date.as_deref(),
        standard,
        &as_of,
        config.policy(),
    )?;
    result.warnings.extend(warnings);

    Ok(result)
}

fn balance_for(
    request: &BalanceRequest,
    entitlement: &AccrualResult,
) -> EngineResult<LeaveBalance> {
    calculate_leave_balance(
        &request.entitlement.employee.id,
        entitlement.days,
        &request.leave_requests,
        entitlement.as_of_date.year(),
    )
}

fn build_report(
    calculation_id: Uuid,
    employee_id: String,
    entitlement: AccrualResult,
    balance: Option<LeaveBalance>,
    start_time: Instant,
) -> EntitlementReport {
    EntitlementReport {
        calculation_id,
        timestamp: Utc::now(),
        engine_version: env!("CARGO_PKG_VERSION").to_string(),
        employee_id,
        entitlement,
        balance,
        duration_us: start_time.elapsed().as_micros() as u64,
    }
}

fn today() -> NaiveDate {
    Utc::now().date_naive()
}

fn json_ok(report: &EntitlementReport) -> Response {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "application/json")],
        Json(report),
    )
        .into_response()
}

fn rejection_response(correlation_id: Uuid, rejection: JsonRejection) -> Response {
    let error = match rejection {
        JsonRejection::JsonDataError(err) => {
            let body_text = err.body_text();
            warn!(
                correlation_id = %correlation_id,
                error = %body_text,
                "JSON data error"
            );
            if body_text.contains("missing field") {
                ApiError::validation_error(body_text)
            } else {
                ApiError::malformed_json(body_text)
            }
        }
        JsonRejection::JsonSyntaxError(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "JSON syntax error"
            );
            ApiError::malformed_json(format!("Invalid JSON syntax: {}", err))
        }
        JsonRejection::MissingJsonContentType(_) => {
            ApiError::new("MISSING_CONTENT_TYPE", "Content-Type must be application/json")
        }
        _ => ApiError::malformed_json("Failed to parse request body"),
    };

    ApiErrorResponse::bad_request(error).into_response()
}
