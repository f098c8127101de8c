//! HTTP request handlers for the payslip API.
//!
//! This module contains the handler functions for all API endpoints.

use std::time::Instant;

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
    routing::post,
};
use serde::Serialize;
use tracing::{info, warn};
use uuid::Uuid;

use crate::batch::{BatchOrchestrator, BatchTable, MemoryWriter, generate_payslip};
use crate::calculation::calculate_breakdown;
use crate::models::EmployeeRecord;

use super::request::EmployeeRequest;
use super::response::{ApiError, ApiErrorResponse, PayslipResponse};
use super::state::AppState;

/// Creates the API router with all endpoints.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/calculate", post(calculate_handler))
        .route("/payslip", post(payslip_handler))
        .route("/batch", post(batch_handler))
        .with_state(state)
}

fn json_response<T: Serialize>(status: StatusCode, body: T) -> Response {
    (status, [(header::CONTENT_TYPE, "application/json")], Json(body)).into_response()
}

fn error_response(error: ApiErrorResponse) -> Response {
    json_response(error.status, error.error)
}

/// Maps a JSON body rejection to a 400 response.
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
    json_response(StatusCode::BAD_REQUEST, error)
}

/// Handler for POST /calculate.
///
/// Accepts one employee record and returns its payroll breakdown.
async fn calculate_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing calculation request");

    let record: EmployeeRecord = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    let start_time = Instant::now();
    match calculate_breakdown(&record, &state.config().rates) {
        Ok(breakdown) => {
            info!(
                correlation_id = %correlation_id,
                employee = %record.employee_number,
                net_salary = %breakdown.net_salary,
                duration_us = start_time.elapsed().as_micros(),
                "Calculation completed successfully"
            );
            json_response(StatusCode::OK, breakdown)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Calculation failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /payslip.
///
/// Accepts one employee record and returns the breakdown together with the
/// rendered payslip document.
async fn payslip_handler(
    State(state): State<AppState>,
    payload: Result<Json<EmployeeRequest>, JsonRejection>,
) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(correlation_id = %correlation_id, "Processing payslip request");

    let record: EmployeeRecord = match payload {
        Ok(Json(req)) => req.into(),
        Err(rejection) => return rejection_response(correlation_id, rejection),
    };

    match generate_payslip(&record, state.config()) {
        Ok((breakdown, document)) => {
            info!(
                correlation_id = %correlation_id,
                employee = %record.employee_number,
                net_pay = %document.totals.net_pay,
                "Payslip rendered"
            );
            json_response(StatusCode::OK, PayslipResponse { breakdown, document })
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Payslip rendering failed"
            );
            error_response(err.into())
        }
    }
}

/// Handler for POST /batch.
///
/// Accepts CSV text and returns the batch report. Documents are kept in
/// memory and returned in the report; nothing is written to disk.
async fn batch_handler(State(state): State<AppState>, body: String) -> Response {
    let correlation_id = Uuid::new_v4();
    info!(
        correlation_id = %correlation_id,
        bytes = body.len(),
        "Processing batch request"
    );

    let result = BatchTable::from_reader(body.as_bytes()).and_then(|table| {
        let mut writer = MemoryWriter::new();
        BatchOrchestrator::new(state.config()).run(&table, &mut writer)
    });

    match result {
        Ok(report) => {
            info!(
                correlation_id = %correlation_id,
                run_id = %report.run_id,
                generated = report.slips.len(),
                failed = report.failures.len(),
                "Batch request completed"
            );
            json_response(StatusCode::OK, report)
        }
        Err(err) => {
            warn!(
                correlation_id = %correlation_id,
                error = %err,
                "Batch request rejected"
            );
            error_response(err.into())
        }
    }
}
