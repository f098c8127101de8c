//! HTTP API for the payslip engine.
//!
//! This module provides REST endpoints that compute a single breakdown,
//! render a single payslip, or run a whole CSV batch in memory.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::EmployeeRequest;
pub use response::{ApiError, ApiErrorResponse, PayslipResponse};
pub use state::AppState;
