//! Core data models for the payslip engine.
//!
//! This module contains the input record, the derived breakdown, and the
//! rendered document structure.

mod breakdown;
mod document;
mod employee;

pub use breakdown::{DEDUCTION_LABELS, EARNING_LABELS, PayrollBreakdown};
pub use document::{
    Align, Block, BlockKind, Cell, DocumentTotals, Emphasis, PAGE_WIDTH, PayslipDocument, Row,
};
pub use employee::EmployeeRecord;
