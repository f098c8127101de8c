//! Batch payslip generation.
//!
//! This module reads employee rows from CSV, validates the header, and
//! drives calculation and rendering for every row, handing the resulting
//! documents to a [`DocumentWriter`].

mod orchestrator;
mod reader;
mod schema;
mod writer;

pub use orchestrator::{BatchOrchestrator, BatchReport, RowFailure, SlipOutcome, generate_payslip};
pub use reader::BatchTable;
pub use schema::{
    COLUMN_BANK, COLUMN_BANK_AC_NO, COLUMN_DEPARTMENT, COLUMN_DESIGNATION, COLUMN_EMP_NO,
    COLUMN_GROSS_SALARY, COLUMN_IFSC, COLUMN_MONTH, COLUMN_MONTH_DAYS, COLUMN_NAME,
    COLUMN_PAID_LEAVES, COLUMN_PF_UAN, COLUMN_PROFESSIONAL_TAX, COLUMN_UNPAID_LEAVES,
    COLUMN_WORKING_DAYS, ColumnIndex, OPTIONAL_COLUMNS, REQUIRED_COLUMNS, validate_schema,
};
pub use writer::{DocumentWriter, FileWriter, MemoryWriter, serialize_document, target_name};
