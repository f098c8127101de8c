//! Error types for the payslip engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every failure that can occur while validating a batch, computing a
//! breakdown, rendering a payslip, or writing it out.

use thiserror::Error;

/// The main error type for the payslip engine.
///
/// All fallible operations in the engine return this error type, making it
/// easy to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payslip_engine::error::EngineError;
///
/// let error = EngineError::Validation {
///     missing: vec!["Bank".to_string()],
/// };
/// assert_eq!(error.to_string(), "Missing columns in file: Bank");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// One or more required columns are absent from the batch header.
    #[error("Missing columns in file: {}", missing.join(", "))]
    Validation {
        /// Every missing column, in canonical schema order.
        missing: Vec<String>,
    },

    /// A record could not be computed: zero month days or a non-numeric field.
    #[error("Arithmetic error in field '{field}': {message}")]
    Arithmetic {
        /// The input field involved in the failure.
        field: String,
        /// A description of the failure.
        message: String,
    },

    /// Two records would be written to the same output target.
    #[error("Duplicate output for employee '{name}' (rows {})", rows.iter().map(ToString::to_string).collect::<Vec<_>>().join(", "))]
    DuplicateOutput {
        /// The employee name shared by the records.
        name: String,
        /// One-based data row numbers sharing the name.
        rows: Vec<usize>,
    },

    /// The batch input could not be read as delimited text.
    #[error("Failed to read batch input: {message}")]
    BatchRead {
        /// A description of the read failure.
        message: String,
    },

    /// An output file or directory could not be written.
    #[error("Failed to write '{path}': {message}")]
    Output {
        /// The path being written.
        path: String,
        /// A description of the I/O failure.
        message: String,
    },
}

impl EngineError {
    /// Builds an [`EngineError::Arithmetic`] for the given field.
    pub fn arithmetic(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Arithmetic {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl From<csv::Error> for EngineError {
    fn from(error: csv::Error) -> Self {
        Self::BatchRead {
            message: error.to_string(),
        }
    }
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
