//! Delimited-text batch input.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, StringRecord, Trim};

use crate::error::{EngineError, EngineResult};

/// A batch of employee rows as read from CSV.
///
/// Headers and cells are whitespace-trimmed. Rows may be shorter or longer
/// than the header; missing cells read as empty.
#[derive(Debug, Clone, Default)]
pub struct BatchTable {
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl BatchTable {
    /// Reads a batch from any CSV source.
    ///
    /// # Examples
    ///
    /// ```
    /// use payslip_engine::batch::BatchTable;
    ///
    /// let csv = "Name , Gross Salary\nAsha Patil, 20000\n";
    /// let table = BatchTable::from_reader(csv.as_bytes()).unwrap();
    /// assert_eq!(table.headers(), ["Name", "Gross Salary"]);
    /// assert_eq!(table.len(), 1);
    /// ```
    pub fn from_reader<R: Read>(reader: R) -> EngineResult<Self> {
        let mut csv = ReaderBuilder::new()
            .flexible(true)
            .trim(Trim::All)
            .from_reader(reader);

        let headers = csv.headers()?.iter().map(str::to_string).collect();
        let rows = csv.records().collect::<Result<Vec<_>, _>>()?;

        Ok(Self { headers, rows })
    }

    /// Reads a batch from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| EngineError::BatchRead {
            message: format!("{}: {}", path.display(), e),
        })?;
        Self::from_reader(file)
    }

    /// Builds a table from already-split headers and rows.
    pub fn new(headers: Vec<String>, rows: Vec<StringRecord>) -> Self {
        Self { headers, rows }
    }

    /// The header names.
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// The data rows.
    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    /// Number of data rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the batch has no data rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
