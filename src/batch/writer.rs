//! Payslip output writers.
//!
//! The orchestrator hands each rendered document to a [`DocumentWriter`]
//! under a target name derived from the employee name. [`FileWriter`]
//! writes to a directory; [`MemoryWriter`] keeps documents in memory.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::{OutputConfig, OutputFormat};
use crate::error::{EngineError, EngineResult};
use crate::models::PayslipDocument;
use crate::render::layout_text;

/// Receives rendered payslips.
pub trait DocumentWriter {
    /// Makes the destination ready. Called once per batch, before any write.
    fn prepare(&mut self) -> EngineResult<()>;

    /// Writes one document under the given target name.
    fn write(&mut self, target: &str, document: &PayslipDocument) -> EngineResult<()>;

    /// File extension of written targets, without the dot.
    fn extension(&self) -> &str;
}

/// Builds the target name for an employee's payslip.
///
/// The first occurrence of a name is `{Name}_Salary_Slip.{ext}`; later
/// occurrences are numbered from 2. Path separators in the name are
/// replaced with underscores.
///
/// # Examples
///
/// ```
/// use payslip_engine::batch::target_name;
///
/// assert_eq!(target_name("Asha Patil", 1, "txt"), "Asha Patil_Salary_Slip.txt");
/// assert_eq!(target_name("Asha Patil", 2, "txt"), "Asha Patil_2_Salary_Slip.txt");
/// assert_eq!(target_name("A/B", 1, "json"), "A_B_Salary_Slip.json");
/// ```
pub fn target_name(name: &str, occurrence: usize, extension: &str) -> String {
    let safe: String = name
        .chars()
        .map(|c| if matches!(c, '/' | '\\') { '_' } else { c })
        .collect();
    if occurrence <= 1 {
        format!("{}_Salary_Slip.{}", safe, extension)
    } else {
        format!("{}_{}_Salary_Slip.{}", safe, occurrence, extension)
    }
}

/// Serializes a document in the given format.
pub fn serialize_document(
    document: &PayslipDocument,
    format: OutputFormat,
) -> EngineResult<String> {
    match format {
        OutputFormat::Text => Ok(layout_text(document)),
        OutputFormat::Json => {
            serde_json::to_string_pretty(document).map_err(|e| EngineError::Output {
                path: document.employee_name.clone(),
                message: e.to_string(),
            })
        }
    }
}

/// Writes payslips as files in a directory.
#[derive(Debug, Clone)]
pub struct FileWriter {
    directory: PathBuf,
    format: OutputFormat,
}

impl FileWriter {
    /// Creates a writer for the given directory and format.
    pub fn new(directory: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            directory: directory.into(),
            format,
        }
    }

    /// Creates a writer from the output configuration.
    pub fn from_config(output: &OutputConfig) -> Self {
        Self::new(output.directory.clone(), output.format)
    }

    /// The output directory.
    pub fn directory(&self) -> &Path {
        &self.directory
    }
}

impl DocumentWriter for FileWriter {
    /// Creates the output directory if absent; idempotent.
    fn prepare(&mut self) -> EngineResult<()> {
        fs::create_dir_all(&self.directory).map_err(|e| EngineError::Output {
            path: self.directory.display().to_string(),
            message: e.to_string(),
        })
    }

    fn write(&mut self, target: &str, document: &PayslipDocument) -> EngineResult<()> {
        let path = self.directory.join(target);
        let content = serialize_document(document, self.format)?;
        fs::write(&path, content).map_err(|e| EngineError::Output {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    fn extension(&self) -> &str {
        self.format.extension()
    }
}

/// Keeps written payslips in memory, keyed by target name.
#[derive(Debug, Clone, Default)]
pub struct MemoryWriter {
    documents: BTreeMap<String, PayslipDocument>,
    prepare_calls: usize,
    write_calls: usize,
}

impl MemoryWriter {
    /// Creates an empty writer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Documents currently held, keyed by target name.
    pub fn documents(&self) -> &BTreeMap<String, PayslipDocument> {
        &self.documents
    }

    /// How many times [`DocumentWriter::prepare`] was called.
    pub fn prepare_calls(&self) -> usize {
        self.prepare_calls
    }

    /// How many writes were made, including overwrites.
    pub fn write_calls(&self) -> usize {
        self.write_calls
    }
}

impl DocumentWriter for MemoryWriter {
    fn prepare(&mut self) -> EngineResult<()> {
        self.prepare_calls += 1;
        Ok(())
    }

    fn write(&mut self, target: &str, document: &PayslipDocument) -> EngineResult<()> {
        self.write_calls += 1;
        self.documents.insert(target.to_string(), document.clone());
        Ok(())
    }

    fn extension(&self) -> &str {
        "json"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DocumentTotals;
    use rust_decimal::Decimal;

    fn document(name: &str) -> PayslipDocument {
        PayslipDocument {
            employee_name: name.to_string(),
            employee_number: "E001".to_string(),
            period: "May".to_string(),
            blocks: vec![],
            totals: DocumentTotals {
                gross_salary: Decimal::from(20_000),
                total_earnings: Decimal::from(20_000),
                total_deductions: Decimal::from(1_550),
                net_pay: Decimal::from(18_450),
                amount_in_words: "Eighteen Thousand, Four Hundred And Fifty Only".to_string(),
            },
        }
    }

    #[test]
    fn test_target_name_numbers_later_occurrences() {
        assert_eq!(target_name("Ravi", 0, "txt"), "Ravi_Salary_Slip.txt");
        assert_eq!(target_name("Ravi", 3, "txt"), "Ravi_3_Salary_Slip.txt");
    }

    #[test]
    fn test_target_name_replaces_path_separators() {
        assert_eq!(target_name("..\\x/y", 1, "txt"), ".._x_y_Salary_Slip.txt");
    }

    #[test]
    fn test_file_writer_creates_directory_idempotently() {
        let root = tempfile::tempdir().unwrap();
        let directory = root.path().join("salary_slips");
        let mut writer = FileWriter::new(&directory, OutputFormat::Text);

        writer.prepare().unwrap();
        writer.prepare().unwrap();

        assert!(directory.is_dir());
    }

    #[test]
    fn test_file_writer_writes_text() {
        let root = tempfile::tempdir().unwrap();
        let mut writer = FileWriter::new(root.path(), OutputFormat::Text);
        writer.prepare().unwrap();

        writer
            .write("Asha_Salary_Slip.txt", &document("Asha"))
            .unwrap();

        let written = fs::read_to_string(root.path().join("Asha_Salary_Slip.txt")).unwrap();
        assert_eq!(written, layout_text(&document("Asha")));
    }

    #[test]
    fn test_file_writer_writes_json() {
        let root = tempfile::tempdir().unwrap();
        let mut writer = FileWriter::new(root.path(), OutputFormat::Json);
        assert_eq!(writer.extension(), "json");
        writer.prepare().unwrap();

        writer
            .write("Asha_Salary_Slip.json", &document("Asha"))
            .unwrap();

        let written = fs::read_to_string(root.path().join("Asha_Salary_Slip.json")).unwrap();
        let parsed: PayslipDocument = serde_json::from_str(&written).unwrap();
        assert_eq!(parsed, document("Asha"));
    }

    #[test]
    fn test_file_writer_reports_unwritable_directory() {
        let root = tempfile::tempdir().unwrap();
        let blocker = root.path().join("occupied");
        fs::write(&blocker, "not a directory").unwrap();

        let mut writer = FileWriter::new(&blocker, OutputFormat::Text);
        let result = writer.prepare();

        assert!(matches!(result, Err(EngineError::Output { .. })));
    }

    #[test]
    fn test_memory_writer_counts_overwrites() {
        let mut writer = MemoryWriter::new();
        writer.prepare().unwrap();
        writer.write("A_Salary_Slip.json", &document("A")).unwrap();
        writer.write("A_Salary_Slip.json", &document("A")).unwrap();

        assert_eq!(writer.prepare_calls(), 1);
        assert_eq!(writer.write_calls(), 2);
        assert_eq!(writer.documents().len(), 1);
    }
}
