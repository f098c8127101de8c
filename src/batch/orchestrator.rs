//! Batch orchestration.
//!
//! Validates the batch header once, plans output targets under the
//! configured collision policy, prepares the writer once, then calculates,
//! renders and writes each row. A row that fails is recorded in the report
//! and never silently dropped; the remaining rows still run.

use std::collections::{HashMap, HashSet};
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::calculation::calculate_breakdown;
use crate::config::{CollisionPolicy, PayrollConfig};
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, PayrollBreakdown, PayslipDocument};
use crate::render::{PayslipIdentity, render_payslip};

use super::reader::BatchTable;
use super::schema::{COLUMN_NAME, ColumnIndex, validate_schema};
use super::writer::{DocumentWriter, FileWriter, target_name};

/// A payslip that was produced and written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlipOutcome {
    /// One-based data row number.
    pub row: usize,
    /// The employee name.
    pub employee_name: String,
    /// The target the document was written to.
    pub target: String,
    /// The computed breakdown.
    pub breakdown: PayrollBreakdown,
    /// The rendered document.
    pub document: PayslipDocument,
}

/// A row that could not be computed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RowFailure {
    /// One-based data row number.
    pub row: usize,
    /// The employee name as it appears in the row.
    pub employee_name: String,
    /// The error description.
    pub message: String,
}

/// The outcome of one batch run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BatchReport {
    /// Unique identifier of this run.
    pub run_id: Uuid,
    /// When the run started.
    pub generated_at: DateTime<Utc>,
    /// Version of the engine that produced the report.
    pub engine_version: String,
    /// Rows that produced a payslip, in input order.
    pub slips: Vec<SlipOutcome>,
    /// Rows that failed, in input order.
    pub failures: Vec<RowFailure>,
    /// Targets written more than once under the overwrite policy.
    pub overwritten: Vec<String>,
    /// Wall-clock duration of the run in microseconds.
    pub duration_us: u64,
}

impl BatchReport {
    /// Returns true if every row produced a payslip.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Calculates and renders the payslip for one record.
///
/// # Errors
///
/// Returns `Arithmetic` when the breakdown or the document totals cannot be
/// computed.
pub fn generate_payslip(
    record: &EmployeeRecord,
    config: &PayrollConfig,
) -> EngineResult<(PayrollBreakdown, PayslipDocument)> {
    let breakdown = calculate_breakdown(record, &config.rates)?;
    let document = render_payslip(PayslipIdentity::from(record), &breakdown, &config.company)?;
    Ok((breakdown, document))
}

/// Runs payslip batches against a configuration.
///
/// # Example
///
/// ```
/// use payslip_engine::batch::{BatchOrchestrator, BatchTable, MemoryWriter};
/// use payslip_engine::config::PayrollConfig;
///
/// let csv = "Emp. No,Name,Designation,Department,Gross Salary,Professional Tax,\
/// Working days,Unpaid Leaves,Paid Leaves,PF UAN,Bank Ac No,Bank,IFSC,Month,Month days\n\
/// E001,Asha Patil,Engineer,Platform,20000,200,30,0,0,UAN1,AC1,HDFC,HDFC0001,May,30\n";
///
/// let table = BatchTable::from_reader(csv.as_bytes()).unwrap();
/// let config = PayrollConfig::default();
/// let mut writer = MemoryWriter::new();
///
/// let report = BatchOrchestrator::new(&config).run(&table, &mut writer).unwrap();
/// assert!(report.is_success());
/// assert!(writer.documents().contains_key("Asha Patil_Salary_Slip.json"));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchOrchestrator<'a> {
    config: &'a PayrollConfig,
}

impl<'a> BatchOrchestrator<'a> {
    /// Creates an orchestrator for the given configuration.
    pub fn new(config: &'a PayrollConfig) -> Self {
        Self { config }
    }

    /// Runs a batch, handing every document to `writer`.
    ///
    /// # Errors
    ///
    /// - `Validation` if required columns are missing; nothing is written.
    /// - `DuplicateOutput` under [`CollisionPolicy::Error`] when two rows
    ///   map to the same target; nothing is written.
    /// - `Output` if the writer fails; the run stops at that row.
    ///
    /// Per-row `Arithmetic` failures do not fail the run; they are listed
    /// in [`BatchReport::failures`].
    pub fn run<W: DocumentWriter>(
        &self,
        table: &BatchTable,
        writer: &mut W,
    ) -> EngineResult<BatchReport> {
        let run_id = Uuid::new_v4();
        let generated_at = Utc::now();
        let start_time = Instant::now();
        info!(run_id = %run_id, rows = table.len(), "Starting payslip batch");

        let columns = validate_schema(table.headers()).inspect_err(|err| {
            warn!(run_id = %run_id, error = %err, "Batch schema validation failed");
        })?;

        let plan = self.plan_targets(&columns, table, writer.extension())?;
        for target in &plan.overwritten {
            warn!(run_id = %run_id, target = %target, "Duplicate employee name; later slip overwrites earlier");
        }

        writer.prepare()?;

        let mut slips = Vec::new();
        let mut failures = Vec::new();

        for (index, (row, target)) in table.rows().iter().zip(plan.targets).enumerate() {
            let row_number = index + 1;
            let employee_name = columns.text(row, COLUMN_NAME).to_string();

            let outcome = columns
                .parse_record(row)
                .and_then(|record| generate_payslip(&record, self.config));

            match outcome {
                Ok((breakdown, document)) => {
                    writer.write(&target, &document)?;
                    debug!(
                        run_id = %run_id,
                        row = row_number,
                        target = %target,
                        net_pay = %document.totals.net_pay,
                        "Generated salary slip"
                    );
                    slips.push(SlipOutcome {
                        row: row_number,
                        employee_name,
                        target,
                        breakdown,
                        document,
                    });
                }
                Err(err) => {
                    warn!(
                        run_id = %run_id,
                        row = row_number,
                        employee = %employee_name,
                        error = %err,
                        "Row failed"
                    );
                    failures.push(RowFailure {
                        row: row_number,
                        employee_name,
                        message: err.to_string(),
                    });
                }
            }
        }

        let duration_us = start_time.elapsed().as_micros() as u64;
        info!(
            run_id = %run_id,
            generated = slips.len(),
            failed = failures.len(),
            duration_us,
            "Payslip batch completed"
        );

        Ok(BatchReport {
            run_id,
            generated_at,
            engine_version: env!("CARGO_PKG_VERSION").to_string(),
            slips,
            failures,
            overwritten: plan.overwritten,
            duration_us,
        })
    }

    /// Assigns a target to every row according to the collision policy.
    ///
    /// Under `Suffix` no two rows share a target: a suffixed name that is
    /// already taken, for example by an employee literally named `Asha_2`,
    /// bumps to the next free occurrence.
    fn plan_targets(
        &self,
        columns: &ColumnIndex,
        table: &BatchTable,
        extension: &str,
    ) -> EngineResult<TargetPlan> {
        let policy = self.config.output.collision_policy;
        let mut seen: HashMap<String, Vec<usize>> = HashMap::new();
        let mut assigned: HashSet<String> = HashSet::with_capacity(table.len());
        let mut targets = Vec::with_capacity(table.len());
        let mut overwritten = Vec::new();

        for (index, row) in table.rows().iter().enumerate() {
            let name = columns.text(row, COLUMN_NAME);
            let base = target_name(name, 1, extension);
            let rows = seen.entry(base.clone()).or_default();
            rows.push(index + 1);
            let mut occurrence = rows.len();

            let target = match policy {
                CollisionPolicy::Suffix => {
                    let mut target = target_name(name, occurrence, extension);
                    while assigned.contains(&target) {
                        occurrence += 1;
                        target = target_name(name, occurrence, extension);
                    }
                    target
                }
                CollisionPolicy::Error | CollisionPolicy::Overwrite => base,
            };
            if !assigned.insert(target.clone())
                && policy == CollisionPolicy::Overwrite
                && !overwritten.contains(&target)
            {
                overwritten.push(target.clone());
            }
            targets.push(target);
        }

        if policy == CollisionPolicy::Error {
            let duplicate = table.rows().iter().find_map(|row| {
                let name = columns.text(row, COLUMN_NAME);
                seen.get(&target_name(name, 1, extension))
                    .filter(|rows| rows.len() > 1)
                    .map(|rows| (name.to_string(), rows.clone()))
            });
            if let Some((name, rows)) = duplicate {
                return Err(EngineError::DuplicateOutput { name, rows });
            }
        }

        Ok(TargetPlan {
            targets,
            overwritten,
        })
    }

    /// Runs a batch from a CSV file into the configured output directory.
    pub fn run_file<P: AsRef<Path>>(&self, input: P) -> EngineResult<BatchReport> {
        let table = BatchTable::from_path(input)?;
        let mut writer = FileWriter::from_config(&self.config.output);
        self.run(&table, &mut writer)
    }
}

struct TargetPlan {
    targets: Vec<String>,
    overwritten: Vec<String>,
}
