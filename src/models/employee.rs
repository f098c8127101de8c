//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct: one row of the
//! monthly compensation batch, read-only for the duration of a computation.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// One employee's compensation inputs for a pay month.
///
/// Day counts are signed: the engine does not reject negative values, they
/// flow through the arithmetic unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Employee number ("Emp. No").
    pub employee_number: String,
    /// Employee name; also keys the output document.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// Department, display only.
    #[serde(default)]
    pub department: String,
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Professional tax, deducted as supplied.
    pub professional_tax: Decimal,
    /// Days worked in the month.
    pub working_days: i64,
    /// Leave days taken without pay.
    pub unpaid_leaves: i64,
    /// Leave days taken with pay.
    pub paid_leaves: i64,
    /// Number of days in the pay month.
    pub month_days: i64,
    /// Provident fund universal account number.
    pub pf_uan: String,
    /// Bank name.
    pub bank: String,
    /// Bank account number.
    pub bank_account_number: String,
    /// Bank routing code, display only.
    #[serde(default)]
    pub ifsc: String,
    /// Pay-period label, usually the month name.
    #[serde(default)]
    pub month: String,
}

impl EmployeeRecord {
    /// Working days plus paid leave days.
    ///
    /// Fails with `Arithmetic` when the sum does not fit in an `i64`.
    ///
    /// # Examples
    ///
    /// ```
    /// use payslip_engine::models::EmployeeRecord;
    /// use rust_decimal::Decimal;
    ///
    /// let record = EmployeeRecord {
    ///     employee_number: "E001".to_string(),
    ///     name: "Asha Patil".to_string(),
    ///     designation: "Engineer".to_string(),
    ///     department: "Platform".to_string(),
    ///     gross_salary: Decimal::from(20_000),
    ///     professional_tax: Decimal::from(200),
    ///     working_days: 26,
    ///     unpaid_leaves: 2,
    ///     paid_leaves: 2,
    ///     month_days: 30,
    ///     pf_uan: "100200300400".to_string(),
    ///     bank: "HDFC Bank".to_string(),
    ///     bank_account_number: "50100012345678".to_string(),
    ///     ifsc: "HDFC0000001".to_string(),
    ///     month: "May".to_string(),
    /// };
    /// assert_eq!(record.total_working_days().unwrap(), 28);
    /// ```
    pub fn total_working_days(&self) -> EngineResult<i64> {
        self.working_days
            .checked_add(self.paid_leaves)
            .ok_or_else(|| {
                EngineError::arithmetic(
                    "Paid Leaves",
                    format!(
                        "{} working days plus {} paid leave days overflows",
                        self.working_days, self.paid_leaves
                    ),
                )
            })
    }
}
