//! Payroll breakdown model.
//!
//! This module contains the [`PayrollBreakdown`] type: every amount derived
//! from one [`EmployeeRecord`](super::EmployeeRecord), at full decimal
//! precision. Rounding happens only when the breakdown is presented.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Earnings labels, in the order they appear on a payslip.
pub const EARNING_LABELS: [&str; 5] = [
    "Basic Salary",
    "House Rent Allowance",
    "Medical Allowance",
    "Canteen Allowance",
    "Attendance Allowance",
];

/// Deduction labels, in the order they appear on a payslip.
pub const DEDUCTION_LABELS: [&str; 5] = [
    "Professional Tax",
    "Employee PF",
    "ESIC",
    "TDS",
    "Leave Deduction",
];

/// The derived pay for one employee and one month.
///
/// A breakdown is created fresh by
/// [`calculate_breakdown`](crate::calculation::calculate_breakdown) and is
/// never mutated afterwards.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::calculate_breakdown;
/// use payslip_engine::config::StatutoryRates;
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
///     working_days: 30,
///     unpaid_leaves: 0,
///     paid_leaves: 0,
///     month_days: 30,
///     pf_uan: "100200300400".to_string(),
///     bank: "HDFC Bank".to_string(),
///     bank_account_number: "50100012345678".to_string(),
///     ifsc: "HDFC0000001".to_string(),
///     month: "May".to_string(),
/// };
///
/// let breakdown = calculate_breakdown(&record, &StatutoryRates::default()).unwrap();
/// assert_eq!(breakdown.earnings()[0].0, "Basic Salary");
/// assert_eq!(breakdown.deductions()[3], ("TDS", Decimal::ZERO));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollBreakdown {
    /// The gross salary the breakdown was derived from.
    pub gross_salary: Decimal,
    /// Working days plus paid leave days.
    pub total_working_days: i64,
    /// Basic salary, prorated over total working days.
    pub basic_salary: Decimal,
    /// House rent allowance, prorated over working days.
    pub house_rent_allowance: Decimal,
    /// Medical allowance, prorated over working days.
    pub medical_allowance: Decimal,
    /// Canteen allowance, prorated over working days.
    pub canteen_allowance: Decimal,
    /// Attendance allowance, prorated over working days.
    pub attendance_allowance: Decimal,
    /// Sum of basic salary and the four allowances.
    pub total_earnings: Decimal,
    /// Provident fund deduction.
    pub provident_fund: Decimal,
    /// Employee state insurance deduction.
    pub esic: Decimal,
    /// Deduction for unpaid leave days.
    pub leave_deduction: Decimal,
    /// Professional tax, copied from the record.
    pub professional_tax: Decimal,
    /// Tax deducted at source.
    pub tds: Decimal,
    /// Sum of all five deductions.
    pub total_deductions: Decimal,
    /// Gross salary less all deductions.
    pub net_salary: Decimal,
}

impl PayrollBreakdown {
    /// Earnings rows in payslip order.
    pub fn earnings(&self) -> [(&'static str, Decimal); 5] {
        [
            (EARNING_LABELS[0], self.basic_salary),
            (EARNING_LABELS[1], self.house_rent_allowance),
            (EARNING_LABELS[2], self.medical_allowance),
            (EARNING_LABELS[3], self.canteen_allowance),
            (EARNING_LABELS[4], self.attendance_allowance),
        ]
    }

    /// Deduction rows in payslip order.
    pub fn deductions(&self) -> [(&'static str, Decimal); 5] {
        [
            (DEDUCTION_LABELS[0], self.professional_tax),
            (DEDUCTION_LABELS[1], self.provident_fund),
            (DEDUCTION_LABELS[2], self.esic),
            (DEDUCTION_LABELS[3], self.tds),
            (DEDUCTION_LABELS[4], self.leave_deduction),
        ]
    }
}
