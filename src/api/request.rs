//! Request types for the payslip API.
//!
//! This module defines the JSON request structure shared by the
//! `/calculate` and `/payslip` endpoints. The `/batch` endpoint takes CSV
//! text and needs no request type.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::EmployeeRecord;

/// One employee's monthly inputs in a calculation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeRequest {
    /// Employee number.
    pub employee_number: String,
    /// Employee name.
    pub name: String,
    /// Job title.
    pub designation: String,
    /// Department, shown on the payslip only.
    #[serde(default)]
    pub department: Option<String>,
    /// Monthly gross salary.
    pub gross_salary: Decimal,
    /// Professional tax to deduct.
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
    /// Bank routing code, shown on the payslip only.
    #[serde(default)]
    pub ifsc: Option<String>,
    /// Pay-period label (e.g., "May").
    #[serde(default)]
    pub month: Option<String>,
}

impl From<EmployeeRequest> for EmployeeRecord {
    fn from(req: EmployeeRequest) -> Self {
        EmployeeRecord {
            employee_number: req.employee_number,
            name: req.name,
            designation: req.designation,
            department: req.department.unwrap_or_default(),
            gross_salary: req.gross_salary,
            professional_tax: req.professional_tax,
            working_days: req.working_days,
            unpaid_leaves: req.unpaid_leaves,
            paid_leaves: req.paid_leaves,
            month_days: req.month_days,
            pf_uan: req.pf_uan,
            bank: req.bank,
            bank_account_number: req.bank_account_number,
            ifsc: req.ifsc.unwrap_or_default(),
            month: req.month.unwrap_or_default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_display_fields_become_empty() {
        let json = r#"{
            "employee_number": "E001",
            "name": "Asha Patil",
            "designation": "Engineer",
            "gross_salary": "20000",
            "professional_tax": "200",
            "working_days": 30,
            "unpaid_leaves": 0,
            "paid_leaves": 0,
            "month_days": 30,
            "pf_uan": "100200300400",
            "bank": "HDFC Bank",
            "bank_account_number": "50100012345678",
            "month": "May"
        }"#;

        let request: EmployeeRequest = serde_json::from_str(json).unwrap();
        let record: EmployeeRecord = request.into();

        assert_eq!(record.gross_salary, Decimal::from(20_000));
        assert_eq!(record.professional_tax, Decimal::from(200));
        assert_eq!(record.month, "May");
        assert!(record.department.is_empty());
        assert!(record.ifsc.is_empty());
    }
}
