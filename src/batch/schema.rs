//! Batch schema validation and row parsing.
//!
//! The column set is fixed. Required columns are checked once against the
//! batch header before any row is touched; rows are then parsed into
//! [`EmployeeRecord`]s by column position.

use std::collections::HashMap;
use std::str::FromStr;

use csv::StringRecord;
use rust_decimal::Decimal;

use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

/// "Emp. No" column.
pub const COLUMN_EMP_NO: &str = "Emp. No";
/// "Name" column.
pub const COLUMN_NAME: &str = "Name";
/// "Designation" column.
pub const COLUMN_DESIGNATION: &str = "Designation";
/// "Department" column.
pub const COLUMN_DEPARTMENT: &str = "Department";
/// "Gross Salary" column.
pub const COLUMN_GROSS_SALARY: &str = "Gross Salary";
/// "Professional Tax" column.
pub const COLUMN_PROFESSIONAL_TAX: &str = "Professional Tax";
/// "Working days" column.
pub const COLUMN_WORKING_DAYS: &str = "Working days";
/// "Unpaid Leaves" column.
pub const COLUMN_UNPAID_LEAVES: &str = "Unpaid Leaves";
/// "Paid Leaves" column.
pub const COLUMN_PAID_LEAVES: &str = "Paid Leaves";
/// "PF UAN" column.
pub const COLUMN_PF_UAN: &str = "PF UAN";
/// "Bank Ac No" column.
pub const COLUMN_BANK_AC_NO: &str = "Bank Ac No";
/// "Bank" column.
pub const COLUMN_BANK: &str = "Bank";
/// "IFSC" column.
pub const COLUMN_IFSC: &str = "IFSC";
/// "Month" column.
pub const COLUMN_MONTH: &str = "Month";
/// "Month days" column.
pub const COLUMN_MONTH_DAYS: &str = "Month days";

/// Columns that must be present, in schema order.
pub const REQUIRED_COLUMNS: [&str; 12] = [
    COLUMN_EMP_NO,
    COLUMN_NAME,
    COLUMN_DESIGNATION,
    COLUMN_GROSS_SALARY,
    COLUMN_PROFESSIONAL_TAX,
    COLUMN_WORKING_DAYS,
    COLUMN_UNPAID_LEAVES,
    COLUMN_PAID_LEAVES,
    COLUMN_PF_UAN,
    COLUMN_BANK_AC_NO,
    COLUMN_BANK,
    COLUMN_MONTH_DAYS,
];

/// Display-only columns; absent ones read as empty text.
pub const OPTIONAL_COLUMNS: [&str; 3] = [COLUMN_DEPARTMENT, COLUMN_IFSC, COLUMN_MONTH];

/// Positions of the known columns within a validated header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnIndex {
    positions: HashMap<&'static str, usize>,
}

/// Checks a header against the required column set.
///
/// Header names are compared case-sensitively after trimming whitespace.
/// When the first occurrence of a name repeats, the first one wins.
///
/// # Errors
///
/// Returns `Validation` listing every missing required column, in schema
/// order.
///
/// # Examples
///
/// ```
/// use payslip_engine::batch::validate_schema;
/// use payslip_engine::error::EngineError;
///
/// let headers = ["Emp. No", "Name", "Designation", "Gross Salary", "Professional Tax",
///     "Working days", "Unpaid Leaves", "Paid Leaves", "PF UAN", "Bank Ac No", "Month days"];
/// let headers: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
///
/// match validate_schema(&headers) {
///     Err(EngineError::Validation { missing }) => assert_eq!(missing, vec!["Bank"]),
///     other => panic!("unexpected: {:?}", other),
/// }
/// ```
pub fn validate_schema(headers: &[String]) -> EngineResult<ColumnIndex> {
    let mut positions = HashMap::new();
    for column in REQUIRED_COLUMNS.iter().chain(OPTIONAL_COLUMNS.iter()) {
        if let Some(position) = headers.iter().position(|h| h.trim() == *column) {
            positions.insert(*column, position);
        }
    }

    let missing: Vec<String> = REQUIRED_COLUMNS
        .iter()
        .filter(|column| !positions.contains_key(*column))
        .map(|column| column.to_string())
        .collect();

    if !missing.is_empty() {
        return Err(EngineError::Validation { missing });
    }

    Ok(ColumnIndex { positions })
}

impl ColumnIndex {
    /// Returns true if the header contains the column.
    pub fn has(&self, column: &str) -> bool {
        self.positions.contains_key(column)
    }

    /// The trimmed text of a column in a row; empty when absent.
    pub fn text<'r>(&self, row: &'r StringRecord, column: &str) -> &'r str {
        self.positions
            .get(column)
            .and_then(|&position| row.get(position))
            .map(str::trim)
            .unwrap_or("")
    }

    fn amount(&self, row: &StringRecord, column: &str) -> EngineResult<Decimal> {
        let raw = self.text(row, column);
        parse_amount(raw)
            .ok_or_else(|| EngineError::arithmetic(column, format!("'{}' is not a number", raw)))
    }

    fn days(&self, row: &StringRecord, column: &str) -> EngineResult<i64> {
        let raw = self.text(row, column);
        parse_days(raw).ok_or_else(|| {
            EngineError::arithmetic(column, format!("'{}' is not a whole number", raw))
        })
    }

    /// Parses one data row into an employee record.
    ///
    /// # Errors
    ///
    /// Returns `Arithmetic` naming the column when a numeric field is empty
    /// or not a number.
    pub fn parse_record(&self, row: &StringRecord) -> EngineResult<EmployeeRecord> {
        Ok(EmployeeRecord {
            employee_number: self.text(row, COLUMN_EMP_NO).to_string(),
            name: self.text(row, COLUMN_NAME).to_string(),
            designation: self.text(row, COLUMN_DESIGNATION).to_string(),
            department: self.text(row, COLUMN_DEPARTMENT).to_string(),
            gross_salary: self.amount(row, COLUMN_GROSS_SALARY)?,
            professional_tax: self.amount(row, COLUMN_PROFESSIONAL_TAX)?,
            working_days: self.days(row, COLUMN_WORKING_DAYS)?,
            unpaid_leaves: self.days(row, COLUMN_UNPAID_LEAVES)?,
            paid_leaves: self.days(row, COLUMN_PAID_LEAVES)?,
            month_days: self.days(row, COLUMN_MONTH_DAYS)?,
            pf_uan: self.text(row, COLUMN_PF_UAN).to_string(),
            bank: self.text(row, COLUMN_BANK).to_string(),
            bank_account_number: self.text(row, COLUMN_BANK_AC_NO).to_string(),
            ifsc: self.text(row, COLUMN_IFSC).to_string(),
            month: self.text(row, COLUMN_MONTH).to_string(),
        })
    }
}

/// Parses a currency amount, accepting plain and scientific notation.
fn parse_amount(raw: &str) -> Option<Decimal> {
    Decimal::from_str(raw)
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Parses a day count; spreadsheet exports often write whole numbers as "30.0".
fn parse_days(raw: &str) -> Option<i64> {
    if let Ok(days) = raw.parse::<i64>() {
        return Some(days);
    }
    let mut value = parse_amount(raw)?;
    if !value.fract().is_zero() {
        return None;
    }
    value.rescale(0);
    i64::try_from(value.mantissa()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_headers() -> Vec<String> {
        [
            "Emp. No",
            "Name",
            "Designation",
            "Department",
            "Gross Salary",
            "Professional Tax",
            "Working days",
            "Unpaid Leaves",
            "Paid Leaves",
            "PF UAN",
            "Bank Ac No",
            "Bank",
            "IFSC",
            "Month",
            "Month days",
        ]
        .iter()
        .map(|h| h.to_string())
        .collect()
    }

    fn headers_without(columns: &[&str]) -> Vec<String> {
        all_headers()
            .into_iter()
            .filter(|h| !columns.contains(&h.as_str()))
            .collect()
    }

    fn row(values: &[&str]) -> StringRecord {
        StringRecord::from(values.to_vec())
    }

    fn sample_row() -> StringRecord {
        row(&[
            "E001",
            "Asha Patil",
            "Engineer",
            "Platform",
            "20000",
            "200",
            "30",
            "0",
            "0",
            "100200300400",
            "50100012345678",
            "HDFC Bank",
            "HDFC0000001",
            "May",
            "30",
        ])
    }

    #[test]
    fn test_complete_header_validates() {
        let index = validate_schema(&all_headers()).unwrap();
        assert!(index.has(COLUMN_BANK));
        assert!(index.has(COLUMN_MONTH));
    }

    #[test]
    fn test_missing_bank_is_reported_alone() {
        let result = validate_schema(&headers_without(&["Bank"]));
        match result {
            Err(EngineError::Validation { missing }) => assert_eq!(missing, vec!["Bank"]),
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_every_missing_column_is_listed_in_schema_order() {
        let result = validate_schema(&headers_without(&["Month days", "Name", "Gross Salary"]));
        match result {
            Err(EngineError::Validation { missing }) => {
                assert_eq!(missing, vec!["Name", "Gross Salary", "Month days"])
            }
            other => panic!("Expected Validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_display_only_columns_are_optional() {
        let index = validate_schema(&headers_without(&["Department", "IFSC", "Month"])).unwrap();
        assert!(!index.has(COLUMN_MONTH));
    }

    #[test]
    fn test_header_whitespace_is_trimmed_but_case_matters() {
        let mut headers = all_headers();
        headers[11] = "  Bank ".to_string();
        assert!(validate_schema(&headers).is_ok());

        headers[11] = "bank".to_string();
        assert!(validate_schema(&headers).is_err());
    }

    #[test]
    fn test_parse_record_reads_every_field() {
        let index = validate_schema(&all_headers()).unwrap();
        let record = index.parse_record(&sample_row()).unwrap();

        assert_eq!(record.employee_number, "E001");
        assert_eq!(record.name, "Asha Patil");
        assert_eq!(record.department, "Platform");
        assert_eq!(record.gross_salary, Decimal::from(20_000));
        assert_eq!(record.professional_tax, Decimal::from(200));
        assert_eq!(record.working_days, 30);
        assert_eq!(record.month_days, 30);
        assert_eq!(record.bank, "HDFC Bank");
        assert_eq!(record.bank_account_number, "50100012345678");
        assert_eq!(record.ifsc, "HDFC0000001");
        assert_eq!(record.month, "May");
    }

    #[test]
    fn test_parse_record_with_missing_optional_columns() {
        let headers = headers_without(&["Department", "IFSC", "Month"]);
        let index = validate_schema(&headers).unwrap();
        let values = row(&[
            "E001", "Asha", "Engineer", "20000", "200", "30", "0", "0", "UAN", "AC", "Bank", "30",
        ]);

        let record = index.parse_record(&values).unwrap();
        assert!(record.department.is_empty());
        assert!(record.month.is_empty());
        assert_eq!(record.bank, "Bank");
    }

    #[test]
    fn test_non_numeric_salary_is_arithmetic_error() {
        let index = validate_schema(&all_headers()).unwrap();
        let mut values: Vec<String> = sample_row().iter().map(String::from).collect();
        values[4] = "twenty thousand".to_string();

        let result = index.parse_record(&StringRecord::from(values));
        match result {
            Err(EngineError::Arithmetic { field, message }) => {
                assert_eq!(field, "Gross Salary");
                assert!(message.contains("twenty thousand"));
            }
            other => panic!("Expected Arithmetic error, got {:?}", other),
        }
    }

    #[test]
    fn test_short_row_reports_empty_numeric_field() {
        let index = validate_schema(&all_headers()).unwrap();
        let values = row(&["E001", "Asha Patil", "Engineer", "Platform", "20000", "200"]);

        let result = index.parse_record(&values);
        assert!(matches!(
            result,
            Err(EngineError::Arithmetic { ref field, .. }) if field == "Working days"
        ));
    }

    #[test]
    fn test_parse_days_accepts_spreadsheet_whole_numbers() {
        assert_eq!(parse_days("30"), Some(30));
        assert_eq!(parse_days("30.0"), Some(30));
        assert_eq!(parse_days("-2"), Some(-2));
        assert_eq!(parse_days("2.5"), None);
        assert_eq!(parse_days(""), None);
    }

    #[test]
    fn test_parse_amount_accepts_scientific_notation() {
        assert_eq!(parse_amount("2e4"), Some(Decimal::from(20_000)));
        assert_eq!(parse_amount("18777.77"), Some(Decimal::new(1_877_777, 2)));
        assert_eq!(parse_amount("abc"), None);
    }
}
