//! Configuration types for payslip generation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from the YAML configuration file. Every field has a
//! default, so a partial file only overrides what it names.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The default company letterhead.
pub const DEFAULT_COMPANY_NAME: &str = "Shaleemar IT Solutions Pvt. Ltd.";

/// The default ESIC eligibility threshold (inclusive).
pub const DEFAULT_ESIC_THRESHOLD: i64 = 21_000;

/// Company identity printed on every payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompanyProfile {
    /// Letterhead shown in the header block.
    pub name: String,
    /// The sign-off line in the signature block.
    pub sign_off: String,
    /// The signatory line below the sign-off.
    pub signatory: String,
    /// Registered-address lines closing the document.
    pub address_lines: Vec<String>,
    /// Optional year appended to the slip title ("Salary Slip for May - 2024").
    pub pay_year: Option<i32>,
}

impl Default for CompanyProfile {
    fn default() -> Self {
        Self {
            name: DEFAULT_COMPANY_NAME.to_string(),
            sign_off: "For Shaleemar IT Solutions Pvt Ltd".to_string(),
            signatory: "HR Manager".to_string(),
            address_lines: vec![
                "Shaleemar IT Solutions Pvt. Ltd, Second Floor, Office No 03, Sneh Avishkar,"
                    .to_string(),
                "Plot No 105, Prabhat Road, Erandawa Deccan, Gymkhana, Pune 411004, Maharashtra, India"
                    .to_string(),
            ],
            pay_year: None,
        }
    }
}

/// Rates used by the payroll calculation.
///
/// Earnings rates are fractions of gross salary; deduction rates are
/// fractions of their respective bases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StatutoryRates {
    /// Share of gross salary paid as basic salary.
    pub basic: Decimal,
    /// House rent allowance share of gross salary.
    pub house_rent: Decimal,
    /// Medical allowance share of gross salary.
    pub medical: Decimal,
    /// Canteen allowance share of gross salary.
    pub canteen: Decimal,
    /// Attendance allowance share of gross salary.
    pub attendance: Decimal,
    /// Provident fund rate applied to basic salary less leave deduction.
    pub provident_fund: Decimal,
    /// ESIC rate applied to gross salary.
    pub esic: Decimal,
    /// Gross salaries at or below this amount pay ESIC.
    pub esic_threshold: Decimal,
    /// Tax deducted at source. Always zero in the shipped configuration.
    pub tds: Decimal,
}

impl Default for StatutoryRates {
    fn default() -> Self {
        Self {
            basic: Decimal::new(50, 2),
            house_rent: Decimal::new(20, 2),
            medical: Decimal::new(10, 2),
            canteen: Decimal::new(5, 2),
            attendance: Decimal::new(15, 2),
            provident_fund: Decimal::new(12, 2),
            esic: Decimal::new(75, 4),
            esic_threshold: Decimal::from(DEFAULT_ESIC_THRESHOLD),
            tds: Decimal::ZERO,
        }
    }
}

/// The serialization used for each written payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Fixed-width plain text layout.
    #[default]
    Text,
    /// The document structure as pretty-printed JSON.
    Json,
}

impl OutputFormat {
    /// The file extension for this format.
    pub fn extension(self) -> &'static str {
        match self {
            OutputFormat::Text => "txt",
            OutputFormat::Json => "json",
        }
    }
}

/// What to do when two records share an employee name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollisionPolicy {
    /// Reject the batch before anything is written.
    #[default]
    Error,
    /// Disambiguate later records as `{Name}_2_Salary_Slip`, `{Name}_3_...`.
    Suffix,
    /// Last record wins; every overwrite is logged and reported.
    Overwrite,
}

/// Where and how payslips are written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory, created if absent.
    pub directory: PathBuf,
    /// Document serialization.
    pub format: OutputFormat,
    /// Duplicate-name handling.
    pub collision_policy: CollisionPolicy,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            directory: PathBuf::from("salary_slips"),
            format: OutputFormat::Text,
            collision_policy: CollisionPolicy::Error,
        }
    }
}

/// The complete payslip configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayrollConfig {
    /// Company identity.
    pub company: CompanyProfile,
    /// Calculation rates.
    pub rates: StatutoryRates,
    /// Output settings.
    pub output: OutputConfig,
}
