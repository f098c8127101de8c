//! Statutory deduction calculation.
//!
//! Provident fund is charged on basic salary net of the leave deduction.
//! ESIC is a step function of gross salary: charged at or below the
//! configured threshold, zero above it.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

use super::earnings::{checked_sum, prorate};

/// The deduction side of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeductionsResult {
    /// Professional tax as supplied on the record.
    pub professional_tax: Decimal,
    /// Provident fund deduction.
    pub provident_fund: Decimal,
    /// ESIC deduction.
    pub esic: Decimal,
    /// Tax deducted at source.
    pub tds: Decimal,
    /// Unpaid leave deduction.
    pub leave_deduction: Decimal,
}

impl DeductionsResult {
    /// Sum of all deductions.
    ///
    /// Fails with `Arithmetic` if the sum overflows.
    pub fn total(&self) -> EngineResult<Decimal> {
        checked_sum(
            "Professional Tax",
            [
                self.professional_tax,
                self.provident_fund,
                self.esic,
                self.tds,
                self.leave_deduction,
            ],
        )
    }
}

/// Computes `(gross / month_days) * unpaid_leaves`.
pub fn calculate_leave_deduction(record: &EmployeeRecord) -> EngineResult<Decimal> {
    prorate(
        record.gross_salary,
        Decimal::ONE,
        record.month_days,
        record.unpaid_leaves,
    )
}

/// Computes the provident fund deduction: `(basic - leave) * rate`.
///
/// Fails with `Arithmetic` if the base or the product overflows.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_provident_fund;
/// use rust_decimal::Decimal;
///
/// let pf = calculate_provident_fund(
///     Decimal::from(10_000),
///     Decimal::from(1_000),
///     Decimal::new(12, 2),
/// )
/// .unwrap();
/// assert_eq!(pf, Decimal::from(1_080));
/// ```
pub fn calculate_provident_fund(
    basic_salary: Decimal,
    leave_deduction: Decimal,
    rate: Decimal,
) -> EngineResult<Decimal> {
    basic_salary
        .checked_sub(leave_deduction)
        .and_then(|base| base.checked_mul(rate))
        .ok_or_else(|| {
            EngineError::arithmetic(
                "Unpaid Leaves",
                format!(
                    "overflow computing provident fund on {} less {}",
                    basic_salary, leave_deduction
                ),
            )
        })
}

/// Computes the ESIC deduction for a gross salary.
///
/// Returns `gross * esic_rate` when `gross <= esic_threshold`, else zero.
/// Fails with `Arithmetic` if the product overflows.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_esic;
/// use payslip_engine::config::StatutoryRates;
/// use rust_decimal::Decimal;
///
/// let rates = StatutoryRates::default();
/// assert_eq!(calculate_esic(Decimal::from(20_000), &rates).unwrap(), Decimal::from(150));
/// assert_eq!(calculate_esic(Decimal::from(21_001), &rates).unwrap(), Decimal::ZERO);
/// ```
pub fn calculate_esic(gross_salary: Decimal, rates: &StatutoryRates) -> EngineResult<Decimal> {
    if gross_salary > rates.esic_threshold {
        return Ok(Decimal::ZERO);
    }
    gross_salary.checked_mul(rates.esic).ok_or_else(|| {
        EngineError::arithmetic(
            "Gross Salary",
            format!("overflow computing ESIC on {}", gross_salary),
        )
    })
}

/// Calculates every deduction for a record, given its basic salary.
pub fn calculate_deductions(
    record: &EmployeeRecord,
    basic_salary: Decimal,
    rates: &StatutoryRates,
) -> EngineResult<DeductionsResult> {
    let leave_deduction = calculate_leave_deduction(record)?;

    Ok(DeductionsResult {
        professional_tax: record.professional_tax,
        provident_fund: calculate_provident_fund(
            basic_salary,
            leave_deduction,
            rates.provident_fund,
        )?,
        esic: calculate_esic(record.gross_salary, rates)?,
        tds: rates.tds,
        leave_deduction,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_record(gross: &str, unpaid_leaves: i64) -> EmployeeRecord {
        EmployeeRecord {
            employee_number: "E001".to_string(),
            name: "Asha Patil".to_string(),
            designation: "Engineer".to_string(),
            department: "Platform".to_string(),
            gross_salary: dec(gross),
            professional_tax: dec("200"),
            working_days: 30 - unpaid_leaves,
            unpaid_leaves,
            paid_leaves: 0,
            month_days: 30,
            pf_uan: "100200300400".to_string(),
            bank: "HDFC Bank".to_string(),
            bank_account_number: "50100012345678".to_string(),
            ifsc: "HDFC0000001".to_string(),
            month: "May".to_string(),
        }
    }

    #[test]
    fn test_esic_charged_below_threshold() {
        let rates = StatutoryRates::default();
        assert_eq!(calculate_esic(dec("20000"), &rates).unwrap(), dec("150"));
        assert_eq!(calculate_esic(dec("10000"), &rates).unwrap(), dec("75"));
    }

    #[test]
    fn test_esic_charged_at_threshold() {
        let rates = StatutoryRates::default();
        assert_eq!(calculate_esic(dec("21000"), &rates).unwrap(), dec("157.5"));
    }

    #[test]
    fn test_esic_zero_above_threshold() {
        let rates = StatutoryRates::default();
        assert_eq!(calculate_esic(dec("21000.01"), &rates).unwrap(), Decimal::ZERO);
        assert_eq!(calculate_esic(dec("50000"), &rates).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_esic_follows_configured_threshold() {
        let rates = StatutoryRates {
            esic_threshold: dec("21500"),
            ..StatutoryRates::default()
        };
        assert_eq!(calculate_esic(dec("21500"), &rates).unwrap(), dec("161.25"));
        assert_eq!(calculate_esic(dec("21501"), &rates).unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_provident_fund_nets_out_leave() {
        let pf = calculate_provident_fund(dec("10000"), dec("0"), dec("0.12")).unwrap();
        assert_eq!(pf, dec("1200"));

        let pf = calculate_provident_fund(dec("9000"), dec("2000"), dec("0.12")).unwrap();
        assert_eq!(pf, dec("840"));
    }

    #[test]
    fn test_leave_deduction_prorates_gross() {
        let record = create_test_record("30000", 3);
        assert_eq!(calculate_leave_deduction(&record).unwrap(), dec("3000"));
    }

    #[test]
    fn test_deductions_include_zero_tds() {
        let record = create_test_record("20000", 0);
        let result =
            calculate_deductions(&record, dec("10000"), &StatutoryRates::default()).unwrap();

        assert_eq!(result.professional_tax, dec("200"));
        assert_eq!(result.provident_fund, dec("1200"));
        assert_eq!(result.esic, dec("150"));
        assert_eq!(result.tds, Decimal::ZERO);
        assert_eq!(result.leave_deduction, Decimal::ZERO);
        assert_eq!(result.total().unwrap(), dec("1550"));
    }

    #[test]
    fn test_provident_fund_overflow_is_arithmetic_error() {
        let result = calculate_provident_fund(Decimal::MAX, Decimal::MIN, dec("0.12"));
        assert!(matches!(result, Err(EngineError::Arithmetic { .. })));
    }

    #[test]
    fn test_total_overflow_is_arithmetic_error() {
        let mut record = create_test_record("20000", 0);
        record.professional_tax = Decimal::MAX;
        let result =
            calculate_deductions(&record, dec("10000"), &StatutoryRates::default()).unwrap();
        assert!(matches!(result.total(), Err(EngineError::Arithmetic { .. })));
    }

    #[test]
    fn test_zero_month_days_fails_leave_deduction() {
        let mut record = create_test_record("20000", 1);
        record.month_days = 0;
        assert!(calculate_leave_deduction(&record).is_err());
    }
}
