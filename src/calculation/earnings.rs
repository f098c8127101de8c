//! Earnings calculation.
//!
//! Basic salary is prorated over total working days (working days plus
//! paid leave). The four allowances are prorated over working days only.

use rust_decimal::Decimal;

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::EmployeeRecord;

/// The earnings side of a breakdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EarningsResult {
    /// Working days plus paid leave days.
    pub total_working_days: i64,
    /// Basic salary.
    pub basic_salary: Decimal,
    /// House rent allowance.
    pub house_rent_allowance: Decimal,
    /// Medical allowance.
    pub medical_allowance: Decimal,
    /// Canteen allowance.
    pub canteen_allowance: Decimal,
    /// Attendance allowance.
    pub attendance_allowance: Decimal,
}

impl EarningsResult {
    /// Sum of basic salary and the allowances.
    ///
    /// Fails with `Arithmetic` if the sum overflows.
    pub fn total(&self) -> EngineResult<Decimal> {
        checked_sum(
            "Gross Salary",
            [
                self.basic_salary,
                self.house_rent_allowance,
                self.medical_allowance,
                self.canteen_allowance,
                self.attendance_allowance,
            ],
        )
    }
}

/// Adds amounts, reporting overflow against `field`.
pub(crate) fn checked_sum<I>(field: &str, amounts: I) -> EngineResult<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    amounts
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, amount| acc.checked_add(amount))
        .ok_or_else(|| EngineError::arithmetic(field, "overflow summing amounts"))
}

/// Computes `gross * rate * days / month_days`.
///
/// The single division comes last, so an exact half unit such as `5000.5`
/// stays exact and rounds up. Fails with `Arithmetic` when `month_days` is
/// zero or an intermediate overflows.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::prorate;
/// use rust_decimal::Decimal;
///
/// let hra = prorate(Decimal::from(20_000), Decimal::new(20, 2), 30, 30).unwrap();
/// assert_eq!(hra.round(), Decimal::from(4_000));
/// assert!(prorate(Decimal::from(20_000), Decimal::new(20, 2), 0, 30).is_err());
/// ```
pub fn prorate(
    gross: Decimal,
    rate: Decimal,
    month_days: i64,
    days: i64,
) -> EngineResult<Decimal> {
    if month_days == 0 {
        return Err(EngineError::arithmetic("Month days", "division by zero"));
    }

    gross
        .checked_mul(rate)
        .and_then(|share| share.checked_mul(Decimal::from(days)))
        .and_then(|earned| earned.checked_div(Decimal::from(month_days)))
        .ok_or_else(|| {
            EngineError::arithmetic(
                "Gross Salary",
                format!(
                    "overflow prorating {} at rate {} over {}/{} days",
                    gross, rate, days, month_days
                ),
            )
        })
}

/// Calculates basic salary and allowances for a record.
///
/// # Arguments
///
/// * `record` - The employee record
/// * `rates` - The configured earnings rates
///
/// # Returns
///
/// Returns the earnings, or `Arithmetic` if the record's month days is zero
/// or a day count or amount overflows.
pub fn calculate_earnings(
    record: &EmployeeRecord,
    rates: &StatutoryRates,
) -> EngineResult<EarningsResult> {
    let gross = record.gross_salary;
    let month_days = record.month_days;
    let total_working_days = record.total_working_days()?;

    Ok(EarningsResult {
        total_working_days,
        basic_salary: prorate(gross, rates.basic, month_days, total_working_days)?,
        house_rent_allowance: prorate(gross, rates.house_rent, month_days, record.working_days)?,
        medical_allowance: prorate(gross, rates.medical, month_days, record.working_days)?,
        canteen_allowance: prorate(gross, rates.canteen, month_days, record.working_days)?,
        attendance_allowance: prorate(gross, rates.attendance, month_days, record.working_days)?,
    })
}
