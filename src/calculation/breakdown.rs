//! Full payroll breakdown for one record.

use crate::config::StatutoryRates;
use crate::error::{EngineError, EngineResult};
use crate::models::{EmployeeRecord, PayrollBreakdown};

use super::deductions::calculate_deductions;
use super::earnings::calculate_earnings;

/// Derives the complete breakdown for one employee record.
///
/// Pure and deterministic: no I/O, no shared state. Values keep full
/// decimal precision; round them with
/// [`round_currency`](super::round_currency) for display.
///
/// Net salary is `gross - total_deductions`, that is
/// `gross - professional_tax - pf - esic - leave_deduction - tds`.
///
/// # Errors
///
/// Returns `Arithmetic` when the record's month days is zero or any
/// intermediate sum, difference or product overflows. Negative salaries or
/// leave longer than the month are not rejected.
pub fn calculate_breakdown(
    record: &EmployeeRecord,
    rates: &StatutoryRates,
) -> EngineResult<PayrollBreakdown> {
    let earnings = calculate_earnings(record, rates)?;
    let deductions = calculate_deductions(record, earnings.basic_salary, rates)?;

    let total_earnings = earnings.total()?;
    let total_deductions = deductions.total()?;
    let net_salary = record
        .gross_salary
        .checked_sub(total_deductions)
        .ok_or_else(|| {
            EngineError::arithmetic(
                "Gross Salary",
                format!(
                    "overflow subtracting deductions {} from {}",
                    total_deductions, record.gross_salary
                ),
            )
        })?;

    Ok(PayrollBreakdown {
        gross_salary: record.gross_salary,
        total_working_days: earnings.total_working_days,
        basic_salary: earnings.basic_salary,
        house_rent_allowance: earnings.house_rent_allowance,
        medical_allowance: earnings.medical_allowance,
        canteen_allowance: earnings.canteen_allowance,
        attendance_allowance: earnings.attendance_allowance,
        total_earnings,
        provident_fund: deductions.provident_fund,
        esic: deductions.esic,
        leave_deduction: deductions.leave_deduction,
        professional_tax: deductions.professional_tax,
        tds: deductions.tds,
        total_deductions,
        net_salary,
    })
}
