//! Calculation logic for the payslip engine.
//!
//! This module contains the payroll arithmetic: currency rounding, earnings
//! proration over working days, statutory deductions (provident fund, ESIC,
//! unpaid leave), and the combined per-employee breakdown.

mod breakdown;
mod deductions;
mod earnings;
mod rounding;

pub use breakdown::calculate_breakdown;
pub use deductions::{
    DeductionsResult, calculate_deductions, calculate_esic, calculate_leave_deduction,
    calculate_provident_fund,
};
pub use earnings::{EarningsResult, calculate_earnings, prorate};
pub(crate) use earnings::checked_sum;
pub use rounding::{format_amount, round_currency, rounded_units};
