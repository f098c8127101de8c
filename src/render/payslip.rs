//! Payslip document rendering.
//!
//! Lays a [`PayrollBreakdown`] and the employee's identity fields out into
//! the fixed payslip grid. Every amount is rounded with
//! [`round_currency`] before it is shown or summed.

use rust_decimal::Decimal;

use crate::calculation::{checked_sum, format_amount, round_currency};
use crate::config::CompanyProfile;
use crate::error::{EngineError, EngineResult};
use crate::models::{
    Align, Block, BlockKind, Cell, DocumentTotals, EmployeeRecord, PAGE_WIDTH, PayrollBreakdown,
    PayslipDocument, Row,
};

use super::words::amount_in_words;

/// Column widths of the identity grid.
const IDENTITY_WIDTHS: [u16; 4] = [40, 55, 40, 55];

/// Column widths of the earnings/deductions and summary grids.
const LEDGER_WIDTHS: [u16; 4] = [47, 48, 47, 48];

/// Width of the "Amount in words" value cell.
const WORDS_WIDTH: u16 = PAGE_WIDTH - LEDGER_WIDTHS[0];

/// The identity fields printed on a payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PayslipIdentity<'a> {
    /// Employee name.
    pub name: &'a str,
    /// Employee number.
    pub employee_number: &'a str,
    /// Job title.
    pub designation: &'a str,
    /// Department.
    pub department: &'a str,
    /// Provident fund account number.
    pub pf_uan: &'a str,
    /// Bank name.
    pub bank: &'a str,
    /// Bank account number.
    pub bank_account_number: &'a str,
    /// Pay-period label.
    pub period: &'a str,
}

impl<'a> From<&'a EmployeeRecord> for PayslipIdentity<'a> {
    fn from(record: &'a EmployeeRecord) -> Self {
        Self {
            name: &record.name,
            employee_number: &record.employee_number,
            designation: &record.designation,
            department: &record.department,
            pf_uan: &record.pf_uan,
            bank: &record.bank,
            bank_account_number: &record.bank_account_number,
            period: &record.month,
        }
    }
}

/// Renders a payslip document.
///
/// Pure: the same breakdown, identity and company profile always produce
/// the same document.
///
/// # Errors
///
/// Returns `Arithmetic` if the rounded totals or the net pay overflow.
///
/// # Examples
///
/// ```
/// use payslip_engine::calculation::calculate_breakdown;
/// use payslip_engine::config::{CompanyProfile, StatutoryRates};
/// use payslip_engine::models::{BlockKind, EmployeeRecord};
/// use payslip_engine::render::{PayslipIdentity, render_payslip};
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
/// let document = render_payslip(
///     PayslipIdentity::from(&record),
///     &breakdown,
///     &CompanyProfile::default(),
/// )
/// .unwrap();
///
/// assert_eq!(document.totals.net_pay, Decimal::from(18_450));
/// assert!(document.block(BlockKind::Signature).is_some());
/// ```
pub fn render_payslip(
    identity: PayslipIdentity<'_>,
    breakdown: &PayrollBreakdown,
    company: &CompanyProfile,
) -> EngineResult<PayslipDocument> {
    let earnings: Vec<(&str, Decimal)> = breakdown
        .earnings()
        .iter()
        .map(|(label, amount)| (*label, round_currency(*amount)))
        .collect();
    let deductions: Vec<(&str, Decimal)> = breakdown
        .deductions()
        .iter()
        .map(|(label, amount)| (*label, round_currency(*amount)))
        .collect();

    let gross_salary = round_currency(breakdown.gross_salary);
    let total_earnings =
        checked_sum("Gross Salary", earnings.iter().map(|(_, amount)| *amount))?;
    let total_deductions =
        checked_sum("Professional Tax", deductions.iter().map(|(_, amount)| *amount))?;
    let net_pay = breakdown
        .gross_salary
        .checked_sub(total_deductions)
        .map(round_currency)
        .ok_or_else(|| {
            EngineError::arithmetic(
                "Gross Salary",
                format!(
                    "overflow subtracting deductions {} from {}",
                    total_deductions, breakdown.gross_salary
                ),
            )
        })?;

    let totals = DocumentTotals {
        gross_salary,
        total_earnings,
        total_deductions,
        net_pay,
        amount_in_words: amount_in_words(net_pay),
    };

    let blocks = vec![
        header_block(identity.period, company),
        identity_block(&identity),
        ledger_block(&earnings, &deductions),
        summary_block(&totals),
        signature_block(company),
    ];

    Ok(PayslipDocument {
        employee_name: identity.name.to_string(),
        employee_number: identity.employee_number.to_string(),
        period: identity.period.to_string(),
        blocks,
        totals,
    })
}

/// The slip title, with the configured pay year when there is one.
pub fn slip_title(period: &str, pay_year: Option<i32>) -> String {
    match pay_year {
        Some(year) => format!("Salary Slip for {} - {}", period, year),
        None => format!("Salary Slip for {}", period),
    }
}

fn header_block(period: &str, company: &CompanyProfile) -> Block {
    Block {
        kind: BlockKind::Header,
        rows: vec![
            Row::new(vec![Cell::line(&company.name).align(Align::Center).bold()]),
            Row::new(vec![
                Cell::line(slip_title(period, company.pay_year))
                    .align(Align::Center)
                    .bold(),
            ]),
        ],
    }
}

fn grid_row(texts: [&str; 4], widths: [u16; 4]) -> Row {
    Row::new(
        texts
            .iter()
            .zip(widths)
            .map(|(text, width)| Cell::boxed(*text, width).bold())
            .collect(),
    )
}

fn identity_block(identity: &PayslipIdentity<'_>) -> Block {
    let rows = [
        ["Name", identity.name, "Emp. No", identity.employee_number],
        [
            "Designation",
            identity.designation,
            "Department",
            identity.department,
        ],
        ["", "", "Bank", identity.bank],
        [
            "PF UAN",
            identity.pf_uan,
            "Bank Ac No",
            identity.bank_account_number,
        ],
        ["", "", "", ""],
    ];

    Block {
        kind: BlockKind::Identity,
        rows: rows
            .into_iter()
            .map(|texts| grid_row(texts, IDENTITY_WIDTHS))
            .collect(),
    }
}

fn ledger_pair(entry: Option<&(&str, Decimal)>, widths: [u16; 2]) -> [Cell; 2] {
    match entry {
        Some((label, amount)) => [
            Cell::boxed(*label, widths[0]),
            Cell::boxed(amount.to_string(), widths[1]),
        ],
        None => [Cell::boxed("", widths[0]), Cell::boxed("", widths[1])],
    }
}

/// Builds the side-by-side earnings and deductions rows.
///
/// Rows run to the longer list; the shorter side is padded with blank
/// cells. Entries are never reordered or dropped, zero amounts included.
fn ledger_block(earnings: &[(&str, Decimal)], deductions: &[(&str, Decimal)]) -> Block {
    let half = LEDGER_WIDTHS[0] + LEDGER_WIDTHS[1];
    let mut rows = vec![Row::new(vec![
        Cell::boxed("Earnings", half).align(Align::Center).bold(),
        Cell::boxed("Deductions", PAGE_WIDTH - half)
            .align(Align::Center)
            .bold(),
    ])];

    for i in 0..earnings.len().max(deductions.len()) {
        let mut cells = Vec::with_capacity(4);
        cells.extend(ledger_pair(
            earnings.get(i),
            [LEDGER_WIDTHS[0], LEDGER_WIDTHS[1]],
        ));
        cells.extend(ledger_pair(
            deductions.get(i),
            [LEDGER_WIDTHS[2], LEDGER_WIDTHS[3]],
        ));
        rows.push(Row::new(cells));
    }

    Block {
        kind: BlockKind::EarningsDeductions,
        rows,
    }
}

fn summary_block(totals: &DocumentTotals) -> Block {
    let gross = totals.gross_salary.to_string();
    let deductions = totals.total_deductions.to_string();
    let net = format_amount(totals.net_pay);

    Block {
        kind: BlockKind::Summary,
        rows: vec![
            grid_row(
                ["Gross Salary", gross.as_str(), "Total Deductions", deductions.as_str()],
                LEDGER_WIDTHS,
            ),
            grid_row(["Net Pay", net.as_str(), "", ""], LEDGER_WIDTHS),
            Row::new(vec![
                Cell::boxed("Amount in words", LEDGER_WIDTHS[0]).bold(),
                Cell::boxed(&totals.amount_in_words, WORDS_WIDTH).bold(),
            ]),
        ],
    }
}

fn signature_block(company: &CompanyProfile) -> Block {
    let mut rows = vec![
        Row::new(vec![Cell::line(&company.sign_off).bold()]),
        Row::new(vec![Cell::line(&company.signatory).bold()]),
    ];
    rows.extend(
        company
            .address_lines
            .iter()
            .map(|line| Row::new(vec![Cell::line(line).align(Align::Center)])),
    );

    Block {
        kind: BlockKind::Signature,
        rows,
    }
}
