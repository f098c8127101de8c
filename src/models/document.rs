//! Rendered payslip document model.
//!
//! A [`PayslipDocument`] is an ordered list of [`Block`]s, each a grid of
//! [`Row`]s of labelled [`Cell`]s. Cell widths are in millimetres on an A4
//! page with a 190mm content area.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Width of the printable content area in millimetres.
pub const PAGE_WIDTH: u16 = 190;

/// The section of the payslip a block represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BlockKind {
    /// Letterhead and slip title.
    Header,
    /// Employee identity grid.
    Identity,
    /// Side-by-side earnings and deductions.
    EarningsDeductions,
    /// Gross, deductions, net pay and amount in words.
    Summary,
    /// Static closing lines.
    Signature,
}

/// Horizontal alignment of a cell's text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Align {
    /// Left aligned.
    #[default]
    Left,
    /// Centred.
    Center,
}

/// Font emphasis of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    /// Regular weight.
    #[default]
    Regular,
    /// Bold weight.
    Bold,
}

/// One cell of a document grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// The cell text; empty for blank cells.
    pub text: String,
    /// Width in millimetres.
    pub width: u16,
    /// Whether the cell is drawn with a border.
    pub bordered: bool,
    /// Text alignment.
    pub align: Align,
    /// Font emphasis.
    pub emphasis: Emphasis,
}

impl Cell {
    /// A bordered, left-aligned cell.
    pub fn boxed(text: impl Into<String>, width: u16) -> Self {
        Self {
            text: text.into(),
            width,
            bordered: true,
            align: Align::Left,
            emphasis: Emphasis::Regular,
        }
    }

    /// A borderless cell spanning the page.
    pub fn line(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            width: PAGE_WIDTH,
            bordered: false,
            align: Align::Left,
            emphasis: Emphasis::Regular,
        }
    }

    /// Sets the alignment.
    pub fn align(mut self, align: Align) -> Self {
        self.align = align;
        self
    }

    /// Marks the cell bold.
    pub fn bold(mut self) -> Self {
        self.emphasis = Emphasis::Bold;
        self
    }

    /// Returns true if the cell has no text.
    pub fn is_blank(&self) -> bool {
        self.text.is_empty()
    }
}

/// One row of cells.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Row {
    /// Cells from left to right.
    pub cells: Vec<Cell>,
}

impl Row {
    /// Creates a row from its cells.
    pub fn new(cells: Vec<Cell>) -> Self {
        Self { cells }
    }

    /// The text of every cell, left to right.
    pub fn texts(&self) -> Vec<&str> {
        self.cells.iter().map(|c| c.text.as_str()).collect()
    }

    /// Total width of the row in millimetres.
    pub fn width(&self) -> u16 {
        self.cells.iter().map(|c| c.width).sum()
    }
}

/// A titled section of the document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Which section this is.
    pub kind: BlockKind,
    /// Rows from top to bottom.
    pub rows: Vec<Row>,
}

/// Rounded totals shown in the summary block.
///
/// Totals are sums of already-rounded rows, so they may differ by a unit or
/// two from rounding the breakdown's exact totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentTotals {
    /// Rounded gross salary.
    pub gross_salary: Decimal,
    /// Sum of the rounded earnings rows.
    pub total_earnings: Decimal,
    /// Sum of the rounded deduction rows.
    pub total_deductions: Decimal,
    /// Rounded gross salary less the displayed total deductions.
    pub net_pay: Decimal,
    /// Net pay in words, e.g. "Eighteen Thousand, Four Hundred And Fifty Only".
    pub amount_in_words: String,
}

/// A rendered payslip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayslipDocument {
    /// The employee the slip belongs to.
    pub employee_name: String,
    /// The employee number.
    pub employee_number: String,
    /// The pay-period label.
    pub period: String,
    /// Blocks in print order.
    pub blocks: Vec<Block>,
    /// Displayed totals.
    pub totals: DocumentTotals,
}

impl PayslipDocument {
    /// Returns the first block of the given kind.
    pub fn block(&self, kind: BlockKind) -> Option<&Block> {
        self.blocks.iter().find(|b| b.kind == kind)
    }
}
