//! Fixed-width plain text layout of a payslip document.
//!
//! Each millimetre of cell width maps to half a character, so the 190mm
//! page becomes 95 columns. Text longer than its cell is not truncated.

use crate::models::{Align, PayslipDocument, Row};

/// Millimetres per character column.
const MM_PER_CHAR: u16 = 2;

fn columns(width: u16) -> usize {
    usize::from((width / MM_PER_CHAR).max(1))
}

fn pad(text: &str, width: usize, align: Align) -> String {
    match align {
        Align::Left => format!("{:<width$}", text),
        Align::Center => format!("{:^width$}", text),
    }
}

fn separator(row: &Row) -> String {
    let mut line = String::from("+");
    for cell in &row.cells {
        line.push_str(&"-".repeat(columns(cell.width) + 2));
        line.push('+');
    }
    line
}

fn boxed_line(row: &Row) -> String {
    let mut line = String::from("|");
    for cell in &row.cells {
        line.push(' ');
        line.push_str(&pad(&cell.text, columns(cell.width), cell.align));
        line.push_str(" |");
    }
    line
}

fn open_line(row: &Row) -> String {
    row.cells
        .iter()
        .map(|cell| pad(&cell.text, columns(cell.width), cell.align))
        .collect::<String>()
        .trim_end()
        .to_string()
}

/// Lays a document out as plain text, one line per row.
///
/// Bordered rows are drawn as a table with `+---+` separators; borderless
/// rows are printed as-is. Blocks are separated by a blank line.
pub fn layout_text(document: &PayslipDocument) -> String {
    let mut lines: Vec<String> = Vec::new();

    for (index, block) in document.blocks.iter().enumerate() {
        if index > 0 {
            lines.push(String::new());
        }

        let mut last_boxed: Option<&Row> = None;
        for row in &block.rows {
            let bordered = row.cells.iter().any(|c| c.bordered);
            if bordered {
                lines.push(separator(row));
                lines.push(boxed_line(row));
                last_boxed = Some(row);
            } else {
                if let Some(previous) = last_boxed.take() {
                    lines.push(separator(previous));
                }
                lines.push(open_line(row));
            }
        }
        if let Some(previous) = last_boxed {
            lines.push(separator(previous));
        }
    }

    let mut text = lines.join("\n");
    text.push('\n');
    text
}
