//! Payslip rendering.
//!
//! Turns a breakdown plus identity fields into a [`PayslipDocument`](crate::models::PayslipDocument),
//! spells the net pay out in words, and lays documents out as plain text.

mod payslip;
mod text;
mod words;

pub use payslip::{PayslipIdentity, render_payslip, slip_title};
pub use text::layout_text;
pub use words::{amount_in_words, cardinal_words, title_case};
