//! Payroll computation and payslip rendering engine.
//!
//! This crate turns a monthly batch of employee compensation records into a
//! per-employee salary breakdown (prorated earnings, statutory deductions,
//! net pay) and a rendered payslip document with the net amount spelled out
//! in words.
//!
//! # Example
//!
//! ```
//! use payslip_engine::batch::{BatchOrchestrator, BatchTable, MemoryWriter};
//! use payslip_engine::config::PayrollConfig;
//! use rust_decimal::Decimal;
//!
//! let csv = "Emp. No,Name,Designation,Gross Salary,Professional Tax,Working days,\
//! Unpaid Leaves,Paid Leaves,PF UAN,Bank Ac No,Bank,Month days\n\
//! E001,Asha Patil,Engineer,20000,200,30,0,0,UAN1,AC1,HDFC Bank,30\n";
//!
//! let table = BatchTable::from_reader(csv.as_bytes()).unwrap();
//! let config = PayrollConfig::default();
//! let mut writer = MemoryWriter::new();
//! let report = BatchOrchestrator::new(&config).run(&table, &mut writer).unwrap();
//!
//! assert_eq!(report.slips[0].breakdown.net_salary, Decimal::from(18_450));
//! ```

#![warn(missing_docs)]

pub mod api;
pub mod batch;
pub mod calculation;
pub mod config;
pub mod error;
pub mod models;
pub mod render;
