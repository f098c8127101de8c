//! Configuration loading and management for the payslip engine.
//!
//! This module provides functionality to load the payslip configuration
//! from a YAML file: company letterhead, calculation rates and output
//! settings.
//!
//! # Example
//!
//! ```no_run
//! use payslip_engine::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/payslip.yaml").unwrap();
//! println!("ESIC threshold: {}", config.rates().esic_threshold);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    CollisionPolicy, CompanyProfile, DEFAULT_COMPANY_NAME, DEFAULT_ESIC_THRESHOLD, OutputConfig,
    OutputFormat, PayrollConfig, StatutoryRates,
};
