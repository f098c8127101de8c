//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading payslip
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{EngineError, EngineResult};

use super::types::{CompanyProfile, OutputConfig, PayrollConfig, StatutoryRates};

/// Loads and provides access to payslip configuration.
///
/// The configuration file is a single YAML document with optional
/// `company`, `rates` and `output` sections:
///
/// ```text
/// company:
///   name: Shaleemar IT Solutions Pvt. Ltd.
///   pay_year: 2024
/// rates:
///   esic_threshold: 21000
/// output:
///   directory: salary_slips
///   format: text
///   collision_policy: error
/// ```
///
/// # Example
///
/// ```no_run
/// use payslip_engine::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payslip.yaml").unwrap();
/// println!("Letterhead: {}", loader.company().name);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// Returns `ConfigNotFound` if the file cannot be read and
    /// `ConfigParseError` if it is not valid YAML for [`PayrollConfig`].
    pub fn load<P: AsRef<Path>>(path: P) -> EngineResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml::<PayrollConfig>(path)?;
        tracing::debug!(
            path = %path.display(),
            esic_threshold = %config.rates.esic_threshold,
            "Loaded payslip configuration"
        );
        Ok(Self { config })
    }

    /// Wraps an already-built configuration.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self { config }
    }

    /// Loads and parses a YAML file.
    fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> EngineResult<T> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| EngineError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        serde_yaml::from_str(&content).map_err(|e| EngineError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }

    /// Returns the company profile.
    pub fn company(&self) -> &CompanyProfile {
        &self.config.company
    }

    /// Returns the calculation rates.
    pub fn rates(&self) -> &StatutoryRates {
        &self.config.rates
    }

    /// Returns the output settings.
    pub fn output(&self) -> &OutputConfig {
        &self.config.output
    }

    /// Consumes the loader, returning the configuration.
    pub fn into_config(self) -> PayrollConfig {
        self.config
    }
}
