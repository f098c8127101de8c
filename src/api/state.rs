//! Application state for the payslip API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::{ConfigLoader, PayrollConfig};

/// Shared application state.
///
/// Holds the payroll configuration, loaded once at startup and never
/// mutated while serving.
#[derive(Clone)]
pub struct AppState {
    /// The loaded payroll configuration.
    config: Arc<PayrollConfig>,
}

impl AppState {
    /// Creates a new application state from a loaded configuration.
    pub fn new(config: ConfigLoader) -> Self {
        Self::from_config(config.into_config())
    }

    /// Creates a new application state from a configuration value.
    pub fn from_config(config: PayrollConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the payroll configuration.
    pub fn config(&self) -> &PayrollConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_clones_share_configuration() {
        let state = AppState::from_config(PayrollConfig::default());
        let other = state.clone();
        assert!(std::ptr::eq(state.config(), other.config()));
    }
}
