//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the payroll
//! configuration from a YAML file.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::error::{PayrollError, PayrollResult};
use crate::roster::Roster;

use super::types::PayrollConfig;

/// Loads and provides access to the payroll configuration.
///
/// # File Format
///
/// ```yaml
/// manager_password: manager123
/// employees:
///   - name: divya
///     employee_id: emp001
///     password: empPass1
///     compensation: { type: permanent, basic_pay: "1000000", bonus: "30000" }
///   - name: Raj
///     employee_id: emp003
///     password: pw3
///     compensation: { type: intern }
/// ```
///
/// # Example
///
/// ```no_run
/// use payroll_manager::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/payroll.yaml")?;
/// let roster = loader.seed_roster();
/// println!("Loaded {} employees", roster.len());
/// # Ok::<(), payroll_manager::error::PayrollError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct ConfigLoader {
    config: PayrollConfig,
}

impl ConfigLoader {
    /// Loads configuration from the specified YAML file.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - The file is missing or unreadable (`ConfigNotFound`)
    /// - The file contains invalid YAML or unknown employee types (`ConfigParseError`)
    pub fn load<P: AsRef<Path>>(path: P) -> PayrollResult<Self> {
        let path = path.as_ref();
        let config = Self::load_yaml(path)?;
        info!(
            path = %path.display(),
            employees = config.employees.len(),
            "Loaded payroll configuration"
        );
        Ok(Self { config })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> PayrollResult<Self> {
        let config = serde_yaml::from_str(content).map_err(|e| PayrollError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;
        Ok(Self { config })
    }

    fn load_yaml(path: &Path) -> PayrollResult<PayrollConfig> {
        let path_str = path.display().to_string();

        let content = fs::read_to_string(path).map_err(|_| PayrollError::ConfigNotFound {
            path: path_str.clone(),
        })?;
        debug!(path = %path_str, bytes = content.len(), "Read configuration file");

        serde_yaml::from_str(&content).map_err(|e| PayrollError::ConfigParseError {
            path: path_str,
            message: e.to_string(),
        })
    }

    /// Returns the password that unlocks the manager menu.
    pub fn manager_password(&self) -> &str {
        &self.config.manager_password
    }

    /// Builds a roster containing the configured employees, in file order.
    pub fn seed_roster(&self) -> Roster {
        self.config.employees.iter().cloned().collect()
    }
}
