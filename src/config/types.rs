//! Configuration types for the payroll manager.
//!
//! This module contains the strongly-typed configuration structure that is
//! deserialized from a YAML configuration file.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::models::{Compensation, Employee};

/// The manager password used when no configuration overrides it.
pub const DEFAULT_MANAGER_PASSWORD: &str = "manager123";

fn default_manager_password() -> String {
    DEFAULT_MANAGER_PASSWORD.to_string()
}

/// The complete payroll configuration.
///
/// Every field is optional in the YAML file. A missing `manager_password`
/// falls back to [`DEFAULT_MANAGER_PASSWORD`], a missing `employees` list
/// starts with an empty roster.
#[derive(Debug, Clone, Deserialize)]
pub struct PayrollConfig {
    /// Shared password that unlocks the manager menu.
    #[serde(default = "default_manager_password")]
    pub manager_password: String,
    /// Employees loaded into the roster at startup, in order.
    #[serde(default)]
    pub employees: Vec<Employee>,
}

impl Default for PayrollConfig {
    /// The built-in configuration: the default manager password and two
    /// seed employees, one Permanent and one Contract.
    fn default() -> Self {
        Self {
            manager_password: default_manager_password(),
            employees: vec![
                Employee::new(
                    "divya",
                    "emp001",
                    "empPass1",
                    Compensation::Permanent {
                        basic_pay: Decimal::from(1_000_000),
                        bonus: Decimal::from(30_000),
                    },
                ),
                Employee::new(
                    "anushka",
                    "emp002",
                    "empPass2",
                    Compensation::Contract {
                        hourly_rate: Decimal::from(100),
                        hours_worked: 8,
                    },
                ),
            ],
        }
    }
}
