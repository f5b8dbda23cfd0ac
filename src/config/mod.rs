//! Configuration loading for the payroll manager.
//!
//! This module loads the manager password and the startup roster from a YAML
//! file, falling back to built-in defaults when no file is given.
//!
//! # Example
//!
//! ```
//! use payroll_manager::config::ConfigLoader;
//!
//! let loader = ConfigLoader::default();
//! assert_eq!(loader.manager_password(), "manager123");
//! assert_eq!(loader.seed_roster().len(), 2);
//! ```

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{DEFAULT_MANAGER_PASSWORD, PayrollConfig};
