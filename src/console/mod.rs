//! Interactive console for the payroll manager.
//!
//! This module provides the line-oriented menu session that authenticates
//! the employee and manager roles and dispatches to the payroll service.
//! Input and output streams are injected, so sessions can be scripted.

mod menu;
mod prompt;
mod session;

pub use menu::{ManagerChoice, RoleChoice};
pub use prompt::{Prompter, parse_number};
pub use session::Session;
