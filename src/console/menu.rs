//! Menu choices for the console session.

use std::str::FromStr;

use crate::error::PayrollError;

/// A choice in the top-level role menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleChoice {
    /// Self-service salary lookup.
    Employee,
    /// Password-protected roster management.
    Manager,
    /// Leave the program.
    Exit,
}

impl RoleChoice {
    /// Menu lines, in display order.
    pub const MENU: [&'static str; 3] = ["1. Employee", "2. Manager", "3. Exit"];
}

impl FromStr for RoleChoice {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(RoleChoice::Employee),
            "2" => Ok(RoleChoice::Manager),
            "3" => Ok(RoleChoice::Exit),
            other => Err(PayrollError::InvalidSelection {
                input: other.to_string(),
            }),
        }
    }
}

/// A choice in the manager menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManagerChoice {
    /// Add a new employee to the roster.
    AddEmployee,
    /// Update an employee's compensation parameters.
    UpdateSalary,
    /// List every employee.
    ListEmployees,
    /// Generate payroll for every employee.
    GeneratePayroll,
    /// Return to the role menu.
    Back,
}

impl ManagerChoice {
    /// Menu lines, in display order.
    pub const MENU: [&'static str; 5] = [
        "1. Add a new employee",
        "2. Update employee salary settings",
        "3. View employee details",
        "4. Generate payroll",
        "5. Exit",
    ];
}

impl FromStr for ManagerChoice {
    type Err = PayrollError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "1" => Ok(ManagerChoice::AddEmployee),
            "2" => Ok(ManagerChoice::UpdateSalary),
            "3" => Ok(ManagerChoice::ListEmployees),
            "4" => Ok(ManagerChoice::GeneratePayroll),
            "5" => Ok(ManagerChoice::Back),
            other => Err(PayrollError::InvalidSelection {
                input: other.to_string(),
            }),
        }
    }
}
