//! Employee model and related types.
//!
//! This module defines the [`Employee`] record, the [`Compensation`] tagged
//! union holding each variant's pay parameters, and the [`EmployeeType`] tag.

use std::fmt;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculation::calculate_salary;
use crate::error::{PayrollError, PayrollResult};

use super::{EmployeeSummary, SalaryBreakdown};

/// The employment category of an employee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EmployeeType {
    /// Salaried employee paid basic pay plus bonus.
    Permanent,
    /// Contractor paid by the hour.
    Contract,
    /// Intern on a fixed salary.
    Intern,
    /// Freelancer paid a flat project rate.
    Freelancer,
}

impl EmployeeType {
    /// All variants, in menu order.
    pub const ALL: [EmployeeType; 4] = [
        EmployeeType::Permanent,
        EmployeeType::Contract,
        EmployeeType::Intern,
        EmployeeType::Freelancer,
    ];

    /// Returns the display name of the variant.
    pub fn as_str(&self) -> &'static str {
        match self {
            EmployeeType::Permanent => "Permanent",
            EmployeeType::Contract => "Contract",
            EmployeeType::Intern => "Intern",
            EmployeeType::Freelancer => "Freelancer",
        }
    }
}

impl fmt::Display for EmployeeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EmployeeType {
    type Err = PayrollError;

    /// Parses a variant name, ignoring case and surrounding whitespace.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_manager::models::EmployeeType;
    ///
    /// let parsed: EmployeeType = " INTERN ".parse().unwrap();
    /// assert_eq!(parsed, EmployeeType::Intern);
    /// assert!("consultant".parse::<EmployeeType>().is_err());
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "permanent" => Ok(EmployeeType::Permanent),
            "contract" => Ok(EmployeeType::Contract),
            "intern" => Ok(EmployeeType::Intern),
            "freelancer" => Ok(EmployeeType::Freelancer),
            _ => Err(PayrollError::InvalidVariant {
                name: s.trim().to_string(),
            }),
        }
    }
}

/// Variant-specific compensation parameters.
///
/// Serialized with an internal `type` tag, e.g.
/// `{ type: contract, hourly_rate: "100", hours_worked: 8 }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Compensation {
    /// Basic pay plus bonus.
    Permanent {
        /// Base salary for the pay period.
        basic_pay: Decimal,
        /// Bonus on top of the base salary.
        bonus: Decimal,
    },
    /// Hourly rate times hours worked.
    Contract {
        /// Pay per hour.
        hourly_rate: Decimal,
        /// Whole hours worked in the pay period.
        hours_worked: u32,
    },
    /// Fixed salary, no parameters.
    Intern,
    /// Flat rate for the project.
    Freelancer {
        /// Agreed project rate.
        project_rate: Decimal,
    },
}

impl Compensation {
    /// Returns the variant tag of these parameters.
    pub fn employee_type(&self) -> EmployeeType {
        match self {
            Compensation::Permanent { .. } => EmployeeType::Permanent,
            Compensation::Contract { .. } => EmployeeType::Contract,
            Compensation::Intern => EmployeeType::Intern,
            Compensation::Freelancer { .. } => EmployeeType::Freelancer,
        }
    }
}

/// An employee record in the roster.
///
/// Identity and credentials are fixed at construction; only the
/// compensation parameters can change afterwards. Pay figures are never
/// stored, they are computed on demand from the current parameters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    name: String,
    employee_id: String,
    #[serde(skip_serializing)]
    password: String,
    compensation: Compensation,
}

impl Employee {
    /// Creates a new employee record.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_manager::models::{Compensation, Employee, EmployeeType};
    /// use rust_decimal::Decimal;
    ///
    /// let intern = Employee::new("Raj", "emp003", "pw3", Compensation::Intern);
    /// assert_eq!(intern.employee_type(), EmployeeType::Intern);
    /// assert_eq!(intern.calculate_salary().unwrap().net_pay, Decimal::from(9000));
    /// ```
    pub fn new(
        name: impl Into<String>,
        employee_id: impl Into<String>,
        password: impl Into<String>,
        compensation: Compensation,
    ) -> Self {
        Self {
            name: name.into(),
            employee_id: employee_id.into(),
            password: password.into(),
            compensation,
        }
    }

    /// Returns the employee's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the employee's ID.
    pub fn employee_id(&self) -> &str {
        &self.employee_id
    }

    /// Returns the current compensation parameters.
    pub fn compensation(&self) -> &Compensation {
        &self.compensation
    }

    /// Returns the employee's variant tag.
    pub fn employee_type(&self) -> EmployeeType {
        self.compensation.employee_type()
    }

    /// Returns true if both the ID and the password match exactly.
    pub fn matches_credentials(&self, employee_id: &str, password: &str) -> bool {
        self.employee_id == employee_id && self.password == password
    }

    /// Computes gross pay, deductions and net pay from the current parameters.
    ///
    /// Fails with [`PayrollError::AmountOverflow`] when the parameters are too
    /// large for any figure to be represented.
    pub fn calculate_salary(&self) -> PayrollResult<SalaryBreakdown> {
        calculate_salary(&self.compensation)
    }

    /// Returns a fresh summary of this employee's pay.
    pub fn summary(&self) -> PayrollResult<EmployeeSummary> {
        Ok(EmployeeSummary {
            name: self.name.clone(),
            employee_id: self.employee_id.clone(),
            employee_type: self.employee_type(),
            salary: self.calculate_salary()?,
        })
    }

    /// Returns the display line with name, gross pay, deductions and net pay.
    ///
    /// Figures are recomputed on every call, so they always reflect the
    /// latest compensation update.
    pub fn details(&self) -> PayrollResult<String> {
        Ok(self.summary()?.to_string())
    }

    /// Replaces the compensation parameters.
    ///
    /// Interns are on a fixed salary, so any update is accepted and ignored.
    /// Parameters of a different variant are rejected and nothing changes.
    pub fn update_compensation(&mut self, compensation: Compensation) -> PayrollResult<()> {
        let current = self.employee_type();
        if current == EmployeeType::Intern {
            return Ok(());
        }

        let found = compensation.employee_type();
        if found != current {
            return Err(PayrollError::CompensationMismatch {
                employee_id: self.employee_id.clone(),
                expected: current.to_string(),
                found: found.to_string(),
            });
        }

        self.compensation = compensation;
        Ok(())
    }
}
