//! Core data models for the payroll manager.
//!
//! This module contains all the domain models used throughout the crate.

mod employee;
mod payroll_run;
mod salary;

pub use employee::{Compensation, Employee, EmployeeType};
pub use payroll_run::{EmployeeSummary, PayrollRun, PayrollTotals};
pub use salary::{DeductionKind, DeductionLine, SalaryBreakdown, format_amount};
