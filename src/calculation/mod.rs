//! Calculation logic for the payroll manager.
//!
//! This module contains the per-variant gross pay formulas, the fixed
//! deduction rate tables, and the salary calculation that combines them.

mod rates;
mod salary;

pub use rates::{
    company_insurance_rate, deduction_rate, deduction_schedule, employer_tax_rate,
    income_tax_rate, intern_fixed_salary, operational_expenses_rate,
};
pub use salary::{calculate_salary, gross_pay, itemise_deductions};
