//! Payroll run models.
//!
//! This module contains [`EmployeeSummary`], the per-employee view used for
//! listings and payslips, and [`PayrollRun`], the result of generating
//! payroll for the whole roster.

use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::{PayrollError, PayrollResult};

use super::{EmployeeType, SalaryBreakdown, format_amount};

/// One employee's identity together with freshly computed pay figures.
///
/// The `Display` form is the classic detail line:
///
/// ```text
/// Employee Name: anushka | Gross Pay: 800.00 | Deductions: 104.00 | Net Pay: 696.00
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EmployeeSummary {
    /// The employee's name.
    pub name: String,
    /// The employee's ID.
    pub employee_id: String,
    /// The employee's variant.
    pub employee_type: EmployeeType,
    /// Pay figures computed at the time the summary was taken.
    pub salary: SalaryBreakdown,
}

impl EmployeeSummary {
    /// Returns the detail line with the variant tag appended, as used in listings.
    pub fn with_type(&self) -> String {
        format!("{} | Type: {}", self, self.employee_type)
    }
}

impl fmt::Display for EmployeeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Employee Name: {} | Gross Pay: {} | Deductions: {} | Net Pay: {}",
            self.name,
            format_amount(self.salary.gross_pay),
            format_amount(self.salary.deductions),
            format_amount(self.salary.net_pay)
        )
    }
}

/// Aggregated figures for a payroll run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollTotals {
    /// Number of payslips in the run.
    pub headcount: usize,
    /// Sum of gross pay across the run.
    pub gross_pay: Decimal,
    /// Sum of deductions across the run.
    pub deductions: Decimal,
    /// Sum of net pay across the run.
    pub net_pay: Decimal,
}

impl PayrollTotals {
    /// Sums the figures of the given payslips.
    ///
    /// Returns [`PayrollError::AmountOverflow`] if any sum leaves the decimal
    /// range.
    pub fn from_payslips(payslips: &[EmployeeSummary]) -> PayrollResult<Self> {
        let sum = |quantity: &str, figure: fn(&SalaryBreakdown) -> Decimal| {
            payslips
                .iter()
                .try_fold(Decimal::ZERO, |total, payslip| {
                    total.checked_add(figure(&payslip.salary))
                })
                .ok_or_else(|| PayrollError::overflow(quantity))
        };

        Ok(Self {
            headcount: payslips.len(),
            gross_pay: sum("total gross pay", |s| s.gross_pay)?,
            deductions: sum("total deductions", |s| s.deductions)?,
            net_pay: sum("total net pay", |s| s.net_pay)?,
        })
    }
}

/// The result of generating payroll for every employee in the roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayrollRun {
    /// Unique identifier for this run.
    pub run_id: Uuid,
    /// When the run was generated.
    pub generated_at: DateTime<Utc>,
    /// One payslip per employee, in roster order.
    pub payslips: Vec<EmployeeSummary>,
    /// Aggregated totals over all payslips.
    pub totals: PayrollTotals,
}

impl PayrollRun {
    /// Creates a run from payslips, stamping a new ID and the current time.
    pub fn new(payslips: Vec<EmployeeSummary>) -> PayrollResult<Self> {
        let totals = PayrollTotals::from_payslips(&payslips)?;
        Ok(Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            payslips,
            totals,
        })
    }

    /// Returns the first payslip for the given employee ID.
    pub fn payslip(&self, employee_id: &str) -> Option<&EmployeeSummary> {
        self.payslips.iter().find(|p| p.employee_id == employee_id)
    }
}
