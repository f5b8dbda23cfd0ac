//! Salary breakdown models.
//!
//! A [`SalaryBreakdown`] is the value returned by every salary calculation:
//! gross pay, the itemised deductions applied to it, and the resulting net pay.

use std::fmt;

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use crate::error::{PayrollError, PayrollResult};

/// A kind of withholding taken from gross pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionKind {
    /// Income tax, applied to every variant.
    IncomeTax,
    /// Employer payroll tax.
    EmployerTax,
    /// Company insurance contribution.
    CompanyInsurance,
    /// Share of operational expenses.
    OperationalExpenses,
}

impl DeductionKind {
    /// Returns a human-readable name for the deduction.
    pub fn description(&self) -> &'static str {
        match self {
            DeductionKind::IncomeTax => "Income tax",
            DeductionKind::EmployerTax => "Employer tax",
            DeductionKind::CompanyInsurance => "Company insurance",
            DeductionKind::OperationalExpenses => "Operational expenses",
        }
    }
}

impl fmt::Display for DeductionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// A single deduction applied to gross pay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// What is being withheld.
    pub kind: DeductionKind,
    /// The fraction of gross pay withheld (e.g. 0.10).
    pub rate: Decimal,
    /// The amount withheld (gross pay * rate).
    pub amount: Decimal,
}

/// The result of a salary calculation.
///
/// `net_pay` is always `gross_pay - deductions`, and `deductions` is always
/// the sum of `deduction_lines`.
///
/// # Example
///
/// ```
/// use payroll_manager::models::SalaryBreakdown;
/// use rust_decimal::Decimal;
///
/// let breakdown = SalaryBreakdown::new(Decimal::from(800), vec![]).unwrap();
/// assert_eq!(breakdown.net_pay, Decimal::from(800));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryBreakdown {
    /// Total compensation before deductions.
    pub gross_pay: Decimal,
    /// The individual deductions, in rate-table order.
    pub deduction_lines: Vec<DeductionLine>,
    /// Sum of all deduction amounts.
    pub deductions: Decimal,
    /// Amount actually payable.
    pub net_pay: Decimal,
}

impl SalaryBreakdown {
    /// Builds a breakdown from gross pay and its deduction lines.
    ///
    /// Returns [`PayrollError::AmountOverflow`] if the deductions or net pay
    /// fall outside the decimal range.
    pub fn new(gross_pay: Decimal, deduction_lines: Vec<DeductionLine>) -> PayrollResult<Self> {
        let deductions = deduction_lines
            .iter()
            .try_fold(Decimal::ZERO, |total, line| total.checked_add(line.amount))
            .ok_or_else(|| PayrollError::overflow("deductions"))?;
        let net_pay = gross_pay
            .checked_sub(deductions)
            .ok_or_else(|| PayrollError::overflow("net pay"))?;

        Ok(Self {
            gross_pay,
            deduction_lines,
            deductions,
            net_pay,
        })
    }
}

/// Formats a monetary amount with two decimal places, rounding half away from zero.
///
/// ```
/// use payroll_manager::models::format_amount;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_amount(Decimal::from(696)), "696.00");
/// assert_eq!(format_amount(Decimal::new(12345, 3)), "12.35");
/// ```
pub fn format_amount(amount: Decimal) -> String {
    format!(
        "{:.2}",
        amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
    )
}
