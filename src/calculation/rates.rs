//! Deduction rate tables.
//!
//! Every variant withholds a fixed set of deductions, each a fixed fraction
//! of gross pay. This module holds those fractions and the per-variant
//! schedules.

use rust_decimal::Decimal;

use crate::models::{DeductionKind, EmployeeType};

/// Returns the income tax rate (10%).
pub fn income_tax_rate() -> Decimal {
    Decimal::new(10, 2)
}

/// Returns the employer tax rate (3%).
pub fn employer_tax_rate() -> Decimal {
    Decimal::new(3, 2)
}

/// Returns the company insurance rate (5%).
pub fn company_insurance_rate() -> Decimal {
    Decimal::new(5, 2)
}

/// Returns the operational expenses rate (2%).
pub fn operational_expenses_rate() -> Decimal {
    Decimal::new(2, 2)
}

/// Returns the fixed gross salary paid to interns.
pub fn intern_fixed_salary() -> Decimal {
    Decimal::from(10_000)
}

/// Returns the rate withheld for a deduction kind.
pub fn deduction_rate(kind: DeductionKind) -> Decimal {
    match kind {
        DeductionKind::IncomeTax => income_tax_rate(),
        DeductionKind::EmployerTax => employer_tax_rate(),
        DeductionKind::CompanyInsurance => company_insurance_rate(),
        DeductionKind::OperationalExpenses => operational_expenses_rate(),
    }
}

/// Returns the deductions applied to a variant, in the order they are itemised.
///
/// | Variant | Deductions | Total |
/// |---|---|---|
/// | Permanent | income tax, employer tax, company insurance, operational expenses | 20% |
/// | Contract | income tax, employer tax | 13% |
/// | Intern | income tax | 10% |
/// | Freelancer | income tax | 10% |
pub fn deduction_schedule(employee_type: EmployeeType) -> &'static [DeductionKind] {
    match employee_type {
        EmployeeType::Permanent => &[
            DeductionKind::IncomeTax,
            DeductionKind::EmployerTax,
            DeductionKind::CompanyInsurance,
            DeductionKind::OperationalExpenses,
        ],
        EmployeeType::Contract => &[DeductionKind::IncomeTax, DeductionKind::EmployerTax],
        EmployeeType::Intern | EmployeeType::Freelancer => &[DeductionKind::IncomeTax],
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_individual_rates() {
        assert_eq!(income_tax_rate(), dec("0.10"));
        assert_eq!(employer_tax_rate(), dec("0.03"));
        assert_eq!(company_insurance_rate(), dec("0.05"));
        assert_eq!(operational_expenses_rate(), dec("0.02"));
    }

    fn total_rate(employee_type: EmployeeType) -> Decimal {
        deduction_schedule(employee_type)
            .iter()
            .map(|kind| deduction_rate(*kind))
            .sum()
    }

    #[test]
    fn test_total_rate_per_variant() {
        assert_eq!(total_rate(EmployeeType::Permanent), dec("0.20"));
        assert_eq!(total_rate(EmployeeType::Contract), dec("0.13"));
        assert_eq!(total_rate(EmployeeType::Intern), dec("0.10"));
        assert_eq!(total_rate(EmployeeType::Freelancer), dec("0.10"));
    }

    #[test]
    fn test_every_schedule_starts_with_income_tax() {
        for employee_type in EmployeeType::ALL {
            assert_eq!(
                deduction_schedule(employee_type).first(),
                Some(&DeductionKind::IncomeTax)
            );
        }
    }

    #[test]
    fn test_intern_fixed_salary_is_ten_thousand() {
        assert_eq!(intern_fixed_salary(), dec("10000"));
    }
}
