//! Salary calculation.
//!
//! Gross pay is derived from a variant's compensation parameters, then each
//! deduction in the variant's schedule is applied to gross pay. The result
//! is returned as a value; nothing is cached on the employee record.
//!
//! All arithmetic is checked. Parameters whose pay cannot be represented
//! yield [`PayrollError::AmountOverflow`] instead of a panic.

use rust_decimal::Decimal;

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Compensation, DeductionLine, EmployeeType, SalaryBreakdown};

use super::rates::{deduction_rate, deduction_schedule, intern_fixed_salary};

/// Computes gross pay from compensation parameters.
///
/// | Variant | Gross pay |
/// |---|---|
/// | Permanent | basic_pay + bonus |
/// | Contract | hourly_rate * hours_worked |
/// | Intern | 10000 |
/// | Freelancer | project_rate |
pub fn gross_pay(compensation: &Compensation) -> PayrollResult<Decimal> {
    let gross = match compensation {
        Compensation::Permanent { basic_pay, bonus } => basic_pay.checked_add(*bonus),
        Compensation::Contract {
            hourly_rate,
            hours_worked,
        } => hourly_rate.checked_mul(Decimal::from(*hours_worked)),
        Compensation::Intern => Some(intern_fixed_salary()),
        Compensation::Freelancer { project_rate } => Some(*project_rate),
    };
    gross.ok_or_else(|| PayrollError::overflow("gross pay"))
}

/// Itemises the deductions a variant withholds from the given gross pay.
pub fn itemise_deductions(
    employee_type: EmployeeType,
    gross_pay: Decimal,
) -> PayrollResult<Vec<DeductionLine>> {
    deduction_schedule(employee_type)
        .iter()
        .map(|kind| {
            let rate = deduction_rate(*kind);
            let amount = gross_pay
                .checked_mul(rate)
                .ok_or_else(|| PayrollError::overflow(kind.description()))?;
            Ok(DeductionLine {
                kind: *kind,
                rate,
                amount,
            })
        })
        .collect()
}

/// Calculates the full salary breakdown for a set of compensation parameters.
///
/// The calculation is pure: the same parameters always produce the same
/// breakdown.
///
/// # Examples
///
/// ```
/// use payroll_manager::calculation::calculate_salary;
/// use payroll_manager::models::Compensation;
/// use rust_decimal::Decimal;
///
/// let salary = calculate_salary(&Compensation::Contract {
///     hourly_rate: Decimal::from(100),
///     hours_worked: 8,
/// })
/// .unwrap();
/// assert_eq!(salary.gross_pay, Decimal::from(800));
/// assert_eq!(salary.deductions, Decimal::from(104));
/// assert_eq!(salary.net_pay, Decimal::from(696));
///
/// let too_large = calculate_salary(&Compensation::Permanent {
///     basic_pay: Decimal::MAX,
///     bonus: Decimal::ONE,
/// });
/// assert!(too_large.is_err());
/// ```
pub fn calculate_salary(compensation: &Compensation) -> PayrollResult<SalaryBreakdown> {
    let gross = gross_pay(compensation)?;
    let lines = itemise_deductions(compensation.employee_type(), gross)?;
    SalaryBreakdown::new(gross, lines)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DeductionKind;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_permanent_seed_employee() {
        let salary = calculate_salary(&Compensation::Permanent {
            basic_pay: dec("1000000"),
            bonus: dec("30000"),
        })
        .unwrap();

        assert_eq!(salary.gross_pay, dec("1030000"));
        assert_eq!(salary.deductions, dec("206000"));
        assert_eq!(salary.net_pay, dec("824000"));
    }

    #[test]
    fn test_permanent_itemises_four_deductions() {
        let salary = calculate_salary(&Compensation::Permanent {
            basic_pay: dec("1000"),
            bonus: dec("0"),
        })
        .unwrap();

        let amounts: Vec<(DeductionKind, Decimal)> = salary
            .deduction_lines
            .iter()
            .map(|line| (line.kind, line.amount))
            .collect();
        assert_eq!(
            amounts,
            vec![
                (DeductionKind::IncomeTax, dec("100")),
                (DeductionKind::EmployerTax, dec("30")),
                (DeductionKind::CompanyInsurance, dec("50")),
                (DeductionKind::OperationalExpenses, dec("20")),
            ]
        );
    }

    #[test]
    fn test_contract_seed_employee() {
        let salary = calculate_salary(&Compensation::Contract {
            hourly_rate: dec("100"),
            hours_worked: 8,
        })
        .unwrap();

        assert_eq!(salary.gross_pay, dec("800"));
        assert_eq!(salary.deductions, dec("104"));
        assert_eq!(salary.net_pay, dec("696"));
        assert_eq!(salary.deduction_lines.len(), 2);
    }

    #[test]
    fn test_contract_fractional_rate() {
        let salary = calculate_salary(&Compensation::Contract {
            hourly_rate: dec("28.54"),
            hours_worked: 38,
        })
        .unwrap();

        assert_eq!(salary.gross_pay, dec("1084.52"));
        assert_eq!(salary.net_pay, dec("1084.52") * dec("0.87"));
    }

    #[test]
    fn test_contract_zero_hours_pays_nothing() {
        let salary = calculate_salary(&Compensation::Contract {
            hourly_rate: dec("100"),
            hours_worked: 0,
        })
        .unwrap();

        assert_eq!(salary.gross_pay, Decimal::ZERO);
        assert_eq!(salary.net_pay, Decimal::ZERO);
    }

    #[test]
    fn test_intern_is_fixed() {
        let salary = calculate_salary(&Compensation::Intern).unwrap();

        assert_eq!(salary.gross_pay, dec("10000"));
        assert_eq!(salary.deductions, dec("1000"));
        assert_eq!(salary.net_pay, dec("9000"));
    }

    #[test]
    fn test_freelancer_keeps_ninety_percent() {
        let salary = calculate_salary(&Compensation::Freelancer {
            project_rate: dec("2500"),
        })
        .unwrap();

        assert_eq!(salary.gross_pay, dec("2500"));
        assert_eq!(salary.deductions, dec("250"));
        assert_eq!(salary.net_pay, dec("2250"));
    }

    #[test]
    fn test_calculation_is_idempotent() {
        let compensation = Compensation::Permanent {
            basic_pay: dec("4321.09"),
            bonus: dec("12.34"),
        };

        assert_eq!(calculate_salary(&compensation), calculate_salary(&compensation));
    }

    #[test]
    fn test_permanent_sum_out_of_range_is_an_error() {
        let result = calculate_salary(&Compensation::Permanent {
            basic_pay: Decimal::MAX,
            bonus: dec("1"),
        });
        assert_eq!(result, Err(PayrollError::overflow("gross pay")));
    }

    #[test]
    fn test_contract_product_out_of_range_is_an_error() {
        let result = calculate_salary(&Compensation::Contract {
            hourly_rate: Decimal::MAX,
            hours_worked: 2,
        });
        assert_eq!(result, Err(PayrollError::overflow("gross pay")));
    }

    #[test]
    fn test_rate_near_the_range_limit_still_calculates() {
        let salary = calculate_salary(&Compensation::Freelancer {
            project_rate: dec("50000000000000000000000000000"),
        })
        .unwrap();
        assert_eq!(salary.deductions, dec("5000000000000000000000000000"));
        assert_eq!(salary.net_pay, dec("45000000000000000000000000000"));
    }
}
