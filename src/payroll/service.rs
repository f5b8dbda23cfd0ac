//! Payroll service operations over a roster.

use tracing::{debug, info, warn};

use crate::calculation::calculate_salary;
use crate::error::{PayrollError, PayrollResult};
use crate::models::{Compensation, Employee, EmployeeSummary, PayrollRun, SalaryBreakdown};
use crate::roster::Roster;

/// Stateless payroll operations.
///
/// Every operation is a single pass over the roster it is given. The service
/// performs no authorization of its own beyond the employee credential check
/// in [`PayrollService::authenticate_and_show_salary`]; callers must make sure
/// only a manager reaches the other operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct PayrollService;

impl PayrollService {
    /// Creates a new payroll service.
    pub fn new() -> Self {
        Self
    }

    /// Generates payroll for every employee, in roster order.
    ///
    /// Returns [`PayrollError::EmptyRoster`] when there is nobody to pay, and
    /// [`PayrollError::AmountOverflow`] when a payslip or a total cannot be
    /// represented.
    ///
    /// # Example
    ///
    /// ```
    /// use payroll_manager::models::{Compensation, Employee};
    /// use payroll_manager::payroll::PayrollService;
    /// use payroll_manager::roster::Roster;
    /// use rust_decimal::Decimal;
    ///
    /// let mut roster = Roster::new();
    /// roster.add(Employee::new("Raj", "emp003", "pw3", Compensation::Intern));
    ///
    /// let run = PayrollService::new().generate_payroll(&roster).unwrap();
    /// assert_eq!(run.payslip("emp003").unwrap().salary.net_pay, Decimal::from(9000));
    /// ```
    pub fn generate_payroll(&self, roster: &Roster) -> PayrollResult<PayrollRun> {
        if roster.is_empty() {
            warn!("No employees to generate payroll for");
            return Err(PayrollError::EmptyRoster);
        }

        let payslips = roster
            .iter()
            .map(Employee::summary)
            .collect::<PayrollResult<Vec<EmployeeSummary>>>()?;
        for payslip in &payslips {
            info!(
                employee_id = %payslip.employee_id,
                employee_type = %payslip.employee_type,
                gross_pay = %payslip.salary.gross_pay,
                net_pay = %payslip.salary.net_pay,
                "Payslip calculated"
            );
        }

        let run = PayrollRun::new(payslips)?;
        info!(
            run_id = %run.run_id,
            headcount = run.totals.headcount,
            gross_pay = %run.totals.gross_pay,
            net_pay = %run.totals.net_pay,
            "Payroll generated"
        );
        Ok(run)
    }

    /// Returns the salary of the employee whose ID and password both match.
    ///
    /// Any mismatch, including an unknown ID or an empty roster, yields the
    /// same [`PayrollError::AuthenticationFailure`].
    pub fn authenticate_and_show_salary(
        &self,
        employee_id: &str,
        password: &str,
        roster: &Roster,
    ) -> PayrollResult<SalaryBreakdown> {
        match roster.authenticate(employee_id, password) {
            Some(employee) => {
                let salary = employee.calculate_salary()?;
                info!(employee_id = %employee_id, "Employee viewed salary");
                Ok(salary)
            }
            None => {
                warn!(employee_id = %employee_id, "Employee authentication failed");
                Err(PayrollError::AuthenticationFailure)
            }
        }
    }

    /// Replaces the compensation parameters of the employee with the given ID.
    ///
    /// Matches on ID only. Returns [`PayrollError::NotFound`] without touching
    /// the roster when no employee matches, and
    /// [`PayrollError::AmountOverflow`] when pay for the new parameters cannot
    /// be computed.
    pub fn update_salary(
        &self,
        employee_id: &str,
        compensation: Compensation,
        roster: &mut Roster,
    ) -> PayrollResult<()> {
        let Some(employee) = roster.find_by_id_mut(employee_id) else {
            warn!(employee_id = %employee_id, "Update requested for unknown employee");
            return Err(PayrollError::NotFound {
                employee_id: employee_id.to_string(),
            });
        };

        if compensation.employee_type() == employee.employee_type() {
            calculate_salary(&compensation)?;
        }
        employee.update_compensation(compensation)?;
        info!(
            employee_id = %employee_id,
            employee_type = %employee.employee_type(),
            "Salary details updated"
        );
        Ok(())
    }

    /// Lists every employee with fresh pay figures, in roster order.
    pub fn list_all(&self, roster: &Roster) -> PayrollResult<Vec<EmployeeSummary>> {
        debug!(count = roster.len(), "Listing employees");
        roster.iter().map(Employee::summary).collect()
    }

    /// Appends a new employee to the roster.
    ///
    /// An employee whose pay cannot be computed is rejected with
    /// [`PayrollError::AmountOverflow`] and the roster is left unchanged.
    pub fn add_employee(&self, employee: Employee, roster: &mut Roster) -> PayrollResult<()> {
        if let Err(err) = employee.calculate_salary() {
            warn!(
                employee_id = %employee.employee_id(),
                error = %err,
                "Employee rejected"
            );
            return Err(err);
        }

        info!(
            employee_id = %employee.employee_id(),
            employee_type = %employee.employee_type(),
            "Employee added"
        );
        roster.add(employee);
        Ok(())
    }
}
