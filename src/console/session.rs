//! The interactive console session.
//!
//! A [`Session`] owns the roster for the lifetime of the program, reads
//! operator input line by line, checks the manager password and dispatches
//! to the [`PayrollService`].

use std::io::{BufRead, Write};

use rust_decimal::Decimal;
use tracing::{info, warn};

use crate::error::{PayrollError, PayrollResult};
use crate::models::{Compensation, Employee, EmployeeType, format_amount};
use crate::payroll::PayrollService;
use crate::roster::Roster;

use super::menu::{ManagerChoice, RoleChoice};
use super::prompt::Prompter;

const SEPARATOR: &str = "----------------------------------------";

/// Whether the session should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Quit,
}

/// An interactive payroll session over a reader and a writer.
///
/// # Example
///
/// ```
/// use payroll_manager::config::ConfigLoader;
/// use payroll_manager::console::Session;
/// use std::io::Cursor;
///
/// let config = ConfigLoader::default();
/// let input = Cursor::new("1\nemp002\nempPass2\n3\n");
/// let mut session = Session::new(config.seed_roster(), config.manager_password(), input, Vec::new());
/// session.run().unwrap();
///
/// let (_, output) = session.finish();
/// assert!(String::from_utf8(output).unwrap().contains("Net Pay: 696.00"));
/// ```
#[derive(Debug)]
pub struct Session<R, W> {
    roster: Roster,
    manager_password: String,
    service: PayrollService,
    prompter: Prompter<R, W>,
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Creates a session over the given roster and streams.
    pub fn new(roster: Roster, manager_password: impl Into<String>, input: R, output: W) -> Self {
        Self {
            roster,
            manager_password: manager_password.into(),
            service: PayrollService::new(),
            prompter: Prompter::new(input, output),
        }
    }

    /// Returns the current roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Ends the session, returning the roster and the output stream.
    pub fn finish(self) -> (Roster, W) {
        let (_, output) = self.prompter.into_inner();
        (self.roster, output)
    }

    /// Runs the role menu until the operator exits or input ends.
    pub fn run(&mut self) -> PayrollResult<()> {
        info!(employees = self.roster.len(), "Session started");

        loop {
            self.prompter.say("Choose your role:")?;
            for line in RoleChoice::MENU {
                self.prompter.say(line)?;
            }
            let Some(raw) = self.prompter.ask("> ")? else {
                break;
            };

            let flow = match raw.parse::<RoleChoice>() {
                Ok(RoleChoice::Employee) => self.employee_view()?,
                Ok(RoleChoice::Manager) => self.manager_view()?,
                Ok(RoleChoice::Exit) => {
                    self.prompter.say("Exiting the program.")?;
                    Flow::Quit
                }
                Err(err) => {
                    self.report(&err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
        }

        info!(employees = self.roster.len(), "Session ended");
        Ok(())
    }

    fn employee_view(&mut self) -> PayrollResult<Flow> {
        let Some(employee_id) = self.prompter.ask("Enter Employee ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = self.prompter.ask("Enter Password: ")? else {
            return Ok(Flow::Quit);
        };

        match self
            .service
            .authenticate_and_show_salary(&employee_id, &password, &self.roster)
        {
            Ok(salary) => {
                self.prompter.say(SEPARATOR)?;
                self.prompter
                    .say(format!("Salary details for {}:", employee_id))?;
                self.prompter
                    .say(format!("Gross Pay: {}", format_amount(salary.gross_pay)))?;
                for line in &salary.deduction_lines {
                    self.prompter.say(format!(
                        "  {} ({}%): {}",
                        line.kind,
                        (line.rate * Decimal::ONE_HUNDRED).normalize(),
                        format_amount(line.amount)
                    ))?;
                }
                self.prompter
                    .say(format!("Deductions: {}", format_amount(salary.deductions)))?;
                self.prompter
                    .say(format!("Net Pay: {}", format_amount(salary.net_pay)))?;
                self.prompter.say(SEPARATOR)?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn manager_view(&mut self) -> PayrollResult<Flow> {
        let Some(password) = self.prompter.ask("Enter Manager Password: ")? else {
            return Ok(Flow::Quit);
        };
        if password != self.manager_password {
            warn!("Manager authentication failed");
            self.prompter.say("Incorrect Manager Password.")?;
            return Ok(Flow::Continue);
        }
        info!("Manager menu opened");

        loop {
            self.prompter.say("Choose an option:")?;
            for line in ManagerChoice::MENU {
                self.prompter.say(line)?;
            }
            let Some(raw) = self.prompter.ask("> ")? else {
                return Ok(Flow::Quit);
            };

            let flow = match raw.parse::<ManagerChoice>() {
                Ok(ManagerChoice::AddEmployee) => self.add_employee()?,
                Ok(ManagerChoice::UpdateSalary) => self.update_salary()?,
                Ok(ManagerChoice::ListEmployees) => self.list_employees()?,
                Ok(ManagerChoice::GeneratePayroll) => self.generate_payroll()?,
                Ok(ManagerChoice::Back) => return Ok(Flow::Continue),
                Err(err) => {
                    self.report(&err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                return Ok(Flow::Quit);
            }
        }
    }

    fn add_employee(&mut self) -> PayrollResult<Flow> {
        let Some(raw_type) = self
            .prompter
            .ask("Enter the type of employee to add (Permanent/Contract/Intern/Freelancer): ")?
        else {
            return Ok(Flow::Quit);
        };
        let employee_type = match raw_type.parse::<EmployeeType>() {
            Ok(employee_type) => employee_type,
            Err(err) => {
                self.report(&err)?;
                return Ok(Flow::Continue);
            }
        };

        let Some(name) = self.prompter.ask("Enter Employee Name: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(employee_id) = self.prompter.ask("Enter Employee ID: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(password) = self.prompter.ask("Enter Password: ")? else {
            return Ok(Flow::Quit);
        };
        let Some(compensation) = self.ask_compensation(employee_type, None)? else {
            return Ok(Flow::Quit);
        };

        match self.service.add_employee(
            Employee::new(name, employee_id, password, compensation),
            &mut self.roster,
        ) {
            Ok(()) => self.prompter.say("Employee added successfully.")?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn update_salary(&mut self) -> PayrollResult<Flow> {
        let Some(employee_id) = self.prompter.ask("Enter Employee ID to update salary: ")? else {
            return Ok(Flow::Quit);
        };

        let Some(employee) = self.roster.find_by_id(&employee_id) else {
            let err = PayrollError::NotFound { employee_id };
            self.report(&err)?;
            return Ok(Flow::Continue);
        };
        let employee_type = employee.employee_type();
        let name = employee.name().to_string();

        if employee_type == EmployeeType::Intern {
            self.prompter
                .say(format!("Intern salary for {} is fixed; nothing to update.", name))?;
            return Ok(Flow::Continue);
        }

        let Some(compensation) = self.ask_compensation(employee_type, Some(&name))? else {
            return Ok(Flow::Quit);
        };
        match self
            .service
            .update_salary(&employee_id, compensation, &mut self.roster)
        {
            Ok(()) => self
                .prompter
                .say(format!("Salary details for {} updated.", employee_id))?,
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn list_employees(&mut self) -> PayrollResult<Flow> {
        match self.service.list_all(&self.roster) {
            Ok(listing) => {
                self.prompter.say("List of all employees:")?;
                for summary in &listing {
                    self.prompter.say(summary.with_type())?;
                }
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    fn generate_payroll(&mut self) -> PayrollResult<Flow> {
        match self.service.generate_payroll(&self.roster) {
            Ok(run) => {
                self.prompter.say(SEPARATOR)?;
                for payslip in &run.payslips {
                    self.prompter.say(payslip)?;
                    self.prompter.say(format!(
                        "Calculated Net Salary: {}",
                        format_amount(payslip.salary.net_pay)
                    ))?;
                }
                self.prompter.say(format!(
                    "Total Net Pay: {} across {} employees",
                    format_amount(run.totals.net_pay),
                    run.totals.headcount
                ))?;
                self.prompter.say(SEPARATOR)?;
            }
            Err(err) => self.report(&err)?,
        }
        Ok(Flow::Continue)
    }

    /// Prompts for the parameters of a variant.
    ///
    /// With `update_for` set, prompts name the employee being updated.
    fn ask_compensation(
        &mut self,
        employee_type: EmployeeType,
        update_for: Option<&str>,
    ) -> PayrollResult<Option<Compensation>> {
        let prompt = |field: &str| match update_for {
            Some(name) => format!("Enter new {} for {}: ", field.to_lowercase(), name),
            None => format!("Enter {}: ", field),
        };

        let compensation = match employee_type {
            EmployeeType::Permanent => {
                let Some(basic_pay) = self
                    .prompter
                    .ask_number::<Decimal>(&prompt("Basic Pay"), "Basic Pay")?
                else {
                    return Ok(None);
                };
                let Some(bonus) = self
                    .prompter
                    .ask_number::<Decimal>(&prompt("Bonus"), "Bonus")?
                else {
                    return Ok(None);
                };
                Compensation::Permanent { basic_pay, bonus }
            }
            EmployeeType::Contract => {
                let Some(hourly_rate) = self
                    .prompter
                    .ask_number::<Decimal>(&prompt("Hourly Rate"), "Hourly Rate")?
                else {
                    return Ok(None);
                };
                let Some(hours_worked) = self
                    .prompter
                    .ask_number::<u32>(&prompt("Hours Worked"), "Hours Worked")?
                else {
                    return Ok(None);
                };
                Compensation::Contract {
                    hourly_rate,
                    hours_worked,
                }
            }
            EmployeeType::Intern => Compensation::Intern,
            EmployeeType::Freelancer => {
                let Some(project_rate) = self
                    .prompter
                    .ask_number::<Decimal>(&prompt("Project Rate"), "Project Rate")?
                else {
                    return Ok(None);
                };
                Compensation::Freelancer { project_rate }
            }
        };
        Ok(Some(compensation))
    }

    /// Writes the operator-facing message for a recoverable error.
    fn report(&mut self, err: &PayrollError) -> PayrollResult<()> {
        warn!(error = %err, "Request rejected");
        let message = match err {
            PayrollError::AuthenticationFailure => "Invalid Employee ID or Password.".to_string(),
            PayrollError::NotFound { .. } => "Employee ID not found.".to_string(),
            PayrollError::EmptyRoster => "No employees to generate payroll for.".to_string(),
            PayrollError::InvalidSelection { .. } => {
                "Invalid choice. Please try again.".to_string()
            }
            PayrollError::InvalidVariant { .. } => "Invalid employee type.".to_string(),
            PayrollError::AmountOverflow { quantity } => {
                format!("Amount too large: cannot compute {}.", quantity)
            }
            other => format!("Error: {}", other),
        };
        self.prompter.say(message)
    }
}
