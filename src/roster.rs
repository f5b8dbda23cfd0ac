//! The employee roster.
//!
//! An ordered collection of [`Employee`] records. Insertion order is kept for
//! listing and payroll. Employee IDs are used as lookup keys, but uniqueness
//! is not enforced: lookups return the first record with a matching ID.

use crate::models::Employee;

/// Ordered, in-memory collection of employee records.
///
/// # Example
///
/// ```
/// use payroll_manager::models::{Compensation, Employee};
/// use payroll_manager::roster::Roster;
///
/// let mut roster = Roster::new();
/// roster.add(Employee::new("Raj", "emp003", "pw3", Compensation::Intern));
///
/// assert_eq!(roster.len(), 1);
/// assert!(roster.find_by_id("emp003").is_some());
/// assert!(roster.authenticate("emp003", "wrong").is_none());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Roster {
    employees: Vec<Employee>,
}

impl Roster {
    /// Creates an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an employee to the end of the roster.
    pub fn add(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    /// Returns the first employee with the given ID.
    pub fn find_by_id(&self, employee_id: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.employee_id() == employee_id)
    }

    /// Returns the first employee with the given ID, mutably.
    pub fn find_by_id_mut(&mut self, employee_id: &str) -> Option<&mut Employee> {
        self.employees
            .iter_mut()
            .find(|e| e.employee_id() == employee_id)
    }

    /// Returns the first employee whose ID and password both match.
    pub fn authenticate(&self, employee_id: &str, password: &str) -> Option<&Employee> {
        self.employees
            .iter()
            .find(|e| e.matches_credentials(employee_id, password))
    }

    /// Iterates over employees in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Employee> {
        self.employees.iter()
    }

    /// Returns the number of employees.
    pub fn len(&self) -> usize {
        self.employees.len()
    }

    /// Returns true if the roster has no employees.
    pub fn is_empty(&self) -> bool {
        self.employees.is_empty()
    }
}

impl From<Vec<Employee>> for Roster {
    fn from(employees: Vec<Employee>) -> Self {
        Self { employees }
    }
}

impl FromIterator<Employee> for Roster {
    fn from_iter<I: IntoIterator<Item = Employee>>(iter: I) -> Self {
        Self {
            employees: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Employee;
    type IntoIter = std::slice::Iter<'a, Employee>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Compensation;
    use rust_decimal::Decimal;

    fn freelancer(name: &str, id: &str, rate: i64) -> Employee {
        Employee::new(
            name,
            id,
            "secret",
            Compensation::Freelancer {
                project_rate: Decimal::from(rate),
            },
        )
    }

    #[test]
    fn test_new_roster_is_empty() {
        let roster = Roster::new();
        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert!(roster.find_by_id("emp001").is_none());
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut roster = Roster::new();
        roster.add(freelancer("c", "emp003", 3));
        roster.add(freelancer("a", "emp001", 1));
        roster.add(freelancer("b", "emp002", 2));

        let ids: Vec<&str> = roster.iter().map(|e| e.employee_id()).collect();
        assert_eq!(ids, vec!["emp003", "emp001", "emp002"]);
    }

    #[test]
    fn test_duplicate_ids_are_allowed_and_first_wins() {
        let mut roster = Roster::new();
        roster.add(freelancer("first", "dup", 1));
        roster.add(freelancer("second", "dup", 2));

        assert_eq!(roster.len(), 2);
        assert_eq!(roster.find_by_id("dup").unwrap().name(), "first");
    }

    #[test]
    fn test_find_by_id_mut_updates_in_place() {
        let mut roster: Roster = vec![freelancer("a", "emp001", 1)].into();
        roster
            .find_by_id_mut("emp001")
            .unwrap()
            .update_compensation(Compensation::Freelancer {
                project_rate: Decimal::from(50),
            })
            .unwrap();

        assert_eq!(
            roster.find_by_id("emp001").unwrap().calculate_salary().unwrap().gross_pay,
            Decimal::from(50)
        );
    }

    #[test]
    fn test_authenticate_requires_exact_match() {
        let roster: Roster = [freelancer("a", "emp001", 1)].into_iter().collect();

        assert!(roster.authenticate("emp001", "secret").is_some());
        assert!(roster.authenticate("emp001", "Secret").is_none());
        assert!(roster.authenticate("emp002", "secret").is_none());
    }

    #[test]
    fn test_authenticate_skips_duplicate_with_wrong_password() {
        let mut roster = Roster::new();
        roster.add(freelancer("first", "dup", 1));
        roster.add(Employee::new("second", "dup", "other", Compensation::Intern));

        assert_eq!(roster.authenticate("dup", "other").unwrap().name(), "second");
    }
}
