//! Error types for the payroll manager.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every condition the payroll service, the roster and the console
//! session can report.

use thiserror::Error;

/// The main error type for the payroll manager.
///
/// Every fallible operation in the crate returns this error type. Apart from
/// configuration and I/O failures, all variants are recoverable: the console
/// reports them and the session continues.
///
/// # Example
///
/// ```
/// use payroll_manager::error::PayrollError;
///
/// let error = PayrollError::NotFound {
///     employee_id: "emp404".to_string(),
/// };
/// assert_eq!(error.to_string(), "Employee ID not found: emp404");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PayrollError {
    /// Credentials did not match. Deliberately does not say which part was wrong.
    #[error("Invalid credentials")]
    AuthenticationFailure,

    /// No employee with the given ID exists in the roster.
    #[error("Employee ID not found: {employee_id}")]
    NotFound {
        /// The ID that was looked up.
        employee_id: String,
    },

    /// Payroll was requested for a roster with no employees.
    #[error("No employees to generate payroll for")]
    EmptyRoster,

    /// A menu choice outside the offered options.
    #[error("Invalid choice: '{input}'")]
    InvalidSelection {
        /// The raw text that was entered.
        input: String,
    },

    /// An employee type name that is not one of the known variants.
    #[error("Invalid employee type: '{name}'")]
    InvalidVariant {
        /// The type name that was entered.
        name: String,
    },

    /// Text that could not be parsed as the number a field requires.
    #[error("Malformed input for '{field}': '{input}' is not a valid number")]
    MalformedInput {
        /// The field being entered.
        field: String,
        /// The raw text that was entered.
        input: String,
    },

    /// Compensation parameters of one variant were applied to another.
    #[error("Employee '{employee_id}' is {expected}, got {found} compensation")]
    CompensationMismatch {
        /// The employee being updated.
        employee_id: String,
        /// The employee's own variant.
        expected: String,
        /// The variant of the supplied parameters.
        found: String,
    },

    /// A monetary amount left the representable decimal range.
    #[error("Amount out of range while computing {quantity}")]
    AmountOverflow {
        /// The figure being computed (e.g. "gross pay").
        quantity: String,
    },

    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// Reading from or writing to the console failed.
    #[error("Console I/O error: {message}")]
    Io {
        /// A description of the I/O failure.
        message: String,
    },
}

impl PayrollError {
    pub(crate) fn overflow(quantity: &str) -> Self {
        PayrollError::AmountOverflow {
            quantity: quantity.to_string(),
        }
    }
}

impl From<std::io::Error> for PayrollError {
    fn from(err: std::io::Error) -> Self {
        PayrollError::Io {
            message: err.to_string(),
        }
    }
}

/// A type alias for Results that return PayrollError.
pub type PayrollResult<T> = Result<T, PayrollError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authentication_failure_is_generic() {
        let error = PayrollError::AuthenticationFailure;
        assert_eq!(error.to_string(), "Invalid credentials");
    }

    #[test]
    fn test_not_found_displays_id() {
        let error = PayrollError::NotFound {
            employee_id: "emp999".to_string(),
        };
        assert_eq!(error.to_string(), "Employee ID not found: emp999");
    }

    #[test]
    fn test_empty_roster_message() {
        assert_eq!(
            PayrollError::EmptyRoster.to_string(),
            "No employees to generate payroll for"
        );
    }

    #[test]
    fn test_invalid_selection_displays_input() {
        let error = PayrollError::InvalidSelection {
            input: "9".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid choice: '9'");
    }

    #[test]
    fn test_invalid_variant_displays_name() {
        let error = PayrollError::InvalidVariant {
            name: "consultant".to_string(),
        };
        assert_eq!(error.to_string(), "Invalid employee type: 'consultant'");
    }

    #[test]
    fn test_malformed_input_displays_field_and_input() {
        let error = PayrollError::MalformedInput {
            field: "Basic Pay".to_string(),
            input: "lots".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Malformed input for 'Basic Pay': 'lots' is not a valid number"
        );
    }

    #[test]
    fn test_compensation_mismatch_displays_variants() {
        let error = PayrollError::CompensationMismatch {
            employee_id: "emp001".to_string(),
            expected: "Permanent".to_string(),
            found: "Contract".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Employee 'emp001' is Permanent, got Contract compensation"
        );
    }

    #[test]
    fn test_amount_overflow_names_quantity() {
        let error = PayrollError::AmountOverflow {
            quantity: "gross pay".to_string(),
        };
        assert_eq!(error.to_string(), "Amount out of range while computing gross pay");
    }

    #[test]
    fn test_config_parse_error_displays_path_and_message() {
        let error = PayrollError::ConfigParseError {
            path: "/config/bad.yaml".to_string(),
            message: "invalid YAML syntax".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Failed to parse configuration file '/config/bad.yaml': invalid YAML syntax"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let error: PayrollError = io.into();
        assert_eq!(error.to_string(), "Console I/O error: pipe closed");
    }

    #[test]
    fn test_errors_implement_std_error() {
        fn assert_error<T: std::error::Error>() {}
        assert_error::<PayrollError>();
    }

    #[test]
    fn test_error_propagation_with_question_mark() {
        fn returns_empty() -> PayrollResult<()> {
            Err(PayrollError::EmptyRoster)
        }

        fn propagates_error() -> PayrollResult<()> {
            returns_empty()?;
            Ok(())
        }

        assert_eq!(propagates_error(), Err(PayrollError::EmptyRoster));
    }
}
