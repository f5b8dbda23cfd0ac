//! Payroll operations for the payroll manager.
//!
//! This module provides the [`PayrollService`], a stateless facade over a
//! [`Roster`](crate::roster::Roster) for payroll generation, authenticated
//! salary lookup, compensation updates and listing.

mod service;

pub use service::PayrollService;
