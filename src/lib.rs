//! Console payroll manager.
//!
//! This crate keeps an in-memory roster of Permanent, Contract, Intern and
//! Freelancer employees, computes their gross pay, deductions and net pay,
//! and serves an interactive console with an employee role (salary lookup)
//! and a manager role (roster management and payroll generation).

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod console;
pub mod error;
pub mod models;
pub mod payroll;
pub mod roster;
