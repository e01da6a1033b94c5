//! Payroll Calculation Engine
//!
//! This crate turns an employee's contractual profile and a pay period's raw
//! inputs into a fully itemized payslip (earnings, social and fiscal
//! deductions, employer contributions, net pay) under a progressive-tax,
//! multi-rate regulatory regime.

#![warn(missing_docs)]

pub mod calculation;
pub mod config;
pub mod engine;
pub mod error;
pub mod models;

pub use engine::PayrollEngine;
