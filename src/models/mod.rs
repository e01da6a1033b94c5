//! Data models for the Payroll Calculation Engine.
//!
//! This module contains the input models ([`EmployeeProfile`],
//! [`PayPeriodInput`]) and the output models ([`Payslip`] and its parts).

mod employee;
mod payslip;
mod period;

pub use employee::{EmployeeProfile, MaritalStatus};
pub use payslip::{
    AllowanceBreakdown, BracketLine, DeductionCategory, DeductionLine, EarningLine,
    EmployerContributions, OvertimeBreakdown, Payslip, PayslipStatus, TaxAssessment,
};
pub use period::{OvertimeHours, PayPeriodInput};
