//! Calculation logic for the Payroll Calculation Engine.
//!
//! This module contains the calculation functions the engine sequences into
//! a payslip: overtime pay by shift category, flat-rate social and fiscal
//! contributions, fiscal allowances reducing the taxable base, and the
//! progressive annual income tax walk.

mod allowances;
mod contributions;
mod overtime;
mod progressive_tax;

pub use allowances::calculate_allowances;
pub use contributions::{
    calculate_employer_contributions, employee_social_contribution, solidarity_contribution,
};
pub use overtime::{calculate_overtime, hourly_rate};
pub use progressive_tax::calculate_progressive_tax;
