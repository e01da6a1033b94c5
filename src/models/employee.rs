//! Employee model and related types.
//!
//! This module defines the EmployeeProfile struct and MaritalStatus enum
//! for representing workers in the payroll system.

use serde::{Deserialize, Serialize};

/// Represents an employee's marital status.
///
/// Only [`MaritalStatus::Married`] affects the computation, through the flat
/// spousal allowance; the other variants are echoed on the payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaritalStatus {
    /// Unmarried.
    Single,
    /// Married; grants the flat spousal allowance.
    Married,
    /// Divorced.
    Divorced,
    /// Widowed.
    Widowed,
}

/// Represents an employee subject to payroll calculation.
///
/// Only `number_of_children` and `marital_status` feed the computation; the
/// identity fields are echoed verbatim on the payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeProfile {
    /// Unique identifier for the employee.
    pub id: String,
    /// The employee's first name.
    pub first_name: String,
    /// The employee's last name.
    pub last_name: String,
    /// The employee identification number (matricule), echoed on the
    /// payslip but never used in any calculation.
    pub employee_number: String,
    /// Number of dependent children.
    #[serde(default)]
    pub number_of_children: u32,
    /// Marital status, if known.
    #[serde(default)]
    pub marital_status: Option<MaritalStatus>,
}

impl EmployeeProfile {
    /// Returns the employee's display name.
    ///
    /// # Examples
    ///
    /// ```
    /// use payroll_engine::models::EmployeeProfile;
    ///
    /// let employee = EmployeeProfile {
    ///     id: "emp_001".to_string(),
    ///     first_name: "Amira".to_string(),
    ///     last_name: "Ben Salah".to_string(),
    ///     employee_number: "M-0042".to_string(),
    ///     number_of_children: 0,
    ///     marital_status: None,
    /// };
    /// assert_eq!(employee.full_name(), "Amira Ben Salah");
    /// ```
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Returns true if the employee is married.
    pub fn is_married(&self) -> bool {
        self.marital_status == Some(MaritalStatus::Married)
    }
}
