//! Pay period input models.
//!
//! This module contains the [`PayPeriodInput`] and [`OvertimeHours`] types
//! that carry a single pay period's raw figures into the engine, along with
//! the entry-boundary validation that guards every computation.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EngineError, EngineResult};

/// Overtime hours worked during a pay period, by shift category.
///
/// Each category defaults to zero when absent. A value with all three
/// categories at zero is treated exactly like an absent value: no overtime
/// line appears on the payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeHours {
    /// Daytime overtime hours.
    #[serde(default)]
    pub day: Decimal,
    /// Night overtime hours.
    #[serde(default)]
    pub night: Decimal,
    /// Public-holiday overtime hours.
    #[serde(default)]
    pub holiday: Decimal,
}

impl OvertimeHours {
    /// Returns true when no overtime was worked in any category.
    pub fn is_zero(&self) -> bool {
        self.day.is_zero() && self.night.is_zero() && self.holiday.is_zero()
    }
}

/// The raw inputs of one pay period for one employee.
///
/// # Example
///
/// ```
/// use payroll_engine::models::PayPeriodInput;
/// use chrono::NaiveDate;
/// use rust_decimal::Decimal;
///
/// let input = PayPeriodInput {
///     base_salary: Decimal::from(1000),
///     work_days: 26,
///     worked_days: 26,
///     bonuses: Decimal::ZERO,
///     overtime_hours: None,
///     advances: Decimal::ZERO,
///     other_deductions: Decimal::ZERO,
///     period_start: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
///     period_end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
/// };
/// assert!(input.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayPeriodInput {
    /// The contractual monthly base salary. Must be positive.
    pub base_salary: Decimal,
    /// Number of working days in the period.
    pub work_days: u32,
    /// Number of days actually worked. Must not exceed `work_days`.
    pub worked_days: u32,
    /// Bonuses paid this period.
    #[serde(default)]
    pub bonuses: Decimal,
    /// Overtime hours by category, if any overtime was worked.
    #[serde(default)]
    pub overtime_hours: Option<OvertimeHours>,
    /// Salary advances to recover from this period's pay.
    #[serde(default)]
    pub advances: Decimal,
    /// Ad-hoc deductions (e.g., loan repayments).
    #[serde(default)]
    pub other_deductions: Decimal,
    /// First day of the pay period (echoed, not interpreted).
    pub period_start: NaiveDate,
    /// Last day of the pay period (echoed, not interpreted).
    pub period_end: NaiveDate,
}

fn require_non_negative(field: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: field.to_string(),
            message: "cannot be negative".to_string(),
        });
    }
    Ok(())
}

impl PayPeriodInput {
    /// Validates the period input.
    ///
    /// This is the single entry-boundary check of the engine: once it
    /// passes, no downstream calculation re-validates and none can fail.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when:
    /// - `base_salary` is zero or negative
    /// - `worked_days` exceeds `work_days`
    /// - any optional amount or overtime hour value is negative
    /// - `period_end` precedes `period_start`
    pub fn validate(&self) -> EngineResult<()> {
        if self.base_salary <= Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: "base_salary".to_string(),
                message: "must be positive".to_string(),
            });
        }

        if self.worked_days > self.work_days {
            return Err(EngineError::InvalidInput {
                field: "worked_days".to_string(),
                message: format!(
                    "worked days ({}) cannot exceed work days ({})",
                    self.worked_days, self.work_days
                ),
            });
        }

        require_non_negative("bonuses", self.bonuses)?;
        require_non_negative("advances", self.advances)?;
        require_non_negative("other_deductions", self.other_deductions)?;

        if let Some(hours) = &self.overtime_hours {
            require_non_negative("overtime_hours.day", hours.day)?;
            require_non_negative("overtime_hours.night", hours.night)?;
            require_non_negative("overtime_hours.holiday", hours.holiday)?;
        }

        if self.period_end < self.period_start {
            return Err(EngineError::InvalidInput {
                field: "period_end".to_string(),
                message: "cannot precede period_start".to_string(),
            });
        }

        Ok(())
    }
}
