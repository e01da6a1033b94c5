//! Fiscal allowance calculation.
//!
//! This module computes the abatements that reduce the taxable base: a
//! professional-expense allowance proportional to gross minus the employee
//! social contribution, a flat monthly amount per dependent child, and a
//! flat spousal allowance for married employees.

use rust_decimal::Decimal;

use crate::config::AllowanceRates;
use crate::models::{AllowanceBreakdown, MaritalStatus};

/// Computes the fiscal allowances for one payslip.
///
/// - professional-expense allowance: `(gross − employee social) × rate`
/// - children allowance: `number_of_children × per_child_monthly`
/// - spousal allowance: the configured flat amount, only when married
///
/// The spousal amount is a policy constant taken from the injected
/// configuration, never an inline literal. This function has no error
/// conditions.
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::calculate_allowances;
/// use payroll_engine::config::AllowanceRates;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let rates = AllowanceRates {
///     professional_expense_rate: Decimal::from_str("0.10").unwrap(),
///     per_child_monthly: Decimal::from(25),
///     spouse_monthly: Decimal::from(50),
/// };
/// let allowances = calculate_allowances(
///     Decimal::from(1000),
///     Decimal::from_str("91.80").unwrap(),
///     0,
///     None,
///     &rates,
/// );
/// assert_eq!(allowances.professional_expense, Decimal::from_str("90.820").unwrap());
/// assert_eq!(allowances.total, Decimal::from_str("90.820").unwrap());
/// ```
pub fn calculate_allowances(
    gross_salary: Decimal,
    employee_social_contribution: Decimal,
    number_of_children: u32,
    marital_status: Option<MaritalStatus>,
    rates: &AllowanceRates,
) -> AllowanceBreakdown {
    let professional_expense =
        (gross_salary - employee_social_contribution) * rates.professional_expense_rate;

    let children = Decimal::from(number_of_children) * rates.per_child_monthly;

    let spouse = if marital_status == Some(MaritalStatus::Married) {
        rates.spouse_monthly
    } else {
        Decimal::ZERO
    };

    AllowanceBreakdown {
        professional_expense,
        children,
        spouse,
        total: professional_expense + children + spouse,
    }
}
