//! Flat-rate contribution calculations.
//!
//! Every contribution here is a simple proportion of gross salary: the
//! employee and employer social security contributions (CNSS), the
//! solidarity contribution (CSS), the professional training tax (TFP), and
//! the housing fund contribution (FOPROLOS). Rates come from
//! [`RegulatoryConstants`](crate::config::RegulatoryConstants) and are never
//! recomputed here.

use rust_decimal::Decimal;

use crate::config::ContributionRates;
use crate::error::{EngineError, EngineResult};
use crate::models::EmployerContributions;

fn require_non_negative_gross(gross_salary: Decimal) -> EngineResult<()> {
    if gross_salary < Decimal::ZERO {
        return Err(EngineError::InvalidInput {
            field: "gross_salary".to_string(),
            message: "cannot be negative".to_string(),
        });
    }
    Ok(())
}

/// Computes the employee-paid social security contribution on gross salary.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative gross salary; this component has no
/// other failure mode.
pub fn employee_social_contribution(
    gross_salary: Decimal,
    rates: &ContributionRates,
) -> EngineResult<Decimal> {
    require_non_negative_gross(gross_salary)?;
    Ok(gross_salary * rates.cnss_employee)
}

/// Computes the flat solidarity contribution on gross salary.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative gross salary.
pub fn solidarity_contribution(
    gross_salary: Decimal,
    rates: &ContributionRates,
) -> EngineResult<Decimal> {
    require_non_negative_gross(gross_salary)?;
    Ok(gross_salary * rates.css)
}

/// Computes the employer-side contributions on gross salary.
///
/// Covers the employer social security contribution (CNSS), the professional
/// training tax (TFP), and the housing fund contribution (FOPROLOS). These
/// feed the total employer cost and are never deducted from employee pay.
///
/// # Errors
///
/// Returns `InvalidInput` for a negative gross salary.
pub fn calculate_employer_contributions(
    gross_salary: Decimal,
    rates: &ContributionRates,
) -> EngineResult<EmployerContributions> {
    require_non_negative_gross(gross_salary)?;

    let cnss = gross_salary * rates.cnss_employer;
    let tfp = gross_salary * rates.tfp;
    let foprolos = gross_salary * rates.foprolos;

    Ok(EmployerContributions {
        cnss,
        tfp,
        foprolos,
        total: cnss + tfp + foprolos,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn test_rates() -> ContributionRates {
        ContributionRates {
            cnss_employee: dec("0.0918"),
            cnss_employer: dec("0.1657"),
            css: dec("0.01"),
            tfp: dec("0.02"),
            foprolos: dec("0.01"),
        }
    }

    /// CO-001: employee social contribution is gross times the rate
    #[test]
    fn test_employee_social_contribution() {
        let amount = employee_social_contribution(dec("1000"), &test_rates()).unwrap();
        assert_eq!(amount, dec("91.8000"));
    }

    /// CO-002: solidarity contribution is gross times the rate
    #[test]
    fn test_solidarity_contribution() {
        let amount = solidarity_contribution(dec("1000"), &test_rates()).unwrap();
        assert_eq!(amount, dec("10.00"));
    }

    /// CO-003: employer contributions cover CNSS, TFP, and FOPROLOS
    #[test]
    fn test_employer_contributions() {
        let employer = calculate_employer_contributions(dec("1000"), &test_rates()).unwrap();

        assert_eq!(employer.cnss, dec("165.70"));
        assert_eq!(employer.tfp, dec("20.00"));
        assert_eq!(employer.foprolos, dec("10.00"));
        assert_eq!(employer.total, dec("195.70"));
    }

    /// CO-004: employer total is the sum of the parts
    #[test]
    fn test_employer_total_is_sum() {
        let employer = calculate_employer_contributions(dec("2543.50"), &test_rates()).unwrap();
        assert_eq!(
            employer.total,
            employer.cnss + employer.tfp + employer.foprolos
        );
    }

    /// CO-005: negative gross is rejected
    #[test]
    fn test_negative_gross_rejected() {
        let rates = test_rates();

        for result in [
            employee_social_contribution(dec("-1"), &rates).map(|_| ()),
            solidarity_contribution(dec("-1"), &rates).map(|_| ()),
            calculate_employer_contributions(dec("-1"), &rates).map(|_| ()),
        ] {
            match result {
                Err(EngineError::InvalidInput { field, .. }) => {
                    assert_eq!(field, "gross_salary");
                }
                other => panic!("Expected InvalidInput, got {:?}", other),
            }
        }
    }

    /// CO-006: zero gross yields zero contributions
    #[test]
    fn test_zero_gross_yields_zero() {
        let rates = test_rates();
        assert_eq!(
            employee_social_contribution(Decimal::ZERO, &rates).unwrap(),
            Decimal::ZERO
        );
        assert_eq!(
            calculate_employer_contributions(Decimal::ZERO, &rates)
                .unwrap()
                .total,
            Decimal::ZERO
        );
    }
}
