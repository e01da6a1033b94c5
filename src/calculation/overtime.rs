//! Overtime pay calculation.
//!
//! This module derives an hourly rate from the monthly base salary and
//! computes pay for the three overtime categories (day, night, holiday),
//! each with its own configured multiplier.

use rust_decimal::Decimal;

use crate::config::{RegulatoryConstants, WorkingTime};
use crate::error::{EngineError, EngineResult};
use crate::models::{OvertimeBreakdown, OvertimeHours};

/// Derives the hourly rate from a monthly base salary.
///
/// The rate is the base salary spread over the standard monthly hours
/// (`daily_hours` × `monthly_working_days`).
///
/// # Examples
///
/// ```
/// use payroll_engine::calculation::hourly_rate;
/// use payroll_engine::config::WorkingTime;
/// use rust_decimal::Decimal;
///
/// let working_time = WorkingTime {
///     daily_hours: Decimal::from(8),
///     weekly_hours: Decimal::from(48),
///     monthly_working_days: Decimal::from(25),
/// };
/// let rate = hourly_rate(Decimal::from(1000), &working_time);
/// assert_eq!(rate, Decimal::from(5));
/// ```
pub fn hourly_rate(base_salary: Decimal, working_time: &WorkingTime) -> Decimal {
    base_salary / (working_time.daily_hours * working_time.monthly_working_days)
}

/// Computes the overtime pay breakdown for a pay period.
///
/// Each category's pay is `hours × hourly_rate × multiplier`; the total is
/// the sum of the three categories. Callers must omit the breakdown from the
/// payslip when no overtime was worked at all, rather than include a zero
/// one.
///
/// # Errors
///
/// Returns `InvalidInput` when any hour value is negative. The engine's
/// entry boundary already guarantees this, so the check is a precondition
/// guard for direct callers.
pub fn calculate_overtime(
    base_salary: Decimal,
    hours: &OvertimeHours,
    constants: &RegulatoryConstants,
) -> EngineResult<OvertimeBreakdown> {
    for (field, value) in [
        ("overtime_hours.day", hours.day),
        ("overtime_hours.night", hours.night),
        ("overtime_hours.holiday", hours.holiday),
    ] {
        if value < Decimal::ZERO {
            return Err(EngineError::InvalidInput {
                field: field.to_string(),
                message: "cannot be negative".to_string(),
            });
        }
    }

    let working_time = &constants.working_time;
    let regular_monthly_hours = working_time.daily_hours * working_time.monthly_working_days;
    let rate = hourly_rate(base_salary, working_time);

    let day_pay = hours.day * rate * constants.overtime.day;
    let night_pay = hours.night * rate * constants.overtime.night;
    let holiday_pay = hours.holiday * rate * constants.overtime.holiday;

    Ok(OvertimeBreakdown {
        hourly_rate: rate,
        regular_monthly_hours,
        day_hours: hours.day,
        day_pay,
        night_hours: hours.night,
        night_pay,
        holiday_hours: hours.holiday,
        holiday_pay,
        total: day_pay + night_pay + holiday_pay,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AllowanceRates, ContributionRates, OvertimeMultipliers, TaxBracket, WorkingTime,
    };
    use chrono::NaiveDate;
    use std::str::FromStr;

    fn dec(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    fn create_test_constants() -> RegulatoryConstants {
        RegulatoryConstants {
            effective_date: NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
            contributions: ContributionRates {
                cnss_employee: dec("0.0918"),
                cnss_employer: dec("0.1657"),
                css: dec("0.01"),
                tfp: dec("0.02"),
                foprolos: dec("0.01"),
            },
            allowances: AllowanceRates {
                professional_expense_rate: dec("0.10"),
                per_child_monthly: dec("25"),
                spouse_monthly: dec("50"),
            },
            overtime: OvertimeMultipliers {
                day: dec("1.25"),
                night: dec("1.5"),
                holiday: dec("2.0"),
            },
            working_time: WorkingTime {
                daily_hours: dec("8"),
                weekly_hours: dec("48"),
                monthly_working_days: dec("25"),
            },
            brackets: vec![TaxBracket {
                lower: Decimal::ZERO,
                upper: None,
                rate: dec("0.26"),
            }],
        }
    }

    /// OT-001: hourly rate is base over standard monthly hours
    #[test]
    fn test_hourly_rate_derivation() {
        let constants = create_test_constants();
        // 1000 / (8 * 25) = 5
        let rate = hourly_rate(dec("1000"), &constants.working_time);
        assert_eq!(rate, dec("5"));
    }

    /// OT-002: each category pays hours x rate x multiplier
    #[test]
    fn test_category_pay_uses_multiplier() {
        let constants = create_test_constants();
        let hours = OvertimeHours {
            day: dec("4"),
            night: dec("2"),
            holiday: dec("1"),
        };

        let breakdown = calculate_overtime(dec("1000"), &hours, &constants).unwrap();

        // rate = 5: day 4*5*1.25 = 25, night 2*5*1.5 = 15, holiday 1*5*2 = 10
        assert_eq!(breakdown.day_pay, dec("25"));
        assert_eq!(breakdown.night_pay, dec("15"));
        assert_eq!(breakdown.holiday_pay, dec("10"));
        assert_eq!(breakdown.total, dec("50"));
    }

    /// OT-003: total is the sum of the three categories
    #[test]
    fn test_total_is_sum_of_categories() {
        let constants = create_test_constants();
        let hours = OvertimeHours {
            day: dec("3.5"),
            night: dec("1.25"),
            holiday: dec("0"),
        };

        let breakdown = calculate_overtime(dec("1300"), &hours, &constants).unwrap();
        assert_eq!(
            breakdown.total,
            breakdown.day_pay + breakdown.night_pay + breakdown.holiday_pay
        );
    }

    /// OT-004: negative hours are rejected
    #[test]
    fn test_negative_hours_rejected() {
        let constants = create_test_constants();
        let hours = OvertimeHours {
            day: dec("-1"),
            night: Decimal::ZERO,
            holiday: Decimal::ZERO,
        };

        match calculate_overtime(dec("1000"), &hours, &constants) {
            Err(EngineError::InvalidInput { field, .. }) => {
                assert_eq!(field, "overtime_hours.day");
            }
            other => panic!("Expected InvalidInput, got {:?}", other),
        }
    }

    /// OT-005: zero hours yield a zero breakdown
    #[test]
    fn test_zero_hours_yield_zero_breakdown() {
        let constants = create_test_constants();
        let hours = OvertimeHours {
            day: Decimal::ZERO,
            night: Decimal::ZERO,
            holiday: Decimal::ZERO,
        };

        let breakdown = calculate_overtime(dec("1000"), &hours, &constants).unwrap();
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_breakdown_echoes_hours_and_rate() {
        let constants = create_test_constants();
        let hours = OvertimeHours {
            day: dec("6"),
            night: Decimal::ZERO,
            holiday: Decimal::ZERO,
        };

        let breakdown = calculate_overtime(dec("1000"), &hours, &constants).unwrap();
        assert_eq!(breakdown.day_hours, dec("6"));
        assert_eq!(breakdown.hourly_rate, dec("5"));
        assert_eq!(breakdown.regular_monthly_hours, dec("200"));
    }

    #[test]
    fn test_fractional_hours_keep_full_precision() {
        let constants = create_test_constants();
        let hours = OvertimeHours {
            day: dec("1.5"),
            night: Decimal::ZERO,
            holiday: Decimal::ZERO,
        };

        let breakdown = calculate_overtime(dec("1000"), &hours, &constants).unwrap();
        // 1.5 * 5 * 1.25 = 9.375, unrounded
        assert_eq!(breakdown.day_pay, dec("9.375"));
    }
}
