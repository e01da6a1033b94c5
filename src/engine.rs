//! The payslip assembler.
//!
//! [`PayrollEngine`] holds one validated, immutable rule version and
//! sequences the calculation modules into a complete [`Payslip`]. The
//! computation is pure and referentially transparent: payslips for
//! different employees are fully independent and may be computed
//! concurrently against a shared engine with no coordination.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::debug;
use uuid::Uuid;

use crate::calculation::{
    calculate_allowances, calculate_employer_contributions, calculate_overtime,
    calculate_progressive_tax, employee_social_contribution, solidarity_contribution,
};
use crate::config::RegulatoryConstants;
use crate::error::EngineResult;
use crate::models::{
    DeductionCategory, DeductionLine, EarningLine, EmployeeProfile, PayPeriodInput, Payslip,
    PayslipStatus,
};

/// Namespace for deterministic payslip identifiers.
const PAYSLIP_NAMESPACE: Uuid = Uuid::from_u128(0x8f1d_b1d4_52aa_4ec1_9e0c_7a4b_63d2_0f15);

/// Computes itemized payslips against one regulatory rule version.
///
/// The engine validates its constants once at construction; every
/// subsequent computation trusts them. Re-invoking with identical inputs
/// and timestamp yields an identical payslip.
///
/// # Example
///
/// ```no_run
/// use payroll_engine::PayrollEngine;
/// use payroll_engine::config::ConfigLoader;
/// use chrono::NaiveDate;
///
/// let loader = ConfigLoader::load("./config/tn2025")?;
/// let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
/// let engine = PayrollEngine::new(loader.constants_for(date)?.clone())?;
/// # Ok::<(), payroll_engine::error::EngineError>(())
/// ```
#[derive(Debug, Clone)]
pub struct PayrollEngine {
    constants: RegulatoryConstants,
}

impl PayrollEngine {
    /// Creates an engine for one rule version.
    ///
    /// # Errors
    ///
    /// Returns `InvalidConfiguration` when the constants violate any
    /// regulatory invariant (see
    /// [`RegulatoryConstants::validate`](crate::config::RegulatoryConstants::validate)).
    pub fn new(constants: RegulatoryConstants) -> EngineResult<Self> {
        constants.validate()?;
        Ok(Self { constants })
    }

    /// Returns the rule version this engine computes against.
    pub fn constants(&self) -> &RegulatoryConstants {
        &self.constants
    }

    /// Computes a payslip, stamped with the current time.
    ///
    /// Convenience wrapper over [`compute_payslip_at`](Self::compute_payslip_at).
    pub fn compute_payslip(
        &self,
        profile: &EmployeeProfile,
        input: &PayPeriodInput,
    ) -> EngineResult<Payslip> {
        self.compute_payslip_at(profile, input, Utc::now())
    }

    /// Computes a payslip with an injected generation timestamp.
    ///
    /// This is the deterministic entry point: identical profile, input,
    /// constants, and timestamp produce a bit-identical payslip. The
    /// sequencing is strictly linear; each step's output feeds the next.
    ///
    /// # Errors
    ///
    /// Returns `InvalidInput` when the period input fails the entry-boundary
    /// validation. No step can fail after validation succeeds.
    pub fn compute_payslip_at(
        &self,
        profile: &EmployeeProfile,
        input: &PayPeriodInput,
        generated_at: DateTime<Utc>,
    ) -> EngineResult<Payslip> {
        input.validate()?;

        let constants = &self.constants;

        // "No overtime" omits the breakdown entirely; an all-zero hours
        // value is treated the same as an absent one.
        let overtime = match &input.overtime_hours {
            Some(hours) if !hours.is_zero() => {
                Some(calculate_overtime(input.base_salary, hours, constants)?)
            }
            _ => None,
        };
        let overtime_total = overtime
            .as_ref()
            .map(|o| o.total)
            .unwrap_or(Decimal::ZERO);

        let gross_salary = input.base_salary + input.bonuses + overtime_total;

        let employee_social =
            employee_social_contribution(gross_salary, &constants.contributions)?;

        let allowances = calculate_allowances(
            gross_salary,
            employee_social,
            profile.number_of_children,
            profile.marital_status,
            &constants.allowances,
        );

        let taxable_base = gross_salary - employee_social - allowances.total;
        let tax = calculate_progressive_tax(taxable_base, &constants.brackets);

        let solidarity = solidarity_contribution(gross_salary, &constants.contributions)?;

        let mut earnings = vec![EarningLine {
            id: "base_salary".to_string(),
            label: "Base salary".to_string(),
            amount: input.base_salary,
            taxable: true,
        }];
        if input.bonuses > Decimal::ZERO {
            earnings.push(EarningLine {
                id: "bonuses".to_string(),
                label: "Bonuses".to_string(),
                amount: input.bonuses,
                taxable: true,
            });
        }
        if let Some(breakdown) = &overtime {
            if breakdown.total > Decimal::ZERO {
                earnings.push(EarningLine {
                    id: "overtime".to_string(),
                    label: "Overtime".to_string(),
                    amount: breakdown.total,
                    taxable: true,
                });
            }
        }

        let mut deductions = vec![
            DeductionLine {
                id: "cnss_employee".to_string(),
                label: "Social security contribution (CNSS)".to_string(),
                amount: employee_social,
                category: DeductionCategory::Social,
            },
            DeductionLine {
                id: "irpp".to_string(),
                label: "Income tax (IRPP)".to_string(),
                amount: tax.monthly_tax,
                category: DeductionCategory::Tax,
            },
            DeductionLine {
                id: "css".to_string(),
                label: "Solidarity contribution (CSS)".to_string(),
                amount: solidarity,
                category: DeductionCategory::Tax,
            },
        ];
        if input.advances > Decimal::ZERO {
            deductions.push(DeductionLine {
                id: "advances".to_string(),
                label: "Salary advances".to_string(),
                amount: input.advances,
                category: DeductionCategory::Other,
            });
        }
        if input.other_deductions > Decimal::ZERO {
            deductions.push(DeductionLine {
                id: "other_deductions".to_string(),
                label: "Other deductions".to_string(),
                amount: input.other_deductions,
                category: DeductionCategory::Other,
            });
        }

        let total_deductions = employee_social
            + tax.monthly_tax
            + solidarity
            + input.advances
            + input.other_deductions;
        let net_before_advances = gross_salary - employee_social - tax.monthly_tax - solidarity;
        let net_salary = gross_salary - total_deductions;

        let employer = calculate_employer_contributions(gross_salary, &constants.contributions)?;
        let total_employer_cost = gross_salary + employer.total;

        debug!(
            employee_id = %profile.id,
            gross = %gross_salary,
            taxable_base = %taxable_base,
            monthly_tax = %tax.monthly_tax,
            net = %net_salary,
            "payslip computed"
        );

        Ok(Payslip {
            payslip_id: payslip_id(profile, input),
            generated_at,
            rule_effective_date: constants.effective_date,
            employee_id: profile.id.clone(),
            employee_name: profile.full_name(),
            employee_number: profile.employee_number.clone(),
            period_start: input.period_start,
            period_end: input.period_end,
            work_days: input.work_days,
            worked_days: input.worked_days,
            earnings,
            deductions,
            overtime,
            gross_salary,
            employee_social_contribution: employee_social,
            allowances,
            taxable_base,
            tax,
            solidarity_contribution: solidarity,
            total_deductions,
            net_before_advances,
            net_salary,
            employer,
            total_employer_cost,
            status: PayslipStatus::Draft,
        })
    }
}

/// Derives the deterministic payslip identifier for one employee and period.
fn payslip_id(profile: &EmployeeProfile, input: &PayPeriodInput) -> Uuid {
    let name = format!(
        "{}:{}:{}",
        profile.id, input.period_start, input.period_end
    );
    Uuid::new_v5(&PAYSLIP_NAMESPACE, name.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{
        AllowanceRates, ContributionRates, OvertimeMultipliers, TaxBracket, WorkingTime,
    };
    use crate::models::{MaritalStatus, OvertimeHours};
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
                monthly_working_days: dec("26"),
            },
            brackets: vec![
                TaxBracket {
                    lower: dec("0"),
                    upper: Some(dec("5000")),
                    rate: dec("0"),
                },
                TaxBracket {
                    lower: dec("5000"),
                    upper: Some(dec("20000")),
                    rate: dec("0.26"),
                },
                TaxBracket {
                    lower: dec("20000"),
                    upper: None,
                    rate: dec("0.35"),
                },
            ],
        }
    }

    fn create_test_engine() -> PayrollEngine {
        PayrollEngine::new(create_test_constants()).unwrap()
    }

    fn create_test_profile() -> EmployeeProfile {
        EmployeeProfile {
            id: "emp_001".to_string(),
            first_name: "Amira".to_string(),
            last_name: "Ben Salah".to_string(),
            employee_number: "M-0042".to_string(),
            number_of_children: 0,
            marital_status: Some(MaritalStatus::Single),
        }
    }

    fn create_test_input(base_salary: &str) -> PayPeriodInput {
        PayPeriodInput {
            base_salary: dec(base_salary),
            work_days: 26,
            worked_days: 26,
            bonuses: Decimal::ZERO,
            overtime_hours: None,
            advances: Decimal::ZERO,
            other_deductions: Decimal::ZERO,
            period_start: NaiveDate::from_ymd_opt(2025, 6, 1).unwrap(),
            period_end: NaiveDate::from_ymd_opt(2025, 6, 30).unwrap(),
        }
    }

    /// EN-001: invalid constants are rejected at construction
    #[test]
    fn test_invalid_constants_rejected_at_construction() {
        let mut constants = create_test_constants();
        constants.brackets.clear();
        assert!(PayrollEngine::new(constants).is_err());
    }

    /// EN-002: gross is base plus bonuses plus overtime
    #[test]
    fn test_gross_salary_aggregation() {
        let engine = create_test_engine();
        let profile = create_test_profile();
        let mut input = create_test_input("1000");
        input.bonuses = dec("150");
        input.overtime_hours = Some(OvertimeHours {
            day: dec("4"),
            night: Decimal::ZERO,
            holiday: Decimal::ZERO,
        });

        let payslip = engine.compute_payslip(&profile, &input).unwrap();

        let overtime_total = payslip.overtime.as_ref().unwrap().total;
        assert_eq!(
            payslip.gross_salary,
            dec("1000") + dec("150") + overtime_total
        );
    }

    /// EN-003: deduction lines always include social, tax, solidarity
    #[test]
    fn test_mandatory_deduction_lines_present() {
        let engine = create_test_engine();
        let payslip = engine
            .compute_payslip(&create_test_profile(), &create_test_input("1000"))
            .unwrap();

        let ids: Vec<&str> = payslip.deductions.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["cnss_employee", "irpp", "css"]);
    }

    /// EN-004: advances and other deductions appear only when positive
    #[test]
    fn test_optional_deduction_lines() {
        let engine = create_test_engine();
        let profile = create_test_profile();
        let mut input = create_test_input("1000");
        input.advances = dec("100");
        input.other_deductions = dec("20");

        let payslip = engine.compute_payslip(&profile, &input).unwrap();

        let ids: Vec<&str> = payslip.deductions.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["cnss_employee", "irpp", "css", "advances", "other_deductions"]
        );
        assert_eq!(
            payslip.net_salary,
            payslip.net_before_advances - dec("100") - dec("20")
        );
    }

    /// EN-005: no overtime means no overtime line and no breakdown
    #[test]
    fn test_absent_overtime_omitted() {
        let engine = create_test_engine();
        let payslip = engine
            .compute_payslip(&create_test_profile(), &create_test_input("1000"))
            .unwrap();

        assert!(payslip.overtime.is_none());
        assert!(payslip.earnings.iter().all(|e| e.id != "overtime"));
    }

    /// EN-006: explicit zero overtime equals absent overtime
    #[test]
    fn test_zero_overtime_idempotence() {
        let engine = create_test_engine();
        let profile = create_test_profile();
        let absent = create_test_input("1000");
        let mut zeroed = create_test_input("1000");
        zeroed.overtime_hours = Some(OvertimeHours {
            day: Decimal::ZERO,
            night: Decimal::ZERO,
            holiday: Decimal::ZERO,
        });

        let at = Utc::now();
        let a = engine.compute_payslip_at(&profile, &absent, at).unwrap();
        let b = engine.compute_payslip_at(&profile, &zeroed, at).unwrap();

        assert_eq!(a.earnings, b.earnings);
        assert_eq!(a.overtime, b.overtime);
        assert_eq!(a.gross_salary, b.gross_salary);
        assert_eq!(a.net_salary, b.net_salary);
    }

    /// EN-007: deduction-sum identity holds exactly
    #[test]
    fn test_deduction_sum_identity() {
        let engine = create_test_engine();
        let profile = create_test_profile();
        let mut input = create_test_input("2345.67");
        input.advances = dec("80");

        let payslip = engine.compute_payslip(&profile, &input).unwrap();

        assert_eq!(
            payslip.total_deductions,
            payslip.employee_social_contribution
                + payslip.tax.monthly_tax
                + payslip.solidarity_contribution
                + dec("80")
        );
        assert_eq!(
            payslip.net_salary,
            payslip.gross_salary - payslip.total_deductions
        );
    }

    /// EN-008: total employer cost is gross plus employer contributions
    #[test]
    fn test_total_employer_cost() {
        let engine = create_test_engine();
        let payslip = engine
            .compute_payslip(&create_test_profile(), &create_test_input("1000"))
            .unwrap();

        assert_eq!(
            payslip.total_employer_cost,
            payslip.gross_salary + payslip.employer.total
        );
    }

    /// EN-009: married employees get the spousal allowance
    #[test]
    fn test_spousal_allowance_for_married() {
        let engine = create_test_engine();
        let mut profile = create_test_profile();
        profile.marital_status = Some(MaritalStatus::Married);

        let payslip = engine
            .compute_payslip(&profile, &create_test_input("1000"))
            .unwrap();

        assert_eq!(payslip.allowances.spouse, dec("50"));
    }

    /// EN-010: identical inputs and timestamp produce identical payslips
    #[test]
    fn test_determinism_with_fixed_timestamp() {
        let engine = create_test_engine();
        let profile = create_test_profile();
        let input = create_test_input("1234.56");
        let at = DateTime::parse_from_rfc3339("2025-07-01T08:00:00Z")
            .unwrap()
            .with_timezone(&Utc);

        let first = engine.compute_payslip_at(&profile, &input, at).unwrap();
        let second = engine.compute_payslip_at(&profile, &input, at).unwrap();

        assert_eq!(first, second);
    }

    /// EN-011: invalid input aborts before any calculation
    #[test]
    fn test_invalid_input_rejected() {
        let engine = create_test_engine();
        let result = engine.compute_payslip(&create_test_profile(), &create_test_input("0"));
        assert!(matches!(
            result,
            Err(crate::error::EngineError::InvalidInput { .. })
        ));
    }

    /// EN-012: payslip id is stable per employee and period
    #[test]
    fn test_payslip_id_deterministic() {
        let engine = create_test_engine();
        let profile = create_test_profile();
        let input = create_test_input("1000");

        let a = engine.compute_payslip(&profile, &input).unwrap();
        let b = engine.compute_payslip(&profile, &input).unwrap();
        assert_eq!(a.payslip_id, b.payslip_id);

        let mut other_period = input.clone();
        other_period.period_start = NaiveDate::from_ymd_opt(2025, 7, 1).unwrap();
        other_period.period_end = NaiveDate::from_ymd_opt(2025, 7, 31).unwrap();
        let c = engine.compute_payslip(&profile, &other_period).unwrap();
        assert_ne!(a.payslip_id, c.payslip_id);
    }

    /// EN-013: status is always draft
    #[test]
    fn test_status_is_draft() {
        let engine = create_test_engine();
        let payslip = engine
            .compute_payslip(&create_test_profile(), &create_test_input("1000"))
            .unwrap();
        assert_eq!(payslip.status, PayslipStatus::Draft);
    }

    #[test]
    fn test_engine_is_shareable_across_threads() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<PayrollEngine>();
    }

    #[test]
    fn test_identity_fields_echoed() {
        let engine = create_test_engine();
        let payslip = engine
            .compute_payslip(&create_test_profile(), &create_test_input("1000"))
            .unwrap();

        assert_eq!(payslip.employee_id, "emp_001");
        assert_eq!(payslip.employee_name, "Amira Ben Salah");
        assert_eq!(payslip.employee_number, "M-0042");
        assert_eq!(payslip.work_days, 26);
        assert_eq!(payslip.worked_days, 26);
        assert_eq!(
            payslip.rule_effective_date,
            NaiveDate::from_ymd_opt(2025, 1, 1).unwrap()
        );
    }
}
