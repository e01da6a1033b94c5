//! Payslip output models.
//!
//! This module contains the [`Payslip`] type and its associated structures
//! that capture all outputs from a payslip computation, including itemized
//! earning and deduction lines, the tax bracket breakdown, and employer-side
//! contributions.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Lifecycle status of a payslip.
///
/// The engine always emits [`PayslipStatus::Draft`]; finalization belongs to
/// the payroll-run orchestrator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PayslipStatus {
    /// Freshly computed, not yet validated.
    Draft,
    /// Validated and locked.
    Final,
}

/// Category of a deduction line, used for grouping on the rendered payslip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeductionCategory {
    /// Social security contributions.
    Social,
    /// Fiscal deductions (income tax, solidarity contribution).
    Tax,
    /// Advances and ad-hoc deductions.
    Other,
}

/// A single earning line item.
///
/// Insertion order is display order and must be preserved.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EarningLine {
    /// Stable identifier of the line kind (e.g., "base_salary").
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// The amount earned.
    pub amount: Decimal,
    /// Whether the amount feeds the taxable base.
    pub taxable: bool,
}

/// A single deduction line item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeductionLine {
    /// Stable identifier of the line kind (e.g., "cnss_employee").
    pub id: String,
    /// Human-readable label.
    pub label: String,
    /// The amount deducted.
    pub amount: Decimal,
    /// The deduction category.
    pub category: DeductionCategory,
}

/// Overtime pay breakdown by shift category.
///
/// Present on the payslip only when overtime hours were supplied and
/// non-zero; "no overtime" omits the breakdown entirely rather than
/// including a zero one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OvertimeBreakdown {
    /// The derived hourly rate (base salary over standard monthly hours).
    pub hourly_rate: Decimal,
    /// Standard monthly hours the hourly rate was derived from.
    pub regular_monthly_hours: Decimal,
    /// Daytime overtime hours.
    pub day_hours: Decimal,
    /// Pay for daytime overtime.
    pub day_pay: Decimal,
    /// Night overtime hours.
    pub night_hours: Decimal,
    /// Pay for night overtime.
    pub night_pay: Decimal,
    /// Public-holiday overtime hours.
    pub holiday_hours: Decimal,
    /// Pay for public-holiday overtime.
    pub holiday_pay: Decimal,
    /// Total overtime pay across the three categories.
    pub total: Decimal,
}

/// The fiscal allowances that reduce the taxable base.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AllowanceBreakdown {
    /// Professional-expense abatement.
    pub professional_expense: Decimal,
    /// Per-dependent-child allowance.
    pub children: Decimal,
    /// Flat spousal allowance (zero unless married).
    pub spouse: Decimal,
    /// Sum of the three allowances.
    pub total: Decimal,
}

/// The portion of the annual taxable base falling into one tax bracket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BracketLine {
    /// Display label of the bracket (e.g., "5000 - 20000").
    pub label: String,
    /// Annual amount taxed in this bracket.
    pub amount: Decimal,
    /// The bracket's rate.
    pub rate: Decimal,
    /// Annual tax due for this bracket.
    pub tax: Decimal,
}

/// The progressive income tax assessment for one payslip.
///
/// The breakdown lists only brackets actually reached; a non-taxable base
/// produces an empty breakdown and zero tax.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaxAssessment {
    /// The annualized taxable base fed into the bracket walk (clamped at
    /// zero, never negative).
    pub annual_taxable_base: Decimal,
    /// Total annual tax across all reached brackets.
    pub annual_tax: Decimal,
    /// The annual tax converted back to a monthly figure.
    pub monthly_tax: Decimal,
    /// Per-bracket decomposition, ascending.
    pub brackets: Vec<BracketLine>,
}

/// Employer-side contributions on gross salary.
///
/// These are paid by the employer on top of gross pay; they are part of the
/// total employer cost but are never deducted from employee pay.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployerContributions {
    /// Employer social security contribution (CNSS).
    pub cnss: Decimal,
    /// Professional training tax (TFP).
    pub tfp: Decimal,
    /// Housing fund contribution (FOPROLOS).
    pub foprolos: Decimal,
    /// Sum of the employer contributions.
    pub total: Decimal,
}

/// A complete, internally consistent payslip for one employee and one pay
/// period.
///
/// A payslip is immutable data produced by a pure function: re-invoking the
/// engine with identical inputs (including the generation timestamp) yields
/// an identical payslip.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Payslip {
    /// Deterministic identifier derived from the employee and period.
    pub payslip_id: Uuid,
    /// When the payslip was generated.
    pub generated_at: DateTime<Utc>,
    /// Effective date of the regulatory rule version used.
    pub rule_effective_date: NaiveDate,

    /// The employee's identifier.
    pub employee_id: String,
    /// The employee's display name.
    pub employee_name: String,
    /// The employee identification number (matricule).
    pub employee_number: String,

    /// First day of the pay period.
    pub period_start: NaiveDate,
    /// Last day of the pay period.
    pub period_end: NaiveDate,
    /// Number of working days in the period.
    pub work_days: u32,
    /// Number of days actually worked.
    pub worked_days: u32,

    /// Itemized earnings, in display order.
    pub earnings: Vec<EarningLine>,
    /// Itemized deductions, in display order.
    pub deductions: Vec<DeductionLine>,

    /// Overtime breakdown, absent when no overtime was worked.
    pub overtime: Option<OvertimeBreakdown>,
    /// Gross salary: base plus bonuses plus overtime pay.
    pub gross_salary: Decimal,
    /// Employee social security contribution on gross.
    pub employee_social_contribution: Decimal,
    /// Fiscal allowances reducing the taxable base.
    pub allowances: AllowanceBreakdown,
    /// Monthly taxable base: gross minus social contribution minus
    /// allowances.
    pub taxable_base: Decimal,
    /// The progressive income tax assessment.
    pub tax: TaxAssessment,
    /// Flat solidarity contribution on gross.
    pub solidarity_contribution: Decimal,

    /// Sum of every deduction including advances and ad-hoc deductions.
    pub total_deductions: Decimal,
    /// Net pay before advances and ad-hoc deductions are recovered.
    pub net_before_advances: Decimal,
    /// Final net pay.
    pub net_salary: Decimal,

    /// Employer-side contributions on gross.
    pub employer: EmployerContributions,
    /// Gross salary plus all employer contributions.
    pub total_employer_cost: Decimal,

    /// Lifecycle status; always `draft` from the engine.
    pub status: PayslipStatus,
}
