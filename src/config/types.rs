//! Configuration types for payslip computation.
//!
//! This module contains the strongly-typed configuration structures that
//! are deserialized from YAML configuration files. A [`RegulatoryConstants`]
//! value is one versioned, immutable rule set; [`PayrollConfig`] holds the
//! collection of rule versions for a country ruleset.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Deserialize;

use crate::error::{EngineError, EngineResult};

/// Metadata about the regulatory ruleset.
///
/// Identifies the country rule set the constants were transcribed from,
/// independent of any particular rule version.
#[derive(Debug, Clone, Deserialize)]
pub struct RulesetMetadata {
    /// ISO country code the rules apply to (e.g., "TN").
    pub country: String,
    /// The human-readable name of the ruleset.
    pub name: String,
    /// The version label of the ruleset.
    pub version: String,
    /// ISO currency code for all amounts (e.g., "TND").
    pub currency: String,
}

/// Flat contribution rates, each a proportion of gross salary.
#[derive(Debug, Clone, Deserialize)]
pub struct ContributionRates {
    /// Employee-paid social security (CNSS) rate.
    pub cnss_employee: Decimal,
    /// Employer-paid social security (CNSS) rate.
    pub cnss_employer: Decimal,
    /// Solidarity contribution (CSS) rate, deducted from employee pay.
    pub css: Decimal,
    /// Professional training tax (TFP) rate, employer-only.
    pub tfp: Decimal,
    /// Housing fund (FOPROLOS) rate, employer-only.
    pub foprolos: Decimal,
}

/// Fiscal allowance parameters reducing the taxable base.
#[derive(Debug, Clone, Deserialize)]
pub struct AllowanceRates {
    /// Professional-expense abatement rate, applied to gross minus the
    /// employee social contribution.
    pub professional_expense_rate: Decimal,
    /// Flat monthly allowance per dependent child.
    pub per_child_monthly: Decimal,
    /// Flat monthly allowance granted only to married employees.
    pub spouse_monthly: Decimal,
}

/// Overtime pay multipliers by shift category.
#[derive(Debug, Clone, Deserialize)]
pub struct OvertimeMultipliers {
    /// Multiplier for daytime overtime hours.
    pub day: Decimal,
    /// Multiplier for night overtime hours.
    pub night: Decimal,
    /// Multiplier for public-holiday overtime hours.
    pub holiday: Decimal,
}

/// Standard working-time assumptions used to derive hourly rates.
#[derive(Debug, Clone, Deserialize)]
pub struct WorkingTime {
    /// Standard hours in a working day.
    pub daily_hours: Decimal,
    /// Standard hours in a working week.
    pub weekly_hours: Decimal,
    /// Standard number of working days in a month.
    pub monthly_working_days: Decimal,
}

/// A single bracket of the progressive annual income tax scale.
///
/// `upper` is `None` for the open-ended top bracket; representing the
/// unbounded bound explicitly avoids magic numeric sentinels when computing
/// bracket widths.
///
/// # Example
///
/// ```
/// use payroll_engine::config::TaxBracket;
/// use rust_decimal::Decimal;
///
/// let top = TaxBracket {
///     lower: Decimal::from(50_000),
///     upper: None,
///     rate: Decimal::new(35, 2),
/// };
/// assert_eq!(top.label(), "50000+");
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TaxBracket {
    /// Inclusive lower bound of annual taxable income for this bracket.
    pub lower: Decimal,
    /// Exclusive upper bound, or `None` for the unbounded top bracket.
    #[serde(default)]
    pub upper: Option<Decimal>,
    /// Tax rate applied to the income falling inside this bracket.
    pub rate: Decimal,
}

impl TaxBracket {
    /// Returns a display label for this bracket (e.g., "5000 - 20000" or
    /// "50000+").
    pub fn label(&self) -> String {
        match self.upper {
            Some(upper) => format!("{} - {}", self.lower.normalize(), upper.normalize()),
            None => format!("{}+", self.lower.normalize()),
        }
    }

    /// Returns the width of the bracket, or `None` when unbounded.
    pub fn width(&self) -> Option<Decimal> {
        self.upper.map(|upper| upper - self.lower)
    }
}

/// One immutable, versioned table of regulatory rates and thresholds.
///
/// A `RegulatoryConstants` value is pure data: the engine reads it and never
/// mutates it, so a single instance can be shared read-only across all
/// concurrent payslip computations of a payroll run.
#[derive(Debug, Clone, Deserialize)]
pub struct RegulatoryConstants {
    /// The date from which this rule version applies.
    pub effective_date: NaiveDate,
    /// Flat contribution rates.
    pub contributions: ContributionRates,
    /// Fiscal allowance parameters.
    pub allowances: AllowanceRates,
    /// Overtime multipliers by category.
    pub overtime: OvertimeMultipliers,
    /// Standard working-time assumptions.
    pub working_time: WorkingTime,
    /// The progressive tax bracket table, ascending.
    pub brackets: Vec<TaxBracket>,
}

fn check_rate(name: &str, rate: Decimal) -> EngineResult<()> {
    if rate < Decimal::ZERO || rate > Decimal::ONE {
        return Err(EngineError::InvalidConfiguration {
            message: format!("rate '{}' must be within [0, 1], got {}", name, rate),
        });
    }
    Ok(())
}

fn check_multiplier(name: &str, multiplier: Decimal) -> EngineResult<()> {
    if multiplier <= Decimal::ONE {
        return Err(EngineError::InvalidConfiguration {
            message: format!(
                "overtime multiplier '{}' must be greater than 1, got {}",
                name, multiplier
            ),
        });
    }
    Ok(())
}

fn check_positive(name: &str, value: Decimal) -> EngineResult<()> {
    if value <= Decimal::ZERO {
        return Err(EngineError::InvalidConfiguration {
            message: format!("'{}' must be positive, got {}", name, value),
        });
    }
    Ok(())
}

fn check_non_negative(name: &str, value: Decimal) -> EngineResult<()> {
    if value < Decimal::ZERO {
        return Err(EngineError::InvalidConfiguration {
            message: format!("'{}' must not be negative, got {}", name, value),
        });
    }
    Ok(())
}

impl RegulatoryConstants {
    /// Validates every invariant of the rule set.
    ///
    /// Checks that all rates are within `[0, 1]`, overtime multipliers are
    /// greater than 1, working-time figures are positive, and the bracket
    /// table is non-empty, starts at zero, is contiguous and non-overlapping,
    /// has strictly increasing rates, and leaves only the final bracket
    /// unbounded.
    ///
    /// Violations are configuration errors, detected here once at load or
    /// injection time rather than per payslip.
    pub fn validate(&self) -> EngineResult<()> {
        check_rate("cnss_employee", self.contributions.cnss_employee)?;
        check_rate("cnss_employer", self.contributions.cnss_employer)?;
        check_rate("css", self.contributions.css)?;
        check_rate("tfp", self.contributions.tfp)?;
        check_rate("foprolos", self.contributions.foprolos)?;
        check_rate(
            "professional_expense_rate",
            self.allowances.professional_expense_rate,
        )?;
        check_non_negative("per_child_monthly", self.allowances.per_child_monthly)?;
        check_non_negative("spouse_monthly", self.allowances.spouse_monthly)?;

        check_multiplier("day", self.overtime.day)?;
        check_multiplier("night", self.overtime.night)?;
        check_multiplier("holiday", self.overtime.holiday)?;

        check_positive("daily_hours", self.working_time.daily_hours)?;
        check_positive("weekly_hours", self.working_time.weekly_hours)?;
        check_positive(
            "monthly_working_days",
            self.working_time.monthly_working_days,
        )?;

        self.validate_brackets()
    }

    fn validate_brackets(&self) -> EngineResult<()> {
        let Some(first) = self.brackets.first() else {
            return Err(EngineError::InvalidConfiguration {
                message: "bracket table is empty".to_string(),
            });
        };

        if first.lower != Decimal::ZERO {
            return Err(EngineError::InvalidConfiguration {
                message: format!(
                    "first bracket must start at 0, got {}",
                    first.lower.normalize()
                ),
            });
        }

        for (i, pair) in self.brackets.windows(2).enumerate() {
            let (current, next) = (&pair[0], &pair[1]);

            let Some(upper) = current.upper else {
                return Err(EngineError::InvalidConfiguration {
                    message: format!("bracket '{}' is unbounded but not last", current.label()),
                });
            };
            if upper <= current.lower {
                return Err(EngineError::InvalidConfiguration {
                    message: format!("bracket '{}' has non-positive width", current.label()),
                });
            }
            if next.lower != upper {
                return Err(EngineError::InvalidConfiguration {
                    message: format!(
                        "brackets {} and {} are not contiguous: {} != {}",
                        i,
                        i + 1,
                        upper.normalize(),
                        next.lower.normalize()
                    ),
                });
            }
            if next.rate <= current.rate {
                return Err(EngineError::InvalidConfiguration {
                    message: format!(
                        "bracket rates must be strictly increasing: {} then {}",
                        current.rate, next.rate
                    ),
                });
            }
        }

        for bracket in &self.brackets {
            check_rate(&format!("bracket '{}'", bracket.label()), bracket.rate)?;
        }

        if let Some(last) = self.brackets.last() {
            if let Some(upper) = last.upper {
                if upper <= last.lower {
                    return Err(EngineError::InvalidConfiguration {
                        message: format!("bracket '{}' has non-positive width", last.label()),
                    });
                }
            }
        }

        Ok(())
    }
}

/// The complete payroll configuration: ruleset metadata plus every loaded
/// rule version, sorted by effective date (oldest first).
#[derive(Debug, Clone)]
pub struct PayrollConfig {
    metadata: RulesetMetadata,
    versions: Vec<RegulatoryConstants>,
}

impl PayrollConfig {
    /// Creates a new `PayrollConfig`, validating every rule version.
    ///
    /// Returns `InvalidConfiguration` if any version fails validation or no
    /// versions were supplied.
    pub fn new(
        metadata: RulesetMetadata,
        versions: Vec<RegulatoryConstants>,
    ) -> EngineResult<Self> {
        if versions.is_empty() {
            return Err(EngineError::InvalidConfiguration {
                message: "no regulatory rule versions supplied".to_string(),
            });
        }
        for version in &versions {
            version.validate()?;
        }
        let mut sorted = versions;
        sorted.sort_by(|a, b| a.effective_date.cmp(&b.effective_date));
        Ok(Self {
            metadata,
            versions: sorted,
        })
    }

    /// Returns the ruleset metadata.
    pub fn metadata(&self) -> &RulesetMetadata {
        &self.metadata
    }

    /// Returns all rule versions, oldest first.
    pub fn versions(&self) -> &[RegulatoryConstants] {
        &self.versions
    }

    /// Returns the most recent rule version effective on or before `date`.
    ///
    /// This is how historical payroll recomputation selects the rule version
    /// that was in force for a past pay period.
    pub fn constants_for(&self, date: NaiveDate) -> EngineResult<&RegulatoryConstants> {
        self.versions
            .iter()
            .rfind(|v| v.effective_date <= date)
            .ok_or(EngineError::RuleVersionNotFound { date })
    }

    /// Returns the most recent rule version.
    pub fn latest(&self) -> &RegulatoryConstants {
        // new() rejects empty version lists
        self.versions.last().expect("versions is non-empty")
    }
}
