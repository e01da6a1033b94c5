//! Progressive income tax calculation.
//!
//! This module walks the annual tax bracket table in ascending order,
//! taxing the slice of the annualized base that falls inside each bracket,
//! and converts the annual total back to a monthly figure. Intermediate
//! amounts are never rounded; rounding is a presentation concern.

use rust_decimal::Decimal;
use tracing::warn;

use crate::config::TaxBracket;
use crate::models::{BracketLine, TaxAssessment};

const MONTHS_PER_YEAR: Decimal = Decimal::from_parts(12, 0, 0, false, 0);

/// Computes the progressive income tax for a monthly taxable base.
///
/// The base is annualized (×12) and consumed bracket by bracket in ascending
/// order: each bracket taxes `min(remaining, width)` at its rate, the
/// unbounded top bracket absorbs whatever remains, and the walk stops once
/// nothing is left. A base falling exactly on a bracket boundary belongs to
/// the lower bracket. The breakdown records only brackets actually reached.
///
/// A non-positive taxable base is non-taxable: it produces an empty
/// breakdown and zero tax. Negative bases are clamped to zero (allowances
/// can exceed gross minus social on low salaries with many dependents) and
/// logged, rather than fed into the bracket walk.
///
/// The caller is responsible for supplying a validated bracket table; see
/// [`RegulatoryConstants::validate`](crate::config::RegulatoryConstants::validate).
pub fn calculate_progressive_tax(
    monthly_taxable_base: Decimal,
    brackets: &[TaxBracket],
) -> TaxAssessment {
    let monthly_base = if monthly_taxable_base < Decimal::ZERO {
        warn!(
            taxable_base = %monthly_taxable_base,
            "negative taxable base clamped to zero"
        );
        Decimal::ZERO
    } else {
        monthly_taxable_base
    };

    let annual_base = monthly_base * MONTHS_PER_YEAR;

    if annual_base <= Decimal::ZERO {
        return TaxAssessment {
            annual_taxable_base: annual_base,
            annual_tax: Decimal::ZERO,
            monthly_tax: Decimal::ZERO,
            brackets: Vec::new(),
        };
    }

    let mut remaining = annual_base;
    let mut annual_tax = Decimal::ZERO;
    let mut breakdown = Vec::new();

    for bracket in brackets {
        if remaining <= Decimal::ZERO {
            break;
        }

        // The unbounded top bracket absorbs everything left.
        let amount = match bracket.width() {
            Some(width) => remaining.min(width),
            None => remaining,
        };

        if amount > Decimal::ZERO {
            let tax = amount * bracket.rate;
            breakdown.push(BracketLine {
                label: bracket.label(),
                amount,
                rate: bracket.rate,
                tax,
            });
            annual_tax += tax;
        }

        remaining -= amount;
    }

    TaxAssessment {
        annual_taxable_base: annual_base,
        annual_tax,
        monthly_tax: annual_tax / MONTHS_PER_YEAR,
        brackets: breakdown,
    }
}
