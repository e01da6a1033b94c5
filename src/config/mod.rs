//! Regulatory configuration for payslip computation.
//!
//! Rates, thresholds, and the progressive tax bracket table are never
//! hard-coded inside the engine; they are loaded from versioned YAML files
//! and injected as immutable [`RegulatoryConstants`].
//!
//! This module is split into:
//! - [`types`]: strongly-typed configuration structures
//! - [`loader`]: loading configuration from YAML files

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AllowanceRates, ContributionRates, OvertimeMultipliers, PayrollConfig, RegulatoryConstants,
    RulesetMetadata, TaxBracket, WorkingTime,
};
