//! Error types for the Payroll Calculation Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur during payslip computation.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the Payroll Calculation Engine.
///
/// All operations in the engine return this error type, making it easy
/// to handle errors consistently throughout the application.
///
/// # Example
///
/// ```
/// use payroll_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/file.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/file.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// The regulatory constants were malformed (rate out of range,
    /// non-contiguous or empty bracket table, non-increasing rates).
    #[error("Invalid regulatory configuration: {message}")]
    InvalidConfiguration {
        /// A description of the configuration violation.
        message: String,
    },

    /// No rule version was effective on the requested date.
    #[error("No regulatory rule version effective on {date}")]
    RuleVersionNotFound {
        /// The date for which a rule version was requested.
        date: NaiveDate,
    },

    /// A pay period input or employee field was missing, negative, or
    /// inconsistent. Detected once at the entry boundary of the engine.
    #[error("Invalid input field '{field}': {message}")]
    InvalidInput {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
