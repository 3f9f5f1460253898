//! Error types for the Leave Accrual Engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate.
//! A missing hire date and an unrecognized leave calculation standard are
//! deliberately absent: both resolve to fallbacks rather than failures.

use thiserror::Error;

/// The main error type for the Leave Accrual Engine.
///
/// # Example
///
/// ```
/// use leave_accrual::error::EngineError;
///
/// let error = EngineError::InvalidDate {
///     value: "2024-13-01".to_string(),
///     message: "input is out of range".to_string(),
/// };
/// assert_eq!(
///     error.to_string(),
///     "Invalid date '2024-13-01': input is out of range"
/// );
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// An input string could not be parsed as a calendar date.
    #[error("Invalid date '{value}': {message}")]
    InvalidDate {
        /// The raw input that failed to parse.
        value: String,
        /// A description of the parse failure.
        message: String,
    },

    /// A leave request whose dates do not fit its leave type.
    #[error("Invalid leave request '{id}': {message}")]
    InvalidLeaveRequest {
        /// The identifier of the offending request.
        id: String,
        /// What is inconsistent about the request.
        message: String,
    },

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

    /// Configuration parsed but holds a value the engine cannot use.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The offending field.
        field: String,
        /// Why the value was rejected.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;
