//! Error types for the roster engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for every error condition that can occur while generating or summarizing
//! a roster.

use thiserror::Error;

/// The main error type for the roster engine.
///
/// All fallible operations in the crate return this error type.
///
/// # Example
///
/// ```
/// use roster_stats::error::RosterError;
///
/// let error = RosterError::InvalidArgument {
///     field: "count".to_string(),
///     message: "must not be negative".to_string(),
/// };
/// assert_eq!(error.to_string(), "Invalid argument 'count': must not be negative");
/// ```
#[derive(Debug, Error)]
pub enum RosterError {
    /// A caller-supplied argument violated a precondition.
    #[error("Invalid argument '{field}': {message}")]
    InvalidArgument {
        /// The argument that was invalid.
        field: String,
        /// A description of the violated precondition.
        message: String,
    },

    /// Statistics were requested over a roster with no employees.
    #[error("Cannot summarize an empty roster")]
    EmptyInput,

    /// An employee record contained a value the engine never produces.
    #[error("Data integrity violation at employee {index}: {message}")]
    DataIntegrity {
        /// Position of the offending employee in the input.
        index: usize,
        /// A description of the violation.
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

    /// A request body could not be decoded.
    #[error("Malformed request: {message}")]
    MalformedRequest {
        /// A description of the decoding failure.
        message: String,
    },

    /// A general calculation error occurred.
    #[error("Calculation error: {message}")]
    CalculationError {
        /// A description of the calculation error.
        message: String,
    },
}

impl RosterError {
    /// Shorthand for building an [`RosterError::InvalidArgument`].
    pub(crate) fn invalid(field: &str, message: impl Into<String>) -> Self {
        RosterError::InvalidArgument {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return RosterError.
pub type RosterResult<T> = Result<T, RosterError>;
