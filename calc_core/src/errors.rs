//! # Error Types
//!
//! Structured error types for calc_core. Every failure in this crate is a
//! local, user-correctable input state: either text that does not parse to a
//! finite number, or a finite number outside its allowed domain. Neither is
//! ever turned into a partial result.
//!
//! ## Example
//!
//! ```rust
//! use calc_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(thickness: f64) -> CalcResult<()> {
//!     if !(thickness > 0.0) {
//!         return Err(CalcError::invalid_input(
//!             "thickness",
//!             thickness.to_string(),
//!             "Thickness must be greater than zero",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(0.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for calc_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// Text did not yield a finite number
    #[error("Could not read a number for '{field}' from {text:?}")]
    ParseFailure { field: String, text: String },

    /// A finite value is outside its allowed range
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// Unit tag not present in any conversion table
    #[error("Unknown unit: {unit}")]
    UnknownUnit { unit: String },

    /// Calculator identifier not present in the catalog
    #[error("Unknown calculator: {id}")]
    UnknownCalculator { id: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// File I/O error (settings and input documents only)
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },
}

impl CalcError {
    /// Create a ParseFailure error
    pub fn parse_failure(field: impl Into<String>, text: impl Into<String>) -> Self {
        CalcError::ParseFailure {
            field: field.into(),
            text: text.into(),
        }
    }

    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownUnit error
    pub fn unknown_unit(unit: impl Into<String>) -> Self {
        CalcError::UnknownUnit { unit: unit.into() }
    }

    /// Create an UnknownCalculator error
    pub fn unknown_calculator(id: impl Into<String>) -> Self {
        CalcError::UnknownCalculator { id: id.into() }
    }

    /// Create a FileError
    pub fn file_error(operation: impl Into<String>, path: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// True for errors the user fixes by editing a field
    pub fn is_input_error(&self) -> bool {
        matches!(self, CalcError::ParseFailure { .. } | CalcError::InvalidInput { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::ParseFailure { .. } => "PARSE_FAILURE",
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::UnknownUnit { .. } => "UNKNOWN_UNIT",
            CalcError::UnknownCalculator { .. } => "UNKNOWN_CALCULATOR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::FileError { .. } => "FILE_ERROR",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
