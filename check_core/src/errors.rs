//! # Error Types
//!
//! Structured error types for check_core. Every failure happens while a
//! [`CheckResult`](crate::CheckResult) is being constructed; there is no
//! partially-built record to recover.
//!
//! Errors fall into two classes:
//!
//! - **Invalid domain**: a raw value is outside what the engine accepts
//!   (negative ratio, unknown operator, unpaired provided/required).
//! - **Inconsistency**: two representations of the verdict were supplied
//!   and they disagree.
//!
//! ## Example
//!
//! ```rust
//! use check_core::errors::{CheckError, Result};
//!
//! fn validate_ratio(unity_check: f64) -> Result<()> {
//!     if unity_check < 0.0 {
//!         return Err(CheckError::invalid_input(
//!             "unity_check",
//!             unity_check.to_string(),
//!             "Unity check cannot be negative",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_ratio(-0.5).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for check_core operations
pub type Result<T, E = CheckError> = std::result::Result<T, E>;

/// Structured error type for check-result construction.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CheckError {
    /// A numeric input is outside the accepted domain (negative, NaN, ...)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The comparison operator is not one of `<`, `<=`, `==`, `>=`, `>`, `!=`
    #[error("Unknown comparison operator '{operator}' (expected one of <, <=, ==, >=, >, !=)")]
    UnknownOperator { operator: String },

    /// Only one half of the provided/required pair was given
    #[error("'{present}' was given without '{missing}'; provided and required must be paired")]
    UnpairedValues { present: String, missing: String },

    /// Two supplied representations of the verdict disagree
    #[error("Inconsistent CheckResult: {first} and {second} ({reason})")]
    Inconsistent {
        first: String,
        second: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },
}

impl CheckError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownOperator error
    pub fn unknown_operator(operator: impl Into<String>) -> Self {
        CheckError::UnknownOperator {
            operator: operator.into(),
        }
    }

    /// Create an UnpairedValues error
    pub fn unpaired(present: impl Into<String>, missing: impl Into<String>) -> Self {
        CheckError::UnpairedValues {
            present: present.into(),
            missing: missing.into(),
        }
    }

    /// Create an Inconsistent error naming the two representations that disagree
    pub fn inconsistent(first: impl Into<String>, second: impl Into<String>, reason: impl Into<String>) -> Self {
        CheckError::Inconsistent {
            first: first.into(),
            second: second.into(),
            reason: reason.into(),
        }
    }

    /// True for errors raised because two supplied representations disagree
    pub fn is_inconsistency(&self) -> bool {
        matches!(self, CheckError::Inconsistent { .. })
    }

    /// True for errors raised while normalizing raw input
    pub fn is_invalid_domain(&self) -> bool {
        matches!(
            self,
            CheckError::InvalidInput { .. } | CheckError::UnknownOperator { .. } | CheckError::UnpairedValues { .. }
        )
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CheckError::InvalidInput { .. } => "INVALID_INPUT",
            CheckError::UnknownOperator { .. } => "UNKNOWN_OPERATOR",
            CheckError::UnpairedValues { .. } => "UNPAIRED_VALUES",
            CheckError::Inconsistent { .. } => "INCONSISTENT",
            CheckError::SerializationError { .. } => "SERIALIZATION_ERROR",
        }
    }
}

impl From<serde_json::Error> for CheckError {
    fn from(err: serde_json::Error) -> Self {
        CheckError::SerializationError {
            reason: err.to_string(),
        }
    }
}
