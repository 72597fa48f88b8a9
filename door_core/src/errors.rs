//! # Error Types
//!
//! Structured error types for door_core. Validation failures carry the
//! offending field or descriptor so a caller can fix its order data
//! programmatically; anything unexpected is reported as an internal error
//! rather than swallowed.
//!
//! ## Example
//!
//! ```rust
//! use door_core::errors::{DoorError, DoorResult};
//!
//! fn validate_height(raw: &str) -> DoorResult<i64> {
//!     raw.parse().map_err(|_| DoorError::invalid_input(
//!         "vertical.oa_frame",
//!         raw,
//!         "expected a whole number of millimeters",
//!     ))
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for door_core operations
pub type DoorResult<T> = Result<T, DoorError>;

/// Structured error type for the dimension calculation.
///
/// Every variant except [`DoorError::Internal`] is a client fault: the order
/// data itself is malformed and the caller should be told which part.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum DoorError {
    /// An input value is invalid (non-numeric, wrong JSON type, bad shape)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing from the order
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// A leaf descriptor whose leading token is not a width in millimeters
    #[error("Invalid leaf format: {descriptor}")]
    MalformedLeaf { descriptor: String },

    /// Unclassified computation fault (should be rare)
    #[error("Calculation error: {message}")]
    Internal { message: String },
}

impl DoorError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        DoorError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        DoorError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MalformedLeaf error echoing the offending descriptor
    pub fn malformed_leaf(descriptor: impl Into<String>) -> Self {
        DoorError::MalformedLeaf {
            descriptor: descriptor.into(),
        }
    }

    /// Create an Internal error
    pub fn internal(message: impl Into<String>) -> Self {
        DoorError::Internal {
            message: message.into(),
        }
    }

    /// True when the caller's order data caused the failure.
    ///
    /// Hosting layers map client faults to a 4xx response class and
    /// everything else to 5xx.
    pub fn is_client_fault(&self) -> bool {
        !matches!(self, DoorError::Internal { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            DoorError::InvalidInput { .. } => "INVALID_INPUT",
            DoorError::MissingField { .. } => "MISSING_FIELD",
            DoorError::MalformedLeaf { .. } => "MALFORMED_LEAF",
            DoorError::Internal { .. } => "INTERNAL_ERROR",
        }
    }
}
