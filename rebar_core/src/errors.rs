//! # Error Types
//!
//! Structured error types for rebar_core. These errors describe inputs the
//! engine refuses to work with. Engineering non-conformance (a slab that is
//! too thin, a spacing over the code cap) is *not* an error in this sense:
//! it is reported as data in [`crate::validation::ValidationResult`] and in
//! the warning lists carried by every design record.
//!
//! ## Example
//!
//! ```rust
//! use rebar_core::errors::{CalcError, CalcResult};
//!
//! fn validate_thickness(thickness_mm: f64) -> CalcResult<()> {
//!     if thickness_mm <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "thickness_mm".to_string(),
//!             value: thickness_mm.to_string(),
//!             reason: "Thickness must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for rebar_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for design operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (out of range, inconsistent, etc.)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Concrete or steel grade string not recognised
    #[error("Unknown grade: {grade}")]
    UnknownGrade { grade: String },

    /// Calculation could not produce a result
    #[error("Calculation failed: {calculation_type} - {reason}")]
    CalculationFailed {
        calculation_type: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Generic internal error (should be rare)
    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create an UnknownGrade error
    pub fn unknown_grade(grade: impl Into<String>) -> Self {
        CalcError::UnknownGrade {
            grade: grade.into(),
        }
    }

    /// Create a CalculationFailed error
    pub fn calculation_failed(
        calculation_type: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::CalculationFailed {
            calculation_type: calculation_type.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::UnknownGrade { .. } => "UNKNOWN_GRADE",
            CalcError::CalculationFailed { .. } => "CALCULATION_FAILED",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::Internal { .. } => "INTERNAL_ERROR",
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

/// Reject a dimension or load that must be strictly positive.
pub(crate) fn require_positive(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Must be a positive number"));
    }
    Ok(())
}

/// Reject a load that may be zero but not negative.
pub(crate) fn require_non_negative(field: &str, value: f64) -> CalcResult<()> {
    if !value.is_finite() || value < 0.0 {
        return Err(CalcError::invalid_input(field, value.to_string(), "Cannot be negative"));
    }
    Ok(())
}
