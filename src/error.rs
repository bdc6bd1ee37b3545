//! Custom error types for the weekly tracker
//!
//! This module defines the error hierarchy for the tracker using thiserror
//! for ergonomic error definitions.

use thiserror::Error;

use crate::models::category::CategoryValidationError;

/// The main error type for tracker operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TrackerError {
    /// A budget that is not a positive, finite number
    #[error("Invalid budget for '{category}': {value} (must be a positive number)")]
    InvalidBudget { category: String, value: f64 },

    /// An expense amount that is not a finite number
    #[error("Invalid amount for '{category}': {value}")]
    InvalidAmount { category: String, value: f64 },

    /// Validation errors for category names
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// Malformed batch steps
    #[error("Script error: {0}")]
    Script(String),
}

impl TrackerError {
    /// Create an "invalid budget" error
    pub fn invalid_budget(category: impl Into<String>, value: f64) -> Self {
        Self::InvalidBudget {
            category: category.into(),
            value,
        }
    }

    /// Create an "invalid amount" error
    pub fn invalid_amount(category: impl Into<String>, value: f64) -> Self {
        Self::InvalidAmount {
            category: category.into(),
            value,
        }
    }

    /// Check if this error came from rejected user input
    ///
    /// Input errors are meant to be shown to the user for re-entry; they never
    /// leave the tracker partially modified.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidBudget { .. } | Self::InvalidAmount { .. } | Self::Validation(_)
        )
    }
}

impl From<CategoryValidationError> for TrackerError {
    fn from(err: CategoryValidationError) -> Self {
        Self::Validation(err.to_string())
    }
}

impl From<std::io::Error> for TrackerError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

impl From<serde_json::Error> for TrackerError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err.to_string())
    }
}

/// Result type alias for tracker operations
pub type TrackerResult<T> = Result<T, TrackerError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = TrackerError::invalid_budget("Food", -5.0);
        assert_eq!(
            err.to_string(),
            "Invalid budget for 'Food': -5 (must be a positive number)"
        );

        let err = TrackerError::Validation("Category name cannot be empty".into());
        assert_eq!(
            err.to_string(),
            "Validation error: Category name cannot be empty"
        );
    }

    #[test]
    fn test_input_errors() {
        assert!(TrackerError::invalid_budget("Food", 0.0).is_input_error());
        assert!(TrackerError::invalid_amount("Food", f64::NAN).is_input_error());
        assert!(!TrackerError::Config("bad".into()).is_input_error());
        assert!(!TrackerError::Io("disk".into()).is_input_error());
        assert!(!TrackerError::Script("unknown step".into()).is_input_error());
    }

    #[test]
    fn test_from_validation_error() {
        let err: TrackerError = CategoryValidationError::EmptyName.into();
        assert!(matches!(err, TrackerError::Validation(_)));
    }
}
