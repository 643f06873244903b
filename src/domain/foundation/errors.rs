//! Error types for the domain layer.

use std::collections::HashMap;
use std::error::Error;
use std::fmt;
use thiserror::Error;

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("Field '{field}' cannot be empty")]
    EmptyField { field: String },

    #[error("Field '{field}' must be between {min} and {max}, got {actual}")]
    OutOfRange {
        field: String,
        min: i32,
        max: i32,
        actual: i32,
    },

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },

    #[error("Field '{field}' already contains '{value}'")]
    Duplicate { field: String, value: String },

    #[error("Field '{field}' allows at most {max} entries")]
    LimitExceeded { field: String, max: usize },
}

impl ValidationError {
    /// Creates an empty field validation error.
    pub fn empty_field(field: impl Into<String>) -> Self {
        ValidationError::EmptyField { field: field.into() }
    }

    /// Creates an out of range validation error.
    pub fn out_of_range(field: impl Into<String>, min: i32, max: i32, actual: i32) -> Self {
        ValidationError::OutOfRange {
            field: field.into(),
            min,
            max,
            actual,
        }
    }

    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Creates a duplicate entry validation error.
    pub fn duplicate(field: impl Into<String>, value: impl Into<String>) -> Self {
        ValidationError::Duplicate {
            field: field.into(),
            value: value.into(),
        }
    }

    /// Creates a limit exceeded validation error.
    pub fn limit_exceeded(field: impl Into<String>, max: usize) -> Self {
        ValidationError::LimitExceeded {
            field: field.into(),
            max,
        }
    }

    /// Returns the name of the offending field.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::EmptyField { field }
            | ValidationError::OutOfRange { field, .. }
            | ValidationError::InvalidFormat { field, .. }
            | ValidationError::Duplicate { field, .. }
            | ValidationError::LimitExceeded { field, .. } => field,
        }
    }
}

/// Error codes organized by category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Validation errors
    ValidationFailed,

    // Not found errors
    CriterionNotFound,
    AlternativeNotFound,

    // State errors
    InvalidStateTransition,
    InconsistentJudgments,

    // Infrastructure errors
    DecisionLoadFailed,
    SerializationFailed,
    InternalError,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::ValidationFailed => "VALIDATION_FAILED",
            ErrorCode::CriterionNotFound => "CRITERION_NOT_FOUND",
            ErrorCode::AlternativeNotFound => "ALTERNATIVE_NOT_FOUND",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
            ErrorCode::InconsistentJudgments => "INCONSISTENT_JUDGMENTS",
            ErrorCode::DecisionLoadFailed => "DECISION_LOAD_FAILED",
            ErrorCode::SerializationFailed => "SERIALIZATION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        };
        write!(f, "{}", s)
    }
}

/// Standard domain error with code, message, and optional details.
#[derive(Debug, Clone)]
pub struct DomainError {
    pub code: ErrorCode,
    pub message: String,
    pub details: HashMap<String, String>,
}

impl DomainError {
    /// Creates a new domain error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: HashMap::new(),
        }
    }

    /// Creates a validation error for a specific field.
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: ErrorCode::ValidationFailed,
            message: message.into(),
            details: HashMap::new(),
        }
        .with_detail("field", field.into())
    }

    /// Adds a detail to the error.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.details.insert(key.into(), value.into());
        self
    }
}

impl fmt::Display for DomainError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] {}", self.code, self.message)
    }
}

impl Error for DomainError {}

impl From<ValidationError> for DomainError {
    fn from(err: ValidationError) -> Self {
        let field = err.field().to_string();
        DomainError::validation(field, err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_error_empty_field_displays_correctly() {
        let err = ValidationError::empty_field("goal.title");
        assert_eq!(format!("{}", err), "Field 'goal.title' cannot be empty");
    }

    #[test]
    fn validation_error_out_of_range_displays_correctly() {
        let err = ValidationError::out_of_range("percentage", 0, 1000, 1500);
        assert_eq!(
            format!("{}", err),
            "Field 'percentage' must be between 0 and 1000, got 1500"
        );
    }

    #[test]
    fn validation_error_invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("judgment", "must be positive");
        assert_eq!(
            format!("{}", err),
            "Field 'judgment' has invalid format: must be positive"
        );
    }

    #[test]
    fn validation_error_duplicate_displays_correctly() {
        let err = ValidationError::duplicate("criteria", "Cost");
        assert_eq!(format!("{}", err), "Field 'criteria' already contains 'Cost'");
    }

    #[test]
    fn validation_error_limit_exceeded_displays_correctly() {
        let err = ValidationError::limit_exceeded("alternatives", 5);
        assert_eq!(
            format!("{}", err),
            "Field 'alternatives' allows at most 5 entries"
        );
    }

    #[test]
    fn domain_error_displays_code_and_message() {
        let err = DomainError::new(ErrorCode::CriterionNotFound, "Criterion not found");
        assert_eq!(format!("{}", err), "[CRITERION_NOT_FOUND] Criterion not found");
    }

    #[test]
    fn domain_error_with_detail_adds_detail() {
        let err = DomainError::new(ErrorCode::InconsistentJudgments, "CR too high")
            .with_detail("step", "CriteriaComparison")
            .with_detail("consistency_ratio", "0.25");

        assert_eq!(err.details.get("step"), Some(&"CriteriaComparison".to_string()));
        assert_eq!(err.details.get("consistency_ratio"), Some(&"0.25".to_string()));
    }

    #[test]
    fn domain_error_from_validation_keeps_field() {
        let err: DomainError = ValidationError::limit_exceeded("criteria", 7).into();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        assert_eq!(err.details.get("field"), Some(&"criteria".to_string()));
        assert!(err.message.contains("at most 7"));
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::AlternativeNotFound), "ALTERNATIVE_NOT_FOUND");
        assert_eq!(format!("{}", ErrorCode::InternalError), "INTERNAL_ERROR");
    }
}
