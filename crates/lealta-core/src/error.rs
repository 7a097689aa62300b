//! # Error Types
//!
//! Validation error types for lealta-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  lealta-core errors (this file)                                         │
//! │  └── ValidationError  - Operator input that must block submission       │
//! │                                                                         │
//! │  lealta-api errors (separate crate)                                     │
//! │  └── ApiError         - Transport and decode failures                   │
//! │                                                                         │
//! │  lealta-flows errors (separate crate)                                   │
//! │  └── FlowError        - What the portal sees (validation, rejection,    │
//! │                         transport), always recoverable                  │
//! │                                                                         │
//! │  Flow: ValidationError → FlowError → portal message                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (field, bounds)
//! 3. Errors are enum variants, never String
//! 4. Each variant maps to a blocking, locally recoverable message

use thiserror::Error;

/// Input validation errors.
///
/// These occur when operator input doesn't meet requirements. They are
/// always recovered locally: the portal disables submission, shows the
/// message, and the operator corrects the input.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Value must be positive.
    #[error("{field} must be positive")]
    MustBePositive { field: String },

    /// Invalid format (e.g. forbidden characters in a ticket id).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

/// Convenience type alias for Results with ValidationError.
pub type ValidationResult<T> = Result<T, ValidationError>;
