//! Unified error type for the domain layer
//!
//! Provides a common error type for all domain operations, enabling
//! consistent error handling without forcing callers to use String.

use thiserror::Error;

/// Unified error type for domain operations
#[derive(Debug, Error, Clone)]
pub enum DomainError {
    /// Validation failed (e.g., invalid field values)
    #[error("Validation failed: {0}")]
    Validation(String),

    /// An ability score outside the point-buy range was presented
    #[error("Ability score {score} is out of range (8..=15)")]
    ScoreOutOfRange { score: i32 },
}

impl DomainError {
    /// Creates a validation error for business rule violations.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an out-of-range score error.
    pub fn score_out_of_range(score: i32) -> Self {
        Self::ScoreOutOfRange { score }
    }
}
