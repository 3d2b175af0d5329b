//! Domain errors - error types for the domain layer

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    // =========================================================================
    // Not Found Errors
    // =========================================================================
    #[error("Report not found: {0}")]
    ReportNotFound(i64),

    #[error("Ban not found: {0}")]
    BanNotFound(i64),

    // =========================================================================
    // Validation Errors
    // =========================================================================
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Invalid date format: expected {expected}")]
    InvalidDateFormat { expected: &'static str },

    // =========================================================================
    // Infrastructure Errors (wrapped)
    // =========================================================================
    #[error("Database error: {0}")]
    DatabaseError(String),
}

impl DomainError {
    /// Check if this error is a "not found" error
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ReportNotFound(_) | Self::BanNotFound(_))
    }

    /// Check if this error is a validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Self::ValidationError(_) | Self::InvalidDateFormat { .. }
        )
    }

    /// Get a stable error code for API responses
    pub fn code(&self) -> &'static str {
        match self {
            Self::ReportNotFound(_) => "REPORT_NOT_FOUND",
            Self::BanNotFound(_) => "BAN_NOT_FOUND",
            Self::ValidationError(_) => "VALIDATION_ERROR",
            Self::InvalidDateFormat { .. } => "INVALID_DATE_FORMAT",
            Self::DatabaseError(_) => "DATABASE_ERROR",
        }
    }
}
