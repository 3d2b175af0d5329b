//! Error handling utilities for repositories

use garnet_core::DomainError;
use sqlx::Error as SqlxError;

/// Convert SQLx error to DomainError
pub fn map_db_error(e: SqlxError) -> DomainError {
    DomainError::DatabaseError(e.to_string())
}

/// Create a "report not found" error
pub fn report_not_found(id: i64) -> DomainError {
    DomainError::ReportNotFound(id)
}

/// Create a "ban not found" error
pub fn ban_not_found(id: i64) -> DomainError {
    DomainError::BanNotFound(id)
}
