//! Data transfer objects for API requests and responses
//!
//! This module provides:
//! - Request DTOs with validation for API inputs
//! - Response DTOs for serializing API outputs, including derived fields

pub mod requests;
pub mod responses;

// Re-export commonly used request types
pub use requests::{
    CreateBanRequest, CreateReportRequest, ListReportsParams, ScrapeRequest,
    UpdateReportRequest, UpdateSettingsRequest,
};

// Re-export commonly used response types
pub use responses::{
    ApiResponse, BanResponse, HealthChecks, HealthResponse, ReadinessResponse, ReportResponse,
    ScrapeResponse, SettingsResponse, StatsResponse,
};
