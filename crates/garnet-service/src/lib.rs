//! # garnet-service
//!
//! Application layer containing business logic, services, and DTOs.

pub mod dto;
pub mod services;

pub use dto::{
    ApiResponse, BanResponse, CreateBanRequest, CreateReportRequest, HealthChecks, HealthResponse,
    ListReportsParams, ReadinessResponse, ReportResponse, ScrapeRequest, ScrapeResponse,
    SettingsResponse, StatsResponse, UpdateReportRequest, UpdateSettingsRequest,
};
pub use services::{
    BanService, EvidenceService, ImportService, ReportService, ScrapeService, ServiceContext,
    ServiceError, ServiceResult, SettingsService, SettingsStore, StatsService,
};
