//! Business logic services
//!
//! This module contains all service layer implementations that handle
//! business logic, validation, and orchestration of domain operations.

pub mod ban;
pub mod context;
pub mod error;
pub mod evidence;
pub mod import;
pub mod report;
pub mod scrape;
pub mod settings;
pub mod stats;

// Re-export all services for convenience
pub use ban::BanService;
pub use context::ServiceContext;
pub use error::{ServiceError, ServiceResult};
pub use evidence::EvidenceService;
pub use import::ImportService;
pub use report::ReportService;
pub use scrape::ScrapeService;
pub use settings::{SettingsService, SettingsStore, StoredSettings};
pub use stats::StatsService;
