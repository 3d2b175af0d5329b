//! Service context - dependency container for services
//!
//! Holds the repositories, scrape coordinator, and settings store needed by
//! services.

use std::sync::Arc;

use garnet_common::StorageConfig;
use garnet_core::traits::{BanRepository, ReportRepository};
use garnet_db::SqlitePool;
use garnet_scrape::ScrapeCoordinator;

use super::settings::SettingsStore;

/// Service context containing all dependencies
///
/// This is the main dependency container that gets passed to all services.
/// It provides access to:
/// - Database repositories
/// - The scrape coordinator (busy gate + worker pool)
/// - The file-backed settings store
/// - Storage paths (evidence root default, CSV import file)
#[derive(Clone)]
pub struct ServiceContext {
    pool: SqlitePool,
    report_repo: Arc<dyn ReportRepository>,
    ban_repo: Arc<dyn BanRepository>,
    scrape_coordinator: Arc<ScrapeCoordinator>,
    settings: Arc<SettingsStore>,
    storage: StorageConfig,
}

impl ServiceContext {
    /// Create a new service context with all dependencies
    pub fn new(
        pool: SqlitePool,
        report_repo: Arc<dyn ReportRepository>,
        ban_repo: Arc<dyn BanRepository>,
        scrape_coordinator: Arc<ScrapeCoordinator>,
        settings: Arc<SettingsStore>,
        storage: StorageConfig,
    ) -> Self {
        Self {
            pool,
            report_repo,
            ban_repo,
            scrape_coordinator,
            settings,
            storage,
        }
    }

    /// Get the SQLite connection pool
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Get the report repository
    pub fn report_repo(&self) -> &dyn ReportRepository {
        self.report_repo.as_ref()
    }

    /// Get the ban repository
    pub fn ban_repo(&self) -> &dyn BanRepository {
        self.ban_repo.as_ref()
    }

    /// Get the scrape coordinator
    pub fn scrape_coordinator(&self) -> &Arc<ScrapeCoordinator> {
        &self.scrape_coordinator
    }

    /// Get the settings store
    pub fn settings(&self) -> &SettingsStore {
        self.settings.as_ref()
    }

    /// Get storage paths
    pub fn storage(&self) -> &StorageConfig {
        &self.storage
    }
}

impl std::fmt::Debug for ServiceContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ServiceContext")
            .field("pool", &"SqlitePool")
            .field("repositories", &"...")
            .field("settings", &self.settings)
            .field("storage", &self.storage)
            .finish()
    }
}
