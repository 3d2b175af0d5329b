//! Scrape coordinator
//!
//! Fans fetch+parse out across a bounded worker pool and aggregates the
//! results into one unordered set. A process-wide busy flag (owned here)
//! guarantees at most one scrape at a time; acquiring it hands back a guard
//! whose `Drop` releases the flag, so an error mid-scrape cannot leave the
//! system permanently busy. The caller holds the guard across the bulk
//! insert, so the flag clears only after persistence finishes.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Semaphore;
use tokio::task::JoinSet;
use tracing::{debug, info, warn};

use garnet_core::NewBan;

use crate::client::PageFetcher;

/// Coordinator tuning knobs.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Pages dispatched per scrape. The full range is always issued up
    /// front; there is no early stop on an empty page.
    pub max_pages: u32,
    /// Maximum concurrent in-flight fetches.
    pub concurrency: usize,
}

impl Default for ScrapeConfig {
    fn default() -> Self {
        Self {
            max_pages: 50,
            concurrency: 10,
        }
    }
}

/// Coordinates concurrent retrieval and filtering of the external listing.
pub struct ScrapeCoordinator {
    fetcher: Arc<dyn PageFetcher>,
    config: ScrapeConfig,
    busy: AtomicBool,
}

impl ScrapeCoordinator {
    pub fn new(fetcher: Arc<dyn PageFetcher>, config: ScrapeConfig) -> Self {
        Self {
            fetcher,
            config,
            busy: AtomicBool::new(false),
        }
    }

    /// Whether a scrape is currently running.
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Try to claim the busy flag. Returns `None` when a scrape is already
    /// running; that request is a no-op, never queued.
    pub fn try_begin(self: &Arc<Self>) -> Option<ScrapeRun> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        Some(ScrapeRun {
            coordinator: Arc::clone(self),
        })
    }
}

/// An in-progress scrape. Releases the coordinator's busy flag on drop.
pub struct ScrapeRun {
    coordinator: Arc<ScrapeCoordinator>,
}

impl ScrapeRun {
    /// Fetch and parse the full configured page range, keeping rows issued
    /// by `admin_steam_id`.
    ///
    /// Completions are collected in arrival order; the result is one
    /// unordered set. A page whose fetch fails is logged and contributes
    /// zero rows without aborting the other in-flight pages.
    pub async fn collect(&self, admin_steam_id: &str) -> Vec<NewBan> {
        let config = &self.coordinator.config;
        let semaphore = Arc::new(Semaphore::new(config.concurrency));
        let mut workers = JoinSet::new();

        info!(
            admin_steam_id,
            max_pages = config.max_pages,
            concurrency = config.concurrency,
            "starting ban scrape"
        );

        for page in 1..=config.max_pages {
            let fetcher = Arc::clone(&self.coordinator.fetcher);
            let semaphore = Arc::clone(&semaphore);
            let admin = admin_steam_id.to_string();

            workers.spawn(async move {
                let Ok(_permit) = semaphore.acquire_owned().await else {
                    // Semaphore is never closed while workers run
                    return Vec::new();
                };

                match fetcher.fetch_page(page).await {
                    Ok(body) => {
                        let rows = crate::parser::parse_bans(&body, &admin);
                        debug!(page, rows = rows.len(), "page parsed");
                        rows
                    }
                    Err(err) => {
                        warn!(page, error = %err, "page fetch failed, contributing no rows");
                        Vec::new()
                    }
                }
            });
        }

        let mut bans = Vec::new();
        while let Some(result) = workers.join_next().await {
            match result {
                Ok(rows) => bans.extend(rows),
                Err(join_err) => warn!(error = %join_err, "scrape worker panicked"),
            }
        }

        info!(total = bans.len(), "ban scrape complete");
        bans
    }
}

impl Drop for ScrapeRun {
    fn drop(&mut self) {
        self.coordinator.busy.store(false, Ordering::Release);
    }
}
