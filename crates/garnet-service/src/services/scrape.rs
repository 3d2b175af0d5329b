//! Scrape service
//!
//! Bridges the HTTP trigger to the scrape coordinator: claims the busy
//! gate, runs the paginated collection, and bulk-inserts the results while
//! the gate is still held so an overlapping trigger can never double-insert.

use tracing::{info, instrument, warn};
use validator::Validate;

use crate::dto::{ScrapeRequest, ScrapeResponse};

use super::context::ServiceContext;
use super::error::ServiceResult;

/// Scrape service
pub struct ScrapeService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> ScrapeService<'a> {
    /// Create a new ScrapeService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// Run a scrape for the given admin, unless one is already in flight.
    ///
    /// Returns `started: false` (and inserts nothing) when the coordinator
    /// is busy; triggers are dropped rather than queued.
    #[instrument(skip(self, request), fields(admin = %request.admin_steam_id))]
    pub async fn scrape_bans(&self, request: ScrapeRequest) -> ServiceResult<ScrapeResponse> {
        request.validate()?;

        let Some(run) = self.ctx.scrape_coordinator().try_begin() else {
            warn!("Scrape trigger ignored, another scrape is in flight");
            return Ok(ScrapeResponse {
                started: false,
                imported: 0,
            });
        };

        let bans = run.collect(&request.admin_steam_id).await;

        // The `run` guard stays alive through the insert: the busy gate is
        // released only after the rows are committed.
        let imported = if bans.is_empty() {
            0
        } else {
            self.ctx.ban_repo().create_many(&bans).await?
        };
        drop(run);

        info!(imported, "Scrape finished");
        Ok(ScrapeResponse {
            started: true,
            imported,
        })
    }
}
