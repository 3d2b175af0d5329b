//! Ban service
//!
//! Handles listing, manual entry, and deletion of ban records. Bans are
//! append-only: there is no update path, matching how the external listing
//! is consumed.

use garnet_core::NewBan;
use tracing::{info, instrument};
use validator::Validate;

use crate::dto::{BanResponse, CreateBanRequest};

use super::context::ServiceContext;
use super::error::{ServiceError, ServiceResult};

/// Ban service
pub struct BanService<'a> {
    ctx: &'a ServiceContext,
}

impl<'a> BanService<'a> {
    /// Create a new BanService
    pub fn new(ctx: &'a ServiceContext) -> Self {
        Self { ctx }
    }

    /// List all bans
    #[instrument(skip(self))]
    pub async fn list_bans(&self) -> ServiceResult<Vec<BanResponse>> {
        let bans = self.ctx.ban_repo().find_all().await?;
        Ok(bans.into_iter().map(BanResponse::from).collect())
    }

    /// Get ban by ID
    #[instrument(skip(self))]
    pub async fn get_ban(&self, id: i64) -> ServiceResult<BanResponse> {
        let ban = self
            .ctx
            .ban_repo()
            .find_by_id(id)
            .await?
            .ok_or_else(|| ServiceError::not_found("Ban", id.to_string()))?;
        Ok(BanResponse::from(ban))
    }

    /// Record a ban manually
    #[instrument(skip(self, request))]
    pub async fn create_ban(&self, request: CreateBanRequest) -> ServiceResult<BanResponse> {
        request.validate()?;

        let new_ban = NewBan {
            date: request.date,
            player_name: request.player_name,
            player_steam_id: request.player_steam_id,
            admin_name: request.admin_name,
            admin_steam_id: request.admin_steam_id,
            length: request.length,
            evidence: request.evidence,
            reason: request.reason,
        };

        let ban = self.ctx.ban_repo().create(&new_ban).await?;
        info!(ban_id = ban.id, "Ban recorded");
        Ok(BanResponse::from(ban))
    }

    /// Delete a ban
    #[instrument(skip(self))]
    pub async fn delete_ban(&self, id: i64) -> ServiceResult<()> {
        self.ctx.ban_repo().delete(id).await?;
        info!(ban_id = id, "Ban deleted");
        Ok(())
    }
}
