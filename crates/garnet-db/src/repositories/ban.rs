//! SQLite implementation of BanRepository

use async_trait::async_trait;
use sqlx::SqlitePool;
use tracing::instrument;

use garnet_core::traits::{BanRepository, RepoResult};
use garnet_core::{Ban, NewBan};

use crate::models::BanModel;

use super::error::{ban_not_found, map_db_error};

const SELECT_COLUMNS: &str = "SELECT id, date, player_name, player_steam_id, admin_name, \
                              admin_steam_id, length, evidence, reason FROM bans";

const INSERT_SQL: &str = r"
    INSERT INTO bans (date, player_name, player_steam_id, admin_name, admin_steam_id, length, evidence, reason)
    VALUES (?, ?, ?, ?, ?, ?, ?, ?)
";

/// SQLite implementation of BanRepository
#[derive(Clone)]
pub struct SqliteBanRepository {
    pool: SqlitePool,
}

impl SqliteBanRepository {
    /// Create a new SqliteBanRepository
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BanRepository for SqliteBanRepository {
    #[instrument(skip(self))]
    async fn find_all(&self) -> RepoResult<Vec<Ban>> {
        let models = sqlx::query_as::<_, BanModel>(&format!("{SELECT_COLUMNS} ORDER BY id"))
            .fetch_all(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(models.into_iter().map(Ban::from).collect())
    }

    #[instrument(skip(self))]
    async fn find_by_id(&self, id: i64) -> RepoResult<Option<Ban>> {
        let model = sqlx::query_as::<_, BanModel>(&format!("{SELECT_COLUMNS} WHERE id = ?"))
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(model.map(Ban::from))
    }

    #[instrument(skip(self, ban))]
    async fn create(&self, ban: &NewBan) -> RepoResult<Ban> {
        let result = sqlx::query(INSERT_SQL)
            .bind(&ban.date)
            .bind(&ban.player_name)
            .bind(&ban.player_steam_id)
            .bind(&ban.admin_name)
            .bind(&ban.admin_steam_id)
            .bind(&ban.length)
            .bind(&ban.evidence)
            .bind(&ban.reason)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        Ok(Ban {
            id: result.last_insert_rowid(),
            date: ban.date.clone(),
            player_name: ban.player_name.clone(),
            player_steam_id: ban.player_steam_id.clone(),
            admin_name: ban.admin_name.clone(),
            admin_steam_id: ban.admin_steam_id.clone(),
            length: ban.length.clone(),
            evidence: ban.evidence.clone(),
            reason: ban.reason.clone(),
        })
    }

    #[instrument(skip(self, bans), fields(count = bans.len()))]
    async fn create_many(&self, bans: &[NewBan]) -> RepoResult<u64> {
        if bans.is_empty() {
            return Ok(0);
        }

        // Single transaction: either the whole batch commits or none of it.
        let mut tx = self.pool.begin().await.map_err(map_db_error)?;

        for ban in bans {
            sqlx::query(INSERT_SQL)
                .bind(&ban.date)
                .bind(&ban.player_name)
                .bind(&ban.player_steam_id)
                .bind(&ban.admin_name)
                .bind(&ban.admin_steam_id)
                .bind(&ban.length)
                .bind(&ban.evidence)
                .bind(&ban.reason)
                .execute(&mut *tx)
                .await
                .map_err(map_db_error)?;
        }

        tx.commit().await.map_err(map_db_error)?;

        Ok(bans.len() as u64)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: i64) -> RepoResult<()> {
        let result = sqlx::query("DELETE FROM bans WHERE id = ?")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(map_db_error)?;

        if result.rows_affected() == 0 {
            return Err(ban_not_found(id));
        }

        Ok(())
    }
}
