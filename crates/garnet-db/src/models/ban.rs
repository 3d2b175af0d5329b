//! Ban database model

use garnet_core::Ban;
use sqlx::FromRow;

/// Database model for the bans table
#[derive(Debug, Clone, FromRow)]
pub struct BanModel {
    pub id: i64,
    pub date: String,
    pub player_name: String,
    pub player_steam_id: String,
    pub admin_name: String,
    pub admin_steam_id: String,
    pub length: String,
    pub evidence: String,
    pub reason: String,
}

impl From<BanModel> for Ban {
    fn from(model: BanModel) -> Self {
        Ban {
            id: model.id,
            date: model.date,
            player_name: model.player_name,
            player_steam_id: model.player_steam_id,
            admin_name: model.admin_name,
            admin_steam_id: model.admin_steam_id,
            length: model.length,
            evidence: model.evidence,
            reason: model.reason,
        }
    }
}
