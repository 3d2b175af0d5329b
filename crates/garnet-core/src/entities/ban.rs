//! Ban entity - a disciplinary action recorded on the external ban listing

/// A persisted ban record.
///
/// The external listing provides no natural key, so identity is the
/// storage-assigned autoincrementing `id`. Records are never updated in
/// place; they are inserted (by the scraper or by manual entry) and deleted
/// by id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ban {
    pub id: i64,
    /// Timestamp as scraped, not guaranteed parseable.
    pub date: String,
    pub player_name: String,
    pub player_steam_id: String,
    pub admin_name: String,
    /// Identifier used as the scrape filter key.
    pub admin_steam_id: String,
    /// Free-text duration label, e.g. "2 weeks".
    pub length: String,
    /// Comma-separated list of URLs/paths, may be empty.
    pub evidence: String,
    pub reason: String,
}

/// A ban that has not been persisted yet (no id).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBan {
    pub date: String,
    pub player_name: String,
    pub player_steam_id: String,
    pub admin_name: String,
    pub admin_steam_id: String,
    pub length: String,
    pub evidence: String,
    pub reason: String,
}

impl Ban {
    /// Player name with parenthetical annotations stripped, for matching.
    pub fn player_display_name(&self) -> &str {
        match self.player_name.find('(') {
            Some(idx) => self.player_name[..idx].trim_end(),
            None => self.player_name.as_str(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ban {
        Ban {
            id: 1,
            date: "01-02-2024 13:37".into(),
            player_name: "Griefer99 (banned before)".into(),
            player_steam_id: "STEAM_0:1:11111".into(),
            admin_name: "AdminBob".into(),
            admin_steam_id: "STEAM_0:0:22222".into(),
            length: "1 week".into(),
            evidence: String::new(),
            reason: "Mass RDM".into(),
        }
    }

    #[test]
    fn display_name_strips_annotation() {
        assert_eq!(sample().player_display_name(), "Griefer99");
    }

    #[test]
    fn display_name_without_annotation_is_unchanged() {
        let mut ban = sample();
        ban.player_name = "CleanName".into();
        assert_eq!(ban.player_display_name(), "CleanName");
    }
}
