//! Ban listing page parser
//!
//! Extracts tabular ban rows from one page of listing markup. Column order
//! is fixed: date, player cell, admin cell, length, reason. The listing has
//! no evidence column, so evidence is always empty. Rows are kept only when
//! the admin steam id exactly matches the requested identifier - this is how
//! a global listing is scoped down to one admin's actions.

use scraper::{ElementRef, Html, Selector};
use std::sync::LazyLock;
use tracing::trace;

use garnet_core::NewBan;

static TR: LazyLock<Selector> = LazyLock::new(|| Selector::parse("tr").expect("static selector"));
static TD: LazyLock<Selector> = LazyLock::new(|| Selector::parse("td").expect("static selector"));
static A: LazyLock<Selector> = LazyLock::new(|| Selector::parse("a").expect("static selector"));

/// Marker separating a display name from its embedded profile link.
const NAME_LINK_MARKER: &str = "(<";

fn cell_text(cell: &ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

/// Display name: everything before the first literal `"(<"`.
fn display_name(cell: &ElementRef<'_>) -> String {
    let text = cell.text().collect::<String>();
    match text.find(NAME_LINK_MARKER) {
        Some(idx) => text[..idx].trim().to_string(),
        None => text.trim().to_string(),
    }
}

/// Steam id: text of the first embedded hyperlink in the cell.
fn link_text(cell: &ElementRef<'_>) -> Option<String> {
    cell.select(&A)
        .next()
        .map(|a| a.text().collect::<String>().trim().to_string())
}

/// Parse one page of listing markup, keeping rows issued by `admin_steam_id`.
///
/// The first table row is the header and is skipped. Rows with no cells are
/// skipped; rows with fewer than five cells or without an embedded profile
/// link are malformed and skipped too.
pub fn parse_bans(html: &str, admin_steam_id: &str) -> Vec<NewBan> {
    let document = Html::parse_document(html);
    let mut bans = Vec::new();

    for row in document.select(&TR).skip(1) {
        let cells: Vec<ElementRef<'_>> = row.select(&TD).collect();
        if cells.is_empty() {
            continue;
        }
        if cells.len() < 5 {
            trace!(cells = cells.len(), "skipping malformed listing row");
            continue;
        }

        let Some(row_admin_id) = link_text(&cells[2]) else {
            trace!("skipping row without admin profile link");
            continue;
        };
        if row_admin_id != admin_steam_id {
            continue;
        }
        let Some(player_steam_id) = link_text(&cells[1]) else {
            trace!("skipping row without player profile link");
            continue;
        };

        bans.push(NewBan {
            date: cell_text(&cells[0]),
            player_name: display_name(&cells[1]),
            player_steam_id,
            admin_name: display_name(&cells[2]),
            admin_steam_id: row_admin_id,
            length: cell_text(&cells[3]),
            // The listing provides no evidence column.
            evidence: String::new(),
            reason: cell_text(&cells[4]),
        });
    }

    bans
}
