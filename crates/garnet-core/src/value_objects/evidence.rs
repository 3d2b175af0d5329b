//! Evidence classification
//!
//! An evidence field is a comma-separated list of hyperlinks and relative
//! file paths. Classification happens at read time; the raw string stays in
//! storage untouched.

use serde::Serialize;

/// One classified evidence item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value", rename_all = "lowercase")]
pub enum EvidenceEntry {
    /// Starts with `http://` or `https://` (case-sensitive).
    Link(String),
    /// Anything else: a path relative to the configured evidence root.
    /// Traversal checks are the consuming layer's responsibility.
    File(String),
}

impl EvidenceEntry {
    pub fn value(&self) -> &str {
        match self {
            Self::Link(v) | Self::File(v) => v,
        }
    }
}

/// Split a raw evidence field into typed entries, preserving input order.
///
/// Empty or blank input yields an empty list, never a single blank entry;
/// blank parts between commas are dropped.
pub fn classify_evidence(raw: &str) -> Vec<EvidenceEntry> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| {
            if part.starts_with("http://") || part.starts_with("https://") {
                EvidenceEntry::Link(part.to_string())
            } else {
                EvidenceEntry::File(part.to_string())
            }
        })
        .collect()
}
