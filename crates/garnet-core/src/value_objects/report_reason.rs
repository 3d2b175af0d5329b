//! Structured report reason
//!
//! Storage keeps the reason as one comma-joined string for compatibility
//! with existing records and CSV exports. In code the reason is structured:
//! a tag list plus an optional free-text "Other" suffix, instead of the
//! positional last-element convention.

use serde::{Deserialize, Serialize};

/// The "Other" sentinel tag.
const OTHER_TAG: &str = "Other";

/// A report reason: selected tags plus optional custom text.
///
/// Encoding invariant: the field round-trips through a join-then-split on
/// `", "`. When `other_text` is present the `Other` tag is always the last
/// tag and the custom text is appended as a synthetic extra element.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportReason {
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_text: Option<String>,
}

impl ReportReason {
    pub fn new(tags: Vec<String>, other_text: Option<String>) -> Self {
        Self { tags, other_text }
    }

    /// Encode into the stored comma-joined form.
    pub fn to_field(&self) -> String {
        let mut parts: Vec<&str> = self
            .tags
            .iter()
            .map(String::as_str)
            .filter(|t| *t != OTHER_TAG)
            .collect();

        if let Some(text) = &self.other_text {
            parts.push(OTHER_TAG);
            parts.push(text);
        } else if self.tags.iter().any(|t| t == OTHER_TAG) {
            parts.push(OTHER_TAG);
        }

        parts.join(", ")
    }

    /// Decode from the stored comma-joined form.
    ///
    /// Everything after the `Other` tag is its custom text; the text may
    /// itself contain `", "`, so the trailing elements are rejoined.
    pub fn parse_field(field: &str) -> Self {
        if field.trim().is_empty() {
            return Self::default();
        }

        let parts: Vec<&str> = field.split(", ").collect();
        match parts.iter().position(|p| *p == OTHER_TAG) {
            Some(idx) if idx + 1 < parts.len() => Self {
                tags: parts[..=idx].iter().map(|s| (*s).to_string()).collect(),
                other_text: Some(parts[idx + 1..].join(", ")),
            },
            _ => Self {
                tags: parts.into_iter().map(String::from).collect(),
                other_text: None,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_tags_round_trip() {
        let reason = ReportReason::new(vec!["Spam".into(), "Harassment".into()], None);
        let field = reason.to_field();
        assert_eq!(field, "Spam, Harassment");
        assert_eq!(ReportReason::parse_field(&field), reason);
    }

    #[test]
    fn other_text_is_appended_after_the_other_tag() {
        let reason = ReportReason::new(vec!["Spam".into()], Some("called me names".into()));
        assert_eq!(reason.to_field(), "Spam, Other, called me names");
    }

    #[test]
    fn other_tag_is_forced_last_on_encode() {
        let reason = ReportReason::new(
            vec!["Other".into(), "Spam".into()],
            Some("something else".into()),
        );
        assert_eq!(reason.to_field(), "Spam, Other, something else");
    }

    #[test]
    fn parse_recovers_other_text() {
        let parsed = ReportReason::parse_field("Spam, Other, called me names");
        assert_eq!(parsed.tags, vec!["Spam".to_string(), "Other".to_string()]);
        assert_eq!(parsed.other_text.as_deref(), Some("called me names"));
    }

    #[test]
    fn other_text_containing_separator_survives() {
        let reason = ReportReason::new(vec![], Some("spamming, then evading".into()));
        let parsed = ReportReason::parse_field(&reason.to_field());
        assert_eq!(parsed.other_text.as_deref(), Some("spamming, then evading"));
    }

    #[test]
    fn trailing_other_without_text_stays_a_tag() {
        let parsed = ReportReason::parse_field("Spam, Other");
        assert_eq!(parsed.tags, vec!["Spam".to_string(), "Other".to_string()]);
        assert_eq!(parsed.other_text, None);
    }

    #[test]
    fn empty_field_parses_to_default() {
        assert_eq!(ReportReason::parse_field(""), ReportReason::default());
    }
}
