//! Punishment duration parsing and ban status evaluation
//!
//! Punishment labels are free text entered by staff ("7 day ban",
//! "permaban", "2 week propban"). The parser turns the leading
//! `<magnitude> <unit>` pair into a tagged duration; the evaluator combines
//! it with the report timestamp to classify the ban as active or expired.

use chrono::{Duration, NaiveDateTime};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Hours per "month" unit: always exactly 30 days, no calendar arithmetic.
const HOURS_PER_MONTH: i64 = 30 * 24;

/// A parsed punishment duration.
///
/// Unit resolution is by substring containment on the second whitespace
/// token, checked in this order: `hour`/`hr`, `day`, `week`, `month`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PunishmentDuration {
    Hours(i64),
    Days(i64),
    Weeks(i64),
    Months(i64),
}

impl PunishmentDuration {
    /// Convert to a concrete duration. Months are exactly 30 days; there is
    /// no leap or DST adjustment anywhere in this conversion.
    pub fn to_duration(self) -> Duration {
        match self {
            Self::Hours(n) => Duration::hours(n),
            Self::Days(n) => Duration::days(n),
            Self::Weeks(n) => Duration::weeks(n),
            Self::Months(n) => Duration::hours(n * HOURS_PER_MONTH),
        }
    }

    /// Total seconds of the duration.
    pub fn as_seconds(self) -> i64 {
        self.to_duration().num_seconds()
    }
}

/// Why a punishment label failed to parse as a duration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DurationParseError {
    /// Fewer than two tokens, or the first token is not an integer.
    #[error("invalid duration format")]
    Invalid,
    /// Valid magnitude but the unit token matched no known unit.
    #[error("unrecognized duration unit")]
    UnknownUnit,
}

impl FromStr for PunishmentDuration {
    type Err = DurationParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let magnitude = tokens.next().ok_or(DurationParseError::Invalid)?;
        let unit = tokens.next().ok_or(DurationParseError::Invalid)?;

        let n: i64 = magnitude.parse().map_err(|_| DurationParseError::Invalid)?;
        let unit = unit.to_lowercase();

        if unit.contains("hour") || unit.contains("hr") {
            Ok(Self::Hours(n))
        } else if unit.contains("day") {
            Ok(Self::Days(n))
        } else if unit.contains("week") {
            Ok(Self::Weeks(n))
        } else if unit.contains("month") {
            Ok(Self::Months(n))
        } else {
            Err(DurationParseError::UnknownUnit)
        }
    }
}

/// Whether a punishment label denotes a ban at all.
///
/// Case-insensitive substring test for "ban" anywhere in the label, which
/// also covers "propban". Governs whether the duration parser is invoked.
pub fn is_ban_punishment(punishment: &str) -> bool {
    punishment.to_lowercase().contains("ban")
}

/// Derived ban status for a report's punishment. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BanStatus {
    Active,
    Expired,
    Unknown,
    #[serde(rename = "Invalid Duration")]
    InvalidDuration,
    #[serde(rename = "N/A")]
    NotApplicable,
}

impl BanStatus {
    /// Classify a punishment relative to the report timestamp and an
    /// injected "now". Pure: same inputs always yield the same status.
    pub fn evaluate(punishment: &str, start: NaiveDateTime, now: NaiveDateTime) -> Self {
        if !is_ban_punishment(punishment) {
            return Self::NotApplicable;
        }

        match punishment.parse::<PunishmentDuration>() {
            Ok(duration) => {
                let expiry = start + duration.to_duration();
                if now < expiry {
                    Self::Active
                } else {
                    Self::Expired
                }
            }
            Err(DurationParseError::UnknownUnit) => Self::Unknown,
            Err(DurationParseError::Invalid) => Self::InvalidDuration,
        }
    }
}

impl fmt::Display for BanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Active => "Active",
            Self::Expired => "Expired",
            Self::Unknown => "Unknown",
            Self::InvalidDuration => "Invalid Duration",
            Self::NotApplicable => "N/A",
        };
        f.write_str(s)
    }
}
