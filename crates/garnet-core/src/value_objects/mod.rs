//! Value objects - punishment durations, ban status, evidence, report reasons

mod evidence;
mod punishment;
mod report_reason;

pub use evidence::{classify_evidence, EvidenceEntry};
pub use punishment::{is_ban_punishment, BanStatus, DurationParseError, PunishmentDuration};
pub use report_reason::ReportReason;
