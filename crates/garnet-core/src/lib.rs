//! # garnet-core
//!
//! Domain layer containing entities, value objects, and repository traits.
//! This crate has zero dependencies on infrastructure (database, web framework, etc.).

pub mod entities;
pub mod error;
pub mod traits;
pub mod value_objects;

// Re-export commonly used types at crate root
pub use entities::{Ban, NewBan, NewReport, Report};
pub use error::DomainError;
pub use traits::{
    BanRepository, LabelCount, ReportQuery, ReportRepository, RepoResult, SearchFilter, SortField,
    SortOrder, YearMonth,
};
pub use value_objects::{
    classify_evidence, is_ban_punishment, BanStatus, DurationParseError, EvidenceEntry,
    PunishmentDuration, ReportReason,
};
