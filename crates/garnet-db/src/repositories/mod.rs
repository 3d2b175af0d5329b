//! Repository implementations
//!
//! SQLite implementations of the repository traits defined in garnet-core.

mod ban;
mod error;
mod report;

pub use ban::SqliteBanRepository;
pub use report::SqliteReportRepository;
