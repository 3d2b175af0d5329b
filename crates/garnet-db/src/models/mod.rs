//! Database models - SQLx-compatible structs for SQLite tables

mod ban;
mod report;

pub use ban::BanModel;
pub use report::ReportModel;
