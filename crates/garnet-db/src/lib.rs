//! # garnet-db
//!
//! Database layer implementing repository traits with SQLite via SQLx.
//!
//! This crate provides SQLite implementations for the repository traits
//! defined in `garnet-core`. It handles:
//!
//! - Connection pool management
//! - Database models with SQLx `FromRow` derives
//! - Repository implementations
//! - Schema migrations (embedded via `sqlx::migrate!`)

pub mod models;
pub mod pool;
pub mod repositories;

// Re-export commonly used types
pub use pool::{create_pool, run_migrations, DatabaseConfig, SqlitePool};
pub use repositories::{SqliteBanRepository, SqliteReportRepository};
