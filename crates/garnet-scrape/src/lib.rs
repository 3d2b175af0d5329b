//! # garnet-scrape
//!
//! The ban-scraping pipeline: a paginated fetcher for the external ban
//! listing, a page parser that extracts and filters tabular ban rows, and a
//! coordinator that fans fetch+parse out across a bounded worker pool while
//! guaranteeing at most one scrape runs at a time.

pub mod client;
pub mod coordinator;
pub mod error;
pub mod parser;

pub use client::{HttpPageFetcher, PageFetcher};
pub use coordinator::{ScrapeConfig, ScrapeCoordinator, ScrapeRun};
pub use error::ScrapeError;
pub use parser::parse_bans;
