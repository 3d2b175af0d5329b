//! Scrape error types

use reqwest::StatusCode;

/// Errors from the scrape pipeline.
///
/// Fetch errors are per-page: the coordinator logs them and the page
/// contributes zero rows; sibling pages are unaffected.
#[derive(Debug, thiserror::Error)]
pub enum ScrapeError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(String),

    #[error("failed to build HTTP client: {0}")]
    BuildClient(#[source] reqwest::Error),

    #[error("request for page {page} failed: {source}")]
    Request {
        page: u32,
        #[source]
        source: reqwest::Error,
    },

    #[error("page {page} returned unexpected status {status}")]
    HttpStatus { page: u32, status: StatusCode },
}
