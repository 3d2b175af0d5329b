//! Page fetcher for the external ban listing

use async_trait::async_trait;
use reqwest::{Client, Url};
use std::time::Duration;
use tracing::debug;

use crate::error::ScrapeError;

/// Retrieves one page of raw listing markup.
///
/// Trait seam so the coordinator can be driven by a mock in tests.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Fetch the body of the 1-based page `page`.
    async fn fetch_page(&self, page: u32) -> Result<String, ScrapeError>;
}

/// HTTP fetcher for `{base_url}/index.php?page={n}`.
///
/// No built-in retry: a failed page is the caller's to drop.
#[derive(Debug, Clone)]
pub struct HttpPageFetcher {
    base_url: Url,
    http: Client,
}

impl HttpPageFetcher {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, ScrapeError> {
        let parsed =
            Url::parse(base_url).map_err(|_| ScrapeError::InvalidBaseUrl(base_url.to_string()))?;

        let http = Client::builder()
            .timeout(timeout)
            .user_agent("garnet-ban-scraper/0.1")
            .build()
            .map_err(ScrapeError::BuildClient)?;

        Ok(Self { base_url: parsed, http })
    }

    fn page_url(&self, page: u32) -> String {
        format!("{}/index.php?page={page}", self.base_url.as_str().trim_end_matches('/'))
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch_page(&self, page: u32) -> Result<String, ScrapeError> {
        let url = self.page_url(page);
        debug!(page, %url, "fetching listing page");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|source| ScrapeError::Request { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(ScrapeError::HttpStatus { page, status });
        }

        response
            .text()
            .await
            .map_err(|source| ScrapeError::Request { page, source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_formatting() {
        let fetcher = HttpPageFetcher::new("http://bans.example.com", Duration::from_secs(5))
            .expect("valid base url");
        assert_eq!(fetcher.page_url(3), "http://bans.example.com/index.php?page=3");
    }

    #[test]
    fn trailing_slash_is_normalized() {
        let fetcher = HttpPageFetcher::new("http://bans.example.com/", Duration::from_secs(5))
            .expect("valid base url");
        assert_eq!(fetcher.page_url(1), "http://bans.example.com/index.php?page=1");
    }

    #[test]
    fn invalid_base_url_is_rejected() {
        let err = HttpPageFetcher::new("not a url", Duration::from_secs(5)).unwrap_err();
        assert!(matches!(err, ScrapeError::InvalidBaseUrl(_)));
    }
}
