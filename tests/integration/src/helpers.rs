//! Test helpers for integration tests
//!
//! Provides utilities for spawning test servers against a throwaway SQLite
//! database and making HTTP requests. Each server gets its own temp
//! directory for the database file, settings file, and evidence root, so
//! tests are fully isolated and need no external services.

use std::net::SocketAddr;
use std::path::Path;
use std::time::Duration;

use anyhow::Result;
use garnet_api::{create_app, create_app_state};
use garnet_common::{
    AppConfig, AppSettings, CorsConfig, DatabaseConfig, Environment, RateLimitConfig,
    ScrapeSettings, ServerConfig, StorageConfig,
};
use reqwest::{Client, Response, StatusCode};
use serde::{de::DeserializeOwned, Serialize};
use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// Test server instance that manages lifecycle
pub struct TestServer {
    pub addr: SocketAddr,
    pub client: Client,
    // Holds the database/settings/evidence files for the server's lifetime
    tmp: TempDir,
    _handle: JoinHandle<()>,
}

impl TestServer {
    /// Start a new test server with an isolated temp environment
    pub async fn start() -> Result<Self> {
        let tmp = TempDir::new()?;
        let config = test_config(tmp.path());
        Self::start_with_config(config, tmp).await
    }

    /// Start a test server with custom config
    pub async fn start_with_config(config: AppConfig, tmp: TempDir) -> Result<Self> {
        // Create app state
        let state = create_app_state(config).await?;

        // Build application
        let app = create_app(state);

        // Bind to an OS-assigned port
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0))).await?;
        let addr = listener.local_addr()?;

        // Spawn server task
        let handle = tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        // Create HTTP client
        let client = Client::builder().timeout(Duration::from_secs(10)).build()?;

        Ok(Self {
            addr,
            client,
            tmp,
            _handle: handle,
        })
    }

    /// Get base URL for the server
    pub fn base_url(&self) -> String {
        format!("http://{}", self.addr)
    }

    /// Directory holding this server's evidence root
    pub fn evidence_dir(&self) -> std::path::PathBuf {
        self.tmp.path().join("evidence")
    }

    /// Make a GET request
    pub async fn get(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.get(&url).send().await?)
    }

    /// Make a POST request with JSON body
    pub async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.post(&url).json(body).send().await?)
    }

    /// Make a PUT request with JSON body
    pub async fn put<T: Serialize>(&self, path: &str, body: &T) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.put(&url).json(body).send().await?)
    }

    /// Make a DELETE request
    pub async fn delete(&self, path: &str) -> Result<Response> {
        let url = format!("{}{}", self.base_url(), path);
        Ok(self.client.delete(&url).send().await?)
    }
}

/// Create a test configuration rooted in the given temp directory
///
/// The scrape base URL points at a closed local port, so any scrape run
/// completes with zero pages fetched rather than touching the network.
pub fn test_config(root: &Path) -> AppConfig {
    let db_path = root.join("garnet-test.db");
    let evidence_dir = root.join("evidence");
    std::fs::create_dir_all(&evidence_dir).ok();

    AppConfig {
        app: AppSettings {
            name: "garnet-test".to_string(),
            env: Environment::Development,
        },
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
        },
        database: DatabaseConfig {
            url: format!("sqlite://{}?mode=rwc", db_path.display()),
            max_connections: 5,
            min_connections: 1,
        },
        scrape: ScrapeSettings {
            base_url: "http://127.0.0.1:9".to_string(),
            max_pages: 3,
            concurrency: 2,
            timeout_secs: 1,
        },
        storage: StorageConfig {
            evidence_dir: evidence_dir.display().to_string(),
            settings_file: root.join("garnet-settings.json").display().to_string(),
            import_csv: root.join("reports.csv").display().to_string(),
        },
        rate_limit: RateLimitConfig {
            requests_per_second: 1000,
            burst: 1000,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
    }
}

/// Assert response status and parse JSON body
pub async fn assert_json<T: DeserializeOwned>(
    response: Response,
    expected_status: StatusCode,
) -> Result<T> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(response.json().await?)
}

/// Assert response status without parsing body
pub async fn assert_status(response: Response, expected_status: StatusCode) -> Result<()> {
    let status = response.status();
    if status != expected_status {
        let body = response.text().await?;
        anyhow::bail!(
            "Expected status {}, got {}. Body: {}",
            expected_status,
            status,
            body
        );
    }
    Ok(())
}
