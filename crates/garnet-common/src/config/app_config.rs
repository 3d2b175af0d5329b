//! Application configuration
//!
//! Everything is sourced from environment variables, with an optional `.env`
//! file picked up at load time. `SCRAPE_BASE_URL` is the only required
//! variable; the rest fall back to development-friendly defaults.

use std::env;
use std::str::FromStr;

/// Top-level configuration, grouped by concern
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app: AppSettings,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub scrape: ScrapeSettings,
    pub storage: StorageConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Clone)]
pub struct AppSettings {
    pub name: String,
    pub env: Environment,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

impl Environment {
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Self::Production)
    }

    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Self::Development)
    }
}

impl FromStr for Environment {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Ok(Self::Development),
            "staging" => Ok(Self::Staging),
            "production" | "prod" => Ok(Self::Production),
            _ => Err(ConfigError::InvalidVar("APP_ENV")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl ServerConfig {
    #[must_use]
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub min_connections: u32,
}

/// Ban listing scraper knobs
#[derive(Debug, Clone)]
pub struct ScrapeSettings {
    /// Base URL of the external ban listing (pages at `index.php?page=N`).
    pub base_url: String,
    /// Upper bound on pages walked per scrape.
    pub max_pages: u32,
    /// Maximum concurrent in-flight page fetches.
    pub concurrency: usize,
    /// Per-request timeout in seconds.
    pub timeout_secs: u64,
}

/// Evidence storage and legacy import paths
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Root directory evidence file paths are served from.
    pub evidence_dir: String,
    /// JSON file where runtime settings changes are persisted.
    pub settings_file: String,
    /// Legacy CSV file imported on first run when the reports table is empty.
    pub import_csv: String,
}

#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub requests_per_second: u32,
    pub burst: u32,
}

#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl AppConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    /// Fails when `SCRAPE_BASE_URL` is unset or `APP_ENV` holds an
    /// unrecognized value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let env = match env::var("APP_ENV") {
            Ok(raw) => raw.parse()?,
            Err(_) => Environment::default(),
        };

        Ok(Self {
            app: AppSettings {
                name: var_or("APP_NAME", "garnet"),
                env,
            },
            server: ServerConfig {
                host: var_or("SERVER_HOST", "127.0.0.1"),
                port: var_parsed("SERVER_PORT", 4200),
            },
            database: DatabaseConfig {
                url: var_or("DATABASE_URL", "sqlite://garnet.db?mode=rwc"),
                max_connections: var_parsed("DATABASE_MAX_CONNECTIONS", 10),
                min_connections: var_parsed("DATABASE_MIN_CONNECTIONS", 1),
            },
            scrape: ScrapeSettings {
                base_url: env::var("SCRAPE_BASE_URL")
                    .map_err(|_| ConfigError::MissingVar("SCRAPE_BASE_URL"))?,
                max_pages: var_parsed("SCRAPE_MAX_PAGES", 50),
                concurrency: var_parsed("SCRAPE_CONCURRENCY", 10),
                timeout_secs: var_parsed("SCRAPE_TIMEOUT_SECS", 15),
            },
            storage: StorageConfig {
                evidence_dir: var_or("EVIDENCE_DIR", "./evidence"),
                settings_file: var_or("SETTINGS_FILE", "garnet-settings.json"),
                import_csv: var_or("IMPORT_CSV", "reports.csv"),
            },
            rate_limit: RateLimitConfig {
                requests_per_second: var_parsed("RATE_LIMIT_REQUESTS_PER_SECOND", 10),
                burst: var_parsed("RATE_LIMIT_BURST", 50),
            },
            cors: CorsConfig {
                allowed_origins: env::var("CORS_ALLOWED_ORIGINS")
                    .ok()
                    .map(|s| s.split(',').map(str::trim).map(String::from).collect())
                    .unwrap_or_default(),
            },
        })
    }
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.to_string())
}

fn var_parsed<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(default)
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for environment variable: {0}")]
    InvalidVar(&'static str),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn environment_classification() {
        assert!(Environment::Production.is_production());
        assert!(Environment::Development.is_development());
        assert!(!Environment::Staging.is_production());
    }

    #[test]
    fn environment_parsing() {
        assert_eq!("prod".parse::<Environment>().ok(), Some(Environment::Production));
        assert_eq!("Staging".parse::<Environment>().ok(), Some(Environment::Staging));
        assert!("qa".parse::<Environment>().is_err());
    }

    #[test]
    fn server_address_formatting() {
        let server = ServerConfig {
            host: "0.0.0.0".into(),
            port: 4200,
        };
        assert_eq!(server.address(), "0.0.0.0:4200");
    }
}
