//! # API Configuration Module
//!
//! Loads server configuration from environment variables, providing defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3020)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `STORE_BACKEND`: `file`, `memory` or `postgres` (default: "file")
//! - `DATA_PATH`: Response document for the file backend (default: "data/responses.json")
//! - `DATABASE_URL`: PostgreSQL connection string (required for the postgres backend)
//! - `ROSTER_PATH`: Optional JSON file replacing the built-in judge roster
//! - `ADMIN_USER` / `ADMIN_PASS`: Credentials for the admin listing
//! - `PUBLIC_BASE_URL`: Origin of the form front-end that serves `/judge/{id}`.
//!   The API itself has no such route, so this must not point at the API
//!   (default: "http://localhost:3000")

use std::{env, path::PathBuf};

use eyre::{Result, WrapErr, eyre};
use tracing::Level;

use crate::middleware::auth::AdminCredentials;

/// Where the form front-end runs in local development
pub const DEFAULT_PUBLIC_BASE_URL: &str = "http://localhost:3000";

/// Where submitted responses are persisted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreBackend {
    /// Single JSON document on local disk
    File(PathBuf),
    Memory,
    Postgres { database_url: String },
}

impl StoreBackend {
    fn from_env() -> Result<Self> {
        let kind = env::var("STORE_BACKEND").unwrap_or_else(|_| "file".to_string());

        match kind.trim().to_ascii_lowercase().as_str() {
            "file" => {
                let path = env::var("DATA_PATH")
                    .unwrap_or_else(|_| "data/responses.json".to_string());
                Ok(Self::File(PathBuf::from(path)))
            }
            "memory" => Ok(Self::Memory),
            "postgres" => {
                let database_url = env::var("DATABASE_URL").wrap_err(
                    "DATABASE_URL environment variable must be set for the postgres backend",
                )?;
                Ok(Self::Postgres { database_url })
            }
            other => Err(eyre!("Unknown STORE_BACKEND value: {}", other)),
        }
    }
}

/// Configuration for the DefenseSync API server
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    pub store_backend: StoreBackend,

    /// Replacement roster file; the built-in roster is used when unset
    pub roster_path: Option<PathBuf>,

    /// Admin listing credentials. When unset every admin request is refused.
    pub admin: Option<AdminCredentials>,

    /// Form front-end origin used for the per-judge links on the admin listing
    pub public_base_url: String,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The API_PORT value cannot be parsed as a u16
    /// - STORE_BACKEND is unknown, or is `postgres` without DATABASE_URL
    /// - Only one of ADMIN_USER / ADMIN_PASS is set
    pub fn from_env() -> Result<Self> {
        // Network settings
        let host = env::var("API_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port = env::var("API_PORT")
            .unwrap_or_else(|_| "3020".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Logging settings
        let log_level = parse_log_level(&env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string()));

        // CORS settings
        let cors_origins = env::var("API_CORS_ORIGINS").ok().map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = env::var("API_REQUEST_TIMEOUT_SECONDS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .unwrap_or(30);

        // Storage settings
        let store_backend = StoreBackend::from_env()?;
        let roster_path = env::var("ROSTER_PATH").ok().map(PathBuf::from);

        // Security settings
        let admin = match (env::var("ADMIN_USER").ok(), env::var("ADMIN_PASS").ok()) {
            (Some(user), Some(pass)) => Some(AdminCredentials::new(&user, &pass)?),
            (None, None) => None,
            _ => return Err(eyre!("ADMIN_USER and ADMIN_PASS must be set together")),
        };

        let public_base_url = public_base_url(env::var("PUBLIC_BASE_URL").ok());

        Ok(Self {
            host,
            port,
            log_level,
            cors_origins,
            request_timeout,
            store_backend,
            roster_path,
            admin,
            public_base_url,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Form front-end origin without a trailing slash
pub fn public_base_url(value: Option<String>) -> String {
    value
        .filter(|v| !v.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_PUBLIC_BASE_URL.to_string())
        .trim_end_matches('/')
        .to_string()
}

pub fn parse_log_level(value: &str) -> Level {
    match value.trim().to_ascii_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}
