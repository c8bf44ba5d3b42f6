//! Configuration management for the blog service.
//!
//! Every value has a default, so the service starts with no environment at
//! all; a `.env` file is honored when present.
use dotenvy::dotenv;
use std::env;

/// Main application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server settings
    pub app: AppConfig,
    /// Database configuration
    pub database: DatabaseConfig,
    /// Static asset configuration
    pub static_files: StaticFilesConfig,
}

/// HTTP server settings
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Server host to bind to
    pub host: String,
    /// Server port to bind to
    pub port: u16,
}

/// Database configuration
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    /// SQLite database URL
    pub url: String,
    /// Max connections in pool
    pub max_connections: u32,
}

/// Static asset configuration
#[derive(Debug, Clone)]
pub struct StaticFilesConfig {
    /// Directory the index page is served from
    pub root: String,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        dotenv().ok();

        Config {
            app: AppConfig {
                host: env::var("BLOG_SERVICE_HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
                port: env::var("BLOG_SERVICE_PORT")
                    .ok()
                    .and_then(|p| p.parse().ok())
                    .unwrap_or(5000),
            },
            database: DatabaseConfig {
                url: env::var("DATABASE_URL").unwrap_or_else(|_| "sqlite://blog.db".to_string()),
                max_connections: env::var("DATABASE_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(5),
            },
            static_files: StaticFilesConfig {
                root: env::var("STATIC_ROOT").unwrap_or_else(|_| "static".to_string()),
            },
        }
    }
}
