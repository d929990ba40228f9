//! Almanac: a year-by-year blog archiver
//!
//! This crate crawls a paginated blog for every post published in a set of
//! target years, persists the extracted corpus as a JSON snapshot, and
//! renders one HTML document per year. Crawling is deliberately sequential
//! and rate-limited; only the per-year rendering stage runs in parallel.

pub mod config;
pub mod crawler;
pub mod dates;
pub mod model;
pub mod render;
pub mod snapshot;

use thiserror::Error;

/// Main error type for Almanac operations
#[derive(Debug, Error)]
pub enum AlmanacError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Snapshot error: {0}")]
    Snapshot(#[from] snapshot::SnapshotError),

    #[error("Render error: {0}")]
    Render(#[from] render::RenderError),

    #[error("HTTP client error: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("URL parse error: {0}")]
    UrlParse(#[from] url::ParseError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    #[error("Invalid year list: {0}")]
    InvalidYears(String),
}

/// Result type alias for Almanac operations
pub type Result<T> = std::result::Result<T, AlmanacError>;

/// Result type alias for configuration operations
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

// Re-export commonly used types
pub use config::{Config, CrawlRequest};
pub use model::{Corpus, MonthArchive, Post, YearArchive};
