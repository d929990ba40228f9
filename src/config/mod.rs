//! Configuration module for Almanac
//!
//! This module handles loading, parsing, and validating TOML configuration
//! files, plus the per-run crawl request (blog URL and target years) that
//! is collected from the command line rather than from the file.

mod parser;
mod types;
mod validation;

// Re-export types
pub use types::{Config, CrawlRequest, CrawlerConfig, OutputConfig, UserAgentConfig};

// Re-export parser and validation functions
pub use parser::load_config;
pub use validation::{validate, validate_request};
