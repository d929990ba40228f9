use crate::config::types::{Config, CrawlRequest, OutputConfig, UserAgentConfig};
use crate::ConfigError;
use url::Url;

/// Validates the entire configuration
pub fn validate(config: &Config) -> Result<(), ConfigError> {
    validate_user_agent_config(&config.user_agent)?;
    validate_output_config(&config.output)?;
    Ok(())
}

/// Validates a per-run crawl request
pub fn validate_request(request: &CrawlRequest) -> Result<(), ConfigError> {
    let url = Url::parse(&request.blog_url)
        .map_err(|e| ConfigError::InvalidUrl(format!("Invalid blog URL '{}': {}", request.blog_url, e)))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(ConfigError::InvalidUrl(format!(
            "Blog URL '{}' must use http or https",
            request.blog_url
        )));
    }

    if request.years.is_empty() {
        return Err(ConfigError::InvalidYears(
            "at least one year is required".to_string(),
        ));
    }

    for &year in &request.years {
        if !(1..=9999).contains(&year) {
            return Err(ConfigError::InvalidYears(format!(
                "year {} is out of range",
                year
            )));
        }
    }

    Ok(())
}

/// Validates user agent configuration
fn validate_user_agent_config(config: &UserAgentConfig) -> Result<(), ConfigError> {
    if config.name.is_empty() {
        return Err(ConfigError::Validation(
            "user-agent name cannot be empty".to_string(),
        ));
    }

    if !config.name.chars().all(|c| c.is_alphanumeric() || c == '-') {
        return Err(ConfigError::Validation(format!(
            "user-agent name must contain only alphanumeric characters and hyphens, got '{}'",
            config.name
        )));
    }

    if !config.contact_url.is_empty() {
        Url::parse(&config.contact_url)
            .map_err(|e| ConfigError::InvalidUrl(format!("Invalid contact-url: {}", e)))?;
    }

    Ok(())
}

/// Validates output configuration
fn validate_output_config(config: &OutputConfig) -> Result<(), ConfigError> {
    if config.snapshot_path.is_empty() {
        return Err(ConfigError::Validation(
            "snapshot-path cannot be empty".to_string(),
        ));
    }

    if config.render_dir.is_empty() {
        return Err(ConfigError::Validation(
            "render-dir cannot be empty".to_string(),
        ));
    }

    Ok(())
}
