//! HTTP fetcher
//!
//! One GET per call, no retries. Any non-2xx status or transport error is
//! reported as a [`FetchOutcome::Failed`] for the caller to skip over;
//! fetching never escalates into an error return.

use crate::config::UserAgentConfig;
use reqwest::Client;
use std::time::Duration;

/// Result of a single page fetch
#[derive(Debug)]
pub enum FetchOutcome {
    /// The page was fetched with a 2xx status
    Success {
        /// Raw response body
        body: String,
    },

    /// The fetch did not succeed
    Failed {
        /// HTTP status, when a response arrived at all
        status: Option<u16>,
        /// Diagnostic description
        error: String,
    },
}

impl FetchOutcome {
    pub fn is_ok(&self) -> bool {
        matches!(self, FetchOutcome::Success { .. })
    }
}

/// Builds the HTTP client used for the whole crawl
///
/// The user agent is `Name/Version`, with the contact URL appended when
/// configured.
pub fn build_http_client(config: &UserAgentConfig) -> Result<Client, reqwest::Error> {
    let user_agent = if config.contact_url.is_empty() {
        format!("{}/{}", config.name, config.version)
    } else {
        format!("{}/{} (+{})", config.name, config.version, config.contact_url)
    };

    Client::builder()
        .user_agent(user_agent)
        .timeout(Duration::from_secs(30))
        .connect_timeout(Duration::from_secs(10))
        .gzip(true)
        .brotli(true)
        .build()
}

/// Fetches a single URL
pub async fn fetch_page(client: &Client, url: &str) -> FetchOutcome {
    tracing::debug!("GET {}", url);

    match client.get(url).send().await {
        Ok(response) => {
            let status = response.status();
            if !status.is_success() {
                return FetchOutcome::Failed {
                    status: Some(status.as_u16()),
                    error: format!("HTTP {}", status.as_u16()),
                };
            }

            match response.text().await {
                Ok(body) => FetchOutcome::Success { body },
                Err(e) => FetchOutcome::Failed {
                    status: Some(status.as_u16()),
                    error: format!("Failed to read body: {}", e),
                },
            }
        }
        Err(e) => {
            let error = if e.is_timeout() {
                "Request timeout".to_string()
            } else if e.is_connect() {
                "Connection failed".to_string()
            } else {
                e.to_string()
            };
            FetchOutcome::Failed {
                status: None,
                error,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_build_http_client() {
        let config = UserAgentConfig::default();
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_build_http_client_with_contact_url() {
        let config = UserAgentConfig {
            name: "TestArchiver".to_string(),
            version: "1.0".to_string(),
            contact_url: "https://example.com/about".to_string(),
        };
        assert!(build_http_client(&config).is_ok());
    }

    #[test]
    fn test_outcome_is_ok() {
        let ok = FetchOutcome::Success {
            body: String::new(),
        };
        let failed = FetchOutcome::Failed {
            status: Some(404),
            error: "HTTP 404".to_string(),
        };
        assert!(ok.is_ok());
        assert!(!failed.is_ok());
    }
}
