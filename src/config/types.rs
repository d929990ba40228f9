use serde::Deserialize;

/// Main configuration structure for Almanac
///
/// Every section has sensible defaults, so a config file is optional and may
/// be partial. The blog URL and target years are deliberately not part of
/// the file: they arrive per run as a [`CrawlRequest`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub crawler: CrawlerConfig,
    #[serde(rename = "user-agent", default)]
    pub user_agent: UserAgentConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

/// Crawler behavior configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CrawlerConfig {
    /// Pause between month crawls (milliseconds)
    #[serde(rename = "pause-ms", default = "default_pause_ms")]
    pub pause_ms: u64,

    /// Whether to crawl month 12 as well. The historical behavior stops at
    /// month 11, so December is opt-in.
    #[serde(rename = "include-december", default)]
    pub include_december: bool,
}

/// User agent identification configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UserAgentConfig {
    /// Name of the archiver
    #[serde(default = "default_ua_name")]
    pub name: String,

    /// Version of the archiver
    #[serde(default = "default_ua_version")]
    pub version: String,

    /// URL with information about the archiver, appended to the user agent
    #[serde(rename = "contact-url", default)]
    pub contact_url: String,
}

/// Output configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct OutputConfig {
    /// Path of the corpus snapshot file. Its existence is the sole signal
    /// that a previous run completed, so re-runs load instead of crawling.
    #[serde(rename = "snapshot-path", default = "default_snapshot_path")]
    pub snapshot_path: String,

    /// Directory where per-year HTML documents are written
    #[serde(rename = "render-dir", default = "default_render_dir")]
    pub render_dir: String,
}

/// Per-run crawl target: which blog, which years
#[derive(Debug, Clone)]
pub struct CrawlRequest {
    /// Base address of the blog, without a trailing slash requirement
    pub blog_url: String,

    /// Years to archive, in the order they should appear in the corpus
    pub years: Vec<i32>,
}

fn default_pause_ms() -> u64 {
    1000
}

fn default_ua_name() -> String {
    "Almanac".to_string()
}

fn default_ua_version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

fn default_snapshot_path() -> String {
    "blog_data.json".to_string()
}

fn default_render_dir() -> String {
    ".".to_string()
}

impl Default for CrawlerConfig {
    fn default() -> Self {
        Self {
            pause_ms: default_pause_ms(),
            include_december: false,
        }
    }
}

impl Default for UserAgentConfig {
    fn default() -> Self {
        Self {
            name: default_ua_name(),
            version: default_ua_version(),
            contact_url: String::new(),
        }
    }
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            render_dir: default_render_dir(),
        }
    }
}
