//! Crawl engine
//!
//! This module contains the core crawling logic:
//! - single-shot HTTP fetching
//! - pagination resolution (navigation inspection with a probing fallback)
//! - post extraction with defensive handling of missing structure
//! - month-by-month orchestration and snapshot idempotency
//!
//! Everything here degrades instead of failing: a bad fetch skips a page, a
//! malformed post is dropped, an unreadable date becomes a sentinel. The
//! only hard errors are snapshot persistence problems.

mod coordinator;
mod extractor;
mod fetcher;
mod month;
mod pagination;

pub use coordinator::{crawl, Coordinator};
pub use extractor::{extract_post, parse_post, INVALID_DATE};
pub use fetcher::{build_http_client, fetch_page, FetchOutcome};
pub use month::{crawl_month, month_base_url, post_links};
pub use pagination::{last_page_from_nav, probe_last_page, resolve_last_page};
