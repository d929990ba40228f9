//! Pagination resolution
//!
//! Listings don't advertise how many pages they span, so the last page is
//! discovered two ways: by inspecting the pagination navigation on the
//! first page, and when that fails, by probing `/page/{n}/` addresses until
//! one stops answering. A concrete navigation result is trusted as-is; the
//! probe only runs when navigation yields nothing.

use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use reqwest::Client;
use scraper::{Html, Selector};

/// Reads the last page number out of the pagination navigation
///
/// WordPress-style markup: a `nav.navigation.pagination` element holding
/// `a.page-numbers` links, optionally with a `span.page-numbers.dots` gap
/// marker. With a gap, the true last page is the first link after it in
/// document order (the links before the gap are the low pages); without
/// one, it is the last link. The page number is the trailing `/page/N/`
/// segment of the link's address.
///
/// Returns `None` when the navigation is absent or unparseable. That is
/// "unknown", which is distinct from a listing with zero pages.
pub fn last_page_from_nav(html: &str) -> Option<u32> {
    let document = Html::parse_document(html);

    let nav_selector = Selector::parse("nav.navigation.pagination").ok()?;
    let nav = document.select(&nav_selector).next()?;

    let entry_selector = Selector::parse("a.page-numbers, span.page-numbers.dots").ok()?;

    let mut seen_dots = false;
    let mut first_after_dots = None;
    let mut last_link = None;

    for element in nav.select(&entry_selector) {
        if element.value().name() == "span" {
            seen_dots = true;
            continue;
        }
        if seen_dots && first_after_dots.is_none() {
            first_after_dots = Some(element);
        }
        last_link = Some(element);
    }

    let link = first_after_dots.or(last_link)?;
    page_number_from_href(link.value().attr("href")?)
}

/// Parses the trailing `/page/N/` segment of a pagination link address
fn page_number_from_href(href: &str) -> Option<u32> {
    let (_, tail) = href.rsplit_once("/page/")?;
    tail.trim_matches('/').parse().ok()
}

/// Fallback: probes pages upward until one fails to fetch
///
/// Returns the last page that answered, 0 when even page 1 fails. Always
/// terminates with a concrete number, bounded by the first non-ok response.
pub async fn probe_last_page(client: &Client, base_url: &str) -> u32 {
    tracing::debug!("Probing {} for its last page", base_url);

    let mut page = 1;
    loop {
        let page_url = format!("{}/page/{}/", base_url, page);
        if !fetch_page(client, &page_url).await.is_ok() {
            break;
        }
        page += 1;
    }

    page - 1
}

/// Resolves the last page of a listing
///
/// Navigation inspection first; the probe runs only when that yields
/// unknown. A concrete navigation answer is never cross-checked against
/// the probe.
pub async fn resolve_last_page(client: &Client, base_url: &str) -> u32 {
    match fetch_page(client, base_url).await {
        FetchOutcome::Success { body } => {
            if let Some(last_page) = last_page_from_nav(&body) {
                tracing::debug!("Last page of {} from navigation: {}", base_url, last_page);
                return last_page;
            }
            tracing::debug!("No usable pagination navigation on {}", base_url);
        }
        FetchOutcome::Failed { status, error } => {
            tracing::warn!(
                "Failed to fetch listing {} (status {:?}): {}",
                base_url,
                status,
                error
            );
        }
    }

    probe_last_page(client, base_url).await
}
