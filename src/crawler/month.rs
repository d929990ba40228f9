//! Month crawling
//!
//! A month's listing lives at `{blog}/{year}/{month:02}` and may span
//! several pages. Pages are walked from the last one down to page 1, and
//! the post headings on each page are processed in reverse document order,
//! so the oldest posts of the month land first in the record. The combined
//! order is a preserved quirk, not strictly chronological.

use crate::crawler::extractor::extract_post;
use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::crawler::pagination::resolve_last_page;
use crate::model::MonthArchive;
use reqwest::Client;
use scraper::{Html, Selector};

/// Builds the month listing address: `{blog}/{year}/{month:02}`
pub fn month_base_url(blog_url: &str, year: i32, month: u32) -> String {
    format!("{}/{}/{:02}", blog_url.trim_end_matches('/'), year, month)
}

/// Collects post addresses from a listing page, in document order
///
/// Posts are announced by `h2.entry-title` headings wrapping a link.
/// Headings without a link are skipped.
pub fn post_links(html: &str) -> Vec<String> {
    let document = Html::parse_document(html);

    let Ok(heading_selector) = Selector::parse("h2.entry-title") else {
        return Vec::new();
    };
    let Ok(link_selector) = Selector::parse("a") else {
        return Vec::new();
    };

    document
        .select(&heading_selector)
        .filter_map(|heading| {
            heading
                .select(&link_selector)
                .next()
                .and_then(|a| a.value().attr("href"))
                .map(|href| href.to_string())
        })
        .collect()
}

/// Crawls one month of the blog
///
/// Fetch failures skip the affected page; extraction failures skip the
/// affected post. A month never fails as a whole.
pub async fn crawl_month(client: &Client, blog_url: &str, year: i32, month: u32) -> MonthArchive {
    let base_url = month_base_url(blog_url, year, month);
    let last_page = resolve_last_page(client, &base_url).await;
    tracing::info!("{} spans {} page(s)", base_url, last_page);

    let mut posts = Vec::new();

    for page in (1..=last_page).rev() {
        let page_url = format!("{}/page/{}/", base_url, page);
        tracing::debug!("Processing {}", page_url);

        let body = match fetch_page(client, &page_url).await {
            FetchOutcome::Success { body } => body,
            FetchOutcome::Failed { status, error } => {
                tracing::warn!(
                    "Skipping page {} (status {:?}): {}",
                    page_url,
                    status,
                    error
                );
                continue;
            }
        };

        let links = post_links(&body);
        for link in links.iter().rev() {
            tracing::debug!("Found post {}", link);
            if let Some(post) = extract_post(client, link).await {
                posts.push(post);
            }
        }
    }

    MonthArchive { month, posts }
}
