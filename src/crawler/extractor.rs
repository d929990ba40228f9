//! Post extraction
//!
//! Turns a single post page into a [`Post`] record, or nothing. Every
//! structural requirement (title heading, article container, entry-content
//! region) is a hard precondition: when one is missing the post is dropped
//! with a diagnostic, never emitted half-filled. The date is the one field
//! allowed to degrade instead, down to the `"Invalid date"` sentinel.

use crate::crawler::fetcher::{fetch_page, FetchOutcome};
use crate::dates;
use crate::model::Post;
use reqwest::Client;
use scraper::{Html, Selector};

/// Sentinel stored when the raw date text cannot be normalized
pub const INVALID_DATE: &str = "Invalid date";

/// Fetches a post page and extracts its record
///
/// Returns `None` on fetch failure or when the page lacks the expected
/// structure; the caller moves on to the next post.
pub async fn extract_post(client: &Client, url: &str) -> Option<Post> {
    match fetch_page(client, url).await {
        FetchOutcome::Success { body } => parse_post(&body, url),
        FetchOutcome::Failed { status, error } => {
            tracing::warn!(
                "Failed to fetch post {} (status {:?}): {}",
                url,
                status,
                error
            );
            None
        }
    }
}

/// Extracts a post record from already-fetched markup
pub fn parse_post(html: &str, url: &str) -> Option<Post> {
    let document = Html::parse_document(html);

    // The date may be absent; everything else may not.
    let time_selector = Selector::parse("time").ok()?;
    let raw_date = document
        .select(&time_selector)
        .next()
        .map(|el| el.text().collect::<String>().trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "No date".to_string());

    let title_selector = Selector::parse("h1.entry-title").ok()?;
    let title = match document.select(&title_selector).next() {
        Some(el) => el.text().collect::<String>().trim().to_string(),
        None => {
            tracing::warn!("Missing entry-title heading for {}", url);
            return None;
        }
    };
    if title.is_empty() {
        tracing::warn!("Empty entry-title heading for {}", url);
        return None;
    }

    let article_selector = Selector::parse("article").ok()?;
    let Some(article) = document.select(&article_selector).next() else {
        tracing::warn!("Missing article element for {}", url);
        return None;
    };

    let content_selector = Selector::parse("div.entry-content").ok()?;
    let Some(content_div) = article.select(&content_selector).next() else {
        tracing::warn!("Missing entry-content for {}", url);
        return None;
    };

    let fragment_selector = Selector::parse("p, img").ok()?;
    let content: Vec<String> = content_div
        .select(&fragment_selector)
        .map(|el| el.html())
        .collect();
    if content.is_empty() {
        tracing::warn!("Empty entry-content for {}", url);
        return None;
    }

    let date = match dates::normalize(&raw_date) {
        Some(formatted) => formatted,
        None => {
            tracing::warn!("Unparseable date '{}' on {}", raw_date, url);
            INVALID_DATE.to_string()
        }
    };

    Some(Post {
        date,
        title,
        content,
        url: url.to_string(),
    })
}
