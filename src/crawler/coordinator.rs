//! Crawl coordination
//!
//! The coordinator walks every requested year month by month, strictly
//! sequentially, pausing between months to keep the request rate down.
//! Before doing any of that it checks the snapshot store: an existing
//! snapshot is loaded and returned verbatim, with zero network fetches.

use crate::config::{validate_request, Config, CrawlRequest};
use crate::crawler::fetcher::build_http_client;
use crate::crawler::month::crawl_month;
use crate::model::{Corpus, YearArchive};
use crate::snapshot::SnapshotStore;
use crate::AlmanacError;
use reqwest::Client;
use std::ops::RangeInclusive;
use std::time::Duration;

/// Drives the crawl of a whole corpus
pub struct Coordinator {
    config: Config,
    request: CrawlRequest,
    client: Client,
    store: SnapshotStore,
}

impl Coordinator {
    /// Creates a coordinator for one crawl request
    pub fn new(config: Config, request: CrawlRequest) -> Result<Self, AlmanacError> {
        validate_request(&request)?;

        let client = build_http_client(&config.user_agent)?;
        let store = SnapshotStore::new(&config.output.snapshot_path);

        Ok(Self {
            config,
            request,
            client,
            store,
        })
    }

    /// Loads the existing snapshot, or builds and persists a new corpus
    ///
    /// The snapshot is written exactly once, after every requested year has
    /// been crawled. An interruption before that point loses the run's
    /// progress and the next run starts over.
    pub async fn run(&self) -> Result<Corpus, AlmanacError> {
        if self.store.exists() {
            tracing::info!(
                "Snapshot {} already exists, loading it instead of crawling",
                self.store.path().display()
            );
            return Ok(self.store.load()?);
        }

        if !self.config.crawler.include_december {
            // Historical behavior; see include-december in the config.
            tracing::warn!("Month 12 is excluded from the crawl; set include-december to cover it");
        }

        let pause = Duration::from_millis(self.config.crawler.pause_ms);
        let mut corpus = Corpus::default();

        for &year in &self.request.years {
            let mut months = Vec::new();

            for month in self.month_range() {
                tracing::info!("Crawling {} for {}/{:02}", self.request.blog_url, year, month);
                let archive = crawl_month(&self.client, &self.request.blog_url, year, month).await;
                tracing::info!("{}/{:02}: {} post(s)", year, month, archive.posts.len());
                months.push(archive);

                // Pause between months to avoid overloading the server
                tokio::time::sleep(pause).await;
            }

            corpus.years.push(YearArchive { year, months });
        }

        self.store.save(&corpus)?;
        tracing::info!("Snapshot written to {}", self.store.path().display());

        Ok(corpus)
    }

    fn month_range(&self) -> RangeInclusive<u32> {
        if self.config.crawler.include_december {
            1..=12
        } else {
            1..=11
        }
    }
}

/// Crawls a blog for posts in the requested years
///
/// Convenience wrapper over [`Coordinator`].
pub async fn crawl(config: Config, request: CrawlRequest) -> Result<Corpus, AlmanacError> {
    Coordinator::new(config, request)?.run().await
}
