//! The feed-fetching collaborator.
//!
//! Wire transport and XML parsing live behind the [`FeedSource`] trait;
//! the pipeline only ever sees loosely-typed [`RawEntry`] values. The
//! default implementation does a plain HTTP GET and parses the body as
//! RSS, keeping the raw timestamp strings for the time normalizer.

use anyhow::{Context, Result};
use async_trait::async_trait;

use crate::domain::{RawEnclosure, RawEntry};

/// Trait for fetching one feed's entries.
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch and parse the feed at `url`.
    ///
    /// A feed yielding zero entries is a valid result, not an error.
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>>;
}

/// HTTP + RSS implementation of [`FeedSource`].
pub struct HttpFeedSource {
    client: reqwest::Client,
}

impl HttpFeedSource {
    pub fn new() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl Default for HttpFeedSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl FeedSource for HttpFeedSource {
    async fn fetch(&self, url: &str) -> Result<Vec<RawEntry>> {
        let body = self
            .client
            .get(url)
            .send()
            .await
            .with_context(|| format!("Failed to fetch feed: {}", url))?
            .error_for_status()
            .with_context(|| format!("Feed returned error status: {}", url))?
            .bytes()
            .await
            .with_context(|| format!("Failed to read feed body: {}", url))?;

        let channel = rss::Channel::read_from(&body[..])
            .with_context(|| format!("Failed to parse feed XML: {}", url))?;

        Ok(channel.items().iter().map(raw_entry_from_item).collect())
    }
}

/// Map one RSS item into the loosely-typed entry shape.
fn raw_entry_from_item(item: &rss::Item) -> RawEntry {
    RawEntry {
        guid: item.guid().map(|g| g.value().to_string()),
        link: item.link().map(str::to_string),
        title: item.title().map(str::to_string),
        published: item.pub_date().map(str::to_string),
        // RSS has no item-level updated field; Dublin Core date is the
        // closest thing some feeds provide
        updated: item
            .dublin_core_ext()
            .and_then(|dc| dc.dates().first())
            .cloned(),
        summary: item.description().map(str::to_string),
        enclosures: item
            .enclosure()
            .map(|e| {
                vec![RawEnclosure {
                    url: Some(e.url().to_string()),
                }]
            })
            .unwrap_or_default(),
    }
}
