//! The ingestion pipeline: fetch, normalize, dedupe, order.
//!
//! Two-phase by design: first collect every not-yet-seen entry across all
//! feeds, then sort the batch, then mark everything seen. The returned
//! order is therefore stable and independent of both ledger mutation order
//! and fetch completion order.

use std::collections::HashSet;

use anyhow::Result;
use tracing::{debug, info, warn};

use crate::config::FeedConfig;
use crate::domain::EpisodeRecord;
use crate::ingest::FeedSource;
use crate::store::DedupLedger;

/// Orchestrates one ingestion pass over the configured feeds.
pub struct IngestionPipeline<S> {
    source: S,
}

impl<S: FeedSource> IngestionPipeline<S> {
    pub fn new(source: S) -> Self {
        Self { source }
    }

    /// Run one pass: fetch every configured feed, collect entries not yet
    /// in `ledger`, sort them deterministically, then mark them seen.
    ///
    /// A feed that fails to fetch or parse contributes zero entries and
    /// does not abort the run. Each resolved identity occurs at most once
    /// per run: a working set is checked alongside the ledger, so an entry
    /// cross-posted to several feeds (or repeated within one) is queued
    /// only at its first occurrence in configured order.
    pub async fn run(
        &self,
        feeds: &[FeedConfig],
        ledger: &mut DedupLedger,
    ) -> Result<Vec<EpisodeRecord>> {
        let mut batch: Vec<EpisodeRecord> = Vec::new();
        let mut queued: HashSet<String> = HashSet::new();

        for feed in feeds {
            let entries = match self.source.fetch(&feed.url).await {
                Ok(entries) => entries,
                Err(error) => {
                    warn!(feed_id = %feed.id, %error, "feed fetch failed, skipping");
                    continue;
                }
            };
            debug!(feed_id = %feed.id, entries = entries.len(), "fetched feed");

            for entry in &entries {
                let episode = EpisodeRecord::normalize(&feed.id, entry);
                if ledger.contains(&episode.episode_id) {
                    continue;
                }
                if !queued.insert(episode.episode_id.clone()) {
                    // Same identity already queued this run
                    continue;
                }
                batch.push(episode);
            }
        }

        // Total order: absent timestamps sort first (empty string), ties
        // broken by episode_id
        batch.sort_by(|a, b| sort_key(a).cmp(&sort_key(b)));

        for episode in &batch {
            ledger.record(episode.episode_id.clone(), episode.seen_record());
        }

        info!(new_episodes = batch.len(), "ingestion pass complete");
        Ok(batch)
    }
}

fn sort_key(episode: &EpisodeRecord) -> (&str, &str) {
    (
        episode.published_utc.as_deref().unwrap_or(""),
        episode.episode_id.as_str(),
    )
}
