//! Canonical episode records and their compact ledger form.

use serde::{Deserialize, Serialize};

use super::entry::RawEntry;
use super::identity;
use super::time::Published;

/// One normalized episode, as persisted in per-episode artifacts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EpisodeRecord {
    /// Content-addressed identity, stable across runs
    pub episode_id: String,

    /// Owning feed's configured id
    pub feed_id: String,

    pub guid: Option<String>,
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,

    /// First enclosure's reference URL, if any
    pub enclosure_url: Option<String>,

    /// ISO-8601 UTC timestamp, or None when missing/unparseable
    pub published_utc: Option<String>,
}

impl EpisodeRecord {
    /// Normalize one raw entry for its owning feed.
    ///
    /// Pure and infallible: absent fields stay absent, never an error.
    pub fn normalize(feed_id: &str, entry: &RawEntry) -> Self {
        Self {
            episode_id: identity::episode_id(entry),
            feed_id: feed_id.to_string(),
            guid: entry.guid.clone(),
            title: entry.title.clone(),
            link: entry.link.clone(),
            summary: entry.summary.clone(),
            enclosure_url: entry.first_enclosure_url().map(str::to_string),
            published_utc: Published::from_entry(entry).to_iso8601(),
        }
    }

    /// The compact summary stored in the dedup ledger.
    pub fn seen_record(&self) -> SeenRecord {
        SeenRecord {
            feed_id: self.feed_id.clone(),
            title: self.title.clone(),
            link: self.link.clone(),
            published_utc: self.published_utc.clone(),
        }
    }
}

/// Ledger value: enough to recognize an episode, not the full artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeenRecord {
    pub feed_id: String,
    pub title: Option<String>,
    pub link: Option<String>,
    pub published_utc: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::RawEnclosure;

    fn sample_entry() -> RawEntry {
        RawEntry {
            guid: Some("ep-42".to_string()),
            link: Some("https://show.example/42".to_string()),
            title: Some("Episode 42".to_string()),
            published: Some("Mon, 02 Jan 2024 15:04:05 GMT".to_string()),
            summary: Some("The answer.".to_string()),
            enclosures: vec![RawEnclosure {
                url: Some("https://cdn.example/42.mp3".to_string()),
            }],
            ..Default::default()
        }
    }

    #[test]
    fn test_normalize_passthrough() {
        let episode = EpisodeRecord::normalize("show", &sample_entry());

        assert_eq!(episode.feed_id, "show");
        assert_eq!(episode.guid.as_deref(), Some("ep-42"));
        assert_eq!(episode.title.as_deref(), Some("Episode 42"));
        assert_eq!(
            episode.enclosure_url.as_deref(),
            Some("https://cdn.example/42.mp3")
        );
        assert_eq!(
            episode.published_utc.as_deref(),
            Some("2024-01-02T15:04:05+00:00")
        );
        assert_eq!(episode.episode_id.len(), 64);
    }

    #[test]
    fn test_normalize_empty_entry_still_succeeds() {
        let episode = EpisodeRecord::normalize("show", &RawEntry::default());

        assert!(episode.guid.is_none());
        assert!(episode.published_utc.is_none());
        assert_eq!(episode.episode_id.len(), 64);
    }

    #[test]
    fn test_seen_record_is_compact_projection() {
        let episode = EpisodeRecord::normalize("show", &sample_entry());
        let seen = episode.seen_record();

        assert_eq!(seen.feed_id, episode.feed_id);
        assert_eq!(seen.title, episode.title);
        assert_eq!(seen.link, episode.link);
        assert_eq!(seen.published_utc, episode.published_utc);
    }
}
