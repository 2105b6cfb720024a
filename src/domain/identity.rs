//! Stable episode identity derived from an entry's best natural key.
//!
//! Feed entries have no reliable primary key across providers, so identity
//! is resolved from a prioritized list of candidates and hashed into a
//! fixed-length, filesystem-safe id. Two entries resolving to the same
//! natural key collapse to the same `episode_id` - that collapse is the
//! dedup mechanism.

use sha2::{Digest, Sha256};

use super::entry::{present, RawEntry};

/// Separator for the title+published composite fallback key
const KEY_SEPARATOR: &str = "|";

/// Resolve the natural key for an entry.
///
/// First present, non-empty candidate wins: guid, then link, then the
/// first enclosure URL, finally a `title|published` composite built from
/// the raw strings. With every field absent the composite degrades to the
/// bare separator - degenerate, but still deterministic.
pub fn natural_key(entry: &RawEntry) -> String {
    if let Some(guid) = present(entry.guid.as_deref()) {
        return guid.to_string();
    }
    if let Some(link) = present(entry.link.as_deref()) {
        return link.to_string();
    }
    if let Some(url) = entry.first_enclosure_url() {
        return url.to_string();
    }

    format!(
        "{}{}{}",
        entry.title.as_deref().unwrap_or(""),
        KEY_SEPARATOR,
        entry.published.as_deref().unwrap_or("")
    )
}

/// Derive the stable `episode_id` for an entry.
///
/// SHA-256 over the natural key, hex-encoded lowercase: fixed length,
/// safe as a filename, and stable across runs and process restarts.
pub fn episode_id(entry: &RawEntry) -> String {
    hex::encode(Sha256::digest(natural_key(entry).as_bytes()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entry::RawEnclosure;

    #[test]
    fn test_guid_wins_over_link() {
        let entry = RawEntry {
            guid: Some("g1".to_string()),
            link: Some("http://x".to_string()),
            ..Default::default()
        };
        assert_eq!(natural_key(&entry), "g1");
    }

    #[test]
    fn test_empty_guid_falls_through_to_link() {
        let entry = RawEntry {
            guid: Some(String::new()),
            link: Some("http://x".to_string()),
            ..Default::default()
        };
        assert_eq!(natural_key(&entry), "http://x");
    }

    #[test]
    fn test_enclosure_wins_when_guid_and_link_absent() {
        let entry = RawEntry {
            enclosures: vec![RawEnclosure {
                url: Some("http://ex/ep.mp3".to_string()),
            }],
            ..Default::default()
        };
        assert_eq!(natural_key(&entry), "http://ex/ep.mp3");
    }

    #[test]
    fn test_composite_fallback() {
        let entry = RawEntry {
            title: Some("Title".to_string()),
            published: Some("Mon, 02 Jan 2024 15:04:05 GMT".to_string()),
            ..Default::default()
        };
        assert_eq!(natural_key(&entry), "Title|Mon, 02 Jan 2024 15:04:05 GMT");
    }

    #[test]
    fn test_fully_empty_entry_degrades_to_separator() {
        let entry = RawEntry::default();
        assert_eq!(natural_key(&entry), "|");
        // sha256("|")
        assert_eq!(
            episode_id(&entry),
            "cbe5cfdf7c2118a9c3d78ef1d684f3afa089201352886449a06a6511cfef74a7"
        );
    }

    #[test]
    fn test_episode_id_is_stable_sha256_hex() {
        let entry = RawEntry {
            guid: Some("g1".to_string()),
            link: Some("http://x".to_string()),
            ..Default::default()
        };
        // sha256("g1") - the guid, not the link
        let expected = "711430f6164e93803d93428bc1fab80f41e213bb197689307de8606d437c3038";
        assert_eq!(episode_id(&entry), expected);
        // Pure function: repeated calls agree
        assert_eq!(episode_id(&entry), expected);
    }
}
