//! Feed configuration and canonical repository paths.
//!
//! Everything durable lives under one repository root:
//!
//! | Path | Purpose |
//! |------|---------|
//! | `config/feeds.yml` | subscribed feeds (id + url) |
//! | `state/state.json` | dedup ledger and run metadata |
//! | `artifacts/episodes/` | one JSON document per discovered episode |
//!
//! A missing, empty, or malformed feeds file is a fatal precondition:
//! the run aborts before any fetch happens.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::Deserialize;

/// One subscribed feed source
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedConfig {
    /// Stable identifier used in episode records and the ledger
    pub id: String,

    /// Feed URL handed to the fetcher
    pub url: String,
}

/// Raw feeds.yml schema (validated into `FeedConfig` after parsing)
#[derive(Debug, Deserialize)]
struct FeedsFile {
    #[serde(default)]
    feeds: Vec<FeedsFileEntry>,
}

#[derive(Debug, Deserialize)]
struct FeedsFileEntry {
    id: Option<String>,
    url: Option<String>,
}

/// Load and validate the feeds configuration under `repo_root`.
///
/// Any problem here (missing file, empty file, empty `feeds:` list, an
/// entry without `id` or `url`) aborts the whole run.
pub fn load_feeds(repo_root: &Path) -> Result<Vec<FeedConfig>> {
    let path = Paths::new(repo_root).feeds_config();
    let raw = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read feeds config: {}", path.display()))?;

    if raw.trim().is_empty() {
        bail!("config/feeds.yml is empty. Please add at least one feed.");
    }

    let parsed: FeedsFile = serde_yaml::from_str(&raw)
        .with_context(|| format!("Failed to parse feeds config: {}", path.display()))?;

    if parsed.feeds.is_empty() {
        bail!("config/feeds.yml must contain a non-empty 'feeds:' list.");
    }

    let mut out = Vec::with_capacity(parsed.feeds.len());
    for entry in parsed.feeds {
        match (entry.id, entry.url) {
            (Some(id), Some(url)) => out.push(FeedConfig { id, url }),
            _ => bail!("Each feed must be an object with 'id' and 'url'."),
        }
    }

    Ok(out)
}

/// Canonical paths under one repository root.
///
/// Single source of truth - import this instead of hardcoding paths.
#[derive(Debug, Clone)]
pub struct Paths {
    repo_root: PathBuf,
}

impl Paths {
    pub fn new(repo_root: impl Into<PathBuf>) -> Self {
        Self {
            repo_root: repo_root.into(),
        }
    }

    pub fn repo_root(&self) -> &Path {
        &self.repo_root
    }

    /// Feeds configuration file (config/feeds.yml)
    pub fn feeds_config(&self) -> PathBuf {
        self.repo_root.join("config").join("feeds.yml")
    }

    /// Durable run state document (state/state.json)
    pub fn state_file(&self) -> PathBuf {
        self.repo_root.join("state").join("state.json")
    }

    /// Per-episode artifact directory (artifacts/episodes/)
    pub fn episodes_dir(&self) -> PathBuf {
        self.repo_root.join("artifacts").join("episodes")
    }
}
