//! Run state: the dedup ledger plus run metadata, persisted as a single
//! JSON document.
//!
//! The document is the sole unit of durable truth for a run. It is loaded
//! once, mutated in place by the pipeline, and written back atomically at
//! the end. Missing keys in a parseable document are backfilled with
//! defaults rather than treated as errors.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tokio::fs;

use crate::domain::SeenRecord;

use super::atomic::write_json_atomic;

/// Mapping of previously seen episode identities.
///
/// Append-only by semantics: entries are inserted or overwritten, never
/// evicted. Grows monotonically across runs (pruning is out of scope).
/// BTreeMap-backed so persisted keys stay sorted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DedupLedger {
    entries: BTreeMap<String, SeenRecord>,
}

impl DedupLedger {
    pub fn contains(&self, episode_id: &str) -> bool {
        self.entries.contains_key(episode_id)
    }

    /// Insert or overwrite. Recording the same id twice is a no-op in effect.
    pub fn record(&mut self, episode_id: String, seen: SeenRecord) {
        self.entries.insert(episode_id, seen);
    }

    pub fn get(&self, episode_id: &str) -> Option<&SeenRecord> {
        self.entries.get(episode_id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The persisted state document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunState {
    /// Previously seen episodes, keyed by episode_id
    #[serde(default)]
    pub episodes_seen: DedupLedger,

    /// When the last run finished (ISO-8601 UTC), if ever
    #[serde(default)]
    pub last_run_utc: Option<String>,

    /// Document format version
    #[serde(default = "default_version")]
    pub version: u32,
}

fn default_version() -> u32 {
    1
}

impl Default for RunState {
    fn default() -> Self {
        Self {
            episodes_seen: DedupLedger::default(),
            last_run_utc: None,
            version: default_version(),
        }
    }
}

/// Loads and saves the state document at a fixed path.
pub struct StateStore {
    path: PathBuf,
}

impl StateStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Load the persisted state, or a default document when no file
    /// exists or the stored content is empty.
    pub async fn load(&self) -> Result<RunState> {
        if !self.path.exists() {
            return Ok(RunState::default());
        }

        let raw = fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read state file: {}", self.path.display()))?;

        if raw.trim().is_empty() {
            return Ok(RunState::default());
        }

        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse state file: {}", self.path.display()))
    }

    /// Write the full document back, replacing prior content atomically.
    pub async fn save(&self, state: &RunState) -> Result<()> {
        write_json_atomic(&self.path, state).await
    }
}
