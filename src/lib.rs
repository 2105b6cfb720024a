//! podsift - Podcast feed ingestion with durable deduplication
//!
//! Ingests a configured set of RSS feeds, derives a stable identity for
//! every entry, and reconciles it against previously seen state so that
//! repeated runs are idempotent and safe under interruption.
//!
//! # Architecture
//!
//! - Every feed entry is normalized into a canonical [`EpisodeRecord`]
//!   whose `episode_id` is a content-addressed hash of its best natural key
//! - The dedup ledger is an explicit value threaded through a run
//!   (load -> run -> save), never ambient state
//! - All durable documents are written with atomic tmp-then-rename
//!   replacement, so a killed run never corrupts state
//!
//! # Modules
//!
//! - `config`: feeds.yml loader and canonical repo paths
//! - `domain`: RawEntry, EpisodeRecord, identity and time normalization
//! - `ingest`: the FeedSource collaborator and the ingestion pipeline
//! - `store`: durable state, artifacts, and the atomic write discipline
//! - `cli`: command-line interface
//!
//! # Usage
//!
//! ```bash
//! # Fetch feeds, dedupe against state/state.json, write artifacts
//! podsift ingest --repo-root .
//! ```

pub mod cli;
pub mod config;
pub mod domain;
pub mod ingest;
pub mod store;

// Re-export main types at crate root for convenience
pub use config::{load_feeds, FeedConfig, Paths};
pub use domain::{EpisodeRecord, Published, RawEnclosure, RawEntry, SeenRecord};
pub use ingest::{FeedSource, HttpFeedSource, IngestionPipeline};
pub use store::{ArtifactWriter, DedupLedger, RunState, StateStore};
