//! Durable state: the dedup ledger, run metadata, and per-episode
//! artifacts, all written with atomic tmp-then-rename replacement.

pub mod artifacts;
pub mod atomic;
pub mod state;

pub use artifacts::ArtifactWriter;
pub use atomic::write_json_atomic;
pub use state::{DedupLedger, RunState, StateStore};
