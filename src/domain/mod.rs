//! Data structures for feed entries and canonical episodes.
//!
//! A [`RawEntry`] is whatever the feed collaborator hands us: every field
//! optional, nothing guaranteed. Normalization turns it into an
//! [`EpisodeRecord`] with a stable, content-addressed `episode_id`.

pub mod entry;
pub mod episode;
pub mod identity;
pub mod time;

pub use entry::{RawEnclosure, RawEntry};
pub use episode::{EpisodeRecord, SeenRecord};
pub use identity::episode_id;
pub use time::Published;
