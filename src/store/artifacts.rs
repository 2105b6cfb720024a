//! Per-episode artifact documents.

use std::path::PathBuf;

use anyhow::Result;

use crate::domain::EpisodeRecord;

use super::atomic::write_json_atomic;

/// Writes one JSON document per newly discovered episode, named by its
/// `episode_id`. Writes are atomic and overwrite-idempotent.
pub struct ArtifactWriter {
    episodes_dir: PathBuf,
}

impl ArtifactWriter {
    pub fn new(episodes_dir: PathBuf) -> Self {
        Self { episodes_dir }
    }

    /// Persist one episode artifact; returns the path written.
    pub async fn write(&self, episode: &EpisodeRecord) -> Result<PathBuf> {
        let path = self
            .episodes_dir
            .join(format!("{}.json", episode.episode_id));
        write_json_atomic(&path, episode).await?;
        Ok(path)
    }
}
