//! Command-line interface for podsift.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{SecondsFormat, Utc};
use clap::{Parser, Subcommand};

use crate::config::{load_feeds, Paths};
use crate::domain::EpisodeRecord;
use crate::ingest::{FeedSource, HttpFeedSource, IngestionPipeline};
use crate::store::{ArtifactWriter, StateStore};

/// podsift - Podcast feed ingestion with durable deduplication
#[derive(Parser, Debug)]
#[command(name = "podsift")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch feeds, dedupe against state, write episode artifacts
    Ingest {
        /// Path to the repo root (holds config/, state/, artifacts/)
        #[arg(long, default_value = ".")]
        repo_root: PathBuf,
    },
}

impl Cli {
    /// Execute the CLI command
    pub async fn execute(self) -> Result<()> {
        match self.command {
            Commands::Ingest { repo_root } => {
                let paths = Paths::new(repo_root);
                let new_episodes = run_ingest(&paths, HttpFeedSource::new()).await?;

                println!("New episodes: {}", new_episodes.len());
                for episode in &new_episodes {
                    println!(
                        "- {} | {} | {}",
                        episode.episode_id,
                        episode.feed_id,
                        episode.title.as_deref().unwrap_or("")
                    );
                }
                Ok(())
            }
        }
    }
}

/// One full ingestion run: load state, discover new episodes, persist
/// artifacts and updated state.
///
/// State is threaded explicitly (load -> run -> save); the document on
/// disk is replaced atomically only after the run completes, so an
/// interrupted run leaves the prior state intact.
pub async fn run_ingest<S: FeedSource>(paths: &Paths, source: S) -> Result<Vec<EpisodeRecord>> {
    let feeds = load_feeds(paths.repo_root())?;

    let store = StateStore::new(paths.state_file());
    let mut state = store.load().await?;

    let pipeline = IngestionPipeline::new(source);
    let new_episodes = pipeline.run(&feeds, &mut state.episodes_seen).await?;

    let writer = ArtifactWriter::new(paths.episodes_dir());
    for episode in &new_episodes {
        writer.write(episode).await?;
    }

    state.last_run_utc = Some(Utc::now().to_rfc3339_opts(SecondsFormat::Secs, false));
    store.save(&state).await?;

    Ok(new_episodes)
}
