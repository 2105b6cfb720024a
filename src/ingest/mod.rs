//! Feed fetching and the ingestion pipeline.

pub mod pipeline;
pub mod source;

pub use pipeline::IngestionPipeline;
pub use source::{FeedSource, HttpFeedSource};
