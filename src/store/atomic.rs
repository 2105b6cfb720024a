//! Atomic JSON writes.
//!
//! Every durable document is written in full to a `.tmp` sibling and then
//! renamed over the destination. A reader therefore always observes either
//! the prior complete document or the new one, even if the process is
//! killed mid-write. On a failed write the `.tmp` file may be left behind
//! as a diagnostic; the prior document stays intact because the rename
//! never ran.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use tokio::fs;

/// Serialize `value` and atomically replace `path` with it.
///
/// Output is pretty-printed with sorted keys and a trailing newline, so
/// persisted documents diff cleanly. Parent directories are created on
/// demand.
pub async fn write_json_atomic<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .await
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    // Routing through Value sorts object keys regardless of struct field order
    let value = serde_json::to_value(value).context("Failed to serialize document")?;
    let mut body = serde_json::to_string_pretty(&value).context("Failed to render document")?;
    body.push('\n');

    let tmp = tmp_sibling(path);
    fs::write(&tmp, body)
        .await
        .with_context(|| format!("Failed to write temp file: {}", tmp.display()))?;
    fs::rename(&tmp, path)
        .await
        .with_context(|| format!("Failed to replace: {}", path.display()))?;

    Ok(())
}

/// The temporary sibling for `path` (`state.json` -> `state.json.tmp`).
fn tmp_sibling(path: &Path) -> PathBuf {
    let mut name = path.as_os_str().to_os_string();
    name.push(".tmp");
    PathBuf::from(name)
}
