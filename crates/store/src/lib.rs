pub mod repo;

use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::debug;

pub const SHOWS_FILE: &str = "shows.json";
pub const FILMS_FILE: &str = "films.json";

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("failed to read {}: {reason}", path.display())]
    Read { path: PathBuf, reason: String },
    #[error("failed to write {}: {reason}", path.display())]
    Write { path: PathBuf, reason: String },
}

/// Handle on the two JSON documents backing the watchlist.
///
/// Paths are resolved by the caller; the store never guesses where its
/// files live.
#[derive(Debug, Clone)]
pub struct JsonStore {
    shows_path: PathBuf,
    films_path: PathBuf,
}

impl JsonStore {
    pub fn new(shows_path: impl Into<PathBuf>, films_path: impl Into<PathBuf>) -> Self {
        Self {
            shows_path: shows_path.into(),
            films_path: films_path.into(),
        }
    }

    /// `shows.json` and `films.json` inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self::new(dir.join(SHOWS_FILE), dir.join(FILMS_FILE))
    }

    pub fn shows_path(&self) -> &Path {
        &self.shows_path
    }

    pub fn films_path(&self) -> &Path {
        &self.films_path
    }
}

pub(crate) async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    let read_err = |reason: String| StoreError::Read {
        path: path.to_path_buf(),
        reason,
    };

    let raw = fs::read(path).await.map_err(|e| read_err(e.to_string()))?;
    let value = serde_json::from_slice(&raw).map_err(|e| read_err(format!("invalid json: {e}")))?;
    debug!(path = %path.display(), bytes = raw.len(), "document loaded");
    Ok(value)
}

/// Serialize `value` next to `path` and rename it into place, so readers see
/// either the old document or the new one.
pub(crate) async fn write_json_atomic<T: Serialize + ?Sized>(
    path: &Path,
    value: &T,
) -> Result<(), StoreError> {
    let write_err = |reason: String| StoreError::Write {
        path: path.to_path_buf(),
        reason,
    };

    let mut raw =
        serde_json::to_vec_pretty(value).map_err(|e| write_err(format!("serialize: {e}")))?;
    raw.push(b'\n');

    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let tmp_name = format!(".{stem}-{}.json.tmp", uuid::Uuid::new_v4());
    let tmp_path = dir.join(tmp_name);

    if let Err(e) = write_synced(&tmp_path, &raw).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(write_err(format!("temp file {}: {e}", tmp_path.display())));
    }
    if let Err(e) = fs::rename(&tmp_path, path).await {
        let _ = fs::remove_file(&tmp_path).await;
        return Err(write_err(format!("rename {}: {e}", tmp_path.display())));
    }

    debug!(path = %path.display(), bytes = raw.len(), "document written");
    Ok(())
}

async fn write_synced(path: &Path, raw: &[u8]) -> std::io::Result<()> {
    let mut file = fs::File::create(path).await?;
    file.write_all(raw).await?;
    file.sync_all().await
}
