//! JSON file store.
//!
//! The file is a UTF-8 JSON array of events, pretty-printed with four-space
//! indentation and non-ASCII text left unescaped. Saves go through a temp
//! file in the same directory that is renamed over the target, so readers
//! see either the old or the new collection, never a partial one.

use async_trait::async_trait;
use serde::Serialize;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info};

use crate::error::{Result, TrackerError};
use crate::traits::store::EventStore;
use crate::types::LayoffEvent;

/// Default location of the published dataset.
pub const DEFAULT_STORE_PATH: &str = "data/layoffs.json";

/// Store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl EventStore for JsonFileStore {
    async fn load(&self) -> Result<Vec<LayoffEvent>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No event store yet, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e.into()),
        };

        if raw.trim().is_empty() {
            return Ok(Vec::new());
        }

        let events: Vec<LayoffEvent> =
            serde_json::from_str(&raw).map_err(|source| TrackerError::CorruptStore {
                path: self.path.clone(),
                source,
            })?;

        debug!(path = %self.path.display(), count = events.len(), "Loaded event store");
        Ok(events)
    }

    async fn save(&self, events: &[LayoffEvent]) -> Result<()> {
        let bytes = to_pretty_json(events)?;
        let path = self.path.clone();

        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(std::io::Error::other)??;

        info!(path = %self.path.display(), count = events.len(), "Saved event store");
        Ok(())
    }
}

/// Render events the way the store file holds them (trailing newline included).
pub fn to_pretty_json(events: &[LayoffEvent]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let mut ser = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    events.serialize(&mut ser)?;
    buf.push(b'\n');
    Ok(buf)
}

fn write_atomically(path: &Path, bytes: &[u8]) -> Result<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)?;

    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(bytes)?;
    tmp.as_file().sync_all()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}
