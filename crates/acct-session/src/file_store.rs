//! Key-value store backed by a single JSON object file.
//!
//! Every write replaces the whole file using the atomic write pattern:
//!
//! 1. Write to a temp file next to the target
//! 2. Sync to disk (fsync)
//! 3. Rename over the target
//!
//! A missing file is an empty store. A file that fails to parse is renamed
//! to `<name>.corrupted.<timestamp>` and the store starts empty.

use crate::{KeyValueStore, Result as SessionResult, SessionError};

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use log::{debug, warn};
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

const DATE_FORMAT: &str = "%Y%m%d_%H%M%S";

pub struct FileKeyValueStore {
    path: PathBuf,
    // Serializes read-modify-write cycles
    write_lock: Mutex<()>,
}

impl FileKeyValueStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_entries(&self) -> SessionResult<BTreeMap<String, String>> {
        let contents = match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(SessionError::file_read(self.path.clone(), e)),
        };

        match serde_json::from_str::<BTreeMap<String, String>>(&contents) {
            Ok(entries) => Ok(entries),
            Err(e) => {
                warn!("Session file corrupted at {:?}: {e}", self.path);
                self.backup_corrupted().await?;
                Ok(BTreeMap::new())
            }
        }
    }

    async fn write_entries(&self, entries: &BTreeMap<String, String>) -> SessionResult<()> {
        if let Some(dir) = self.path.parent()
            && !dir.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| SessionError::dir_creation(dir.to_path_buf(), e))?;
        }

        let temp_path = self.sibling(&format!("tmp.{}", std::process::id()));
        let json = serde_json::to_string_pretty(entries)?;

        {
            let mut file = tokio::fs::File::create(&temp_path)
                .await
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.write_all(json.as_bytes())
                .await
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;

            file.sync_all()
                .await
                .map_err(|e| SessionError::file_write(temp_path.clone(), e))?;
        }

        if let Err(e) = tokio::fs::rename(&temp_path, &self.path).await {
            let _ = tokio::fs::remove_file(&temp_path).await;
            return Err(SessionError::atomic_rename(temp_path, self.path.clone(), e));
        }

        debug!("Saved {} session entries to {:?}", entries.len(), self.path);
        Ok(())
    }

    async fn backup_corrupted(&self) -> SessionResult<PathBuf> {
        let timestamp = chrono::Utc::now().format(DATE_FORMAT);
        let backup_path = self.sibling(&format!("corrupted.{timestamp}"));

        tokio::fs::rename(&self.path, &backup_path)
            .await
            .map_err(SessionError::backup_failed)?;

        warn!("Backed up corrupted session file to {backup_path:?}");
        Ok(backup_path)
    }

    /// `<file name>.<suffix>` in the same directory
    fn sibling(&self, suffix: &str) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "session".to_string());
        self.path.with_file_name(format!("{name}.{suffix}"))
    }
}

#[async_trait]
impl KeyValueStore for FileKeyValueStore {
    async fn get(&self, key: &str) -> SessionResult<Option<String>> {
        let _guard = self.write_lock.lock().await;
        Ok(self.read_entries().await?.remove(key))
    }

    async fn set(&self, key: &str, value: &str) -> SessionResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        entries.insert(key.to_string(), value.to_string());
        self.write_entries(&entries).await
    }

    async fn remove(&self, key: &str) -> SessionResult<()> {
        let _guard = self.write_lock.lock().await;
        let mut entries = self.read_entries().await?;
        if entries.remove(key).is_some() {
            self.write_entries(&entries).await?;
        }
        Ok(())
    }
}
