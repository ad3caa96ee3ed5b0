use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use anyhow::Context;
use async_trait::async_trait;
use domain_workslip::{
    model::entity::DraftRecord,
    repository::{DBRepository, DraftRepo, MutableRepository, ReadOnlyRepository},
};
use serde_json::Value;
use tokio::sync::Mutex;

enum DraftChange {
    Insert(DraftRecord),
    Update(DraftRecord),
    Delete(String),
}

/// Drafts kept as a JSON array in a local file, newest first.
///
/// Changes are staged and written by `save_changed`. Reads treat an
/// unreadable file as holding no drafts and skip entries that are not
/// drafts; writes refuse an unreadable file and keep skipped entries as
/// they are.
pub struct JsonFileDraftRepo {
    path: PathBuf,
    file_lock: Mutex<()>,
    changes: Mutex<Vec<DraftChange>>,
}

fn entry_id(entry: &Value) -> Option<&str> {
    entry.get("id").and_then(Value::as_str)
}

impl JsonFileDraftRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            file_lock: Mutex::new(()),
            changes: Mutex::new(vec![]),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Stored entries as JSON values; a missing file holds none.
    async fn read_entries(&self) -> anyhow::Result<Vec<Value>> {
        let text = match tokio::fs::read_to_string(&self.path).await {
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(vec![]),
            read => read.with_context(|| format!("Read drafts from {}", self.path.display()))?,
        };
        serde_json::from_str(&text)
            .with_context(|| format!("Parse drafts file {}", self.path.display()))
    }

    async fn read(&self) -> Vec<DraftRecord> {
        let entries = self.read_entries().await.unwrap_or_else(|e| {
            tracing::warn!("Ignoring unreadable drafts: {e:#}");
            vec![]
        });
        entries
            .into_iter()
            .filter_map(|entry| {
                serde_json::from_value(entry)
                    .map_err(|e| {
                        tracing::warn!("Skipping unreadable draft in {}: {e}", self.path.display())
                    })
                    .ok()
            })
            .collect()
    }

    async fn write(&self, entries: &[Value]) -> anyhow::Result<()> {
        if let Some(parent) = self.path.parent().filter(|el| !el.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Create draft directory {}", parent.display()))?;
        }
        let staging = self.path.with_extension("json.tmp");
        tokio::fs::write(&staging, serde_json::to_vec_pretty(entries)?)
            .await
            .with_context(|| format!("Write drafts to {}", staging.display()))?;
        tokio::fs::rename(&staging, &self.path)
            .await
            .with_context(|| format!("Replace drafts file {}", self.path.display()))?;
        Ok(())
    }
}

#[async_trait]
impl ReadOnlyRepository<DraftRecord> for JsonFileDraftRepo {
    async fn get_by_id(&self, id: &str) -> anyhow::Result<Option<DraftRecord>> {
        let _guard = self.file_lock.lock().await;
        Ok(self.read().await.into_iter().find(|el| el.id() == id))
    }

    async fn get_all(&self) -> anyhow::Result<Vec<DraftRecord>> {
        let _guard = self.file_lock.lock().await;
        Ok(self.read().await)
    }
}

#[async_trait]
impl MutableRepository<DraftRecord> for JsonFileDraftRepo {
    async fn insert(&self, entity: &DraftRecord) -> anyhow::Result<String> {
        self.changes
            .lock()
            .await
            .push(DraftChange::Insert(entity.clone()));
        Ok(entity.id().to_owned())
    }

    async fn update(&self, entity: &DraftRecord) -> anyhow::Result<()> {
        self.changes
            .lock()
            .await
            .push(DraftChange::Update(entity.clone()));
        Ok(())
    }

    async fn delete_by_id(&self, id: &str) -> anyhow::Result<()> {
        self.changes
            .lock()
            .await
            .push(DraftChange::Delete(id.to_owned()));
        Ok(())
    }

    async fn save_changed(&self) -> anyhow::Result<bool> {
        let mut changes = self.changes.lock().await;
        if changes.is_empty() {
            return Ok(false);
        }
        let _guard = self.file_lock.lock().await;
        let mut entries = self.read_entries().await?;
        for change in changes.drain(..) {
            match change {
                DraftChange::Insert(draft) => entries.insert(0, serde_json::to_value(&draft)?),
                DraftChange::Update(draft) => {
                    if let Some(stored) =
                        entries.iter_mut().find(|el| entry_id(el) == Some(draft.id()))
                    {
                        *stored = serde_json::to_value(&draft)?;
                    }
                }
                DraftChange::Delete(id) => entries.retain(|el| entry_id(el) != Some(id.as_str())),
            }
        }
        self.write(&entries).await?;
        Ok(true)
    }
}

impl DBRepository<DraftRecord> for JsonFileDraftRepo {}

impl DraftRepo for JsonFileDraftRepo {}
