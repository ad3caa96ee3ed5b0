use std::{io::ErrorKind, path::PathBuf};

use anyhow::Context;
use async_trait::async_trait;
use domain_workslip::repository::SoCounterRepo;
use tokio::sync::Mutex;

/// Last issued SO number, stored as plain text.
pub struct FileSoCounterRepo {
    path: PathBuf,
    lock: Mutex<()>,
}

impl FileSoCounterRepo {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }
}

#[async_trait]
impl SoCounterRepo for FileSoCounterRepo {
    async fn load(&self) -> anyhow::Result<Option<String>> {
        let _guard = self.lock.lock().await;
        match tokio::fs::read_to_string(&self.path).await {
            Ok(text) => Ok(Some(text.trim().to_owned()).filter(|el| !el.is_empty())),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => {
                tracing::warn!("Failed to read SO counter {}: {e}", self.path.display());
                Ok(None)
            }
        }
    }

    async fn store(&self, so_number: &str) -> anyhow::Result<()> {
        let _guard = self.lock.lock().await;
        if let Some(parent) = self.path.parent().filter(|el| !el.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&self.path, so_number)
            .await
            .with_context(|| format!("Write SO counter {}", self.path.display()))
    }
}
