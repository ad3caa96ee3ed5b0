use std::path::PathBuf;

use serde::Deserialize;

/// Settings of a client installation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ClientConfig {
    /// Root of the record service, e.g. `http://localhost:3001`.
    pub base_url: String,
    /// Directory holding the draft and SO counter files.
    pub data_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:3001".to_owned(),
            data_dir: PathBuf::from(".workslip"),
        }
    }
}

impl ClientConfig {
    pub fn drafts_path(&self) -> PathBuf {
        self.data_dir.join("drafts.json")
    }

    pub fn so_counter_path(&self) -> PathBuf {
        self.data_dir.join("so-counter")
    }
}
