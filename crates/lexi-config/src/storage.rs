use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_key() -> String {
    "saved_words".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Storage file; `None` resolves to the platform data directory
    pub path: Option<PathBuf>,
    /// Key the saved word list lives under
    #[serde(default = "default_key")]
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            path: None,
            key: default_key(),
        }
    }
}
