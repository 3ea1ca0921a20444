use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use super::defaults;

/// History store configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    /// Path to the append-only history log.
    pub history_path: PathBuf,
    /// Fail a load on the first malformed line instead of skipping it.
    pub strict: bool,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            history_path: PathBuf::from(defaults::DEFAULT_HISTORY_FILENAME),
            strict: defaults::DEFAULT_STRICT_LOAD,
        }
    }
}
