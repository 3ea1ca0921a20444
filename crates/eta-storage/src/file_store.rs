//! File-backed `HistoryStore`.

use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use eta_core::config::StorageConfig;
use eta_core::errors::StoreError;
use eta_core::models::{Observation, Series};
use eta_core::traits::HistoryStore;
use tracing::{debug, warn};

use crate::line::{format_line, parse_line};

/// What `load` does with a line it cannot parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LoadPolicy {
    /// Skip the line and log it.
    #[default]
    Lenient,
    /// Fail the whole load with `StoreError::Malformed`.
    Strict,
}

impl LoadPolicy {
    pub fn from_strict(strict: bool) -> Self {
        if strict {
            Self::Strict
        } else {
            Self::Lenient
        }
    }
}

/// Append-only history log on the local filesystem.
///
/// Appends are serialized through `write_lock` and each record goes out in a
/// single `write_all` on an `O_APPEND` handle, so readers never observe a
/// torn line from this process. Loads take no lock.
#[derive(Debug)]
pub struct FileHistoryStore {
    path: PathBuf,
    policy: LoadPolicy,
    write_lock: Mutex<()>,
}

impl FileHistoryStore {
    pub fn new(path: impl Into<PathBuf>, policy: LoadPolicy) -> Self {
        Self {
            path: path.into(),
            policy,
            write_lock: Mutex::new(()),
        }
    }

    pub fn from_config(config: &StorageConfig) -> Self {
        Self::new(
            config.history_path.clone(),
            LoadPolicy::from_strict(config.strict),
        )
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn policy(&self) -> LoadPolicy {
        self.policy
    }

    fn parse(&self, content: &[u8]) -> Result<Series, StoreError> {
        let mut observations = Vec::new();
        let mut skipped = 0usize;

        for (idx, bytes) in content.split(|b| *b == b'\n').enumerate() {
            let line_no = idx + 1;
            let decoded = std::str::from_utf8(bytes)
                .map_err(|e| format!("not valid UTF-8: {e}"))
                .and_then(parse_line);
            match decoded {
                Ok(Some(obs)) => observations.push(obs),
                Ok(None) => {}
                Err(reason) => {
                    let raw = String::from_utf8_lossy(bytes);
                    match self.policy {
                        LoadPolicy::Strict => {
                            return Err(StoreError::Malformed {
                                line: line_no,
                                content: raw.into_owned(),
                                reason,
                            });
                        }
                        LoadPolicy::Lenient => {
                            skipped += 1;
                            warn!(
                                path = %self.path.display(),
                                line = line_no,
                                content = %raw,
                                %reason,
                                "skipping malformed history line"
                            );
                        }
                    }
                }
            }
        }

        let read = observations.len();
        let series = Series::from_observations(observations);
        debug!(
            path = %self.path.display(),
            lines = read,
            skipped,
            observations = series.len(),
            "history loaded"
        );
        Ok(series)
    }
}

impl HistoryStore for FileHistoryStore {
    fn load(&self) -> Result<Series, StoreError> {
        match fs::read(&self.path) {
            Ok(content) => self.parse(&content),
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "history file absent, starting empty");
                Ok(Series::new())
            }
            Err(e) => Err(StoreError::io(&self.path, e)),
        }
    }

    fn append(&self, observation: &Observation) -> Result<(), StoreError> {
        let _guard = self
            .write_lock
            .lock()
            .map_err(|e| StoreError::LockPoisoned(e.to_string()))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| StoreError::io(parent, e))?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(|e| StoreError::io(&self.path, e))?;

        let line = format_line(observation);
        file.write_all(line.as_bytes())
            .and_then(|()| file.flush())
            .map_err(|e| StoreError::io(&self.path, e))?;

        debug!(
            path = %self.path.display(),
            timestamp = observation.timestamp(),
            value = observation.value(),
            "observation appended"
        );
        Ok(())
    }
}
