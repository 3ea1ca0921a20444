//! Test fixtures for the eta workspace: golden data files, scripted sample
//! sources, an in-memory history store, and series builders.

pub mod builders;
pub mod memory_store;
pub mod scripted_source;

pub use builders::{linear_series, series_of};
pub use memory_store::MemoryHistoryStore;
pub use scripted_source::ScriptedSource;

use serde::de::DeserializeOwned;
use std::path::PathBuf;

/// Root directory of the bundled fixture files.
pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("fixtures")
}

/// Absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Read a fixture file as text.
///
/// # Panics
/// Panics if the file doesn't exist.
pub fn load_text(relative_path: &str) -> String {
    let path = fixture_path(relative_path);
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    serde_json::from_str(&load_text(relative_path))
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// List fixture files in a subdirectory, sorted by name.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    let Ok(entries) = std::fs::read_dir(&dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|e| e.ok())
        .map(|e| e.path())
        .filter(|p| p.is_file())
        .collect();
    files.sort();
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use eta_core::models::Series;

    #[test]
    fn golden_series_load() {
        let files = list_fixtures("series");
        assert!(!files.is_empty());
        for f in files {
            let name = f.strip_prefix(fixtures_root()).unwrap().to_str().unwrap().to_string();
            let golden: GoldenSeries = load_fixture(&name);
            assert!(!golden.description.is_empty(), "{name}");
        }
    }

    #[test]
    fn pages_are_present() {
        assert!(load_text("pages/progress.html").contains("progress-text"));
        assert!(load_text("api/progress.json").contains("percentage"));
    }

    #[derive(serde::Deserialize)]
    struct GoldenSeries {
        description: String,
        #[allow(dead_code)]
        observations: Series,
    }
}
