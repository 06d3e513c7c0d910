use serde::{de::DeserializeOwned, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use thiserror::Error;

use crate::data::models::{AdminConfig, AttemptRecord, VocabEntry};

pub const VOCAB_FILE: &str = "vocab.json";
pub const RESULTS_FILE: &str = "results.json";
pub const CONFIG_FILE: &str = "config.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Whole-document JSON storage rooted at a data directory.
///
/// Every read loads the full file and every write replaces it atomically.
/// There is no locking between writers: the last save wins.
#[derive(Debug, Clone)]
pub struct JsonStore {
    root: PathBuf,
}

impl JsonStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn path_of(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    /// Missing and unparsable documents both yield `default`.
    pub fn load<T: DeserializeOwned>(&self, name: &str, default: T) -> T {
        let path = self.path_of(name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return default,
            Err(e) => {
                log::warn!("Failed to read {}: {}", path.display(), e);
                return default;
            }
        };

        match serde_json::from_str(&content) {
            Ok(doc) => doc,
            Err(e) => {
                log::warn!("Ignoring invalid JSON in {}: {}", path.display(), e);
                default
            }
        }
    }

    /// Writes to `<name>.tmp` and renames it over the target.
    pub fn save<T: Serialize + ?Sized>(&self, name: &str, doc: &T) -> Result<(), StoreError> {
        let path = self.path_of(name);
        let tmp = self.path_of(&format!("{name}.tmp"));
        let body = serde_json::to_string_pretty(doc)?;

        fs::write(&tmp, body).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        fs::rename(&tmp, &path).map_err(|source| StoreError::Io { path, source })
    }

    /// Creates the data directory and seeds any missing documents.
    pub fn bootstrap(&self) -> Result<(), StoreError> {
        fs::create_dir_all(&self.root).map_err(|source| StoreError::Io {
            path: self.root.clone(),
            source,
        })?;

        if !self.path_of(VOCAB_FILE).exists() {
            self.save(VOCAB_FILE, &Vec::<VocabEntry>::new())?;
        }
        if !self.path_of(RESULTS_FILE).exists() {
            self.save(RESULTS_FILE, &Vec::<AttemptRecord>::new())?;
        }
        if !self.path_of(CONFIG_FILE).exists() {
            self.save(CONFIG_FILE, &AdminConfig::default())?;
            log::info!("Seeded default admin credentials in {}", CONFIG_FILE);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_missing_returns_default() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        let vocab: Vec<VocabEntry> = store.load(VOCAB_FILE, Vec::new());
        assert!(vocab.is_empty());
    }

    #[test]
    fn test_load_corrupt_returns_default() {
        let dir = TempDir::new().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "{not json").unwrap();
        let store = JsonStore::new(dir.path());
        let cfg = store.load(CONFIG_FILE, AdminConfig::default());
        assert_eq!(cfg.admin_username, "admin");
    }

    #[test]
    fn test_save_replaces_whole_file_and_leaves_no_tmp() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path());
        store.save(RESULTS_FILE, &vec![1, 2, 3]).unwrap();
        store.save(RESULTS_FILE, &vec![4]).unwrap();

        let loaded: Vec<i32> = store.load(RESULTS_FILE, Vec::new());
        assert_eq!(loaded, vec![4]);
        assert!(!dir.path().join("results.json.tmp").exists());
    }

    #[test]
    fn test_bootstrap_seeds_documents_once() {
        let dir = TempDir::new().unwrap();
        let store = JsonStore::new(dir.path().join("data"));
        store.bootstrap().unwrap();
        store
            .save(
                CONFIG_FILE,
                &AdminConfig {
                    admin_username: "quizmaster".into(),
                    admin_password: "secret".into(),
                },
            )
            .unwrap();
        store.bootstrap().unwrap();

        let cfg = store.load(CONFIG_FILE, AdminConfig::default());
        assert_eq!(cfg.admin_username, "quizmaster");
        assert!(store.path_of(VOCAB_FILE).exists());
        assert!(store.path_of(RESULTS_FILE).exists());
    }
}
