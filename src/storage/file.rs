use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use super::{Storage, StorageError};

/// Preferences persisted as a flat TOML table.
///
/// The whole file is rewritten on every `set`; it only ever holds a couple
/// of short values.
#[derive(Debug)]
pub struct FileStorage {
    path: PathBuf,
    values: BTreeMap<String, String>,
}

impl FileStorage {
    /// Open `path`, treating a missing file as empty preferences.
    pub fn open(path: PathBuf) -> Result<Self, StorageError> {
        let values = if path.exists() {
            let contents = fs::read_to_string(&path)?;
            toml::from_str(&contents)?
        } else {
            BTreeMap::new()
        };
        Ok(Self { path, values })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string(&self.values)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}

impl Storage for FileStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.values.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        let previous = self.values.insert(key.to_string(), value.to_string());
        if let Err(e) = self.flush() {
            // Leave the in-memory map matching what is on disk.
            match previous {
                Some(v) => self.values.insert(key.to_string(), v),
                None => self.values.remove(key),
            };
            return Err(e);
        }
        Ok(())
    }
}
