//! Local preference storage.
//!
//! Preferences are a flat string-to-string map persisted as TOML in the user
//! data directory. Every failure degrades to session-only memory storage so a
//! broken or read-only data directory never interrupts the UI.

mod file;
mod memory;

use std::path::PathBuf;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::config::{StorageSettings, default_data_dir};

/// Key holding the light/dark preference (`"light"` or `"dark"`).
pub const THEME_KEY: &str = "theme";
/// Key holding the preferred blog language (`"en"` or `"es"`).
pub const LANGUAGE_KEY: &str = "blogPreferredLanguage";

const KNOWN_KEYS: [&str; 2] = [THEME_KEY, LANGUAGE_KEY];

/// File name of the preferences file inside the data directory.
pub const PREFS_FILE: &str = "prefs.toml";

/// Errors that can occur while reading or writing persisted preferences.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No data directory could be derived from the environment.
    #[error("failed to determine the data directory")]
    DataDirNotFound,
    #[error("failed to access preferences: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse preferences: {0}")]
    Deserialize(#[from] toml::de::Error),
    #[error("failed to serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// A key/value backend for preferences.
pub trait Storage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Preference access used by the rest of the app.
///
/// Wraps a [`Storage`] backend and swallows its failures: a failed write
/// switches to an in-memory copy for the rest of the session.
pub struct Preferences {
    backend: Box<dyn Storage>,
    session_only: bool,
}

impl Preferences {
    pub fn new(backend: impl Storage + 'static) -> Self {
        Self {
            backend: Box::new(backend),
            session_only: false,
        }
    }

    /// Preferences that are never written anywhere.
    pub fn session_only() -> Self {
        Self {
            backend: Box::new(MemoryStorage::default()),
            session_only: true,
        }
    }

    /// Open the preferences file described by `settings`, degrading to
    /// session-only storage on any failure.
    pub fn open(settings: &StorageSettings) -> Self {
        if !settings.enabled {
            log::info!("preference storage disabled, using session-only preferences");
            return Self::session_only();
        }

        match prefs_path(settings).and_then(FileStorage::open) {
            Ok(storage) => {
                log::debug!("preferences loaded from {:?}", storage.path());
                Self::new(storage)
            }
            Err(e) => {
                log::warn!("preferences unavailable, using session-only preferences: {e}");
                Self::session_only()
            }
        }
    }

    pub fn is_session_only(&self) -> bool {
        self.session_only
    }

    pub fn get(&self, key: &str) -> Option<String> {
        self.backend.get(key)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        if let Err(e) = self.backend.set(key, value) {
            log::warn!("failed to persist `{key}`, keeping it for this session only: {e}");
            self.degrade(key, value);
        }
    }

    /// Swap to memory storage, carrying over the known keys plus the write
    /// that just failed.
    fn degrade(&mut self, key: &str, value: &str) {
        let mut memory = MemoryStorage::default();
        for known in KNOWN_KEYS {
            if let Some(v) = self.backend.get(known) {
                memory.insert(known, &v);
            }
        }
        memory.insert(key, value);
        self.backend = Box::new(memory);
        self.session_only = true;
    }
}

fn prefs_path(settings: &StorageSettings) -> Result<PathBuf, StorageError> {
    settings
        .data_dir
        .clone()
        .or_else(default_data_dir)
        .map(|dir| dir.join(PREFS_FILE))
        .ok_or(StorageError::DataDirNotFound)
}

#[cfg(test)]
mod tests;
