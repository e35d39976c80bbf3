use super::*;
use crate::config::StorageSettings;

/// A backend whose writes always fail, like a read-only data directory.
struct ReadOnly(MemoryStorage);

impl Storage for ReadOnly {
    fn get(&self, key: &str) -> Option<String> {
        self.0.get(key)
    }

    fn set(&mut self, _key: &str, _value: &str) -> Result<(), StorageError> {
        Err(StorageError::Io(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        )))
    }
}

#[test]
fn file_storage_round_trips_through_disk() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join(PREFS_FILE);

    let mut storage = FileStorage::open(path.clone()).unwrap();
    assert_eq!(storage.get(THEME_KEY), None);
    storage.set(THEME_KEY, "light").unwrap();
    storage.set(LANGUAGE_KEY, "es").unwrap();

    let reopened = FileStorage::open(path).unwrap();
    assert_eq!(reopened.get(THEME_KEY).as_deref(), Some("light"));
    assert_eq!(reopened.get(LANGUAGE_KEY).as_deref(), Some("es"));
}

#[test]
fn file_storage_rejects_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(PREFS_FILE);
    std::fs::write(&path, "theme = [not toml").unwrap();

    assert!(matches!(
        FileStorage::open(path),
        Err(StorageError::Deserialize(_))
    ));
}

#[test]
fn preferences_open_degrades_to_session_only_on_corrupt_file() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join(PREFS_FILE), "{{{").unwrap();

    let mut prefs = Preferences::open(&StorageSettings {
        enabled: true,
        data_dir: Some(dir.path().to_path_buf()),
    });
    assert!(prefs.is_session_only());

    prefs.set(THEME_KEY, "dark");
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("dark"));
}

#[test]
fn preferences_open_respects_disabled_storage() {
    let prefs = Preferences::open(&StorageSettings {
        enabled: false,
        data_dir: None,
    });
    assert!(prefs.is_session_only());
}

#[test]
fn failed_write_keeps_value_for_the_session() {
    let backend = ReadOnly(MemoryStorage::default().with(LANGUAGE_KEY, "es"));
    let mut prefs = Preferences::new(backend);
    assert!(!prefs.is_session_only());

    prefs.set(THEME_KEY, "light");

    assert!(prefs.is_session_only());
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));
    // Values readable before the failure survive the switch.
    assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("es"));

    // Later writes go straight to memory.
    prefs.set(LANGUAGE_KEY, "en");
    assert_eq!(prefs.get(LANGUAGE_KEY).as_deref(), Some("en"));
    assert_eq!(prefs.get(THEME_KEY).as_deref(), Some("light"));
}
