use std::collections::HashMap;
use std::{fs, path::PathBuf};

use crate::errors::{DecoraiError, DecoraiResult};

pub const DARK_MODE_KEY: &str = "darkMode";
pub const DARK_MODE_ENABLED: &str = "enabled";
pub const DARK_MODE_DISABLED: &str = "disabled";

/// Persistent key/value preference store backed by a JSON file in the
/// platform config directory. The only entry written today is the dark mode
/// flag, but the store is a plain string map.
#[derive(Debug, Clone)]
pub struct PrefStore {
    path: PathBuf,
}

impl PrefStore {
    pub fn open() -> DecoraiResult<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| DecoraiError::config_error("could not determine config directory"))?;

        Ok(PrefStore {
            path: config_dir.join("decorai").join("preferences.json"),
        })
    }

    /// Opens a store at an explicit path. Used by tests.
    pub fn at(path: PathBuf) -> Self {
        PrefStore { path }
    }

    /// Reads a single preference. A missing or unreadable file simply yields
    /// `None`; callers treat that the same as an unset preference.
    pub fn get(&self, key: &str) -> Option<String> {
        let raw = fs::read_to_string(&self.path).ok()?;
        let map: HashMap<String, String> = serde_json::from_str(&raw).ok()?;
        map.get(key).cloned()
    }

    /// Writes a single preference synchronously, preserving any other
    /// entries already in the file.
    pub fn set(&self, key: &str, value: &str) -> DecoraiResult<()> {
        let mut map: HashMap<String, String> = fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();

        map.insert(key.to_string(), value.to_string());

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let raw = serde_json::to_string_pretty(&map)?;
        fs::write(&self.path, raw)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_get_missing_file_is_none() {
        let dir = tempdir().unwrap();
        let store = PrefStore::at(dir.path().join("preferences.json"));
        assert_eq!(store.get(DARK_MODE_KEY), None);
    }

    #[test]
    fn test_set_then_get_round_trips() {
        let dir = tempdir().unwrap();
        let store = PrefStore::at(dir.path().join("preferences.json"));

        store.set(DARK_MODE_KEY, DARK_MODE_ENABLED).unwrap();
        assert_eq!(
            store.get(DARK_MODE_KEY).as_deref(),
            Some(DARK_MODE_ENABLED)
        );

        store.set(DARK_MODE_KEY, DARK_MODE_DISABLED).unwrap();
        assert_eq!(
            store.get(DARK_MODE_KEY).as_deref(),
            Some(DARK_MODE_DISABLED)
        );
    }

    #[test]
    fn test_set_preserves_other_keys() {
        let dir = tempdir().unwrap();
        let store = PrefStore::at(dir.path().join("preferences.json"));

        store.set("other", "value").unwrap();
        store.set(DARK_MODE_KEY, DARK_MODE_ENABLED).unwrap();

        assert_eq!(store.get("other").as_deref(), Some("value"));
    }

    #[test]
    fn test_corrupt_file_is_treated_as_unset() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("preferences.json");
        std::fs::write(&path, "not json").unwrap();

        let store = PrefStore::at(path);
        assert_eq!(store.get(DARK_MODE_KEY), None);
    }
}
