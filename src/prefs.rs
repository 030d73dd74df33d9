//! Preference store - durable key/value flags
//!
//! The gate only ever reads and writes booleans, so the contract is kept
//! to exactly that. The store is injected into `SessionGate` rather than
//! reached through a process-wide singleton, which lets tests substitute
//! `MemoryPreferenceStore`.

use serde_json::Value;
use std::collections::BTreeMap;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Mutex;

pub type PrefsResult<T> = Result<T, PrefsError>;

/// Errors that can occur when accessing the preference store
#[derive(Debug, thiserror::Error)]
pub enum PrefsError {
    #[error("failed to access preference file: {0}")]
    Io(#[from] std::io::Error),

    #[error("preference file is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("preference store unavailable")]
    Unavailable,
}

/// Durable boolean flags keyed by name.
///
/// Reads return the caller's default when the key was never written.
/// Writes must survive process restarts.
pub trait PreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> PrefsResult<bool>;
    fn set_bool(&self, key: &str, value: bool) -> PrefsResult<()>;
}

/// Preference store backed by a single JSON document on disk.
pub struct JsonPreferenceStore {
    path: PathBuf,
}

impl JsonPreferenceStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Open the store at the standard config location.
    pub fn open_default() -> anyhow::Result<Self> {
        Ok(Self::new(crate::paths::config_dir()?.join("prefs.json")))
    }

    fn read_document(&self) -> PrefsResult<BTreeMap<String, Value>> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let content = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }
}

impl PreferenceStore for JsonPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> PrefsResult<bool> {
        let doc = self.read_document()?;
        Ok(doc.get(key).and_then(Value::as_bool).unwrap_or(default))
    }

    fn set_bool(&self, key: &str, value: bool) -> PrefsResult<()> {
        // A corrupt document is replaced rather than kept; the flags it
        // held read as unset, which is the safe direction for the gate.
        let mut doc = self.read_document().unwrap_or_default();
        doc.insert(key.to_string(), Value::Bool(value));

        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(&doc)?)?;
        Ok(())
    }
}

/// In-memory fake for tests, with switches to simulate an unreadable or
/// unwritable store.
#[derive(Default)]
pub struct MemoryPreferenceStore {
    values: Mutex<HashMap<String, bool>>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MemoryPreferenceStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_reads() -> Self {
        Self {
            fail_reads: true,
            ..Self::default()
        }
    }

    pub fn failing_writes() -> Self {
        Self {
            fail_writes: true,
            ..Self::default()
        }
    }

    /// Direct view of a stored flag, bypassing the failure switches.
    pub fn stored(&self, key: &str) -> Option<bool> {
        self.values.lock().unwrap().get(key).copied()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get_bool(&self, key: &str, default: bool) -> PrefsResult<bool> {
        if self.fail_reads {
            return Err(PrefsError::Unavailable);
        }
        Ok(self
            .values
            .lock()
            .unwrap()
            .get(key)
            .copied()
            .unwrap_or(default))
    }

    fn set_bool(&self, key: &str, value: bool) -> PrefsResult<()> {
        if self.fail_writes {
            return Err(PrefsError::Unavailable);
        }
        self.values.lock().unwrap().insert(key.to_string(), value);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_json_store_missing_file_reads_default() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonPreferenceStore::new(temp_dir.path().join("prefs.json"));

        assert!(!store.get_bool("disclaimer_accepted", false).unwrap());
        assert!(store.get_bool("disclaimer_accepted", true).unwrap());
    }

    #[test]
    fn test_json_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonPreferenceStore::new(temp_dir.path().join("prefs.json"));

        store.set_bool("disclaimer_accepted", true).unwrap();
        assert!(store.get_bool("disclaimer_accepted", false).unwrap());

        store.set_bool("disclaimer_accepted", false).unwrap();
        assert!(!store.get_bool("disclaimer_accepted", true).unwrap());
    }

    #[test]
    fn test_json_store_creates_parent_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("config/rulebox/prefs.json");
        let store = JsonPreferenceStore::new(&nested);

        store.set_bool("disclaimer_accepted", true).unwrap();
        assert!(nested.exists());
    }

    #[test]
    fn test_json_store_malformed_file_errors_on_read() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonPreferenceStore::new(&path);
        assert!(matches!(
            store.get_bool("disclaimer_accepted", false),
            Err(PrefsError::Malformed(_))
        ));
    }

    #[test]
    fn test_json_store_malformed_file_is_replaced_on_write() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("prefs.json");
        std::fs::write(&path, "not json").unwrap();

        let store = JsonPreferenceStore::new(&path);
        store.set_bool("disclaimer_accepted", true).unwrap();
        assert!(store.get_bool("disclaimer_accepted", false).unwrap());
    }

    #[test]
    fn test_json_store_preserves_other_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = JsonPreferenceStore::new(temp_dir.path().join("prefs.json"));

        store.set_bool("disclaimer_accepted", true).unwrap();
        store.set_bool("other_flag", false).unwrap();

        assert!(store.get_bool("disclaimer_accepted", false).unwrap());
        assert!(!store.get_bool("other_flag", true).unwrap());
    }

    #[test]
    fn test_memory_store_failure_switches() {
        let store = MemoryPreferenceStore::failing_reads();
        assert!(store.get_bool("disclaimer_accepted", false).is_err());

        let store = MemoryPreferenceStore::failing_writes();
        assert!(store.set_bool("disclaimer_accepted", true).is_err());
        assert_eq!(store.stored("disclaimer_accepted"), None);
    }
}
