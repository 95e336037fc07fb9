//! Runtime key-value storage scoped by device identity.
//!
//! Values live as one JSON file per key under the user runtime directory,
//! namespaced by the [`StorageKey`] so two mice of the same model do not
//! share state.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::debug;

use crate::identity::StorageKey;
use crate::Result;

/// Directory name under the runtime base directory.
const APP_DIR: &str = "g502-hero";

/// Per-device runtime store.
pub struct RuntimeStorage {
    dir: PathBuf,
}

impl RuntimeStorage {
    /// Opens the store for a device under the user runtime directory
    /// (`$XDG_RUNTIME_DIR`, falling back to the system temp dir).
    pub fn open(key: &StorageKey) -> Result<Self> {
        let base = env::var_os("XDG_RUNTIME_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(env::temp_dir);
        Self::open_in(&base, key)
    }

    /// Opens the store under an explicit base directory.
    pub fn open_in(base: &Path, key: &StorageKey) -> Result<Self> {
        let mut dir = base.join(APP_DIR);
        for prefix in key.prefixes() {
            dir.push(prefix);
        }
        fs::create_dir_all(&dir)?;
        debug!("Runtime storage at {}", dir.display());
        Ok(Self { dir })
    }

    /// Stores a value under `key`, replacing any previous value.
    pub fn store<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let encoded = serde_json::to_vec(value)?;
        fs::write(self.dir.join(key), encoded)?;
        Ok(())
    }

    /// Loads the value stored under `key`, or `None` if absent.
    pub fn load<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>> {
        let path = self.dir.join(key);
        if !path.exists() {
            return Ok(None);
        }
        let raw = fs::read(path)?;
        Ok(Some(serde_json::from_slice(&raw)?))
    }

    /// Directory holding this device's values.
    pub fn dir(&self) -> &Path {
        &self.dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_storage(tag: &str) -> RuntimeStorage {
        let base = env::temp_dir().join(format!("g502-hero-test-{}-{}", std::process::id(), tag));
        let key = StorageKey::new(0x046D, 0xC08B, "usb:1/2");
        RuntimeStorage::open_in(&base, &key).unwrap()
    }

    #[test]
    fn test_store_and_load() {
        let storage = test_storage("roundtrip");
        storage.store("wake_count", &3u32).unwrap();
        assert_eq!(storage.load::<u32>("wake_count").unwrap(), Some(3));
    }

    #[test]
    fn test_load_absent_key() {
        let storage = test_storage("absent");
        assert_eq!(storage.load::<u32>("never_stored").unwrap(), None);
    }

    #[test]
    fn test_dir_is_scoped_by_identity() {
        let storage = test_storage("scoped");
        let dir = storage.dir().to_string_lossy().into_owned();
        assert!(dir.contains("vid046d_pidc08b"));
        assert!(dir.ends_with("loc1_2"));
    }
}
