//! Durable key-value store backing the gallery, request log, preferences,
//! and cost counters.
//!
//! The store is a single JSON object on disk; every write replaces the
//! whole file. Load failures are logged and treated as an empty store so
//! the in-memory state stays authoritative for the session.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, warn};

use crate::error::Result;

/// Well-known store keys.
pub mod keys {
    pub const API_KEY: &str = "api_key";
    pub const SAVED_RECORDS: &str = "saved_records";
    pub const REQUEST_LOGS: &str = "request_logs";
    pub const DEVELOPER_MODE: &str = "developer_mode_enabled";
    pub const ADVANCED_CONTROLS: &str = "advanced_controls_enabled";
    pub const TOTAL_COST_TODAY: &str = "total_cost_today";
    pub const LAST_COST_UPDATE: &str = "last_cost_update";
}

/// Flat key-value store persisted as one JSON file.
pub struct KvStore {
    path: PathBuf,
    values: BTreeMap<String, Value>,
}

impl KvStore {
    /// Open the store at `path`, loading existing contents if present.
    /// A missing or unreadable file yields an empty store.
    pub fn open(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref().to_path_buf();
        let values = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str(&text) {
                Ok(map) => map,
                Err(e) => {
                    warn!(path = ?path, error = %e, "Store file is corrupt, starting empty");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = ?path, error = %e, "Failed to read store file, starting empty");
                BTreeMap::new()
            }
        };

        Self { path, values }
    }

    /// Deserialize the value under `key`. Decode failures are logged and
    /// reported as absent.
    pub fn get<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let value = self.values.get(key)?;
        match serde_json::from_value(value.clone()) {
            Ok(v) => Some(v),
            Err(e) => {
                warn!(key = %key, error = %e, "Failed to decode stored value");
                None
            }
        }
    }

    /// Serialize `value` under `key` and rewrite the whole store file.
    pub fn set<T: Serialize>(&mut self, key: &str, value: &T) -> Result<()> {
        self.values
            .insert(key.to_string(), serde_json::to_value(value)?);
        self.flush()
    }

    /// Remove `key` and rewrite the store file.
    pub fn remove(&mut self, key: &str) -> Result<()> {
        if self.values.remove(key).is_some() {
            self.flush()?;
        }
        Ok(())
    }

    pub fn contains(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        let text = serde_json::to_string(&self.values)?;
        fs::write(&self.path, text)?;
        debug!(path = ?self.path, keys = self.values.len(), "Persisted store");
        Ok(())
    }
}
