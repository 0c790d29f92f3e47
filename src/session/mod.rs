//! The client-side key-value bridge that hands the checkout selection and
//! auth token between pages. Injected rather than ambient so the composer
//! and sequencer are testable without a real storage backend.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use tracing::warn;

use crate::models::CheckoutSelection;
use crate::utils::error::CheckoutError;

/// Storage key for the pending checkout selection.
pub const SELECTION_KEY: &str = "checkoutSelection";
/// Storage key for the bearer token.
pub const AUTH_TOKEN_KEY: &str = "authToken";
/// Legacy token key still written by older sessions.
pub const LEGACY_AUTH_TOKEN_KEY: &str = "accessToken";

pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, CheckoutError>;
    fn set(&self, key: &str, value: &str) -> Result<(), CheckoutError>;
    fn remove(&self, key: &str) -> Result<(), CheckoutError>;
}

/// Bearer token, reading the current key first and the legacy key as a
/// fallback.
pub fn auth_token(store: &dyn SessionStore) -> Result<Option<String>, CheckoutError> {
    match store.get(AUTH_TOKEN_KEY)? {
        Some(token) => Ok(Some(token)),
        None => store.get(LEGACY_AUTH_TOKEN_KEY),
    }
}

/// The pending selection, if one is persisted. An unparseable record is
/// treated as absent: the buyer restarts checkout rather than seeing a
/// storage error for a record they cannot fix.
pub fn load_selection(store: &dyn SessionStore) -> Result<Option<CheckoutSelection>, CheckoutError> {
    let Some(raw) = store.get(SELECTION_KEY)? else {
        return Ok(None);
    };
    match serde_json::from_str(&raw) {
        Ok(selection) => Ok(Some(selection)),
        Err(e) => {
            warn!(error = %e, "Discarding unparseable checkout selection");
            Ok(None)
        }
    }
}

pub fn store_selection(
    store: &dyn SessionStore,
    selection: &CheckoutSelection,
) -> Result<(), CheckoutError> {
    let raw = serde_json::to_string(selection)
        .map_err(|e| CheckoutError::Storage(format!("serialize selection: {e}")))?;
    store.set(SELECTION_KEY, &raw)
}

pub fn clear_selection(store: &dyn SessionStore) -> Result<(), CheckoutError> {
    store.remove(SELECTION_KEY)
}

/// In-memory store, used by unit tests and by callers that do not want
/// persistence across runs.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, CheckoutError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CheckoutError> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CheckoutError> {
        self.entries.lock().unwrap().remove(key);
        Ok(())
    }
}

/// Single-file JSON store. One flat object per file; the whole map is
/// rewritten on every mutation, which is fine at this size (two keys).
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    pub fn open(path: impl AsRef<Path>) -> Result<Self, CheckoutError> {
        let path = path.as_ref().to_path_buf();
        let entries = if path.exists() {
            let raw = fs::read_to_string(&path)
                .map_err(|e| CheckoutError::Storage(format!("read {}: {e}", path.display())))?;
            serde_json::from_str(&raw)
                .map_err(|e| CheckoutError::Storage(format!("parse {}: {e}", path.display())))?
        } else {
            HashMap::new()
        };
        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    fn flush(&self, entries: &HashMap<String, String>) -> Result<(), CheckoutError> {
        let raw = serde_json::to_string_pretty(entries)
            .map_err(|e| CheckoutError::Storage(format!("serialize session: {e}")))?;
        fs::write(&self.path, raw)
            .map_err(|e| CheckoutError::Storage(format!("write {}: {e}", self.path.display())))
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, CheckoutError> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), CheckoutError> {
        let mut entries = self.entries.lock().unwrap();
        entries.insert(key.to_string(), value.to_string());
        self.flush(&entries)
    }

    fn remove(&self, key: &str) -> Result<(), CheckoutError> {
        let mut entries = self.entries.lock().unwrap();
        entries.remove(key);
        self.flush(&entries)
    }
}
