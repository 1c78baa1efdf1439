// Copyright (c) 2025, Jason Jenkins
// SPDX-License-Identifier: BSD-3-Clause

//! Session-scoped key-value storage.
//!
//! This module provides the storage capability the slide store persists
//! its active index into. Storage is strictly best-effort: a read that
//! fails behaves as absent, a write that fails is dropped. Callers never
//! see an error from either operation.

use std::collections::HashMap;
use std::path::PathBuf;

/// A session-scoped string key-value store.
///
/// Both operations are infallible at this surface; implementations
/// swallow their own failures.
pub trait SessionStore {
    /// Look up a value, returning `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Store a value. Failures are silently dropped.
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory session store, used in tests and as the fallback when no
/// session file is usable.
#[derive(Debug, Default)]
pub struct MemorySession {
    entries: HashMap<String, String>,
}

impl MemorySession {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }
}

/// File-backed session store: a flat JSON object persisted on every write.
///
/// A missing or corrupt file behaves as an empty store; write failures
/// (read-only location, disk full) are logged at debug level and dropped.
#[derive(Debug)]
pub struct FileSession {
    path: PathBuf,
    entries: HashMap<String, String>,
}

impl FileSession {
    /// Open the session file at `path`, reading any prior entries.
    pub fn open(path: PathBuf) -> Self {
        let entries = match std::fs::read_to_string(&path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(map) => map,
                Err(e) => {
                    log::debug!("Ignoring corrupt session file {}: {}", path.display(), e);
                    HashMap::new()
                }
            },
            Err(e) => {
                log::debug!("No session file at {}: {}", path.display(), e);
                HashMap::new()
            }
        };

        Self { path, entries }
    }

    fn flush(&self) {
        let json = match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => json,
            Err(e) => {
                log::debug!("Failed to serialize session state: {}", e);
                return;
            }
        };

        if let Err(e) = std::fs::write(&self.path, json) {
            log::debug!("Failed to write session file {}: {}", self.path.display(), e);
        }
    }
}

impl SessionStore for FileSession {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
        self.flush();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_session_roundtrip() {
        let mut session = MemorySession::new();
        assert_eq!(session.get("k"), None);

        session.set("k", "2");
        assert_eq!(session.get("k"), Some("2".to_string()));

        session.set("k", "0");
        assert_eq!(session.get("k"), Some("0".to_string()));
    }

    #[test]
    fn test_file_session_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");

        let mut session = FileSession::open(path.clone());
        session.set("student-highlights", "1");

        let reopened = FileSession::open(path);
        assert_eq!(reopened.get("student-highlights"), Some("1".to_string()));
    }

    #[test]
    fn test_file_session_treats_corrupt_file_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        std::fs::write(&path, "not json {{{").unwrap();

        let session = FileSession::open(path);
        assert_eq!(session.get("student-highlights"), None);
    }

    #[test]
    fn test_file_session_write_failure_is_swallowed() {
        // Point at a path whose parent directory does not exist; the write
        // fails but set must not panic and the in-memory value survives.
        let mut session = FileSession::open(PathBuf::from("/nonexistent-dir/session.json"));
        session.set("k", "3");
        assert_eq!(session.get("k"), Some("3".to_string()));
    }
}
