// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Session store persisted as a small JSON document on disk.
//!
//! The whole map is rewritten on every mutation (write to a temporary file,
//! then rename), so the file on disk is always a complete snapshot.

use super::{SessionKey, SessionStore};
use crate::error::{AppError, Result};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// File-backed session store.
#[derive(Debug)]
pub struct FileSessionStore {
    path: PathBuf,
    entries: Mutex<BTreeMap<String, String>>,
}

impl FileSessionStore {
    /// Open the store at `path`. A missing file is an empty session.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw).map_err(|e| {
                AppError::Session(format!("Corrupt session file {}: {}", path.display(), e))
            })?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                return Err(AppError::Session(format!(
                    "Failed to read {}: {}",
                    path.display(),
                    e
                )))
            }
        };

        tracing::debug!(path = %path.display(), keys = entries.len(), "Session file opened");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, BTreeMap<String, String>>> {
        self.entries
            .lock()
            .map_err(|_| AppError::Session("Session store lock poisoned".to_string()))
    }

    fn persist(&self, entries: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|e| {
                AppError::Session(format!("Failed to create {}: {}", parent.display(), e))
            })?;
        }

        let tmp = self.path.with_extension("tmp");
        let body = serde_json::to_string_pretty(entries)?;
        std::fs::write(&tmp, body)
            .map_err(|e| AppError::Session(format!("Failed to write {}: {}", tmp.display(), e)))?;
        std::fs::rename(&tmp, &self.path).map_err(|e| {
            AppError::Session(format!("Failed to replace {}: {}", self.path.display(), e))
        })
    }
}

impl SessionStore for FileSessionStore {
    fn get(&self, key: SessionKey) -> Option<String> {
        self.lock().ok()?.get(key.as_str()).cloned()
    }

    fn set(&self, key: SessionKey, value: &str) -> Result<()> {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        next.insert(key.as_str().to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    /// If the file cannot be rewritten it is removed instead; memory only
    /// changes once the disk no longer holds the session keys.
    fn clear(&self) -> Result<()> {
        let mut entries = self.lock()?;
        let mut next = entries.clone();
        for key in SessionKey::ALL {
            next.remove(key.as_str());
        }

        if let Err(e) = self.persist(&next) {
            tracing::warn!(error = %e, path = %self.path.display(), "Rewrite failed, removing session file");
            match std::fs::remove_file(&self.path) {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(_) => return Err(e),
            }
        }

        *entries = next;
        Ok(())
    }
}
