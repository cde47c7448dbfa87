//! Durable local storage for the authenticated session
//!
//! A scoped load-at-start / save-on-change pair over a single JSON file;
//! logout deletes the file.

use anyhow::{Context, Result};
use std::fs;
use std::path::PathBuf;
use tracing::info;

use crate::state::StoredSession;

/// File-backed session store
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    /// Create a store over the given file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Load the persisted session, if any
    ///
    /// A missing file means no session; a corrupt file is an error so the
    /// caller can decide whether to discard it.
    pub fn load(&self) -> Result<Option<StoredSession>> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e).context("Failed to read session file"),
        };

        let session = serde_json::from_str(&data).context("Failed to parse session file")?;
        Ok(Some(session))
    }

    /// Persist the session, replacing any previous one
    pub fn save(&self, session: &StoredSession) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).context("Failed to create session directory")?;
        }

        let data = serde_json::to_string(session).context("Failed to serialize session")?;
        fs::write(&self.path, data).context("Failed to write session file")?;

        info!("Session saved for user: {}", session.user.email);
        Ok(())
    }

    /// Remove the persisted session; missing files are not an error
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e).context("Failed to remove session file"),
        }
    }
}
