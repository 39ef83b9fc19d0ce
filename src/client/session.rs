// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Authenticated session and its on-disk store.
//!
//! A `Session` is passed explicitly to every authenticated call; nothing in
//! the client reads it from ambient state. `SessionStore` is the only place
//! a token outlives a process: login saves it, logout and an expired token
//! clear it.

use super::ClientError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("Session file error: {0}")]
    Io(#[from] io::Error),
    #[error("Corrupt session file: {0}")]
    Json(#[from] serde_json::Error),
    #[error("No config directory available for the session file")]
    NoConfigDir,
}

/// Bearer token issued by `/auth/signin`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub token: String,
}

impl Session {
    pub fn new(token: impl Into<String>) -> Self {
        Session {
            token: token.into(),
        }
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session").field("token", &"***").finish()
    }
}

/// JSON file holding the current session.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionStore { path: path.into() }
    }

    /// `<config dir>/udd/session.json`
    pub fn default_path() -> Result<PathBuf, SessionError> {
        dirs::config_dir()
            .map(|dir| dir.join("udd").join("session.json"))
            .ok_or(SessionError::NoConfigDir)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The stored session, or `None` when logged out.
    pub fn load(&self) -> Result<Option<Session>, SessionError> {
        match fs::read_to_string(&self.path) {
            Ok(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    pub fn save(&self, session: &Session) -> Result<(), SessionError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        write_private(&self.path, &serde_json::to_vec(session)?)?;
        log::debug!("saved session to {}", self.path.display());
        Ok(())
    }

    /// Remove the stored session. Clearing an absent session is not an error.
    pub fn clear(&self) -> Result<(), SessionError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Drop the stored session if `error` says the backend rejected its token.
    /// Returns whether it was dropped.
    pub fn clear_if_rejected(&self, error: &ClientError) -> bool {
        if !error.is_unauthorized() {
            return false;
        }
        log::warn!("session rejected by backend, clearing {}", self.path.display());
        if let Err(e) = self.clear() {
            log::warn!("failed to clear session: {}", e);
        }
        true
    }
}

/// Write a file that is never readable by anyone but the owner, not even
/// between creation and the first write.
fn write_private(path: &Path, bytes: &[u8]) -> io::Result<()> {
    let mut options = fs::OpenOptions::new();
    options.write(true).create(true).truncate(true);
    #[cfg(unix)]
    {
        use std::os::unix::fs::OpenOptionsExt;
        options.mode(0o600);
    }
    let mut file = options.open(path)?;
    // `mode` only applies on creation; an older file keeps its bits otherwise.
    restrict_permissions(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Token files are readable by the owner only.
#[cfg(unix)]
fn restrict_permissions(path: &Path) -> io::Result<()> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o600))
}

#[cfg(not(unix))]
fn restrict_permissions(_path: &Path) -> io::Result<()> {
    Ok(())
}
