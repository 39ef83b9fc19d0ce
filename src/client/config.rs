// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Client configuration.
//!
//! Values come from CLI flags first, then the environment (`UDD_API_URL`,
//! `UDD_SESSION`, `UDD_TIMEOUT_SECS`), then the defaults below. The binary
//! lets clap read the environment; library users call `Config::from_env`.

use super::session::{SessionError, SessionStore};
use super::{Client, ClientError};
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:8080";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct Config {
    pub api_url: String,
    pub session_path: PathBuf,
    pub timeout: Duration,
}

impl Config {
    /// Fill in whatever was not given explicitly.
    pub fn new(
        api_url: Option<String>,
        session_path: Option<PathBuf>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, SessionError> {
        let session_path = match session_path {
            Some(path) => path,
            None => SessionStore::default_path()?,
        };
        Ok(Config {
            api_url: api_url.unwrap_or_else(|| DEFAULT_API_URL.to_string()),
            session_path,
            timeout: Duration::from_secs(timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS)),
        })
    }

    /// Resolve from environment variables and defaults.
    pub fn from_env() -> Result<Self, SessionError> {
        let api_url = std::env::var("UDD_API_URL").ok();
        let session_path = std::env::var_os("UDD_SESSION").map(PathBuf::from);
        let timeout_secs = match std::env::var("UDD_TIMEOUT_SECS") {
            Ok(raw) => match raw.parse() {
                Ok(secs) => Some(secs),
                Err(_) => {
                    log::warn!("ignoring invalid UDD_TIMEOUT_SECS '{}'", raw);
                    None
                }
            },
            Err(_) => None,
        };
        Self::new(api_url, session_path, timeout_secs)
    }

    pub fn client(&self) -> Result<Client, ClientError> {
        Client::new(&self.api_url, self.timeout)
    }

    pub fn session_store(&self) -> SessionStore {
        SessionStore::new(&self.session_path)
    }
}
