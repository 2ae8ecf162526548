/*
 * SPDX-FileCopyrightText: 2026 Wavelens GmbH <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

//! Admin session: the bearer token kept on the client and the gate run
//! before an admin page renders.

use crate::admin::{AdminProfile, get_me};
use crate::*;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

pub const LOGIN_ROUTE: &str = "/admin/login";

#[derive(Debug, Clone, PartialEq)]
pub enum GateDecision {
    Admit(AdminProfile),
    Redirect(String),
}

#[derive(Serialize, Deserialize, Debug, Default)]
struct SessionFile {
    token: Option<String>,
}

/// Persists the admin token in a small TOML file.
#[derive(Debug, Clone)]
pub struct TokenStore {
    path: PathBuf,
}

impl TokenStore {
    pub fn new(path: PathBuf) -> Self {
        TokenStore { path }
    }

    /// Store in the user's configuration directory.
    pub fn user_default() -> Option<Self> {
        let mut path = dirs::config_dir()?;
        path.push("atelier");
        path.push("session.toml");
        Some(TokenStore { path })
    }

    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Missing or unreadable files count as signed out.
    pub fn load(&self) -> Option<String> {
        let contents = fs::read_to_string(&self.path).ok()?;

        match toml::from_str::<SessionFile>(&contents) {
            Ok(session) => session.token.filter(|t| !t.trim().is_empty()),
            Err(e) => {
                tracing::warn!("Ignoring unreadable session file {:?}: {}", self.path, e);
                None
            }
        }
    }

    pub fn save(&self, token: &str) -> Result<(), String> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .map_err(|e| format!("Failed to create session directory: {}", e))?;
        }

        let session = SessionFile {
            token: Some(token.to_string()),
        };

        let contents = toml::to_string_pretty(&session)
            .map_err(|e| format!("Failed to serialize session: {}", e))?;

        fs::write(&self.path, contents).map_err(|e| format!("Failed to write session file: {}", e))
    }

    pub fn clear(&self) -> Result<(), String> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(format!("Failed to remove session file: {}", e)),
        }
    }
}

/// Runs once per admin page mount. Without a token no request is made;
/// any failure of the check sends the visitor to the login route.
pub async fn check_admin_session(config: &RequestConfig) -> GateDecision {
    if config.token.is_none() {
        return GateDecision::Redirect(LOGIN_ROUTE.to_string());
    }

    match get_me(config).await {
        FetchState::Success(profile) => GateDecision::Admit(profile),
        state => {
            if let Some(message) = state.error() {
                tracing::debug!("Admin session rejected: {}", message);
            }

            GateDecision::Redirect(LOGIN_ROUTE.to_string())
        }
    }
}

/// Same gate, reading the token from `store` first.
pub async fn check_stored_session(config: &RequestConfig, store: &TokenStore) -> GateDecision {
    let config = RequestConfig {
        token: store.load(),
        ..config.clone()
    };

    check_admin_session(&config).await
}
