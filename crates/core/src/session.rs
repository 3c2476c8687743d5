// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Session record and on-disk persistence.
//!
//! One serialized session record lives under the reef state directory.
//! Absence or corruption reads back as "no session"; a corrupt file is
//! deleted on load so it is not re-parsed on every start.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::model::User;

/// Environment variable names honored by session storage.
pub mod names {
    /// Overrides the directory holding `session.json`.
    pub const REEF_STATE_DIR: &str = "REEF_STATE_DIR";
    /// Standard XDG base directory for state files.
    pub const XDG_STATE_HOME: &str = "XDG_STATE_HOME";
}

/// Filename of the persisted session record.
const SESSION_FILE: &str = "session.json";

/// The client-held record of the authenticated identity.
///
/// The wire form is the user object with an `isAuthenticated` flag mixed
/// in, which is how the record has always been written. A record that
/// parses counts as signed in even if the flag is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    #[serde(flatten)]
    pub user: User,
    #[serde(rename = "isAuthenticated", default = "default_true")]
    pub authenticated: bool,
}

fn default_true() -> bool {
    true
}

impl Session {
    /// Wraps an identity returned by login or registration.
    pub fn new(user: User) -> Self {
        Session {
            user,
            authenticated: true,
        }
    }

    /// The bearer credential carried by this session, if any.
    pub fn token(&self) -> Option<&str> {
        self.user.token.as_deref()
    }

    /// The session owner's handle.
    pub fn username(&self) -> &str {
        &self.user.username
    }
}

/// Handle to the on-disk session record.
#[derive(Debug, Clone)]
pub struct SessionFile {
    path: PathBuf,
}

impl SessionFile {
    /// Opens the session file at an explicit path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        SessionFile { path: path.into() }
    }

    /// Opens the session file under the default state directory.
    pub fn default_location() -> Self {
        SessionFile {
            path: state_dir().join(SESSION_FILE),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Reads the persisted session.
    ///
    /// Absent or unreadable data is "no session". Corrupt data is also
    /// "no session", and the file is removed so the bad record does not
    /// survive into the next start.
    pub fn load(&self) -> Option<Session> {
        let data = fs::read_to_string(&self.path).ok()?;
        match serde_json::from_str(&data) {
            Ok(session) => Some(session),
            Err(_) => {
                let _ = fs::remove_file(&self.path);
                None
            }
        }
    }

    /// Persists the session with fsync, creating parent directories.
    pub fn save(&self, session: &Session) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string(session)?;
        let mut file = fs::File::create(&self.path)?;
        file.write_all(json.as_bytes())?;
        file.sync_all()?;
        Ok(())
    }

    /// Removes the persisted session. A missing file is not an error.
    pub fn clear(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// Resolves the reef state directory.
///
/// Honors `REEF_STATE_DIR`, then the XDG state home, then falls back to
/// `~/.local/state/reef`.
pub fn state_dir() -> PathBuf {
    if let Ok(dir) = std::env::var(names::REEF_STATE_DIR) {
        return PathBuf::from(dir);
    }
    if let Ok(dir) = std::env::var(names::XDG_STATE_HOME) {
        return PathBuf::from(dir).join("reef");
    }
    dirs::home_dir()
        .map(|h| h.join(".local/state/reef"))
        .unwrap_or_else(|| PathBuf::from(".local/state/reef"))
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
