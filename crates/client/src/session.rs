// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The session store: login, registration, and sign-out.
//!
//! Owns every transition into the signed-in state. The cell it mutates
//! is shared with the gateway, which may clear it behind this store's
//! back when the server rejects the credential.

use tracing::{debug, info};

use rf_core::{Error, NewUser, Result, Session, User};

use crate::context::SessionCell;
use crate::users::Users;

pub struct SessionStore {
    cell: SessionCell,
    users: Users,
}

impl SessionStore {
    pub fn new(cell: SessionCell, users: Users) -> Self {
        SessionStore { cell, users }
    }

    /// Loads any persisted session from disk.
    ///
    /// Corruption and absence both land in the signed-out state; this
    /// never fails. Returns true when a session was restored.
    pub fn restore(&self) -> bool {
        let restored = self.cell.restore();
        if restored {
            debug!("restored session for {:?}", self.cell.username());
        }
        restored
    }

    /// A snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.cell.current()
    }

    pub fn is_authenticated(&self) -> bool {
        self.cell.is_authenticated()
    }

    /// Signs in by looking the username up on the server.
    ///
    /// A blank username is rejected locally, without a network call.
    /// The session changes only on success; a miss or transport failure
    /// leaves whatever was signed in before untouched.
    pub async fn login(&self, username: &str) -> Result<User> {
        let username = username.trim();
        if username.is_empty() {
            return Err(Error::Validation("username is empty".into()));
        }
        let user = self.users.by_username(username).await?;
        self.cell.set(Session::new(user.clone()))?;
        info!("signed in as {}", user.username);
        Ok(user)
    }

    /// Registers a new account and signs in as it.
    pub async fn register(&self, new_user: &NewUser) -> Result<User> {
        let user = self.users.create(new_user).await?;
        self.cell.set(Session::new(user.clone()))?;
        info!("registered and signed in as {}", user.username);
        Ok(user)
    }

    /// True when the handle is still free. Never touches the session.
    pub async fn check_username(&self, username: &str) -> Result<bool> {
        self.users.check_username(username).await
    }

    /// Signs out. Safe to call when already signed out.
    pub fn logout(&self) {
        if self.cell.clear() {
            info!("signed out");
        }
    }
}

#[cfg(test)]
#[path = "session_tests.rs"]
mod tests;
