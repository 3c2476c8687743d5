// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The shared session capability cell.
//!
//! Exactly one session exists per running client. The cell pairs the
//! in-memory record with its durable file so every transition persists
//! as part of the same step, and hands out clones to the components
//! that need to observe it. The session store is the only component
//! that sets it; the gateway is the only one that clears it as a side
//! effect of an unauthorized response.

use std::sync::{Arc, RwLock};

use rf_core::{Result, Session, SessionFile};

/// Shared handle to the current session. Clones observe the same state.
#[derive(Debug, Clone)]
pub struct SessionCell {
    inner: Arc<Inner>,
}

#[derive(Debug)]
struct Inner {
    /// The in-memory session, absent when signed out.
    current: RwLock<Option<Session>>,
    /// Durable backing record.
    file: SessionFile,
}

impl SessionCell {
    /// Creates an empty cell backed by the given session file.
    pub fn new(file: SessionFile) -> Self {
        SessionCell {
            inner: Arc::new(Inner {
                current: RwLock::new(None),
                file,
            }),
        }
    }

    /// Creates an empty cell backed by the default session file.
    pub fn open_default() -> Self {
        SessionCell::new(SessionFile::default_location())
    }

    /// Loads any persisted session into memory.
    ///
    /// Corrupt or unreadable data counts as no session and never fails.
    /// Returns true when a session was restored.
    pub fn restore(&self) -> bool {
        let restored = self.inner.file.load();
        let found = restored.is_some();
        *self.write() = restored;
        found
    }

    /// A snapshot of the current session.
    pub fn current(&self) -> Option<Session> {
        self.read().clone()
    }

    /// The current bearer credential, when signed in with one.
    pub fn token(&self) -> Option<String> {
        self.read().as_ref().and_then(|s| s.token().map(String::from))
    }

    /// The signed-in identity's username.
    pub fn username(&self) -> Option<String> {
        self.read().as_ref().map(|s| s.username().to_string())
    }

    pub fn is_authenticated(&self) -> bool {
        self.read().is_some()
    }

    /// Persists and publishes a new session in one step.
    ///
    /// The file is written before memory changes, so a persistence
    /// failure leaves the old session observable everywhere.
    pub fn set(&self, session: Session) -> Result<()> {
        self.inner.file.save(&session)?;
        *self.write() = Some(session);
        Ok(())
    }

    /// Drops the session, in memory and on disk.
    ///
    /// Idempotent and infallible. Returns true only for the call that
    /// actually removed a session, so side effects tied to the signed-in
    /// to signed-out transition run once.
    pub fn clear(&self) -> bool {
        let took = self.write().take().is_some();
        if let Err(e) = self.inner.file.clear() {
            tracing::warn!("failed to remove session file: {e}");
        }
        took
    }

    /// Path of the backing session file.
    pub fn file_path(&self) -> &std::path::Path {
        self.inner.file.path()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, Option<Session>> {
        self.inner.current.read().unwrap_or_else(|e| e.into_inner())
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, Option<Session>> {
        self.inner.current.write().unwrap_or_else(|e| e.into_inner())
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
