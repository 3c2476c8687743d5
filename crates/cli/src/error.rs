// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All errors surfaced by the `reef` CLI.
///
/// Client errors pass through with their own user-facing messages; the
/// variants here cover what only the CLI layer can decide.
#[derive(Debug, Error)]
pub enum Error {
    #[error("not signed in\n  hint: run 'reef login <username>' first")]
    NotSignedIn,

    #[error("username '{0}' is already taken")]
    UsernameTaken(String),

    #[error("account deletion requires --yes\n  hint: deletion is permanent and also discards the local session")]
    DeletionNotConfirmed,

    #[error("config error: {0}")]
    Config(String),

    #[error("{0}")]
    Client(#[from] rf_core::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
