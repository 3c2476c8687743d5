// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for rf-core operations.

use thiserror::Error;

/// All failures surfaced by reef components.
///
/// The first five variants are the closed taxonomy callers match on. The
/// gateway folds every server response and socket failure into one of
/// them, carrying a ready-to-print message.
#[derive(Debug, Error)]
pub enum Error {
    /// The requested entity does not exist on the server.
    #[error("{0}")]
    NotFound(String),

    /// The request collides with existing state, such as a taken username.
    #[error("{0}")]
    Conflict(String),

    /// The input was rejected, locally or by the server.
    #[error("{0}")]
    Validation(String),

    /// The session is missing, expired, or was refused by the server.
    #[error("{0}")]
    Unauthorized(String),

    /// The server was unreachable or replied with something unintelligible.
    #[error("{0}")]
    Transport(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// True when the failure means the current session is no longer valid.
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Error::Unauthorized(_))
    }
}

/// A specialized Result type for rf-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
