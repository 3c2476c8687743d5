// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rf-core: Shared library for the reef social-feed client
//!
//! This crate provides the data model, error taxonomy, and session
//! persistence used by both the rf-client components and the reef CLI.

pub mod avatar;
pub mod error;
pub mod model;
pub mod session;

pub use error::{Error, Result};
pub use model::{Author, Gender, NewPost, NewUser, Post, Role, User};
pub use session::{Session, SessionFile};
