// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rf-client: Networked components for the reef social-feed client
//!
//! This crate wires the session capability cell, the HTTP gateway, and
//! the feed synchronizer together. The cell is the one piece of shared
//! state; the gateway is the only component that talks to the network,
//! and everything above it works in terms of the closed error taxonomy
//! from rf-core.

pub mod context;
pub mod feed;
pub mod gateway;
pub mod posts;
pub mod session;
pub mod users;

#[cfg(test)]
pub(crate) mod testutil;

pub use context::SessionCell;
pub use feed::{FeedSync, LikeSync};
pub use gateway::{Gateway, UnauthorizedHook};
pub use posts::Posts;
pub use session::SessionStore;
pub use users::Users;
