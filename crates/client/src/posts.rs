// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed access to the /posts endpoints.

use rf_core::{NewPost, Post, Result};

use crate::gateway::Gateway;

/// Wrapper over the feed endpoints.
#[derive(Clone)]
pub struct Posts {
    gateway: Gateway,
}

impl Posts {
    pub fn new(gateway: Gateway) -> Self {
        Posts { gateway }
    }

    /// Fetches the feed, newest first.
    ///
    /// When a username is given the server scopes each post's `liked`
    /// flag to that identity; without one every flag comes back false.
    pub async fn list(&self, username: Option<&str>) -> Result<Vec<Post>> {
        let path = match username {
            Some(u) => format!("/posts?username={}", urlencoding::encode(u)),
            None => "/posts".to_string(),
        };
        self.gateway.get_json(&path).await
    }

    /// Publishes a post. The response body is ignored; callers reload
    /// the feed for the authoritative state.
    pub async fn create(&self, new_post: &NewPost) -> Result<()> {
        self.gateway.post_unit("/posts", new_post).await
    }

    /// Toggles the identity's like on a post, returning the post as the
    /// server now sees it.
    pub async fn like(&self, post_id: u64, username: &str) -> Result<Post> {
        let path = format!(
            "/posts/{post_id}/like?username={}",
            urlencoding::encode(username)
        );
        self.gateway.post_empty(&path).await
    }
}

#[cfg(test)]
#[path = "posts_tests.rs"]
mod tests;
