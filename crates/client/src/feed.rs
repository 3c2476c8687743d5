// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The feed synchronizer.
//!
//! Owns the in-memory feed snapshot and keeps it converging toward
//! server truth. Likes are applied optimistically and either confirmed
//! by the server's reply or discarded by reloading the whole feed; a
//! failed refresh clears the snapshot rather than leaving stale posts
//! behind.
//!
//! Overlapping loads are not sequenced. If refreshes race, whichever
//! response lands last wins, and a slow stale response can replace a
//! newer snapshot until the next reload. That is a deliberate trade:
//! convergence comes from reloading, not from locking or sequence
//! numbers.

use tracing::{debug, warn};

use rf_core::{Error, NewPost, Post, Result};

use crate::context::SessionCell;
use crate::posts::Posts;

/// Outcome of an optimistic like toggle.
#[derive(Debug)]
pub enum LikeSync {
    /// The optimistic patch was confirmed; the carried post holds the
    /// server's authoritative fields, already written to the snapshot.
    Patched(Post),
    /// The request failed and the optimistic patch was discarded by
    /// reloading the feed from the server.
    Reloaded {
        /// Why the toggle itself failed.
        cause: Error,
    },
}

/// Owner of the feed snapshot, scoped to the session's identity.
pub struct FeedSync {
    session: SessionCell,
    posts: Posts,
    snapshot: Vec<Post>,
}

impl FeedSync {
    pub fn new(session: SessionCell, posts: Posts) -> Self {
        FeedSync {
            session,
            posts,
            snapshot: Vec::new(),
        }
    }

    /// The current snapshot, in the order the server returned it.
    pub fn snapshot(&self) -> &[Post] {
        &self.snapshot
    }

    /// Reloads the feed, scoping liked flags to the signed-in identity
    /// when there is one.
    ///
    /// On failure the snapshot is cleared before the error returns; a
    /// previously successful snapshot does not outlive a failed refresh.
    pub async fn refresh(&mut self) -> Result<&[Post]> {
        let scope = self.session.username();
        match self.posts.list(scope.as_deref()).await {
            Ok(posts) => {
                debug!("feed refreshed, {} posts", posts.len());
                self.snapshot = posts;
                Ok(&self.snapshot)
            }
            Err(e) => {
                self.snapshot.clear();
                Err(e)
            }
        }
    }

    /// Publishes a post and refreshes.
    ///
    /// Requires a signed-in identity and non-empty content; both are
    /// rejected locally, before any network call. The refreshed
    /// snapshot, not the creation response, is the authoritative
    /// result.
    pub async fn create_post(&mut self, content: &str) -> Result<&[Post]> {
        let username = self
            .session
            .username()
            .ok_or_else(|| Error::Validation("sign in to post".into()))?;
        let content = content.trim();
        if content.is_empty() {
            return Err(Error::Validation("post content is empty".into()));
        }
        self.posts.create(&NewPost::new(content, username)).await?;
        self.refresh().await
    }

    /// Toggles the signed-in identity's like on a post.
    ///
    /// The flip lands in the snapshot before the request goes out, so
    /// the caller can render it immediately. A confirming response
    /// overwrites the post with the server's fields outright; on any
    /// failure the patch is discarded by reloading the whole feed,
    /// which converges even when several optimistic patches were in
    /// play. A missing identity or unknown post id is rejected locally
    /// without a network call.
    pub async fn toggle_like(&mut self, post_id: u64) -> Result<LikeSync> {
        let username = self
            .session
            .username()
            .ok_or_else(|| Error::Validation("sign in to like posts".into()))?;
        let Some(idx) = self.snapshot.iter().position(|p| p.id == post_id) else {
            return Err(Error::NotFound(format!(
                "post {post_id} is not in the loaded feed"
            )));
        };
        self.snapshot[idx].flip_like();

        match self.posts.like(post_id, &username).await {
            Ok(server_post) => {
                // Overwrite, not merge: the server's fields win outright.
                self.snapshot[idx] = server_post.clone();
                Ok(LikeSync::Patched(server_post))
            }
            Err(cause) => {
                if let Err(reload) = self.refresh().await {
                    warn!("feed reload after failed like also failed: {reload}");
                }
                Ok(LikeSync::Reloaded { cause })
            }
        }
    }
}

#[cfg(test)]
#[path = "feed_tests.rs"]
mod tests;
