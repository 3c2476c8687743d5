// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Core model types for the reef social-feed client.
//!
//! This module contains the wire-level data types exchanged with the REST
//! service: User, Author, Post, and the creation payloads. Field renames
//! track the service's JSON (`name`, `type`, `userName`, `createdAt`).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::{Error, Result};

/// Account role, as assigned at registration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// Regular learner account.
    Student,
    /// Educator account, badged in the feed.
    Teacher,
}

impl Role {
    /// Returns the string representation used on the wire and in display.
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Student => "student",
            Role::Teacher => "teacher",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Role {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "student" => Ok(Role::Student),
            "teacher" => Ok(Role::Teacher),
            _ => Err(Error::Validation(format!(
                "invalid role: '{s}'\n  hint: valid roles are: student, teacher"
            ))),
        }
    }
}

/// Self-reported gender category, used only for avatar generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNotToSay,
}

impl Gender {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "MALE",
            Gender::Female => "FEMALE",
            Gender::Other => "OTHER",
            Gender::PreferNotToSay => "PREFER_NOT_TO_SAY",
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Gender {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().replace('-', "_").as_str() {
            "male" => Ok(Gender::Male),
            "female" => Ok(Gender::Female),
            "other" => Ok(Gender::Other),
            "prefer_not_to_say" => Ok(Gender::PreferNotToSay),
            _ => Err(Error::Validation(format!(
                "invalid gender: '{s}'\n  hint: valid values are: male, female, other, prefer-not-to-say"
            ))),
        }
    }
}

/// A registered account as the service returns it.
///
/// `token` is only populated on responses from authenticating endpoints;
/// the gateway forwards it as the bearer credential on later requests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Server-assigned identifier.
    pub id: u64,
    /// Unique handle; the sole identity key for lookup and login.
    pub username: String,
    /// Human display name.
    #[serde(rename = "name")]
    pub display_name: String,
    /// Account role.
    #[serde(rename = "type")]
    pub role: Role,
    /// Free-form profile text.
    #[serde(default)]
    pub bio: String,
    /// Gender category driving generated avatars.
    pub gender: Gender,
    /// Custom avatar reference; the service sends an empty string when unset.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    #[serde(default)]
    pub followers: u32,
    #[serde(default)]
    pub following: u32,
    /// Bearer credential issued at login or registration.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl User {
    /// The custom avatar reference, if set and non-empty.
    pub fn avatar_ref(&self) -> Option<&str> {
        self.avatar.as_deref().filter(|a| !a.is_empty())
    }
}

/// The author summary embedded in feed responses.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Author {
    pub username: String,
    #[serde(rename = "name")]
    pub display_name: String,
    #[serde(rename = "type")]
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

/// A feed entry.
///
/// `liked` is scoped to the identity the feed was fetched for; the same
/// post fetched for a different identity may carry a different flag.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    /// Server-assigned identifier.
    pub id: u64,
    /// Who wrote it.
    #[serde(rename = "user")]
    pub author: Author,
    /// Non-empty body text.
    pub content: String,
    #[serde(rename = "createdAt", default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    /// Total like count, never negative.
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub comments: u32,
    /// Whether the fetching identity has liked this post.
    #[serde(default)]
    pub liked: bool,
}

impl Post {
    /// Applies the optimistic like flip: inverts `liked` and moves the
    /// count by one, clamped at zero on decrement.
    pub fn flip_like(&mut self) {
        if self.liked {
            self.liked = false;
            self.likes = self.likes.saturating_sub(1);
        } else {
            self.liked = true;
            self.likes = self.likes.saturating_add(1);
        }
    }
}

/// Registration payload for `POST /users`.
///
/// Counters start at zero and `avatar` is sent empty; the service fills
/// in the id and issues the first token.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewUser {
    #[serde(rename = "name")]
    pub display_name: String,
    pub username: String,
    #[serde(rename = "type")]
    pub role: Role,
    pub bio: String,
    pub gender: Gender,
    pub avatar: String,
    pub followers: u32,
    pub following: u32,
}

impl NewUser {
    /// Creates a registration payload with empty bio and avatar.
    pub fn new(
        username: impl Into<String>,
        display_name: impl Into<String>,
        role: Role,
        gender: Gender,
    ) -> Self {
        NewUser {
            display_name: display_name.into(),
            username: username.into(),
            role,
            bio: String::new(),
            gender,
            avatar: String::new(),
            followers: 0,
            following: 0,
        }
    }

    /// Sets the profile bio.
    pub fn with_bio(mut self, bio: impl Into<String>) -> Self {
        self.bio = bio.into();
        self
    }

    /// Sets a custom avatar reference.
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = avatar.into();
        self
    }
}

/// Creation payload for `POST /posts`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub content: String,
    /// Author handle; the service resolves it to the account.
    #[serde(rename = "userName")]
    pub username: String,
}

impl NewPost {
    pub fn new(content: impl Into<String>, username: impl Into<String>) -> Self {
        NewPost {
            content: content.into(),
            username: username.into(),
        }
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
