// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Generated avatar URLs using DiceBear's Avataaars API.
//!
//! Accounts without a custom avatar get a deterministic generated one,
//! seeded by username so the same account always renders the same face.

use crate::model::{Author, Gender, User};

/// Base endpoint for generated avatars.
const AVATAR_API_BASE: &str = "https://api.dicebear.com/7.x/avataaars/svg";

/// Palette cycled by the generator for card backgrounds.
const BACKGROUND_COLORS: &str = "b6e3f4,ffd5dc,d5d7e1,f0d986,85daef,92e1c0,9cbbf9,ffb5cf";
const BACKGROUND_TYPE: &str = "gradientLinear";
const RADIUS: &str = "25";

/// Maps an account gender to the generator's parameter value.
///
/// The generator only understands male/female; other maps to female and
/// prefer-not-to-say omits the parameter.
fn gender_param(gender: Gender) -> Option<&'static str> {
    match gender {
        Gender::Male => Some("male"),
        Gender::Female | Gender::Other => Some("female"),
        Gender::PreferNotToSay => None,
    }
}

/// Builds a deterministic avatar URL for a seed.
///
/// An empty seed falls back to `"user"` so the URL is always valid.
pub fn avatar_url(seed: &str, gender: Option<Gender>) -> String {
    let seed = if seed.is_empty() { "user" } else { seed };
    let mut url = format!("{AVATAR_API_BASE}?seed={}", urlencoding::encode(seed));
    if let Some(g) = gender.and_then(gender_param) {
        url.push_str("&gender=");
        url.push_str(g);
    }
    url.push_str("&backgroundColor=");
    url.push_str(&urlencoding::encode(BACKGROUND_COLORS));
    url.push_str("&backgroundType=");
    url.push_str(BACKGROUND_TYPE);
    url.push_str("&radius=");
    url.push_str(RADIUS);
    url
}

/// The avatar to display for an account: the custom reference when set,
/// otherwise a generated one seeded by username, or by display name for
/// records that carry none.
pub fn user_avatar(user: &User) -> String {
    match user.avatar_ref() {
        Some(custom) => custom.to_string(),
        None => {
            let seed = if user.username.is_empty() {
                user.display_name.as_str()
            } else {
                user.username.as_str()
            };
            avatar_url(seed, Some(user.gender))
        }
    }
}

/// The avatar to display for a post author.
///
/// Feed responses carry no gender, so generated author avatars are
/// seeded by username alone.
pub fn author_avatar(author: &Author) -> String {
    match author.avatar.as_deref().filter(|a| !a.is_empty()) {
        Some(custom) => custom.to_string(),
        None => avatar_url(&author.username, None),
    }
}

#[cfg(test)]
#[path = "avatar_tests.rs"]
mod tests;
