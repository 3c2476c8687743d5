// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};

use rf_core::avatar;
use rf_core::{Post, Role, Session, User};

/// Maximum line width for wrapped post content (excluding 4-space indent).
const WRAP_WIDTH: usize = 72;

/// Compact age of a timestamp relative to `now`.
///
/// - under a minute (or in the future): "now"
/// - under an hour: minutes, e.g. "5m"
/// - under a day: hours, e.g. "2h"
/// - under a week: days, e.g. "3d"
/// - anything older: the calendar date
pub fn relative_time(t: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now.signed_duration_since(t);
    let secs = elapsed.num_seconds();
    if secs < 60 {
        return "now".to_string();
    }
    if secs < 3600 {
        return format!("{}m", elapsed.num_minutes());
    }
    if secs < 86_400 {
        return format!("{}h", elapsed.num_hours());
    }
    if secs < 7 * 86_400 {
        return format!("{}d", elapsed.num_days());
    }
    t.format("%Y-%m-%d").to_string()
}

/// Wrap single-line text at word boundaries; multi-line text is kept
/// exactly as written.
pub fn wrap_text(content: &str, width: usize) -> String {
    if content.contains('\n') || content.len() <= width {
        return content.to_string();
    }

    let mut lines: Vec<String> = Vec::new();
    let mut line = String::new();
    for word in content.split_whitespace() {
        if !line.is_empty() && line.len() + 1 + word.len() > width {
            lines.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines.join("\n")
}

/// Format a single post for feed output.
///
/// ```text
/// #42  Ada Lovelace (@ada) [teacher]  2h
///     Content goes here, potentially
///     wrapped across multiple lines.
///     3 likes, 1 comment, liked by you
/// ```
pub fn format_post(post: &Post, now: DateTime<Utc>) -> Vec<String> {
    let mut lines = Vec::new();

    let mut header = format!(
        "#{}  {} (@{})",
        post.id, post.author.display_name, post.author.username
    );
    if post.author.role == Role::Teacher {
        header.push_str(" [teacher]");
    }
    if let Some(t) = post.created_at {
        header.push_str(&format!("  {}", relative_time(t, now)));
    }
    lines.push(header);

    let wrapped = wrap_text(&post.content, WRAP_WIDTH);
    for line in wrapped.lines() {
        lines.push(format!("    {}", line));
    }

    lines.push(format!("    {}", format_counters(post)));
    lines
}

/// The likes/comments summary line for a post.
pub fn format_counters(post: &Post) -> String {
    let likes = match post.likes {
        1 => "1 like".to_string(),
        n => format!("{} likes", n),
    };
    let comments = match post.comments {
        1 => "1 comment".to_string(),
        n => format!("{} comments", n),
    };
    let mut line = format!("{}, {}", likes, comments);
    if post.liked {
        line.push_str(", liked by you");
    }
    line
}

/// Format a user profile for the profile command.
pub fn format_profile(user: &User) -> String {
    let mut output = Vec::new();

    output.push(format!("{} (@{})", user.display_name, user.username));
    output.push(format!("Role: {}", user.role));
    if !user.bio.is_empty() {
        output.push(format!("Bio: {}", user.bio));
    }
    output.push(format!("Followers: {}", user.followers));
    output.push(format!("Following: {}", user.following));
    output.push(format!("Avatar: {}", avatar::user_avatar(user)));
    if let Some(t) = user.created_at {
        output.push(format!("Joined: {}", t.format("%Y-%m-%d")));
    }

    output.join("\n")
}

/// One-line summary of the signed-in session.
pub fn format_session(session: &Session) -> String {
    format!(
        "signed in as @{} ({}, {})",
        session.user.username, session.user.display_name, session.user.role
    )
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
