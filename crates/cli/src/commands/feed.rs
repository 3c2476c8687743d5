// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::Utc;

use rf_client::{FeedSync, LikeSync, Posts};
use rf_core::Post;

use crate::cli::OutputFormat;
use crate::display;
use crate::error::Result;

use super::open_client;

fn open_feed(api_url: &str) -> FeedSync {
    let (cell, gateway) = open_client(api_url);
    FeedSync::new(cell, Posts::new(gateway))
}

fn print_posts(posts: &[&Post], output: OutputFormat) -> Result<()> {
    match output {
        OutputFormat::Text => {
            if posts.is_empty() {
                println!("no posts");
                return Ok(());
            }
            let now = Utc::now();
            for (i, post) in posts.iter().enumerate() {
                if i > 0 {
                    println!();
                }
                for line in display::format_post(post, now) {
                    println!("{}", line);
                }
            }
        }
        OutputFormat::Json => {
            // One JSON object per line, like the server's array flattened.
            for post in posts {
                println!("{}", serde_json::to_string(post)?);
            }
        }
    }
    Ok(())
}

pub async fn feed(api_url: &str, user: Option<&str>, output: OutputFormat) -> Result<()> {
    let mut sync = open_feed(api_url);
    sync.refresh().await?;
    // The author filter is presentation-only; the wire query scopes liked
    // flags, not authorship.
    let posts: Vec<&Post> = sync
        .snapshot()
        .iter()
        .filter(|p| user.map_or(true, |u| p.author.username == u))
        .collect();
    print_posts(&posts, output)
}

pub async fn post(api_url: &str, content: &str, output: OutputFormat) -> Result<()> {
    let (cell, gateway) = open_client(api_url);
    let mut sync = FeedSync::new(cell.clone(), Posts::new(gateway));
    let posts = sync.create_post(content).await?;
    match output {
        OutputFormat::Text => {
            let author = cell.username().unwrap_or_default();
            println!("posted as @{} ({} posts in the feed)", author, posts.len());
        }
        OutputFormat::Json => {
            let posts: Vec<&Post> = posts.iter().collect();
            print_posts(&posts, output)?;
        }
    }
    Ok(())
}

pub async fn like(api_url: &str, post_id: u64, output: OutputFormat) -> Result<()> {
    let mut sync = open_feed(api_url);
    sync.refresh().await?;
    match sync.toggle_like(post_id).await? {
        LikeSync::Patched(post) => {
            match output {
                OutputFormat::Text => {
                    let verb = if post.liked { "liked" } else { "unliked" };
                    println!("{} #{}: {}", verb, post.id, display::format_counters(&post));
                }
                OutputFormat::Json => println!("{}", serde_json::to_string(&post)?),
            }
            Ok(())
        }
        LikeSync::Reloaded { cause } => {
            eprintln!("the like did not apply; feed reloaded from the server");
            Err(cause.into())
        }
    }
}
