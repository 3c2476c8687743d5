// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! reefrs - The library behind the `reef` CLI.
//!
//! A thin terminal front-end over the reef client stack:
//!
//! - [`rf_client::SessionStore`] for login, registration, and sign-out
//! - [`rf_client::FeedSync`] for reading the feed, posting, and likes
//! - [`config`] for the API base URL resolution (flag, env, file, default)
//!
//! Commands print human-readable text by default and JSON with `-o json`;
//! all failures come back as [`Error`] values and reach the user through
//! the binary's single `error:` reporter.

mod cli;
mod commands;
mod display;

pub mod config;
pub mod error;

pub use cli::{AccountCommand, Cli, Command, ConfigCommand, OutputFormat};
pub use error::{Error, Result};

/// Execute a parsed CLI invocation. This is the main entry point for the
/// binary and provides a testable way to run commands without process
/// execution.
pub async fn run(cli: Cli) -> Result<()> {
    let api_url = config::resolve_api_url(cli.api.as_deref())?;
    match cli.command {
        Command::Login { username } => commands::session::login(&api_url, &username).await,
        Command::Logout => commands::session::logout(&api_url),
        Command::Register {
            username,
            name,
            role,
            gender,
            bio,
            avatar,
        } => {
            commands::session::register(
                &api_url,
                &username,
                &name,
                &role,
                &gender,
                bio.as_deref(),
                avatar.as_deref(),
            )
            .await
        }
        Command::Check { username } => commands::session::check(&api_url, &username).await,
        Command::Whoami { output } => commands::session::whoami(output),
        Command::Feed { user, output } => {
            commands::feed::feed(&api_url, user.as_deref(), output).await
        }
        Command::Post { content, output } => {
            commands::feed::post(&api_url, &content, output).await
        }
        Command::Like { post_id, output } => {
            commands::feed::like(&api_url, post_id, output).await
        }
        Command::Profile { username, output } => {
            commands::account::profile(&api_url, username.as_deref(), output).await
        }
        Command::Account(cmd) => match cmd {
            AccountCommand::Delete { yes } => commands::account::delete(&api_url, yes).await,
        },
        Command::Config(cmd) => commands::config::run(cmd),
    }
}
