// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use clap::{Parser, Subcommand, ValueEnum};

/// Parse a string that must not be empty or whitespace-only.
fn non_empty_string(s: &str) -> Result<String, String> {
    if s.trim().is_empty() {
        Err("cannot be empty".to_string())
    } else {
        Ok(s.to_string())
    }
}

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "reef")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "A command-line client for the reef social feed")]
#[command(
    long_about = "A command-line client for the reef social feed.\n\n\
    Sign in, read the feed, publish posts, and toggle likes against a reef API server."
)]
pub struct Cli {
    /// API base URL (overrides REEF_API and the config file)
    #[arg(long, global = true, value_name = "URL")]
    pub api: Option<String>,

    /// Enable debug logging
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Sign in as an existing user
    #[command(arg_required_else_help = true)]
    Login {
        /// Username to sign in as
        #[arg(value_parser = non_empty_string)]
        username: String,
    },

    /// Sign out and discard the stored session
    Logout,

    /// Create an account and sign in
    #[command(
        arg_required_else_help = true,
        after_help = "\
Examples:
  reef register ada --name \"Ada Lovelace\"                   Create a student account
  reef register grace --name \"Grace Hopper\" --role teacher   Create a teacher account
  reef register ada --name Ada --gender female --bio \"hi\"    Fill in profile details"
    )]
    Register {
        /// Username for the new account
        #[arg(value_parser = non_empty_string)]
        username: String,

        /// Display name shown on posts
        #[arg(long, value_parser = non_empty_string)]
        name: String,

        /// Account role (student, teacher)
        #[arg(long, default_value = "student")]
        role: String,

        /// Gender category, used for the generated avatar (male, female, other, prefer-not-to-say)
        #[arg(long, default_value = "prefer-not-to-say")]
        gender: String,

        /// Profile bio
        #[arg(long)]
        bio: Option<String>,

        /// Custom avatar URL (otherwise one is generated)
        #[arg(long)]
        avatar: Option<String>,
    },

    /// Check whether a username is still available
    #[command(arg_required_else_help = true)]
    Check {
        /// Username to probe
        #[arg(value_parser = non_empty_string)]
        username: String,
    },

    /// Show the signed-in user
    Whoami {
        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show the post feed
    #[command(after_help = "\
Examples:
  reef feed                  Show the whole feed
  reef feed --user ada       Show only ada's posts
  reef feed -o json          Output posts as JSON lines")]
    Feed {
        /// Only show posts by this username
        #[arg(long, value_name = "USERNAME")]
        user: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Publish a post to the feed
    #[command(arg_required_else_help = true)]
    Post {
        /// Post content
        content: String,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Toggle your like on a post
    #[command(arg_required_else_help = true)]
    Like {
        /// Post ID, as shown by 'reef feed'
        post_id: u64,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Show a user profile
    Profile {
        /// Username to look up (defaults to the signed-in user)
        username: Option<String>,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum, default_value = "text")]
        output: OutputFormat,
    },

    /// Account maintenance
    #[command(subcommand)]
    Account(AccountCommand),

    /// Show or change CLI configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

#[derive(Debug, Subcommand)]
pub enum AccountCommand {
    /// Permanently delete the signed-in account
    Delete {
        /// Confirm the deletion
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Print the config file location and the active API URL
    Show,
    /// Store an API base URL in the config file
    SetApi {
        /// URL such as http://localhost:8080/api
        #[arg(value_parser = non_empty_string)]
        url: String,
    },
    /// Remove the stored API base URL
    UnsetApi,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
