// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use crate::cli::ConfigCommand;
use crate::config::{self, Config, DEFAULT_API_URL};
use crate::error::Result;

pub fn run(cmd: ConfigCommand) -> Result<()> {
    match cmd {
        ConfigCommand::Show => show(),
        ConfigCommand::SetApi { url } => set_api(&url),
        ConfigCommand::UnsetApi => unset_api(),
    }
}

fn show() -> Result<()> {
    let dir = config::config_dir();
    let loaded = Config::load(&dir)?;

    println!("config file: {}", config::config_path().display());
    match &loaded.api_url {
        Some(url) => println!("api_url: {}", url),
        None => println!("api_url: (unset, default is {})", DEFAULT_API_URL),
    }
    Ok(())
}

fn set_api(url: &str) -> Result<()> {
    let dir = config::config_dir();
    let mut loaded = Config::load(&dir)?;
    // Stored without trailing slashes so joined paths stay clean.
    loaded.api_url = Some(url.trim_end_matches('/').to_string());
    loaded.save(&dir)?;
    println!("api_url set to {}", loaded.api_url.as_deref().unwrap_or(""));
    Ok(())
}

fn unset_api() -> Result<()> {
    let dir = config::config_dir();
    let mut loaded = Config::load(&dir)?;
    loaded.api_url = None;
    loaded.save(&dir)?;
    println!("api_url cleared, default is {}", DEFAULT_API_URL);
    Ok(())
}
