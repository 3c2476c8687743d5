// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rf_client::{SessionCell, SessionStore, Users};
use rf_core::{Gender, NewUser, Role};

use crate::cli::OutputFormat;
use crate::display;
use crate::error::{Error, Result};

use super::open_client;

fn open_store(api_url: &str) -> SessionStore {
    let (cell, gateway) = open_client(api_url);
    SessionStore::new(cell, Users::new(gateway))
}

pub async fn login(api_url: &str, username: &str) -> Result<()> {
    let store = open_store(api_url);
    let user = store.login(username).await?;
    println!("signed in as @{} ({})", user.username, user.display_name);
    Ok(())
}

pub fn logout(api_url: &str) -> Result<()> {
    let store = open_store(api_url);
    let previous = store.current();
    store.logout();
    match previous {
        Some(s) => println!("signed out @{}", s.user.username),
        None => println!("not signed in"),
    }
    Ok(())
}

/// Two-step signup: refuse locally when the username is taken, then
/// submit the registration, which also signs the new account in.
#[allow(clippy::too_many_arguments)]
pub async fn register(
    api_url: &str,
    username: &str,
    name: &str,
    role: &str,
    gender: &str,
    bio: Option<&str>,
    avatar: Option<&str>,
) -> Result<()> {
    let role: Role = role.parse()?;
    let gender: Gender = gender.parse()?;

    let store = open_store(api_url);
    if !store.check_username(username).await? {
        return Err(Error::UsernameTaken(username.to_string()));
    }

    let mut new_user = NewUser::new(username, name, role, gender);
    if let Some(bio) = bio {
        new_user = new_user.with_bio(bio);
    }
    if let Some(avatar) = avatar {
        new_user = new_user.with_avatar(avatar);
    }

    let user = store.register(&new_user).await?;
    println!("account created, signed in as @{}", user.username);
    Ok(())
}

pub async fn check(api_url: &str, username: &str) -> Result<()> {
    let store = open_store(api_url);
    if store.check_username(username).await? {
        println!("@{} is available", username);
    } else {
        println!("@{} is taken", username);
    }
    Ok(())
}

pub fn whoami(output: OutputFormat) -> Result<()> {
    let cell = SessionCell::open_default();
    cell.restore();
    let session = cell.current().ok_or(Error::NotSignedIn)?;
    match output {
        OutputFormat::Text => println!("{}", display::format_session(&session)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&session)?),
    }
    Ok(())
}
