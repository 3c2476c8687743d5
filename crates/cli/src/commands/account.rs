// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use rf_client::{SessionStore, Users};

use crate::cli::OutputFormat;
use crate::display;
use crate::error::{Error, Result};

use super::open_client;

pub async fn profile(api_url: &str, username: Option<&str>, output: OutputFormat) -> Result<()> {
    let (cell, gateway) = open_client(api_url);
    let users = Users::new(gateway);

    let target = match username {
        Some(u) => u.to_string(),
        None => cell.username().ok_or(Error::NotSignedIn)?,
    };

    let user = users.by_username(&target).await?;
    match output {
        OutputFormat::Text => println!("{}", display::format_profile(&user)),
        OutputFormat::Json => println!("{}", serde_json::to_string(&user)?),
    }
    Ok(())
}

/// Deletes the signed-in account server-side, then discards the local
/// session. Refuses to run without the explicit `--yes` confirmation.
pub async fn delete(api_url: &str, yes: bool) -> Result<()> {
    if !yes {
        return Err(Error::DeletionNotConfirmed);
    }

    let (cell, gateway) = open_client(api_url);
    let users = Users::new(gateway);
    let store = SessionStore::new(cell, users.clone());

    let session = store.current().ok_or(Error::NotSignedIn)?;
    users.delete(session.user.id).await?;
    store.logout();

    println!("account @{} deleted", session.user.username);
    Ok(())
}
