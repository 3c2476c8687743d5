// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Typed access to the /users endpoints.

use serde::Deserialize;

use rf_core::{Error, NewUser, Result, User};

use crate::gateway::Gateway;

/// Wrapper over the account endpoints. All transport goes through the
/// gateway; this layer only shapes paths and sharpens error wording.
#[derive(Clone)]
pub struct Users {
    gateway: Gateway,
}

/// Response shape of the availability check.
#[derive(Debug, Deserialize)]
struct Availability {
    available: bool,
}

impl Users {
    pub fn new(gateway: Gateway) -> Self {
        Users { gateway }
    }

    /// Looks up an account by handle.
    pub async fn by_username(&self, username: &str) -> Result<User> {
        let path = format!("/users/username/{}", urlencoding::encode(username));
        self.gateway.get_json(&path).await.map_err(|e| match e {
            Error::NotFound(_) => Error::NotFound("user not found".into()),
            other => other,
        })
    }

    /// True when the handle is still free.
    pub async fn check_username(&self, username: &str) -> Result<bool> {
        let path = format!("/users/check-username/{}", urlencoding::encode(username));
        let availability: Availability = self.gateway.get_json(&path).await?;
        Ok(availability.available)
    }

    /// Registers a new account. The response carries the assigned id and
    /// the first session credential.
    pub async fn create(&self, new_user: &NewUser) -> Result<User> {
        self.gateway
            .post_json("/users", new_user)
            .await
            .map_err(|e| match e {
                Error::Conflict(_) => Error::Conflict("username already exists".into()),
                other => other,
            })
    }

    /// Deletes an account by id.
    pub async fn delete(&self, id: u64) -> Result<()> {
        self.gateway.delete(&format!("/users/{id}")).await
    }
}

#[cfg(test)]
#[path = "users_tests.rs"]
mod tests;
