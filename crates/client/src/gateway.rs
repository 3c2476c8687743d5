// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! HTTP gateway to the REST service.
//!
//! The sole egress point for outbound requests. Injects the session's
//! bearer credential, folds every response into the closed error
//! taxonomy, and clears the session whenever any request comes back
//! unauthorized, independent of which operation triggered it. Callers
//! match on error kind; no status code leaves this module.

use std::sync::Arc;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use rf_core::{Error, Result};

use crate::context::SessionCell;

/// Run after an unauthorized response has cleared the session; the
/// shell uses it to steer the user back to the signed-out entry view.
pub type UnauthorizedHook = Arc<dyn Fn() + Send + Sync>;

/// HTTP client bound to one service and one session cell.
#[derive(Clone)]
pub struct Gateway {
    http: Client,
    base_url: String,
    session: SessionCell,
    on_unauthorized: Option<UnauthorizedHook>,
}

impl Gateway {
    /// Creates a gateway for the service at `base_url`.
    pub fn new(base_url: impl Into<String>, session: SessionCell) -> Self {
        let mut base_url = base_url.into();
        while base_url.ends_with('/') {
            base_url.pop();
        }
        Gateway {
            http: Client::new(),
            base_url,
            session,
            on_unauthorized: None,
        }
    }

    /// Installs the hook run when a response clears the session.
    pub fn with_unauthorized_hook(mut self, hook: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_unauthorized = Some(Arc::new(hook));
        self
    }

    /// The service base URL, without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.dispatch(self.request(Method::GET, path)).await?;
        decode(resp).await
    }

    pub async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let resp = self
            .dispatch(self.request(Method::POST, path).json(body))
            .await?;
        decode(resp).await
    }

    /// POST with a JSON body, discarding whatever the server replies.
    pub async fn post_unit<B: Serialize + ?Sized>(&self, path: &str, body: &B) -> Result<()> {
        self.dispatch(self.request(Method::POST, path).json(body))
            .await?;
        Ok(())
    }

    /// Body-less POST returning JSON.
    pub async fn post_empty<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let resp = self.dispatch(self.request(Method::POST, path)).await?;
        decode(resp).await
    }

    /// DELETE, discarding any response body.
    pub async fn delete(&self, path: &str) -> Result<()> {
        self.dispatch(self.request(Method::DELETE, path)).await?;
        Ok(())
    }

    fn request(&self, method: Method, path: &str) -> RequestBuilder {
        debug!("{} {}", method, path);
        let mut req = self.http.request(method, format!("{}{}", self.base_url, path));
        if let Some(token) = self.session.token() {
            req = req.bearer_auth(token);
        }
        req
    }

    async fn dispatch(&self, req: RequestBuilder) -> Result<Response> {
        let resp = req
            .send()
            .await
            .map_err(|e| Error::Transport(format!("request failed: {e}")))?;
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        if status == StatusCode::UNAUTHORIZED {
            self.expire_session();
        }
        debug!("request rejected with {}", status);
        Err(map_status(status, read_detail(resp).await))
    }

    /// The global unauthorized side effect: drop the session and notify
    /// the shell, once per signed-in period.
    fn expire_session(&self) {
        if self.session.clear() {
            warn!("server rejected the session credential, signing out");
            if let Some(hook) = &self.on_unauthorized {
                hook();
            }
        }
    }
}

/// Error payload shape used by the service; either field may be present.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    #[serde(default)]
    detail: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

async fn read_detail(resp: Response) -> Option<String> {
    let body: ErrorBody = resp.json().await.ok()?;
    body.detail.or(body.message)
}

/// Folds a non-success status into the closed taxonomy. The server's
/// own wording wins when the body carries any.
fn map_status(status: StatusCode, detail: Option<String>) -> Error {
    match status {
        StatusCode::NOT_FOUND => Error::NotFound(detail.unwrap_or_else(|| "not found".into())),
        StatusCode::CONFLICT => Error::Conflict(detail.unwrap_or_else(|| "conflict".into())),
        StatusCode::BAD_REQUEST => {
            Error::Validation(detail.unwrap_or_else(|| "invalid request data".into()))
        }
        StatusCode::UNAUTHORIZED => {
            Error::Unauthorized(detail.unwrap_or_else(|| "session rejected, sign in again".into()))
        }
        s => Error::Transport(format!("unexpected status {s}")),
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T> {
    resp.json::<T>()
        .await
        .map_err(|e| Error::Transport(format!("malformed response: {e}")))
}

#[cfg(test)]
#[path = "gateway_tests.rs"]
mod tests;
