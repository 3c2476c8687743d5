// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod account;
pub mod config;
pub mod feed;
pub mod session;

use tracing::debug;

use rf_client::{Gateway, SessionCell};

/// Opens the client stack: the persisted session is restored into a
/// fresh cell and the gateway is wired to announce forced sign-outs.
pub fn open_client(api_url: &str) -> (SessionCell, Gateway) {
    debug!("opening client against {}", api_url);
    let cell = SessionCell::open_default();
    cell.restore();
    let gateway = Gateway::new(api_url, cell.clone()).with_unauthorized_hook(|| {
        eprintln!("session rejected by the server, signed out");
    });
    (cell, gateway)
}
