// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Each test binary compiles this module separately and uses a different
// subset of the helpers, so unused-item warnings are off here.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Port 1 refuses connections immediately, so commands that do reach for
/// the network fail fast and deterministically.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:1/api";

/// A `reef` command isolated to the given temp directory: session state,
/// config, and API URL all point away from the developer's real setup.
pub fn reef(state: &TempDir) -> Command {
    let mut cmd = cargo_bin_cmd!("reef");
    cmd.env("REEF_STATE_DIR", state.path())
        .env("REEF_CONFIG_DIR", state.path().join("config"))
        .env("REEF_API", UNREACHABLE_API);
    cmd
}

pub fn temp_state() -> TempDir {
    TempDir::new().unwrap()
}

/// Serves one canned HTTP response on an ephemeral port from a background
/// thread, then hands back the raw request it saw. Reads up to the header
/// terminator, so it suits body-less requests. Join only after the command
/// has run.
pub fn one_shot_api(
    status_line: &'static str,
    body: &'static str,
) -> (String, std::thread::JoinHandle<String>) {
    use std::io::{Read, Write};

    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let addr = listener.local_addr().unwrap();
    let handle = std::thread::spawn(move || {
        let (mut conn, _) = listener.accept().unwrap();
        let mut buf = Vec::new();
        let mut chunk = [0u8; 1024];
        loop {
            let n = conn.read(&mut chunk).unwrap();
            if n == 0 {
                break;
            }
            buf.extend_from_slice(&chunk[..n]);
            if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                break;
            }
        }
        let reply = format!(
            "HTTP/1.1 {status_line}\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        conn.write_all(reply.as_bytes()).unwrap();
        String::from_utf8_lossy(&buf).into_owned()
    });
    (format!("http://{addr}/api"), handle)
}

/// Plants a signed-in session record the way the client persists it.
pub fn write_session(state: &TempDir, username: &str) {
    let record = format!(
        r#"{{"id":1,"username":"{u}","name":"{u} Example","type":"student","bio":"","gender":"OTHER","followers":0,"following":0,"isAuthenticated":true}}"#,
        u = username
    );
    std::fs::write(state.path().join("session.json"), record).unwrap();
}
