// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Tracing setup and a stand-in backend for runner tests

use std::sync::Once;

use keystretch_core::{HashWidth, Pbkdf2Error, validate_request};
use tracing_subscriber::EnvFilter;

/// Installs a test-writer subscriber once; `RUST_LOG` selects targets.
pub fn init_tracing() {
    static ONCE: Once = Once::new();

    ONCE.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_test_writer()
            .init();
    });
}

/// Validates like a real backend, then fills the output with `cost as u8`
/// repeated.
pub fn fill_with_cost(
    width: HashWidth,
    _password: &[u8],
    _salt: &[u8],
    cost: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    validate_request(width, cost, out.len())?;
    out.fill(cost as u8);
    Ok(())
}

/// Accepts every length, which a conforming backend must not do.
pub fn accept_any_length(
    _width: HashWidth,
    _password: &[u8],
    _salt: &[u8],
    cost: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    out.fill(cost as u8);
    Ok(())
}

/// Builds a record line for `fill_with_cost`: expected = `len` bytes of `cost`.
pub fn record(bits: u32, cost: u32, len: usize) -> String {
    format!("{bits},00,00,{cost},{}", hex::encode(vec![cost as u8; len]))
}
