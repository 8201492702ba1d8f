// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Core types for PBKDF2-HMAC-SHA256/512.
//!
//! Shared by the derivation engine (`keystretch`) and its test-vector
//! runner (`keystretch-vectors`):
//!
//! - [`HashWidth`]: digest width of the underlying HMAC (32 or 64 bytes)
//! - [`Pbkdf2Error`]: precondition failures and their status codes
//! - [`Prf`]: the keyed-hash capability PBKDF2 is driven by
//! - [`validate_request`]: cost and output-length checks run before any HMAC work
//!
//! References:
//! - RFC 8018 Section 5.2: PBKDF2
//!   <https://datatracker.ietf.org/doc/html/rfc8018#section-5.2>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod consts;
mod error;
mod traits;
mod validate;
mod width;

pub use consts::{MAX_BLOCK_INDEX, MAX_DIGEST_LEN, STATUS_OK};
pub use error::{Pbkdf2Error, status_of};
pub use traits::Prf;
pub use validate::validate_request;
pub use width::HashWidth;
