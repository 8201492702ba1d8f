// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::Pbkdf2Error;
use crate::width::HashWidth;

/// Checks a derivation request and returns its block count.
///
/// Cost is checked before output length. Salt and password are unrestricted.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidIterationCount`] if `cost == 0`
/// - [`Pbkdf2Error::UnsupportedOutputLength`] if `out_len` is zero, not a
///   multiple of `width.len()`, or needs more than `2^32 - 1` blocks
pub fn validate_request(width: HashWidth, cost: u32, out_len: usize) -> Result<u32, Pbkdf2Error> {
    if cost == 0 {
        return Err(Pbkdf2Error::InvalidIterationCount);
    }

    if out_len == 0 || out_len % width.len() != 0 {
        return Err(Pbkdf2Error::UnsupportedOutputLength);
    }

    u32::try_from(out_len / width.len()).map_err(|_| Pbkdf2Error::UnsupportedOutputLength)
}
