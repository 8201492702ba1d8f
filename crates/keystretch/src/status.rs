// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Buffer-and-status calling convention
//!
//! `None` models an absent buffer, as opposed to `Some(&[])`, an empty one.
//! Return values are [`STATUS_OK`](keystretch_core::STATUS_OK) or
//! [`Pbkdf2Error::status`]. On a non-zero status the output must not be used.

use keystretch_core::{Pbkdf2Error, Prf, status_of};

use crate::pbkdf2::pbkdf2;
use crate::prf::{HmacSha256, HmacSha512};

fn derive_checked<P: Prf>(
    password: Option<&[u8]>,
    salt: Option<&[u8]>,
    cost: u32,
    output: Option<&mut [u8]>,
) -> Result<(), Pbkdf2Error> {
    let (Some(password), Some(salt), Some(output)) = (password, salt, output) else {
        return Err(Pbkdf2Error::NullOrEmptyBuffer);
    };

    pbkdf2::<P>(password, salt, cost, output)
}

/// PBKDF2-HMAC-SHA256 returning a status code.
pub fn derive_sha256_status(
    password: Option<&[u8]>,
    salt: Option<&[u8]>,
    cost: u32,
    output: Option<&mut [u8]>,
) -> i32 {
    status_of(derive_checked::<HmacSha256>(password, salt, cost, output))
}

/// PBKDF2-HMAC-SHA512 returning a status code.
pub fn derive_sha512_status(
    password: Option<&[u8]>,
    salt: Option<&[u8]>,
    cost: u32,
    output: Option<&mut [u8]>,
) -> i32 {
    status_of(derive_checked::<HmacSha512>(password, salt, cost, output))
}
