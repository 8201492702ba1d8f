// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec;
use alloc::vec::Vec;

use keystretch_core::{Pbkdf2Error, Prf, validate_request};
use zeroize::Zeroizing;

use crate::pbkdf2::pbkdf2;
use crate::prf::{HmacSha256, HmacSha512};

/// Validates, then allocates exactly `len` bytes and derives into them.
pub(crate) fn derive_owned<P: Prf>(
    password: &[u8],
    salt: &[u8],
    cost: u32,
    len: usize,
) -> Result<Zeroizing<Vec<u8>>, Pbkdf2Error> {
    validate_request(P::WIDTH, cost, len)?;

    let mut out = Zeroizing::new(vec![0u8; len]);
    pbkdf2::<P>(password, salt, cost, out.as_mut_slice())?;

    Ok(out)
}

/// PBKDF2-HMAC-SHA256, returning `len` bytes that are zeroized on drop.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidIterationCount`] if `cost == 0`
/// - [`Pbkdf2Error::UnsupportedOutputLength`] if `len` is zero or not a multiple of 32
pub fn derive_sha256(
    password: &[u8],
    salt: &[u8],
    cost: u32,
    len: usize,
) -> Result<Zeroizing<Vec<u8>>, Pbkdf2Error> {
    derive_owned::<HmacSha256>(password, salt, cost, len)
}

/// PBKDF2-HMAC-SHA512, returning `len` bytes that are zeroized on drop.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidIterationCount`] if `cost == 0`
/// - [`Pbkdf2Error::UnsupportedOutputLength`] if `len` is zero or not a multiple of 64
pub fn derive_sha512(
    password: &[u8],
    salt: &[u8],
    cost: u32,
    len: usize,
) -> Result<Zeroizing<Vec<u8>>, Pbkdf2Error> {
    derive_owned::<HmacSha512>(password, salt, cost, len)
}
