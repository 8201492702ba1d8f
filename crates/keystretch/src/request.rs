// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use alloc::vec::Vec;

use keystretch_core::{HashWidth, Pbkdf2Error};
use zeroize::Zeroizing;

use crate::derive::derive_owned;
use crate::pbkdf2::pbkdf2;
use crate::prf::{HmacSha256, HmacSha512};

/// Inputs of one derivation, dispatched on [`HashWidth`] at call time.
///
/// Borrows the caller's password and salt; the caller stays responsible for
/// wiping them. `Debug` never prints the password.
///
/// # Example
///
/// ```rust
/// use keystretch::{DerivationRequest, HashWidth};
///
/// let request = DerivationRequest::new(HashWidth::Sha512, b"password", b"salt", 2048);
/// let seed = request.derive(64)?;
/// assert_eq!(seed.len(), 64);
/// # Ok::<(), keystretch::Pbkdf2Error>(())
/// ```
#[derive(Clone, Copy)]
pub struct DerivationRequest<'a> {
    hash_width: HashWidth,
    password: &'a [u8],
    salt: &'a [u8],
    cost: u32,
}

impl<'a> DerivationRequest<'a> {
    /// Creates a request. Nothing is validated until a derive call.
    pub fn new(hash_width: HashWidth, password: &'a [u8], salt: &'a [u8], cost: u32) -> Self {
        Self {
            hash_width,
            password,
            salt,
            cost,
        }
    }

    /// PBKDF2-HMAC-SHA256 request.
    pub fn sha256(password: &'a [u8], salt: &'a [u8], cost: u32) -> Self {
        Self::new(HashWidth::Sha256, password, salt, cost)
    }

    /// PBKDF2-HMAC-SHA512 request.
    pub fn sha512(password: &'a [u8], salt: &'a [u8], cost: u32) -> Self {
        Self::new(HashWidth::Sha512, password, salt, cost)
    }

    /// Digest width driving the derivation.
    pub fn hash_width(&self) -> HashWidth {
        self.hash_width
    }

    /// Salt bytes.
    pub fn salt(&self) -> &'a [u8] {
        self.salt
    }

    /// Iteration count.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Derives into a caller buffer. See [`pbkdf2`](crate::pbkdf2()).
    pub fn derive_into(&self, out: &mut [u8]) -> Result<(), Pbkdf2Error> {
        match self.hash_width {
            HashWidth::Sha256 => pbkdf2::<HmacSha256>(self.password, self.salt, self.cost, out),
            HashWidth::Sha512 => pbkdf2::<HmacSha512>(self.password, self.salt, self.cost, out),
        }
    }

    /// Derives `len` bytes into an owned buffer zeroized on drop.
    pub fn derive(&self, len: usize) -> Result<Zeroizing<Vec<u8>>, Pbkdf2Error> {
        match self.hash_width {
            HashWidth::Sha256 => derive_owned::<HmacSha256>(self.password, self.salt, self.cost, len),
            HashWidth::Sha512 => derive_owned::<HmacSha512>(self.password, self.salt, self.cost, len),
        }
    }
}

impl core::fmt::Debug for DerivationRequest<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("DerivationRequest")
            .field("hash_width", &self.hash_width)
            .field("password", &"[REDACTED]")
            .field("salt_len", &self.salt.len())
            .field("cost", &self.cost)
            .finish()
    }
}
