// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Trait definitions for the PBKDF2 pseudorandom function.

use crate::width::HashWidth;

/// Keyed pseudorandom function driven by PBKDF2.
///
/// Presents HMAC-SHA256 and HMAC-SHA512 under one signature:
/// `Hmac(key, message) -> digest[WIDTH.len()]`.
///
/// Implementations must run in time independent of key and message content,
/// and must accept keys of any length (keys longer than the hash block size
/// are hashed down by HMAC itself).
///
/// # Example
///
/// ```rust,ignore
/// let prf = HmacSha256::new_keyed(b"password");
/// let mut u1 = [0u8; 32];
/// prf.mac_into(&[b"salt", &1u32.to_be_bytes()], &mut u1);
/// ```
pub trait Prf: Sized {
    /// Digest width produced by [`Prf::mac_into`].
    const WIDTH: HashWidth;

    /// Keys the function. The keyed state is reused for every application.
    fn new_keyed(key: &[u8]) -> Self;

    /// Computes the MAC over the concatenation of `chunks` into `out`.
    ///
    /// # Panics
    ///
    /// Panics if `out.len() != Self::WIDTH.len()`.
    fn mac_into(&self, chunks: &[&[u8]], out: &mut [u8]);
}
