// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2 per RFC 8018 Section 5.2

use keystretch_core::{MAX_DIGEST_LEN, Pbkdf2Error, Prf, validate_request};
use zeroize::{Zeroize, ZeroizeOnDrop};

use crate::prf::{HmacSha256, HmacSha512};

/// Scratch for one block: U_{j-1} and U_j.
///
/// Sized for the widest digest; only the first `WIDTH.len()` bytes are used.
#[derive(Zeroize, ZeroizeOnDrop)]
pub(crate) struct BlockState {
    u_prev: [u8; MAX_DIGEST_LEN],
    u_curr: [u8; MAX_DIGEST_LEN],
}

impl BlockState {
    pub fn new() -> Self {
        Self {
            u_prev: [0u8; MAX_DIGEST_LEN],
            u_curr: [0u8; MAX_DIGEST_LEN],
        }
    }

    /// F(P, S, c, i) = U_1 ^ U_2 ^ ... ^ U_c, written into `t`.
    ///
    /// `t.len()` must equal `P::WIDTH.len()`.
    pub fn compute<P: Prf>(&mut self, prf: &P, salt: &[u8], cost: u32, index: u32, t: &mut [u8]) {
        let width = P::WIDTH.len();
        let mut u_prev = &mut self.u_prev[..width];
        let mut u_curr = &mut self.u_curr[..width];

        // U_1 = PRF(P, S || INT(i))
        let counter = index.to_be_bytes();
        prf.mac_into(&[salt, counter.as_slice()], u_prev);
        t.copy_from_slice(u_prev);

        // U_j = PRF(P, U_{j-1})
        for _ in 1..cost {
            prf.mac_into(&[&*u_prev], u_curr);
            for (acc, byte) in t.iter_mut().zip(u_curr.iter()) {
                *acc ^= byte;
            }
            core::mem::swap(&mut u_prev, &mut u_curr);
        }

        self.zeroize();
    }

    #[cfg(test)]
    pub fn is_zeroized(&self) -> bool {
        self.u_prev.iter().chain(self.u_curr.iter()).all(|&b| b == 0)
    }
}

/// PBKDF2 with any [`Prf`], writing `out.len()` bytes.
///
/// Blocks are `P::WIDTH.len()` bytes and are numbered from 1. Preconditions
/// are checked before any HMAC work; on error `out` is left untouched.
///
/// # Errors
///
/// - [`Pbkdf2Error::InvalidIterationCount`] if `cost == 0`
/// - [`Pbkdf2Error::UnsupportedOutputLength`] if `out` is empty, not a
///   multiple of the digest width, or longer than `width * (2^32 - 1)`
pub fn pbkdf2<P: Prf>(
    password: &[u8],
    salt: &[u8],
    cost: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    let blocks = validate_request(P::WIDTH, cost, out.len())?;

    let prf = P::new_keyed(password);
    let mut state = BlockState::new();

    for (index, t) in (1..=blocks).zip(out.chunks_exact_mut(P::WIDTH.len())) {
        state.compute(&prf, salt, cost, index, t);
    }

    Ok(())
}

/// PBKDF2-HMAC-SHA256 into a caller buffer (length a multiple of 32).
pub fn pbkdf2_hmac_sha256(
    password: &[u8],
    salt: &[u8],
    cost: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    pbkdf2::<HmacSha256>(password, salt, cost, out)
}

/// PBKDF2-HMAC-SHA512 into a caller buffer (length a multiple of 64).
pub fn pbkdf2_hmac_sha512(
    password: &[u8],
    salt: &[u8],
    cost: u32,
    out: &mut [u8],
) -> Result<(), Pbkdf2Error> {
    pbkdf2::<HmacSha512>(password, salt, cost, out)
}
