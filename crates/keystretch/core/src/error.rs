// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

use crate::consts::STATUS_OK;

/// PBKDF2 precondition failure.
///
/// Every variant is detected before any HMAC work starts; the output buffer
/// is left untouched.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pbkdf2Error {
    /// A required buffer was not provided (distinct from an empty buffer)
    #[error("required buffer is absent")]
    NullOrEmptyBuffer,

    /// Iteration count is zero
    #[error("iteration count must be at least 1")]
    InvalidIterationCount,

    /// Output length is zero, not a multiple of the digest width, or needs a
    /// block index beyond the 32-bit counter
    #[error("output length must be a non-zero multiple of the digest width")]
    UnsupportedOutputLength,
}

impl Pbkdf2Error {
    /// Non-zero status code for the buffer-and-status calling convention.
    pub const fn status(self) -> i32 {
        match self {
            Self::NullOrEmptyBuffer => -1,
            Self::InvalidIterationCount => -2,
            Self::UnsupportedOutputLength => -3,
        }
    }

    /// Inverse of [`Pbkdf2Error::status`]. `None` for [`STATUS_OK`] and unknown codes.
    pub const fn from_status(status: i32) -> Option<Self> {
        match status {
            -1 => Some(Self::NullOrEmptyBuffer),
            -2 => Some(Self::InvalidIterationCount),
            -3 => Some(Self::UnsupportedOutputLength),
            _ => None,
        }
    }
}

/// Collapses a derivation result into its status code.
pub fn status_of(result: Result<(), Pbkdf2Error>) -> i32 {
    match result {
        Ok(()) => STATUS_OK,
        Err(e) => e.status(),
    }
}
