// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::consts::MAX_BLOCK_INDEX;

/// Digest width of the HMAC driving PBKDF2.
///
/// Fixes the granularity of valid output lengths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashWidth {
    /// HMAC-SHA256, 32-byte blocks
    Sha256,
    /// HMAC-SHA512, 64-byte blocks
    Sha512,
}

impl HashWidth {
    /// Digest length in bytes.
    pub const fn len(self) -> usize {
        match self {
            Self::Sha256 => 32,
            Self::Sha512 => 64,
        }
    }

    /// Digest length in bits, as used by test-vector files.
    pub const fn bits(self) -> u32 {
        match self {
            Self::Sha256 => 256,
            Self::Sha512 => 512,
        }
    }

    /// Parses a digest length in bits (256 or 512).
    pub const fn from_bits(bits: u32) -> Option<Self> {
        match bits {
            256 => Some(Self::Sha256),
            512 => Some(Self::Sha512),
            _ => None,
        }
    }

    /// Largest derivable output: `len * (2^32 - 1)`, saturated to `usize::MAX`.
    pub const fn max_output_len(self) -> usize {
        (MAX_BLOCK_INDEX as usize).saturating_mul(self.len())
    }
}

impl core::fmt::Display for HashWidth {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Sha256 => f.write_str("HMAC-SHA256"),
            Self::Sha512 => f.write_str("HMAC-SHA512"),
        }
    }
}
