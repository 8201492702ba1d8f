// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keystretch_core::HashWidth;

/// How salt fields are encoded in a vector file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SaltConvention {
    /// The field is the salt
    #[default]
    Raw,
    /// The field is the salt followed by 4 zero bytes (`00000000`), room the
    /// historical C harness reserved for the block counter. Stripped on load.
    LegacyCounterPadded,
}

/// A single known-answer vector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestVector {
    /// Line in the source file (1-based)
    pub line: usize,
    /// HMAC digest width
    pub hash_width: HashWidth,
    /// Password bytes
    pub password: Vec<u8>,
    /// Salt bytes, legacy padding already removed
    pub salt: Vec<u8>,
    /// Iteration count
    pub cost: u32,
    /// Expected derived key, never empty; may be shorter than a whole number
    /// of blocks
    pub expected: Vec<u8>,
}

impl TestVector {
    /// Whether `expected` can be derived directly (whole blocks).
    pub fn is_whole_blocks(&self) -> bool {
        self.expected.len() % self.hash_width.len() == 0
    }

    /// Smallest derivable length that covers `expected`.
    pub fn covering_len(&self) -> usize {
        let width = self.hash_width.len();
        self.expected.len().div_ceil(width) * width
    }
}
