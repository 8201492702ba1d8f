// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

/// Largest digest produced by any supported HMAC (SHA-512)
pub const MAX_DIGEST_LEN: usize = 64;

/// Largest block index representable by the 4-byte big-endian counter
pub const MAX_BLOCK_INDEX: u32 = u32::MAX;

/// Status code for a successful derivation
pub const STATUS_OK: i32 = 0;
