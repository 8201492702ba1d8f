// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::HashWidth;

#[test]
fn test_len_and_bits() {
    assert_eq!(HashWidth::Sha256.len(), 32);
    assert_eq!(HashWidth::Sha512.len(), 64);
    assert_eq!(HashWidth::Sha256.bits(), 256);
    assert_eq!(HashWidth::Sha512.bits(), 512);
}

#[test]
fn test_from_bits() {
    assert_eq!(HashWidth::from_bits(256), Some(HashWidth::Sha256));
    assert_eq!(HashWidth::from_bits(512), Some(HashWidth::Sha512));
    assert_eq!(HashWidth::from_bits(384), None);
    assert_eq!(HashWidth::from_bits(0), None);
}

#[test]
fn test_bits_roundtrip() {
    for width in [HashWidth::Sha256, HashWidth::Sha512] {
        assert_eq!(HashWidth::from_bits(width.bits()), Some(width));
        assert_eq!(width.bits() as usize, width.len() * 8);
    }
}

#[cfg(target_pointer_width = "64")]
#[test]
fn test_max_output_len() {
    assert_eq!(HashWidth::Sha256.max_output_len(), 32 * (u32::MAX as usize));
    assert_eq!(HashWidth::Sha512.max_output_len(), 64 * (u32::MAX as usize));
}

#[test]
fn test_display() {
    assert_eq!(HashWidth::Sha256.to_string(), "HMAC-SHA256");
    assert_eq!(HashWidth::Sha512.to_string(), "HMAC-SHA512");
}
