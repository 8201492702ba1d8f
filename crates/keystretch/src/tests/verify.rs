// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::{DerivationRequest, Pbkdf2Error, verify};

#[test]
fn test_verify_accepts_derived_key() {
    let request = DerivationRequest::sha256(b"password", b"salt", 4);
    let key = request.derive(64).expect("Failed to derive(..)");

    assert_eq!(verify(&request, &key), Ok(true));
}

#[test]
fn test_verify_rejects_single_bit_flip() {
    let request = DerivationRequest::sha512(b"password", b"salt", 4);
    let mut key = request.derive(64).expect("Failed to derive(..)");
    key[63] ^= 0x01;

    assert_eq!(verify(&request, &key), Ok(false));
}

#[test]
fn test_verify_rejects_wrong_password() {
    let key = DerivationRequest::sha256(b"password", b"salt", 4)
        .derive(32)
        .expect("Failed to derive(..)");
    let wrong = DerivationRequest::sha256(b"Password", b"salt", 4);

    assert_eq!(verify(&wrong, &key), Ok(false));
}

#[test]
fn test_verify_propagates_length_error() {
    let request = DerivationRequest::sha256(b"password", b"salt", 1);
    assert_eq!(
        verify(&request, &[0u8; 20]),
        Err(Pbkdf2Error::UnsupportedOutputLength)
    );
}
