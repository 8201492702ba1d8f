// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keystretch_core::Pbkdf2Error;
use subtle::ConstantTimeEq;

use crate::request::DerivationRequest;

/// Re-derives `expected.len()` bytes and compares them in constant time.
///
/// # Errors
///
/// Propagates validation errors for `request.cost()` and `expected.len()`.
pub fn verify(request: &DerivationRequest<'_>, expected: &[u8]) -> Result<bool, Pbkdf2Error> {
    let derived = request.derive(expected.len())?;
    Ok(bool::from(derived.as_slice().ct_eq(expected)))
}
