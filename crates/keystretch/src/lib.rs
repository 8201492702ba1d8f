// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! PBKDF2-HMAC-SHA256/512 key stretching with secure memory handling
//!
//! Stretches low-entropy secrets (passwords, mnemonic phrases) into key
//! material whose length is an exact multiple of the HMAC digest width.
//! Scratch state is zeroized before every call returns.
//!
//! ## Calling conventions
//!
//! - Owned output: [`derive_sha256`], [`derive_sha512`], [`DerivationRequest::derive`]
//! - Caller buffer: [`pbkdf2_hmac_sha256`], [`pbkdf2_hmac_sha512`], [`pbkdf2`]
//! - Status codes: [`derive_sha256_status`], [`derive_sha512_status`]
//!
//! ## Example
//!
//! ```rust
//! use keystretch::{Pbkdf2Error, derive_sha256};
//!
//! let key = derive_sha256(b"password", b"salt", 1, 32)?;
//! assert_eq!(key[..4], [0x12, 0x0f, 0xb6, 0xcf]);
//!
//! // Output lengths must be multiples of the digest width
//! assert_eq!(
//!     derive_sha256(b"password", b"salt", 1, 20).unwrap_err(),
//!     Pbkdf2Error::UnsupportedOutputLength
//! );
//! # Ok::<(), Pbkdf2Error>(())
//! ```
//!
//! References:
//! - RFC 8018 Section 5.2: PBKDF2
//!   <https://datatracker.ietf.org/doc/html/rfc8018#section-5.2>
//! - RFC 2104: HMAC
//!   <https://datatracker.ietf.org/doc/html/rfc2104>

#![cfg_attr(not(test), no_std)]
#![warn(missing_docs)]

extern crate alloc;

#[cfg(test)]
mod tests;

mod derive;
mod pbkdf2;
mod prf;
mod request;
mod status;
mod verify;

pub use keystretch_core::{HashWidth, MAX_DIGEST_LEN, Pbkdf2Error, Prf, STATUS_OK, status_of};
pub use zeroize::Zeroizing;

pub use derive::{derive_sha256, derive_sha512};
pub use pbkdf2::{pbkdf2, pbkdf2_hmac_sha256, pbkdf2_hmac_sha512};
pub use prf::{HmacSha256, HmacSha512, hmac};
pub use request::DerivationRequest;
pub use status::{derive_sha256_status, derive_sha512_status};
pub use verify::verify;
