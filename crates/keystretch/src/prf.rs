// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! HMAC-SHA256 and HMAC-SHA512 behind the [`Prf`] signature

use alloc::vec;
use alloc::vec::Vec;

use hmac::digest::KeyInit;
use hmac::{Hmac, Mac};
use keystretch_core::{HashWidth, Prf};
use sha2::{Sha256, Sha512};
use zeroize::{Zeroize, Zeroizing};

macro_rules! hmac_prf {
    ($(#[$meta:meta])* $name:ident, $digest:ty, $width:expr) => {
        $(#[$meta])*
        #[derive(Clone)]
        pub struct $name(Hmac<$digest>);

        impl Prf for $name {
            const WIDTH: HashWidth = $width;

            fn new_keyed(key: &[u8]) -> Self {
                // HmacCore hashes keys longer than the block size and zero-pads
                // the rest; its new_from_slice never returns InvalidLength.
                Self(
                    <Hmac<$digest> as KeyInit>::new_from_slice(key)
                        .expect("HMAC accepts keys of any length"),
                )
            }

            fn mac_into(&self, chunks: &[&[u8]], out: &mut [u8]) {
                let mut mac = self.0.clone();
                for chunk in chunks {
                    mac.update(chunk);
                }

                let mut digest = mac.finalize().into_bytes();
                out.copy_from_slice(&digest);
                digest.as_mut_slice().zeroize();
            }
        }

        impl core::fmt::Debug for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.debug_struct(stringify!($name)).finish_non_exhaustive()
            }
        }
    };
}

hmac_prf!(
    /// HMAC-SHA256 keyed with the password; 32-byte digests.
    HmacSha256,
    Sha256,
    HashWidth::Sha256
);

hmac_prf!(
    /// HMAC-SHA512 keyed with the password; 64-byte digests.
    HmacSha512,
    Sha512,
    HashWidth::Sha512
);

/// One-shot `HMAC(key, message)` at the given width.
pub fn hmac(width: HashWidth, key: &[u8], message: &[u8]) -> Zeroizing<Vec<u8>> {
    let mut out = Zeroizing::new(vec![0u8; width.len()]);
    match width {
        HashWidth::Sha256 => HmacSha256::new_keyed(key).mac_into(&[message], &mut out),
        HashWidth::Sha512 => HmacSha512::new_keyed(key).mac_into(&[message], &mut out),
    }
    out
}
