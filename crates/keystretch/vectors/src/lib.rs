// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

//! Known-answer vectors for PBKDF2-HMAC-SHA256/512 backends.
//!
//! Vector files hold one comma-separated record per line:
//!
//! ```text
//! hash_width_bits,password_hex,salt_hex,cost,expected_output_hex
//! ```
//!
//! Blank lines and lines starting with `#` are ignored. The runner is backend
//! agnostic: [`replay`] takes the derivation function under test, so any
//! implementation of the `keystretch-core` contract can be checked against
//! the same file.
//!
//! ```rust,ignore
//! let vectors = keystretch_vectors::bundled_vectors()?;
//! let report = keystretch_vectors::replay(&vectors, &ReplayConfig::from_env()?, my_backend);
//! report.assert_success();
//! ```

#![warn(missing_docs)]

#[cfg(test)]
mod tests;

mod config;
mod error;
mod parse;
mod replay;
mod vector;

pub use config::{CRAZY_COST_ENV, MAX_CRAZY_ENV, ReplayConfig};
pub use error::{ConfigError, VectorError};
pub use parse::{BUNDLED_VECTORS, bundled_vectors, load_vectors, parse_vectors};
pub use replay::{DeriveFn, ReplayReport, replay};
pub use vector::{SaltConvention, TestVector};
