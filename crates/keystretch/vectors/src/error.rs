// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use thiserror::Error;

/// Malformed vector file. Line numbers are 1-based.
#[derive(Debug, Error)]
pub enum VectorError {
    /// Vector file could not be read
    #[error("failed to read vector file: {0}")]
    Io(#[from] std::io::Error),

    /// Record does not have exactly five fields
    #[error("line {line}: expected 5 fields, found {found}")]
    FieldCount {
        /// Offending line
        line: usize,
        /// Number of comma-separated fields
        found: usize,
    },

    /// Hash width is not 256 or 512
    #[error("line {line}: unsupported hash width {value:?}")]
    HashWidth {
        /// Offending line
        line: usize,
        /// Raw field value
        value: String,
    },

    /// A hex field does not decode
    #[error("line {line}: invalid hex in {field}: {source}")]
    Hex {
        /// Offending line
        line: usize,
        /// Field name
        field: &'static str,
        /// Decoder error
        source: hex::FromHexError,
    },

    /// Cost is not a decimal u32
    #[error("line {line}: invalid cost: {source}")]
    Cost {
        /// Offending line
        line: usize,
        /// Parser error
        source: std::num::ParseIntError,
    },

    /// Expected output field is empty
    #[error("line {line}: expected output is empty")]
    EmptyExpected {
        /// Offending line
        line: usize,
    },

    /// Legacy salt lacks the 4 trailing zero bytes
    #[error("line {line}: legacy salt must end with 4 zero bytes")]
    LegacySalt {
        /// Offending line
        line: usize,
    },
}

/// Invalid replay configuration in the environment.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// Variable is set but does not parse
    #[error("{var}={value:?} is not a valid value")]
    InvalidValue {
        /// Variable name
        var: &'static str,
        /// Raw value
        value: String,
    },
}
