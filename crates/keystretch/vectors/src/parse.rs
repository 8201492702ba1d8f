// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use std::path::Path;

use keystretch_core::HashWidth;

use crate::error::VectorError;
use crate::vector::{SaltConvention, TestVector};

const LEGACY_SALT_PADDING: usize = 4;

/// Vector file shipped with this crate (raw salts)
pub const BUNDLED_VECTORS: &str = include_str!("../data/pbkdf2_hmac_sha_vectors.txt");

/// Parses the bundled vector file.
pub fn bundled_vectors() -> Result<Vec<TestVector>, VectorError> {
    parse_vectors(BUNDLED_VECTORS, SaltConvention::Raw)
}

/// Reads and parses a vector file from disk.
pub fn load_vectors(
    path: impl AsRef<Path>,
    convention: SaltConvention,
) -> Result<Vec<TestVector>, VectorError> {
    let text = std::fs::read_to_string(path.as_ref())?;
    let vectors = parse_vectors(&text, convention)?;

    tracing::debug!(
        path = %path.as_ref().display(),
        count = vectors.len(),
        "loaded PBKDF2 vectors"
    );

    Ok(vectors)
}

/// Parses vector records from text.
///
/// Fields are trimmed. Blank lines and `#` comments are skipped.
pub fn parse_vectors(text: &str, convention: SaltConvention) -> Result<Vec<TestVector>, VectorError> {
    text.lines()
        .enumerate()
        .map(|(i, raw)| (i + 1, raw.trim()))
        .filter(|(_, l)| !l.is_empty() && !l.starts_with('#'))
        .map(|(line, l)| parse_record(line, l, convention))
        .collect()
}

fn parse_record(
    line: usize,
    record: &str,
    convention: SaltConvention,
) -> Result<TestVector, VectorError> {
    let fields: Vec<&str> = record.split(',').map(str::trim).collect();
    let [bits, password, salt, cost, expected] = fields.as_slice() else {
        return Err(VectorError::FieldCount {
            line,
            found: fields.len(),
        });
    };

    let hash_width = bits
        .parse::<u32>()
        .ok()
        .and_then(HashWidth::from_bits)
        .ok_or_else(|| VectorError::HashWidth {
            line,
            value: bits.to_string(),
        })?;

    let decode = |field: &'static str, value: &str| {
        hex::decode(value).map_err(|source| VectorError::Hex {
            line,
            field,
            source,
        })
    };

    let password = decode("password", password)?;
    let mut salt = decode("salt", salt)?;
    let expected = decode("expected", expected)?;
    if expected.is_empty() {
        return Err(VectorError::EmptyExpected { line });
    }
    let cost = cost
        .parse::<u32>()
        .map_err(|source| VectorError::Cost { line, source })?;

    if convention == SaltConvention::LegacyCounterPadded {
        strip_legacy_padding(line, &mut salt)?;
    }

    Ok(TestVector {
        line,
        hash_width,
        password,
        salt,
        cost,
        expected,
    })
}

fn strip_legacy_padding(line: usize, salt: &mut Vec<u8>) -> Result<(), VectorError> {
    let Some(split) = salt.len().checked_sub(LEGACY_SALT_PADDING) else {
        return Err(VectorError::LegacySalt { line });
    };

    if salt[split..].iter().any(|&b| b != 0) {
        return Err(VectorError::LegacySalt { line });
    }

    salt.truncate(split);
    Ok(())
}
