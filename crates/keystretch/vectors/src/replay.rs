// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use keystretch_core::{HashWidth, Pbkdf2Error};

use crate::config::ReplayConfig;
use crate::vector::TestVector;

/// Backend under test: `(width, password, salt, cost, out)`.
pub type DeriveFn = fn(HashWidth, &[u8], &[u8], u32, &mut [u8]) -> Result<(), Pbkdf2Error>;

/// Outcome of a replay.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ReplayReport {
    /// Vectors whose full expected output matched
    pub passed: usize,
    /// Vectors checked as a prefix of a longer derivation
    pub prefix_checked: usize,
    /// Crazy-cost vectors skipped by the config
    pub skipped_crazy: usize,
    /// Crazy-cost vectors that ran
    pub ran_crazy: usize,
    /// One message per failing vector
    pub failures: Vec<String>,
}

impl ReplayReport {
    /// No failures.
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    /// Panics with every failure message if any vector failed.
    pub fn assert_success(&self) {
        if !self.is_success() {
            panic!(
                "PBKDF2 vector failures ({}):\n{}",
                self.failures.len(),
                self.failures.join("\n")
            );
        }
    }
}

#[derive(Default)]
struct CrazyBudget {
    sha256: usize,
    sha512: usize,
}

impl CrazyBudget {
    /// Counts a crazy vector; false once the width's allowance is used up.
    fn admit(&mut self, width: HashWidth, max: Option<usize>) -> bool {
        let used = match width {
            HashWidth::Sha256 => &mut self.sha256,
            HashWidth::Sha512 => &mut self.sha512,
        };

        match max {
            Some(max) if *used >= max => false,
            _ => {
                *used += 1;
                true
            }
        }
    }
}

/// Replays `vectors` against `derive`.
///
/// Whole-block vectors are derived at their exact length and compared.
/// Other lengths are checked in two steps: the exact length must fail with
/// [`Pbkdf2Error::UnsupportedOutputLength`], and the expected bytes must
/// prefix a derivation of [`TestVector::covering_len`] bytes.
pub fn replay<F>(vectors: &[TestVector], config: &ReplayConfig, derive: F) -> ReplayReport
where
    F: Fn(HashWidth, &[u8], &[u8], u32, &mut [u8]) -> Result<(), Pbkdf2Error>,
{
    let mut report = ReplayReport::default();
    let mut budget = CrazyBudget::default();

    for vector in vectors {
        if vector.cost > config.crazy_cost_threshold {
            if !budget.admit(vector.hash_width, config.max_crazy_per_width) {
                tracing::debug!(
                    line = vector.line,
                    width = %vector.hash_width,
                    cost = vector.cost,
                    "skipping crazy-cost vector"
                );
                report.skipped_crazy += 1;
                continue;
            }
            report.ran_crazy += 1;
        }

        let result = if vector.is_whole_blocks() {
            check_exact(vector, &derive).map(|()| report.passed += 1)
        } else {
            check_prefix(vector, &derive).map(|()| report.prefix_checked += 1)
        };

        if let Err(msg) = result {
            tracing::warn!(line = vector.line, "{msg}");
            report.failures.push(msg);
        }
    }

    tracing::info!(
        passed = report.passed,
        prefix_checked = report.prefix_checked,
        ran_crazy = report.ran_crazy,
        skipped_crazy = report.skipped_crazy,
        failed = report.failures.len(),
        "PBKDF2 vector replay finished"
    );

    report
}

fn check_exact<F>(vector: &TestVector, derive: &F) -> Result<(), String>
where
    F: Fn(HashWidth, &[u8], &[u8], u32, &mut [u8]) -> Result<(), Pbkdf2Error>,
{
    let mut out = vec![0u8; vector.expected.len()];
    derive(
        vector.hash_width,
        &vector.password,
        &vector.salt,
        vector.cost,
        &mut out,
    )
    .map_err(|e| describe(vector, format!("expected success but got {e:?}")))?;

    if out != vector.expected {
        return Err(mismatch(vector, &out));
    }

    Ok(())
}

fn check_prefix<F>(vector: &TestVector, derive: &F) -> Result<(), String>
where
    F: Fn(HashWidth, &[u8], &[u8], u32, &mut [u8]) -> Result<(), Pbkdf2Error>,
{
    let mut exact = vec![0u8; vector.expected.len()];
    match derive(
        vector.hash_width,
        &vector.password,
        &vector.salt,
        vector.cost,
        &mut exact,
    ) {
        Err(Pbkdf2Error::UnsupportedOutputLength) => {}
        other => {
            return Err(describe(
                vector,
                format!(
                    "length {} should be rejected with UnsupportedOutputLength, got {other:?}",
                    vector.expected.len()
                ),
            ));
        }
    }

    let mut out = vec![0u8; vector.covering_len()];
    derive(
        vector.hash_width,
        &vector.password,
        &vector.salt,
        vector.cost,
        &mut out,
    )
    .map_err(|e| describe(vector, format!("expected success but got {e:?}")))?;

    if !out.starts_with(&vector.expected) {
        return Err(mismatch(vector, &out[..vector.expected.len()]));
    }

    Ok(())
}

fn describe(vector: &TestVector, what: String) -> String {
    format!(
        "line {} ({}, cost {}): {}",
        vector.line, vector.hash_width, vector.cost, what
    )
}

fn mismatch(vector: &TestVector, got: &[u8]) -> String {
    describe(
        vector,
        format!(
            "output mismatch\n  expected: {}\n  got:      {}",
            hex::encode(&vector.expected),
            hex::encode(got)
        ),
    )
}
