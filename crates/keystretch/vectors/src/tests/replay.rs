// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use super::support::{accept_any_length, fill_with_cost, init_tracing, record};
use keystretch_core::HashWidth;

use crate::{ReplayConfig, SaltConvention, TestVector, parse_vectors, replay};

fn vectors(lines: &[String]) -> Vec<TestVector> {
    parse_vectors(&lines.join("\n"), SaltConvention::Raw).expect("Failed to parse_vectors(..)")
}

#[test]
fn test_replay_exact_vectors_pass() {
    init_tracing();

    let vectors = vectors(&[record(256, 1, 32), record(512, 2, 128)]);
    let report = replay(&vectors, &ReplayConfig::default(), fill_with_cost);

    report.assert_success();
    assert_eq!(report.passed, 2);
    assert_eq!(report.prefix_checked, 0);
}

#[test]
fn test_replay_reports_mismatch() {
    init_tracing();

    let vectors = vectors(&["256,00,00,1,".to_string() + &"ee".repeat(32)]);
    let report = replay(&vectors, &ReplayConfig::default(), fill_with_cost);

    assert!(!report.is_success());
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("line 1"));
    assert!(report.failures[0].contains("output mismatch"));
}

#[test]
#[should_panic(expected = "PBKDF2 vector failures (1)")]
fn test_assert_success_panics_on_failure() {
    let vectors = vectors(&["512,00,00,3,".to_string() + &"00".repeat(64)]);
    replay(&vectors, &ReplayConfig::default(), fill_with_cost).assert_success();
}

#[test]
fn test_replay_partial_length_checked_as_prefix() {
    init_tracing();

    let vectors = vectors(&[record(256, 1, 20), record(512, 4, 65)]);
    let report = replay(&vectors, &ReplayConfig::default(), fill_with_cost);

    report.assert_success();
    assert_eq!(report.passed, 0);
    assert_eq!(report.prefix_checked, 2);
}

#[test]
fn test_replay_flags_backend_accepting_partial_length() {
    init_tracing();

    let vectors = vectors(&[record(256, 1, 20)]);
    let report = replay(&vectors, &ReplayConfig::default(), accept_any_length);

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("UnsupportedOutputLength"));
}

#[test]
fn test_replay_backend_error_is_failure() {
    init_tracing();

    // Cost 0 parses but the backend rejects it
    let vectors = vectors(&["256,00,00,0,".to_string() + &"00".repeat(32)]);
    let report = replay(&vectors, &ReplayConfig::default(), fill_with_cost);

    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("InvalidIterationCount"));
}

#[test]
fn test_replay_empty_expected_is_failure() {
    init_tracing();

    // Built by hand; the parser refuses such records
    let vectors = [TestVector {
        line: 7,
        hash_width: HashWidth::Sha256,
        password: b"password".to_vec(),
        salt: b"salt".to_vec(),
        cost: 1,
        expected: Vec::new(),
    }];
    let report = replay(&vectors, &ReplayConfig::default(), fill_with_cost);

    assert_eq!(report.passed + report.prefix_checked, 0);
    assert_eq!(report.failures.len(), 1);
    assert!(report.failures[0].contains("line 7"));
}

#[test]
fn test_replay_crazy_budget_per_width() {
    init_tracing();

    let vectors = vectors(&[
        record(256, 101, 32),
        record(256, 102, 32),
        record(256, 103, 32),
        record(512, 150, 64),
        record(512, 1, 64),
    ]);
    let config = ReplayConfig {
        crazy_cost_threshold: 100,
        max_crazy_per_width: Some(1),
    };
    let report = replay(&vectors, &config, fill_with_cost);

    report.assert_success();
    assert_eq!(report.ran_crazy, 2);
    assert_eq!(report.skipped_crazy, 2);
    assert_eq!(report.passed, 3);
}

#[test]
fn test_replay_threshold_is_exclusive() {
    let vectors = vectors(&[record(256, 100, 32)]);
    let config = ReplayConfig {
        crazy_cost_threshold: 100,
        max_crazy_per_width: Some(0),
    };
    let report = replay(&vectors, &config, fill_with_cost);

    assert_eq!(report.passed, 1);
    assert_eq!(report.skipped_crazy, 0);
}

#[test]
fn test_replay_unlimited_runs_everything() {
    let vectors = vectors(&[record(256, 200, 32), record(256, 201, 32), record(512, 255, 64)]);
    let config = ReplayConfig {
        crazy_cost_threshold: 0,
        max_crazy_per_width: None,
    };
    let report = replay(&vectors, &config, fill_with_cost);

    assert_eq!(report.ran_crazy, 3);
    assert_eq!(report.skipped_crazy, 0);
    assert_eq!(report.passed, 3);
}

#[test]
fn test_covering_len() {
    let vectors = vectors(&[record(256, 1, 20), record(256, 1, 64), record(512, 1, 65)]);

    assert_eq!(vectors[0].covering_len(), 32);
    assert!(!vectors[0].is_whole_blocks());
    assert_eq!(vectors[1].covering_len(), 64);
    assert!(vectors[1].is_whole_blocks());
    assert_eq!(vectors[2].covering_len(), 128);
}
