// Copyright (c) 2025-2026 Federico Hoerth <memparanoid@gmail.com>
// SPDX-License-Identifier: GPL-3.0-only
// See LICENSE in the repository root for full license text.

use crate::error::ConfigError;

/// Overrides [`ReplayConfig::crazy_cost_threshold`]
pub const CRAZY_COST_ENV: &str = "KEYSTRETCH_CRAZY_COST";

/// Overrides [`ReplayConfig::max_crazy_per_width`]; `-1` or `all` means unlimited
pub const MAX_CRAZY_ENV: &str = "KEYSTRETCH_MAX_CRAZY";

const DEFAULT_CRAZY_COST: u32 = 100;
const DEFAULT_MAX_CRAZY: usize = 10;

/// Limits on how much work a replay may do.
///
/// Vectors with `cost > crazy_cost_threshold` are "crazy". At most
/// `max_crazy_per_width` of them run per hash width, in file order; the rest
/// are skipped and counted. `None` runs every vector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplayConfig {
    /// Costs above this are rate-limited
    pub crazy_cost_threshold: u32,
    /// Crazy vectors run per hash width (`None` = all)
    pub max_crazy_per_width: Option<usize>,
}

impl Default for ReplayConfig {
    fn default() -> Self {
        Self {
            crazy_cost_threshold: DEFAULT_CRAZY_COST,
            max_crazy_per_width: Some(DEFAULT_MAX_CRAZY),
        }
    }
}

impl ReplayConfig {
    /// Runs every vector regardless of cost.
    pub fn unlimited() -> Self {
        Self {
            max_crazy_per_width: None,
            ..Self::default()
        }
    }

    /// Defaults overridden by [`CRAZY_COST_ENV`] and [`MAX_CRAZY_ENV`].
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Defaults overridden by whatever `lookup` returns for each variable.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(value) = lookup(CRAZY_COST_ENV) {
            config.crazy_cost_threshold =
                value
                    .trim()
                    .parse()
                    .map_err(|_| ConfigError::InvalidValue {
                        var: CRAZY_COST_ENV,
                        value: value.clone(),
                    })?;
        }

        if let Some(value) = lookup(MAX_CRAZY_ENV) {
            config.max_crazy_per_width = parse_max_crazy(&value)?;
        }

        tracing::debug!(?config, "replay config");
        Ok(config)
    }
}

fn parse_max_crazy(value: &str) -> Result<Option<usize>, ConfigError> {
    match value.trim() {
        "-1" | "all" => Ok(None),
        v => v
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                var: MAX_CRAZY_ENV,
                value: value.to_string(),
            }),
    }
}
