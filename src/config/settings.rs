// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Settings management for llm-checker
//!
//! Loads user settings from ~/.llm-checker/settings.json

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::scoring::UseCase;

mod io;
mod validation;

/// Environment variable overriding the settings directory
pub const HOME_ENV: &str = "LLM_CHECKER_HOME";

/// Main settings structure, stored in ~/.llm-checker/settings.json
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    /// Use case applied when `--use-case` is not given
    #[serde(default = "default_use_case")]
    pub default_use_case: String,

    /// Number of recommendations to show
    #[serde(default = "default_limit")]
    pub limit: usize,

    /// Timeout for each vendor GPU tool, in seconds
    #[serde(default = "default_probe_timeout_secs")]
    pub probe_timeout_secs: u64,

    /// Catalogue file used instead of the built-in list
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalogue_path: Option<PathBuf>,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            default_use_case: default_use_case(),
            limit: default_limit(),
            probe_timeout_secs: default_probe_timeout_secs(),
            catalogue_path: None,
        }
    }
}

impl Settings {
    /// Default use case; unknown labels resolve to general.
    pub fn use_case(&self) -> UseCase {
        UseCase::from_label(&self.default_use_case)
    }

    pub fn probe_timeout(&self) -> Duration {
        Duration::from_secs(self.probe_timeout_secs)
    }
}

fn default_use_case() -> String {
    UseCase::General.to_string()
}

fn default_limit() -> usize {
    5
}

fn default_probe_timeout_secs() -> u64 {
    5
}
