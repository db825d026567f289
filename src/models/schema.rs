// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model descriptor schema
//!
//! A descriptor is one downloadable variant of a model (a specific size and
//! quantization), as listed by a catalogue.

use serde::{Deserialize, Serialize};

use crate::error::{CheckerError, Result};

/// One model variant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Variant tag (e.g., "qwen2.5-coder:7b-instruct-q4_k_m")
    pub name: String,

    /// Lower-case model family (e.g., "qwen2.5-coder")
    #[serde(default)]
    pub family: String,

    /// Parameter count in billions
    pub params_b: f64,

    /// On-disk size in GB
    pub size_gb: f64,

    /// Quantization label (e.g., "Q4_K_M")
    pub quantization: String,

    /// Context window in tokens
    pub context_length: u32,
}

impl ModelDescriptor {
    pub fn new(
        name: impl Into<String>,
        family: impl Into<String>,
        params_b: f64,
        size_gb: f64,
        quantization: impl Into<String>,
        context_length: u32,
    ) -> Self {
        Self {
            name: name.into(),
            family: family.into().to_lowercase(),
            params_b,
            size_gb,
            quantization: quantization.into(),
            context_length,
        }
    }

    /// Check that every numeric field is usable for scoring.
    pub fn validate(&self) -> Result<()> {
        let invalid = |reason: &str| Err(CheckerError::invalid_model(&self.name, reason));

        if self.name.trim().is_empty() {
            return invalid("name is empty");
        }
        if !self.params_b.is_finite() || self.params_b <= 0.0 {
            return invalid("params_b must be a positive number");
        }
        if !self.size_gb.is_finite() || self.size_gb <= 0.0 {
            return invalid("size_gb must be a positive number");
        }
        if self.context_length == 0 {
            return invalid("context_length must be positive");
        }
        Ok(())
    }

    /// Base name before the tag separator (e.g., "llama3.1")
    pub fn base_name(&self) -> &str {
        self.name.split(':').next().unwrap_or(&self.name)
    }
}
