// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Use cases and their score weights

use std::fmt;
use std::str::FromStr;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What the user wants a model for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum UseCase {
    #[default]
    General,
    Coding,
    Reasoning,
    Chat,
    Creative,
    Fast,
    Quality,
}

/// Per-use-case weight of each sub-score. Every vector sums to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Weights {
    pub quality: f64,
    pub speed: f64,
    pub fit: f64,
    pub context: f64,
}

impl Weights {
    const fn new(quality: f64, speed: f64, fit: f64, context: f64) -> Self {
        Self {
            quality,
            speed,
            fit,
            context,
        }
    }

    pub fn sum(&self) -> f64 {
        self.quality + self.speed + self.fit + self.context
    }
}

impl UseCase {
    pub fn all() -> &'static [UseCase] {
        &[
            UseCase::General,
            UseCase::Coding,
            UseCase::Reasoning,
            UseCase::Chat,
            UseCase::Creative,
            UseCase::Fast,
            UseCase::Quality,
        ]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UseCase::General => "general",
            UseCase::Coding => "coding",
            UseCase::Reasoning => "reasoning",
            UseCase::Chat => "chat",
            UseCase::Creative => "creative",
            UseCase::Fast => "fast",
            UseCase::Quality => "quality",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            UseCase::General => "Balanced quality and speed",
            UseCase::Coding => "Code generation and review",
            UseCase::Reasoning => "Multi-step reasoning and analysis",
            UseCase::Chat => "Responsive conversation",
            UseCase::Creative => "Writing and brainstorming",
            UseCase::Fast => "Maximum tokens per second",
            UseCase::Quality => "Best answers regardless of speed",
        }
    }

    pub fn weights(&self) -> Weights {
        match self {
            UseCase::General => Weights::new(0.40, 0.35, 0.15, 0.10),
            UseCase::Coding => Weights::new(0.55, 0.20, 0.15, 0.10),
            UseCase::Reasoning => Weights::new(0.60, 0.15, 0.10, 0.15),
            UseCase::Chat => Weights::new(0.40, 0.40, 0.15, 0.05),
            UseCase::Creative => Weights::new(0.50, 0.25, 0.15, 0.10),
            UseCase::Fast => Weights::new(0.25, 0.55, 0.15, 0.05),
            UseCase::Quality => Weights::new(0.65, 0.10, 0.15, 0.10),
        }
    }

    /// Parse a label, falling back to [`UseCase::General`] for unknown ones.
    pub fn from_label(label: &str) -> Self {
        label.parse().unwrap_or_else(|_| {
            tracing::debug!(label, "unknown use case, using general weights");
            UseCase::General
        })
    }
}

impl FromStr for UseCase {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let label = s.trim().to_lowercase();
        UseCase::all()
            .iter()
            .copied()
            .find(|u| u.as_str() == label)
            .ok_or_else(|| format!("unknown use case: {}", s))
    }
}

impl fmt::Display for UseCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
