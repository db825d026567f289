// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Multi-criteria model scoring
//!
//! Each model gets four sub-scores in [0, 100]:
//!
//! - **quality**: family base quality, a diminishing parameter bonus, minus
//!   the quantization penalty, plus a use-case bonus for the family
//! - **speed**: estimated tokens/second on a log scale (1 tps = 0, 100 tps = 100)
//! - **fit**: how well the model uses the memory budget (70-85% is ideal)
//! - **context**: context window on a log scale (2k = 30, 16k+ = 100)
//!
//! The final score is the use-case weighted sum. Reported scores are
//! rounded to one decimal.

use serde::{Deserialize, Serialize};

use super::tables::{lookup, DEFAULT_FAMILY_QUALITY, FAMILY_QUALITY, TASK_BONUSES};
use super::use_case::UseCase;
use crate::error::Result;
use crate::hardware::summary::round1;
use crate::hardware::HardwareProfile;
use crate::models::quant;
use crate::models::ModelDescriptor;

const MAX_PARAM_BONUS: f64 = 15.0;
const CONTEXT_BASE_TOKENS: f64 = 2048.0;
const CONTEXT_FLOOR: f64 = 30.0;

/// Estimated tokens/second for a model: `speed / sqrt(params) * multiplier`,
/// rounded to one decimal.
pub fn estimate_tokens_per_second(speed_coefficient: f64, params_b: f64, quantization: &str) -> f64 {
    if params_b <= 0.0 {
        return 0.0;
    }
    let base = speed_coefficient / params_b.sqrt();
    round1(base * quant::speed_multiplier(quantization))
}

/// Speed sub-score from tokens/second
pub fn speed_score(tps: f64) -> f64 {
    if tps <= 0.0 {
        return 0.0;
    }
    (tps.log10() / 100f64.log10() * 100.0).clamp(0.0, 100.0)
}

/// Fit sub-score from model size and memory budget
pub fn fit_score(size_gb: f64, max_model_size_gb: f64) -> f64 {
    if size_gb <= 0.0 || max_model_size_gb <= 0.0 {
        return 0.0;
    }

    let utilization = size_gb / max_model_size_gb;
    if utilization > 1.0 {
        0.0
    } else if utilization > 0.9 {
        (1.0 - utilization) * 1000.0
    } else if utilization > 0.85 {
        100.0 - (utilization - 0.85) / 0.05 * 20.0
    } else if utilization >= 0.7 {
        100.0
    } else {
        50.0 + utilization / 0.7 * 50.0
    }
}

/// Context sub-score from the context window
pub fn context_score(context_length: u32) -> f64 {
    if context_length == 0 {
        return CONTEXT_FLOOR;
    }
    let raw = CONTEXT_FLOOR + (context_length as f64 / CONTEXT_BASE_TOKENS).log2() * 20.0;
    raw.clamp(CONTEXT_FLOOR, 100.0)
}

/// Sub-scores and the weighted final score
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SubScores {
    pub quality: f64,
    pub speed: f64,
    pub fit: f64,
    pub context: f64,
    #[serde(rename = "final")]
    pub final_score: f64,
}

/// Score of one model for one hardware profile and use case
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    pub model: ModelDescriptor,
    pub scores: SubScores,
    pub estimated_tps: f64,
    pub will_fit: bool,
}

/// Scores models against a hardware profile
#[derive(Debug, Clone)]
pub struct Scorer {
    family_quality: &'static [(&'static str, f64)],
    task_bonuses: &'static [(UseCase, &'static [(&'static str, f64)])],
}

impl Default for Scorer {
    fn default() -> Self {
        Self::new()
    }
}

impl Scorer {
    pub fn new() -> Self {
        Self {
            family_quality: FAMILY_QUALITY,
            task_bonuses: TASK_BONUSES,
        }
    }

    /// Builder: replace the family quality table
    pub fn with_family_quality(mut self, table: &'static [(&'static str, f64)]) -> Self {
        self.family_quality = table;
        self
    }

    /// Builder: replace the per-use-case bonus tables
    pub fn with_task_bonuses(
        mut self,
        table: &'static [(UseCase, &'static [(&'static str, f64)])],
    ) -> Self {
        self.task_bonuses = table;
        self
    }

    fn task_bonus(&self, use_case: UseCase, family: &str) -> f64 {
        self.task_bonuses
            .iter()
            .find(|(u, _)| *u == use_case)
            .and_then(|(_, table)| lookup(table, family))
            .unwrap_or(0.0)
    }

    /// Quality sub-score, unrounded
    pub fn quality_score(&self, model: &ModelDescriptor, use_case: UseCase) -> f64 {
        let family = model.family.to_lowercase();
        let base = lookup(self.family_quality, &family).unwrap_or(DEFAULT_FAMILY_QUALITY);
        let param_bonus = ((model.params_b + 1.0).log2() * 3.0).min(MAX_PARAM_BONUS);
        let penalty = quant::quality_penalty(&model.quantization);
        let bonus = self.task_bonus(use_case, &family);

        (base + param_bonus - penalty + bonus).clamp(0.0, 100.0)
    }

    /// Score a single model. Fails only for an invalid descriptor.
    pub fn score(
        &self,
        model: &ModelDescriptor,
        profile: &HardwareProfile,
        use_case: UseCase,
    ) -> Result<ScoreResult> {
        model.validate()?;

        let weights = use_case.weights();
        let estimated_tps = profile.estimate_tokens_per_second(model.params_b, &model.quantization);

        let quality = self.quality_score(model, use_case);
        let speed = speed_score(estimated_tps);
        let fit = fit_score(model.size_gb, profile.max_model_size_gb());
        let context = context_score(model.context_length);

        let final_score = quality * weights.quality
            + speed * weights.speed
            + fit * weights.fit
            + context * weights.context;

        Ok(ScoreResult {
            model: model.clone(),
            scores: SubScores {
                quality: round1(quality),
                speed: round1(speed),
                fit: round1(fit),
                context: round1(context),
                final_score: round1(final_score),
            },
            estimated_tps,
            will_fit: profile.will_model_fit(model.size_gb),
        })
    }
}
