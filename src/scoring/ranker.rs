// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Ranking and categorization of scored models

use serde::Serialize;

use super::scorer::{ScoreResult, Scorer};
use super::use_case::UseCase;
use crate::hardware::HardwareProfile;
use crate::models::ModelDescriptor;

/// Score every model, keep the ones that fit, and return the best `limit`
/// by final score. Ties keep input order. Invalid descriptors are skipped.
pub fn rank(
    models: &[ModelDescriptor],
    profile: &HardwareProfile,
    use_case: UseCase,
    limit: usize,
) -> Vec<ScoreResult> {
    rank_with(&Scorer::default(), models, profile, use_case, limit)
}

/// [`rank`] with a custom scorer
pub fn rank_with(
    scorer: &Scorer,
    models: &[ModelDescriptor],
    profile: &HardwareProfile,
    use_case: UseCase,
    limit: usize,
) -> Vec<ScoreResult> {
    let mut scored: Vec<ScoreResult> = models
        .iter()
        .filter_map(|model| match scorer.score(model, profile, use_case) {
            Ok(result) => Some(result),
            Err(e) => {
                tracing::debug!(model = %model.name, error = %e, "skipping model");
                None
            }
        })
        .filter(|result| result.will_fit)
        .collect();

    // sort_by is stable
    scored.sort_by(|a, b| b.scores.final_score.total_cmp(&a.scores.final_score));
    scored.truncate(limit);
    scored
}

/// Best model per criterion
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Categories<'a> {
    pub best_overall: Option<&'a ScoreResult>,
    pub highest_quality: Option<&'a ScoreResult>,
    pub fastest: Option<&'a ScoreResult>,
    pub best_fit: Option<&'a ScoreResult>,
}

/// First result with the strictly highest key
fn arg_max<'a>(
    results: &'a [ScoreResult],
    key: impl Fn(&ScoreResult) -> f64,
) -> Option<&'a ScoreResult> {
    results.iter().fold(None, |best, candidate| match best {
        Some(current) if key(candidate) <= key(current) => Some(current),
        _ => Some(candidate),
    })
}

/// Pick the best result for each criterion. All `None` for no results.
pub fn categorize(results: &[ScoreResult]) -> Categories<'_> {
    Categories {
        best_overall: arg_max(results, |r| r.scores.final_score),
        highest_quality: arg_max(results, |r| r.scores.quality),
        fastest: arg_max(results, |r| r.scores.speed),
        best_fit: arg_max(results, |r| r.scores.fit),
    }
}
