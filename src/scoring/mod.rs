// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model scoring and ranking
//!
//! A (hardware profile, model, use case) triple becomes a [`ScoreResult`];
//! [`rank`] turns a catalogue into a recommendation list and
//! [`categorize`] picks the standout per criterion.

pub mod ranker;
pub mod scorer;
pub mod tables;
pub mod use_case;

pub use ranker::{categorize, rank, rank_with, Categories};
pub use scorer::{
    context_score, estimate_tokens_per_second, fit_score, speed_score, ScoreResult, Scorer,
    SubScores,
};
pub use use_case::{UseCase, Weights};
