// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model recommendation command

use std::io::Write;

use serde::Serialize;

use super::{
    detect_profile, resolve_catalogue, resolve_use_case, score_color, write_colored,
    write_heading, write_json,
};
use crate::cli::args::{OutputFormat, RecommendArgs};
use crate::config::Settings;
use crate::error::{CheckerError, Result};
use crate::hardware::{CapacitySummary, HardwareProfile, HardwareTier};
use crate::scoring::{categorize, rank, Categories, ScoreResult, UseCase};

#[derive(Debug, Serialize)]
struct RecommendReport<'a> {
    use_case: UseCase,
    tier: HardwareTier,
    hardware: &'a CapacitySummary,
    recommendations: &'a [ScoreResult],
    categories: Categories<'a>,
}

/// Execute the recommend command
pub fn execute(args: &RecommendArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let limit = args.limit.unwrap_or(settings.limit);
    if limit == 0 {
        return Err(CheckerError::Config("--limit must be at least 1".to_string()));
    }

    let use_case = resolve_use_case(args.use_case.as_deref(), settings);
    let catalogue = resolve_catalogue(args.catalogue.as_deref(), settings)?;
    let profile = detect_profile(settings);

    let results = rank(catalogue.models(), &profile, use_case, limit);
    tracing::debug!(
        candidates = catalogue.len(),
        recommended = results.len(),
        %use_case,
        "ranking complete"
    );

    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, &profile, use_case, &results, format)
}

pub fn render<W: Write>(
    out: &mut W,
    profile: &HardwareProfile,
    use_case: UseCase,
    results: &[ScoreResult],
    format: OutputFormat,
) -> Result<()> {
    let categories = categorize(results);

    if format == OutputFormat::Json {
        return write_json(
            out,
            &RecommendReport {
                use_case,
                tier: profile.tier,
                hardware: &profile.summary,
                recommendations: results,
                categories,
            },
        );
    }

    write_heading(out, "Your Hardware")?;
    writeln!(out, "{}", profile.summary.description)?;
    writeln!(
        out,
        "Tier: {} | Backend: {} | Max model size: {:.1} GB",
        profile.tier, profile.backend.name, profile.summary.max_model_size_gb
    )?;

    write_heading(out, &format!("Recommended Models ({})", use_case))?;
    if results.is_empty() {
        writeln!(out, "No models fit on this machine.")?;
        writeln!(out)?;
        return Ok(());
    }

    for (i, result) in results.iter().enumerate() {
        write!(out, "{:>2}. ", i + 1)?;
        write_colored(
            out,
            score_color(result.scores.final_score),
            &format!("{:>5.1}", result.scores.final_score),
        )?;
        writeln!(out, "  {}", result.model.name)?;
        writeln!(
            out,
            "      Q {:.0}  S {:.0}  F {:.0}  C {:.0} | ~{:.1} tok/s | {:.1} GB",
            result.scores.quality,
            result.scores.speed,
            result.scores.fit,
            result.scores.context,
            result.estimated_tps,
            result.model.size_gb
        )?;
    }

    write_heading(out, "Highlights")?;
    let highlights = [
        ("Best overall", categories.best_overall),
        ("Highest quality", categories.highest_quality),
        ("Fastest", categories.fastest),
        ("Best fit", categories.best_fit),
    ];
    for (label, result) in highlights {
        if let Some(result) = result {
            writeln!(out, "{:<16} {}", label, result.model.name)?;
        }
    }

    writeln!(out)?;
    Ok(())
}
