// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Single model scoring command

use std::io::Write;

use super::{
    detect_profile, resolve_catalogue, resolve_use_case, score_color, write_colored,
    write_heading, write_json,
};
use crate::cli::args::{OutputFormat, ScoreArgs};
use crate::config::Settings;
use crate::error::Result;
use crate::hardware::HardwareProfile;
use crate::models::{ModelCatalogue, ModelDescriptor};
use crate::scoring::{ScoreResult, Scorer, UseCase};

/// Execute the score command
pub fn execute(args: &ScoreArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let catalogue = resolve_catalogue(args.catalogue.as_deref(), settings)?;
    let model = resolve_model(&args.tag, args.size, &catalogue)?;
    let use_case = resolve_use_case(args.use_case.as_deref(), settings);
    let profile = detect_profile(settings);

    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, &model, &profile, use_case, format)
}

/// Catalogue entry for an exact tag, else a descriptor parsed from the tag.
/// An explicit size always goes through the tag parser.
pub fn resolve_model(
    tag: &str,
    size: Option<f64>,
    catalogue: &ModelCatalogue,
) -> Result<ModelDescriptor> {
    if size.is_none() {
        if let Some(model) = catalogue.find(tag) {
            tracing::debug!(tag, "scoring catalogue entry");
            return Ok(model.clone());
        }
    }
    ModelDescriptor::from_tag(tag, size)
}

pub fn render<W: Write>(
    out: &mut W,
    model: &ModelDescriptor,
    profile: &HardwareProfile,
    use_case: UseCase,
    format: OutputFormat,
) -> Result<()> {
    let result = Scorer::new().score(model, profile, use_case)?;

    if format == OutputFormat::Json {
        return write_json(out, &result);
    }

    write_text(out, &result, profile, use_case)
}

fn write_text<W: Write>(
    out: &mut W,
    result: &ScoreResult,
    profile: &HardwareProfile,
    use_case: UseCase,
) -> Result<()> {
    let model = &result.model;
    write_heading(out, &model.name)?;
    writeln!(
        out,
        "Family: {} | {}B params | {} | {:.1} GB | {} ctx",
        model.family, model.params_b, model.quantization, model.size_gb, model.context_length
    )?;

    let weights = use_case.weights();
    writeln!(out, "Use case: {}", use_case)?;
    writeln!(
        out,
        "Quality {:>5.1}  (x{:.2})",
        result.scores.quality, weights.quality
    )?;
    writeln!(out, "Speed   {:>5.1}  (x{:.2})", result.scores.speed, weights.speed)?;
    writeln!(out, "Fit     {:>5.1}  (x{:.2})", result.scores.fit, weights.fit)?;
    writeln!(
        out,
        "Context {:>5.1}  (x{:.2})",
        result.scores.context, weights.context
    )?;
    write!(out, "Final   ")?;
    write_colored(
        out,
        score_color(result.scores.final_score),
        &format!("{:>5.1}", result.scores.final_score),
    )?;
    writeln!(out)?;

    writeln!(out, "Estimated speed: ~{:.1} tokens/s", result.estimated_tps)?;
    if result.will_fit {
        writeln!(
            out,
            "Fits in {:.1} GB budget",
            profile.summary.max_model_size_gb
        )?;
    } else {
        writeln!(
            out,
            "Does not fit: {:.1} GB needed, {:.1} GB available",
            model.size_gb, profile.summary.max_model_size_gb
        )?;
        let suggestions = profile.recommended_quantizations(model.params_b);
        writeln!(out, "Try quantizations: {}", suggestions.join(", "))?;
    }

    writeln!(out)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::{HardwareDetector, StaticProbe};

    fn render_tag(tag: &str, format: OutputFormat) -> String {
        let profile = HardwareDetector::with_probe(StaticProbe::new().with_ram_gb(32.0)).detect();
        let model = ModelDescriptor::from_tag(tag, None).unwrap();
        let mut out = Vec::new();
        render(&mut out, &model, &profile, UseCase::General, format).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_text_fitting_model() {
        let text = render_tag("llama3.1:8b-instruct-q4_k_m", OutputFormat::Text);
        assert!(text.contains("Family: llama3.1"));
        assert!(text.contains("Use case: general"));
        assert!(text.contains("Fits in 22.4 GB budget"));
    }

    #[test]
    fn test_text_oversized_model_suggests_quantizations() {
        let text = render_tag("llama3.3:70b-instruct-q8_0", OutputFormat::Text);
        assert!(text.contains("Does not fit"));
        assert!(text.contains("Try quantizations: Q4_K_M"));
    }

    #[test]
    fn test_resolve_model_prefers_catalogue_entry() {
        let catalogue = ModelCatalogue::builtin();
        let model = resolve_model("phi4:14b-q8_0", None, &catalogue).unwrap();
        assert_eq!(model.size_gb, 15.0);
        assert_eq!(model.context_length, 16384);
    }

    #[test]
    fn test_resolve_model_explicit_size_uses_tag() {
        let catalogue = ModelCatalogue::builtin();
        let model = resolve_model("phi4:14b-q8_0", Some(9.0), &catalogue).unwrap();
        assert_eq!(model.size_gb, 9.0);
    }

    #[test]
    fn test_resolve_model_unknown_tag_is_parsed() {
        let catalogue = ModelCatalogue::builtin();
        let model = resolve_model("granite3:8b-instruct-q8_0", None, &catalogue).unwrap();
        assert_eq!(model.params_b, 8.0);
        assert_eq!(model.quantization, "Q8_0");
        assert!(resolve_model("no-colon", None, &catalogue).is_err());
    }

    #[test]
    fn test_json_result() {
        let json = render_tag("gemma2:9b-instruct-q4_k_m", OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["model"]["family"], "gemma2");
        assert_eq!(value["will_fit"], true);
        assert!(value["scores"]["final"].as_f64().unwrap() > 0.0);
    }
}
