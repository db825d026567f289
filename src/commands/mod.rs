// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Subcommand implementations
//!
//! Each command renders either styled text or pretty JSON to a writer.

use std::io::Write;
use std::path::Path;

use crossterm::style::{Color, ResetColor, SetForegroundColor};
use crossterm::ExecutableCommand;
use serde::Serialize;

use crate::config::Settings;
use crate::error::Result;
use crate::hardware::{HardwareDetector, HardwareProfile};
use crate::models::ModelCatalogue;
use crate::scoring::UseCase;

pub mod models;
pub mod recommend;
pub mod score;
pub mod system;
pub mod use_cases;

/// Detect hardware using the configured tool timeout.
pub fn detect_profile(settings: &Settings) -> HardwareProfile {
    HardwareDetector::new()
        .with_tool_timeout(settings.probe_timeout())
        .detect()
}

/// Use case from the command line, else the configured default.
pub fn resolve_use_case(arg: Option<&str>, settings: &Settings) -> UseCase {
    match arg {
        Some(label) => UseCase::from_label(label),
        None => settings.use_case(),
    }
}

/// Catalogue from the command line, else the configured file, else built-in.
pub fn resolve_catalogue(arg: Option<&Path>, settings: &Settings) -> Result<ModelCatalogue> {
    let path = arg.or(settings.catalogue_path.as_deref());
    ModelCatalogue::load(path)
}

pub(crate) fn write_json<W: Write, T: Serialize + ?Sized>(out: &mut W, value: &T) -> Result<()> {
    writeln!(out, "{}", serde_json::to_string_pretty(value)?)?;
    Ok(())
}

pub(crate) fn write_heading<W: Write>(out: &mut W, title: &str) -> Result<()> {
    writeln!(out)?;
    out.execute(SetForegroundColor(Color::Cyan))?;
    writeln!(out, "=== {} ===", title)?;
    out.execute(ResetColor)?;
    Ok(())
}

pub(crate) fn write_colored<W: Write>(out: &mut W, color: Color, text: &str) -> Result<()> {
    out.execute(SetForegroundColor(color))?;
    write!(out, "{}", text)?;
    out.execute(ResetColor)?;
    Ok(())
}

/// Colour for a 0-100 score
pub(crate) fn score_color(score: f64) -> Color {
    if score >= 80.0 {
        Color::Green
    } else if score >= 60.0 {
        Color::Yellow
    } else {
        Color::Red
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_resolve_use_case_prefers_argument() {
        let settings = Settings {
            default_use_case: "chat".to_string(),
            ..Settings::default()
        };
        assert_eq!(resolve_use_case(Some("coding"), &settings), UseCase::Coding);
        assert_eq!(resolve_use_case(None, &settings), UseCase::Chat);
        assert_eq!(resolve_use_case(Some("bogus"), &settings), UseCase::General);
    }

    #[test]
    fn test_resolve_catalogue_builtin() {
        let catalogue = resolve_catalogue(None, &Settings::default()).unwrap();
        assert!(catalogue.source().is_none());
        assert!(!catalogue.is_empty());
    }

    #[test]
    fn test_resolve_catalogue_missing_file() {
        let settings = Settings {
            catalogue_path: Some(PathBuf::from("/nonexistent/models.toml")),
            ..Settings::default()
        };
        assert!(resolve_catalogue(None, &settings).is_err());
    }

    #[test]
    fn test_write_heading() {
        let mut out = Vec::new();
        write_heading(&mut out, "CPU").unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("=== CPU ==="));
    }

    #[test]
    fn test_score_color() {
        assert_eq!(score_color(85.0), Color::Green);
        assert_eq!(score_color(65.0), Color::Yellow);
        assert_eq!(score_color(10.0), Color::Red);
    }
}
