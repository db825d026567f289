// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Catalogue listing command

use std::io::Write;

use super::{resolve_catalogue, write_heading, write_json};
use crate::cli::args::{ModelsArgs, OutputFormat};
use crate::config::Settings;
use crate::error::Result;
use crate::models::{ModelCatalogue, ModelDescriptor};

/// Execute the models command
pub fn execute(args: &ModelsArgs, format: OutputFormat, settings: &Settings) -> Result<()> {
    let catalogue = resolve_catalogue(args.catalogue.as_deref(), settings)?;
    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, &catalogue, args.family.as_deref(), format)
}

pub fn render<W: Write>(
    out: &mut W,
    catalogue: &ModelCatalogue,
    family: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let models: Vec<&ModelDescriptor> = match family {
        Some(family) => catalogue.by_family(family),
        None => catalogue.models().iter().collect(),
    };

    if format == OutputFormat::Json {
        return write_json(out, &models);
    }

    let title = match catalogue.source() {
        Some(path) => format!("Models from {}", path.display()),
        None => "Built-in Models".to_string(),
    };
    write_heading(out, &title)?;

    if models.is_empty() {
        writeln!(out, "No models found.")?;
        return Ok(());
    }

    let width = models.iter().map(|m| m.name.len()).max().unwrap_or(0);
    for model in &models {
        writeln!(
            out,
            "{:<width$}  {:>6}B  {:<7} {:>6.1} GB  {:>7} ctx",
            model.name,
            model.params_b,
            model.quantization,
            model.size_gb,
            model.context_length,
            width = width
        )?;
    }
    writeln!(out, "\n{} model(s)", models.len())?;
    Ok(())
}
