// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Use case listing command

use std::io::Write;

use serde::Serialize;

use super::{write_heading, write_json};
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::scoring::{UseCase, Weights};

#[derive(Debug, Serialize)]
struct UseCaseInfo {
    name: UseCase,
    description: &'static str,
    weights: Weights,
}

/// Execute the use-cases command
pub fn execute(format: OutputFormat) -> Result<()> {
    let mut stdout = std::io::stdout().lock();
    render(&mut stdout, format)
}

pub fn render<W: Write>(out: &mut W, format: OutputFormat) -> Result<()> {
    if format == OutputFormat::Json {
        let infos: Vec<UseCaseInfo> = UseCase::all()
            .iter()
            .map(|u| UseCaseInfo {
                name: *u,
                description: u.description(),
                weights: u.weights(),
            })
            .collect();
        return write_json(out, &infos);
    }

    write_heading(out, "Use Cases")?;
    writeln!(out, "{:<10} {:>7} {:>7} {:>7} {:>7}", "", "quality", "speed", "fit", "context")?;
    for use_case in UseCase::all() {
        let w = use_case.weights();
        writeln!(
            out,
            "{:<10} {:>7.2} {:>7.2} {:>7.2} {:>7.2}  {}",
            use_case.as_str(),
            w.quality,
            w.speed,
            w.fit,
            w.context,
            use_case.description()
        )?;
    }
    writeln!(out)?;
    Ok(())
}
