// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! llm-checker - find the local LLMs your hardware can run
//!
//! Entry point for the llm-checker CLI application.

use clap::Parser;

use llm_checker::cli::{Cli, Commands, RecommendArgs};
use llm_checker::commands;
use llm_checker::config::Settings;
use llm_checker::error::Result;

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing. `RUST_LOG` still applies on top of the WARN default.
    let mut env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing::Level::WARN.into());

    if cli.verbose > 0 {
        let level = if cli.verbose > 1 { "trace" } else { "debug" };
        if let Ok(parsed) = format!("llm_checker={}", level).parse() {
            env_filter = env_filter.add_directive(parsed);
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    // Load settings
    let settings = match cli.config {
        Some(ref path) => Settings::load_from(path)?,
        None => Settings::load()?,
    };

    // Dispatch to appropriate command
    let format = cli.format;
    match cli.command {
        None => commands::recommend::execute(&RecommendArgs::default(), format, &settings)?,
        Some(Commands::System(args)) => commands::system::execute(&args, format, &settings)?,
        Some(Commands::Recommend(args)) => {
            commands::recommend::execute(&args, format, &settings)?
        }
        Some(Commands::Score(args)) => commands::score::execute(&args, format, &settings)?,
        Some(Commands::Models(args)) => commands::models::execute(&args, format, &settings)?,
        Some(Commands::UseCases) => commands::use_cases::execute(format)?,
    }

    Ok(())
}
