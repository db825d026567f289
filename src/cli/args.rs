// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CLI argument definitions using Clap
//!
//! Defines all command-line arguments and subcommands for llm-checker.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// llm-checker - find the local models your hardware can run
#[derive(Parser, Debug)]
#[command(name = "llm-checker")]
#[command(version, about = "Find the local LLMs your hardware can run")]
#[command(propagate_version = true)]
pub struct Cli {
    /// Settings file path (defaults to ~/.llm-checker/settings.json)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output format
    #[arg(long, global = true, default_value = "text")]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show system hardware information
    #[command(alias = "hw")]
    System(SystemArgs),

    /// Rank catalogue models for this machine
    Recommend(RecommendArgs),

    /// Score a single Ollama model tag
    Score(ScoreArgs),

    /// List the model catalogue
    Models(ModelsArgs),

    /// List use cases and their score weights
    UseCases,
}

/// Arguments for the system subcommand
#[derive(clap::Args, Debug, Default)]
pub struct SystemArgs {
    /// Also suggest quantizations for a model of this many billion parameters
    #[arg(short, long, value_name = "BILLIONS")]
    pub quantizations: Option<f64>,
}

/// Arguments for the recommend subcommand
#[derive(clap::Args, Debug, Default)]
pub struct RecommendArgs {
    /// Use case weighting (general, coding, reasoning, chat, creative, fast, quality)
    #[arg(short, long)]
    pub use_case: Option<String>,

    /// Number of models to show
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Catalogue file (TOML or JSON) instead of the built-in list
    #[arg(long)]
    pub catalogue: Option<PathBuf>,
}

/// Arguments for the score subcommand
#[derive(clap::Args, Debug)]
pub struct ScoreArgs {
    /// Model tag (e.g., "llama3.1:8b-instruct-q4_k_m")
    pub tag: String,

    /// Known on-disk size in GB (estimated from the tag otherwise)
    #[arg(short, long)]
    pub size: Option<f64>,

    /// Use case weighting
    #[arg(short, long)]
    pub use_case: Option<String>,

    /// Catalogue file (TOML or JSON) to look the tag up in
    #[arg(long)]
    pub catalogue: Option<PathBuf>,
}

/// Arguments for the models subcommand
#[derive(clap::Args, Debug, Default)]
pub struct ModelsArgs {
    /// Catalogue file (TOML or JSON) instead of the built-in list
    #[arg(long)]
    pub catalogue: Option<PathBuf>,

    /// Only show this family
    #[arg(short, long)]
    pub family: Option<String>,
}

/// Output format
#[derive(ValueEnum, Clone, Copy, Debug, Default, PartialEq)]
pub enum OutputFormat {
    /// Plain text output
    #[default]
    Text,

    /// JSON output
    Json,
}
