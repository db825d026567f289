// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

use clap::Parser;
use llm_checker::cli::{Cli, Commands, OutputFormat};

#[test]
fn test_parse_no_command() {
    let cli = Cli::try_parse_from(["llm-checker"]).expect("Valid command parsing");
    assert!(cli.command.is_none());
}

#[test]
fn test_parse_system_command() {
    let cli = Cli::try_parse_from(["llm-checker", "system"]).expect("Valid command parsing");
    if let Some(Commands::System(args)) = cli.command {
        assert!(args.quantizations.is_none());
    } else {
        panic!("Expected System command");
    }
}

#[test]
fn test_parse_system_quantizations() {
    let cli = Cli::try_parse_from(["llm-checker", "system", "--quantizations", "32"])
        .expect("Valid command parsing");
    if let Some(Commands::System(args)) = cli.command {
        assert_eq!(args.quantizations, Some(32.0));
    } else {
        panic!("Expected System command");
    }
}

#[test]
fn test_parse_recommend_use_case() {
    let cli = Cli::try_parse_from(["llm-checker", "recommend", "-u", "reasoning"])
        .expect("Valid command parsing");
    if let Some(Commands::Recommend(args)) = cli.command {
        assert_eq!(args.use_case, Some("reasoning".to_string()));
        assert!(args.limit.is_none());
    } else {
        panic!("Expected Recommend command");
    }
}

#[test]
fn test_parse_recommend_invalid_limit() {
    assert!(Cli::try_parse_from(["llm-checker", "recommend", "--limit", "many"]).is_err());
}

#[test]
fn test_parse_score_command() {
    let cli = Cli::try_parse_from(["llm-checker", "score", "qwen2.5:14b-instruct-q6_k"])
        .expect("Valid command parsing");
    if let Some(Commands::Score(args)) = cli.command {
        assert_eq!(args.tag, "qwen2.5:14b-instruct-q6_k");
        assert!(args.size.is_none());
    } else {
        panic!("Expected Score command");
    }
}

#[test]
fn test_parse_models_catalogue() {
    let cli = Cli::try_parse_from(["llm-checker", "models", "--catalogue", "my.json"])
        .expect("Valid command parsing");
    assert!(matches!(cli.command, Some(Commands::Models(_))));
}

#[test]
fn test_global_flags_anywhere() {
    let cli = Cli::try_parse_from([
        "llm-checker",
        "recommend",
        "-v",
        "--format",
        "json",
        "--config",
        "/tmp/settings.json",
    ])
    .expect("Valid command parsing");
    assert_eq!(cli.verbose, 1);
    assert_eq!(cli.format, OutputFormat::Json);
    assert!(cli.config.is_some());
}

#[test]
fn test_invalid_command() {
    assert!(Cli::try_parse_from(["llm-checker", "chat"]).is_err());
}
