// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! llm-checker - recommends locally-runnable language models for a machine.
//!
//! This crate exposes the library used by the `llm-checker` CLI
//! (`src/main.rs`).
//!
//! Architecture highlights:
//! - `hardware`: capability probes, backend selection, capacity summary and tier
//! - `models`: model descriptors, the built-in catalogue, catalogue files, tag parsing
//! - `scoring`: per-model sub-scores, use-case weighting, ranking and categories
//! - `config`: user settings
//! - `cli`, `commands`: argument parsing and text/JSON rendering

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod hardware;
pub mod models;
pub mod scoring;

pub use error::{CheckerError, Result};
