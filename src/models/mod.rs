// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model catalogue
//!
//! Descriptors for downloadable model variants and where they come from:
//!
//! 1. Built-in list of popular Ollama variants (always available)
//! 2. A user catalogue file in TOML or JSON
//! 3. A single Ollama tag, parsed with size and context estimated
//!
//! ## Example Catalogue
//!
//! ```toml
//! [[models]]
//! name = "qwen2.5-coder:14b-instruct-q4_k_m"
//! family = "qwen2.5-coder"
//! params_b = 14
//! size_gb = 8.9
//! quantization = "Q4_K_M"
//! context_length = 32768
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use llm_checker::models::{ModelCatalogue, ModelDescriptor};
//!
//! let catalogue = ModelCatalogue::load(None)?;
//! let custom = ModelDescriptor::from_tag("llama3.1:8b-instruct-q4_k_m", None)?;
//! ```

pub mod catalogue;
pub mod quant;
pub mod schema;
pub mod tag;

pub use catalogue::{builtin_models, load_catalogue, ModelCatalogue};
pub use schema::ModelDescriptor;
