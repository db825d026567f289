// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Model catalogue
//!
//! Model variants come from:
//! 1. The built-in list of popular Ollama variants (always available)
//! 2. A user catalogue file (TOML `[[models]]` or JSON) replacing it

use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::schema::ModelDescriptor;
use super::tag::family_for;
use crate::error::{CheckerError, Result};

/// name, family, params (B), size (GB), quantization, context length
type BuiltinEntry = (&'static str, &'static str, f64, f64, &'static str, u32);

const BUILTIN: &[BuiltinEntry] = &[
    // Qwen 2.5 Coder
    ("qwen2.5-coder:7b-instruct-q8_0", "qwen2.5-coder", 7.0, 7.6, "Q8_0", 32768),
    ("qwen2.5-coder:7b-instruct-q6_k", "qwen2.5-coder", 7.0, 6.0, "Q6_K", 32768),
    ("qwen2.5-coder:7b-instruct-q4_k_m", "qwen2.5-coder", 7.0, 4.7, "Q4_K_M", 32768),
    ("qwen2.5-coder:14b-instruct-q8_0", "qwen2.5-coder", 14.0, 15.2, "Q8_0", 32768),
    ("qwen2.5-coder:14b-instruct-q6_k", "qwen2.5-coder", 14.0, 11.8, "Q6_K", 32768),
    ("qwen2.5-coder:14b-instruct-q4_k_m", "qwen2.5-coder", 14.0, 8.9, "Q4_K_M", 32768),
    ("qwen2.5-coder:32b-instruct-q6_k", "qwen2.5-coder", 32.0, 26.5, "Q6_K", 32768),
    ("qwen2.5-coder:32b-instruct-q4_k_m", "qwen2.5-coder", 32.0, 20.0, "Q4_K_M", 32768),
    // Qwen 2.5
    ("qwen2.5:7b-instruct-q8_0", "qwen2.5", 7.0, 7.7, "Q8_0", 128000),
    ("qwen2.5:7b-instruct-q6_k", "qwen2.5", 7.0, 6.0, "Q6_K", 128000),
    ("qwen2.5:7b-instruct-q4_k_m", "qwen2.5", 7.0, 4.7, "Q4_K_M", 128000),
    ("qwen2.5:14b-instruct-q8_0", "qwen2.5", 14.0, 15.8, "Q8_0", 128000),
    ("qwen2.5:14b-instruct-q6_k", "qwen2.5", 14.0, 12.0, "Q6_K", 128000),
    ("qwen2.5:14b-instruct-q4_k_m", "qwen2.5", 14.0, 9.0, "Q4_K_M", 128000),
    ("qwen2.5:32b-instruct-q6_k", "qwen2.5", 32.0, 27.0, "Q6_K", 128000),
    ("qwen2.5:32b-instruct-q4_k_m", "qwen2.5", 32.0, 20.5, "Q4_K_M", 128000),
    ("qwen2.5:72b-instruct-q4_k_m", "qwen2.5", 72.0, 45.0, "Q4_K_M", 128000),
    // Llama 3.3
    ("llama3.3:70b-instruct-q8_0", "llama3.3", 70.0, 75.0, "Q8_0", 128000),
    ("llama3.3:70b-instruct-q6_k", "llama3.3", 70.0, 57.0, "Q6_K", 128000),
    ("llama3.3:70b-instruct-q4_k_m", "llama3.3", 70.0, 43.0, "Q4_K_M", 128000),
    // Llama 3.2
    ("llama3.2:1b-instruct-q8_0", "llama3.2", 1.0, 1.3, "Q8_0", 131072),
    ("llama3.2:1b-instruct-q4_k_m", "llama3.2", 1.0, 0.9, "Q4_K_M", 131072),
    ("llama3.2:3b-instruct-q8_0", "llama3.2", 3.0, 3.4, "Q8_0", 131072),
    ("llama3.2:3b-instruct-q6_k", "llama3.2", 3.0, 2.6, "Q6_K", 131072),
    ("llama3.2:3b-instruct-q4_k_m", "llama3.2", 3.0, 2.0, "Q4_K_M", 131072),
    // Llama 3.1
    ("llama3.1:8b-instruct-q8_0", "llama3.1", 8.0, 8.5, "Q8_0", 131072),
    ("llama3.1:8b-instruct-q6_k", "llama3.1", 8.0, 6.6, "Q6_K", 131072),
    ("llama3.1:8b-instruct-q4_k_m", "llama3.1", 8.0, 5.0, "Q4_K_M", 131072),
    ("llama3.1:70b-instruct-q6_k", "llama3.1", 70.0, 57.0, "Q6_K", 131072),
    ("llama3.1:70b-instruct-q4_k_m", "llama3.1", 70.0, 43.0, "Q4_K_M", 131072),
    // DeepSeek R1
    ("deepseek-r1:7b-q8_0", "deepseek-r1", 7.0, 7.9, "Q8_0", 32768),
    ("deepseek-r1:7b-q6_k", "deepseek-r1", 7.0, 6.1, "Q6_K", 32768),
    ("deepseek-r1:7b-q4_k_m", "deepseek-r1", 7.0, 4.7, "Q4_K_M", 32768),
    ("deepseek-r1:14b-q8_0", "deepseek-r1", 14.0, 15.5, "Q8_0", 32768),
    ("deepseek-r1:14b-q6_k", "deepseek-r1", 14.0, 12.0, "Q6_K", 32768),
    ("deepseek-r1:14b-q4_k_m", "deepseek-r1", 14.0, 9.0, "Q4_K_M", 32768),
    ("deepseek-r1:70b-q4_k_m", "deepseek-r1", 70.0, 42.0, "Q4_K_M", 32768),
    // DeepSeek Coder V2
    ("deepseek-coder-v2:16b-lite-instruct-q8_0", "deepseek-coder-v2", 16.0, 16.5, "Q8_0", 131072),
    ("deepseek-coder-v2:16b-lite-instruct-q6_k", "deepseek-coder-v2", 16.0, 12.8, "Q6_K", 131072),
    ("deepseek-coder-v2:16b-lite-instruct-q4_k_m", "deepseek-coder-v2", 16.0, 9.8, "Q4_K_M", 131072),
    // Phi
    ("phi4:14b-q8_0", "phi-4", 14.0, 15.0, "Q8_0", 16384),
    ("phi4:14b-q6_k", "phi-4", 14.0, 11.5, "Q6_K", 16384),
    ("phi4:14b-q4_k_m", "phi-4", 14.0, 8.8, "Q4_K_M", 16384),
    ("phi3.5:3.8b-mini-instruct-q8_0", "phi-3.5", 3.8, 4.2, "Q8_0", 131072),
    ("phi3.5:3.8b-mini-instruct-q4_k_m", "phi-3.5", 3.8, 2.5, "Q4_K_M", 131072),
    // Gemma 2
    ("gemma2:9b-instruct-q8_0", "gemma2", 9.0, 9.8, "Q8_0", 8192),
    ("gemma2:9b-instruct-q6_k", "gemma2", 9.0, 7.6, "Q6_K", 8192),
    ("gemma2:9b-instruct-q4_k_m", "gemma2", 9.0, 5.8, "Q4_K_M", 8192),
    ("gemma2:27b-instruct-q6_k", "gemma2", 27.0, 22.0, "Q6_K", 8192),
    ("gemma2:27b-instruct-q4_k_m", "gemma2", 27.0, 16.5, "Q4_K_M", 8192),
    // Mistral / Mixtral
    ("mistral:7b-instruct-v0.3-q8_0", "mistral", 7.0, 7.7, "Q8_0", 32768),
    ("mistral:7b-instruct-v0.3-q6_k", "mistral", 7.0, 6.0, "Q6_K", 32768),
    ("mistral:7b-instruct-v0.3-q4_k_m", "mistral", 7.0, 4.7, "Q4_K_M", 32768),
    ("mixtral:8x7b-instruct-v0.1-q6_k", "mixtral", 47.0, 38.0, "Q6_K", 32768),
    ("mixtral:8x7b-instruct-v0.1-q4_k_m", "mixtral", 47.0, 29.0, "Q4_K_M", 32768),
    // CodeLlama
    ("codellama:7b-instruct-q8_0", "codellama", 7.0, 7.4, "Q8_0", 16384),
    ("codellama:7b-instruct-q4_k_m", "codellama", 7.0, 4.5, "Q4_K_M", 16384),
    ("codellama:13b-instruct-q8_0", "codellama", 13.0, 13.8, "Q8_0", 16384),
    ("codellama:13b-instruct-q4_k_m", "codellama", 13.0, 8.5, "Q4_K_M", 16384),
    // Yi Coder
    ("yi-coder:9b-chat-q8_0", "yi-coder", 9.0, 9.6, "Q8_0", 131072),
    ("yi-coder:9b-chat-q4_k_m", "yi-coder", 9.0, 5.8, "Q4_K_M", 131072),
    // Small models for low-end hardware
    ("tinyllama:1.1b-chat-v1.0-q8_0", "tinyllama", 1.1, 1.3, "Q8_0", 2048),
    ("tinyllama:1.1b-chat-v1.0-q4_k_m", "tinyllama", 1.1, 0.8, "Q4_K_M", 2048),
    ("smollm:360m-instruct-q8_0", "smollm", 0.36, 0.4, "Q8_0", 2048),
    ("smollm:1.7b-instruct-q8_0", "smollm", 1.7, 1.9, "Q8_0", 2048),
    ("smollm:1.7b-instruct-q4_k_m", "smollm", 1.7, 1.2, "Q4_K_M", 2048),
];

/// Built-in catalogue of popular Ollama variants
pub fn builtin_models() -> Vec<ModelDescriptor> {
    BUILTIN
        .iter()
        .map(|&(name, family, params, size, quant, ctx)| {
            ModelDescriptor::new(name, family, params, size, quant, ctx)
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogueFormat {
    Toml,
    Json,
}

impl CatalogueFormat {
    fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => Err(CheckerError::Catalogue(format!(
                "unsupported catalogue format: {} (expected .toml or .json)",
                path.display()
            ))),
        }
    }
}

/// TOML catalogue layout: a `[[models]]` array of tables
#[derive(Debug, Deserialize)]
struct TomlCatalogue {
    #[serde(default)]
    models: Vec<toml::Value>,
}

/// Accept a descriptor candidate: fill in a missing family, then validate.
fn accept(entry: std::result::Result<ModelDescriptor, String>, index: usize) -> Option<ModelDescriptor> {
    let mut model = match entry {
        Ok(model) => model,
        Err(e) => {
            tracing::warn!(index, error = %e, "skipping malformed catalogue entry");
            return None;
        }
    };

    if model.family.is_empty() {
        model.family = family_for(model.base_name());
    } else {
        model.family = model.family.to_lowercase();
    }

    match model.validate() {
        Ok(()) => Some(model),
        Err(e) => {
            tracing::warn!(index, error = %e, "skipping invalid catalogue entry");
            None
        }
    }
}

fn parse_toml(content: &str) -> Result<Vec<ModelDescriptor>> {
    let catalogue: TomlCatalogue = toml::from_str(content)?;
    Ok(catalogue
        .models
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| {
            accept(value.try_into::<ModelDescriptor>().map_err(|e| e.to_string()), i)
        })
        .collect())
}

fn parse_json(content: &str) -> Result<Vec<ModelDescriptor>> {
    let root: serde_json::Value = serde_json::from_str(content)?;
    let entries = match root {
        serde_json::Value::Array(entries) => entries,
        serde_json::Value::Object(mut map) => match map.remove("models") {
            Some(serde_json::Value::Array(entries)) => entries,
            _ => {
                return Err(CheckerError::Catalogue(
                    "JSON catalogue object must contain a \"models\" array".to_string(),
                ))
            }
        },
        _ => {
            return Err(CheckerError::Catalogue(
                "JSON catalogue must be an array or an object with \"models\"".to_string(),
            ))
        }
    };

    Ok(entries
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| {
            accept(serde_json::from_value(value).map_err(|e| e.to_string()), i)
        })
        .collect())
}

/// Load model descriptors from a TOML or JSON file, chosen by extension.
///
/// Malformed or invalid entries are logged and skipped; an unreadable or
/// unparseable file is an error.
pub fn load_catalogue(path: &Path) -> Result<Vec<ModelDescriptor>> {
    let format = CatalogueFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    let models = match format {
        CatalogueFormat::Toml => parse_toml(&content)?,
        CatalogueFormat::Json => parse_json(&content)?,
    };

    tracing::debug!(path = %path.display(), count = models.len(), "catalogue loaded");
    Ok(models)
}

/// The set of model variants to rank
#[derive(Debug, Clone)]
pub struct ModelCatalogue {
    models: Vec<ModelDescriptor>,
    /// Path of the catalogue file (if loaded from one)
    source: Option<PathBuf>,
}

impl ModelCatalogue {
    /// Catalogue with only the built-in variants
    pub fn builtin() -> Self {
        Self {
            models: builtin_models(),
            source: None,
        }
    }

    /// Catalogue read from a user file
    pub fn from_file(path: &Path) -> Result<Self> {
        Ok(Self {
            models: load_catalogue(path)?,
            source: Some(path.to_path_buf()),
        })
    }

    /// Load the user file if given, else the built-in list. A file that
    /// yields no usable entries falls back to the built-in list.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::builtin());
        };

        let catalogue = Self::from_file(path)?;
        if catalogue.is_empty() {
            tracing::warn!(
                path = %path.display(),
                "catalogue file has no usable models, using built-in catalogue"
            );
            return Ok(Self::builtin());
        }
        Ok(catalogue)
    }

    pub fn models(&self) -> &[ModelDescriptor] {
        &self.models
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn len(&self) -> usize {
        self.models.len()
    }

    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// Find a variant by exact tag
    pub fn find(&self, name: &str) -> Option<&ModelDescriptor> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Variants of one family (case-insensitive)
    pub fn by_family(&self, family: &str) -> Vec<&ModelDescriptor> {
        let family = family.to_lowercase();
        self.models.iter().filter(|m| m.family == family).collect()
    }
}

impl Default for ModelCatalogue {
    fn default() -> Self {
        Self::builtin()
    }
}
