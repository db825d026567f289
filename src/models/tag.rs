// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Variant tag parsing
//!
//! Turns an Ollama-style tag such as `llama3.1:8b-instruct-q4_k_m` into a
//! [`ModelDescriptor`]. Fields the tag does not carry are approximated:
//! size from parameters and quantization, context from the family.

use std::sync::LazyLock;

use regex::Regex;

use super::quant::{estimate_size_gb, DEFAULT_QUANTIZATION};
use super::schema::ModelDescriptor;
use crate::error::{CheckerError, Result};

const DEFAULT_PARAMS_B: f64 = 7.0;
const DEFAULT_CONTEXT: u32 = 8192;

static PARAMS_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)(\d+(?:\.\d+)?)\s*b").unwrap());

/// Quantization patterns, most specific first.
static QUANT_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"(?i)q\d+_k_m",
        r"(?i)q\d+_k_s",
        r"(?i)q\d+_k_l",
        r"(?i)q\d+_k",
        r"(?i)q\d+_0",
        r"(?i)fp16",
        r"(?i)f16",
        r"(?i)iq\d+_\w+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

/// Family name and the pattern that identifies it in a base name, checked in order.
static FAMILY_PATTERNS: LazyLock<Vec<(&'static str, Regex)>> = LazyLock::new(|| {
    [
        ("qwen2.5-coder", r"(?i)qwen2\.5-coder"),
        ("qwen2.5", r"(?i)qwen2\.5"),
        ("qwen2", r"(?i)qwen2"),
        ("llama3.3", r"(?i)llama3\.3"),
        ("llama3.2", r"(?i)llama3\.2"),
        ("llama3.1", r"(?i)llama3\.1"),
        ("llama3", r"(?i)llama3"),
        ("deepseek-r1", r"(?i)deepseek-r1"),
        ("deepseek-coder-v2", r"(?i)deepseek-coder-v2"),
        ("deepseek-coder", r"(?i)deepseek-coder"),
        ("phi-4", r"(?i)phi-?4"),
        ("phi-3.5", r"(?i)phi-?3\.5"),
        ("phi-3", r"(?i)phi-?3"),
        ("gemma2", r"(?i)gemma2"),
        ("mistral", r"(?i)mistral"),
        ("mixtral", r"(?i)mixtral"),
        ("codellama", r"(?i)codellama"),
    ]
    .iter()
    .map(|(family, p)| (*family, Regex::new(p).unwrap()))
    .collect()
});

/// Default context window per family.
const FAMILY_CONTEXT: &[(&str, u32)] = &[
    ("qwen2.5-coder", 32768),
    ("qwen2.5", 128000),
    ("llama3.3", 128000),
    ("llama3.2", 131072),
    ("llama3.1", 131072),
    ("deepseek-r1", 32768),
    ("deepseek-coder-v2", 131072),
    ("phi-4", 16384),
    ("gemma2", 8192),
    ("mistral", 32768),
];

/// Extract the parameter count in billions (defaults to 7).
pub fn parse_params(variant: &str) -> f64 {
    PARAMS_PATTERN
        .captures(variant)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(DEFAULT_PARAMS_B)
}

/// Extract the quantization label, upper-cased (defaults to Q4_K_M).
pub fn parse_quantization(variant: &str) -> String {
    QUANT_PATTERNS
        .iter()
        .find_map(|re| re.find(variant))
        .map(|m| m.as_str().to_uppercase())
        .unwrap_or_else(|| DEFAULT_QUANTIZATION.to_string())
}

/// Map a base name onto a known family, else its first `-` segment.
pub fn family_for(base_name: &str) -> String {
    FAMILY_PATTERNS
        .iter()
        .find(|(_, re)| re.is_match(base_name))
        .map(|(family, _)| family.to_string())
        .unwrap_or_else(|| {
            base_name
                .split('-')
                .next()
                .unwrap_or(base_name)
                .to_lowercase()
        })
}

/// Default context window for a family.
pub fn default_context(family: &str) -> u32 {
    FAMILY_CONTEXT
        .iter()
        .find(|(name, _)| *name == family)
        .map(|(_, ctx)| *ctx)
        .unwrap_or(DEFAULT_CONTEXT)
}

impl ModelDescriptor {
    /// Build a descriptor from a `base:variant` tag.
    ///
    /// `size_gb` is estimated from parameters and quantization when `None`.
    pub fn from_tag(tag: &str, size_gb: Option<f64>) -> Result<Self> {
        let (base, variant) = match tag.split(':').collect::<Vec<_>>().as_slice() {
            [base, variant] if !base.is_empty() => (*base, *variant),
            _ => return Err(CheckerError::InvalidTag(tag.to_string())),
        };

        let params_b = parse_params(variant);
        let quantization = parse_quantization(variant);
        let size_gb = size_gb.unwrap_or_else(|| estimate_size_gb(params_b, &quantization));
        let family = family_for(base);
        let context_length = default_context(&family);

        let descriptor = ModelDescriptor::new(
            tag,
            family,
            params_b,
            (size_gb * 10.0).round() / 10.0,
            quantization,
            context_length,
        );
        descriptor.validate()?;
        Ok(descriptor)
    }
}
