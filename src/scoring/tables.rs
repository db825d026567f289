// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Static scoring tables
//!
//! Family base quality and per-use-case family bonuses. Quantization
//! tables live in [`crate::models::quant`].

use super::use_case::UseCase;

pub const DEFAULT_FAMILY_QUALITY: f64 = 70.0;

/// Base quality (0-100) per lower-case family name.
pub const FAMILY_QUALITY: &[(&str, f64)] = &[
    // Frontier and general purpose
    ("qwen2.5", 95.0),
    ("qwen2", 90.0),
    ("llama3.3", 95.0),
    ("llama3.2", 92.0),
    ("llama3.1", 90.0),
    ("llama3", 88.0),
    ("deepseek-v3", 96.0),
    ("deepseek-v2.5", 94.0),
    ("deepseek-coder-v2", 92.0),
    ("deepseek-r1", 96.0),
    ("gemma2", 90.0),
    ("gemma", 82.0),
    ("phi-4", 92.0),
    ("phi-3.5", 88.0),
    ("phi-3", 85.0),
    ("phi-2", 75.0),
    ("mistral-large", 94.0),
    ("mistral", 85.0),
    ("mixtral", 88.0),
    ("command-r", 90.0),
    ("command-r-plus", 93.0),
    // Coding
    ("qwen2.5-coder", 96.0),
    ("codellama", 82.0),
    ("starcoder2", 85.0),
    ("deepseek-coder", 88.0),
    ("codegemma", 80.0),
    ("granite-code", 78.0),
    // Chat and instruct tunes
    ("yi", 85.0),
    ("yi-coder", 88.0),
    ("openchat", 78.0),
    ("neural-chat", 75.0),
    ("zephyr", 80.0),
    ("openhermes", 82.0),
    ("nous-hermes", 82.0),
    ("dolphin", 80.0),
    ("orca", 78.0),
    // Vision
    ("llava", 82.0),
    ("llava-llama3", 85.0),
    ("llava-phi3", 80.0),
    ("bakllava", 78.0),
    ("moondream", 75.0),
    // Other
    ("solar", 82.0),
    ("falcon", 75.0),
    ("vicuna", 72.0),
    ("wizardlm", 78.0),
    ("aya", 85.0),
    ("smollm", 70.0),
    ("tinyllama", 65.0),
];

const CODING_BONUSES: &[(&str, f64)] = &[
    ("qwen2.5-coder", 15.0),
    ("deepseek-coder", 12.0),
    ("deepseek-coder-v2", 15.0),
    ("codellama", 10.0),
    ("starcoder2", 12.0),
    ("codegemma", 8.0),
    ("yi-coder", 10.0),
    ("granite-code", 8.0),
];

const REASONING_BONUSES: &[(&str, f64)] = &[
    ("deepseek-r1", 15.0),
    ("qwen2.5", 10.0),
    ("llama3.3", 10.0),
    ("phi-4", 12.0),
    ("command-r-plus", 10.0),
    ("mistral-large", 10.0),
];

const CHAT_BONUSES: &[(&str, f64)] = &[
    ("llama3.2", 10.0),
    ("mistral", 8.0),
    ("gemma2", 8.0),
    ("openchat", 10.0),
    ("neural-chat", 8.0),
    ("dolphin", 8.0),
];

/// Family bonuses per use case; use cases not listed get none.
pub const TASK_BONUSES: &[(UseCase, &[(&str, f64)])] = &[
    (UseCase::Coding, CODING_BONUSES),
    (UseCase::Reasoning, REASONING_BONUSES),
    (UseCase::Chat, CHAT_BONUSES),
];

pub(crate) fn lookup(table: &[(&str, f64)], key: &str) -> Option<f64> {
    table.iter().find(|(k, _)| *k == key).map(|(_, v)| *v)
}
