// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Quantization lookup tables
//!
//! Heavier quantization shrinks a model and speeds it up at the cost of
//! quality. Labels are matched exactly (upper-case GGUF names).

/// Fallback label when a tag names no quantization
pub const DEFAULT_QUANTIZATION: &str = "Q4_K_M";

/// Throughput multiplier relative to Q6_K.
const SPEED_MULTIPLIERS: &[(&str, f64)] = &[
    ("FP16", 0.6),
    ("Q8_0", 0.85),
    ("Q6_K", 1.0),
    ("Q5_K_M", 1.1),
    ("Q4_K_M", 1.3),
    ("Q4_0", 1.35),
    ("Q3_K_M", 1.5),
    ("Q2_K", 1.7),
];

/// Quality points subtracted from a family's base score.
const QUALITY_PENALTIES: &[(&str, f64)] = &[
    ("FP16", 0.0),
    ("F16", 0.0),
    ("Q8_0", 2.0),
    ("Q6_K", 4.0),
    ("Q5_K_M", 6.0),
    ("Q5_K_S", 7.0),
    ("Q5_0", 8.0),
    ("Q4_K_M", 10.0),
    ("Q4_K_S", 11.0),
    ("Q4_0", 12.0),
    ("Q3_K_M", 16.0),
    ("Q3_K_S", 18.0),
    ("Q3_K_L", 15.0),
    ("IQ4_XS", 11.0),
    ("IQ4_NL", 10.0),
    ("IQ3_XXS", 20.0),
    ("IQ3_XS", 18.0),
    ("IQ3_S", 17.0),
    ("IQ2_XS", 25.0),
    ("IQ2_XXS", 28.0),
    ("Q2_K", 22.0),
    ("Q2_K_S", 24.0),
];

/// Approximate on-disk GB per billion parameters, in descending quality order.
const SIZE_PER_BILLION: &[(&str, f64)] = &[
    ("FP16", 2.0),
    ("Q8_0", 1.1),
    ("Q6_K", 0.85),
    ("Q5_K_M", 0.75),
    ("Q4_K_M", 0.65),
    ("Q4_0", 0.55),
    ("Q3_K_M", 0.45),
    ("Q2_K", 0.35),
];

const DEFAULT_SPEED_MULTIPLIER: f64 = 1.0;
const DEFAULT_QUALITY_PENALTY: f64 = 10.0;

fn lookup(table: &[(&str, f64)], quant: &str) -> Option<f64> {
    table
        .iter()
        .find(|(label, _)| *label == quant)
        .map(|(_, value)| *value)
}

pub fn speed_multiplier(quant: &str) -> f64 {
    lookup(SPEED_MULTIPLIERS, quant).unwrap_or(DEFAULT_SPEED_MULTIPLIER)
}

pub fn quality_penalty(quant: &str) -> f64 {
    lookup(QUALITY_PENALTIES, quant).unwrap_or(DEFAULT_QUALITY_PENALTY)
}

/// Estimated on-disk size in GB. `F16` is treated as `FP16`; unknown
/// labels are sized like Q4_K_M.
pub fn estimate_size_gb(params_b: f64, quant: &str) -> f64 {
    let label = if quant == "F16" { "FP16" } else { quant };
    let per_billion = lookup(SIZE_PER_BILLION, label)
        .or_else(|| lookup(SIZE_PER_BILLION, DEFAULT_QUANTIZATION))
        .unwrap_or(0.65);
    params_b * per_billion
}

/// Quantizations with a size estimate, best quality first.
pub fn quality_order() -> impl Iterator<Item = &'static str> {
    SIZE_PER_BILLION.iter().map(|(label, _)| *label)
}
