// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Hardware tier classification

use serde::{Deserialize, Serialize};

/// Coarse capability class derived from model budget and speed
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HardwareTier {
    #[serde(rename = "ULTRA LOW")]
    UltraLow,
    #[serde(rename = "LOW")]
    Low,
    #[serde(rename = "MEDIUM LOW")]
    MediumLow,
    #[serde(rename = "MEDIUM")]
    Medium,
    #[serde(rename = "MEDIUM HIGH")]
    MediumHigh,
    #[serde(rename = "HIGH")]
    High,
    #[serde(rename = "VERY HIGH")]
    VeryHigh,
    #[serde(rename = "ULTRA HIGH")]
    UltraHigh,
}

/// (tier, minimum model budget in GB, minimum speed coefficient), checked top-down.
const TIER_LADDER: &[(HardwareTier, f64, f64)] = &[
    (HardwareTier::UltraHigh, 80.0, 300.0),
    (HardwareTier::VeryHigh, 48.0, 200.0),
    (HardwareTier::High, 24.0, 150.0),
    (HardwareTier::MediumHigh, 16.0, 100.0),
    (HardwareTier::Medium, 12.0, 80.0),
    (HardwareTier::MediumLow, 8.0, 50.0),
    (HardwareTier::Low, 6.0, 30.0),
];

impl HardwareTier {
    /// Classify a machine. The first rung whose size and speed minimums
    /// both hold wins; otherwise [`HardwareTier::UltraLow`].
    pub fn classify(max_model_size_gb: f64, speed_coefficient: f64) -> Self {
        TIER_LADDER
            .iter()
            .find(|(_, min_size, min_speed)| {
                max_model_size_gb >= *min_size && speed_coefficient >= *min_speed
            })
            .map(|(tier, _, _)| *tier)
            .unwrap_or(HardwareTier::UltraLow)
    }

    /// Upper-case label, as shown to users
    pub fn label(&self) -> &'static str {
        match self {
            HardwareTier::UltraLow => "ULTRA LOW",
            HardwareTier::Low => "LOW",
            HardwareTier::MediumLow => "MEDIUM LOW",
            HardwareTier::Medium => "MEDIUM",
            HardwareTier::MediumHigh => "MEDIUM HIGH",
            HardwareTier::High => "HIGH",
            HardwareTier::VeryHigh => "VERY HIGH",
            HardwareTier::UltraHigh => "ULTRA HIGH",
        }
    }

    /// Get a human-readable description of this tier
    pub fn description(&self) -> &'static str {
        match self {
            HardwareTier::UltraLow => "Tiny models only (under 3B parameters)",
            HardwareTier::Low => "Small models (3B, light 7B quantizations)",
            HardwareTier::MediumLow => "7B-8B models at moderate speed",
            HardwareTier::Medium => "7B-14B models comfortably",
            HardwareTier::MediumHigh => "14B models at good speed",
            HardwareTier::High => "Up to 32B models on a fast GPU",
            HardwareTier::VeryHigh => "70B-class models with heavy quantization",
            HardwareTier::UltraHigh => "Data-center class: 70B+ models at high precision",
        }
    }

    /// All tiers, lowest first
    pub fn all() -> [HardwareTier; 8] {
        [
            HardwareTier::UltraLow,
            HardwareTier::Low,
            HardwareTier::MediumLow,
            HardwareTier::Medium,
            HardwareTier::MediumHigh,
            HardwareTier::High,
            HardwareTier::VeryHigh,
            HardwareTier::UltraHigh,
        ]
    }
}

impl std::fmt::Display for HardwareTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // ===== classify tests =====

    #[test]
    fn test_classify_exact_thresholds() {
        assert_eq!(HardwareTier::classify(80.0, 300.0), HardwareTier::UltraHigh);
        assert_eq!(HardwareTier::classify(48.0, 200.0), HardwareTier::VeryHigh);
        assert_eq!(HardwareTier::classify(24.0, 150.0), HardwareTier::High);
        assert_eq!(HardwareTier::classify(16.0, 100.0), HardwareTier::MediumHigh);
        assert_eq!(HardwareTier::classify(12.0, 80.0), HardwareTier::Medium);
        assert_eq!(HardwareTier::classify(8.0, 50.0), HardwareTier::MediumLow);
        assert_eq!(HardwareTier::classify(6.0, 30.0), HardwareTier::Low);
        assert_eq!(HardwareTier::classify(5.9, 1000.0), HardwareTier::UltraLow);
    }

    #[test]
    fn test_classify_needs_both_conditions() {
        // Huge budget, slow CPU
        assert_eq!(HardwareTier::classify(200.0, 40.0), HardwareTier::Low);
        // Fast GPU, small budget
        assert_eq!(HardwareTier::classify(10.0, 500.0), HardwareTier::MediumLow);
        assert_eq!(HardwareTier::classify(0.0, 0.0), HardwareTier::UltraLow);
    }

    #[test]
    fn test_classify_cpu_only_desktop() {
        // 32 GB RAM, 8 cores, AVX2
        assert_eq!(HardwareTier::classify(22.4, 40.0), HardwareTier::Low);
    }

    #[test]
    fn test_classify_rtx_4090() {
        // 24 GB VRAM minus headroom
        assert_eq!(HardwareTier::classify(22.0, 350.0), HardwareTier::MediumHigh);
    }

    #[test]
    fn test_classify_is_deterministic() {
        for _ in 0..3 {
            assert_eq!(HardwareTier::classify(30.0, 220.0), HardwareTier::High);
        }
    }

    // ===== Display tests =====

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", HardwareTier::UltraLow), "ULTRA LOW");
        assert_eq!(format!("{}", HardwareTier::MediumHigh), "MEDIUM HIGH");
        assert_eq!(format!("{}", HardwareTier::UltraHigh), "ULTRA HIGH");
    }

    #[test]
    fn test_description() {
        for tier in HardwareTier::all() {
            assert!(!tier.description().is_empty());
        }
    }

    // ===== Serialization tests =====

    #[test]
    fn test_serializes_as_label() {
        let json = serde_json::to_string(&HardwareTier::VeryHigh).unwrap();
        assert_eq!(json, "\"VERY HIGH\"");
        let parsed: HardwareTier = serde_json::from_str("\"MEDIUM LOW\"").unwrap();
        assert_eq!(parsed, HardwareTier::MediumLow);
    }

    // ===== Tier ordering tests =====

    #[test]
    fn test_tiers_are_ordered() {
        let tiers = HardwareTier::all();
        for i in 1..tiers.len() {
            assert!(tiers[i] > tiers[i - 1]);
        }
    }

    #[test]
    fn test_classify_monotonic_in_resources() {
        let mut last = HardwareTier::UltraLow;
        for step in 0..=100 {
            let size = step as f64;
            let speed = step as f64 * 4.0;
            let tier = HardwareTier::classify(size, speed);
            assert!(tier >= last, "tier dropped at size={} speed={}", size, speed);
            last = tier;
        }
    }
}
