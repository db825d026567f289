// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! CPU capability and speed estimation

use serde::{Deserialize, Serialize};

use super::probe::{CapabilityProbe, CpuSignals, PlatformInfo};

/// Base speed coefficient every CPU starts from; also the fallback value.
pub const CPU_BASE_SPEED: f64 = 10.0;

/// Physical core thresholds and their additive speed bonus, highest first.
const CORE_BONUSES: &[(usize, f64)] = &[(16, 20.0), (12, 15.0), (8, 10.0), (6, 5.0)];

/// Feature-flag substrings checked in priority order.
const FEATURE_PRIORITY: &[(&str, SimdTier)] = &[
    ("avx512", SimdTier::Avx512),
    ("avx2", SimdTier::Avx2),
    ("avx", SimdTier::Avx),
    ("sse4", SimdTier::Sse4),
];

/// Richest SIMD instruction set detected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimdTier {
    #[serde(rename = "NEON")]
    Neon,
    #[serde(rename = "AVX-512")]
    Avx512,
    #[serde(rename = "AVX2")]
    Avx2,
    #[serde(rename = "AVX")]
    Avx,
    #[serde(rename = "SSE4")]
    Sse4,
    Unknown,
}

impl SimdTier {
    pub fn label(&self) -> &'static str {
        match self {
            SimdTier::Neon => "NEON",
            SimdTier::Avx512 => "AVX-512",
            SimdTier::Avx2 => "AVX2",
            SimdTier::Avx => "AVX",
            SimdTier::Sse4 => "SSE4",
            SimdTier::Unknown => "Unknown",
        }
    }

    /// Additive contribution to the CPU speed coefficient
    pub fn speed_bonus(&self) -> f64 {
        match self {
            SimdTier::Avx512 => 30.0,
            SimdTier::Avx2 => 20.0,
            SimdTier::Avx => 10.0,
            SimdTier::Neon => 15.0,
            SimdTier::Sse4 | SimdTier::Unknown => 0.0,
        }
    }

    /// Pick the richest instruction set named in a CPU feature dump.
    pub fn from_feature_text(text: &str) -> Self {
        FEATURE_PRIORITY
            .iter()
            .find(|(flag, _)| text.contains(flag))
            .map(|(_, tier)| *tier)
            .unwrap_or(SimdTier::Unknown)
    }
}

impl std::fmt::Display for SimdTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Detect the SIMD tier for a platform.
///
/// ARM is always NEON. Windows has no reliable query so AVX2 is assumed.
/// Linux reads the kernel feature text; everything else is Unknown.
pub fn detect_simd<P: CapabilityProbe + ?Sized>(platform: &PlatformInfo, probe: &P) -> SimdTier {
    let machine = platform.machine.to_lowercase();
    if machine.contains("arm") || machine.contains("aarch64") {
        return SimdTier::Neon;
    }

    if platform.is_windows() {
        return SimdTier::Avx2;
    }

    if platform.is_linux() {
        return match probe.cpu_feature_text() {
            Some(text) => SimdTier::from_feature_text(&text),
            None => {
                tracing::debug!("CPU feature text unreadable, SIMD tier unknown");
                SimdTier::Unknown
            }
        };
    }

    SimdTier::Unknown
}

/// Estimate the CPU inference speed coefficient.
///
/// Core and SIMD bonuses are additive on top of [`CPU_BASE_SPEED`].
pub fn cpu_speed_coefficient(physical_cores: usize, simd: SimdTier) -> f64 {
    let core_bonus = CORE_BONUSES
        .iter()
        .find(|(min_cores, _)| physical_cores >= *min_cores)
        .map(|(_, bonus)| *bonus)
        .unwrap_or(0.0);

    CPU_BASE_SPEED + core_bonus + simd.speed_bonus()
}

/// Detected CPU capabilities
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CpuInfo {
    pub brand: String,
    pub physical_cores: usize,
    pub logical_cores: usize,
    pub frequency_mhz: u64,
    pub simd: SimdTier,
    pub speed_coefficient: f64,
}

impl CpuInfo {
    /// Build CPU info from OS signals and a detected SIMD tier.
    pub fn from_signals(signals: CpuSignals, simd: SimdTier) -> Self {
        let physical_cores = signals.physical_cores.max(1);
        Self {
            brand: signals.brand,
            physical_cores,
            logical_cores: signals.logical_cores.max(1),
            frequency_mhz: signals.frequency_mhz,
            simd,
            speed_coefficient: cpu_speed_coefficient(physical_cores, simd),
        }
    }

    /// Values used when the OS query fails
    pub fn fallback() -> Self {
        Self {
            brand: "Unknown".to_string(),
            physical_cores: 1,
            logical_cores: 1,
            frequency_mhz: 0,
            simd: SimdTier::Unknown,
            speed_coefficient: CPU_BASE_SPEED,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::probe::StaticProbe;

    fn platform(system: &str, machine: &str) -> PlatformInfo {
        PlatformInfo {
            system: system.to_string(),
            release: "test".to_string(),
            machine: machine.to_string(),
        }
    }

    #[test]
    fn test_feature_text_priority() {
        assert_eq!(
            SimdTier::from_feature_text("flags: sse4_2 avx avx2 avx512f"),
            SimdTier::Avx512
        );
        assert_eq!(
            SimdTier::from_feature_text("flags: sse4_2 avx avx2"),
            SimdTier::Avx2
        );
        assert_eq!(SimdTier::from_feature_text("flags: sse4_2 avx"), SimdTier::Avx);
        assert_eq!(SimdTier::from_feature_text("flags: sse4_1"), SimdTier::Sse4);
        assert_eq!(SimdTier::from_feature_text("flags: fpu mmx"), SimdTier::Unknown);
    }

    #[test]
    fn test_detect_simd_arm_is_neon() {
        let probe = StaticProbe::new().with_feature_text(Some("avx512f"));
        assert_eq!(detect_simd(&platform("Linux", "aarch64"), &probe), SimdTier::Neon);
        assert_eq!(detect_simd(&platform("Darwin", "arm64"), &probe), SimdTier::Neon);
    }

    #[test]
    fn test_detect_simd_windows_assumes_avx2() {
        let probe = StaticProbe::new().with_feature_text(None);
        assert_eq!(detect_simd(&platform("Windows", "AMD64"), &probe), SimdTier::Avx2);
    }

    #[test]
    fn test_detect_simd_linux_reads_features() {
        let probe = StaticProbe::new().with_feature_text(Some("flags: avx512bw avx2"));
        assert_eq!(detect_simd(&platform("Linux", "x86_64"), &probe), SimdTier::Avx512);
    }

    #[test]
    fn test_detect_simd_linux_read_failure() {
        let probe = StaticProbe::new().with_feature_text(None);
        assert_eq!(detect_simd(&platform("Linux", "x86_64"), &probe), SimdTier::Unknown);
    }

    #[test]
    fn test_detect_simd_other_os_unknown() {
        let probe = StaticProbe::new().with_feature_text(Some("avx2"));
        assert_eq!(detect_simd(&platform("Darwin", "x86_64"), &probe), SimdTier::Unknown);
    }

    #[test]
    fn test_cpu_speed_coefficient() {
        assert_eq!(cpu_speed_coefficient(4, SimdTier::Unknown), 10.0);
        assert_eq!(cpu_speed_coefficient(6, SimdTier::Sse4), 15.0);
        assert_eq!(cpu_speed_coefficient(8, SimdTier::Avx2), 40.0);
        assert_eq!(cpu_speed_coefficient(12, SimdTier::Avx), 35.0);
        assert_eq!(cpu_speed_coefficient(16, SimdTier::Avx512), 60.0);
        assert_eq!(cpu_speed_coefficient(64, SimdTier::Neon), 45.0);
    }

    #[test]
    fn test_cpu_fallback() {
        let cpu = CpuInfo::fallback();
        assert_eq!(cpu.brand, "Unknown");
        assert_eq!(cpu.physical_cores, 1);
        assert_eq!(cpu.logical_cores, 1);
        assert_eq!(cpu.frequency_mhz, 0);
        assert_eq!(cpu.simd, SimdTier::Unknown);
        assert_eq!(cpu.speed_coefficient, 10.0);
    }

    #[test]
    fn test_from_signals_clamps_zero_cores() {
        let cpu = CpuInfo::from_signals(
            CpuSignals {
                brand: "Odd".to_string(),
                physical_cores: 0,
                logical_cores: 0,
                frequency_mhz: 1000,
            },
            SimdTier::Unknown,
        );
        assert_eq!(cpu.physical_cores, 1);
        assert_eq!(cpu.logical_cores, 1);
    }

    #[test]
    fn test_simd_serialization_labels() {
        assert_eq!(serde_json::to_string(&SimdTier::Avx512).unwrap(), "\"AVX-512\"");
        assert_eq!(serde_json::to_string(&SimdTier::Neon).unwrap(), "\"NEON\"");
        assert_eq!(SimdTier::Sse4.to_string(), "SSE4");
    }
}
