// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! System hardware detection and profiling

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::backend::{select_backend, Backend};
use super::cpu::{detect_simd, CpuInfo};
use super::gpu::{GpuInfo, DEFAULT_TOOL_TIMEOUT};
use super::probe::{CapabilityProbe, HostProbe, MemoryInfo, PlatformInfo};
use super::summary::{summarize, CapacitySummary};
use super::tier::HardwareTier;
use crate::models::quant;
use crate::scoring::estimate_tokens_per_second;

/// Number of quantizations suggested per model size
const MAX_QUANT_SUGGESTIONS: usize = 3;

/// Complete hardware capability snapshot.
///
/// Built once per detection and treated as an immutable value; detect
/// again to refresh it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HardwareProfile {
    pub cpu: CpuInfo,
    pub gpu: GpuInfo,
    pub memory: MemoryInfo,
    pub platform: PlatformInfo,
    pub backend: Backend,
    pub summary: CapacitySummary,
    pub tier: HardwareTier,
    pub detected_at: DateTime<Utc>,
}

impl HardwareProfile {
    /// Assemble a profile from raw signals: select the backend, summarize
    /// its capacity and classify the tier.
    pub fn from_parts(
        cpu: CpuInfo,
        gpu: GpuInfo,
        memory: MemoryInfo,
        platform: PlatformInfo,
    ) -> Self {
        let backend = select_backend(&gpu, &cpu);
        let summary = summarize(&backend, &cpu, &memory);
        let tier = HardwareTier::classify(summary.max_model_size_gb, summary.speed_coefficient);

        Self {
            cpu,
            gpu,
            memory,
            platform,
            backend,
            summary,
            tier,
            detected_at: Utc::now(),
        }
    }

    pub fn max_model_size_gb(&self) -> f64 {
        self.summary.max_model_size_gb
    }

    pub fn speed_coefficient(&self) -> f64 {
        self.summary.speed_coefficient
    }

    /// Estimated generation speed for a model on this hardware
    pub fn estimate_tokens_per_second(&self, params_b: f64, quantization: &str) -> f64 {
        estimate_tokens_per_second(self.speed_coefficient(), params_b, quantization)
    }

    /// Whether a model of this on-disk size fits the budget
    pub fn will_model_fit(&self, size_gb: f64) -> bool {
        size_gb <= self.max_model_size_gb()
    }

    /// Best-quality quantizations whose estimated size fits, at most three.
    /// Falls back to Q4_K_M when nothing fits.
    pub fn recommended_quantizations(&self, params_b: f64) -> Vec<&'static str> {
        let fitting: Vec<&'static str> = quant::quality_order()
            .filter(|label| self.will_model_fit(quant::estimate_size_gb(params_b, label)))
            .take(MAX_QUANT_SUGGESTIONS)
            .collect();

        if fitting.is_empty() {
            vec![quant::DEFAULT_QUANTIZATION]
        } else {
            fitting
        }
    }
}

/// Runs the probes and builds a [`HardwareProfile`]
#[derive(Debug)]
pub struct HardwareDetector<P: CapabilityProbe = HostProbe> {
    probe: P,
    tool_timeout: Duration,
}

impl HardwareDetector<HostProbe> {
    pub fn new() -> Self {
        Self::with_probe(HostProbe::new())
    }
}

impl Default for HardwareDetector<HostProbe> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: CapabilityProbe> HardwareDetector<P> {
    pub fn with_probe(probe: P) -> Self {
        Self {
            probe,
            tool_timeout: DEFAULT_TOOL_TIMEOUT,
        }
    }

    /// Builder: per-tool timeout for vendor diagnostics
    pub fn with_tool_timeout(mut self, timeout: Duration) -> Self {
        self.tool_timeout = timeout;
        self
    }

    /// Detect the hardware profile. Never fails; degraded signals fall back
    /// to conservative defaults.
    pub fn detect(&self) -> HardwareProfile {
        let platform = self.probe.platform();
        let cpu = self.detect_cpu(&platform);
        let gpu = GpuInfo::detect(&self.probe, self.tool_timeout);
        let memory = self.probe.memory();

        let profile = HardwareProfile::from_parts(cpu, gpu, memory, platform);
        tracing::debug!(
            backend = %profile.backend.kind,
            max_model_size_gb = profile.summary.max_model_size_gb,
            speed = profile.summary.speed_coefficient,
            tier = %profile.tier,
            "hardware detected"
        );
        profile
    }

    fn detect_cpu(&self, platform: &PlatformInfo) -> CpuInfo {
        match self.probe.cpu_signals() {
            Some(signals) => {
                let simd = detect_simd(platform, &self.probe);
                CpuInfo::from_signals(signals, simd)
            }
            None => {
                tracing::debug!("CPU query failed, using fallback CPU profile");
                CpuInfo::fallback()
            }
        }
    }
}
