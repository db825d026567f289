// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Effective capacity of the selected backend

use serde::{Deserialize, Serialize};

use super::backend::{Backend, BackendKind};
use super::cpu::CpuInfo;
use super::probe::MemoryInfo;

/// VRAM kept free for the runtime on GPU backends
pub const GPU_HEADROOM_GB: f64 = 2.0;

/// Share of system RAM a CPU backend may use for model weights
pub const CPU_RAM_SHARE: f64 = 0.7;

/// Capacity numbers every model is measured against
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapacitySummary {
    pub backend_kind: BackendKind,
    pub backend_name: String,
    /// Largest model (on-disk GB) that can be loaded
    pub max_model_size_gb: f64,
    pub speed_coefficient: f64,
    pub total_ram_gb: f64,
    pub description: String,
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Headroom-adjusted loadable size for a backend.
pub fn effective_model_budget(backend: &Backend, memory: &MemoryInfo) -> f64 {
    let budget = if backend.kind.is_gpu() {
        (backend.vram_gb - GPU_HEADROOM_GB).max(0.0)
    } else {
        memory.total_gb * CPU_RAM_SHARE
    };
    round1(budget)
}

/// Human-readable one-line hardware description.
pub fn describe(backend: &Backend, cpu: &CpuInfo, memory: &MemoryInfo) -> String {
    if backend.kind.is_gpu() {
        format!(
            "{} ({:.0}GB VRAM) + {} cores",
            backend.gpu_name.as_deref().unwrap_or(&backend.name),
            backend.vram_gb,
            cpu.physical_cores
        )
    } else {
        format!(
            "{} ({} cores, {:.0}GB RAM)",
            cpu.brand, cpu.physical_cores, memory.total_gb
        )
    }
}

/// Summarize the selected backend into a capacity budget and speed.
pub fn summarize(backend: &Backend, cpu: &CpuInfo, memory: &MemoryInfo) -> CapacitySummary {
    CapacitySummary {
        backend_kind: backend.kind,
        backend_name: backend.name.clone(),
        max_model_size_gb: effective_model_budget(backend, memory),
        speed_coefficient: backend.speed,
        total_ram_gb: round1(memory.total_gb),
        description: describe(backend, cpu, memory),
    }
}
