// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! Compute backend selection

use serde::{Deserialize, Serialize};

use super::cpu::CpuInfo;
use super::gpu::{GpuInfo, VendorGpu};

/// Compute target that will run inference
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackendKind {
    Cuda,
    Rocm,
    Intel,
    Cpu,
}

impl BackendKind {
    pub fn is_gpu(&self) -> bool {
        !matches!(self, BackendKind::Cpu)
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            BackendKind::Cuda => "NVIDIA CUDA",
            BackendKind::Rocm => "AMD ROCm",
            BackendKind::Intel => "Intel Arc",
            BackendKind::Cpu => "CPU",
        }
    }
}

impl std::fmt::Display for BackendKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendKind::Cuda => write!(f, "cuda"),
            BackendKind::Rocm => write!(f, "rocm"),
            BackendKind::Intel => write!(f, "intel"),
            BackendKind::Cpu => write!(f, "cpu"),
        }
    }
}

/// The single selected backend
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Backend {
    pub kind: BackendKind,
    pub name: String,
    pub gpu_name: Option<String>,
    pub vram_gb: f64,
    /// Speed coefficient of the selected source, never blended
    pub speed: f64,
}

impl Backend {
    fn from_vendor(kind: BackendKind, gpu: &VendorGpu) -> Self {
        Self {
            kind,
            name: kind.display_name().to_string(),
            gpu_name: gpu.primary_name().map(str::to_string),
            vram_gb: gpu.total_vram_gb,
            speed: gpu.speed_coefficient,
        }
    }

    fn cpu(cpu: &CpuInfo) -> Self {
        Self {
            kind: BackendKind::Cpu,
            name: BackendKind::Cpu.display_name().to_string(),
            gpu_name: None,
            vram_gb: 0.0,
            speed: cpu.speed_coefficient,
        }
    }
}

/// Pick the backend with strict priority NVIDIA > AMD > Intel > CPU.
pub fn select_backend(gpu: &GpuInfo, cpu: &CpuInfo) -> Backend {
    let candidates = [
        (BackendKind::Cuda, gpu.nvidia.as_ref()),
        (BackendKind::Rocm, gpu.amd.as_ref()),
        (BackendKind::Intel, gpu.intel.as_ref()),
    ];

    candidates
        .into_iter()
        .find_map(|(kind, vendor)| vendor.map(|v| Backend::from_vendor(kind, v)))
        .unwrap_or_else(|| Backend::cpu(cpu))
}
