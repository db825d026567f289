// SPDX-License-Identifier: AGPL-3.0-or-later
// Copyright (C) 2025 Blackman Artificial Intelligence Technologies Inc.

//! GPU detection through vendor diagnostic tools
//!
//! Each vendor is probed independently: a missing or hung tool only empties
//! that vendor's slot.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::probe::CapabilityProbe;

pub const NVIDIA_SMI: &str = "nvidia-smi";
pub const NVIDIA_SMI_ARGS: &[&str] = &[
    "--query-gpu=name,memory.total",
    "--format=csv,noheader,nounits",
];
pub const ROCM_SMI: &str = "rocm-smi";
pub const ROCM_SMI_ARGS: &[&str] = &["--showproductname"];

/// Default per-tool timeout
pub const DEFAULT_TOOL_TIMEOUT: Duration = Duration::from_secs(5);

/// NVIDIA product-code substrings and their speed coefficients.
///
/// Ordered by precedence: data-center parts, then RTX 40, 30, 20, GTX 16.
const NVIDIA_SPEED_TABLE: &[(&str, f64)] = &[
    ("h100", 500.0),
    ("a100", 400.0),
    ("v100", 300.0),
    ("4090", 350.0),
    ("4080", 280.0),
    ("4070", 220.0),
    ("4060", 160.0),
    ("3090", 250.0),
    ("3080", 220.0),
    ("3070", 180.0),
    ("3060", 140.0),
    ("2080", 150.0),
    ("2070", 150.0),
    ("2060", 120.0),
    ("1660", 80.0),
    ("1650", 80.0),
];

const NVIDIA_DEFAULT_SPEED: f64 = 100.0;

// rocm-smi gives no usable model/VRAM listing here, so AMD cards are
// reported as one generic device with these estimates.
const AMD_DEVICE_NAME: &str = "AMD GPU";
const AMD_ESTIMATED_VRAM_GB: f64 = 8.0;
const AMD_SPEED: f64 = 150.0;

/// A single accelerator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GpuDevice {
    pub name: String,
    pub vram_gb: f64,
}

/// Accelerators detected for one vendor
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VendorGpu {
    pub devices: Vec<GpuDevice>,
    pub total_vram_gb: f64,
    pub count: usize,
    pub speed_coefficient: f64,
    /// True when VRAM/speed are best-effort estimates rather than reported values
    #[serde(default)]
    pub estimated: bool,
}

impl VendorGpu {
    /// Build a vendor slot from devices, summing their VRAM.
    pub fn new(devices: Vec<GpuDevice>, speed_coefficient: f64) -> Self {
        let total_vram_gb = devices.iter().map(|d| d.vram_gb).sum();
        Self {
            count: devices.len(),
            devices,
            total_vram_gb,
            speed_coefficient,
            estimated: false,
        }
    }

    /// Builder: mark the figures as estimates
    pub fn estimated(mut self) -> Self {
        self.estimated = true;
        self
    }

    /// Name of the first device, which also drives the speed lookup.
    pub fn primary_name(&self) -> Option<&str> {
        self.devices.first().map(|d| d.name.as_str())
    }
}

/// Per-vendor GPU detection result
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GpuInfo {
    pub nvidia: Option<VendorGpu>,
    pub amd: Option<VendorGpu>,
    pub intel: Option<VendorGpu>,
    pub has_gpu: bool,
}

impl GpuInfo {
    pub fn new(
        nvidia: Option<VendorGpu>,
        amd: Option<VendorGpu>,
        intel: Option<VendorGpu>,
    ) -> Self {
        let has_gpu = nvidia.is_some() || amd.is_some() || intel.is_some();
        Self {
            nvidia,
            amd,
            intel,
            has_gpu,
        }
    }

    /// No accelerators at all
    pub fn none() -> Self {
        Self::default()
    }

    /// Probe every vendor in order: NVIDIA, AMD, Intel.
    pub fn detect<P: CapabilityProbe + ?Sized>(probe: &P, timeout: Duration) -> Self {
        let nvidia = detect_nvidia(probe, timeout);
        let amd = detect_amd(probe, timeout);
        let intel = detect_intel(probe, timeout);
        Self::new(nvidia, amd, intel)
    }
}

/// Look up the NVIDIA speed coefficient for a device name.
pub fn nvidia_speed_coefficient(gpu_name: &str) -> f64 {
    let name = gpu_name.to_lowercase();
    NVIDIA_SPEED_TABLE
        .iter()
        .find(|(code, _)| name.contains(code))
        .map(|(_, speed)| *speed)
        .unwrap_or(NVIDIA_DEFAULT_SPEED)
}

/// Parse `nvidia-smi` CSV output (`name, MiB` per line).
///
/// Lines without a numeric memory column are skipped.
pub fn parse_nvidia_smi(output: &str) -> Option<VendorGpu> {
    let devices: Vec<GpuDevice> = output
        .lines()
        .filter_map(|line| {
            let mut parts = line.split(',');
            let name = parts.next()?.trim();
            let vram_mib: f64 = parts.next()?.trim().parse().ok()?;
            if name.is_empty() {
                return None;
            }
            Some(GpuDevice {
                name: name.to_string(),
                vram_gb: vram_mib / 1024.0,
            })
        })
        .collect();

    let speed = nvidia_speed_coefficient(&devices.first()?.name);
    Some(VendorGpu::new(devices, speed))
}

/// Interpret `rocm-smi --showproductname` output.
pub fn parse_rocm_smi(output: &str) -> Option<VendorGpu> {
    if !output.contains("GPU") {
        return None;
    }
    let device = GpuDevice {
        name: AMD_DEVICE_NAME.to_string(),
        vram_gb: AMD_ESTIMATED_VRAM_GB,
    };
    Some(VendorGpu::new(vec![device], AMD_SPEED).estimated())
}

fn detect_nvidia<P: CapabilityProbe + ?Sized>(probe: &P, timeout: Duration) -> Option<VendorGpu> {
    let output = probe.run_tool(NVIDIA_SMI, NVIDIA_SMI_ARGS, timeout)?;
    let gpu = parse_nvidia_smi(&output);
    if let Some(ref gpu) = gpu {
        tracing::debug!(
            "detected {} NVIDIA device(s), {:.1} GB VRAM",
            gpu.count,
            gpu.total_vram_gb
        );
    }
    gpu
}

fn detect_amd<P: CapabilityProbe + ?Sized>(probe: &P, timeout: Duration) -> Option<VendorGpu> {
    let output = probe.run_tool(ROCM_SMI, ROCM_SMI_ARGS, timeout)?;
    parse_rocm_smi(&output)
}

/// Intel accelerators are not probed; the slot is always empty.
fn detect_intel<P: CapabilityProbe + ?Sized>(_probe: &P, _timeout: Duration) -> Option<VendorGpu> {
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hardware::probe::{StaticProbe, ToolResponse};

    #[test]
    fn test_nvidia_speed_table() {
        assert_eq!(nvidia_speed_coefficient("NVIDIA H100 PCIe"), 500.0);
        assert_eq!(nvidia_speed_coefficient("NVIDIA A100-SXM4-80GB"), 400.0);
        assert_eq!(nvidia_speed_coefficient("Tesla V100-PCIE-16GB"), 300.0);
        assert_eq!(nvidia_speed_coefficient("NVIDIA GeForce RTX 4090"), 350.0);
        assert_eq!(nvidia_speed_coefficient("NVIDIA GeForce RTX 3080 Ti"), 220.0);
        assert_eq!(nvidia_speed_coefficient("NVIDIA GeForce RTX 2070 SUPER"), 150.0);
        assert_eq!(nvidia_speed_coefficient("NVIDIA GeForce GTX 1650"), 80.0);
        assert_eq!(nvidia_speed_coefficient("Quadro P4000"), 100.0);
    }

    #[test]
    fn test_parse_nvidia_single() {
        let gpu = parse_nvidia_smi("NVIDIA GeForce RTX 4090, 24564\n").unwrap();
        assert_eq!(gpu.count, 1);
        assert_eq!(gpu.devices[0].name, "NVIDIA GeForce RTX 4090");
        assert!((gpu.total_vram_gb - 24564.0 / 1024.0).abs() < 1e-9);
        assert_eq!(gpu.speed_coefficient, 350.0);
        assert!(!gpu.estimated);
    }

    #[test]
    fn test_parse_nvidia_multi_uses_first_name() {
        let out = "NVIDIA GeForce RTX 3060, 12288\nNVIDIA GeForce RTX 4090, 24576\n";
        let gpu = parse_nvidia_smi(out).unwrap();
        assert_eq!(gpu.count, 2);
        assert!((gpu.total_vram_gb - 36.0).abs() < 1e-9);
        assert_eq!(gpu.speed_coefficient, 140.0);
        assert_eq!(gpu.primary_name(), Some("NVIDIA GeForce RTX 3060"));
    }

    #[test]
    fn test_parse_nvidia_skips_malformed() {
        let out = "garbage\nNVIDIA A100, [N/A]\nNVIDIA A100, 81920\n";
        let gpu = parse_nvidia_smi(out).unwrap();
        assert_eq!(gpu.count, 1);
        assert!((gpu.total_vram_gb - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_parse_nvidia_empty() {
        assert!(parse_nvidia_smi("").is_none());
        assert!(parse_nvidia_smi("No devices were found").is_none());
    }

    #[test]
    fn test_parse_rocm() {
        let out = "GPU[0]\t\t: Card series:\t\tNavi 31 [Radeon RX 7900 XTX]\n";
        let gpu = parse_rocm_smi(out).unwrap();
        assert_eq!(gpu.count, 1);
        assert_eq!(gpu.devices[0].name, "AMD GPU");
        assert_eq!(gpu.total_vram_gb, 8.0);
        assert_eq!(gpu.speed_coefficient, 150.0);
        assert!(gpu.estimated);

        assert!(parse_rocm_smi("ERROR: no devices").is_none());
    }

    #[test]
    fn test_gpu_info_has_gpu() {
        assert!(!GpuInfo::none().has_gpu);
        let amd = parse_rocm_smi("GPU[0]");
        assert!(GpuInfo::new(None, amd, None).has_gpu);
    }

    #[test]
    fn test_detect_probes_are_independent() {
        let probe = StaticProbe::new()
            .with_tool(NVIDIA_SMI, ToolResponse::TimedOut)
            .with_tool(ROCM_SMI, ToolResponse::Output("GPU[0] : Radeon".to_string()));
        let gpu = GpuInfo::detect(&probe, DEFAULT_TOOL_TIMEOUT);
        assert!(gpu.nvidia.is_none());
        assert!(gpu.amd.is_some());
        assert!(gpu.intel.is_none());
        assert!(gpu.has_gpu);
        assert_eq!(probe.invoked_tools(), vec![NVIDIA_SMI, ROCM_SMI]);
    }

    #[test]
    fn test_detect_nothing_installed() {
        let probe = StaticProbe::new();
        let gpu = GpuInfo::detect(&probe, DEFAULT_TOOL_TIMEOUT);
        assert_eq!(gpu, GpuInfo::none());
    }

    #[test]
    fn test_detect_failed_nvidia_does_not_block_amd() {
        let probe = StaticProbe::new()
            .with_tool(NVIDIA_SMI, ToolResponse::Failed)
            .with_tool(ROCM_SMI, ToolResponse::Output("GPU[0]".to_string()));
        let gpu = GpuInfo::detect(&probe, DEFAULT_TOOL_TIMEOUT);
        assert!(gpu.nvidia.is_none());
        assert!(gpu.amd.is_some());
    }
}
